//! Tree mutation - attach and detach with the single-parent invariant.
//!
//! The scene graph is a strict tree: a component has at most one parent at
//! any time, children are kept in insertion order, and cycles are rejected
//! at the attach boundary so traversal always terminates.

use super::{arrays::core, registry};
use crate::error::{Error, Result};
use crate::types::ComponentId;

/// Attach `child` at the end of `parent`'s child sequence.
///
/// If the child is already attached elsewhere (or earlier in the same
/// container) it is detached first, so it ends up exactly once, last.
///
/// Fails when:
/// - either handle is no longer allocated
/// - `parent` is a leaf kind
/// - `child` is a Window (windows are roots)
/// - the attachment would make `child` its own ancestor
pub fn attach(parent: ComponentId, child: ComponentId) -> Result<()> {
    if !registry::is_allocated(parent) {
        return Err(Error::Unallocated(parent));
    }
    if !registry::is_allocated(child) {
        return Err(Error::Unallocated(child));
    }

    let parent_kind = core::kind(parent);
    if !parent_kind.is_container() {
        return Err(Error::NotAContainer(parent_kind));
    }
    if core::kind(child) == crate::types::ComponentKind::Window {
        return Err(Error::WindowNotAttachable);
    }
    if child == parent || is_ancestor(child, parent) {
        return Err(Error::WouldCycle);
    }

    // Single-parent invariant: unlink from the current parent first
    if let Some(old_parent) = core::parent(child) {
        core::remove_child(old_parent, child);
    }

    core::set_parent(child, Some(parent));
    core::push_child(parent, child);

    tracing::debug!(
        parent = %parent,
        child = %child,
        kind = %core::kind(child),
        "attached component"
    );
    Ok(())
}

/// Detach `child` from its parent, leaving it a free-standing root.
///
/// No-op if the child has no parent.
pub fn detach(child: ComponentId) -> Result<()> {
    if !registry::is_allocated(child) {
        return Err(Error::Unallocated(child));
    }
    if let Some(parent) = core::parent(child) {
        core::remove_child(parent, child);
        core::set_parent(child, None);
        tracing::debug!(parent = %parent, child = %child, "detached component");
    }
    Ok(())
}

/// Whether `ancestor` appears on `node`'s parent chain.
pub fn is_ancestor(ancestor: ComponentId, node: ComponentId) -> bool {
    let mut current = core::parent(node);
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        current = core::parent(id);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{allocate_index, reset_registry};
    use crate::types::ComponentKind;

    fn setup() {
        reset_registry();
    }

    fn node(kind: ComponentKind) -> ComponentId {
        let id = allocate_index(None);
        core::set_kind(id, kind);
        id
    }

    #[test]
    fn test_attach_appends_in_order() {
        setup();

        let panel = node(ComponentKind::Panel);
        let a = node(ComponentKind::Label);
        let b = node(ComponentKind::Label);

        attach(panel, a).unwrap();
        attach(panel, b).unwrap();

        assert_eq!(core::children(panel), vec![a, b]);
        assert_eq!(core::parent(a), Some(panel));
        assert_eq!(core::parent(b), Some(panel));
    }

    #[test]
    fn test_reattach_moves_between_parents() {
        setup();

        let p1 = node(ComponentKind::Panel);
        let p2 = node(ComponentKind::Panel);
        let label = node(ComponentKind::Label);

        attach(p1, label).unwrap();
        attach(p2, label).unwrap();

        assert!(core::children(p1).is_empty());
        assert_eq!(core::children(p2), vec![label]);
        assert_eq!(core::parent(label), Some(p2));
    }

    #[test]
    fn test_reattach_same_parent_moves_to_end() {
        setup();

        let panel = node(ComponentKind::Panel);
        let a = node(ComponentKind::Label);
        let b = node(ComponentKind::Label);

        attach(panel, a).unwrap();
        attach(panel, b).unwrap();
        attach(panel, a).unwrap();

        // Exactly once, at the end
        assert_eq!(core::children(panel), vec![b, a]);
    }

    #[test]
    fn test_attach_to_leaf_fails() {
        setup();

        let label = node(ComponentKind::Label);
        let other = node(ComponentKind::Button);

        assert_eq!(
            attach(label, other),
            Err(Error::NotAContainer(ComponentKind::Label))
        );
    }

    #[test]
    fn test_window_is_not_attachable() {
        setup();

        let panel = node(ComponentKind::Panel);
        let window = node(ComponentKind::Window);

        assert_eq!(attach(panel, window), Err(Error::WindowNotAttachable));
    }

    #[test]
    fn test_cycle_rejected() {
        setup();

        let outer = node(ComponentKind::Panel);
        let inner = node(ComponentKind::Panel);
        attach(outer, inner).unwrap();

        assert_eq!(attach(inner, outer), Err(Error::WouldCycle));
        assert_eq!(attach(outer, outer), Err(Error::WouldCycle));
    }

    #[test]
    fn test_detach() {
        setup();

        let panel = node(ComponentKind::Panel);
        let label = node(ComponentKind::Label);
        attach(panel, label).unwrap();

        detach(label).unwrap();
        assert!(core::children(panel).is_empty());
        assert_eq!(core::parent(label), None);

        // Detaching a root is a no-op
        detach(label).unwrap();
    }
}
