//! Core arrays - type tags and tree structure.
//!
//! The structural columns of the scene graph:
//! - kind: the component type tag at each index
//! - parent: non-owning back-reference to the containing component
//! - children: insertion-ordered child sequence per container
//!
//! Parent is a plain index back-reference, never a second owner; the
//! ordered children column is the single source of truth for tree shape.

use super::SlotArray;
use crate::types::{ComponentId, ComponentKind};

thread_local! {
    /// Component type tag.
    static KIND: SlotArray<ComponentKind> = SlotArray::new(ComponentKind::None);

    /// Back-reference to the parent (None at roots and detached nodes).
    static PARENT: SlotArray<Option<ComponentId>> = SlotArray::new(None);

    /// Ordered child sequence (insertion order is z-order).
    static CHILDREN: SlotArray<Vec<ComponentId>> = SlotArray::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    KIND.with(|arr| arr.ensure(index));
    PARENT.with(|arr| arr.ensure(index));
    CHILDREN.with(|arr| arr.ensure(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    KIND.with(|arr| arr.clear(index));
    PARENT.with(|arr| arr.clear(index));
    CHILDREN.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    KIND.with(|arr| arr.clear_all());
    PARENT.with(|arr| arr.clear_all());
    CHILDREN.with(|arr| arr.clear_all());
}

// =============================================================================
// Kind
// =============================================================================

/// Get the component kind at an index.
pub fn kind(id: ComponentId) -> ComponentKind {
    KIND.with(|arr| arr.get(id.0))
}

/// Set the component kind at an index.
pub fn set_kind(id: ComponentId, value: ComponentKind) {
    KIND.with(|arr| arr.set(id.0, value));
}

// =============================================================================
// Parent
// =============================================================================

/// Get the parent back-reference.
pub fn parent(id: ComponentId) -> Option<ComponentId> {
    PARENT.with(|arr| arr.get(id.0))
}

/// Set the parent back-reference.
pub fn set_parent(id: ComponentId, value: Option<ComponentId>) {
    PARENT.with(|arr| arr.set(id.0, value));
}

// =============================================================================
// Children
// =============================================================================

/// Get the ordered child sequence of a container.
pub fn children(id: ComponentId) -> Vec<ComponentId> {
    CHILDREN.with(|arr| arr.get(id.0))
}

/// Number of direct children.
pub fn child_count(id: ComponentId) -> usize {
    CHILDREN.with(|arr| arr.update(id.0, |v| v.len()))
}

/// Append a child at the end of the sequence.
pub fn push_child(parent: ComponentId, child: ComponentId) {
    CHILDREN.with(|arr| arr.update(parent.0, |v| v.push(child)));
}

/// Remove a child from the sequence. Returns true if it was present.
pub fn remove_child(parent: ComponentId, child: ComponentId) -> bool {
    CHILDREN.with(|arr| {
        arr.update(parent.0, |v| {
            let before = v.len();
            v.retain(|c| *c != child);
            v.len() != before
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset();
    }

    #[test]
    fn test_kind_roundtrip() {
        setup();

        assert_eq!(kind(ComponentId(0)), ComponentKind::None);
        set_kind(ComponentId(0), ComponentKind::Panel);
        assert_eq!(kind(ComponentId(0)), ComponentKind::Panel);
    }

    #[test]
    fn test_children_ordering() {
        setup();

        let p = ComponentId(0);
        push_child(p, ComponentId(1));
        push_child(p, ComponentId(2));
        push_child(p, ComponentId(3));
        assert_eq!(
            children(p),
            vec![ComponentId(1), ComponentId(2), ComponentId(3)]
        );
        assert_eq!(child_count(p), 3);

        assert!(remove_child(p, ComponentId(2)));
        assert_eq!(children(p), vec![ComponentId(1), ComponentId(3)]);
        assert!(!remove_child(p, ComponentId(2)));
    }

    #[test]
    fn test_parent_backref() {
        setup();

        assert_eq!(parent(ComponentId(5)), None);
        set_parent(ComponentId(5), Some(ComponentId(1)));
        assert_eq!(parent(ComponentId(5)), Some(ComponentId(1)));
    }
}
