//! Component registry - index allocation for the parallel arrays.
//!
//! Manages the lifecycle of component indices:
//! - ID <-> index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - Recursive release of whole subtrees

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::arrays;
use crate::types::ComponentId;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map component ID string to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to component ID string.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Set of currently allocated indices.
    static ALLOCATED_INDICES: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate an index for a new component.
///
/// # Arguments
/// * `id` - Optional component ID. If not provided, one is generated.
///
/// # Returns
/// The allocated component handle. If the ID is already registered, the
/// existing handle is returned.
pub fn allocate_index(id: Option<&str>) -> ComponentId {
    // Generate ID if not provided
    let component_id = match id {
        Some(id) => id.to_string(),
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("c{}", *counter);
            *counter += 1;
            id
        }),
    };

    // Check if already allocated
    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&component_id).copied());
    if let Some(index) = existing {
        return ComponentId(index);
    }

    // Reuse free index or allocate new
    let index = FREE_INDICES.with(|free| {
        let mut free = free.borrow_mut();
        if let Some(index) = free.pop() {
            index
        } else {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        }
    });

    // Register mappings
    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(component_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, component_id.clone());
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().insert(index);
    });

    // Ensure arrays have capacity for this index
    arrays::ensure_all_capacity(index);

    tracing::trace!(index, id = %component_id, "allocated component index");
    ComponentId(index)
}

/// Release an index back to the pool.
///
/// Detaches the component from its parent and recursively releases all
/// children.
pub fn release_index(id: ComponentId) {
    let index = id.0;
    let name = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned());
    let Some(name) = name else { return };

    // Unlink from the parent's child sequence first
    if let Some(parent) = arrays::core::parent(id) {
        arrays::core::remove_child(parent, id);
    }

    // Release the whole subtree
    for child in arrays::core::children(id) {
        release_index(child);
    }

    // Clean up mappings
    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&name);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().remove(&index);
    });

    // Clear all array values at this index
    arrays::clear_all_at_index(index);

    // Return to pool for reuse
    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });

    tracing::trace!(index, id = %name, "released component index");

    // When the last component is gone, drop all storage to free memory
    let is_empty = ALLOCATED_INDICES.with(|set| set.borrow().is_empty());
    if is_empty {
        arrays::reset_all_arrays();
        FREE_INDICES.with(|free| free.borrow_mut().clear());
        NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get the handle registered under a component ID.
pub fn get_index(id: &str) -> Option<ComponentId> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied().map(ComponentId))
}

/// Get the ID string for a handle.
pub fn get_id(id: ComponentId) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&id.0).cloned())
}

/// Check if a handle is currently allocated.
pub fn is_allocated(id: ComponentId) -> bool {
    ALLOCATED_INDICES.with(|set| set.borrow().contains(&id.0))
}

/// Get the count of currently allocated components.
pub fn allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.borrow().len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ALLOCATED_INDICES.with(|set| set.borrow_mut().clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    arrays::reset_all_arrays();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::core;
    use crate::types::ComponentKind;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_allocate_index() {
        setup();

        let a = allocate_index(None);
        let b = allocate_index(None);
        let c = allocate_index(Some("main_panel"));

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(c.index(), 2);

        assert!(is_allocated(a));
        assert!(is_allocated(c));
        assert!(!is_allocated(ComponentId(3)));
        assert_eq!(allocated_count(), 3);
    }

    #[test]
    fn test_same_id_returns_same_index() {
        setup();

        let a = allocate_index(Some("title"));
        let b = allocate_index(Some("title"));
        assert_eq!(a, b);
        assert_eq!(allocated_count(), 1);
    }

    #[test]
    fn test_release_and_reuse() {
        setup();

        let a = allocate_index(None);
        let _b = allocate_index(None);

        release_index(a);
        assert!(!is_allocated(a));

        // Freed index is reused
        let c = allocate_index(None);
        assert_eq!(c.index(), a.index());
    }

    #[test]
    fn test_id_mapping() {
        setup();

        let id = allocate_index(Some("login_panel"));
        assert_eq!(get_index("login_panel"), Some(id));
        assert_eq!(get_id(id), Some("login_panel".to_string()));
        assert_eq!(get_index("missing"), None);
    }

    #[test]
    fn test_release_subtree() {
        setup();

        let root = allocate_index(None);
        let child = allocate_index(None);
        let grandchild = allocate_index(None);

        core::set_kind(root, ComponentKind::Window);
        core::set_parent(child, Some(root));
        core::push_child(root, child);
        core::set_parent(grandchild, Some(child));
        core::push_child(child, grandchild);

        release_index(child);
        assert!(is_allocated(root));
        assert!(!is_allocated(child));
        assert!(!is_allocated(grandchild));
        assert!(core::children(root).is_empty());
    }
}
