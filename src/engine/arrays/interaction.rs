//! Interaction arrays - stored event handlers.
//!
//! The tree stores handlers as opaque values; it never decides when to
//! invoke them. [`dispatch_click`] is the hook a future event-dispatch
//! layer (hit-testing, event loop) calls once it has routed an event.

use super::SlotArray;
use crate::events::{ClickCallback, Event};
use crate::types::ComponentId;

thread_local! {
    /// Click handler per component.
    static ON_CLICK: SlotArray<Option<ClickCallback>> = SlotArray::new(None);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    ON_CLICK.with(|arr| arr.ensure(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    ON_CLICK.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    ON_CLICK.with(|arr| arr.clear_all());
}

// =============================================================================
// Click Handlers
// =============================================================================

/// Store a click handler for a component.
pub fn set_on_click(id: ComponentId, callback: ClickCallback) {
    ON_CLICK.with(|arr| arr.set(id.0, Some(callback)));
}

/// Whether a component has a click handler registered.
pub fn has_on_click(id: ComponentId) -> bool {
    ON_CLICK.with(|arr| arr.get(id.0).is_some())
}

/// Invoke a component's click handler, if any.
///
/// Returns true if a handler ran. Belongs to the (future) dispatch layer;
/// the construction path never calls this.
pub fn dispatch_click(id: ComponentId, event: &Event) -> bool {
    let callback = ON_CLICK.with(|arr| arr.get(id.0));
    match callback {
        Some(callback) => {
            callback(event);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset();
    }

    #[test]
    fn test_dispatch_click_runs_handler() {
        setup();

        let clicks = Rc::new(Cell::new(0));
        let clicks_in_handler = clicks.clone();

        let id = ComponentId(0);
        set_on_click(
            id,
            Rc::new(move |_event| {
                clicks_in_handler.set(clicks_in_handler.get() + 1);
            }),
        );

        assert!(has_on_click(id));
        assert!(dispatch_click(id, &Event::click(Position::ORIGIN)));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_dispatch_without_handler() {
        setup();

        let id = ComponentId(3);
        assert!(!has_on_click(id));
        assert!(!dispatch_click(id, &Event::click(Position::ORIGIN)));
    }

    #[test]
    fn test_clear_drops_handler() {
        setup();

        let id = ComponentId(0);
        set_on_click(id, Rc::new(|_| {}));
        assert!(has_on_click(id));

        clear_at_index(0);
        assert!(!has_on_click(id));
    }
}
