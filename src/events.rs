//! Event types and callback aliases.
//!
//! The core tree only *stores* handlers; nothing in this crate invokes
//! them on its own. A future event-dispatch layer decides when and how,
//! via [`crate::engine::arrays::interaction::dispatch_click`].

use std::rc::Rc;

use crate::types::Position;

// =============================================================================
// Event Types
// =============================================================================

/// Kinds of interaction events the component tree knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventType {
    Click = 0,
    MouseEnter = 1,
    MouseLeave = 2,
    FocusGained = 3,
    FocusLost = 4,
}

/// An interaction event delivered to a component handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// What happened.
    pub kind: EventType,
    /// Where it happened, in window coordinates.
    pub position: Position,
}

impl Event {
    /// Create a click event at a window position.
    pub const fn click(position: Position) -> Self {
        Self {
            kind: EventType::Click,
            position,
        }
    }
}

// =============================================================================
// Callback Types
// =============================================================================

/// Click callback type (Rc for shared ownership in closures).
///
/// Using Rc<dyn Fn> instead of Box<dyn Fn> allows cloning callbacks
/// into storage without ownership issues.
pub type ClickCallback = Rc<dyn Fn(&Event)>;
