//! Error types for grandlight.
//!
//! Every variant is an invalid-argument class error: validation is local
//! to the constructor or method that detects it, and failures surface
//! synchronously to the caller. There is no retry policy and no
//! recoverable/fatal distinction.

use crate::types::{ComponentId, ComponentKind};

/// Errors produced by component construction and tree mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A size was constructed with a negative dimension.
    #[error("size dimensions must be non-negative, got {width}x{height}")]
    NegativeSize { width: i32, height: i32 },

    /// A color channel fell outside the 0-255 range.
    #[error("color channel `{channel}` must be in 0..=255, got {value}")]
    ChannelOutOfRange { channel: &'static str, value: i32 },

    /// A color string (gradient stop) could not be parsed.
    #[error("invalid color string: {0:?}")]
    InvalidColor(String),

    /// `add` was called on a leaf component.
    #[error("{0} is not a container and cannot hold children")]
    NotAContainer(ComponentKind),

    /// A window was passed where a child component is expected.
    #[error("a Window is the tree root and cannot be attached as a child")]
    WindowNotAttachable,

    /// Attaching here would make a component its own ancestor.
    #[error("attaching would create a cycle in the component tree")]
    WouldCycle,

    /// The component handle no longer refers to live scene storage.
    #[error("component {0} is not allocated")]
    Unallocated(ComponentId),

    /// The child is not attached to this container.
    #[error("component {child} is not a child of {parent}")]
    NotAChild {
        parent: ComponentId,
        child: ComponentId,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
