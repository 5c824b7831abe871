//! Component handles.
//!
//! Concrete component types are thin `Copy` handles over a [`ComponentId`];
//! the property data lives in the engine's columns. The [`Component`] trait
//! is the capability shared by every node, and [`Container`] is the
//! capability of kinds that own an ordered child sequence.

pub mod types;

mod button;
mod input;
mod label;
mod panel;
mod window;

pub use button::GlassButton;
pub use input::GlassInput;
pub use label::GlassLabel;
pub use panel::GlassPanel;
pub use types::{ButtonProps, InputProps, LabelProps, PanelProps, WindowProps};
pub use window::Window;

use crate::engine::{arrays::core, arrays::visual, registry, tree};
use crate::error::{Error, Result};
use crate::theme::GlassEffect;
use crate::types::{ComponentId, ComponentKind, Position, Size};

// =============================================================================
// Component Capability
// =============================================================================

/// Anything placeable in the scene graph.
///
/// Provided methods read from the engine columns, so a handle remains a
/// plain copyable index.
pub trait Component {
    /// The handle into scene storage.
    fn id(&self) -> ComponentId;

    /// The component's type tag.
    fn kind(&self) -> ComponentKind {
        core::kind(self.id())
    }

    /// Offset relative to the parent container.
    fn position(&self) -> Position {
        visual::position(self.id())
    }

    /// Move the component. Tree membership is unaffected.
    fn set_position(&self, position: Position) {
        visual::set_position(self.id(), position);
    }

    /// Component extent.
    fn size(&self) -> Size {
        visual::size(self.id())
    }

    /// The base glass effect, if any.
    fn effect(&self) -> Option<GlassEffect> {
        visual::effect(self.id())
    }

    /// Non-owning back-reference to the containing component.
    fn parent(&self) -> Option<ComponentId> {
        core::parent(self.id())
    }

    /// Release this component and its whole subtree from scene storage.
    fn release(self)
    where
        Self: Sized,
    {
        registry::release_index(self.id());
    }
}

// =============================================================================
// Container Capability
// =============================================================================

/// A component that owns an ordered sequence of children.
///
/// Only [`Window`] and [`GlassPanel`] implement this; leaf kinds cannot
/// hold children, which the attach path also enforces at runtime.
pub trait Container: Component {
    /// Append `child` at the end of this container's child sequence.
    ///
    /// If the child is currently attached to another container it is
    /// detached from there first - a node has at most one parent.
    fn add(&self, child: &dyn Component) -> Result<()> {
        tree::attach(self.id(), child.id())
    }

    /// Detach `child` from this container.
    ///
    /// Fails with [`Error::NotAChild`] if the child is attached elsewhere
    /// (or nowhere).
    fn remove(&self, child: &dyn Component) -> Result<()> {
        if core::parent(child.id()) != Some(self.id()) {
            return Err(Error::NotAChild {
                parent: self.id(),
                child: child.id(),
            });
        }
        tree::detach(child.id())
    }

    /// The ordered child sequence.
    fn children(&self) -> Vec<ComponentId> {
        core::children(self.id())
    }

    /// Number of direct children.
    fn child_count(&self) -> usize {
        core::child_count(self.id())
    }
}
