//! GlassPanel - translucent container surface.
//!
//! The workhorse container: a glass surface that groups labels, buttons,
//! inputs, and nested panels.
//!
//! # Example
//!
//! ```
//! use grandlight::{Container, GlassPanel, PanelProps, Size};
//! use grandlight::theme::GlassTheme;
//! # grandlight::engine::reset_registry();
//!
//! let panel = GlassPanel::new(PanelProps {
//!     size: Size::new(600, 500).unwrap(),
//!     effect: Some(GlassTheme::light()),
//!     padding: 30,
//!     ..Default::default()
//! });
//! assert_eq!(panel.child_count(), 0);
//! ```

use super::types::PanelProps;
use super::{Component, Container};
use crate::engine::arrays::{core, visual};
use crate::engine::registry::allocate_index;
use crate::types::{ComponentId, ComponentKind};

/// A translucent container panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlassPanel {
    id: ComponentId,
}

impl GlassPanel {
    /// Create a panel from its props.
    pub fn new(props: PanelProps) -> Self {
        let id = allocate_index(props.id.as_deref());

        core::set_kind(id, ComponentKind::Panel);
        visual::set_position(id, props.position);
        visual::set_size(id, props.size);
        visual::set_effect(id, props.effect);
        visual::set_padding(id, props.padding);

        Self { id }
    }

    /// Inner padding in logical pixels.
    pub fn padding(&self) -> i32 {
        visual::padding(self.id)
    }
}

impl Component for GlassPanel {
    fn id(&self) -> ComponentId {
        self.id
    }
}

impl Container for GlassPanel {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::theme::GlassTheme;
    use crate::types::{Position, Size};

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_panel_creation() {
        setup();

        let panel = GlassPanel::new(PanelProps {
            position: Position::new(20, 20),
            size: Size::new(1160, 80).unwrap(),
            effect: Some(GlassTheme::dark()),
            padding: 20,
            ..Default::default()
        });

        assert_eq!(panel.kind(), ComponentKind::Panel);
        assert_eq!(panel.position(), Position::new(20, 20));
        assert_eq!(panel.size(), Size::new(1160, 80).unwrap());
        assert_eq!(panel.effect(), Some(GlassTheme::dark()));
        assert_eq!(panel.padding(), 20);
        assert_eq!(panel.parent(), None);
    }

    #[test]
    fn test_panel_defaults() {
        setup();

        let panel = GlassPanel::new(PanelProps::default());
        assert_eq!(panel.position(), Position::ORIGIN);
        assert_eq!(panel.size(), Size::ZERO);
        assert_eq!(panel.effect(), None);
        assert_eq!(panel.padding(), 0);
    }

    #[test]
    fn test_nested_panels() {
        setup();

        let outer = GlassPanel::new(PanelProps::default());
        let inner = GlassPanel::new(PanelProps::default());

        outer.add(&inner).unwrap();
        assert_eq!(outer.children(), vec![inner.id()]);
        assert_eq!(inner.parent(), Some(outer.id()));
    }
}
