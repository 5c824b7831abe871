//! GlassButton - clickable leaf.
//!
//! The click handler is stored as an opaque value in the interaction
//! column; this crate never invokes it. A future event-dispatch layer
//! routes events through `interaction::dispatch_click`.

use super::types::ButtonProps;
use super::Component;
use crate::engine::arrays::{core, interaction, text, visual};
use crate::engine::registry::allocate_index;
use crate::theme::GlassEffect;
use crate::types::{ComponentId, ComponentKind, Rgba};

/// A clickable glass button leaf.
///
/// # Example
///
/// ```
/// use grandlight::{GlassButton, ButtonProps, Size};
/// use grandlight::theme::GlassTheme;
/// use std::rc::Rc;
/// # grandlight::engine::reset_registry();
///
/// let button = GlassButton::new(ButtonProps {
///     text: "Get Started".to_string(),
///     size: Size::new(170, 50).unwrap(),
///     effect: Some(GlassTheme::colorful((100, 150, 255)).unwrap()),
///     hover_effect: Some(GlassTheme::frosted()),
///     on_click: Some(Rc::new(|_event| println!("clicked"))),
///     ..Default::default()
/// });
/// assert!(button.has_on_click());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlassButton {
    id: ComponentId,
}

impl GlassButton {
    /// Create a button from its props.
    pub fn new(props: ButtonProps) -> Self {
        let id = allocate_index(props.id.as_deref());

        core::set_kind(id, ComponentKind::Button);
        visual::set_position(id, props.position);
        visual::set_size(id, props.size);
        visual::set_effect(id, props.effect);
        visual::set_hover_effect(id, props.hover_effect);

        text::set_content(id, props.text);
        if let Some(font_size) = props.font_size {
            text::set_font_size(id, font_size);
        }
        if let Some(color) = props.text_color {
            text::set_color(id, color);
        }

        if let Some(on_click) = props.on_click {
            interaction::set_on_click(id, on_click);
        }

        Self { id }
    }

    /// The button caption.
    pub fn text(&self) -> String {
        text::content(self.id)
    }

    /// Caption color.
    pub fn text_color(&self) -> Rgba {
        text::color(self.id)
    }

    /// Effect swapped in while hovered.
    pub fn hover_effect(&self) -> Option<GlassEffect> {
        visual::hover_effect(self.id)
    }

    /// Whether a click handler is registered.
    pub fn has_on_click(&self) -> bool {
        interaction::has_on_click(self.id)
    }
}

impl Component for GlassButton {
    fn id(&self) -> ComponentId {
        self.id
    }
}
