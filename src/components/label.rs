//! GlassLabel - static text leaf.

use super::types::LabelProps;
use super::Component;
use crate::engine::arrays::{core, text, visual};
use crate::engine::registry::allocate_index;
use crate::types::{ComponentId, ComponentKind, Rgba, TextAlign, TextStyle};

/// A text display leaf. Cannot have children.
///
/// # Example
///
/// ```
/// use grandlight::{Component, GlassLabel, LabelProps, Size, TextStyle};
/// # grandlight::engine::reset_registry();
///
/// let title = GlassLabel::new(LabelProps {
///     text: "Welcome to GrandLight".to_string(),
///     size: Size::new(540, 60).unwrap(),
///     font_size: Some(32),
///     style: TextStyle::BOLD,
///     ..Default::default()
/// });
/// assert_eq!(title.text(), "Welcome to GrandLight");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlassLabel {
    id: ComponentId,
}

impl GlassLabel {
    /// Create a label from its props.
    pub fn new(props: LabelProps) -> Self {
        let id = allocate_index(props.id.as_deref());

        core::set_kind(id, ComponentKind::Label);
        visual::set_position(id, props.position);
        visual::set_size(id, props.size);
        visual::set_effect(id, props.effect);
        visual::set_background(id, props.background);

        text::set_content(id, props.text);
        text::set_style(id, props.style);
        text::set_align(id, props.align);
        if let Some(font_size) = props.font_size {
            text::set_font_size(id, font_size);
        }
        if let Some(color) = props.text_color {
            text::set_color(id, color);
        }

        Self { id }
    }

    /// The displayed text.
    pub fn text(&self) -> String {
        text::content(self.id)
    }

    /// Font size in points.
    pub fn font_size(&self) -> u16 {
        text::font_size(self.id)
    }

    /// Style flags.
    pub fn style(&self) -> TextStyle {
        text::style(self.id)
    }

    /// Text color.
    pub fn text_color(&self) -> Rgba {
        text::color(self.id)
    }

    /// Horizontal alignment.
    pub fn align(&self) -> TextAlign {
        text::align(self.id)
    }

    /// Whether the label draws its own glass backing.
    pub fn background(&self) -> bool {
        visual::background(self.id)
    }
}

impl Component for GlassLabel {
    fn id(&self) -> ComponentId {
        self.id
    }
}

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
    fn test_label_creation() {
        setup();

        let label = GlassLabel::new(LabelProps {
            text: "Secure Login".to_string(),
            position: Position::new(0, 80),
            size: Size::new(320, 30).unwrap(),
            font_size: Some(13),
            style: TextStyle::BOLD,
            text_color: Some(Rgba::rgb(100, 100, 120)),
            align: TextAlign::Center,
            background: true,
            effect: Some(GlassTheme::frosted()),
            ..Default::default()
        });

        assert_eq!(label.kind(), ComponentKind::Label);
        assert_eq!(label.text(), "Secure Login");
        assert_eq!(label.font_size(), 13);
        assert_eq!(label.style(), TextStyle::BOLD);
        assert_eq!(label.text_color(), Rgba::rgb(100, 100, 120));
        assert_eq!(label.align(), TextAlign::Center);
        assert!(label.background());
        assert_eq!(label.effect(), Some(GlassTheme::frosted()));
    }

    #[test]
    fn test_label_defaults() {
        setup();

        let label = GlassLabel::new(LabelProps {
            text: "plain".to_string(),
            ..Default::default()
        });

        assert_eq!(label.font_size(), text::DEFAULT_FONT_SIZE);
        assert_eq!(label.style(), TextStyle::NONE);
        assert_eq!(label.text_color(), Rgba::BLACK);
        assert_eq!(label.align(), TextAlign::Left);
        assert!(!label.background());
        assert_eq!(label.effect(), None);
    }
}
