//! GlassInput - single-line text field leaf.

use super::types::InputProps;
use super::Component;
use crate::engine::arrays::{core, text, visual};
use crate::engine::registry::allocate_index;
use crate::theme::GlassEffect;
use crate::types::{ComponentId, ComponentKind};

/// A single-line glass text input.
///
/// Holds a placeholder and an optional focus effect swapped in while
/// the field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlassInput {
    id: ComponentId,
}

impl GlassInput {
    /// Create an input from its props.
    pub fn new(props: InputProps) -> Self {
        let id = allocate_index(props.id.as_deref());

        core::set_kind(id, ComponentKind::Input);
        visual::set_position(id, props.position);
        visual::set_size(id, props.size);
        visual::set_effect(id, props.effect);
        visual::set_focus_effect(id, props.focus_effect);

        text::set_placeholder(id, props.placeholder);
        if let Some(font_size) = props.font_size {
            text::set_font_size(id, font_size);
        }

        Self { id }
    }

    /// Hint text shown while the field is empty.
    pub fn placeholder(&self) -> String {
        text::placeholder(self.id)
    }

    /// Effect swapped in while focused.
    pub fn focus_effect(&self) -> Option<GlassEffect> {
        visual::focus_effect(self.id)
    }
}

impl Component for GlassInput {
    fn id(&self) -> ComponentId {
        self.id
    }
}
