//! Text arrays - content and typography.
//!
//! Text-related properties:
//! - content: label/button text, window title
//! - placeholder: input hint text
//! - font_size, style, color, align: typography

use super::SlotArray;
use crate::types::{ComponentId, Rgba, TextAlign, TextStyle};

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u16 = 14;

thread_local! {
    /// Text content (labels, buttons) or window title.
    static CONTENT: SlotArray<String> = SlotArray::new(String::new());

    /// Placeholder hint for inputs.
    static PLACEHOLDER: SlotArray<String> = SlotArray::new(String::new());

    /// Font size in points.
    static FONT_SIZE: SlotArray<u16> = SlotArray::new(DEFAULT_FONT_SIZE);

    /// Style flags (bold, italic, etc.).
    static STYLE: SlotArray<TextStyle> = SlotArray::new(TextStyle::NONE);

    /// Text color.
    static COLOR: SlotArray<Rgba> = SlotArray::new(Rgba::BLACK);

    /// Horizontal alignment.
    static ALIGN: SlotArray<TextAlign> = SlotArray::new(TextAlign::Left);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    CONTENT.with(|arr| arr.ensure(index));
    PLACEHOLDER.with(|arr| arr.ensure(index));
    FONT_SIZE.with(|arr| arr.ensure(index));
    STYLE.with(|arr| arr.ensure(index));
    COLOR.with(|arr| arr.ensure(index));
    ALIGN.with(|arr| arr.ensure(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    CONTENT.with(|arr| arr.clear(index));
    PLACEHOLDER.with(|arr| arr.clear(index));
    FONT_SIZE.with(|arr| arr.clear(index));
    STYLE.with(|arr| arr.clear(index));
    COLOR.with(|arr| arr.clear(index));
    ALIGN.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    CONTENT.with(|arr| arr.clear_all());
    PLACEHOLDER.with(|arr| arr.clear_all());
    FONT_SIZE.with(|arr| arr.clear_all());
    STYLE.with(|arr| arr.clear_all());
    COLOR.with(|arr| arr.clear_all());
    ALIGN.with(|arr| arr.clear_all());
}

// =============================================================================
// Content
// =============================================================================

pub fn content(id: ComponentId) -> String {
    CONTENT.with(|arr| arr.get(id.0))
}

pub fn set_content(id: ComponentId, value: String) {
    CONTENT.with(|arr| arr.set(id.0, value));
}

pub fn placeholder(id: ComponentId) -> String {
    PLACEHOLDER.with(|arr| arr.get(id.0))
}

pub fn set_placeholder(id: ComponentId, value: String) {
    PLACEHOLDER.with(|arr| arr.set(id.0, value));
}

// =============================================================================
// Typography
// =============================================================================

pub fn font_size(id: ComponentId) -> u16 {
    FONT_SIZE.with(|arr| arr.get(id.0))
}

pub fn set_font_size(id: ComponentId, value: u16) {
    FONT_SIZE.with(|arr| arr.set(id.0, value));
}

pub fn style(id: ComponentId) -> TextStyle {
    STYLE.with(|arr| arr.get(id.0))
}

pub fn set_style(id: ComponentId, value: TextStyle) {
    STYLE.with(|arr| arr.set(id.0, value));
}

pub fn color(id: ComponentId) -> Rgba {
    COLOR.with(|arr| arr.get(id.0))
}

pub fn set_color(id: ComponentId, value: Rgba) {
    COLOR.with(|arr| arr.set(id.0, value));
}

pub fn align(id: ComponentId) -> TextAlign {
    ALIGN.with(|arr| arr.get(id.0))
}

pub fn set_align(id: ComponentId, value: TextAlign) {
    ALIGN.with(|arr| arr.set(id.0, value));
}
