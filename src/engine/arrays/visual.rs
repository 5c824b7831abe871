//! Visual arrays - placement and glass styling.
//!
//! Placement (position, size), glass effects (base, hover, focus), and the
//! window-level background configuration (gradient stops, target frame
//! rate).

use super::SlotArray;
use crate::theme::GlassEffect;
use crate::types::{ComponentId, Position, Rgba, Size};

/// Default target frame rate for windows that do not specify one.
pub const DEFAULT_FPS: u32 = 60;

thread_local! {
    /// Offset relative to the parent container.
    static POSITION: SlotArray<Position> = SlotArray::new(Position::ORIGIN);

    /// Component extent.
    static SIZE: SlotArray<Size> = SlotArray::new(Size::ZERO);

    /// Base glass effect.
    static EFFECT: SlotArray<Option<GlassEffect>> = SlotArray::new(None);

    /// Effect swapped in while hovered (buttons).
    static HOVER_EFFECT: SlotArray<Option<GlassEffect>> = SlotArray::new(None);

    /// Effect swapped in while focused (inputs).
    static FOCUS_EFFECT: SlotArray<Option<GlassEffect>> = SlotArray::new(None);

    /// Whether a label draws its own backing surface.
    static BACKGROUND: SlotArray<bool> = SlotArray::new(false);

    /// Inner padding for panels.
    static PADDING: SlotArray<i32> = SlotArray::new(0);

    /// Window background gradient stops, top to bottom.
    static GRADIENT: SlotArray<Vec<Rgba>> = SlotArray::new(Vec::new());

    /// Window target frame rate.
    static FPS: SlotArray<u32> = SlotArray::new(DEFAULT_FPS);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    POSITION.with(|arr| arr.ensure(index));
    SIZE.with(|arr| arr.ensure(index));
    EFFECT.with(|arr| arr.ensure(index));
    HOVER_EFFECT.with(|arr| arr.ensure(index));
    FOCUS_EFFECT.with(|arr| arr.ensure(index));
    BACKGROUND.with(|arr| arr.ensure(index));
    PADDING.with(|arr| arr.ensure(index));
    GRADIENT.with(|arr| arr.ensure(index));
    FPS.with(|arr| arr.ensure(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    POSITION.with(|arr| arr.clear(index));
    SIZE.with(|arr| arr.clear(index));
    EFFECT.with(|arr| arr.clear(index));
    HOVER_EFFECT.with(|arr| arr.clear(index));
    FOCUS_EFFECT.with(|arr| arr.clear(index));
    BACKGROUND.with(|arr| arr.clear(index));
    PADDING.with(|arr| arr.clear(index));
    GRADIENT.with(|arr| arr.clear(index));
    FPS.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    POSITION.with(|arr| arr.clear_all());
    SIZE.with(|arr| arr.clear_all());
    EFFECT.with(|arr| arr.clear_all());
    HOVER_EFFECT.with(|arr| arr.clear_all());
    FOCUS_EFFECT.with(|arr| arr.clear_all());
    BACKGROUND.with(|arr| arr.clear_all());
    PADDING.with(|arr| arr.clear_all());
    GRADIENT.with(|arr| arr.clear_all());
    FPS.with(|arr| arr.clear_all());
}

// =============================================================================
// Placement
// =============================================================================

pub fn position(id: ComponentId) -> Position {
    POSITION.with(|arr| arr.get(id.0))
}

pub fn set_position(id: ComponentId, value: Position) {
    POSITION.with(|arr| arr.set(id.0, value));
}

pub fn size(id: ComponentId) -> Size {
    SIZE.with(|arr| arr.get(id.0))
}

pub fn set_size(id: ComponentId, value: Size) {
    SIZE.with(|arr| arr.set(id.0, value));
}

// =============================================================================
// Glass Effects
// =============================================================================

pub fn effect(id: ComponentId) -> Option<GlassEffect> {
    EFFECT.with(|arr| arr.get(id.0))
}

pub fn set_effect(id: ComponentId, value: Option<GlassEffect>) {
    EFFECT.with(|arr| arr.set(id.0, value));
}

pub fn hover_effect(id: ComponentId) -> Option<GlassEffect> {
    HOVER_EFFECT.with(|arr| arr.get(id.0))
}

pub fn set_hover_effect(id: ComponentId, value: Option<GlassEffect>) {
    HOVER_EFFECT.with(|arr| arr.set(id.0, value));
}

pub fn focus_effect(id: ComponentId) -> Option<GlassEffect> {
    FOCUS_EFFECT.with(|arr| arr.get(id.0))
}

pub fn set_focus_effect(id: ComponentId, value: Option<GlassEffect>) {
    FOCUS_EFFECT.with(|arr| arr.set(id.0, value));
}

// =============================================================================
// Surface Flags
// =============================================================================

pub fn background(id: ComponentId) -> bool {
    BACKGROUND.with(|arr| arr.get(id.0))
}

pub fn set_background(id: ComponentId, value: bool) {
    BACKGROUND.with(|arr| arr.set(id.0, value));
}

pub fn padding(id: ComponentId) -> i32 {
    PADDING.with(|arr| arr.get(id.0))
}

pub fn set_padding(id: ComponentId, value: i32) {
    PADDING.with(|arr| arr.set(id.0, value));
}

// =============================================================================
// Window Background
// =============================================================================

pub fn gradient(id: ComponentId) -> Vec<Rgba> {
    GRADIENT.with(|arr| arr.get(id.0))
}

pub fn set_gradient(id: ComponentId, stops: Vec<Rgba>) {
    GRADIENT.with(|arr| arr.set(id.0, stops));
}

pub fn fps(id: ComponentId) -> u32 {
    FPS.with(|arr| arr.get(id.0))
}

pub fn set_fps(id: ComponentId, value: u32) {
    FPS.with(|arr| arr.set(id.0, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GlassTheme;

    fn setup() {
        reset();
    }

    #[test]
    fn test_placement_defaults() {
        setup();

        let id = ComponentId(0);
        assert_eq!(position(id), Position::ORIGIN);
        assert_eq!(size(id), Size::ZERO);

        set_position(id, Position::new(10, 20));
        set_size(id, Size::new(100, 50).unwrap());
        assert_eq!(position(id), Position::new(10, 20));
        assert_eq!(size(id).width, 100);
    }

    #[test]
    fn test_effects_cleared_at_index() {
        setup();

        let id = ComponentId(2);
        set_effect(id, Some(GlassTheme::light()));
        set_hover_effect(id, Some(GlassTheme::frosted()));
        assert!(effect(id).is_some());

        clear_at_index(2);
        assert!(effect(id).is_none());
        assert!(hover_effect(id).is_none());
    }

    #[test]
    fn test_window_background() {
        setup();

        let id = ComponentId(0);
        assert_eq!(fps(id), DEFAULT_FPS);
        assert!(gradient(id).is_empty());

        set_fps(id, 120);
        set_gradient(id, vec![Rgba::BLACK, Rgba::WHITE]);
        assert_eq!(fps(id), 120);
        assert_eq!(gradient(id).len(), 2);
    }
}
