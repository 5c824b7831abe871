//! Glass effect system for grandlight.
//!
//! A [`GlassEffect`] is the immutable configuration bundle behind a
//! glassmorphic surface: background blur radius, tint color, and surface
//! opacity. Effects are produced through the named presets on
//! [`GlassTheme`] rather than constructed ad hoc by callers.
//!
//! # Example
//!
//! ```
//! use grandlight::theme::GlassTheme;
//!
//! let light = GlassTheme::light();
//! assert!(light.blur > 0.0);
//!
//! let blue = GlassTheme::colorful((100, 150, 255)).unwrap();
//! assert_eq!(blue.tint.r, 100);
//! ```

pub mod presets;

pub use presets::{GlassTheme, get_preset, preset_names};

use crate::types::Rgba;

// =============================================================================
// GlassEffect
// =============================================================================

/// Visual effect descriptor for a glassmorphic surface.
///
/// Immutable value. `opacity` is always within 0..=1 because effects are
/// only produced by the presets, which clamp at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassEffect {
    /// Background blur radius in logical pixels.
    pub blur: f32,
    /// Tint layered over the blurred backdrop.
    pub tint: Rgba,
    /// Overall surface opacity (0 = invisible, 1 = solid).
    pub opacity: f32,
}

impl GlassEffect {
    /// Construct an effect, clamping opacity into 0..=1 and blur to >= 0.
    pub(crate) fn new(blur: f32, tint: Rgba, opacity: f32) -> Self {
        Self {
            blur: blur.max(0.0),
            tint,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_clamps_on_construction() {
        let e = GlassEffect::new(-3.0, Rgba::WHITE, 1.5);
        assert_eq!(e.blur, 0.0);
        assert_eq!(e.opacity, 1.0);

        let e = GlassEffect::new(12.0, Rgba::BLACK, -0.2);
        assert_eq!(e.opacity, 0.0);
    }
}
