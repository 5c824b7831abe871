//! Glass effect presets.
//!
//! The built-in glassmorphic styles:
//! - `light` - bright frosted surface for light backdrops
//! - `dark` - smoked glass for dark backdrops
//! - `frosted` - heavy blur with a near-white veil
//! - `colorful` - caller-supplied tint over a medium blur

use super::GlassEffect;
use crate::error::{Error, Result};
use crate::types::Rgba;

// =============================================================================
// GlassTheme - Preset Factories
// =============================================================================

/// Namespace for the named glass effect presets.
///
/// Callers never assemble a [`GlassEffect`] field by field; they pick a
/// preset and (for `colorful`) supply a tint.
pub struct GlassTheme;

impl GlassTheme {
    /// Light glass - a bright translucent surface.
    pub fn light() -> GlassEffect {
        GlassEffect::new(10.0, Rgba::new(255, 255, 255, 110), 0.75)
    }

    /// Dark glass - smoked translucent surface.
    pub fn dark() -> GlassEffect {
        GlassEffect::new(12.0, Rgba::new(20, 20, 30, 150), 0.70)
    }

    /// Frosted glass - heavy blur with a near-opaque white veil.
    pub fn frosted() -> GlassEffect {
        GlassEffect::new(24.0, Rgba::new(255, 255, 255, 180), 0.85)
    }

    /// Colored glass with a caller-supplied tint.
    ///
    /// Accepts anything convertible to [`Rgba`]; 3- or 4-component integer
    /// tuples are validated against the 0-255 channel range and fail with
    /// [`Error::ChannelOutOfRange`] when outside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use grandlight::theme::GlassTheme;
    ///
    /// let ok = GlassTheme::colorful((100, 200, 130)).unwrap();
    /// assert_eq!(ok.tint.g, 200);
    ///
    /// assert!(GlassTheme::colorful((0, 999, 0)).is_err());
    /// ```
    pub fn colorful<C>(color: C) -> Result<GlassEffect>
    where
        C: TryInto<Rgba, Error = Error>,
    {
        let tint = color.try_into()?;
        // Preset alpha wins unless the caller tinted with explicit alpha.
        let tint = if tint.is_opaque() {
            tint.with_alpha(140)
        } else {
            tint
        };
        Ok(GlassEffect::new(16.0, tint, 0.80))
    }
}

// =============================================================================
// Preset Lookup
// =============================================================================

/// Look up a parameterless preset by name.
///
/// `colorful` is not listed here because it requires a tint argument.
pub fn get_preset(name: &str) -> Option<GlassEffect> {
    match name {
        "light" => Some(GlassTheme::light()),
        "dark" => Some(GlassTheme::dark()),
        "frosted" => Some(GlassTheme::frosted()),
        _ => None,
    }
}

/// Names accepted by [`get_preset`].
pub fn preset_names() -> &'static [&'static str] {
    &["light", "dark", "frosted"]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for name in preset_names() {
            let effect = get_preset(name).unwrap();
            assert!(effect.blur >= 0.0, "{name} blur");
            assert!((0.0..=1.0).contains(&effect.opacity), "{name} opacity");
        }
        assert!(get_preset("neon").is_none());
    }

    #[test]
    fn test_presets_are_value_equal() {
        // Presets are pure factories: two calls give the same value.
        assert_eq!(GlassTheme::light(), GlassTheme::light());
        assert_ne!(GlassTheme::light(), GlassTheme::dark());
    }

    #[test]
    fn test_colorful_three_tuple() {
        let effect = GlassTheme::colorful((100, 150, 255)).unwrap();
        assert_eq!(effect.tint.r, 100);
        assert_eq!(effect.tint.g, 150);
        assert_eq!(effect.tint.b, 255);
        // Opaque input gets the preset's translucent alpha
        assert_eq!(effect.tint.a, 140);
    }

    #[test]
    fn test_colorful_four_tuple_keeps_alpha() {
        let effect = GlassTheme::colorful((10, 20, 30, 99)).unwrap();
        assert_eq!(effect.tint.a, 99);
    }

    #[test]
    fn test_colorful_out_of_range() {
        assert!(matches!(
            GlassTheme::colorful((256, 0, 0)),
            Err(Error::ChannelOutOfRange { channel: "r", .. })
        ));
        assert!(GlassTheme::colorful((0, 0, -4)).is_err());
        assert!(GlassTheme::colorful((0, 0, 0, 300)).is_err());
    }
}
