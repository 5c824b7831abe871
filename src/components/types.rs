//! Component props.
//!
//! Every concrete component takes its full configuration as a props struct
//! at creation time, with `..Default::default()` filling the rest. Apart
//! from tree membership, components are effectively immutable afterwards.

use crate::events::ClickCallback;
use crate::theme::GlassEffect;
use crate::types::{Position, Rgba, Size, TextAlign, TextStyle};

// =============================================================================
// Window Props
// =============================================================================

/// Properties for the root [`Window`](crate::Window).
///
/// # Example
///
/// ```
/// use grandlight::{Window, WindowProps, Size};
///
/// let window = Window::new(WindowProps {
///     title: "Demo".to_string(),
///     size: Size::new(900, 700).unwrap(),
///     background_gradient: vec!["#667eea".into(), "#764ba2".into()],
///     fps: Some(60),
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(window.title(), "Demo");
/// ```
#[derive(Default)]
pub struct WindowProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Window title.
    pub title: String,

    /// Window extent.
    pub size: Size,

    /// Background gradient stops as color strings, top to bottom.
    /// Parsed with [`Rgba::from_hex`]; an unparseable stop fails
    /// construction.
    pub background_gradient: Vec<String>,

    /// Target frame rate. Defaults to 60.
    pub fps: Option<u32>,
}

// =============================================================================
// Panel Props
// =============================================================================

/// Properties for [`GlassPanel`](crate::GlassPanel).
#[derive(Default)]
pub struct PanelProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Offset inside the parent (default origin).
    pub position: Position,

    /// Panel extent.
    pub size: Size,

    /// Glass effect for the panel surface.
    pub effect: Option<GlassEffect>,

    /// Inner padding in logical pixels.
    pub padding: i32,
}

// =============================================================================
// Label Props
// =============================================================================

/// Properties for [`GlassLabel`](crate::GlassLabel).
#[derive(Default)]
pub struct LabelProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// The text to display.
    pub text: String,

    /// Offset inside the parent (default origin).
    pub position: Position,

    /// Label extent.
    pub size: Size,

    /// Font size in points (default 14).
    pub font_size: Option<u16>,

    /// Style flags (bold, italic, etc.).
    pub style: TextStyle,

    /// Text color (default black).
    pub text_color: Option<Rgba>,

    /// Horizontal alignment.
    pub align: TextAlign,

    /// Whether the label draws its own glass backing.
    pub background: bool,

    /// Glass effect for the backing surface (only drawn if `background`).
    pub effect: Option<GlassEffect>,
}

// =============================================================================
// Button Props
// =============================================================================

/// Properties for [`GlassButton`](crate::GlassButton).
#[derive(Default)]
pub struct ButtonProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Button caption.
    pub text: String,

    /// Offset inside the parent (default origin).
    pub position: Position,

    /// Button extent.
    pub size: Size,

    /// Font size in points (default 14).
    pub font_size: Option<u16>,

    /// Caption color (default black).
    pub text_color: Option<Rgba>,

    /// Glass effect for the resting state.
    pub effect: Option<GlassEffect>,

    /// Effect swapped in while hovered.
    pub hover_effect: Option<GlassEffect>,

    /// Click handler, stored opaquely for the future dispatch layer.
    pub on_click: Option<ClickCallback>,
}

// =============================================================================
// Input Props
// =============================================================================

/// Properties for [`GlassInput`](crate::GlassInput).
#[derive(Default)]
pub struct InputProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Hint text shown while the input is empty.
    pub placeholder: String,

    /// Offset inside the parent (default origin).
    pub position: Position,

    /// Input extent.
    pub size: Size,

    /// Font size in points (default 14).
    pub font_size: Option<u16>,

    /// Glass effect for the resting state.
    pub effect: Option<GlassEffect>,

    /// Effect swapped in while focused.
    pub focus_effect: Option<GlassEffect>,
}
