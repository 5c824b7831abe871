//! Core types for grandlight.
//!
//! These are the value types everything else builds on: geometry
//! (Position, Size), color (Rgba), text styling, and the component
//! type tags used by the scene graph.

use crate::error::Error;

// =============================================================================
// ComponentId
// =============================================================================

/// Opaque handle to a component in the scene storage.
///
/// Components are indices into thread-local columnar arrays, not objects.
/// A `ComponentId` is only meaningful on the thread that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    /// The raw array index behind this handle.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Position
// =============================================================================

/// A 2D offset in logical pixels, relative to the parent container.
///
/// Immutable value. No invariants beyond being a pair of integers;
/// negative coordinates are legal (off-screen placement).
///
/// # Examples
///
/// ```
/// use grandlight::Position;
///
/// let p = Position::new(10, -5);
/// assert_eq!(p.x, 10);
/// assert_eq!(p.y, -5);
/// assert_eq!(Position::ORIGIN, Position::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The origin (0, 0). Default position for every component.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// Size
// =============================================================================

/// An extent in logical pixels.
///
/// Invariant: width >= 0 and height >= 0, enforced at construction.
///
/// # Examples
///
/// ```
/// use grandlight::Size;
///
/// let s = Size::new(400, 300).unwrap();
/// assert_eq!(s.width, 400);
/// assert_eq!(s.height, 300);
///
/// assert!(Size::new(-1, 300).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero extent. Default size for components that never set one.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size. Fails if either dimension is negative.
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        if width < 0 || height < 0 {
            return Err(Error::NegativeSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Area in square pixels.
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Replace the alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Create from 0xRRGGBB integer format.
    ///
    /// # Examples
    ///
    /// ```
    /// use grandlight::Rgba;
    ///
    /// let lavender = Rgba::from_rgb_int(0x667eea);
    /// assert_eq!(lavender, Rgba::rgb(102, 126, 234));
    /// ```
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use grandlight::Rgba;
    ///
    /// let red = Rgba::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    ///
    /// // #RGB shorthand (expands each digit)
    /// let white = Rgba::from_hex("#fff").unwrap();
    /// assert_eq!(white, Rgba::rgb(255, 255, 255));
    ///
    /// // #RRGGBBAA format (with alpha)
    /// let semi = Rgba::from_hex("#ff000080").unwrap();
    /// assert_eq!(semi, Rgba::new(255, 0, 0, 128));
    ///
    /// // Without # prefix also works
    /// let blue = Rgba::from_hex("0000ff").unwrap();
    /// assert_eq!(blue, Rgba::rgb(0, 0, 255));
    ///
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            // #RRGGBB
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            // #RRGGBBAA
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Linear interpolation between two colors.
    ///
    /// Used for sampling gradient backgrounds between stops.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self {
            r: (a.r as f32 * inv_t + b.r as f32 * t) as u8,
            g: (a.g as f32 * inv_t + b.g as f32 * t) as u8,
            b: (a.b as f32 * inv_t + b.b as f32 * t) as u8,
            a: (a.a as f32 * inv_t + b.a as f32 * t) as u8,
        }
    }
}

fn channel(name: &'static str, value: i32) -> Result<u8, Error> {
    if !(0..=255).contains(&value) {
        return Err(Error::ChannelOutOfRange {
            channel: name,
            value,
        });
    }
    Ok(value as u8)
}

/// 3-component tuple in 0-255 range, opaque.
impl TryFrom<(i32, i32, i32)> for Rgba {
    type Error = Error;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self, Error> {
        Ok(Self::rgb(
            channel("r", r)?,
            channel("g", g)?,
            channel("b", b)?,
        ))
    }
}

/// 4-component tuple in 0-255 range.
impl TryFrom<(i32, i32, i32, i32)> for Rgba {
    type Error = Error;

    fn try_from((r, g, b, a): (i32, i32, i32, i32)) -> Result<Self, Error> {
        Ok(Self::new(
            channel("r", r)?,
            channel("g", g)?,
            channel("b", b)?,
            channel("a", a)?,
        ))
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

// =============================================================================
// Text Styling
// =============================================================================

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextAlign {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl From<u8> for TextAlign {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

bitflags::bitflags! {
    /// Text style flags as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `TextStyle::BOLD | TextStyle::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextStyle: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
    }
}

// =============================================================================
// Component Kinds
// =============================================================================

/// Component type tags for the parallel arrays.
///
/// Each component at index i has kind[i] set to one of these. The tag is
/// the explicit Leaf/Container split: `is_container` replaces any runtime
/// probing for a children collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentKind {
    #[default]
    None = 0,
    Window = 1,
    Panel = 2,
    Label = 3,
    Button = 4,
    Input = 5,
}

impl ComponentKind {
    /// Display name used by the hierarchy printer.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Window => "Window",
            Self::Panel => "GlassPanel",
            Self::Label => "GlassLabel",
            Self::Button => "GlassButton",
            Self::Input => "GlassInput",
        }
    }

    /// Whether this kind owns an ordered child sequence.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Window | Self::Panel)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
