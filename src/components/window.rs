//! Window - the scene root.
//!
//! A window owns the top of the component tree. It is the only kind
//! that cannot itself be attached to a container, and the only place
//! the background gradient and frame rate live.

use super::types::WindowProps;
use super::{Component, Container};
use crate::engine::arrays::{core, text, visual};
use crate::engine::registry::allocate_index;
use crate::engine::tree;
use crate::error::{Error, Result};
use crate::types::{ComponentId, ComponentKind, Position, Rgba};

/// The root of a glass scene.
///
/// # Example
///
/// ```
/// use grandlight::{Window, WindowProps, Size};
/// # grandlight::engine::reset_registry();
///
/// let window = Window::new(WindowProps {
///     title: "My App".to_string(),
///     size: Size::new(800, 600).unwrap(),
///     background_gradient: vec!["#1a1a2e".to_string(), "#16213e".to_string()],
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(window.title(), "My App");
/// assert_eq!(window.fps(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    id: ComponentId,
}

impl Window {
    /// Create a window from its props.
    ///
    /// Gradient stops are hex strings (`#RGB`, `#RRGGBB` or
    /// `#RRGGBBAA`); any stop that fails to parse fails the whole
    /// construction with [`Error::InvalidColor`].
    pub fn new(props: WindowProps) -> Result<Self> {
        let gradient = props
            .background_gradient
            .iter()
            .map(|stop| Rgba::from_hex(stop).ok_or_else(|| Error::InvalidColor(stop.clone())))
            .collect::<Result<Vec<Rgba>>>()?;

        let id = allocate_index(props.id.as_deref());

        core::set_kind(id, ComponentKind::Window);
        visual::set_size(id, props.size);
        visual::set_gradient(id, gradient);
        if let Some(fps) = props.fps {
            visual::set_fps(id, fps);
        }
        text::set_content(id, props.title);

        Ok(Self { id })
    }

    /// The window title.
    pub fn title(&self) -> String {
        text::content(self.id)
    }

    /// Parsed background gradient stops, in declaration order.
    pub fn gradient(&self) -> Vec<Rgba> {
        visual::gradient(self.id)
    }

    /// Target frame rate.
    pub fn fps(&self) -> u32 {
        visual::fps(self.id)
    }

    /// Interpolated gradient color at `t` in `0.0..=1.0`.
    ///
    /// Returns `None` when no gradient was declared. A single stop is
    /// treated as a solid fill.
    pub fn sample_gradient(&self, t: f32) -> Option<Rgba> {
        let stops = visual::gradient(self.id);
        match stops.len() {
            0 => None,
            1 => Some(stops[0]),
            n => {
                let t = t.clamp(0.0, 1.0);
                let scaled = t * (n - 1) as f32;
                let lo = (scaled.floor() as usize).min(n - 2);
                Some(Rgba::lerp(stops[lo], stops[lo + 1], scaled - lo as f32))
            }
        }
    }

    /// Attach `child` centered within this window.
    ///
    /// The child's position becomes `(window.size - child.size) / 2`
    /// on each axis with integer truncation, then the child is
    /// attached exactly as [`Container::add`] would.
    pub fn center_component(&self, child: &dyn Component) -> Result<()> {
        let window_size = self.size();
        let child_size = child.size();
        child.set_position(Position::new(
            (window_size.width - child_size.width) / 2,
            (window_size.height - child_size.height) / 2,
        ));
        tree::attach(self.id, child.id())
    }

    /// Start the scene.
    ///
    /// Rendering is not wired up yet; this records intent and returns.
    pub fn run(&self) {
        tracing::debug!(window = %self.id, title = %self.title(), fps = self.fps(), "run requested");
    }
}

impl Component for Window {
    fn id(&self) -> ComponentId {
        self.id
    }
}

impl Container for Window {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::types::PanelProps;
    use crate::components::GlassPanel;
    use crate::engine::reset_registry;
    use crate::types::Size;

    fn setup() {
        reset_registry();
    }

    fn window(width: i32, height: i32) -> Window {
        Window::new(WindowProps {
            title: "Test".to_string(),
            size: Size::new(width, height).unwrap(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_window_creation() {
        setup();

        let window = Window::new(WindowProps {
            title: "GrandLight Demo".to_string(),
            size: Size::new(800, 600).unwrap(),
            background_gradient: vec!["#1a1a2e".to_string(), "#16213e".to_string()],
            fps: Some(30),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(window.kind(), ComponentKind::Window);
        assert_eq!(window.title(), "GrandLight Demo");
        assert_eq!(window.fps(), 30);
        assert_eq!(
            window.gradient(),
            vec![Rgba::new(0x1a, 0x1a, 0x2e, 255), Rgba::new(0x16, 0x21, 0x3e, 255)]
        );
    }

    #[test]
    fn test_fps_defaults_to_60() {
        setup();
        assert_eq!(window(800, 600).fps(), 60);
    }

    #[test]
    fn test_invalid_gradient_stop() {
        setup();

        let result = Window::new(WindowProps {
            background_gradient: vec!["#1a1a2e".to_string(), "not-a-color".to_string()],
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::InvalidColor(ref s)) if s == "not-a-color"));
    }

    #[test]
    fn test_center_component() {
        setup();

        let window = window(500, 600);
        let panel = GlassPanel::new(PanelProps {
            size: Size::new(400, 450).unwrap(),
            ..Default::default()
        });

        window.center_component(&panel).unwrap();
        assert_eq!(panel.position(), Position::new(50, 75));
        assert_eq!(window.children(), vec![panel.id()]);
        assert_eq!(panel.parent(), Some(window.id()));
    }

    #[test]
    fn test_center_truncates_toward_zero() {
        setup();

        let window = window(501, 600);
        let panel = GlassPanel::new(PanelProps {
            size: Size::new(400, 451).unwrap(),
            ..Default::default()
        });

        window.center_component(&panel).unwrap();
        // (501-400)/2 = 50, (600-451)/2 = 74
        assert_eq!(panel.position(), Position::new(50, 74));
    }

    #[test]
    fn test_window_rejects_window_child() {
        setup();

        let outer = window(800, 600);
        let inner = window(400, 300);
        assert!(matches!(outer.add(&inner), Err(Error::WindowNotAttachable)));
    }

    #[test]
    fn test_sample_gradient() {
        setup();

        let gradient_window = Window::new(WindowProps {
            size: Size::new(800, 600).unwrap(),
            background_gradient: vec!["#000000".to_string(), "#ffffff".to_string()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(gradient_window.sample_gradient(0.0), Some(Rgba::BLACK));
        assert_eq!(gradient_window.sample_gradient(1.0), Some(Rgba::WHITE));
        let mid = gradient_window.sample_gradient(0.5).unwrap();
        assert!(mid.r > 120 && mid.r < 135);

        let empty = window(100, 100);
        assert_eq!(empty.sample_gradient(0.5), None);
    }
}
