//! # grandlight
//!
//! Glassmorphic GUI component library for Rust.
//!
//! ## Architecture
//!
//! grandlight uses a parallel arrays (ECS-style) architecture where components
//! are indices into columnar arrays rather than objects. Handles like
//! [`GlassPanel`] are plain `Copy` indices; their property data lives in the
//! engine's columns, grouped by concern (core tree data, visual data, text
//! data, interaction data).
//!
//! A scene is built declaratively:
//! ```text
//! props structs → component handles → Container::add → walker summary
//! ```
//!
//! Rendering, compositing, and event dispatch are future layers; this crate
//! covers scene construction, the tree contract, and introspection.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Position, Size, Rgba, ComponentKind, etc.)
//! - [`theme`] - Glass effect presets (light, dark, frosted, colorful)
//! - [`engine`] - Component registry, parallel arrays, tree operations
//! - [`components`] - Window, GlassPanel, GlassLabel, GlassButton, GlassInput
//! - [`walker`] - Read-only tree summarizer (counts, hierarchy dump)
//!
//! ## Example
//!
//! ```
//! use grandlight::{
//!     Container, GlassLabel, GlassPanel, LabelProps, PanelProps, Position, Size,
//!     Window, WindowProps,
//! };
//! use grandlight::theme::GlassTheme;
//! # grandlight::engine::reset_registry();
//!
//! let window = Window::new(WindowProps {
//!     title: "My App".to_string(),
//!     size: Size::new(800, 600).unwrap(),
//!     background_gradient: vec!["#1a1a2e".to_string(), "#16213e".to_string()],
//!     ..Default::default()
//! })?;
//!
//! let panel = GlassPanel::new(PanelProps {
//!     size: Size::new(400, 300).unwrap(),
//!     effect: Some(GlassTheme::light()),
//!     ..Default::default()
//! });
//! panel.add(&GlassLabel::new(LabelProps {
//!     text: "Hello".to_string(),
//!     position: Position::new(20, 20),
//!     ..Default::default()
//! }))?;
//!
//! window.center_component(&panel)?;
//! assert_eq!(grandlight::walker::component_count(&window), 3);
//! # Ok::<(), grandlight::Error>(())
//! ```

pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod theme;
pub mod types;
pub mod walker;

// Re-export commonly used items
pub use types::*;

pub use components::{
    ButtonProps, Component, Container, GlassButton, GlassInput, GlassLabel, GlassPanel,
    InputProps, LabelProps, PanelProps, Window, WindowProps,
};

pub use error::{Error, Result};

pub use events::{ClickCallback, Event, EventType};

pub use theme::{GlassEffect, GlassTheme};

pub use walker::{component_count, deep_count, hierarchy, print_hierarchy};
