//! Tree walker and summarizer.
//!
//! Read-only traversal over a built scene: an aggregate component
//! count and a pretty-printed hierarchy dump. Nothing here mutates
//! the tree.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use crate::components::{Component, Container, Window};
use crate::engine::arrays::{core, text};
use crate::types::{ComponentId, ComponentKind};

/// Widest a hierarchy text label gets before truncation.
const MAX_LABEL_WIDTH: usize = 40;

// =============================================================================
// Counting
// =============================================================================

/// Two-level component count rooted at `window`.
///
/// Counts the window, each direct child, and each grandchild - and
/// stops there. Deeper descendants are not visited; use
/// [`deep_count`] for a full recursive total.
pub fn component_count(window: &Window) -> usize {
    let mut total = 1;
    for child in window.children() {
        total += 1 + core::child_count(child);
    }
    total
}

/// Full recursive component count rooted at `window`.
pub fn deep_count(window: &Window) -> usize {
    count_subtree(window.id())
}

fn count_subtree(id: ComponentId) -> usize {
    1 + core::children(id)
        .into_iter()
        .map(count_subtree)
        .sum::<usize>()
}

// =============================================================================
// Hierarchy Dump
// =============================================================================

/// Render the hierarchy rooted at `window` as printable lines.
///
/// One line for the root, one per direct child with a corner glyph on
/// the last sibling, and one further indented line per grandchild
/// labeled with its kind and text (or `N/A` for kinds that carry
/// none). Order is insertion order at every level.
pub fn hierarchy(window: &Window) -> Vec<String> {
    let mut lines = vec!["└── Window".to_string()];

    let children = window.children();
    for (i, child) in children.iter().copied().enumerate() {
        let prefix = branch_glyph(i == children.len() - 1);
        lines.push(format!("    {prefix} {}", core::kind(child).name()));

        if core::kind(child).is_container() {
            let grandchildren = core::children(child);
            for (j, grandchild) in grandchildren.iter().copied().enumerate() {
                let prefix = branch_glyph(j == grandchildren.len() - 1);
                lines.push(format!(
                    "        {prefix} {}: {}",
                    core::kind(grandchild).name(),
                    truncate_text(&label_text(grandchild), MAX_LABEL_WIDTH),
                ));
            }
        }
    }

    lines
}

/// Write the hierarchy dump to `out`, one line per row.
pub fn print_hierarchy(window: &Window, out: &mut impl Write) -> io::Result<()> {
    for line in hierarchy(window) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn branch_glyph(is_last: bool) -> &'static str {
    if is_last { "└──" } else { "├──" }
}

fn label_text(id: ComponentId) -> String {
    match core::kind(id) {
        ComponentKind::Label | ComponentKind::Button => text::content(id),
        _ => "N/A".to_string(),
    }
}

// =============================================================================
// Text Measurement
// =============================================================================

/// Display width of `text` in terminal columns.
///
/// Wide characters (CJK, emoji) count as 2, zero-width marks as 0.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate `text` to at most `max_width` columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        // Leave a column for the ellipsis
        if width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::types::{LabelProps, PanelProps, WindowProps};
    use crate::components::{GlassLabel, GlassPanel};
    use crate::engine::reset_registry;
    use crate::types::Size;

    fn setup() {
        reset_registry();
    }

    fn window() -> Window {
        Window::new(WindowProps {
            title: "Test".to_string(),
            size: Size::new(800, 600).unwrap(),
            ..Default::default()
        })
        .unwrap()
    }

    fn label(text: &str) -> GlassLabel {
        GlassLabel::new(LabelProps {
            text: text.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_shallow_count() {
        setup();

        let window = window();
        let full = GlassPanel::new(PanelProps::default());
        for text in ["a", "b", "c"] {
            full.add(&label(text)).unwrap();
        }
        let empty = GlassPanel::new(PanelProps::default());
        window.add(&full).unwrap();
        window.add(&empty).unwrap();

        // 1 (window) + (1 + 3) + (1 + 0)
        assert_eq!(component_count(&window), 6);
    }

    #[test]
    fn test_shallow_count_ignores_deeper_levels() {
        setup();

        let window = window();
        let outer = GlassPanel::new(PanelProps::default());
        let inner = GlassPanel::new(PanelProps::default());
        inner.add(&label("deep")).unwrap();
        outer.add(&inner).unwrap();
        window.add(&outer).unwrap();

        // The label under `inner` is three levels down and not counted
        assert_eq!(component_count(&window), 3);
        assert_eq!(deep_count(&window), 4);
    }

    #[test]
    fn test_count_empty_window() {
        setup();
        assert_eq!(component_count(&window()), 1);
        assert_eq!(deep_count(&window()), 1);
    }

    #[test]
    fn test_hierarchy_lines() {
        setup();

        let window = window();
        let panel_a = GlassPanel::new(PanelProps::default());
        panel_a.add(&label("Hi")).unwrap();
        let panel_b = GlassPanel::new(PanelProps::default());
        window.add(&panel_a).unwrap();
        window.add(&panel_b).unwrap();

        assert_eq!(
            hierarchy(&window),
            vec![
                "└── Window",
                "    ├── GlassPanel",
                "        └── GlassLabel: Hi",
                "    └── GlassPanel",
            ]
        );
    }

    #[test]
    fn test_hierarchy_leaf_without_text() {
        setup();

        let window = window();
        let panel = GlassPanel::new(PanelProps::default());
        panel
            .add(&crate::components::GlassInput::new(Default::default()))
            .unwrap();
        window.add(&panel).unwrap();

        let lines = hierarchy(&window);
        assert_eq!(lines[1], "    └── GlassPanel");
        assert_eq!(lines[2], "        └── GlassInput: N/A");
    }

    #[test]
    fn test_print_hierarchy_writes_lines() {
        setup();

        let window = window();
        let panel = GlassPanel::new(PanelProps::default());
        window.add(&panel).unwrap();

        let mut buf = Vec::new();
        print_hierarchy(&window, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "└── Window\n    └── GlassPanel\n"
        );
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly-ten", 11), "exactly-ten");
        assert_eq!(truncate_text("a longer label that keeps going", 10), "a longer …");
    }

    #[test]
    fn test_truncate_text_degenerate_widths() {
        // Never wider than the requested budget
        assert_eq!(truncate_text("ab", 0), "");
        assert_eq!(truncate_text("", 0), "");
        assert_eq!(truncate_text("ab", 1), "…");
        assert_eq!(display_width(&truncate_text("ab", 1)), 1);
    }
}
