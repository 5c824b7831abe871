//! Columnar property storage.
//!
//! Component properties live in per-concern columns rather than per-node
//! structs: each module owns a set of thread-local [`SlotArray`]s indexed
//! by component index.
//!
//! - [`core`] - type tag, parent back-reference, ordered children
//! - [`visual`] - position, size, glass effects, window background
//! - [`text`] - text content, placeholder, font and color
//! - [`interaction`] - stored event handlers

use std::cell::RefCell;

pub mod core;
pub mod interaction;
pub mod text;
pub mod visual;

// =============================================================================
// SlotArray
// =============================================================================

/// A growable column of property values with a per-column default.
///
/// Cells spring into existence at their default when an index is first
/// touched, and return to it when cleared. Plain values only - the tree is
/// static after construction, so no reactive tracking is needed here.
pub(crate) struct SlotArray<T: Clone> {
    default: T,
    cells: RefCell<Vec<T>>,
}

impl<T: Clone> SlotArray<T> {
    pub(crate) fn new(default: T) -> Self {
        Self {
            default,
            cells: RefCell::new(Vec::new()),
        }
    }

    /// Grow the column so `index` is addressable.
    pub(crate) fn ensure(&self, index: usize) {
        let mut cells = self.cells.borrow_mut();
        if cells.len() <= index {
            cells.resize(index + 1, self.default.clone());
        }
    }

    /// Read the value at `index` (default if never written).
    pub(crate) fn get(&self, index: usize) -> T {
        let cells = self.cells.borrow();
        cells.get(index).unwrap_or(&self.default).clone()
    }

    /// Write the value at `index`, growing as needed.
    pub(crate) fn set(&self, index: usize, value: T) {
        self.ensure(index);
        self.cells.borrow_mut()[index] = value;
    }

    /// Borrow the value at `index` for in-place mutation.
    pub(crate) fn update<R>(&self, index: usize, f: impl FnOnce(&mut T) -> R) -> R {
        self.ensure(index);
        f(&mut self.cells.borrow_mut()[index])
    }

    /// Reset the value at `index` back to the column default.
    pub(crate) fn clear(&self, index: usize) {
        let mut cells = self.cells.borrow_mut();
        if let Some(cell) = cells.get_mut(index) {
            *cell = self.default.clone();
        }
    }

    /// Drop all cells, freeing memory.
    pub(crate) fn clear_all(&self) {
        self.cells.borrow_mut().clear();
    }
}

// =============================================================================
// Cross-Module Operations
// =============================================================================

/// Ensure every column has capacity for the given index.
pub fn ensure_all_capacity(index: usize) {
    core::ensure_capacity(index);
    visual::ensure_capacity(index);
    text::ensure_capacity(index);
    interaction::ensure_capacity(index);
}

/// Clear every column's value at the given index.
pub fn clear_all_at_index(index: usize) {
    core::clear_at_index(index);
    visual::clear_at_index(index);
    text::clear_at_index(index);
    interaction::clear_at_index(index);
}

/// Reset all columns (for testing and full teardown).
pub fn reset_all_arrays() {
    core::reset();
    visual::reset();
    text::reset();
    interaction::reset();
}
