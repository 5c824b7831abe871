//! Scene-graph engine.
//!
//! Parallel-arrays storage for the component tree: the registry hands out
//! indices, the arrays modules hold per-concern property columns, and the
//! tree module enforces the single-parent invariant.

pub mod arrays;
pub mod registry;
pub mod tree;

pub use registry::{
    allocate_index, allocated_count, get_id, get_index, is_allocated, release_index,
    reset_registry,
};
pub use tree::{attach, detach, is_ancestor};
