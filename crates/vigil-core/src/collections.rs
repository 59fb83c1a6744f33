//! Hash collections used across the pipeline.

pub use rustc_hash::{FxHashMap, FxHashSet};
