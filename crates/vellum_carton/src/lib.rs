//! Carton - The shared toolbox for Vellum.
//!
//! Like the carton an artist carries between studios, this crate holds the
//! small, foundational pieces every other Vellum crate reaches for.
//!
//! # Modules
//!
//! - **line_index**: byte offset to line/column conversion for reporters
//! - **Re-exports**: compact strings, small vectors, fast hash collections
//!
//! # Example
//!
//! ```
//! use vellum_carton::LineIndex;
//!
//! let index = LineIndex::new("class A {\n  a = 1;\n}\n");
//! assert_eq!(index.line_col(12), (2, 3));
//! ```

pub mod line_index;

pub use line_index::LineIndex;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};
