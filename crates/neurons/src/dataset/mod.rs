//! Readers for the big-endian IDX files used by MNIST-style corpora.
//!
//! `LabelParser` and `ImageParser` each load one file at construction and
//! decode individual items on demand. `DatasetView` pairs the two over a
//! contiguous index range.
pub mod idx;
pub mod parser;
pub mod view;

pub use parser::{ImageParser, LabelParser, LABEL_CLASSES};
pub use view::DatasetView;
