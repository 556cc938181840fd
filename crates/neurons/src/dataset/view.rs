use std::ops::Range;
use std::sync::Arc;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DatasetConfig;
use crate::dataset::parser::{ImageParser, LabelParser};
use crate::error::DatasetError;
use crate::math::Matrix;

/// A contiguous window of `len` items starting at `offset` in a paired
/// image/label dataset.
///
/// Local index `i` maps to item `offset + i` in both files (saturating, so an
/// overflowing index is rejected by the parser). The view does not
/// check `i` against its own length; out-of-range items are reported by the
/// parsers.
#[derive(Debug, Clone)]
pub struct DatasetView {
    offset: usize,
    len: usize,
    images: Arc<ImageParser>,
    labels: Arc<LabelParser>,
}

impl DatasetView {
    pub fn new(
        offset: usize,
        len: usize,
        images: Arc<ImageParser>,
        labels: Arc<LabelParser>,
    ) -> Self {
        log::trace!("Dataset view over items {}..{}", offset, offset.saturating_add(len));
        Self {
            offset,
            len,
            images,
            labels,
        }
    }

    /// View over the half-open item range `start..end`.
    pub fn from_range(
        range: Range<usize>,
        images: Arc<ImageParser>,
        labels: Arc<LabelParser>,
    ) -> Self {
        let len = range.end.saturating_sub(range.start);
        Self::new(range.start, len, images, labels)
    }

    /// Open both files named in `config` and view the configured window.
    ///
    /// Without a `limit`, the view covers every image after `offset`.
    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        let images = Arc::new(ImageParser::open(&config.image_path)?);
        let labels = Arc::new(LabelParser::open(&config.label_path)?);
        let len = match config.limit {
            Some(limit) => limit,
            None => images.len().saturating_sub(config.offset),
        };
        Ok(Self::new(config.offset, len, images, labels))
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get_image(&self, index: usize) -> Result<Matrix, DatasetError> {
        self.images.get_image(self.offset.saturating_add(index))
    }

    pub fn get_label(&self, index: usize) -> Result<Matrix, DatasetError> {
        self.labels.get_label(self.offset.saturating_add(index))
    }

    /// Split into the first `mid` items and the rest; both halves share the
    /// underlying parsers. `mid` is clamped to the view length.
    pub fn split_at(&self, mid: usize) -> (DatasetView, DatasetView) {
        let mid = mid.min(self.len);
        let head = DatasetView::new(
            self.offset,
            mid,
            Arc::clone(&self.images),
            Arc::clone(&self.labels),
        );
        let tail = DatasetView::new(
            self.offset.saturating_add(mid),
            self.len - mid,
            Arc::clone(&self.images),
            Arc::clone(&self.labels),
        );
        (head, tail)
    }

    /// `(image, label)` pairs for local indices `0..len`.
    pub fn samples(&self) -> impl Iterator<Item = Result<(Matrix, Matrix), DatasetError>> + '_ {
        (0..self.len).map(move |i| -> Result<(Matrix, Matrix), DatasetError> {
            Ok((self.get_image(i)?, self.get_label(i)?))
        })
    }

    /// A random permutation of the local indices `0..len`.
    pub fn shuffled_indices<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len).collect();
        indices.shuffle(rng);
        indices
    }
}
