use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::idx::{
    parse_image_header, parse_label_header, ImageHeader, LabelHeader, IMAGE_HEADER_LEN,
    IMAGE_MAGIC, LABEL_HEADER_LEN, LABEL_MAGIC,
};
use crate::error::DatasetError;
use crate::math::Matrix;

/// Number of classes a label one-hot vector spans (digits 0-9).
pub const LABEL_CLASSES: usize = 10;

const MAX_INTENSITY: f64 = 255.0;

fn read_file(path: &Path, kind: &str) -> Result<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("Failed to open {} file: {}", kind, path.display()))
}

/// Random-access reader over an IDX1 label file.
///
/// The whole file is read once by [`LabelParser::open`] and kept in an owned,
/// immutable buffer, so lookups never share a cursor.
#[derive(Debug, Clone)]
pub struct LabelParser {
    header: LabelHeader,
    bytes: Vec<u8>,
}

impl LabelParser {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_file(path, "label")?;
        let parser = Self::from_bytes(bytes)
            .with_context(|| format!("Failed to read label header: {}", path.display()))?;
        log::debug!(
            "Opened label file {} with {} labels",
            path.display(),
            parser.len()
        );
        Ok(parser)
    }

    /// Build a parser over an in-memory label file.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let header = parse_label_header(&bytes)?;
        if header.magic != LABEL_MAGIC {
            log::warn!(
                "Unexpected label file magic {} (expected {})",
                header.magic,
                LABEL_MAGIC
            );
        }
        Ok(Self { header, bytes })
    }

    pub fn magic(&self) -> u32 {
        self.header.magic
    }

    /// Number of labels declared in the header.
    pub fn len(&self) -> usize {
        self.header.count
    }

    pub fn is_empty(&self) -> bool {
        self.header.count == 0
    }

    /// Raw class byte stored for `index`.
    pub fn label_value(&self, index: usize) -> Result<u8, DatasetError> {
        if index >= self.header.count {
            return Err(DatasetError::OutOfBounds {
                index,
                count: self.header.count,
            });
        }
        Ok(self.bytes[LABEL_HEADER_LEN + index])
    }

    /// One-hot `(10, 1)` column with a 1.0 at the row of the stored class.
    pub fn get_label(&self, index: usize) -> Result<Matrix, DatasetError> {
        let value = self.label_value(index)?;
        let class = value as usize;
        if class >= LABEL_CLASSES {
            return Err(DatasetError::InvalidLabel { index, value });
        }
        Ok(Matrix::from_fn(LABEL_CLASSES, 1, |row, _| {
            if row == class {
                1.0
            } else {
                0.0
            }
        }))
    }
}

/// Random-access reader over an IDX3 image file.
///
/// Pixels are returned normalized to `[0, 1]` by dividing each byte by 255.
#[derive(Debug, Clone)]
pub struct ImageParser {
    header: ImageHeader,
    bytes: Vec<u8>,
}

impl ImageParser {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_file(path, "image")?;
        let parser = Self::from_bytes(bytes)
            .with_context(|| format!("Failed to read image header: {}", path.display()))?;
        log::debug!(
            "Opened image file {} with {} images of {}x{} pixels",
            path.display(),
            parser.len(),
            parser.image_rows(),
            parser.image_cols()
        );
        Ok(parser)
    }

    /// Build a parser over an in-memory image file.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let header = parse_image_header(&bytes)?;
        if header.magic != IMAGE_MAGIC {
            log::warn!(
                "Unexpected image file magic {} (expected {})",
                header.magic,
                IMAGE_MAGIC
            );
        }
        Ok(Self { header, bytes })
    }

    pub fn magic(&self) -> u32 {
        self.header.magic
    }

    /// Number of images declared in the header.
    pub fn len(&self) -> usize {
        self.header.count
    }

    pub fn is_empty(&self) -> bool {
        self.header.count == 0
    }

    pub fn image_rows(&self) -> usize {
        self.header.rows
    }

    pub fn image_cols(&self) -> usize {
        self.header.cols
    }

    pub fn pixels_per_image(&self) -> usize {
        self.header.pixels_per_image()
    }

    fn pixels(&self, index: usize) -> Result<&[u8], DatasetError> {
        if index >= self.header.count {
            return Err(DatasetError::OutOfBounds {
                index,
                count: self.header.count,
            });
        }
        let size = self.pixels_per_image();
        let start = IMAGE_HEADER_LEN + index * size;
        Ok(&self.bytes[start..start + size])
    }

    fn normalized(&self, index: usize) -> Result<Vec<f64>, DatasetError> {
        Ok(self
            .pixels(index)?
            .iter()
            .map(|&px| px as f64 / MAX_INTENSITY)
            .collect())
    }

    /// Image `index` flattened row-major into a `(rows * cols, 1)` column.
    pub fn get_image(&self, index: usize) -> Result<Matrix, DatasetError> {
        Ok(Matrix::column(self.normalized(index)?))
    }

    /// Image `index` laid out as a `(rows, cols)` matrix.
    pub fn get_image_grid(&self, index: usize) -> Result<Matrix, DatasetError> {
        let pixels = self.normalized(index)?;
        Ok(Matrix::from_vec(
            self.header.rows,
            self.header.cols,
            pixels,
        )?)
    }
}
