//! IDX header layout.
//!
//! ```text
//! label file (IDX1)            image file (IDX3)
//! 0   magic  u32 BE            0   magic  u32 BE
//! 4   count  u32 BE            4   count  u32 BE
//! 8.. count x u8 labels        8   rows   u32 BE
//!                              12  cols   u32 BE
//!                              16.. count x rows x cols u8 pixels
//! ```
use anyhow::{anyhow, Result};

pub const LABEL_HEADER_LEN: usize = 8;
pub const IMAGE_HEADER_LEN: usize = 16;

pub const LABEL_MAGIC: u32 = 2049;
pub const IMAGE_MAGIC: u32 = 2051;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelHeader {
    pub magic: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub magic: u32,
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
}

impl ImageHeader {
    pub fn pixels_per_image(&self) -> usize {
        self.rows * self.cols
    }
}

/// Big-endian `u32` at `offset`.
pub fn read_u32_be(bytes: &[u8], offset: usize) -> Result<u32> {
    let end = offset
        .checked_add(4)
        .ok_or_else(|| anyhow!("offset {} overflows", offset))?;
    let field = bytes
        .get(offset..end)
        .ok_or_else(|| anyhow!("header field at offset {} is past the end of the data", offset))?;
    Ok(u32::from_be_bytes([field[0], field[1], field[2], field[3]]))
}

/// Decode a label header and check the buffer covers every declared label.
pub fn parse_label_header(bytes: &[u8]) -> Result<LabelHeader> {
    if bytes.len() < LABEL_HEADER_LEN {
        return Err(anyhow!(
            "label file too short: expected at least {} header bytes, got {}",
            LABEL_HEADER_LEN,
            bytes.len()
        ));
    }
    let header = LabelHeader {
        magic: read_u32_be(bytes, 0)?,
        count: read_u32_be(bytes, 4)? as usize,
    };
    let required = LABEL_HEADER_LEN + header.count;
    if bytes.len() < required {
        return Err(anyhow!(
            "label file too short: header declares {} labels ({} bytes needed), got {}",
            header.count,
            required,
            bytes.len()
        ));
    }
    Ok(header)
}

/// Decode an image header and check the buffer covers every declared image.
pub fn parse_image_header(bytes: &[u8]) -> Result<ImageHeader> {
    if bytes.len() < IMAGE_HEADER_LEN {
        return Err(anyhow!(
            "image file too short: expected at least {} header bytes, got {}",
            IMAGE_HEADER_LEN,
            bytes.len()
        ));
    }
    let header = ImageHeader {
        magic: read_u32_be(bytes, 0)?,
        count: read_u32_be(bytes, 4)? as usize,
        rows: read_u32_be(bytes, 8)? as usize,
        cols: read_u32_be(bytes, 12)? as usize,
    };
    let required = header
        .rows
        .checked_mul(header.cols)
        .and_then(|pixels| pixels.checked_mul(header.count))
        .and_then(|data| data.checked_add(IMAGE_HEADER_LEN))
        .ok_or_else(|| {
            anyhow!(
                "image file declares {} images of {}x{} pixels, which overflows",
                header.count,
                header.rows,
                header.cols
            )
        })?;
    if bytes.len() < required {
        return Err(anyhow!(
            "image file too short: header declares {} images of {}x{} pixels ({} bytes needed), got {}",
            header.count,
            header.rows,
            header.cols,
            required,
            bytes.len()
        ));
    }
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_fields() {
        let bytes = [0x00, 0x00, 0x08, 0x01, 0x00, 0x00, 0xEA, 0x60];
        assert_eq!(read_u32_be(&bytes, 0).unwrap(), 2049);
        assert_eq!(read_u32_be(&bytes, 4).unwrap(), 60000);
        assert!(read_u32_be(&bytes, 6).is_err());
    }

    #[test]
    fn label_header_rejects_missing_labels() {
        let mut bytes = vec![0, 0, 8, 1, 0, 0, 0, 3];
        bytes.extend_from_slice(&[1, 2]);
        assert!(parse_label_header(&bytes).is_err());
        bytes.push(3);
        let header = parse_label_header(&bytes).unwrap();
        assert_eq!(header.count, 3);
        assert_eq!(header.magic, LABEL_MAGIC);
    }

    #[test]
    fn image_header_rejects_truncated_pixels() {
        let mut bytes = vec![0, 0, 8, 3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3];
        bytes.extend(std::iter::repeat(0u8).take(11));
        assert!(parse_image_header(&bytes).is_err());
        bytes.push(0);
        let header = parse_image_header(&bytes).unwrap();
        assert_eq!(header.pixels_per_image(), 6);
        assert_eq!(header.count, 2);
    }
}
