//! 8-bit RGB frame buffer and image output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{RenderError, RenderResult};

/// File position of renderer coordinate `i` along an axis of length `len`.
/// Both axes run opposite to file order.
fn flip(i: u32, len: u32) -> u32 {
    assert!(i < len, "pixel coordinate {i} outside 0..{len}");
    len - 1 - i
}

/// Flat RGB byte buffer, stored in file order.
///
/// Pixel (x, y) uses the renderer's coordinates: y = 0 is the bottom row and
/// x grows toward the left of the picture. The buffer is laid out top row
/// first and left column first, so it can be written out as is.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a black buffer. Fails instead of aborting when the buffer
    /// cannot be allocated.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let too_big = RenderError::BufferSize { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(too_big)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| RenderError::BufferSize { width, height })?;
        data.resize(len, 0);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A `size` x `size` buffer.
    pub fn square(size: u32) -> RenderResult<Self> {
        Self::new(size, size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, `3 * width * height` of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of column x within its row.
    pub(crate) fn column_offset(&self, x: u32) -> usize {
        flip(x, self.width) as usize * 3
    }

    /// Mutable row slices paired with their y coordinate, bottom row first.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [u8])> + '_ {
        let row_bytes = (self.width as usize * 3).max(1);
        let height = self.height;
        self.data
            .chunks_exact_mut(row_bytes)
            .enumerate()
            .rev()
            .map(move |(row, bytes)| (flip(row as u32, height), bytes))
    }

    /// Write a binary PPM: `P6 <w> <h> 255 ` followed by the raw bytes.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "P6 {} {} 255 ", self.width, self.height)?;
        writer.write_all(&self.data)
    }

    /// Save to `path`. A `.png` extension writes PNG, anything else PPM.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        if is_png {
            image::save_buffer(
                path,
                &self.data,
                self.width,
                self.height,
                image::ColorType::Rgb8,
            )?;
        } else {
            let mut writer = BufWriter::new(File::create(path)?);
            self.write_ppm(&mut writer)?;
            writer.flush()?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[cfg(test)]
impl FrameBuffer {
    /// Byte offset of pixel (x, y).
    fn offset(&self, x: u32, y: u32) -> usize {
        let row = flip(y, self.height) as usize;
        row * self.width as usize * 3 + self.column_offset(x)
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let k = self.offset(x, y);
        [self.data[k], self.data[k + 1], self.data[k + 2]]
    }
}
