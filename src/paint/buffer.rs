use crate::paint::model::{Color, Point};
use std::sync::Arc;

/// Width×height RGBA raster, row-major, four bytes per pixel.
///
/// Coordinates are always bounds-checked: reading or writing outside the
/// buffer is a caller bug and panics instead of wrapping or clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Immutable deep copy of a buffer's pixels, used by history.
///
/// Cloning a snapshot shares the same frozen bytes; it never aliases the live
/// buffer, which only ever copies out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let mut pixels = vec![0u8; byte_len(width, height)];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&fill.to_rgba_array());
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), byte_len(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn get(&self, x: i32, y: i32) -> Color {
        let idx = self.index(x, y);
        Color::rgba(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// Writes an opaque pixel; the color's alpha is ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.opaque().to_rgba_array());
    }

    /// Exact RGBA comparison used by flood fill.
    pub fn matches(&self, x: i32, y: i32, color: Color) -> bool {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4] == color.to_rgba_array()
    }

    /// Fills the intersection of the given rectangle with the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.width as i32);
        let y1 = y.saturating_add(height).min(self.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let rgba = color.opaque().to_rgba_array();
        for row in y0..y1 {
            let start = self.index(x0, row);
            let end = start + (x1 - x0) as usize * 4;
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.fill_rect(0, 0, self.width as i32, self.height as i32, color);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: Arc::from(self.pixels.as_slice()),
        }
    }

    /// Overwrites every pixel from a snapshot of the same dimensions.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        assert_eq!(
            (self.width, self.height),
            (snapshot.width, snapshot.height),
            "snapshot dimensions differ from the live buffer"
        );
        self.pixels.copy_from_slice(&snapshot.pixels);
    }

    /// New buffer of another size keeping the overlapping top-left region.
    pub fn resized(&self, width: u32, height: u32, background: Color) -> PixelBuffer {
        let mut out = PixelBuffer::new(width, height, background);
        let copy_w = self.width.min(width) as usize * 4;
        for y in 0..self.height.min(height) as usize {
            let src = y * self.width as usize * 4;
            let dst = y * width as usize * 4;
            out.pixels[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
        }
        out
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_layout_is_row_major_rgba() {
        let mut buffer = PixelBuffer::new(3, 2, Color::WHITE);
        buffer.set(2, 1, Color::rgb(1, 2, 3));
        let idx = (1 * 3 + 2) * 4;
        assert_eq!(&buffer.pixels()[idx..idx + 4], &[1, 2, 3, 255]);
    }

    #[test]
    fn set_forces_opaque_alpha() {
        let mut buffer = PixelBuffer::new(2, 2, Color::WHITE);
        buffer.set(0, 0, Color::rgba(9, 9, 9, 0));
        assert_eq!(buffer.get(0, 0), Color::rgba(9, 9, 9, 255));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_read_panics() {
        let buffer = PixelBuffer::new(2, 2, Color::WHITE);
        let _ = buffer.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn negative_write_panics() {
        let mut buffer = PixelBuffer::new(2, 2, Color::WHITE);
        buffer.set(-1, 0, Color::BLACK);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_writes() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        let snapshot = buffer.snapshot();
        buffer.set(1, 1, Color::BLACK);
        assert!(snapshot.pixels().iter().all(|b| *b == 255));
        buffer.restore(&snapshot);
        assert_eq!(buffer.get(1, 1), Color::WHITE);
    }

    #[test]
    #[should_panic(expected = "dimensions")]
    fn restore_rejects_other_dimensions() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        let other = PixelBuffer::new(3, 4, Color::WHITE).snapshot();
        buffer.restore(&other);
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut buffer = PixelBuffer::new(4, 4, Color::WHITE);
        buffer.fill_rect(-2, -2, 4, 4, Color::BLACK);
        assert_eq!(buffer.get(0, 0), Color::BLACK);
        assert_eq!(buffer.get(1, 1), Color::BLACK);
        assert_eq!(buffer.get(2, 2), Color::WHITE);
        buffer.fill_rect(10, 10, 3, 3, Color::BLACK);
    }

    #[test]
    fn resized_keeps_top_left_and_fills_new_area() {
        let mut buffer = PixelBuffer::new(2, 2, Color::WHITE);
        buffer.set(1, 1, Color::BLACK);
        let grown = buffer.resized(3, 3, Color::rgb(0, 0, 255));
        assert_eq!(grown.get(1, 1), Color::BLACK);
        assert_eq!(grown.get(0, 0), Color::WHITE);
        assert_eq!(grown.get(2, 2), Color::rgb(0, 0, 255));

        let shrunk = grown.resized(1, 1, Color::WHITE);
        assert_eq!(shrunk.pixels(), &[255, 255, 255, 255]);
    }
}
