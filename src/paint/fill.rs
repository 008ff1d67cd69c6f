use crate::paint::buffer::PixelBuffer;
use crate::paint::model::{Color, Point};

/// Scanline flood fill over 4-connected pixels that exactly match the seed's
/// RGBA value. Returns false without touching the buffer when the seed
/// already has the (opaque) fill color.
///
/// Each popped seed is walked left to the start of its run, then the run is
/// painted left to right. Only the first pixel of every matching run in the
/// rows above and below is pushed, so the stack holds one entry per run.
pub fn flood_fill(buffer: &mut PixelBuffer, seed: Point, color: Color) -> bool {
    scanline_fill(buffer, seed, color).is_some()
}

/// The fill itself. Returns how many seeds were pushed after the initial one,
/// or `None` when the seed already has the fill color.
fn scanline_fill(buffer: &mut PixelBuffer, seed: Point, color: Color) -> Option<usize> {
    let target = buffer.get(seed.x, seed.y);
    let fill = color.opaque();
    if target == fill {
        return None;
    }

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let mut stack = vec![seed];
    let mut pushed = 0;

    while let Some(Point { x, y }) = stack.pop() {
        let mut x1 = x;
        while x1 >= 0 && buffer.matches(x1, y, target) {
            x1 -= 1;
        }
        x1 += 1;

        let mut span_up = false;
        let mut span_down = false;
        while x1 < width && buffer.matches(x1, y, target) {
            buffer.set(x1, y, fill);

            if y > 0 {
                let above = buffer.matches(x1, y - 1, target);
                if !span_up && above {
                    stack.push(Point::new(x1, y - 1));
                    pushed += 1;
                    span_up = true;
                } else if span_up && !above {
                    span_up = false;
                }
            }
            if y < height - 1 {
                let below = buffer.matches(x1, y + 1, target);
                if !span_down && below {
                    stack.push(Point::new(x1, y + 1));
                    pushed += 1;
                    span_down = true;
                } else if span_down && !below {
                    span_down = false;
                }
            }
            x1 += 1;
        }
    }

    Some(pushed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn fills_whole_uniform_buffer() {
        let mut buffer = PixelBuffer::new(5, 5, Color::WHITE);
        assert!(flood_fill(&mut buffer, Point::new(2, 2), RED));
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(buffer.get(x, y), RED);
            }
        }
    }

    #[test]
    fn filling_with_same_color_is_noop() {
        let mut buffer = PixelBuffer::new(5, 5, RED);
        let before = buffer.clone();
        assert!(!flood_fill(&mut buffer, Point::new(0, 0), RED));
        assert_eq!(buffer, before);
    }

    #[test]
    fn second_fill_is_idempotent() {
        let mut buffer = PixelBuffer::new(6, 6, Color::WHITE);
        assert!(flood_fill(&mut buffer, Point::new(1, 1), BLUE));
        let after_first = buffer.clone();
        assert!(!flood_fill(&mut buffer, Point::new(4, 4), BLUE));
        assert_eq!(buffer, after_first);
    }

    #[test]
    fn uniform_fill_pushes_one_seed_per_row() {
        let mut buffer = PixelBuffer::new(5, 5, Color::WHITE);
        assert_eq!(scanline_fill(&mut buffer, Point::new(2, 2), RED), Some(4));
    }

    #[test]
    fn split_row_pushes_one_seed_per_run() {
        // Row 0 is cut into three runs by walls at x=2 and x=4; row 2 is one run.
        let mut buffer = PixelBuffer::new(7, 3, Color::WHITE);
        buffer.set(2, 0, Color::BLACK);
        buffer.set(4, 0, Color::BLACK);
        assert_eq!(scanline_fill(&mut buffer, Point::new(0, 1), RED), Some(4));
        assert_eq!(buffer.get(3, 0), RED);
        assert_eq!(buffer.get(6, 0), RED);
        assert_eq!(buffer.get(4, 0), Color::BLACK);
    }

    #[test]
    fn same_color_fill_pushes_nothing() {
        let mut buffer = PixelBuffer::new(3, 3, RED);
        assert_eq!(scanline_fill(&mut buffer, Point::new(1, 1), RED), None);
    }

    #[test]
    fn boundary_pixels_are_not_crossed() {
        // Vertical wall at x=3 splits the buffer in two.
        let mut buffer = PixelBuffer::new(7, 5, Color::WHITE);
        for y in 0..5 {
            buffer.set(3, y, Color::BLACK);
        }
        flood_fill(&mut buffer, Point::new(0, 0), RED);
        for y in 0..5 {
            for x in 0..3 {
                assert_eq!(buffer.get(x, y), RED);
            }
            assert_eq!(buffer.get(3, y), Color::BLACK);
            for x in 4..7 {
                assert_eq!(buffer.get(x, y), Color::WHITE);
            }
        }
    }

    #[test]
    fn diagonal_neighbours_are_not_connected() {
        let mut buffer = PixelBuffer::new(3, 3, Color::BLACK);
        buffer.set(0, 0, Color::WHITE);
        buffer.set(1, 1, Color::WHITE);
        flood_fill(&mut buffer, Point::new(0, 0), RED);
        assert_eq!(buffer.get(0, 0), RED);
        assert_eq!(buffer.get(1, 1), Color::WHITE);
    }

    #[test]
    fn fills_around_concave_obstacle() {
        // U-shaped wall opening upward; the interior is reachable from above.
        let mut buffer = PixelBuffer::new(9, 9, Color::WHITE);
        for y in 3..8 {
            buffer.set(2, y, Color::BLACK);
            buffer.set(6, y, Color::BLACK);
        }
        for x in 2..=6 {
            buffer.set(x, 7, Color::BLACK);
        }
        flood_fill(&mut buffer, Point::new(0, 8), RED);
        assert_eq!(buffer.get(4, 5), RED);
        assert_eq!(buffer.get(4, 8), RED);
        assert_eq!(buffer.get(4, 7), Color::BLACK);
    }

    #[test]
    fn target_match_includes_alpha() {
        let mut pixels = Vec::new();
        for i in 0..4 {
            let alpha = if i == 3 { 0 } else { 255 };
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
        let mut buffer = PixelBuffer::from_pixels(4, 1, pixels);
        flood_fill(&mut buffer, Point::new(0, 0), RED);
        assert_eq!(buffer.get(2, 0), RED);
        assert_eq!(buffer.get(3, 0), Color::rgba(255, 255, 255, 0));
    }

    #[test]
    fn translucent_seed_with_fill_rgb_is_still_filled() {
        let mut buffer = PixelBuffer::from_pixels(2, 1, vec![255, 0, 0, 0, 255, 0, 0, 0]);
        assert!(flood_fill(&mut buffer, Point::new(1, 0), RED));
        assert_eq!(buffer.get(0, 0), RED);
    }

    #[test]
    fn large_fill_does_not_overflow() {
        let mut buffer = PixelBuffer::new(512, 512, Color::WHITE);
        assert!(flood_fill(&mut buffer, Point::new(256, 256), BLUE));
        assert_eq!(buffer.get(0, 511), BLUE);
        assert_eq!(buffer.get(511, 0), BLUE);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn seed_outside_buffer_panics() {
        let mut buffer = PixelBuffer::new(2, 2, Color::WHITE);
        flood_fill(&mut buffer, Point::new(5, 5), RED);
    }
}
