use crate::paint::buffer::PixelBuffer;
use crate::paint::clip::{clip_polygon, clip_segment, ClipRect};
use crate::paint::glyphs::{glyph, scale_for_font_size, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::paint::model::{Color, Point, PointF, MAX_THICKNESS};
use rand::Rng;
use std::f64::consts::TAU;

/// Clipped Bresenham line that stamps a `thickness`×`thickness` square at
/// every step. Returns false when the segment lies entirely off canvas.
pub fn draw_line(
    buffer: &mut PixelBuffer,
    start: Point,
    end: Point,
    color: Color,
    thickness: u32,
) -> bool {
    let rect = ClipRect::for_canvas(buffer.width(), buffer.height());
    let Some((clipped_start, clipped_end)) = clip_segment(start.to_f64(), end.to_f64(), rect)
    else {
        return false;
    };
    let start = clipped_start.round();
    let end = clipped_end.round();

    let mut x0 = start.x;
    let mut y0 = start.y;
    let x1 = end.x;
    let y1 = end.y;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp_square(buffer, Point::new(x0, y0), color, thickness);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    true
}

/// Square stamp centred on `center`; the parts off canvas are dropped.
pub fn stamp_square(buffer: &mut PixelBuffer, center: Point, color: Color, thickness: u32) {
    let size = pen_size(thickness) as i32;
    let half = size / 2;
    buffer.fill_rect(
        center.x.saturating_sub(half),
        center.y.saturating_sub(half),
        size,
        size,
        color,
    );
}

/// Thickness as actually rasterized: at least one pixel, at most
/// [`MAX_THICKNESS`].
fn pen_size(thickness: u32) -> u32 {
    thickness.clamp(1, MAX_THICKNESS)
}

/// Rectangle outline; negative width or height extends left or up.
pub fn draw_rect(
    buffer: &mut PixelBuffer,
    origin: Point,
    width: i32,
    height: i32,
    color: Color,
    thickness: u32,
) {
    let (x0, x1) = if width >= 0 {
        (origin.x, origin.x.saturating_add(width))
    } else {
        (origin.x.saturating_add(width), origin.x)
    };
    let (y0, y1) = if height >= 0 {
        (origin.y, origin.y.saturating_add(height))
    } else {
        (origin.y.saturating_add(height), origin.y)
    };

    let corners = [
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ];
    for i in 0..corners.len() {
        draw_line(
            buffer,
            corners[i],
            corners[(i + 1) % corners.len()],
            color,
            thickness,
        );
    }
}

/// Circle outline of the given radius. A zero radius draws nothing.
pub fn draw_circle(
    buffer: &mut PixelBuffer,
    center: Point,
    radius: f64,
    color: Color,
    thickness: u32,
) {
    if !(radius > 0.0) {
        return;
    }
    let half = pen_size(thickness) as f64 * 0.5;
    let outer = radius + half;
    let inner = (radius - half).max(0.0);
    let (cx, cy) = (center.x as f64, center.y as f64);

    let x_min = ((cx - outer).floor() as i32).max(0);
    let y_min = ((cy - outer).floor() as i32).max(0);
    let x_max = ((cx + outer).ceil() as i32).min(buffer.width() as i32 - 1);
    let y_max = ((cy + outer).ceil() as i32).min(buffer.height() as i32 - 1);

    let outer_sq = outer * outer;
    let inner_sq = inner * inner;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= outer_sq && dist_sq >= inner_sq {
                buffer.set(x, y, color);
            }
        }
    }
}

/// Closed polygon outline through the given vertices.
pub fn draw_polygon(buffer: &mut PixelBuffer, vertices: &[PointF], color: Color, thickness: u32) {
    let points: Vec<Point> = vertices.iter().map(|v| v.round()).collect();
    match points.len() {
        0 => {}
        1 => stamp_square(buffer, points[0], color, thickness),
        n => {
            for i in 0..n {
                draw_line(buffer, points[i], points[(i + 1) % n], color, thickness);
            }
        }
    }
}

/// Isosceles triangle mirrored around the vertical through `start`.
pub fn triangle_vertices(start: Point, end: Point) -> [PointF; 3] {
    let (start, end) = (start.to_f64(), end.to_f64());
    [start, end, PointF::new(2.0 * start.x - end.x, end.y)]
}

/// Triangle outline, clipped to the canvas before stroking. Returns false
/// when nothing of it is visible.
pub fn draw_triangle(
    buffer: &mut PixelBuffer,
    start: Point,
    end: Point,
    color: Color,
    thickness: u32,
) -> bool {
    let rect = ClipRect::for_canvas(buffer.width(), buffer.height());
    let clipped = clip_polygon(&triangle_vertices(start, end), rect);
    if clipped.is_empty() {
        return false;
    }
    draw_polygon(buffer, &clipped, color, thickness);
    true
}

/// Filled disc; radii below half a pixel still cover the centre pixel.
pub fn stamp_disc(buffer: &mut PixelBuffer, center: PointF, radius: f64, color: Color) {
    let radius = radius.max(0.5);
    let x_min = ((center.x - radius).floor() as i32).max(0);
    let y_min = ((center.y - radius).floor() as i32).max(0);
    let x_max = ((center.x + radius).ceil() as i32).min(buffer.width() as i32 - 1);
    let y_max = ((center.y + radius).ceil() as i32).min(buffer.height() as i32 - 1);
    let radius_sq = radius * radius;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f64 - center.x;
            let dy = y as f64 - center.y;
            if dx * dx + dy * dy <= radius_sq {
                buffer.set(x, y, color);
            }
        }
    }
}

/// Round brush: discs of radius `thickness / 2` every pixel along the segment.
pub fn brush_round_segment(
    buffer: &mut PixelBuffer,
    from: Point,
    to: Point,
    color: Color,
    thickness: u32,
) {
    let radius = pen_size(thickness) as f64 * 0.5;
    stamp_discs_along(buffer, from.to_f64(), to.to_f64(), radius, color);
}

/// Spray brush: `dots` single pixels scattered in a disc of radius
/// `radius_factor * thickness`. Angle and radius are both sampled uniformly,
/// so the dots cluster towards the centre. Returns how many landed on canvas.
pub fn spray<R: Rng + ?Sized>(
    buffer: &mut PixelBuffer,
    center: Point,
    color: Color,
    thickness: u32,
    dots: u32,
    radius_factor: f64,
    rng: &mut R,
) -> u32 {
    let max_radius = radius_factor * pen_size(thickness) as f64;
    let mut landed = 0;
    for _ in 0..dots {
        let (dx, dy) = spray_offset(rng, max_radius);
        let x = (center.x as f64 + dx).round() as i32;
        let y = (center.y as f64 + dy).round() as i32;
        if buffer.contains(x, y) {
            buffer.set(x, y, color);
            landed += 1;
        }
    }
    landed
}

fn spray_offset<R: Rng + ?Sized>(rng: &mut R, max_radius: f64) -> (f64, f64) {
    let angle = rng.gen_range(0.0..TAU);
    let radius = rng.gen_range(0.0..=max_radius);
    (radius * angle.cos(), radius * angle.sin())
}

/// Pen width for calligraphy: widest on diagonal and vertical motion,
/// exactly `thickness` on horizontal motion.
pub fn calligraphy_width(thickness: u32, from: PointF, to: PointF) -> f64 {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let thickness = pen_size(thickness) as f64;
    thickness + thickness * 2.0 * angle.sin().abs()
}

/// Calligraphy brush segment for a move to `to`.
///
/// The pen angle comes from the two previously recorded points
/// (`before`→`from`), or `from`→`to` on the first move. The stroke is a
/// quadratic curve from the midpoint of `before`→`from`, with `from` as the
/// control point, to the midpoint of `from`→`to`, so consecutive segments
/// join smoothly. The first move starts at `from` itself. Finish a stroke
/// with [`calligraphy_tail`]. Returns the width used.
pub fn calligraphy_segment(
    buffer: &mut PixelBuffer,
    before: Option<Point>,
    from: Point,
    to: Point,
    color: Color,
    thickness: u32,
) -> f64 {
    let (from, to) = (from.to_f64(), to.to_f64());
    let (start, width) = match before {
        Some(before) => {
            let before = before.to_f64();
            (
                before.midpoint(from),
                calligraphy_width(thickness, before, from),
            )
        }
        None => (from, calligraphy_width(thickness, from, to)),
    };
    let radius = width * 0.5;
    let bounds = ClipRect::for_canvas(buffer.width(), buffer.height()).expanded(radius);

    stamp_disc(buffer, start, radius, color);
    stamp_quadratic(
        buffer,
        [start, from, from.midpoint(to)],
        radius,
        color,
        bounds,
        QUADRATIC_MAX_DEPTH,
    );
    width
}

/// Closes a calligraphy stroke: the last half segment from the midpoint of
/// `before`→`last` to `last`, at the width of that direction.
pub fn calligraphy_tail(
    buffer: &mut PixelBuffer,
    before: Point,
    last: Point,
    color: Color,
    thickness: u32,
) {
    let (before, last) = (before.to_f64(), last.to_f64());
    let radius = calligraphy_width(thickness, before, last) * 0.5;
    stamp_discs_along(buffer, before.midpoint(last), last, radius, color);
}

const QUADRATIC_MAX_DEPTH: u32 = 48;

/// Stamps discs along a quadratic curve by halving it until each piece is
/// about a pixel long. Pieces whose control hull misses `bounds` are dropped
/// without subdividing further.
fn stamp_quadratic(
    buffer: &mut PixelBuffer,
    [p0, p1, p2]: [PointF; 3],
    radius: f64,
    color: Color,
    bounds: ClipRect,
    depth: u32,
) {
    let hull_outside = p0.x.max(p1.x).max(p2.x) < bounds.x_min
        || p0.x.min(p1.x).min(p2.x) > bounds.x_max
        || p0.y.max(p1.y).max(p2.y) < bounds.y_min
        || p0.y.min(p1.y).min(p2.y) > bounds.y_max;
    if hull_outside {
        return;
    }
    if depth == 0 || p0.distance(p1) + p1.distance(p2) <= 1.0 {
        stamp_disc(buffer, p2, radius, color);
        return;
    }
    let left = p0.midpoint(p1);
    let right = p1.midpoint(p2);
    let mid = left.midpoint(right);
    stamp_quadratic(buffer, [p0, left, mid], radius, color, bounds, depth - 1);
    stamp_quadratic(buffer, [mid, right, p2], radius, color, bounds, depth - 1);
}

/// Continuous round-capped stroke segment, as a path `lineTo` would paint.
pub fn stroke_path_segment(
    buffer: &mut PixelBuffer,
    from: Point,
    to: Point,
    color: Color,
    thickness: u32,
) {
    let radius = pen_size(thickness) as f64 * 0.5;
    let pad = radius.ceil() as i32 + 1;
    let x_min = from.x.min(to.x).saturating_sub(pad).max(0);
    let y_min = from.y.min(to.y).saturating_sub(pad).max(0);
    let x_max = from
        .x
        .max(to.x)
        .saturating_add(pad)
        .min(buffer.width() as i32 - 1);
    let y_max = from
        .y
        .max(to.y)
        .saturating_add(pad)
        .min(buffer.height() as i32 - 1);

    let radius_sq = radius.max(0.5).powi(2);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            if point_segment_distance_sq(Point::new(x, y), from, to) <= radius_sq {
                buffer.set(x, y, color);
            }
        }
    }
}

/// Bitmap text whose baseline starts at `at`. Off-canvas pixels are dropped.
pub fn draw_text(buffer: &mut PixelBuffer, at: Point, text: &str, color: Color, font_size: u32) {
    let scale = scale_for_font_size(font_size);
    let top = at.y.saturating_sub(GLYPH_HEIGHT * scale);
    let mut pen_x = at.x;

    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        buffer.fill_rect(
                            pen_x.saturating_add(col * scale),
                            top.saturating_add(row as i32 * scale),
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        pen_x = pen_x.saturating_add(GLYPH_ADVANCE * scale);
    }
}

/// Discs every pixel along `from`→`to`, skipping the part of the segment
/// farther than `radius` from the canvas.
fn stamp_discs_along(
    buffer: &mut PixelBuffer,
    from: PointF,
    to: PointF,
    radius: f64,
    color: Color,
) {
    let bounds = ClipRect::for_canvas(buffer.width(), buffer.height()).expanded(radius);
    let Some((from, to)) = clip_segment(from, to, bounds) else {
        return;
    };
    let steps = from.distance(to).ceil().max(1.0) as usize;
    let mut last = None;
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let point = PointF::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        if last == Some(point.round()) {
            continue;
        }
        last = Some(point.round());
        stamp_disc(buffer, point, radius, color);
    }
}

fn point_segment_distance_sq(point: Point, start: Point, end: Point) -> f64 {
    let px = point.x as f64;
    let py = point.y as f64;
    let x0 = start.x as f64;
    let y0 = start.y as f64;
    let vx = end.x as f64 - x0;
    let vy = end.y as f64 - y0;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f64::EPSILON {
        let dx = px - x0;
        let dy = py - y0;
        return dx * dx + dy * dy;
    }
    let t = (((px - x0) * vx + (py - y0) * vy) / len_sq).clamp(0.0, 1.0);
    let dx = px - (x0 + vx * t);
    let dy = py - (y0 + vy * t);
    dx * dx + dy * dy
}
