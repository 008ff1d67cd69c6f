//! Segment and polygon clipping against an axis-aligned rectangle.

use crate::paint::model::PointF;

const PARALLEL_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl ClipRect {
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The rectangle of addressable pixel centres of a `width`×`height` canvas.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self::new(
            0.0,
            0.0,
            width.saturating_sub(1) as f64,
            height.saturating_sub(1) as f64,
        )
    }

    /// The same rectangle grown by `margin` on every side.
    pub fn expanded(self, margin: f64) -> Self {
        Self::new(
            self.x_min - margin,
            self.y_min - margin,
            self.x_max + margin,
            self.y_max + margin,
        )
    }

    /// Corners in top, right, bottom, left edge order.
    fn corners(&self) -> [PointF; 4] {
        [
            PointF::new(self.x_min, self.y_min),
            PointF::new(self.x_max, self.y_min),
            PointF::new(self.x_max, self.y_max),
            PointF::new(self.x_min, self.y_max),
        ]
    }
}

/// Liang-Barsky clipping. Returns the visible part of `start`→`end`, or
/// `None` when the segment misses the rectangle entirely.
pub fn clip_segment(start: PointF, end: PointF, rect: ClipRect) -> Option<(PointF, PointF)> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let p = [-dx, dx, -dy, dy];
    let q = [
        start.x - rect.x_min,
        rect.x_max - start.x,
        start.y - rect.y_min,
        rect.y_max - start.y,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;
    for (p, q) in p.into_iter().zip(q) {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let u = q / p;
        if p < 0.0 {
            u1 = u1.max(u);
        } else {
            u2 = u2.min(u);
        }
        if u1 > u2 {
            return None;
        }
    }

    let at = |u: f64, fallback: PointF| {
        if u == 0.0 {
            start
        } else if u == 1.0 {
            fallback
        } else {
            PointF::new(start.x + u * dx, start.y + u * dy)
        }
    };
    Some((at(u1, end), at(u2, end)))
}

/// Sutherland-Hodgman clipping of a polygon against the rectangle.
///
/// An empty result means the polygon lies entirely outside. Vertex order is
/// preserved, though the first vertex may rotate.
pub fn clip_polygon(subject: &[PointF], rect: ClipRect) -> Vec<PointF> {
    let corners = rect.corners();
    let mut output = subject.to_vec();

    for i in 0..corners.len() {
        if output.is_empty() {
            break;
        }
        let edge_start = corners[i];
        let edge_end = corners[(i + 1) % corners.len()];
        let input = std::mem::take(&mut output);

        let mut prev = input[input.len() - 1];
        for &current in &input {
            let current_in = is_inside(current, edge_start, edge_end);
            let prev_in = is_inside(prev, edge_start, edge_end);
            match (prev_in, current_in) {
                (true, true) => output.push(current),
                (true, false) => {
                    output.extend(intersection(prev, current, edge_start, edge_end));
                }
                (false, true) => {
                    output.extend(intersection(prev, current, edge_start, edge_end));
                    output.push(current);
                }
                (false, false) => {}
            }
            prev = current;
        }
    }

    output
}

/// Inside is the right-hand side of each edge walked clockwise on screen
/// (y grows downward), which is the interior of the rectangle.
fn is_inside(point: PointF, edge_start: PointF, edge_end: PointF) -> bool {
    let cross = (edge_end.x - edge_start.x) * (point.y - edge_start.y)
        - (edge_end.y - edge_start.y) * (point.x - edge_start.x);
    cross >= 0.0
}

/// Intersection of the infinite lines through `a`→`b` and `c`→`d`.
///
/// Parallel lines have no unique intersection; `None` is returned and the
/// caller emits no vertex for that crossing.
fn intersection(a: PointF, b: PointF, c: PointF, d: PointF) -> Option<PointF> {
    let denom = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if denom.abs() < PARALLEL_EPSILON {
        tracing::debug!(?a, ?b, ?c, ?d, "skipping parallel clip intersection");
        return None;
    }
    let det_ab = a.x * b.y - a.y * b.x;
    let det_cd = c.x * d.y - c.y * d.x;
    Some(PointF::new(
        (det_ab * (c.x - d.x) - (a.x - b.x) * det_cd) / denom,
        (det_ab * (c.y - d.y) - (a.y - b.y) * det_cd) / denom,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> ClipRect {
        ClipRect::new(0.0, 0.0, 10.0, 10.0)
    }

    fn p(x: f64, y: f64) -> PointF {
        PointF::new(x, y)
    }

    fn same_vertex_set(a: &[PointF], b: &[PointF]) -> bool {
        a.len() == b.len()
            && a.iter().all(|pa| {
                b.iter()
                    .any(|pb| (pa.x - pb.x).abs() < 1e-9 && (pa.y - pb.y).abs() < 1e-9)
            })
    }

    #[test]
    fn segment_crossing_both_sides_is_trimmed() {
        let clipped = clip_segment(p(-5.0, 5.0), p(15.0, 5.0), rect()).expect("visible");
        assert_eq!(clipped, (p(0.0, 5.0), p(10.0, 5.0)));
    }

    #[test]
    fn segment_inside_is_unchanged() {
        let clipped = clip_segment(p(1.0, 2.0), p(7.0, 9.0), rect()).expect("visible");
        assert_eq!(clipped, (p(1.0, 2.0), p(7.0, 9.0)));
    }

    #[test]
    fn segment_crossing_one_boundary_moves_one_endpoint() {
        let (a, b) = clip_segment(p(5.0, 5.0), p(5.0, 20.0), rect()).expect("visible");
        assert_eq!(a, p(5.0, 5.0));
        assert_eq!(b, p(5.0, 10.0));
    }

    #[test]
    fn segment_outside_is_rejected() {
        assert_eq!(clip_segment(p(11.0, 0.0), p(20.0, 10.0), rect()), None);
        assert_eq!(clip_segment(p(-3.0, -1.0), p(-1.0, -3.0), rect()), None);
    }

    #[test]
    fn parallel_segment_beyond_boundary_is_rejected() {
        assert_eq!(clip_segment(p(-1.0, 0.0), p(-1.0, 10.0), rect()), None);
        assert_eq!(clip_segment(p(0.0, 12.0), p(10.0, 12.0), rect()), None);
    }

    #[test]
    fn parallel_segment_on_boundary_is_kept() {
        let clipped = clip_segment(p(0.0, -5.0), p(0.0, 5.0), rect()).expect("visible");
        assert_eq!(clipped, (p(0.0, 0.0), p(0.0, 5.0)));
    }

    #[test]
    fn zero_length_segment_inside_is_a_point() {
        let clipped = clip_segment(p(3.0, 3.0), p(3.0, 3.0), rect()).expect("visible");
        assert_eq!(clipped, (p(3.0, 3.0), p(3.0, 3.0)));
        assert_eq!(clip_segment(p(30.0, 3.0), p(30.0, 3.0), rect()), None);
    }

    #[test]
    fn triangle_inside_is_unchanged() {
        let triangle = [p(2.0, 2.0), p(8.0, 2.0), p(5.0, 8.0)];
        let clipped = clip_polygon(&triangle, rect());
        assert!(same_vertex_set(&clipped, &triangle), "{clipped:?}");
    }

    #[test]
    fn triangle_outside_is_empty() {
        let triangle = [p(20.0, 20.0), p(30.0, 20.0), p(25.0, 30.0)];
        assert!(clip_polygon(&triangle, rect()).is_empty());
    }

    #[test]
    fn triangle_overlapping_right_edge_gains_boundary_vertices() {
        let triangle = [p(5.0, 2.0), p(15.0, 5.0), p(5.0, 8.0)];
        let clipped = clip_polygon(&triangle, rect());
        assert_eq!(clipped.len(), 4);
        assert!(clipped.iter().all(|v| v.x <= 10.0 + 1e-9));
        assert_eq!(clipped.iter().filter(|v| (v.x - 10.0).abs() < 1e-9).count(), 2);
    }

    #[test]
    fn polygon_covering_window_clips_to_window() {
        let square = [p(-5.0, -5.0), p(15.0, -5.0), p(15.0, 15.0), p(-5.0, 15.0)];
        let clipped = clip_polygon(&square, rect());
        assert!(same_vertex_set(
            &clipped,
            &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
        ));
    }

    #[test]
    fn parallel_intersection_is_none() {
        assert_eq!(
            intersection(p(0.0, 0.0), p(5.0, 0.0), p(0.0, 1.0), p(5.0, 1.0)),
            None
        );
    }

    #[test]
    fn empty_subject_stays_empty() {
        assert!(clip_polygon(&[], rect()).is_empty());
    }
}
