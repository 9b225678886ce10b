use super::util::{cross, scalar};
use super::PARALLEL_EPSILON;
use crate::util::Interval;
use cgmath::prelude::*;
use cgmath::{BaseFloat, Point2, Vector2};

/// A straight line segment between two points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment2d<S = f64> {
    pub start: Point2<S>,
    pub end: Point2<S>,
}

impl<S: BaseFloat> LineSegment2d<S> {
    /// Creates a line segment from its two end points.
    pub const fn from_ends(start: Point2<S>, end: Point2<S>) -> Self {
        Self { start, end }
    }

    /// The vector from the start of the segment to its end.
    pub fn direction(&self) -> Vector2<S> {
        self.end - self.start
    }

    /// The length of the segment.
    pub fn length(&self) -> S {
        self.start.distance(self.end)
    }

    /// Samples the point at parameter `t`, where `t = 0` is the start
    /// and `t = 1` is the end of the segment.
    pub fn sample(&self, t: S) -> Point2<S> {
        self.start + self.direction() * t
    }

    /// Computes the distance from a point to the closest point on the segment.
    pub fn distance_to_point(&self, point: Point2<S>) -> S {
        point_segment_distance(point, self)
    }

    /// Computes the minimum distance between this segment and another.
    pub fn distance(&self, other: &Self) -> S {
        segment_distance(self, other)
    }
}

/// Computes the parameters at which the infinite lines through `a` and `b` cross.
///
/// Returns `(t1, t2)` such that `a.sample(t1) == b.sample(t2)`,
/// or `None` if the lines are parallel or either segment has zero length.
pub fn line_intersection_params<S: BaseFloat>(
    a: &LineSegment2d<S>,
    b: &LineSegment2d<S>,
) -> Option<(S, S)> {
    let da = a.direction();
    let db = b.direction();

    let denominator = cross(db, da);
    if denominator.abs() < scalar(PARALLEL_EPSILON) {
        return None;
    }

    let offset = a.start - b.start;
    let t1 = (offset.x * db.y - offset.y * db.x) / denominator;
    let t2 = (offset.x * da.y - offset.y * da.x) / denominator;
    Some((t1, t2))
}

/// Computes the distance between a point and the closest point on a segment.
pub fn point_segment_distance<S: BaseFloat>(point: Point2<S>, segment: &LineSegment2d<S>) -> S {
    let dir = segment.direction();
    let length2 = dir.magnitude2();
    if length2 == S::zero() {
        return point.distance(segment.start);
    }
    let t = (point - segment.start).dot(dir) / length2;
    point.distance(segment.sample(Interval::unit().clamp(t)))
}

/// Returns true if the end points of `a` lie strictly on opposite sides of the line through `b`.
fn straddles<S: BaseFloat>(a: &LineSegment2d<S>, b: &LineSegment2d<S>) -> bool {
    let dir = b.direction();
    let side_start = cross(dir, a.start - b.start);
    let side_end = cross(dir, a.end - b.start);
    let zero = S::zero();
    (side_start > zero && side_end < zero) || (side_start < zero && side_end > zero)
}

/// Computes the minimum distance between two line segments.
///
/// Returns exactly zero if the segments intersect. When the segments aren't
/// parallel, the closest points are found by clamping the line intersection
/// parameters onto each segment independently, which can overestimate the
/// separation when the true closest point is an interior point of one segment.
/// Parallel and zero-length segments use the closest endpoint instead, unless
/// the segments are short enough to cross below the parallel threshold.
pub fn segment_distance<S: BaseFloat>(a: &LineSegment2d<S>, b: &LineSegment2d<S>) -> S {
    let unit = Interval::unit();
    match line_intersection_params(a, b) {
        Some((t1, t2)) if unit.contains(t1) && unit.contains(t2) => S::zero(),
        Some((t1, t2)) => {
            let p1 = a.sample(unit.clamp(t1));
            let p2 = b.sample(unit.clamp(t2));
            p1.distance(p2)
        }
        None if straddles(a, b) && straddles(b, a) => S::zero(),
        None => [
            point_segment_distance(a.start, b),
            point_segment_distance(a.end, b),
            point_segment_distance(b.start, a),
            point_segment_distance(b.end, a),
        ]
        .into_iter()
        .fold(S::infinity(), S::min),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point2d;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment2d {
        LineSegment2d::from_ends(Point2d::new(x1, y1), Point2d::new(x2, y2))
    }

    #[test]
    fn degenerate_segment_against_itself() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _ in 0..100 {
            let p = Point2d::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            let s = LineSegment2d::from_ends(p, p);
            assert_eq!(segment_distance(&s, &s), 0.0);
        }
    }

    #[test]
    fn crossing_segments() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        let (t1, t2) = line_intersection_params(&a, &b).unwrap();
        assert_approx_eq!(t1, 0.5);
        assert_approx_eq!(t2, 0.5);
        assert_eq!(segment_distance(&a, &b), 0.0);
    }

    #[test]
    fn short_crossing_segments() {
        // Short enough that the cross product falls below the parallel threshold.
        let a = seg(-0.002, 0.0, 0.002, 0.0);
        let b = seg(0.0, -0.002, 0.0, 0.002);
        assert!(line_intersection_params(&a, &b).is_none());
        assert_eq!(segment_distance(&a, &b), 0.0);
        assert_eq!(segment_distance(&b, &a), 0.0);

        let apart = seg(0.001, 0.001, 0.001, 0.003);
        assert_approx_eq!(segment_distance(&a, &apart), 0.001);
    }

    #[test]
    fn touching_at_endpoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 5.0);
        assert_eq!(segment_distance(&a, &b), 0.0);
        assert_eq!(segment_distance(&b, &a), 0.0);
    }

    #[test]
    fn intersection_params_locate_crossing() {
        let a = seg(-3.0, 1.0, 5.0, 1.0);
        let b = seg(2.0, -4.0, 2.0, 6.0);
        let (t1, t2) = line_intersection_params(&a, &b).unwrap();
        let p1 = a.sample(t1);
        let p2 = b.sample(t2);
        assert_approx_eq!(p1.x, 2.0);
        assert_approx_eq!(p1.y, 1.0);
        assert_approx_eq!(p2.x, 2.0);
        assert_approx_eq!(p2.y, 1.0);
    }

    #[test]
    fn non_intersecting_lines_clamp_to_ends() {
        // The lines cross at (3, 0), beyond the end of both segments.
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(3.0, 1.0, 3.0, 2.0);
        assert_approx_eq!(segment_distance(&a, &b), 5f64.sqrt());
    }

    #[test]
    fn parallel_offset_segments() {
        for h in [0.5, 1.0, 3.25] {
            let a = seg(0.0, 0.0, 4.0, 0.0);
            let b = seg(1.0, h, 6.0, h);
            assert_approx_eq!(segment_distance(&a, &b), h);
            assert_approx_eq!(segment_distance(&b, &a), h);
        }
    }

    #[test]
    fn collinear_disjoint_segments() {
        let a = seg(1.0, 2.0, 2.0, 3.0);
        let b = seg(4.0, 5.0, 5.0, 6.0);
        assert_approx_eq!(segment_distance(&a, &b), 8f64.sqrt());
    }

    #[test]
    fn zero_length_against_segment() {
        let a = seg(2.0, 3.0, 2.0, 3.0);
        let b = seg(0.0, 0.0, 4.0, 0.0);
        assert_approx_eq!(segment_distance(&a, &b), 3.0);
        assert_approx_eq!(segment_distance(&b, &a), 3.0);
    }

    #[test]
    fn point_distance_clamps_to_segment() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_approx_eq!(s.distance_to_point(Point2d::new(2.0, 2.0)), 2.0);
        assert_approx_eq!(s.distance_to_point(Point2d::new(-3.0, 4.0)), 5.0);
        assert_approx_eq!(s.distance_to_point(Point2d::new(7.0, -4.0)), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _ in 0..1000 {
            let mut coord = || rng.gen_range(-50.0..50.0);
            let a = seg(coord(), coord(), coord(), coord());
            let b = seg(coord(), coord(), coord(), coord());
            assert_approx_eq!(a.distance(&b), b.distance(&a), 1e-6);
        }
    }

    #[test]
    fn single_precision() {
        let a = LineSegment2d::from_ends(Point2::new(0.0f32, 0.0), Point2::new(2.0, 2.0));
        let b = LineSegment2d::from_ends(Point2::new(0.0f32, 2.0), Point2::new(2.0, 0.0));
        assert_eq!(a.distance(&b), 0.0f32);
        assert_approx_eq!(a.length(), 8f32.sqrt());
    }
}
