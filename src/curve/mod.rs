//! Parametric curve math for slider paths.

pub use self::{
    arc::CircularArc,
    path::{emit_path, position_at},
};

pub(crate) use self::path::circular_arc;

mod arc;
mod path;

use crate::model::pos::Pos;

/// Upper bound of samples per bezier segment.
const MAX_DIVISIONS: usize = 64;

/// Total sample budget spread across the points of a bezier segment.
const DIVISION_BUDGET: f32 = 500.0;

/// Affine interpolation, extrapolates for `t` outside of `[0, 1]`.
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Component-wise [`lerp`].
pub fn lerp_pos(t: f32, a: Pos, b: Pos) -> Pos {
    Pos::new(lerp(t, a.x, b.x), lerp(t, a.y, b.y))
}

/// Evaluate a bezier curve through de Casteljau reduction.
///
/// An empty slice evaluates to the origin.
pub fn bezier_at(t: f32, points: &[Pos]) -> Pos {
    match points {
        [] => Pos::zero(),
        [single] => *single,
        _ => {
            let reduced: Vec<_> = points
                .windows(2)
                .map(|window| lerp_pos(t, window[0], window[1]))
                .collect();

            bezier_at(t, &reduced)
        }
    }
}

/// Split the control points of a bezier path into segments.
///
/// A control point that repeats its predecessor exactly starts a new
/// segment which begins with that point.
pub fn bezier_segments(head: Pos, control_points: &[Pos]) -> Vec<Vec<Pos>> {
    let mut segments = Vec::new();
    let mut buf = vec![head];

    for &curr in control_points {
        if buf.last() == Some(&curr) {
            segments.push(std::mem::replace(&mut buf, vec![curr]));
        } else {
            buf.push(curr);
        }
    }

    segments.push(buf);

    segments
}

/// Amount of divisions when sampling a bezier curve of `len` points.
pub fn divisions(len: usize) -> usize {
    let len = len.max(1) as f32;

    ((DIVISION_BUDGET / len).ceil() as usize).min(MAX_DIVISIONS)
}

/// Sample a bezier curve at `divisions + 1` evenly spaced parameters.
pub(crate) fn sample_bezier(points: &[Pos], divisions: usize) -> impl Iterator<Item = Pos> + '_ {
    let divisions = divisions.max(1);

    (0..=divisions).map(move |i| bezier_at(i as f32 / divisions as f32, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.5, 2.0, 4.0), 3.0);
        assert_eq!(lerp(2.0, 0.0, 1.0), 2.0);
        assert_eq!(lerp(-1.0, 0.0, 1.0), -1.0);
    }

    #[test]
    fn bezier_endpoints() {
        let points = [
            Pos::new(0.0, 0.0),
            Pos::new(37.5, 120.25),
            Pos::new(200.0, -13.0),
            Pos::new(311.0, 77.7),
        ];

        assert_eq!(bezier_at(0.0, &points), points[0]);
        assert_eq!(bezier_at(1.0, &points), points[3]);
    }

    #[test]
    fn bezier_quadratic_midpoint() {
        let points = [Pos::new(0.0, 0.0), Pos::new(50.0, 100.0), Pos::new(100.0, 0.0)];

        assert_eq!(bezier_at(0.5, &points), Pos::new(50.0, 50.0));
    }

    #[test]
    fn split_on_repeated_points() {
        let head = Pos::new(0.0, 0.0);
        let control_points = [
            Pos::new(10.0, 0.0),
            Pos::new(20.0, 10.0),
            Pos::new(20.0, 10.0),
            Pos::new(30.0, 0.0),
        ];

        let segments = bezier_segments(head, &control_points);

        assert_eq!(
            segments,
            vec![
                vec![head, Pos::new(10.0, 0.0), Pos::new(20.0, 10.0)],
                vec![Pos::new(20.0, 10.0), Pos::new(30.0, 0.0)],
            ]
        );
    }

    #[test]
    fn division_granularity() {
        assert_eq!(divisions(2), 64);
        assert_eq!(divisions(8), 63);
        assert_eq!(divisions(10), 50);
        assert_eq!(divisions(600), 1);
    }
}
