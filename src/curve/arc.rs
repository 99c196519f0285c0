use std::f32::consts::TAU;

use crate::{model::pos::Pos, util::float_ext::FloatExt};

/// The circle through three points, traversed from the first to the last.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircularArc {
    pub center: Pos,
    pub radius: f32,
    /// Angle of the first point relative to the center.
    pub start_angle: f32,
    /// Angle of the last point relative to the center.
    pub end_angle: f32,
    /// Whether the arc runs with decreasing angles.
    pub anticlockwise: bool,
}

impl CircularArc {
    /// Fit the unique circle through `a`, `b`, and `c`.
    ///
    /// Returns `None` if the points are collinear or coincide.
    pub fn fit(a: Pos, b: Pos, c: Pos) -> Option<Self> {
        let (ax, ay) = (f64::from(a.x), f64::from(a.y));
        let (bx, by) = (f64::from(b.x), f64::from(b.y));
        let (cx, cy) = (f64::from(c.x), f64::from(c.y));

        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));

        if d.eq(0.0) {
            return None;
        }

        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;

        let ux = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let uy = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;

        let center = Pos::new(ux as f32, uy as f32);
        let radius = ((ux - ax).powi(2) + (uy - ay).powi(2)).sqrt() as f32;

        if !center.is_finite() || !radius.is_finite() {
            return None;
        }

        let (delta_a, delta_b) = (b - a, c - b);
        let anticlockwise = delta_b.x * delta_a.y - delta_a.x * delta_b.y > 0.0;

        Some(Self {
            center,
            radius,
            start_angle: (a.y - center.y).atan2(a.x - center.x),
            end_angle: (c.y - center.y).atan2(c.x - center.x),
            anticlockwise,
        })
    }

    /// The end angle shifted by a full turn if necessary so that sweeping
    /// from the start angle follows the arc's direction.
    pub fn sweep_end_angle(&self) -> f32 {
        let diff = self.end_angle - self.start_angle;

        if !self.anticlockwise && diff < 0.0 {
            self.end_angle + TAU
        } else if self.anticlockwise && diff > 0.0 {
            self.end_angle - TAU
        } else {
            self.end_angle
        }
    }

    /// Position after traversing the fraction `t` of the arc.
    pub fn position_at(&self, t: f32) -> Pos {
        let angle = self.start_angle + (self.sweep_end_angle() - self.start_angle) * t;

        self.center + Pos::new(angle.cos(), angle.sin()) * self.radius
    }
}
