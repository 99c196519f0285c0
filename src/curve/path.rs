use crate::{
    model::{
        hit_object::{PathKind, Slider},
        pos::Pos,
    },
    render::Canvas,
};

use super::{bezier_segments, divisions, lerp_pos, sample_bezier, CircularArc};

/// Position on a slider's path after traversing the fraction `progress` of
/// its distance.
///
/// Bezier paths are walked along their sampled polyline so the result is
/// only an approximation of the true arc length parametrization. Circular
/// paths whose points are collinear are evaluated as bezier paths.
pub fn position_at(head: Pos, slider: &Slider, progress: f32) -> Pos {
    match slider.path_kind {
        PathKind::Linear => lerp_pos(progress, head, linear_end(head, slider)),
        PathKind::Bezier => bezier_position(head, slider, progress),
        PathKind::Circular => match circular_arc(head, slider) {
            Some(arc) => arc.position_at(progress),
            None => bezier_position(head, slider, progress),
        },
    }
}

/// Emit the path construction calls for a slider body, starting with
/// [`Canvas::begin_path`].
pub fn emit_path(canvas: &mut impl Canvas, head: Pos, slider: &Slider) {
    canvas.begin_path();

    match slider.path_kind {
        PathKind::Linear => {
            canvas.move_to(head);
            canvas.line_to(linear_end(head, slider));
        }
        PathKind::Bezier => emit_bezier(canvas, head, slider),
        PathKind::Circular => match circular_arc(head, slider) {
            Some(arc) => canvas.arc(
                arc.center,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                arc.anticlockwise,
            ),
            None => emit_bezier(canvas, head, slider),
        },
    }
}

/// The arc through the head and the first two control points.
pub(crate) fn circular_arc(head: Pos, slider: &Slider) -> Option<CircularArc> {
    match *slider.control_points {
        [b, c, ..] => CircularArc::fit(head, b, c),
        _ => None,
    }
}

/// Point at `distance` from the head in direction of the first control
/// point.
fn linear_end(head: Pos, slider: &Slider) -> Pos {
    let Some(&target) = slider.control_points.first() else {
        return head;
    };

    let dir = target - head;
    let len = dir.length();

    if len <= f32::EPSILON {
        return head;
    }

    head + dir * (slider.distance as f32 / len)
}

fn bezier_position(head: Pos, slider: &Slider, progress: f32) -> Pos {
    let target_dist = progress * slider.distance as f32;
    let points = follow_polyline(head, slider);

    let last_idx = points.len().saturating_sub(2);
    let mut dist = 0.0;

    for (i, window) in points.windows(2).enumerate() {
        let (curr, next) = (window[0], window[1]);
        let len = curr.distance(next);

        if dist + len < target_dist && i != last_idx {
            dist += len;

            continue;
        }

        if len <= f32::EPSILON {
            return next;
        }

        return lerp_pos((target_dist - dist) / len, curr, next);
    }

    head
}

/// Sampled bezier path that the slider ball walks along.
///
/// Every segment uses the divisions of the whole slider's control point
/// count, unlike the drawn path which divides each segment by its own.
fn follow_polyline(head: Pos, slider: &Slider) -> Vec<Pos> {
    let divisions = divisions(slider.control_points.len());

    bezier_segments(head, &slider.control_points)
        .iter()
        .flat_map(|segment| sample_bezier(segment, divisions))
        .collect()
}

fn emit_bezier(canvas: &mut impl Canvas, head: Pos, slider: &Slider) {
    canvas.move_to(head);

    for segment in bezier_segments(head, &slider.control_points) {
        match *segment {
            [] => {}
            [single] => canvas.move_to(single),
            [start, end] => {
                canvas.move_to(start);
                canvas.line_to(end);
            }
            [start, ctrl, end] => {
                canvas.move_to(start);
                canvas.quadratic_curve_to(ctrl, end);
            }
            [start, ctrl1, ctrl2, end] => {
                canvas.move_to(start);
                canvas.bezier_curve_to(ctrl1, ctrl2, end);
            }
            _ => {
                for point in sample_bezier(&segment, divisions(segment.len())) {
                    canvas.line_to(point);
                }
            }
        }
    }
}
