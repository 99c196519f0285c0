use std::f32::consts::TAU;

use crate::{
    curve::{self, lerp_pos},
    model::{
        beatmap::{slider_position, ObjectAttributes},
        hit_object::{HitObject, Slider},
        pos::Pos,
    },
    render::{Canvas, Colour, Font, Stroke, TextAlign},
    util::float_ext::FloatExt,
};

use super::{OsuRenderer, COMBO_COLOURS};

/// Relative width of a hit circle's border.
const CIRCLE_BORDER_WIDTH: f32 = 0.15;
/// Scale of a hit circle [`CIRCLE_HIT_DURATION`] after being hit.
const CIRCLE_HIT_FACTOR: f64 = 1.33;
/// Fade out time in milliseconds after an object ended.
pub(super) const CIRCLE_HIT_DURATION: f64 = 150.0;

const APPROACH_CIRCLE_WIDTH: f32 = 0.09;
/// Additional radii of the approach circle when it appears.
const APPROACH_CIRCLE_SIZE: f32 = 4.0;

const FOLLOW_CIRCLE_FACTOR: f32 = 2.0;
const FOLLOW_CIRCLE_WIDTH: f32 = 3.0;

const FOLLOW_POINT_WIDTH: f32 = 3.0;
const FOLLOW_POINT_OPACITY: f32 = 0.5;

const SPINNER_SIZE: f32 = 180.0;
const SPINNER_CENTER_SIZE: f32 = 10.0;
const SPINNER_WIDTH: f32 = 5.0;

const COMBO_FONT_FAMILY: &str = "Exo 2";
const COMBO_FONT_WEIGHT: u16 = 600;

impl OsuRenderer {
    /// Opacity of an object during fade in and after it ended.
    pub(crate) fn opacity(&self, start_time: f64, end_time: f64, time: f64) -> f32 {
        let opacity = if time > end_time {
            1.0 - (time - end_time) / CIRCLE_HIT_DURATION
        } else {
            (time - (start_time - self.attrs.preempt)).max(0.0) / self.attrs.fade_in
        };

        (opacity as f32).clamp01()
    }

    pub(super) fn draw_slider_body(
        &self,
        canvas: &mut impl Canvas,
        h: &HitObject,
        slider: &Slider,
        attrs: &ObjectAttributes,
        time: f64,
    ) {
        let opacity = self.opacity(h.start_time, attrs.end_time, time);
        let width = self.attrs.radius * 2.0;

        curve::emit_path(canvas, h.pos, slider);

        canvas.stroke(&Stroke::new(Colour::WHITE.alpha(opacity), width).round());

        let colour = combo_colour(attrs).alpha(opacity);
        canvas.stroke(&Stroke::new(colour, width * (1.0 - CIRCLE_BORDER_WIDTH)).round());
    }

    pub(super) fn draw_hit_circle(
        &self,
        canvas: &mut impl Canvas,
        h: &HitObject,
        attrs: &ObjectAttributes,
        time: f64,
    ) {
        let radius = self.attrs.radius;
        let opacity = self.opacity(h.start_time, attrs.end_time, time);
        let scale = hit_scale(h.start_time, time);
        let size = radius * (1.0 - CIRCLE_BORDER_WIDTH / 2.0) * scale;

        canvas.begin_path();
        canvas.arc(h.pos, size, 0.0, TAU, false);
        canvas.fill(combo_colour(attrs).alpha(opacity));
        canvas.stroke(&Stroke::new(
            Colour::WHITE.alpha(opacity),
            radius * CIRCLE_BORDER_WIDTH,
        ));

        let font = Font {
            family: COMBO_FONT_FAMILY,
            weight: COMBO_FONT_WEIGHT,
            size: radius,
            align: TextAlign::Center,
            middle: true,
        };

        canvas.fill_text(
            &attrs.combo_count.to_string(),
            h.pos,
            &font,
            Colour::WHITE.alpha(opacity),
        );
    }

    pub(super) fn draw_approach_circle(
        &self,
        canvas: &mut impl Canvas,
        h: &HitObject,
        attrs: &ObjectAttributes,
        time: f64,
    ) {
        let radius = self.attrs.radius;
        let opacity = self.opacity(h.start_time, attrs.end_time, time);
        let size = ((h.start_time - time).max(0.0) / self.attrs.preempt) as f32;

        canvas.begin_path();
        canvas.arc(
            h.pos,
            radius * (1.0 + size * APPROACH_CIRCLE_SIZE),
            0.0,
            TAU,
            false,
        );
        canvas.stroke(&Stroke::new(
            combo_colour(attrs).alpha(opacity),
            radius * APPROACH_CIRCLE_WIDTH,
        ));
    }

    pub(super) fn draw_follow_circle(
        &self,
        canvas: &mut impl Canvas,
        h: &HitObject,
        slider: &Slider,
        attrs: &ObjectAttributes,
        time: f64,
    ) {
        let radius = self.attrs.radius;
        let pos = slider_position(h, slider, attrs, time);
        let size = radius * (1.0 - CIRCLE_BORDER_WIDTH / 2.0);

        canvas.begin_path();
        canvas.arc(pos, size, 0.0, TAU, false);
        canvas.stroke(&Stroke::new(Colour::WHITE, radius * CIRCLE_BORDER_WIDTH));

        canvas.begin_path();
        canvas.arc(pos, size * FOLLOW_CIRCLE_FACTOR, 0.0, TAU, false);
        canvas.stroke(&Stroke::new(Colour::WHITE, FOLLOW_CIRCLE_WIDTH));
    }

    pub(super) fn draw_spinner(
        &self,
        canvas: &mut impl Canvas,
        h: &HitObject,
        attrs: &ObjectAttributes,
        time: f64,
    ) {
        let opacity = self.opacity(h.start_time, attrs.end_time, time);
        let scale = spinner_scale(h.start_time, attrs.end_time, time);
        let stroke = Stroke::new(Colour::WHITE.alpha(opacity), SPINNER_WIDTH);

        canvas.begin_path();
        canvas.arc(attrs.end_pos, SPINNER_SIZE * scale, 0.0, TAU, false);
        canvas.stroke(&stroke);

        canvas.begin_path();
        canvas.arc(attrs.end_pos, SPINNER_CENTER_SIZE, 0.0, TAU, false);
        canvas.stroke(&stroke);
    }

    /// Connect two consecutive objects of the same combo.
    pub(super) fn draw_follow_point(
        &self,
        canvas: &mut impl Canvas,
        (prev, prev_attrs): (&HitObject, &ObjectAttributes),
        (next, next_attrs): (&HitObject, &ObjectAttributes),
        time: f64,
    ) {
        if prev_attrs.combo_number != next_attrs.combo_number {
            return;
        }

        let span = next.start_time - prev.start_time;

        if span <= 0.0 || time < prev.start_time - self.attrs.preempt || time > next.start_time {
            return;
        }

        let radius = self.attrs.radius;
        let delta = next.pos - prev_attrs.end_pos;
        let dist = delta.length();

        if dist < 2.0 * radius {
            return;
        }

        let trim = delta * (radius / dist);
        let a = prev_attrs.end_pos + trim;
        let b = next.pos - trim;

        let t2 = ((next.start_time - time) / span * 4.0 - 3.0).clamp01() as f32;
        let t1 = ((prev.start_time - time) / self.attrs.preempt * 4.0 - 2.0).clamp01() as f32;

        canvas.begin_path();
        canvas.move_to(lerp_pos(t2, b, a));
        canvas.line_to(lerp_pos(t1, b, a));
        canvas.stroke(&Stroke::new(
            Colour::WHITE.alpha(FOLLOW_POINT_OPACITY),
            FOLLOW_POINT_WIDTH,
        ));
    }
}

fn combo_colour(attrs: &ObjectAttributes) -> Colour {
    COMBO_COLOURS[attrs.combo_number % COMBO_COLOURS.len()]
}

/// Pop scale of a hit circle once its start time passed.
fn hit_scale(start_time: f64, time: f64) -> f32 {
    if time <= start_time {
        return 1.0;
    }

    let t = (time - start_time) / CIRCLE_HIT_DURATION;

    (1.0 - t + t * CIRCLE_HIT_FACTOR) as f32
}

/// Relative radius of a spinner's outer ring, shrinking towards its end.
fn spinner_scale(start_time: f64, end_time: f64, time: f64) -> f32 {
    let duration = end_time - start_time;

    if duration <= 0.0 {
        return if time >= end_time { 0.0 } else { 1.0 };
    }

    ((end_time - time) / duration).clamp01() as f32
}
