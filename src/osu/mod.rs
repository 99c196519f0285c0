#![cfg(feature = "osu")]

use crate::{
    model::{
        beatmap::{BeatmapAttributes, ProcessedBeatmap, COMBO_COLOUR_COUNT},
        hit_object::HitObjectKind,
    },
    render::{Canvas, Colour},
};

use self::object::CIRCLE_HIT_DURATION;

mod object;

/// Combo colours, indexed by combo number.
pub const COMBO_COLOURS: [Colour; COMBO_COLOUR_COUNT] = [
    Colour::rgb(0, 202, 0),
    Colour::rgb(18, 124, 255),
    Colour::rgb(242, 24, 57),
    Colour::rgb(255, 192, 0),
];

/// Frame renderer for osu!standard maps.
///
/// Only holds the difficulty-derived constants; every frame is a pure
/// function of the processed map and the given time.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuRenderer {
    attrs: BeatmapAttributes,
    follow_points: bool,
}

impl OsuRenderer {
    pub const fn new(attrs: BeatmapAttributes, follow_points: bool) -> Self {
        Self {
            attrs,
            follow_points,
        }
    }

    pub const fn attributes(&self) -> &BeatmapAttributes {
        &self.attrs
    }

    /// Draw all objects visible at `time`.
    ///
    /// Later objects are drawn first so that earlier objects end up on top.
    pub fn render_frame(&self, map: &ProcessedBeatmap, canvas: &mut impl Canvas, time: f64) {
        let visible: Vec<_> = map
            .iter()
            .filter(|(h, attrs)| {
                time >= h.start_time - self.attrs.preempt
                    && time <= attrs.end_time + CIRCLE_HIT_DURATION
            })
            .collect();

        for (i, &(h, attrs)) in visible.iter().enumerate().rev() {
            if let Some(&prev) = i.checked_sub(1).and_then(|prev| visible.get(prev)) {
                if self.follow_points && !prev.0.is_spinner() && !h.is_spinner() {
                    self.draw_follow_point(canvas, prev, (h, attrs), time);
                }
            }

            match h.kind {
                HitObjectKind::Circle => {
                    self.draw_hit_circle(canvas, h, attrs, time);
                }
                HitObjectKind::Slider(ref slider) => {
                    self.draw_slider_body(canvas, h, slider, attrs, time);

                    if time <= h.start_time {
                        self.draw_hit_circle(canvas, h, attrs, time);
                    }
                }
                HitObjectKind::Spinner(_) => {
                    self.draw_spinner(canvas, h, attrs, time);

                    continue;
                }
                HitObjectKind::Hold(_) => {}
            }

            if time <= h.start_time {
                self.draw_approach_circle(canvas, h, attrs, time);
            } else if let HitObjectKind::Slider(ref slider) = h.kind {
                if time <= attrs.end_time {
                    self.draw_follow_circle(canvas, h, slider, attrs, time);
                }
            }
        }
    }
}
