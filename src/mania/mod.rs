#![cfg(feature = "mania")]

use crate::{
    error::MalformedChart,
    model::{
        beatmap::{main_bpm, ObjectAttributes, ProcessedBeatmap},
        hit_object::{HitObject, HitObjectKind},
    },
    render::{Canvas, Colour, Rect},
    util::float_ext::FloatExt,
};

pub use self::lane::{lane, lane_colour, lane_x, LANE_SPACING, LANE_WIDTH, X_CENTER};

mod lane;

const NOTE_HEIGHT: f32 = 15.0;
const JUDGE_LINE_HEIGHT: f32 = 5.0;
/// Notes above this y coordinate are off-screen.
const CULL_Y: f32 = -NOTE_HEIGHT - 64.0;
/// Opacity of a hold note's body.
const HOLD_BODY_OPACITY: f32 = 127.0 / 255.0;

/// Frame renderer for osu!mania maps.
///
/// Notes scroll towards the judgement line with a speed normalized by the
/// map's main BPM so that only BPM changes relative to it and slider
/// velocity changes affect the scroll speed.
#[derive(Clone, Debug, PartialEq)]
pub struct ManiaRenderer {
    key_count: usize,
    main_bpm: f64,
    note_speed: f32,
    hit_position: f32,
}

impl ManiaRenderer {
    /// Default scroll speed in osu!pixels per normalized millisecond.
    pub const DEFAULT_NOTE_SPEED: f32 = 0.65;
    /// Default y coordinate of the judgement line.
    pub const DEFAULT_HIT_POSITION: f32 = 384.0 - 20.0;

    /// Create a renderer for a processed map whose key count is given by
    /// `cs`.
    pub fn new(
        map: &ProcessedBeatmap,
        cs: f32,
        note_speed: f32,
        hit_position: f32,
    ) -> Result<Self, MalformedChart> {
        let key_count = cs.round();

        if !key_count.is_finite() || key_count < 1.0 {
            return Err(MalformedChart::InvalidKeyCount(cs));
        }

        if cs.fract().not_eq(0.0) {
            log_warn!(cs, key_count, "rounded fractional key count");
        }

        let last_time = map
            .hit_objects()
            .last()
            .map_or(0.0, |h| h.start_time);

        Ok(Self {
            key_count: key_count as usize,
            main_bpm: main_bpm(map.timing_points(), last_time),
            note_speed,
            hit_position,
        })
    }

    pub const fn key_count(&self) -> usize {
        self.key_count
    }

    /// The BPM that scrolls at the base note speed.
    pub const fn main_bpm(&self) -> f64 {
        self.main_bpm
    }

    /// Draw all notes that did not end before `time` and the judgement line
    /// on top.
    pub fn render_frame(&self, map: &ProcessedBeatmap, canvas: &mut impl Canvas, time: f64) {
        for (h, attrs) in map.iter().filter(|(_, attrs)| attrs.end_time >= time) {
            if let HitObjectKind::Hold(_) = h.kind {
                self.draw_hold_note(canvas, map, h, attrs, time);
            } else {
                self.draw_note(canvas, map, h, time);
            }
        }

        let width = LANE_WIDTH * self.key_count as f32;
        let judge_line = Rect::new(
            X_CENTER - width / 2.0,
            self.hit_position,
            width,
            JUDGE_LINE_HEIGHT,
        );

        canvas.fill_rect(judge_line, Colour::WHITE);
    }

    /// Vertical distance between the judgement line and a note at
    /// `object_time`.
    fn scroll_distance(&self, map: &ProcessedBeatmap, time: f64, object_time: f64) -> f32 {
        let offset = map
            .timing_points()
            .scroll_offset(time, object_time, self.main_bpm);

        self.note_speed * offset as f32
    }

    fn draw_note(
        &self,
        canvas: &mut impl Canvas,
        map: &ProcessedBeatmap,
        h: &HitObject,
        time: f64,
    ) {
        let lane = lane(h.pos.x, self.key_count);
        let y = self.hit_position - self.scroll_distance(map, time, h.start_time);

        if y < CULL_Y {
            return;
        }

        let colour = lane_colour(self.key_count, lane);
        canvas.fill_rect(self.note_rect(lane, y, -NOTE_HEIGHT), colour);
    }

    fn draw_hold_note(
        &self,
        canvas: &mut impl Canvas,
        map: &ProcessedBeatmap,
        h: &HitObject,
        attrs: &ObjectAttributes,
        time: f64,
    ) {
        let lane = lane(h.pos.x, self.key_count);
        let head = self.scroll_distance(map, time, h.start_time).max(0.0);
        let y = self.hit_position - head;

        if y < CULL_Y {
            return;
        }

        let height = self.scroll_distance(map, time.max(h.start_time), attrs.end_time);
        let colour = lane_colour(self.key_count, lane);

        canvas.fill_rect(
            self.note_rect(lane, y, -height),
            colour.alpha(HOLD_BODY_OPACITY),
        );
        canvas.fill_rect(self.note_rect(lane, y, -NOTE_HEIGHT), colour);
    }

    fn note_rect(&self, lane: usize, y: f32, height: f32) -> Rect {
        let x = lane_x(lane, self.key_count) + LANE_SPACING;

        Rect::new(x, y, LANE_WIDTH - 2.0 * LANE_SPACING, height)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            beatmap::Beatmap,
            control_point::RawTimingPoint,
            hit_object::RawHitObject,
            mode::GameMode,
            pos::Pos,
        },
        render::DrawCall,
    };

    use super::*;

    fn map(hit_objects: Vec<RawHitObject>, timing_points: &[(f64, f64)]) -> ProcessedBeatmap {
        let map = Beatmap {
            mode: GameMode::Mania,
            cs: 4.0,
            timing_points: timing_points
                .iter()
                .map(|&(time, beat_len)| RawTimingPoint::new(time, beat_len))
                .collect(),
            hit_objects,
            ..Beatmap::default()
        };

        ProcessedBeatmap::new(&map).unwrap()
    }

    fn renderer(map: &ProcessedBeatmap) -> ManiaRenderer {
        ManiaRenderer::new(
            map,
            4.0,
            ManiaRenderer::DEFAULT_NOTE_SPEED,
            ManiaRenderer::DEFAULT_HIT_POSITION,
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_key_counts() {
        let map = map(vec![RawHitObject::circle(Pos::zero(), 0.0)], &[(0.0, 500.0)]);

        for cs in [0.0, 0.4, -3.0, f32::NAN] {
            assert!(matches!(
                ManiaRenderer::new(&map, cs, 0.65, 364.0),
                Err(MalformedChart::InvalidKeyCount(_))
            ));
        }

        let renderer = ManiaRenderer::new(&map, 6.6, 0.65, 364.0).unwrap();
        assert_eq!(renderer.key_count(), 7);
    }

    #[test]
    fn note_scrolls_towards_judgement_line() {
        let map = map(
            vec![RawHitObject::circle(Pos::new(192.0, 192.0), 1000.0)],
            &[(0.0, 500.0)],
        );
        let renderer = renderer(&map);

        let mut calls: Vec<DrawCall> = Vec::new();
        renderer.render_frame(&map, &mut calls, 800.0);

        // lane 1, 200ms ahead
        let y = 364.0 - 0.65 * 200.0;

        assert_eq!(
            calls[0],
            DrawCall::FillRect(Rect::new(227.0, y - 15.0, 28.0, 15.0), Colour::hex(0xdc8dba))
        );
        assert_eq!(
            calls[1],
            DrawCall::FillRect(Rect::new(196.0, 364.0, 120.0, 5.0), Colour::WHITE)
        );
    }

    #[test]
    fn far_notes_are_culled() {
        let map = map(
            vec![RawHitObject::circle(Pos::zero(), 10_000.0)],
            &[(0.0, 500.0)],
        );
        let renderer = renderer(&map);

        let mut calls: Vec<DrawCall> = Vec::new();
        renderer.render_frame(&map, &mut calls, 0.0);

        // only the judgement line
        assert_eq!(calls.len(), 1);
    }

    #[test]
    fn hold_body_spans_to_tail() {
        let map = map(
            vec![RawHitObject::hold(Pos::zero(), 1000.0, 1200.0)],
            &[(0.0, 500.0)],
        );
        let renderer = renderer(&map);

        let mut calls: Vec<DrawCall> = Vec::new();
        renderer.render_frame(&map, &mut calls, 1100.0);

        let body_height = 0.65 * 100.0;
        let colour = Colour::WHITE;

        // head stays at the judgement line while held
        assert_eq!(
            calls[0],
            DrawCall::FillRect(
                Rect::new(197.0, 364.0 - body_height, 28.0, body_height),
                colour.alpha(127.0 / 255.0)
            )
        );
        assert_eq!(
            calls[1],
            DrawCall::FillRect(Rect::new(197.0, 349.0, 28.0, 15.0), colour)
        );
    }

    #[test]
    fn ended_notes_disappear() {
        let map = map(
            vec![
                RawHitObject::circle(Pos::zero(), 500.0),
                RawHitObject::hold(Pos::new(500.0, 0.0), 600.0, 900.0),
            ],
            &[(0.0, 500.0)],
        );
        let renderer = renderer(&map);

        let mut calls: Vec<DrawCall> = Vec::new();
        renderer.render_frame(&map, &mut calls, 901.0);

        assert_eq!(calls.len(), 1);
    }
}
