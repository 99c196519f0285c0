use crate::{
    curve,
    error::MalformedChart,
    model::{
        control_point::TimingPoints,
        hit_object::{HitObject, HitObjectKind, PathKind, Slider},
        pos::Pos,
    },
};

use super::Beatmap;

/// Size of the combo colour palette.
pub const COMBO_COLOUR_COUNT: usize = 4;

/// A [`Beatmap`] whose hit objects have been decoded and enriched with
/// derived timing and combo data.
///
/// Objects and their [`ObjectAttributes`] are stored in parallel and
/// sorted by start time.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedBeatmap {
    objects: Box<[HitObject]>,
    attrs: Box<[ObjectAttributes]>,
    timing_points: TimingPoints,
}

/// Data derived for a single [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectAttributes {
    /// Index into the combo palette.
    pub combo_number: usize,
    /// 1-based index within the current combo.
    pub combo_count: u32,
    pub end_time: f64,
    /// Duration of a single slider span, `0.0` for other objects.
    pub duration: f64,
    pub end_pos: Pos,
}

impl ProcessedBeatmap {
    /// Resolve the timing points and process all hit objects of a map.
    pub fn new(map: &Beatmap) -> Result<Self, MalformedChart> {
        if map.hit_objects.is_empty() {
            return Err(MalformedChart::NoHitObjects);
        }

        let timing_points = TimingPoints::resolve(&map.timing_points)?;

        let mut objects = map
            .hit_objects
            .iter()
            .map(HitObject::decode)
            .collect::<Result<Vec<_>, _>>()?;

        objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let mut combo_number = 0;
        let mut combo_count = 0;

        let attrs = objects
            .iter()
            .map(|h| -> Result<_, MalformedChart> {
                if h.new_combo {
                    combo_number = (combo_number + 1) % COMBO_COLOUR_COUNT;
                    combo_count = 1;
                } else {
                    combo_count += 1;
                }

                let (end_time, duration, end_pos) = match h.kind {
                    HitObjectKind::Circle => (h.start_time, 0.0, h.pos),
                    HitObjectKind::Slider(ref slider) => {
                        let timing_point = timing_points.at(h.start_time).ok_or(
                            MalformedChart::TimingPointNotFound { time: h.start_time },
                        )?;

                        let duration = slider.distance / (100.0 * map.slider_multiplier)
                            * timing_point.beat_len;
                        let end_time = h.start_time + duration * slider.repeats as f64;

                        if slider.path_kind == PathKind::Circular
                            && curve::circular_arc(h.pos, slider).is_none()
                        {
                            log_warn!(
                                time = h.start_time,
                                "degenerate circular slider, using bezier path"
                            );
                        }

                        let progress = span_progress(h.start_time, duration, end_time);
                        let end_pos = curve::position_at(h.pos, slider, progress);

                        (end_time, duration, end_pos)
                    }
                    HitObjectKind::Spinner(spinner) => (spinner.end_time, 0.0, Pos::CENTER),
                    HitObjectKind::Hold(hold) => (hold.end_time, 0.0, h.pos),
                };

                Ok(ObjectAttributes {
                    combo_number,
                    combo_count,
                    end_time,
                    duration,
                    end_pos,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            objects: objects.into_boxed_slice(),
            attrs: attrs.into_boxed_slice(),
            timing_points,
        })
    }

    /// The decoded hit objects sorted by start time.
    pub fn hit_objects(&self) -> &[HitObject] {
        &self.objects
    }

    /// Derived data in the same order as [`ProcessedBeatmap::hit_objects`].
    pub fn attributes(&self) -> &[ObjectAttributes] {
        &self.attrs
    }

    /// Iterate over hit objects alongside their derived data.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&HitObject, &ObjectAttributes)> {
        self.objects.iter().zip(self.attrs.iter())
    }

    pub fn timing_points(&self) -> &TimingPoints {
        &self.timing_points
    }

    /// End time of the last hit object.
    pub fn total_duration(&self) -> f64 {
        self.attrs.last().map_or(0.0, |attrs| attrs.end_time)
    }
}

/// Position of a slider ball at the given time, bouncing back and forth
/// between head and tail for each repeat.
pub fn slider_position(h: &HitObject, slider: &Slider, attrs: &ObjectAttributes, time: f64) -> Pos {
    let progress = span_progress(h.start_time, attrs.duration, time);

    curve::position_at(h.pos, slider, progress)
}

/// Triangle wave over the slider spans: `0` at the head, `1` at the tail.
///
/// A non-positive span duration always yields `0`.
pub fn span_progress(start_time: f64, duration: f64, time: f64) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }

    let relative = (time - start_time).rem_euclid(2.0 * duration);

    let progress = if relative < duration {
        relative / duration
    } else {
        2.0 - relative / duration
    };

    progress as f32
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            control_point::RawTimingPoint,
            hit_object::{RawHitObject, RawPath},
        },
        util::float_ext::FloatExt,
    };

    use super::*;

    fn linear(repeats: usize) -> RawPath {
        RawPath {
            kind: PathKind::Linear,
            control_points: vec![Pos::new(200.0, 100.0)],
            distance: 100.0,
            repeats,
        }
    }

    fn map(hit_objects: Vec<RawHitObject>) -> Beatmap {
        Beatmap {
            slider_multiplier: 1.0,
            timing_points: vec![RawTimingPoint::new(0.0, 500.0)],
            hit_objects,
            ..Beatmap::default()
        }
    }

    #[test]
    fn combo_fold() {
        let pos = Pos::zero();

        let map = map(vec![
            RawHitObject::circle(pos, 0.0).new_combo(),
            RawHitObject::circle(pos, 100.0),
            RawHitObject::circle(pos, 200.0),
            RawHitObject::circle(pos, 300.0).new_combo(),
            RawHitObject::circle(pos, 400.0),
            RawHitObject::circle(pos, 500.0).new_combo(),
            RawHitObject::circle(pos, 600.0).new_combo(),
            RawHitObject::circle(pos, 700.0).new_combo(),
        ]);

        let processed = ProcessedBeatmap::new(&map).unwrap();

        let combos: Vec<_> = processed
            .attributes()
            .iter()
            .map(|attrs| (attrs.combo_number, attrs.combo_count))
            .collect();

        assert_eq!(
            combos,
            [
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 2),
                (3, 1),
                (0, 1),
                (1, 1)
            ]
        );
    }

    #[test]
    fn first_object_without_new_combo() {
        let map = map(vec![RawHitObject::circle(Pos::zero(), 0.0)]);
        let processed = ProcessedBeatmap::new(&map).unwrap();

        assert_eq!(processed.attributes()[0].combo_count, 1);
        assert_eq!(processed.attributes()[0].combo_number, 0);
    }

    #[test]
    fn slider_timing() {
        let head = Pos::new(100.0, 100.0);

        let map = map(vec![
            RawHitObject::slider(head, 1000.0, linear(1)),
            RawHitObject::slider(head, 2000.0, linear(2)),
        ]);

        let processed = ProcessedBeatmap::new(&map).unwrap();
        let attrs = processed.attributes();

        assert!(attrs[0].duration.eq(500.0));
        assert!(attrs[0].end_time.eq(1500.0));
        assert_eq!(attrs[0].end_pos, Pos::new(200.0, 100.0));

        // even amount of spans ends at the head
        assert!(attrs[1].end_time.eq(3000.0));
        assert_eq!(attrs[1].end_pos, head);
    }

    #[test]
    fn slider_velocity_shortens_sliders() {
        let mut map = map(vec![RawHitObject::slider(Pos::zero(), 1000.0, linear(1))]);
        map.timing_points.push(RawTimingPoint::new(500.0, -50.0));
        map.slider_multiplier = 2.0;

        let processed = ProcessedBeatmap::new(&map).unwrap();

        // beat_len 250, 100 / (100 * 2) * 250
        assert!(processed.attributes()[0].duration.eq(125.0));
    }

    #[test]
    fn spinner_and_hold_keep_stored_end() {
        let map = map(vec![
            RawHitObject::spinner(0.0, 800.0),
            RawHitObject::hold(Pos::new(64.0, 192.0), 1000.0, 1600.0),
        ]);

        let processed = ProcessedBeatmap::new(&map).unwrap();
        let attrs = processed.attributes();

        assert!(attrs[0].end_time.eq(800.0));
        assert_eq!(attrs[0].end_pos, Pos::CENTER);
        assert!(attrs[1].end_time.eq(1600.0));
        assert!(processed.total_duration().eq(1600.0));
    }

    #[test]
    fn sorts_objects() {
        let map = map(vec![
            RawHitObject::circle(Pos::zero(), 500.0),
            RawHitObject::circle(Pos::zero(), 100.0),
        ]);

        let processed = ProcessedBeatmap::new(&map).unwrap();

        assert!(processed.hit_objects()[0].start_time.eq(100.0));
    }

    #[test]
    fn rejects_empty_maps() {
        let mut empty = map(Vec::new());

        assert!(matches!(
            ProcessedBeatmap::new(&empty),
            Err(MalformedChart::NoHitObjects)
        ));

        empty.hit_objects.push(RawHitObject::circle(Pos::zero(), 0.0));
        empty.timing_points.clear();

        assert!(matches!(
            ProcessedBeatmap::new(&empty),
            Err(MalformedChart::NoTimingPoints)
        ));
    }

    #[test]
    fn negative_slider_needs_timing_point() {
        let map = map(vec![RawHitObject::slider(Pos::zero(), -100.0, linear(1))]);

        assert!(matches!(
            ProcessedBeatmap::new(&map),
            Err(MalformedChart::TimingPointNotFound { .. })
        ));
    }

    #[test]
    fn span_progress_bounces() {
        assert!(span_progress(0.0, 100.0, 0.0).eq(0.0));
        assert!(span_progress(0.0, 100.0, 25.0).eq(0.25));
        assert!(span_progress(0.0, 100.0, 100.0).eq(1.0));
        assert!(span_progress(0.0, 100.0, 150.0).eq(0.5));
        assert!(span_progress(0.0, 100.0, 200.0).eq(0.0));
        assert!(span_progress(0.0, 0.0, 50.0).eq(0.0));
    }
}
