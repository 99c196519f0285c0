use std::cmp::Ordering;

use crate::error::MalformedChart;

use super::pos::Pos;

/// A hit object as handed over by the parser, tagged by type bits.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RawHitObject {
    pub pos: Pos,
    pub start_time: f64,
    /// Type bits, see the associated `*_FLAG` constants.
    pub kind: u8,
    /// Path data for sliders.
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: Option<RawPath>,
    /// Stored end time for spinners and hold notes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_time: Option<f64>,
}

impl RawHitObject {
    pub const CIRCLE_FLAG: u8 = 1 << 0;
    pub const SLIDER_FLAG: u8 = 1 << 1;
    pub const NEW_COMBO_FLAG: u8 = 1 << 2;
    pub const SPINNER_FLAG: u8 = 1 << 3;
    pub const HOLD_FLAG: u8 = 1 << 7;

    /// A circle or an osu!mania note.
    pub const fn circle(pos: Pos, start_time: f64) -> Self {
        Self {
            pos,
            start_time,
            kind: Self::CIRCLE_FLAG,
            path: None,
            end_time: None,
        }
    }

    pub const fn slider(pos: Pos, start_time: f64, path: RawPath) -> Self {
        Self {
            pos,
            start_time,
            kind: Self::SLIDER_FLAG,
            path: Some(path),
            end_time: None,
        }
    }

    pub const fn spinner(start_time: f64, end_time: f64) -> Self {
        Self {
            pos: Pos::CENTER,
            start_time,
            kind: Self::SPINNER_FLAG,
            path: None,
            end_time: Some(end_time),
        }
    }

    pub const fn hold(pos: Pos, start_time: f64, end_time: f64) -> Self {
        Self {
            pos,
            start_time,
            kind: Self::HOLD_FLAG,
            path: None,
            end_time: Some(end_time),
        }
    }

    /// Set the new combo bit.
    #[must_use]
    pub fn new_combo(mut self) -> Self {
        self.kind |= Self::NEW_COMBO_FLAG;

        self
    }

    pub const fn is_new_combo(&self) -> bool {
        self.kind & Self::NEW_COMBO_FLAG > 0
    }
}

/// Path payload of a slider.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RawPath {
    pub kind: PathKind,
    /// Control points excluding the slider head.
    pub control_points: Vec<Pos>,
    /// Length of the path in osu!pixels.
    pub distance: f64,
    /// Amount of spans; `0` is treated as `1`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub repeats: usize,
}

/// The curve type of a slider path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PathKind {
    #[cfg_attr(feature = "serde", serde(rename = "L", alias = "Linear"))]
    Linear,
    #[cfg_attr(feature = "serde", serde(rename = "B", alias = "Bezier"))]
    Bezier,
    /// Perfect circular arc through three points.
    #[cfg_attr(feature = "serde", serde(rename = "P", alias = "Circular"))]
    Circular,
}

/// A decoded hit object.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub new_combo: bool,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Decode the type bits of a [`RawHitObject`].
    pub fn decode(raw: &RawHitObject) -> Result<Self, MalformedChart> {
        let RawHitObject {
            pos,
            start_time,
            kind,
            ref path,
            end_time,
        } = *raw;

        let end_time = || {
            end_time
                .map(|end_time| end_time.max(start_time))
                .ok_or(MalformedChart::MissingEndTime { time: start_time })
        };

        let decoded = if kind & RawHitObject::CIRCLE_FLAG > 0 {
            HitObjectKind::Circle
        } else if kind & RawHitObject::SLIDER_FLAG > 0 {
            let path = path
                .as_ref()
                .filter(|path| !path.control_points.is_empty())
                .ok_or(MalformedChart::MissingPath { time: start_time })?;

            HitObjectKind::Slider(Slider {
                path_kind: path.kind,
                control_points: path.control_points.clone().into_boxed_slice(),
                distance: path.distance,
                repeats: path.repeats.max(1),
            })
        } else if kind & RawHitObject::SPINNER_FLAG > 0 {
            HitObjectKind::Spinner(Spinner {
                end_time: end_time()?,
            })
        } else if kind & RawHitObject::HOLD_FLAG > 0 {
            HitObjectKind::Hold(HoldNote {
                end_time: end_time()?,
            })
        } else {
            return Err(MalformedChart::UnknownHitObjectType {
                time: start_time,
                kind,
            });
        };

        Ok(Self {
            pos,
            start_time,
            new_combo: raw.is_new_combo(),
            kind: decoded,
        })
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(_))
    }

    /// Whether the hitobject is a hold note.
    pub const fn is_hold_note(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Hold(_))
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
    Hold(HoldNote),
}

/// A slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub path_kind: PathKind,
    /// Control points excluding the head, never empty.
    pub control_points: Box<[Pos]>,
    pub distance: f64,
    /// Amount of spans, at least `1`.
    pub repeats: usize,
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub end_time: f64,
}

/// A hold note.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoldNote {
    pub end_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_type_bits() {
        let circle = HitObject::decode(&RawHitObject::circle(Pos::new(1.0, 2.0), 10.0)).unwrap();
        assert!(circle.is_circle());
        assert!(!circle.new_combo);

        let spinner = HitObject::decode(&RawHitObject::spinner(100.0, 50.0).new_combo()).unwrap();
        assert!(spinner.new_combo);
        assert_eq!(spinner.kind, HitObjectKind::Spinner(Spinner { end_time: 100.0 }));

        let hold = HitObject::decode(&RawHitObject::hold(Pos::zero(), 0.0, 300.0)).unwrap();
        assert!(hold.is_hold_note());
    }

    #[test]
    fn slider_defaults_to_one_span() {
        let path = RawPath {
            kind: PathKind::Linear,
            control_points: vec![Pos::new(100.0, 0.0)],
            distance: 100.0,
            repeats: 0,
        };

        let slider = HitObject::decode(&RawHitObject::slider(Pos::zero(), 0.0, path)).unwrap();

        let HitObjectKind::Slider(slider) = slider.kind else {
            panic!("expected slider");
        };

        assert_eq!(slider.repeats, 1);
    }

    #[test]
    fn rejects_incomplete_objects() {
        let mut raw = RawHitObject::spinner(0.0, 100.0);
        raw.end_time = None;

        assert!(matches!(
            HitObject::decode(&raw),
            Err(MalformedChart::MissingEndTime { .. })
        ));

        let mut raw = RawHitObject::circle(Pos::zero(), 0.0);
        raw.kind = RawHitObject::SLIDER_FLAG;

        assert!(matches!(
            HitObject::decode(&raw),
            Err(MalformedChart::MissingPath { .. })
        ));

        raw.kind = RawHitObject::NEW_COMBO_FLAG;

        assert!(matches!(
            HitObject::decode(&raw),
            Err(MalformedChart::UnknownHitObjectType { kind: 4, .. })
        ));
    }
}
