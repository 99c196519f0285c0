use crate::{error::PreviewError, Preview, PreviewBuilder};

pub use self::{
    attributes::{fade_in, preempt, radius, BeatmapAttributes, BeatmapAttributesBuilder},
    bpm::main_bpm,
    processed::{
        slider_position, span_progress, ObjectAttributes, ProcessedBeatmap, COMBO_COLOUR_COUNT,
    },
};

use super::{control_point::RawTimingPoint, hit_object::RawHitObject, mode::GameMode};

mod attributes;
mod bpm;
mod processed;

/// All beatmap data that is relevant for rendering a preview.
///
/// Filled by the parser and only read by this crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Beatmap {
    // General
    pub mode: GameMode,

    // Difficulty
    pub ar: f32,
    /// Circle size in osu!standard, key count in osu!mania.
    pub cs: f32,
    pub slider_multiplier: f64,

    // TimingPoints
    pub timing_points: Vec<RawTimingPoint>,

    // HitObjects
    pub hit_objects: Vec<RawHitObject>,
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Process the map and create a [`Preview`] with default settings.
    pub fn preview(&self) -> Result<Preview, PreviewError> {
        PreviewBuilder::new().build(self)
    }

    /// Decode and enrich the hit objects without creating a renderer.
    pub fn process(&self) -> Result<ProcessedBeatmap, PreviewError> {
        ProcessedBeatmap::new(self).map_err(PreviewError::from)
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            mode: GameMode::Osu,
            ar: 5.0,
            cs: 5.0,
            slider_multiplier: 1.4,
            timing_points: Vec::new(),
            hit_objects: Vec::new(),
        }
    }
}
