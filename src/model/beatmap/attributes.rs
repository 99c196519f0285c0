use super::Beatmap;

/// Visual constants derived from a [`Beatmap`]'s difficulty settings.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f32,
    /// The circle size.
    pub cs: f32,
    /// Hit circle radius in osu!pixels.
    pub radius: f32,
    /// Time in milliseconds an object is visible before its start time
    /// i.e. `TimePreempt`.
    pub preempt: f64,
    /// Time in milliseconds for an object to fade in completely.
    pub fade_in: f64,
}

/// A builder for [`BeatmapAttributes`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: f32,
    cs: f32,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// Attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self { ar: 5.0, cs: 5.0 }
    }

    /// Use the given [`Beatmap`]'s attributes.
    pub const fn map(self, map: &Beatmap) -> Self {
        Self {
            ar: map.ar,
            cs: map.cs,
        }
    }

    /// Specify the approach rate.
    pub const fn ar(self, ar: f32) -> Self {
        Self { ar, ..self }
    }

    /// Specify the circle size.
    pub const fn cs(self, cs: f32) -> Self {
        Self { cs, ..self }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        BeatmapAttributes {
            ar: self.ar,
            cs: self.cs,
            radius: radius(self.cs),
            preempt: preempt(self.ar),
            fade_in: fade_in(self.ar),
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Hit circle radius for the given circle size.
pub fn radius(cs: f32) -> f32 {
    32.0 * (1.0 - 0.7 * (cs - 5.0) / 5.0)
}

/// Approach time for the given approach rate.
pub fn preempt(ar: f32) -> f64 {
    difficulty_range(f64::from(ar), 1800.0, 1200.0, 450.0)
}

/// Fade in time for the given approach rate.
pub fn fade_in(ar: f32) -> f64 {
    difficulty_range(f64::from(ar), 1200.0, 800.0, 300.0)
}

fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}
