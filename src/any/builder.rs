use crate::{
    error::PreviewError,
    model::{
        beatmap::{Beatmap, BeatmapAttributesBuilder, ProcessedBeatmap},
        mode::GameMode,
    },
};

#[cfg(feature = "mania")]
use crate::mania::ManiaRenderer;

#[cfg(feature = "osu")]
use crate::osu::OsuRenderer;

use super::{ModeRenderer, Preview};

/// Builder for a [`Preview`] with custom settings.
///
/// # Example
///
/// ```
/// use rosu_preview::{Beatmap, PreviewBuilder};
/// # use rosu_preview::model::{control_point::RawTimingPoint, hit_object::RawHitObject, pos::Pos};
///
/// let map = Beatmap {
///     timing_points: vec![RawTimingPoint::new(0.0, 500.0)],
///     hit_objects: vec![RawHitObject::circle(Pos::new(256.0, 192.0), 1000.0)],
///     ..Beatmap::default()
/// };
///
/// let preview = PreviewBuilder::new()
///     .ar(9.0) // preview the map as if it had AR9
///     .follow_points(false)
///     .build(&map)
///     .unwrap();
///
/// assert_eq!(preview.total_duration(), 1000.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct PreviewBuilder {
    ar: Option<f32>,
    cs: Option<f32>,
    follow_points: bool,
    note_speed: f32,
    hit_position: f32,
}

impl PreviewBuilder {
    /// Create a new [`PreviewBuilder`] using the map's own difficulty
    /// settings.
    pub const fn new() -> Self {
        Self {
            ar: None,
            cs: None,
            follow_points: true,
            note_speed: 0.65,
            hit_position: 364.0,
        }
    }

    /// Override the approach rate.
    pub const fn ar(self, ar: f32) -> Self {
        Self {
            ar: Some(ar),
            ..self
        }
    }

    /// Override the circle size.
    ///
    /// For osu!mania this is the key count.
    pub const fn cs(self, cs: f32) -> Self {
        Self {
            cs: Some(cs),
            ..self
        }
    }

    /// Whether osu!standard follow points between consecutive objects of a
    /// combo should be drawn. Defaults to `true`.
    pub const fn follow_points(self, follow_points: bool) -> Self {
        Self {
            follow_points,
            ..self
        }
    }

    /// osu!mania scroll speed in osu!pixels per normalized millisecond.
    pub const fn note_speed(self, note_speed: f32) -> Self {
        Self { note_speed, ..self }
    }

    /// y coordinate of the osu!mania judgement line.
    pub const fn hit_position(self, hit_position: f32) -> Self {
        Self {
            hit_position,
            ..self
        }
    }

    /// Process the map and set up the renderer of its mode.
    pub fn build(&self, map: &Beatmap) -> Result<Preview, PreviewError> {
        if !map.mode.is_supported() {
            return Err(PreviewError::UnsupportedMode(map.mode));
        }

        let processed = ProcessedBeatmap::new(map)?;

        let mut attrs = BeatmapAttributesBuilder::new().map(map);

        if let Some(ar) = self.ar {
            attrs = attrs.ar(ar);
        }

        if let Some(cs) = self.cs {
            attrs = attrs.cs(cs);
        }

        let attrs = attrs.build();

        let renderer: ModeRenderer = match map.mode {
            #[cfg(feature = "osu")]
            GameMode::Osu => OsuRenderer::new(attrs.clone(), self.follow_points).into(),
            #[cfg(feature = "mania")]
            GameMode::Mania => {
                let renderer =
                    ManiaRenderer::new(&processed, attrs.cs, self.note_speed, self.hit_position)?;

                log_debug!(
                    keys = renderer.key_count(),
                    main_bpm = renderer.main_bpm(),
                    "set up osu!mania renderer"
                );

                renderer.into()
            }
            mode => return Err(PreviewError::UnsupportedMode(mode)),
        };

        log_debug!(
            mode = %map.mode,
            objects = processed.hit_objects().len(),
            timing_points = processed.timing_points().len(),
            total_duration = processed.total_duration(),
            "created preview"
        );

        Ok(Preview::from_parts(processed, attrs, map.mode, renderer))
    }
}

impl Default for PreviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::MalformedChart,
        model::{control_point::RawTimingPoint, hit_object::RawHitObject, pos::Pos},
    };

    use super::*;

    fn map(mode: GameMode) -> Beatmap {
        Beatmap {
            mode,
            cs: 4.0,
            timing_points: vec![RawTimingPoint::new(0.0, 500.0)],
            hit_objects: vec![RawHitObject::circle(Pos::new(64.0, 192.0), 1000.0)],
            ..Beatmap::default()
        }
    }

    #[test]
    fn unsupported_modes() {
        for mode in [GameMode::Taiko, GameMode::Catch] {
            assert!(matches!(
                PreviewBuilder::new().build(&map(mode)),
                Err(PreviewError::UnsupportedMode(m)) if m == mode
            ));
        }
    }

    #[test]
    fn malformed_maps() {
        let mut map = map(GameMode::Osu);
        map.hit_objects.clear();

        assert!(matches!(
            PreviewBuilder::new().build(&map),
            Err(PreviewError::Malformed(MalformedChart::NoHitObjects))
        ));
    }

    #[cfg(feature = "osu")]
    #[test]
    fn overrides_difficulty() {
        let preview = PreviewBuilder::new()
            .ar(10.0)
            .cs(0.0)
            .build(&map(GameMode::Osu))
            .unwrap();

        assert_eq!(preview.attributes().preempt, 450.0);
        assert_eq!(preview.attributes().fade_in, 300.0);
    }

    #[cfg(feature = "mania")]
    #[test]
    fn cs_override_changes_key_count() {
        let preview = PreviewBuilder::new()
            .cs(7.0)
            .build(&map(GameMode::Mania))
            .unwrap();

        let ModeRenderer::Mania(ref renderer) = *preview.renderer() else {
            panic!("expected osu!mania renderer");
        };

        assert_eq!(renderer.key_count(), 7);
    }
}
