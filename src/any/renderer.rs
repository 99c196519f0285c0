use crate::{model::beatmap::ProcessedBeatmap, render::Canvas};

#[cfg(feature = "mania")]
use crate::mania::ManiaRenderer;

#[cfg(feature = "osu")]
use crate::osu::OsuRenderer;

/// Frame renderer of a specific mode.
#[derive(Clone, Debug, PartialEq)]
pub enum ModeRenderer {
    #[cfg(feature = "osu")]
    Osu(OsuRenderer),
    #[cfg(feature = "mania")]
    Mania(ManiaRenderer),
}

impl ModeRenderer {
    /// Draw the frame at `time` onto the canvas.
    pub fn render_frame(&self, map: &ProcessedBeatmap, canvas: &mut impl Canvas, time: f64) {
        match *self {
            #[cfg(feature = "osu")]
            Self::Osu(ref renderer) => renderer.render_frame(map, canvas, time),
            #[cfg(feature = "mania")]
            Self::Mania(ref renderer) => renderer.render_frame(map, canvas, time),
        }
    }
}

#[cfg(feature = "osu")]
impl From<OsuRenderer> for ModeRenderer {
    fn from(renderer: OsuRenderer) -> Self {
        Self::Osu(renderer)
    }
}

#[cfg(feature = "mania")]
impl From<ManiaRenderer> for ModeRenderer {
    fn from(renderer: ManiaRenderer) -> Self {
        Self::Mania(renderer)
    }
}
