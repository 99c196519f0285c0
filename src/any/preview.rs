use crate::{
    error::PreviewError,
    model::{
        beatmap::{Beatmap, BeatmapAttributes, ProcessedBeatmap},
        mode::GameMode,
    },
    render::Canvas,
};

use super::{ModeRenderer, PreviewBuilder};

/// A processed [`Beatmap`] ready to be rendered at arbitrary times.
///
/// Every frame only depends on the given time so seeking backwards or
/// skipping ahead needs no special handling.
///
/// # Example
///
/// ```
/// use rosu_preview::{render::DrawCall, Beatmap, Preview};
/// # use rosu_preview::model::{control_point::RawTimingPoint, hit_object::RawHitObject, pos::Pos};
///
/// let map = Beatmap {
///     timing_points: vec![RawTimingPoint::new(0.0, 500.0)],
///     hit_objects: vec![RawHitObject::circle(Pos::new(256.0, 192.0), 1000.0).new_combo()],
///     ..Beatmap::default()
/// };
///
/// let preview = Preview::new(&map).unwrap();
///
/// // Any `Canvas` works, a `Vec<DrawCall>` just records the calls.
/// let mut frame: Vec<DrawCall> = Vec::new();
/// preview.render_frame(&mut frame, 1000.0);
///
/// assert!(!frame.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    map: ProcessedBeatmap,
    attrs: BeatmapAttributes,
    mode: GameMode,
    renderer: ModeRenderer,
}

impl Preview {
    /// Process the map with default settings.
    ///
    /// Use [`PreviewBuilder`] to customize the preview.
    pub fn new(map: &Beatmap) -> Result<Self, PreviewError> {
        PreviewBuilder::new().build(map)
    }

    /// Create a [`PreviewBuilder`] to customize the preview.
    pub const fn builder() -> PreviewBuilder {
        PreviewBuilder::new()
    }

    pub(super) const fn from_parts(
        map: ProcessedBeatmap,
        attrs: BeatmapAttributes,
        mode: GameMode,
        renderer: ModeRenderer,
    ) -> Self {
        Self {
            map,
            attrs,
            mode,
            renderer,
        }
    }

    /// Draw the frame at `time` in milliseconds onto the canvas.
    pub fn render_frame(&self, canvas: &mut impl Canvas, time: f64) {
        self.renderer.render_frame(&self.map, canvas, time);
    }

    /// Length of the preview in milliseconds i.e. the end time of the last
    /// hit object.
    pub fn total_duration(&self) -> f64 {
        self.map.total_duration()
    }

    pub const fn beatmap(&self) -> &ProcessedBeatmap {
        &self.map
    }

    /// The difficulty-derived constants after applying overrides.
    pub const fn attributes(&self) -> &BeatmapAttributes {
        &self.attrs
    }

    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    pub const fn renderer(&self) -> &ModeRenderer {
        &self.renderer
    }
}
