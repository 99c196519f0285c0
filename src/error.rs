use crate::model::mode::GameMode;

/// All the ways that creating a [`Preview`](crate::Preview) can fail.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("malformed beatmap")]
    Malformed(#[from] MalformedChart),
    #[error("no renderer for {0}")]
    UnsupportedMode(GameMode),
}

/// Structural problems of a [`Beatmap`](crate::Beatmap) that prevent
/// processing it.
///
/// Field-level validation is the parser's job; these are the cases the
/// timing and object processing cannot work around.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MalformedChart {
    #[error("beatmap contains no hit objects")]
    NoHitObjects,
    #[error("beatmap contains no timing points")]
    NoTimingPoints,
    #[error("first timing point must be uninherited")]
    InheritedFirstPoint,
    #[error("no timing point at or before {time}ms")]
    TimingPointNotFound { time: f64 },
    #[error("unknown hit object type {kind:#010b} at {time}ms")]
    UnknownHitObjectType { time: f64, kind: u8 },
    #[error("slider at {time}ms has no path")]
    MissingPath { time: f64 },
    #[error("spinner or hold note at {time}ms has no end time")]
    MissingEndTime { time: f64 },
    #[error("invalid key count {0}")]
    InvalidKeyCount(f32),
}
