use std::fmt;

/// The game mode of a beatmap.
///
/// Every mode can appear in a chart but only [`GameMode::Osu`] and
/// [`GameMode::Mania`] can be previewed.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum GameMode {
    #[default]
    Osu = 0,
    Taiko = 1,
    Catch = 2,
    Mania = 3,
}

impl GameMode {
    /// Whether this crate was compiled with a renderer for the mode.
    pub const fn is_supported(self) -> bool {
        match self {
            Self::Osu => cfg!(feature = "osu"),
            Self::Mania => cfg!(feature = "mania"),
            Self::Taiko | Self::Catch => false,
        }
    }
}

impl From<u8> for GameMode {
    fn from(mode: u8) -> Self {
        match mode {
            1 => Self::Taiko,
            2 => Self::Catch,
            3 => Self::Mania,
            _ => Self::Osu,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Osu => "osu!standard",
            Self::Taiko => "osu!taiko",
            Self::Catch => "osu!catch",
            Self::Mania => "osu!mania",
        };

        f.write_str(name)
    }
}
