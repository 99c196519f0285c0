/// Beatmap related types.
pub mod beatmap;

/// Control point related types.
pub mod control_point;

/// Hitobject related types.
pub mod hit_object;

/// Gamemode related types.
pub mod mode;

/// Playfield coordinates.
pub mod pos;
