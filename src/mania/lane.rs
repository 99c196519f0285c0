use crate::render::Colour;

/// Width of a lane in osu!pixels.
pub const LANE_WIDTH: f32 = 30.0;
/// Gap between a note and the lane's border.
pub const LANE_SPACING: f32 = 1.0;
/// Horizontal center of the stage.
pub const X_CENTER: f32 = 512.0 / 2.0;

const COLOUR_1: Colour = Colour::hex(0xffffff);
const COLOUR_2: Colour = Colour::hex(0xdc8dba);
const COLOUR_S: Colour = Colour::hex(0xd5bc00);

/// Lane colours indexed by key count; co-op layouts repeat a single-player
/// layout for both halves.
const LANE_COLOURS: [&[Colour]; 19] = [
    &[],
    &[COLOUR_S],
    &[COLOUR_1, COLOUR_1],
    &[COLOUR_1, COLOUR_S, COLOUR_1],
    &[COLOUR_1, COLOUR_2, COLOUR_2, COLOUR_1],
    &[COLOUR_1, COLOUR_2, COLOUR_S, COLOUR_2, COLOUR_1],
    &[COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_1, COLOUR_2, COLOUR_1],
    &[COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1],
    &[
        COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1,
    ],
    &[
        COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_2, COLOUR_S, COLOUR_2, COLOUR_1, COLOUR_2, COLOUR_1,
    ],
    // Co-op
    &[
        COLOUR_1, COLOUR_2, COLOUR_S, COLOUR_2, COLOUR_1, COLOUR_1, COLOUR_2, COLOUR_S, COLOUR_2,
        COLOUR_1,
    ],
    &[],
    &[
        COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_1, COLOUR_2, COLOUR_1,
        COLOUR_1, COLOUR_2, COLOUR_1,
    ],
    &[],
    &[
        COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_1, COLOUR_2,
        COLOUR_1, COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1,
    ],
    &[],
    &[
        COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_1,
        COLOUR_2, COLOUR_1, COLOUR_S, COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_S,
    ],
    &[],
    &[
        COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_2, COLOUR_S, COLOUR_2, COLOUR_1, COLOUR_2, COLOUR_1,
        COLOUR_1, COLOUR_2, COLOUR_1, COLOUR_2, COLOUR_S, COLOUR_2, COLOUR_1, COLOUR_2, COLOUR_1,
    ],
];

/// Colour of a lane, white if the key count has no layout.
pub fn lane_colour(key_count: usize, lane: usize) -> Colour {
    LANE_COLOURS
        .get(key_count)
        .and_then(|layout| layout.get(lane))
        .copied()
        .unwrap_or(COLOUR_1)
}

/// The lane of an object at `x`.
pub fn lane(x: f32, key_count: usize) -> usize {
    let total_lanes = key_count as f32;
    let x_divisor = 512.0 / total_lanes;

    (x / x_divisor).floor().min(total_lanes - 1.0) as usize
}

/// Left edge of a lane.
pub fn lane_x(lane: usize, key_count: usize) -> f32 {
    (lane as f32 - key_count as f32 / 2.0) * LANE_WIDTH + X_CENTER
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(64.0, 4 => 0)]
    #[test_case(128.0, 4 => 1)]
    #[test_case(448.0, 4 => 3)]
    #[test_case(512.0, 4 => 3; "right edge clamps")]
    #[test_case(-10.0, 4 => 0; "negative saturates")]
    #[test_case(256.0, 7 => 3)]
    fn lanes(x: f32, key_count: usize) -> usize {
        lane(x, key_count)
    }

    #[test]
    fn stage_is_centered() {
        assert_eq!(lane_x(0, 4), 196.0);
        assert_eq!(lane_x(3, 4) + LANE_WIDTH, 316.0);
        assert_eq!(lane_x(3, 7), 241.0);
    }

    #[test]
    fn palettes() {
        assert_eq!(lane_colour(1, 0), COLOUR_S);
        assert_eq!(lane_colour(4, 1), COLOUR_2);
        assert_eq!(lane_colour(7, 3), COLOUR_S);
        assert_eq!(lane_colour(18, 13), COLOUR_S);

        for (key_count, layout) in LANE_COLOURS.iter().enumerate() {
            assert!(layout.is_empty() || layout.len() == key_count);
        }
    }

    #[test]
    fn missing_layouts_fall_back_to_white() {
        assert_eq!(lane_colour(11, 4), Colour::WHITE);
        assert_eq!(lane_colour(30, 0), Colour::WHITE);
    }
}
