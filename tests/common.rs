#![allow(unused)]

use rosu_preview::{
    model::{
        control_point::RawTimingPoint,
        hit_object::{PathKind, RawHitObject, RawPath},
        mode::GameMode,
        pos::Pos,
    },
    render::DrawCall,
    Beatmap,
};

/// A map with a single 120 BPM timing point at the start.
pub fn map(mode: GameMode, hit_objects: Vec<RawHitObject>) -> Beatmap {
    Beatmap {
        mode,
        slider_multiplier: 1.0,
        timing_points: vec![RawTimingPoint::new(0.0, 500.0)],
        hit_objects,
        ..Beatmap::default()
    }
}

pub fn linear_slider(pos: Pos, start_time: f64, end: Pos, repeats: usize) -> RawHitObject {
    let path = RawPath {
        kind: PathKind::Linear,
        control_points: vec![end],
        distance: f64::from(pos.distance(end)),
        repeats,
    };

    RawHitObject::slider(pos, start_time, path)
}

/// Center and radius of every recorded arc.
pub fn arcs(calls: &[DrawCall]) -> Vec<(Pos, f32)> {
    calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::Arc { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .collect()
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

#[track_caller]
pub fn assert_eq_pos(a: Pos, b: Pos) {
    assert!(a.distance(b) < 1e-3, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = 1e-3;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);
