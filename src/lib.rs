//! Library to compute frame-by-frame previews of [osu!] beatmaps.
//!
//! ## Description
//!
//! Given a parsed beatmap and a timestamp, `rosu-preview` emits the draw
//! calls for everything visible at that moment: hit circles with approach
//! circles and follow points, slider bodies and follow circles, spinners,
//! and osu!mania notes scrolling with BPM- and slider velocity-aware speed.
//!
//! Parsing `.osu` files as well as the actual painting are left to the host.
//! The host implements [`Canvas`] for its 2D surface of choice and calls
//! [`Preview::render_frame`] whenever it wants a new frame; every frame only
//! depends on the given time so seeking is free.
//!
//! ## Usage
//!
//! ```
//! use rosu_preview::{
//!     model::{control_point::RawTimingPoint, hit_object::RawHitObject, pos::Pos},
//!     render::DrawCall,
//!     Beatmap,
//! };
//!
//! let map = Beatmap {
//!     ar: 9.0,
//!     timing_points: vec![RawTimingPoint::new(0.0, 500.0)],
//!     hit_objects: vec![
//!         RawHitObject::circle(Pos::new(100.0, 100.0), 1000.0).new_combo(),
//!         RawHitObject::spinner(1500.0, 3000.0).new_combo(),
//!     ],
//!     ..Beatmap::default()
//! };
//!
//! let preview = map.preview().unwrap();
//!
//! // Use the total duration for a scrub bar
//! assert_eq!(preview.total_duration(), 3000.0);
//!
//! // Record the draw calls of a single frame
//! let mut frame: Vec<DrawCall> = Vec::new();
//! preview.render_frame(&mut frame, 1000.0);
//!
//! println!("{} draw calls", frame.len());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enable all modes |
//! | `osu` | Enable osu!standard previews |
//! | `mania` | Enable osu!mania previews |
//! | `serde` | Implement `Deserialize` and `Serialize` for all input types so a parser's JSON output can be fed in directly. | [`serde`]
//! | `tracing` | Noteworthy events such as degenerate slider paths or rounded key counts will be logged through `tracing`. If this features is not enabled, they will be ignored. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`Canvas`]: render::Canvas
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::many_single_char_names
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    any::{ModeRenderer, Preview, PreviewBuilder},
    error::{MalformedChart, PreviewError},
    model::{beatmap::Beatmap, mode::GameMode},
};

/// Types for previews of any mode.
pub mod any;

pub mod curve;

/// Types for osu!standard previews.
pub mod osu;

/// Types for osu!mania previews.
pub mod mania;

pub mod render;

/// Types used in and around this crate.
pub mod model;

mod error;
