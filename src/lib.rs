//! Library to convert osu!standard hitobjects into their gameplay
//! representation.
//!
//! ## Description
//!
//! Each [`RawHitObject`] describes its capabilities i.e. whether it has a
//! curve, an end time, a position, or combo information. Based on those,
//! it is converted into a circle, slider, or spinner. Sliders are then
//! expanded into their nested objects: a head, a tail, ticks, and repeat
//! points, based on the path's geometry and the beatmap's timing.
//!
//! ## Usage
//!
//! ```
//! use rosu_objects::{
//!     model::{
//!         control_point::TimingPoint,
//!         hit_object::{CurveData, PathType, Pos},
//!     },
//!     osu::object::OsuObject,
//!     Beatmap, RawHitObject,
//! };
//!
//! let mut map = Beatmap::default();
//! map.control_points.add_timing_point(TimingPoint::new(0.0, 500.0));
//!
//! let curve = CurveData::new(
//!     vec![Pos::new(0.0, 0.0), Pos::new(300.0, 0.0)],
//!     PathType::LINEAR,
//!     Some(300.0),
//! );
//!
//! map.hit_objects.push(RawHitObject::new(1000.0).pos(Pos::new(100.0, 100.0)));
//! map.hit_objects.push(RawHitObject::new(2000.0).curve(curve.repeats(1)));
//!
//! // Convert the objects, process combos, and apply defaults
//! let osu_objects = map.convert();
//!
//! let OsuObject::Slider(ref slider) = osu_objects[1] else {
//!     unreachable!()
//! };
//!
//! // head, tail, 4 ticks, 1 repeat point
//! assert_eq!(slider.nested_objects().len(), 7);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enables the `tracing` feature |
//! | `tracing` | Suspicious slider values encountered during conversion will be logged through `tracing`. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    model::{beatmap::Beatmap, hit_object::RawHitObject},
    osu::object::{OsuObject, Slider},
};

/// Types for osu!standard conversion.
pub mod osu;

/// Types used in and around this crate.
pub mod model;
