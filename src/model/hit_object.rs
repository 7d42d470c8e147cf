pub use rosu_map::{
    section::hit_objects::{PathControlPoint, PathType, SplineType},
    util::Pos,
};

use super::hit_sample::HitSampleInfo;

/// A hitobject as it comes from the beatmap, described only through the
/// capabilities it has.
///
/// Each capability is optional and independent from the others. Which of
/// them are present decides what kind of object the raw hitobject converts
/// into, see [`convert_object`].
///
/// [`convert_object`]: crate::osu::convert::convert_object
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawHitObject {
    pub start_time: f64,
    pub samples: Vec<HitSampleInfo>,
    pub curve: Option<CurveData>,
    pub end_time: Option<f64>,
    pub pos: Option<Pos>,
    pub combo: Option<ComboData>,
    pub legacy_last_tick_offset: Option<f64>,
}

impl RawHitObject {
    /// A raw hitobject without any capabilities.
    pub const fn new(start_time: f64) -> Self {
        Self {
            start_time,
            samples: Vec::new(),
            curve: None,
            end_time: None,
            pos: None,
            combo: None,
            legacy_last_tick_offset: None,
        }
    }

    pub fn samples(self, samples: Vec<HitSampleInfo>) -> Self {
        Self { samples, ..self }
    }

    pub fn curve(self, curve: CurveData) -> Self {
        Self {
            curve: Some(curve),
            ..self
        }
    }

    pub fn end_time(self, end_time: f64) -> Self {
        Self {
            end_time: Some(end_time),
            ..self
        }
    }

    pub fn pos(self, pos: Pos) -> Self {
        Self {
            pos: Some(pos),
            ..self
        }
    }

    pub fn combo(self, new_combo: bool, combo_offset: i32) -> Self {
        Self {
            combo: Some(ComboData {
                new_combo,
                combo_offset,
            }),
            ..self
        }
    }

    pub fn legacy_last_tick_offset(self, offset: f64) -> Self {
        Self {
            legacy_last_tick_offset: Some(offset),
            ..self
        }
    }
}

/// The curve capability of a [`RawHitObject`].
#[derive(Clone, Debug, PartialEq)]
pub struct CurveData {
    /// Control points relative to the object's position.
    pub control_points: Vec<Pos>,
    pub path_type: PathType,
    /// The declared length of the path.
    pub expected_dist: Option<f64>,
    /// Samples for each node i.e. the head, every repeat, and the tail.
    pub node_samples: Vec<Vec<HitSampleInfo>>,
    pub repeats: usize,
}

impl CurveData {
    pub fn new(control_points: Vec<Pos>, path_type: PathType, expected_dist: Option<f64>) -> Self {
        Self {
            control_points,
            path_type,
            expected_dist,
            node_samples: Vec::new(),
            repeats: 0,
        }
    }

    pub fn repeats(self, repeats: usize) -> Self {
        Self { repeats, ..self }
    }

    pub fn node_samples(self, node_samples: Vec<Vec<HitSampleInfo>>) -> Self {
        Self {
            node_samples,
            ..self
        }
    }

    /// Turn the points into [`PathControlPoint`]s where the first point
    /// carries the path type.
    pub(crate) fn path_control_points(&self) -> Box<[PathControlPoint]> {
        self.control_points
            .iter()
            .enumerate()
            .map(|(i, &pos)| PathControlPoint {
                pos,
                path_type: (i == 0).then_some(self.path_type),
            })
            .collect()
    }
}

/// The combo capability of a [`RawHitObject`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboData {
    pub new_combo: bool,
    /// How many combo colours to skip when starting a new combo.
    pub combo_offset: i32,
}
