use rosu_map::LATEST_FORMAT_VERSION;

use crate::osu::{
    convert::{self, ConvertIter},
    object::OsuObject,
};

pub use self::{
    integrity::IntegrityError,
    settings::{difficulty_range, DifficultySettings},
};

use super::{
    control_point::{ControlPointInfo, TimingSnapshot},
    hit_object::RawHitObject,
};

mod integrity;
mod settings;

/// All beatmap data that is relevant for converting hitobjects.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    /// The `.osu` file format version.
    pub version: i32,
    pub difficulty: DifficultySettings,
    pub control_points: ControlPointInfo,
    pub hit_objects: Vec<RawHitObject>,
}

impl Beatmap {
    /// Lazily convert each [`RawHitObject`] into an [`OsuObject`].
    ///
    /// The objects are only constructed; neither combos are processed nor
    /// defaults applied. Use [`Beatmap::convert`] for the whole pipeline.
    pub fn convert_objects(&self) -> ConvertIter<'_> {
        ConvertIter::new(self)
    }

    /// Convert all hitobjects, process their combos, and apply defaults.
    pub fn convert(&self) -> Vec<OsuObject> {
        convert::convert_beatmap(self)
    }

    /// The beat length and speed multiplier active at the given time.
    pub fn snapshot_at(&self, time: f64) -> TimingSnapshot {
        self.control_points.snapshot_at(time)
    }

    /// Check whether slider multiplier, tick rate, and control points hold
    /// values that produce finite slider velocities and tick distances.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        IntegrityError::check(self)
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            version: LATEST_FORMAT_VERSION,
            difficulty: DifficultySettings::default(),
            control_points: ControlPointInfo::default(),
            hit_objects: Vec::new(),
        }
    }
}
