pub use self::{difficulty::DifficultyPoint, timing::TimingPoint};

pub(crate) use self::{difficulty::difficulty_point_at, timing::timing_point_at};

mod difficulty;
mod timing;

/// All control points of a beatmap, each kind sorted by time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPointInfo {
    pub timing_points: Vec<TimingPoint>,
    pub difficulty_points: Vec<DifficultyPoint>,
}

impl ControlPointInfo {
    /// Insert a [`TimingPoint`] while keeping the points sorted.
    ///
    /// A point at the same time as an existing one replaces it.
    pub fn add_timing_point(&mut self, point: TimingPoint) {
        match self
            .timing_points
            .binary_search_by(|probe| probe.time.total_cmp(&point.time))
        {
            Err(i) => self.timing_points.insert(i, point),
            Ok(i) => self.timing_points[i] = point,
        }
    }

    /// Insert a [`DifficultyPoint`] while keeping the points sorted.
    ///
    /// Points that would not change the currently active speed multiplier
    /// are skipped.
    pub fn add_difficulty_point(&mut self, point: DifficultyPoint) {
        let redundant = match self.difficulty_point_at(point.time) {
            Some(existing) => point.is_redundant(existing),
            None => point.is_redundant(&DifficultyPoint::default()),
        };

        if redundant {
            return;
        }

        match self
            .difficulty_points
            .binary_search_by(|probe| probe.time.total_cmp(&point.time))
        {
            Err(i) => self.difficulty_points.insert(i, point),
            Ok(i) => self.difficulty_points[i] = point,
        }
    }

    /// Finds the [`TimingPoint`] that is active at the given time.
    pub fn timing_point_at(&self, time: f64) -> Option<&TimingPoint> {
        timing_point_at(&self.timing_points, time)
    }

    /// Finds the [`DifficultyPoint`] that is active at the given time.
    pub fn difficulty_point_at(&self, time: f64) -> Option<&DifficultyPoint> {
        difficulty_point_at(&self.difficulty_points, time)
    }

    /// The beat length and speed multiplier that are active at the given
    /// time, falling back to defaults if no point is active.
    pub fn snapshot_at(&self, time: f64) -> TimingSnapshot {
        let beat_len = self
            .timing_point_at(time)
            .map_or(TimingPoint::DEFAULT_BEAT_LEN, |point| point.beat_len);

        let speed_multiplier = self
            .difficulty_point_at(time)
            .map_or(DifficultyPoint::DEFAULT_SPEED_MULTIPLIER, |point| {
                point.speed_multiplier
            });

        TimingSnapshot {
            beat_len,
            speed_multiplier,
        }
    }
}

/// Timing values at a specific point in time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingSnapshot {
    pub beat_len: f64,
    pub speed_multiplier: f64,
}

impl Default for TimingSnapshot {
    fn default() -> Self {
        Self {
            beat_len: TimingPoint::DEFAULT_BEAT_LEN,
            speed_multiplier: DifficultyPoint::DEFAULT_SPEED_MULTIPLIER,
        }
    }
}
