/// Difficulty-related info about this control point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifficultyPoint {
    pub time: f64,
    pub speed_multiplier: f64,
}

impl DifficultyPoint {
    pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

    pub const fn new(time: f64, speed_multiplier: f64) -> Self {
        Self {
            time,
            speed_multiplier,
        }
    }

    /// Create a [`DifficultyPoint`] from the negative beat length of an
    /// inherited timing line.
    pub fn from_inherited_beat_len(time: f64, beat_len: f64) -> Self {
        let speed_multiplier = if beat_len < 0.0 {
            100.0 / -beat_len
        } else {
            Self::DEFAULT_SPEED_MULTIPLIER
        };

        Self::new(time, speed_multiplier)
    }

    pub fn is_redundant(&self, existing: &Self) -> bool {
        (self.speed_multiplier - existing.speed_multiplier).abs() < f64::EPSILON
    }
}

impl Default for DifficultyPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed_multiplier: Self::DEFAULT_SPEED_MULTIPLIER,
        }
    }
}

/// Before the first difficulty point, no point is active.
pub fn difficulty_point_at(points: &[DifficultyPoint], time: f64) -> Option<&DifficultyPoint> {
    points
        .binary_search_by(|probe| probe.time.total_cmp(&time))
        .map_or_else(|i| i.checked_sub(1), Some)
        .map(|i| &points[i])
}
