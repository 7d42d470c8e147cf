use super::Beatmap;

/// Resulting error type of [`Beatmap::check_integrity`].
///
/// Conversion itself never validates these values; invalid ones simply
/// lead to non-finite velocities or tick distances.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IntegrityError {
    #[error("slider multiplier must be positive, got {0}")]
    SliderMultiplier(f64),
    #[error("slider tick rate must be positive, got {0}")]
    SliderTickRate(f64),
    #[error("timing point at {time}ms has invalid beat length {beat_len}")]
    BeatLength { time: f64, beat_len: f64 },
    #[error("difficulty point at {time}ms has invalid speed multiplier {speed_multiplier}")]
    SpeedMultiplier { time: f64, speed_multiplier: f64 },
}

impl IntegrityError {
    pub(crate) fn check(map: &Beatmap) -> Result<(), Self> {
        fn is_valid(value: f64) -> bool {
            value.is_finite() && value > 0.0
        }

        let difficulty = &map.difficulty;

        if !is_valid(difficulty.slider_multiplier) {
            return Err(Self::SliderMultiplier(difficulty.slider_multiplier));
        }

        if !is_valid(difficulty.slider_tick_rate) {
            return Err(Self::SliderTickRate(difficulty.slider_tick_rate));
        }

        if let Some(point) = map
            .control_points
            .timing_points
            .iter()
            .find(|point| !is_valid(point.beat_len))
        {
            return Err(Self::BeatLength {
                time: point.time,
                beat_len: point.beat_len,
            });
        }

        if let Some(point) = map
            .control_points
            .difficulty_points
            .iter()
            .find(|point| !is_valid(point.speed_multiplier))
        {
            return Err(Self::SpeedMultiplier {
                time: point.time,
                speed_multiplier: point.speed_multiplier,
            });
        }

        Ok(())
    }
}
