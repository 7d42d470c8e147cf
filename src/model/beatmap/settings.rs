/// Beatmap-wide difficulty values that are relevant for conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct DifficultySettings {
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,
    pub ar: f32,
    pub cs: f32,
    pub od: f32,
}

impl DifficultySettings {
    pub const DEFAULT_SLIDER_MULTIPLIER: f64 = 1.4;
    pub const DEFAULT_SLIDER_TICK_RATE: f64 = 1.0;
    pub const DEFAULT_ATTRIBUTE: f32 = 5.0;

    /// Create new [`DifficultySettings`] with default values.
    pub const fn new() -> Self {
        Self {
            slider_multiplier: Self::DEFAULT_SLIDER_MULTIPLIER,
            slider_tick_rate: Self::DEFAULT_SLIDER_TICK_RATE,
            ar: Self::DEFAULT_ATTRIBUTE,
            cs: Self::DEFAULT_ATTRIBUTE,
            od: Self::DEFAULT_ATTRIBUTE,
        }
    }

    /// Specify the slider multiplier.
    pub const fn slider_multiplier(self, slider_multiplier: f64) -> Self {
        Self {
            slider_multiplier,
            ..self
        }
    }

    /// Specify the slider tick rate.
    pub const fn slider_tick_rate(self, slider_tick_rate: f64) -> Self {
        Self {
            slider_tick_rate,
            ..self
        }
    }

    /// Specify the approach rate.
    pub const fn ar(self, ar: f32) -> Self {
        Self { ar, ..self }
    }

    /// Specify the circle size.
    pub const fn cs(self, cs: f32) -> Self {
        Self { cs, ..self }
    }

    /// Specify the overall difficulty.
    pub const fn od(self, od: f32) -> Self {
        Self { od, ..self }
    }

    /// The time in milliseconds that objects appear before their start time.
    pub fn time_preempt(&self) -> f64 {
        difficulty_range(f64::from(self.ar), 1800.0, 1200.0, 450.0)
    }

    /// The scale of objects based on the circle size.
    pub fn scale(&self) -> f32 {
        (1.0 - 0.7 * (self.cs - 5.0) / 5.0) / 2.0
    }
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a difficulty value in `[0, 10]` onto `[min, max]` with `mid` at `5`.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}
