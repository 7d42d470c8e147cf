use rosu_map::section::hit_objects::CurveBuffers;

use crate::model::{
    beatmap::{difficulty_range, DifficultySettings},
    control_point::ControlPointInfo,
    hit_object::{ComboData, Pos},
    hit_sample::HitSampleInfo,
};

pub use self::{
    nested::{ComboIndices, NestedSliderObject, NestedSliderObjectKind},
    path::{PathGeometry, SliderCurve, SliderPath},
    slider::Slider,
};

mod nested;
mod path;
mod slider;

/// An osu!standard hitobject.
#[derive(Clone, Debug, PartialEq)]
pub enum OsuObject {
    Circle(HitCircle),
    Slider(Slider),
    Spinner(Spinner),
}

impl OsuObject {
    pub const fn start_time(&self) -> f64 {
        match self {
            Self::Circle(circle) => circle.start_time,
            Self::Slider(slider) => slider.start_time,
            Self::Spinner(spinner) => spinner.start_time,
        }
    }

    /// The end time of the object.
    ///
    /// For sliders this is only accurate after defaults have been applied.
    pub const fn end_time(&self) -> f64 {
        match self {
            Self::Circle(circle) => circle.start_time,
            Self::Slider(slider) => slider.end_time(),
            Self::Spinner(spinner) => spinner.end_time,
        }
    }

    pub const fn pos(&self) -> Pos {
        match self {
            Self::Circle(circle) => circle.pos,
            Self::Slider(slider) => slider.pos(),
            Self::Spinner(spinner) => spinner.pos,
        }
    }

    pub fn end_pos(&self) -> Pos {
        match self {
            Self::Circle(circle) => circle.pos,
            Self::Slider(slider) => slider.end_pos(),
            Self::Spinner(spinner) => spinner.pos,
        }
    }

    pub fn samples(&self) -> &[HitSampleInfo] {
        match self {
            Self::Circle(circle) => &circle.samples,
            Self::Slider(slider) => &slider.samples,
            Self::Spinner(spinner) => &spinner.samples,
        }
    }

    pub const fn combo(&self) -> &ComboInfo {
        match self {
            Self::Circle(circle) => &circle.combo,
            Self::Slider(slider) => slider.combo(),
            Self::Spinner(spinner) => &spinner.combo,
        }
    }

    pub fn set_combo_index(&mut self, combo_index: i32) {
        match self {
            Self::Circle(circle) => circle.combo.combo_index = combo_index,
            Self::Slider(slider) => slider.set_combo_index(combo_index),
            Self::Spinner(spinner) => spinner.combo.combo_index = combo_index,
        }
    }

    pub fn set_combo_index_with_offsets(&mut self, combo_index_with_offsets: i32) {
        match self {
            Self::Circle(circle) => circle.combo.combo_index_with_offsets = combo_index_with_offsets,
            Self::Slider(slider) => slider.set_combo_index_with_offsets(combo_index_with_offsets),
            Self::Spinner(spinner) => {
                spinner.combo.combo_index_with_offsets = combo_index_with_offsets;
            }
        }
    }

    pub fn set_index_in_current_combo(&mut self, index: i32) {
        match self {
            Self::Circle(circle) => circle.combo.index_in_current_combo = index,
            Self::Slider(slider) => slider.set_index_in_current_combo(index),
            Self::Spinner(spinner) => spinner.combo.index_in_current_combo = index,
        }
    }

    pub fn set_last_in_combo(&mut self, last_in_combo: bool) {
        match self {
            Self::Circle(circle) => circle.combo.last_in_combo = last_in_combo,
            Self::Slider(slider) => slider.set_last_in_combo(last_in_combo),
            Self::Spinner(spinner) => spinner.combo.last_in_combo = last_in_combo,
        }
    }

    pub const fn stack_height(&self) -> i32 {
        match self {
            Self::Circle(circle) => circle.stack_height,
            Self::Slider(slider) => slider.stack_height(),
            Self::Spinner(_) => 0,
        }
    }

    /// Spinners never stack so their stack height is ignored.
    pub fn set_stack_height(&mut self, stack_height: i32) {
        match self {
            Self::Circle(circle) => circle.stack_height = stack_height,
            Self::Slider(slider) => slider.set_stack_height(stack_height),
            Self::Spinner(_) => {}
        }
    }

    pub const fn defaults(&self) -> &OsuDefaults {
        match self {
            Self::Circle(circle) => &circle.defaults,
            Self::Slider(slider) => slider.defaults(),
            Self::Spinner(spinner) => &spinner.defaults,
        }
    }

    pub fn stacked_pos(&self) -> Pos {
        self.pos() + self.defaults().stack_offset(self.stack_height())
    }

    /// Apply difficulty and timing values to the object.
    ///
    /// For sliders this (re-)creates all nested objects.
    pub fn apply_defaults(&mut self, control_points: &ControlPointInfo, difficulty: &DifficultySettings) {
        self.apply_defaults_with_bufs(control_points, difficulty, &mut CurveBuffers::default());
    }

    /// Same as [`OsuObject::apply_defaults`] but re-uses the given buffers
    /// when computing slider curves.
    pub fn apply_defaults_with_bufs(
        &mut self,
        control_points: &ControlPointInfo,
        difficulty: &DifficultySettings,
        bufs: &mut CurveBuffers,
    ) {
        match self {
            Self::Circle(circle) => circle.apply_defaults(difficulty),
            Self::Slider(slider) => slider.apply_defaults_with_bufs(control_points, difficulty, bufs),
            Self::Spinner(spinner) => spinner.apply_defaults(difficulty),
        }
    }

    pub const fn is_circle(&self) -> bool {
        matches!(self, Self::Circle(_))
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self, Self::Slider(_))
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self, Self::Spinner(_))
    }
}

/// Combo related values of an object.
///
/// `new_combo` and `combo_offset` come from the beatmap while the rest is
/// assigned through [`process_combos`](crate::osu::combo::process_combos).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboInfo {
    pub new_combo: bool,
    pub combo_offset: i32,
    pub combo_index: i32,
    pub combo_index_with_offsets: i32,
    pub index_in_current_combo: i32,
    pub last_in_combo: bool,
}

impl From<ComboData> for ComboInfo {
    fn from(combo: ComboData) -> Self {
        Self {
            new_combo: combo.new_combo,
            combo_offset: combo.combo_offset,
            ..Self::default()
        }
    }
}

impl ComboInfo {
    pub const fn indices(&self) -> ComboIndices {
        ComboIndices {
            combo_index: self.combo_index,
            combo_index_with_offsets: self.combo_index_with_offsets,
            index_in_current_combo: self.index_in_current_combo,
        }
    }
}

/// Values that every object, including nested ones, derives from the
/// beatmap's difficulty settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OsuDefaults {
    /// How long before its start time the object appears.
    pub time_preempt: f64,
    pub time_fade_in: f64,
    pub scale: f32,
}

impl OsuDefaults {
    pub const PREEMPT_MIN: f64 = 450.0;
    pub const BASE_FADE_IN: f64 = 400.0;

    const STACK_OFFSET_FACTOR: f32 = -6.4;

    pub fn new(difficulty: &DifficultySettings) -> Self {
        let time_preempt = difficulty.time_preempt();

        Self {
            time_preempt,
            time_fade_in: Self::BASE_FADE_IN * (time_preempt / Self::PREEMPT_MIN).min(1.0),
            scale: difficulty.scale(),
        }
    }

    /// The offset of a stacked object from its original position.
    pub fn stack_offset(&self, stack_height: i32) -> Pos {
        let offset = stack_height as f32 * self.scale * Self::STACK_OFFSET_FACTOR;

        Pos::new(offset, offset)
    }
}

impl Default for OsuDefaults {
    fn default() -> Self {
        Self {
            time_preempt: 600.0,
            time_fade_in: Self::BASE_FADE_IN,
            scale: 1.0,
        }
    }
}

/// A hit circle.
#[derive(Clone, Debug, PartialEq)]
pub struct HitCircle {
    pub pos: Pos,
    pub start_time: f64,
    pub samples: Vec<HitSampleInfo>,
    pub combo: ComboInfo,
    pub stack_height: i32,
    pub defaults: OsuDefaults,
}

impl HitCircle {
    pub fn new(pos: Pos, start_time: f64) -> Self {
        Self {
            pos,
            start_time,
            samples: Vec::new(),
            combo: ComboInfo::default(),
            stack_height: 0,
            defaults: OsuDefaults::default(),
        }
    }

    pub fn apply_defaults(&mut self, difficulty: &DifficultySettings) {
        self.defaults = OsuDefaults::new(difficulty);
    }
}

/// A spinner.
#[derive(Clone, Debug, PartialEq)]
pub struct Spinner {
    pub pos: Pos,
    pub start_time: f64,
    pub end_time: f64,
    pub samples: Vec<HitSampleInfo>,
    pub combo: ComboInfo,
    pub defaults: OsuDefaults,
    /// Only set after defaults have been applied.
    pub spins_required: i32,
}

impl Spinner {
    pub fn new(pos: Pos, start_time: f64, end_time: f64) -> Self {
        Self {
            pos,
            start_time,
            end_time,
            samples: Vec::new(),
            combo: ComboInfo::default(),
            defaults: OsuDefaults::default(),
            spins_required: 1,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn apply_defaults(&mut self, difficulty: &DifficultySettings) {
        self.defaults = OsuDefaults::new(difficulty);

        let spins_per_sec = difficulty_range(f64::from(difficulty.od), 3.0, 5.0, 7.5);
        let spins = (self.duration() / 1000.0 * spins_per_sec) as i32;

        self.spins_required = ((f64::from(spins) * 0.6) as i32).max(1);
    }
}
