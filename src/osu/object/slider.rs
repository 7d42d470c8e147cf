use rosu_map::section::hit_objects::{CurveBuffers, PathControlPoint};

use crate::model::{
    beatmap::DifficultySettings,
    control_point::{ControlPointInfo, TimingSnapshot},
    hit_object::{ComboData, Pos},
    hit_sample::HitSampleInfo,
};

use super::{
    nested::{NestedSliderObject, NestedSliderObjectKind},
    path::{PathGeometry, SliderPath},
    ComboInfo, OsuDefaults,
};

/// A slider.
///
/// Creating a slider only stores its raw values. Velocity, tick distance,
/// end time, and nested objects are computed through
/// [`Slider::apply_defaults`] which should be called again whenever the
/// control points, difficulty settings, or the slider's path change.
///
/// Setters keep the head and tail up to date but do **not** move ticks and
/// repeat points; those keep their positions until defaults are re-applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub start_time: f64,
    pub samples: Vec<HitSampleInfo>,
    /// Samples for each node i.e. the head, every repeat, and the tail.
    pub node_samples: Vec<Vec<HitSampleInfo>>,
    pub repeats: usize,
    /// Time in milliseconds by which the tail is moved forward.
    pub legacy_last_tick_offset: Option<f64>,
    pub tick_dist_multiplier: f64,
    pos: Pos,
    path: SliderPath,
    path_version: u32,
    combo: ComboInfo,
    stack_height: i32,
    defaults: OsuDefaults,
    velocity: f64,
    tick_dist: f64,
    end_time: f64,
    nested_objects: Vec<NestedSliderObject>,
}

impl Slider {
    pub const BASE_SCORING_DIST: f64 = 100.0;

    /// Multiplied with the velocity to get the minimum distance between the
    /// last tick of a span and the span's end.
    const MIN_DIST_FROM_END_FACTOR: f64 = 0.01;

    pub fn new(pos: Pos, start_time: f64, path: SliderPath, repeats: usize) -> Self {
        Self {
            start_time,
            samples: Vec::new(),
            node_samples: Vec::new(),
            repeats,
            legacy_last_tick_offset: None,
            tick_dist_multiplier: 1.0,
            pos,
            path,
            path_version: 0,
            combo: ComboInfo::default(),
            stack_height: 0,
            defaults: OsuDefaults::default(),
            velocity: 0.0,
            tick_dist: 0.0,
            end_time: start_time,
            nested_objects: Vec::new(),
        }
    }

    pub const fn pos(&self) -> Pos {
        self.pos
    }

    pub const fn path(&self) -> &SliderPath {
        &self.path
    }

    /// Incremented whenever [`Slider::set_control_points`] changes the path.
    pub const fn path_version(&self) -> u32 {
        self.path_version
    }

    pub const fn combo(&self) -> &ComboInfo {
        &self.combo
    }

    pub const fn stack_height(&self) -> i32 {
        self.stack_height
    }

    pub const fn defaults(&self) -> &OsuDefaults {
        &self.defaults
    }

    /// Distance travelled per millisecond. `0` until defaults are applied.
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Distance between two ticks. `0` until defaults are applied.
    pub const fn tick_dist(&self) -> f64 {
        self.tick_dist
    }

    /// Equals the start time until defaults are applied.
    pub const fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    pub fn span_duration(&self) -> f64 {
        self.duration() / self.span_count() as f64
    }

    /// Head, tail, ticks, and repeat points in that order.
    pub fn nested_objects(&self) -> &[NestedSliderObject] {
        &self.nested_objects
    }

    pub fn head(&self) -> Option<&NestedSliderObject> {
        self.nested_objects.iter().find(|nested| nested.is_head())
    }

    pub fn tail(&self) -> Option<&NestedSliderObject> {
        self.nested_objects.iter().find(|nested| nested.is_tail())
    }

    fn head_mut(&mut self) -> Option<&mut NestedSliderObject> {
        self.nested_objects.iter_mut().find(|nested| nested.is_head())
    }

    fn tail_mut(&mut self) -> Option<&mut NestedSliderObject> {
        self.nested_objects.iter_mut().find(|nested| nested.is_tail())
    }

    /// The index of the span at the given progress of the whole slider.
    pub fn span_at(&self, progress: f64) -> usize {
        (progress * self.span_count() as f64) as usize
    }

    /// Turns the progress of the whole slider into progress along the path,
    /// accounting for reversed spans.
    pub fn progress_at(&self, progress: f64) -> f64 {
        let p = progress * self.span_count() as f64 % 1.0;

        if self.span_at(progress) % 2 == 1 {
            1.0 - p
        } else {
            p
        }
    }

    /// The position relative to the slider's position at the given progress
    /// of the whole slider.
    pub fn curve_position_at(&self, progress: f64, bufs: &mut CurveBuffers) -> Pos {
        self.path.curve(bufs).position_at(self.progress_at(progress))
    }

    /// The absolute position at the given progress of the whole slider.
    pub fn position_at(&self, progress: f64, bufs: &mut CurveBuffers) -> Pos {
        self.pos + self.curve_position_at(progress, bufs)
    }

    /// The position at which the slider ends.
    ///
    /// With an even amount of spans this is the start of the path.
    pub fn end_pos(&self) -> Pos {
        let path_end = if self.span_count() % 2 == 0 {
            self.path.start_pos()
        } else {
            self.path.end_pos()
        };

        self.pos + path_end
    }

    pub fn stacked_pos(&self) -> Pos {
        self.pos + self.defaults.stack_offset(self.stack_height)
    }

    pub fn stacked_end_pos(&self) -> Pos {
        self.end_pos() + self.defaults.stack_offset(self.stack_height)
    }

    /// Move the slider while keeping head and tail in place relative to it.
    pub fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;

        if let Some(head) = self.head_mut() {
            head.pos = pos;
        }

        let end_pos = self.end_pos();

        if let Some(tail) = self.tail_mut() {
            tail.pos = end_pos;
        }
    }

    /// Replace the control points of the path.
    ///
    /// Returns `false` if the points are the same as the current ones in
    /// which case nothing changes. Otherwise the path version is bumped and
    /// the tail moved to the new end position.
    pub fn set_control_points(&mut self, control_points: Box<[PathControlPoint]>) -> bool {
        if *control_points == *self.path.control_points() {
            return false;
        }

        self.path = SliderPath::new(control_points, self.path.expected_dist());
        self.path_version = self.path_version.wrapping_add(1);

        let end_pos = self.end_pos();

        if let Some(tail) = self.tail_mut() {
            tail.pos = end_pos;
        }

        true
    }

    pub fn set_combo_data(&mut self, combo: ComboData) {
        self.combo.new_combo = combo.new_combo;
        self.combo.combo_offset = combo.combo_offset;
    }

    pub fn set_combo_index(&mut self, combo_index: i32) {
        self.combo.combo_index = combo_index;

        for combo in self.nested_objects.iter_mut().filter_map(NestedSliderObject::combo_mut) {
            combo.combo_index = combo_index;
        }
    }

    /// Set the colour index; cascades to head and tail like
    /// [`Slider::set_combo_index`].
    pub fn set_combo_index_with_offsets(&mut self, combo_index_with_offsets: i32) {
        self.combo.combo_index_with_offsets = combo_index_with_offsets;

        for combo in self.nested_objects.iter_mut().filter_map(NestedSliderObject::combo_mut) {
            combo.combo_index_with_offsets = combo_index_with_offsets;
        }
    }

    pub fn set_index_in_current_combo(&mut self, index: i32) {
        self.combo.index_in_current_combo = index;

        for combo in self.nested_objects.iter_mut().filter_map(NestedSliderObject::combo_mut) {
            combo.index_in_current_combo = index;
        }
    }

    pub fn set_last_in_combo(&mut self, last_in_combo: bool) {
        self.combo.last_in_combo = last_in_combo;
    }

    pub fn set_stack_height(&mut self, stack_height: i32) {
        self.stack_height = stack_height;

        for nested in self.nested_objects.iter_mut() {
            nested.stack_height = stack_height;
        }
    }

    /// Compute velocity, tick distance, and end time, and create all nested
    /// objects anew.
    ///
    /// Calling this again with the same arguments yields the same result.
    pub fn apply_defaults(&mut self, control_points: &ControlPointInfo, difficulty: &DifficultySettings) {
        self.apply_defaults_with_bufs(control_points, difficulty, &mut CurveBuffers::default());
    }

    /// Same as [`Slider::apply_defaults`] but re-uses the given buffers.
    pub fn apply_defaults_with_bufs(
        &mut self,
        control_points: &ControlPointInfo,
        difficulty: &DifficultySettings,
        bufs: &mut CurveBuffers,
    ) {
        let timing = control_points.snapshot_at(self.start_time);
        let curve = self.path.curve(bufs);

        self.apply_defaults_with_path(timing, difficulty, &curve);
    }

    /// Apply defaults based on an arbitrary path geometry instead of the
    /// slider's own path.
    pub fn apply_defaults_with_path<P: PathGeometry>(
        &mut self,
        timing: TimingSnapshot,
        difficulty: &DifficultySettings,
        path: &P,
    ) {
        let scoring_dist =
            Self::BASE_SCORING_DIST * difficulty.slider_multiplier * timing.speed_multiplier;

        self.velocity = scoring_dist / timing.beat_len;
        self.tick_dist = scoring_dist / difficulty.slider_tick_rate * self.tick_dist_multiplier;
        self.end_time = self.start_time + self.span_count() as f64 * path.dist() / self.velocity;
        self.defaults = OsuDefaults::new(difficulty);

        #[cfg(feature = "tracing")]
        if !(self.velocity.is_finite() && self.tick_dist.is_finite()) {
            tracing::warn!(
                start_time = self.start_time,
                beat_len = timing.beat_len,
                slider_tick_rate = difficulty.slider_tick_rate,
                "slider has non-finite velocity or tick distance"
            );
        }

        let mut nested_objects = Vec::with_capacity(self.nested_objects.len());
        self.create_slider_ends(path, &mut nested_objects);
        self.create_ticks(path, &mut nested_objects);
        self.create_repeats(path, &mut nested_objects);

        self.nested_objects = nested_objects;
    }

    fn node_samples(&self, node_idx: usize) -> &[HitSampleInfo] {
        self.node_samples
            .get(node_idx)
            .map_or(self.samples.as_slice(), Vec::as_slice)
    }

    fn nested(&self, pos: Pos, start_time: f64, kind: NestedSliderObjectKind) -> NestedSliderObject {
        NestedSliderObject {
            pos,
            start_time,
            samples: Vec::new(),
            stack_height: self.stack_height,
            defaults: self.defaults,
            kind,
        }
    }

    fn create_slider_ends<P: PathGeometry>(&self, path: &P, nested_objects: &mut Vec<NestedSliderObject>) {
        let combo = self.combo.indices();

        let mut head = self.nested(self.pos, self.start_time, NestedSliderObjectKind::Head(combo));
        head.samples = self.node_samples(0).to_vec();
        nested_objects.push(head);

        let tail_time = match self.legacy_last_tick_offset {
            Some(offset) => {
                let min = self.start_time + self.duration() / 2.0;

                (self.end_time - offset).max(min)
            }
            None => self.end_time,
        };

        let tail_pos = self.pos + path.position_at(self.progress_at(1.0));
        nested_objects.push(self.nested(tail_pos, tail_time, NestedSliderObjectKind::Tail(combo)));
    }

    fn tick_samples(&self) -> Vec<HitSampleInfo> {
        self.samples
            .iter()
            .find(|sample| sample.is_hit_normal())
            .or_else(|| self.samples.first())
            .map(|sample| sample.with_name(HitSampleInfo::SLIDER_TICK))
            .into_iter()
            .collect()
    }

    fn create_ticks<P: PathGeometry>(&self, path: &P, nested_objects: &mut Vec<NestedSliderObject>) {
        let length = path.dist();

        // `max` before `min` so that NaN values end up as `0`
        let tick_dist = self.tick_dist.max(0.0).min(length);

        if tick_dist <= 0.0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(start_time = self.start_time, length, "no ticks for slider");

            return;
        }

        let min_dist_from_end = self.velocity * Self::MIN_DIST_FROM_END_FACTOR;
        let span_duration = self.span_duration();
        let tick_samples = self.tick_samples();

        for span_idx in 0..self.span_count() {
            let span_start_time = self.start_time + span_idx as f64 * span_duration;
            let reversed = span_idx % 2 == 1;
            let span_start_idx = nested_objects.len();

            let mut d = tick_dist;

            while d <= length {
                if d > length - min_dist_from_end {
                    break;
                }

                let dist_progress = d / length;

                let time_progress = if reversed {
                    1.0 - dist_progress
                } else {
                    dist_progress
                };

                let kind = NestedSliderObjectKind::Tick {
                    span_idx,
                    span_start_time,
                };

                let start_time = span_start_time + time_progress * span_duration;
                let mut tick = self.nested(self.pos + path.position_at(dist_progress), start_time, kind);
                tick.samples.clone_from(&tick_samples);

                let offset = if span_idx > 0 {
                    200.0
                } else {
                    tick.defaults.time_fade_in * 0.66
                };

                tick.defaults.time_preempt = (start_time - span_start_time) / 2.0 + offset;
                nested_objects.push(tick);

                let next = d + tick_dist;

                // Float absorption on pathologically small tick distances
                if next <= d {
                    break;
                }

                d = next;
            }

            // Ticks of reversed spans were created back to front
            if reversed {
                nested_objects[span_start_idx..].reverse();
            }
        }
    }

    fn create_repeats<P: PathGeometry>(&self, path: &P, nested_objects: &mut Vec<NestedSliderObject>) {
        let span_duration = self.span_duration();

        for repeat_idx in 0..self.repeats {
            let repeat = repeat_idx + 1;
            let start_time = self.start_time + repeat as f64 * span_duration;
            let pos = self.pos + path.position_at((repeat % 2) as f64);

            let kind = NestedSliderObjectKind::Repeat {
                repeat_idx,
                span_duration,
            };

            let mut repeat_point = self.nested(pos, start_time, kind);
            repeat_point.samples = self.node_samples(repeat).to_vec();

            if repeat_idx > 0 {
                repeat_point.defaults.time_preempt =
                    repeat_point.defaults.time_preempt.min(span_duration * 2.0);
            }

            nested_objects.push(repeat_point);
        }
    }
}
