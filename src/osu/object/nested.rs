use crate::model::{hit_object::Pos, hit_sample::HitSampleInfo};

use super::OsuDefaults;

/// An object that belongs to a [`Slider`](super::Slider).
#[derive(Clone, Debug, PartialEq)]
pub struct NestedSliderObject {
    pub pos: Pos,
    pub start_time: f64,
    pub samples: Vec<HitSampleInfo>,
    pub stack_height: i32,
    pub defaults: OsuDefaults,
    pub kind: NestedSliderObjectKind,
}

impl NestedSliderObject {
    pub const fn is_head(&self) -> bool {
        matches!(self.kind, NestedSliderObjectKind::Head(_))
    }

    pub const fn is_tail(&self) -> bool {
        matches!(self.kind, NestedSliderObjectKind::Tail(_))
    }

    pub const fn is_tick(&self) -> bool {
        matches!(self.kind, NestedSliderObjectKind::Tick { .. })
    }

    pub const fn is_repeat(&self) -> bool {
        matches!(self.kind, NestedSliderObjectKind::Repeat { .. })
    }

    /// Combo indices for heads and tails, `None` for ticks and repeats.
    pub const fn combo(&self) -> Option<&ComboIndices> {
        match self.kind {
            NestedSliderObjectKind::Head(ref combo) | NestedSliderObjectKind::Tail(ref combo) => {
                Some(combo)
            }
            NestedSliderObjectKind::Tick { .. } | NestedSliderObjectKind::Repeat { .. } => None,
        }
    }

    pub(crate) fn combo_mut(&mut self) -> Option<&mut ComboIndices> {
        match self.kind {
            NestedSliderObjectKind::Head(ref mut combo)
            | NestedSliderObjectKind::Tail(ref mut combo) => Some(combo),
            NestedSliderObjectKind::Tick { .. } | NestedSliderObjectKind::Repeat { .. } => None,
        }
    }

    pub fn stacked_pos(&self) -> Pos {
        self.pos + self.defaults.stack_offset(self.stack_height)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NestedSliderObjectKind {
    Head(ComboIndices),
    Tail(ComboIndices),
    Tick {
        span_idx: usize,
        span_start_time: f64,
    },
    Repeat {
        repeat_idx: usize,
        span_duration: f64,
    },
}

/// The combo indices shared between a slider and its head and tail.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboIndices {
    pub combo_index: i32,
    /// The combo index including all combo offsets up to this point.
    /// Used to pick the combo colour.
    pub combo_index_with_offsets: i32,
    pub index_in_current_combo: i32,
}
