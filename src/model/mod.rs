/// Beatmap related types.
pub mod beatmap;

/// Control point related types.
pub mod control_point;

/// Raw hitobject related types.
pub mod hit_object;

/// Hitsample related types.
pub mod hit_sample;
