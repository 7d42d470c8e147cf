use crate::model::hit_object::Pos;

/// Assigning combo indices.
pub mod combo;

/// Turning raw hitobjects into [`OsuObject`](object::OsuObject)s.
pub mod convert;

/// osu!standard hitobjects.
pub mod object;

/// The size of the playfield in osu!pixels.
pub const PLAYFIELD_BASE_SIZE: Pos = Pos { x: 512.0, y: 384.0 };

/// Where spinners are placed if they have no position.
pub const PLAYFIELD_CENTER: Pos = Pos {
    x: PLAYFIELD_BASE_SIZE.x / 2.0,
    y: PLAYFIELD_BASE_SIZE.y / 2.0,
};
