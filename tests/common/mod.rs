#![allow(dead_code)]

use rosu_objects::{
    model::{
        beatmap::{Beatmap, DifficultySettings},
        control_point::{DifficultyPoint, TimingPoint},
        hit_object::{CurveData, PathType, Pos},
        hit_sample::HitSampleInfo,
    },
    osu::object::{NestedSliderObject, OsuObject, Slider},
};

/// Straight path from the origin to `(len, 0)`.
pub fn linear_curve(len: f32) -> CurveData {
    CurveData::new(
        vec![Pos::new(0.0, 0.0), Pos::new(len, 0.0)],
        PathType::LINEAR,
        Some(f64::from(len)),
    )
}

pub fn test_map(version: i32, beat_len: f64, speed_multiplier: f64) -> Beatmap {
    let mut map = Beatmap {
        version,
        difficulty: DifficultySettings::new()
            .slider_multiplier(1.4)
            .slider_tick_rate(1.0),
        ..Default::default()
    };

    map.control_points
        .add_timing_point(TimingPoint::new(0.0, beat_len));
    map.control_points
        .add_difficulty_point(DifficultyPoint::new(0.0, speed_multiplier));

    map
}

pub fn normal_sample() -> HitSampleInfo {
    HitSampleInfo::new(HitSampleInfo::HIT_NORMAL, "soft", 70)
}

#[track_caller]
pub fn unwrap_slider(h: &OsuObject) -> &Slider {
    match h {
        OsuObject::Slider(slider) => slider,
        _ => panic!("expected slider, got {h:?}"),
    }
}

pub fn ticks(slider: &Slider) -> Vec<&NestedSliderObject> {
    slider
        .nested_objects()
        .iter()
        .filter(|nested| nested.is_tick())
        .collect()
}

pub fn repeats(slider: &Slider) -> Vec<&NestedSliderObject> {
    slider
        .nested_objects()
        .iter()
        .filter(|nested| nested.is_repeat())
        .collect()
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64, margin: f64) {
    assert!(
        (actual - expected).abs() <= margin,
        "\nCalculated: {actual} | Expected: {expected}\n => {diff} margin ({margin} allowed)",
        diff = (actual - expected).abs(),
    );
}

#[track_caller]
pub fn assert_pos(actual: Pos, expected: Pos) {
    assert!(
        (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
        "Calculated: {actual:?} | Expected: {expected:?}"
    );
}
