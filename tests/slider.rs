use rosu_objects::{
    model::{
        control_point::TimingPoint,
        hit_object::{PathControlPoint, PathType, Pos, RawHitObject},
        hit_sample::HitSampleInfo,
    },
    osu::object::NestedSliderObjectKind,
};

use self::common::*;

mod common;

const SPAN_DURATION: f64 = 300.0 / 0.28;

#[test]
fn two_spans_with_ticks_and_repeat() {
    let mut map = test_map(14, 500.0, 1.0);

    map.hit_objects.push(
        RawHitObject::new(1000.0)
            .pos(Pos::new(100.0, 50.0))
            .samples(vec![normal_sample()])
            .curve(linear_curve(300.0).repeats(1)),
    );

    let osu_objects = map.convert();
    let slider = unwrap_slider(&osu_objects[0]);

    assert_close(slider.velocity(), 0.28, 1e-12);
    assert_close(slider.tick_dist(), 140.0, 1e-9);
    assert_close(slider.span_duration(), SPAN_DURATION, 1e-6);
    assert_close(slider.end_time(), 1000.0 + 2.0 * SPAN_DURATION, 1e-6);

    let nested = slider.nested_objects();
    assert_eq!(nested.len(), 7);

    assert!(nested[0].is_head());
    assert!(nested[1].is_tail());
    assert!(nested[2..6].iter().all(|n| n.is_tick()));
    assert!(nested[6].is_repeat());

    let head = &nested[0];
    assert_close(head.start_time, 1000.0, 0.0);
    assert_pos(head.pos, Pos::new(100.0, 50.0));
    assert_eq!(head.samples, [normal_sample()]);

    // Two spans end where the slider started
    let tail = &nested[1];
    assert_close(tail.start_time, slider.end_time(), 0.0);
    assert_pos(tail.pos, Pos::new(100.0, 50.0));
    assert!(tail.samples.is_empty());

    let expected_ticks = [
        (0, 1000.0 + SPAN_DURATION * 140.0 / 300.0, 240.0),
        (0, 1000.0 + SPAN_DURATION * 280.0 / 300.0, 380.0),
        (1, 1000.0 + SPAN_DURATION * (2.0 - 280.0 / 300.0), 380.0),
        (1, 1000.0 + SPAN_DURATION * (2.0 - 140.0 / 300.0), 240.0),
    ];

    for (tick, (span, time, x)) in nested[2..6].iter().zip(expected_ticks) {
        let NestedSliderObjectKind::Tick {
            span_idx,
            span_start_time,
        } = tick.kind
        else {
            unreachable!()
        };

        assert_eq!(span_idx, span);
        assert_close(span_start_time, 1000.0 + span as f64 * SPAN_DURATION, 1e-6);
        assert_close(tick.start_time, time, 1e-6);
        assert_pos(tick.pos, Pos::new(x, 50.0));
        assert_eq!(
            tick.samples,
            [HitSampleInfo::new(HitSampleInfo::SLIDER_TICK, "soft", 70)]
        );
    }

    let repeat = &nested[6];
    assert!(matches!(
        repeat.kind,
        NestedSliderObjectKind::Repeat { repeat_idx: 0, span_duration } if (span_duration - SPAN_DURATION).abs() < 1e-6
    ));
    assert_close(repeat.start_time, 1000.0 + SPAN_DURATION, 1e-6);
    assert_pos(repeat.pos, Pos::new(400.0, 50.0));
    assert_eq!(repeat.samples, [normal_sample()]);
}

#[test]
fn no_repeats_means_no_repeat_points() {
    let mut map = test_map(14, 500.0, 1.0);
    map.hit_objects
        .push(RawHitObject::new(0.0).curve(linear_curve(300.0)));

    let osu_objects = map.convert();
    let slider = unwrap_slider(&osu_objects[0]);

    assert!(repeats(slider).is_empty());
    assert_eq!(ticks(slider).len(), 2);
    assert_eq!(slider.nested_objects().len(), 4);

    // A single span ends at the end of the path
    assert_pos(slider.tail().unwrap().pos, Pos::new(300.0, 0.0));
}

#[test]
fn infinite_tick_rate_generates_no_ticks() {
    let mut map = test_map(14, 500.0, 1.0);
    map.difficulty = map.difficulty.slider_tick_rate(f64::INFINITY);
    map.hit_objects
        .push(RawHitObject::new(0.0).curve(linear_curve(300.0).repeats(2)));

    let osu_objects = map.convert();
    let slider = unwrap_slider(&osu_objects[0]);

    assert_close(slider.tick_dist(), 0.0, 0.0);
    assert!(ticks(slider).is_empty());
    assert_eq!(repeats(slider).len(), 2);
}

#[test]
fn empty_control_points_generate_no_ticks() {
    let mut map = test_map(14, 500.0, 1.0);

    let mut curve = linear_curve(300.0).repeats(1);
    curve.control_points.clear();
    map.hit_objects.push(RawHitObject::new(0.0).curve(curve));

    let osu_objects = map.convert();
    let slider = unwrap_slider(&osu_objects[0]);

    assert!(ticks(slider).is_empty());
    assert_close(slider.end_time(), 0.0, 0.0);
    assert_eq!(slider.nested_objects().len(), 3);
}

#[test]
fn legacy_last_tick_offset() {
    fn tail_time(offset: Option<f64>) -> (f64, f64) {
        let mut map = test_map(14, 500.0, 1.0);
        let mut h = RawHitObject::new(1000.0).curve(linear_curve(300.0).repeats(1));
        h.legacy_last_tick_offset = offset;
        map.hit_objects.push(h);

        let osu_objects = map.convert();
        let slider = unwrap_slider(&osu_objects[0]);

        (slider.tail().unwrap().start_time, slider.end_time())
    }

    let (unset, end_time) = tail_time(None);
    assert_close(unset, end_time, 0.0);

    let (zero, end_time) = tail_time(Some(0.0));
    assert_close(zero, end_time, 0.0);

    let (small, end_time) = tail_time(Some(36.0));
    assert_close(small, end_time - 36.0, 1e-9);

    // Never before the middle of the slider
    let (huge, _) = tail_time(Some(1e6));
    assert_close(huge, 1000.0 + SPAN_DURATION, 1e-6);
}

#[test]
fn old_format_keeps_tick_distance() {
    let convert = |version: i32, speed_multiplier: f64| {
        let mut map = test_map(version, 500.0, speed_multiplier);
        map.hit_objects
            .push(RawHitObject::new(0.0).curve(linear_curve(300.0)));

        map.convert().remove(0)
    };

    let old = convert(7, 2.0);
    let new = convert(8, 1.0);
    let old = unwrap_slider(&old);
    let new = unwrap_slider(&new);

    assert_close(old.tick_dist(), new.tick_dist(), 1e-9);
    assert_close(old.velocity(), 2.0 * new.velocity(), 1e-12);

    // From version 8 onwards the speed multiplier affects ticks
    let newer = convert(8, 2.0);
    assert_close(unwrap_slider(&newer).tick_dist(), 280.0, 1e-9);
}

#[test]
fn timing_is_queried_at_start_time_only() {
    let mut map = test_map(14, 500.0, 1.0);

    // Changes mid-slider must not affect it
    map.control_points
        .add_timing_point(TimingPoint::new(1500.0, 100.0));
    map.hit_objects
        .push(RawHitObject::new(1000.0).curve(linear_curve(300.0)));

    let osu_objects = map.convert();
    let slider = unwrap_slider(&osu_objects[0]);

    assert_close(slider.velocity(), 0.28, 1e-12);
}

#[test]
fn apply_defaults_is_idempotent() {
    let mut map = test_map(14, 500.0, 1.0);
    map.hit_objects
        .push(RawHitObject::new(0.0).curve(linear_curve(300.0).repeats(3)));

    let mut osu_objects = map.convert();
    let before = osu_objects[0].clone();

    osu_objects[0].apply_defaults(&map.control_points, &map.difficulty);

    assert_eq!(osu_objects[0], before);
}

#[test]
fn position_change_moves_head_and_tail_only() {
    let mut map = test_map(14, 500.0, 1.0);
    map.hit_objects.push(
        RawHitObject::new(0.0)
            .pos(Pos::new(100.0, 50.0))
            .curve(linear_curve(300.0)),
    );

    let mut osu_objects = map.convert();
    let rosu_objects::OsuObject::Slider(ref mut slider) = osu_objects[0] else {
        unreachable!()
    };

    slider.set_pos(Pos::new(10.0, 10.0));

    assert_pos(slider.head().unwrap().pos, Pos::new(10.0, 10.0));
    assert_pos(slider.tail().unwrap().pos, Pos::new(310.0, 10.0));

    // Ticks keep their old positions until defaults are applied again
    let tick_pos: Vec<_> = ticks(slider).iter().map(|tick| tick.pos).collect();
    assert_pos(tick_pos[0], Pos::new(240.0, 50.0));
    assert_pos(tick_pos[1], Pos::new(380.0, 50.0));

    slider.apply_defaults(&map.control_points, &map.difficulty);

    let tick_pos: Vec<_> = ticks(slider).iter().map(|tick| tick.pos).collect();
    assert_pos(tick_pos[0], Pos::new(150.0, 10.0));
    assert_pos(tick_pos[1], Pos::new(290.0, 10.0));
}

#[test]
fn control_point_change_moves_tail() {
    let mut map = test_map(14, 500.0, 1.0);
    map.hit_objects.push(
        RawHitObject::new(0.0)
            .pos(Pos::new(100.0, 50.0))
            .curve(linear_curve(300.0)),
    );

    let mut osu_objects = map.convert();
    let rosu_objects::OsuObject::Slider(ref mut slider) = osu_objects[0] else {
        unreachable!()
    };

    let same = slider.path().control_points().to_vec().into_boxed_slice();
    assert!(!slider.set_control_points(same));
    assert_eq!(slider.path_version(), 0);

    let vertical = vec![
        PathControlPoint {
            pos: Pos::new(0.0, 0.0),
            path_type: Some(PathType::LINEAR),
        },
        PathControlPoint {
            pos: Pos::new(0.0, 300.0),
            path_type: None,
        },
    ];

    assert!(slider.set_control_points(vertical.into_boxed_slice()));
    assert_eq!(slider.path_version(), 1);
    assert_pos(slider.tail().unwrap().pos, Pos::new(100.0, 350.0));
    assert_pos(slider.head().unwrap().pos, Pos::new(100.0, 50.0));

    // Ticks are still on the horizontal path
    assert_pos(ticks(slider)[0].pos, Pos::new(240.0, 50.0));
}

#[test]
fn stack_height_cascades_to_all_nested() {
    let mut map = test_map(14, 500.0, 1.0);
    map.hit_objects
        .push(RawHitObject::new(0.0).curve(linear_curve(300.0).repeats(2)));

    let mut osu_objects = map.convert();
    osu_objects[0].set_stack_height(3);

    let slider = unwrap_slider(&osu_objects[0]);

    assert!(slider
        .nested_objects()
        .iter()
        .all(|nested| nested.stack_height == 3));

    let offset = slider.defaults().stack_offset(3);
    assert_pos(slider.stacked_pos(), offset);
}
