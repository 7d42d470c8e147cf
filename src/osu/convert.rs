use std::{iter::FusedIterator, slice};

use rosu_map::section::hit_objects::CurveBuffers;

use crate::model::{beatmap::Beatmap, hit_object::RawHitObject};

use super::{
    combo::process_combos,
    object::{ComboInfo, HitCircle, OsuObject, Slider, SliderPath, Spinner},
    PLAYFIELD_CENTER,
};

/// Sliders of maps before this version did not consider the speed
/// multiplier for the tick distance.
const TICK_DIST_FIX_VERSION: i32 = 8;

/// Convert a single [`RawHitObject`].
///
/// The first matching capability decides the kind of object:
/// 1. a curve makes it a [`Slider`]
/// 2. an end time makes it a [`Spinner`]
/// 3. anything else is a [`HitCircle`]
///
/// Missing positions default to the origin, or to the playfield's center
/// for spinners. Defaults are **not** applied yet.
pub fn convert_object(h: &RawHitObject, map: &Beatmap) -> OsuObject {
    let combo = h.combo.map_or_else(ComboInfo::default, ComboInfo::from);

    if let Some(ref curve) = h.curve {
        let path = SliderPath::new(curve.path_control_points(), curve.expected_dist);
        let pos = h.pos.unwrap_or_default();

        let tick_dist_multiplier = if map.version < TICK_DIST_FIX_VERSION {
            map.snapshot_at(h.start_time).speed_multiplier.recip()
        } else {
            1.0
        };

        let mut slider = Slider::new(pos, h.start_time, path, curve.repeats);
        slider.samples.clone_from(&h.samples);
        slider.node_samples.clone_from(&curve.node_samples);
        slider.legacy_last_tick_offset = h.legacy_last_tick_offset;
        slider.tick_dist_multiplier = tick_dist_multiplier;

        if let Some(combo) = h.combo {
            slider.set_combo_data(combo);
        }

        OsuObject::Slider(slider)
    } else if let Some(end_time) = h.end_time {
        let pos = h.pos.unwrap_or(PLAYFIELD_CENTER);

        let mut spinner = Spinner::new(pos, h.start_time, end_time);
        spinner.samples.clone_from(&h.samples);
        spinner.combo = combo;

        OsuObject::Spinner(spinner)
    } else {
        let mut circle = HitCircle::new(h.pos.unwrap_or_default(), h.start_time);
        circle.samples.clone_from(&h.samples);
        circle.combo = combo;

        OsuObject::Circle(circle)
    }
}

/// Iterator over converted hitobjects of a [`Beatmap`], see
/// [`Beatmap::convert_objects`].
///
/// Produces exactly one [`OsuObject`] for each [`RawHitObject`] in the same
/// order.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ConvertIter<'a> {
    map: &'a Beatmap,
    hit_objects: slice::Iter<'a, RawHitObject>,
}

impl<'a> ConvertIter<'a> {
    pub fn new(map: &'a Beatmap) -> Self {
        Self {
            map,
            hit_objects: map.hit_objects.iter(),
        }
    }
}

impl Iterator for ConvertIter<'_> {
    type Item = OsuObject;

    fn next(&mut self) -> Option<Self::Item> {
        self.hit_objects
            .next()
            .map(|h| convert_object(h, self.map))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hit_objects.size_hint()
    }
}

impl ExactSizeIterator for ConvertIter<'_> {
    fn len(&self) -> usize {
        self.hit_objects.len()
    }
}

impl FusedIterator for ConvertIter<'_> {}

/// Convert all hitobjects, process combos, and apply defaults.
pub fn convert_beatmap(map: &Beatmap) -> Vec<OsuObject> {
    let mut osu_objects: Vec<_> = map.convert_objects().collect();

    // Combos first so that nested objects pick up their parent's indices
    process_combos(&mut osu_objects);

    let mut curve_bufs = CurveBuffers::default();

    for h in osu_objects.iter_mut() {
        h.apply_defaults_with_bufs(&map.control_points, &map.difficulty, &mut curve_bufs);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        objects = osu_objects.len(),
        sliders = osu_objects.iter().filter(|h| h.is_slider()).count(),
        "converted beatmap"
    );

    osu_objects
}
