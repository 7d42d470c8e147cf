use super::object::{ComboIndices, OsuObject};

/// Assign combo indices to all objects based on their new combo flags and
/// combo offsets.
///
/// A new combo starts counting from `0` again and moves the combo index
/// forward by one. The combo offset only affects the colour index i.e.
/// [`ComboIndices::combo_index_with_offsets`] which moves forward by one
/// plus the offset. Sliders pass their indices on to their head and tail.
pub fn process_combos(osu_objects: &mut [OsuObject]) {
    let mut last: Option<ComboIndices> = None;

    for i in 0..osu_objects.len() {
        let combo = *osu_objects[i].combo();

        let indices = match last {
            None => ComboIndices::default(),
            Some(last) if combo.new_combo => {
                osu_objects[i - 1].set_last_in_combo(true);

                ComboIndices {
                    combo_index: last.combo_index + 1,
                    combo_index_with_offsets: last.combo_index_with_offsets
                        + combo.combo_offset
                        + 1,
                    index_in_current_combo: 0,
                }
            }
            Some(last) => ComboIndices {
                index_in_current_combo: last.index_in_current_combo + 1,
                ..last
            },
        };

        let h = &mut osu_objects[i];
        h.set_combo_index(indices.combo_index);
        h.set_combo_index_with_offsets(indices.combo_index_with_offsets);
        h.set_index_in_current_combo(indices.index_in_current_combo);

        last = Some(indices);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::hit_object::Pos,
        osu::object::{ComboInfo, HitCircle},
    };

    use super::*;

    fn circle(new_combo: bool, combo_offset: i32) -> OsuObject {
        let mut circle = HitCircle::new(Pos::default(), 0.0);

        circle.combo = ComboInfo {
            new_combo,
            combo_offset,
            ..Default::default()
        };

        OsuObject::Circle(circle)
    }

    fn indices(osu_objects: &[OsuObject]) -> Vec<(i32, i32, bool)> {
        osu_objects
            .iter()
            .map(OsuObject::combo)
            .map(|c| (c.combo_index, c.index_in_current_combo, c.last_in_combo))
            .collect()
    }

    fn colour_indices(osu_objects: &[OsuObject]) -> Vec<i32> {
        osu_objects
            .iter()
            .map(|h| h.combo().combo_index_with_offsets)
            .collect()
    }

    #[test]
    fn counts_within_combo() {
        let mut osu_objects = vec![
            circle(true, 0),
            circle(false, 0),
            circle(false, 0),
            circle(true, 0),
            circle(false, 0),
        ];

        process_combos(&mut osu_objects);

        assert_eq!(
            indices(&osu_objects),
            [
                (0, 0, false),
                (0, 1, false),
                (0, 2, true),
                (1, 0, false),
                (1, 1, false)
            ]
        );
    }

    #[test]
    fn combo_offset_only_skips_colours() {
        let mut osu_objects = vec![circle(false, 0), circle(true, 2), circle(true, 0)];

        process_combos(&mut osu_objects);

        assert_eq!(
            indices(&osu_objects),
            [(0, 0, true), (1, 0, true), (2, 0, false)]
        );
        assert_eq!(colour_indices(&osu_objects), [0, 3, 4]);
    }

    #[test]
    fn colour_index_follows_combo_without_offsets() {
        let mut osu_objects = vec![
            circle(true, 0),
            circle(false, 5),
            circle(true, 1),
            circle(false, 0),
        ];

        process_combos(&mut osu_objects);

        // Offsets only matter on new combos
        assert_eq!(colour_indices(&osu_objects), [0, 0, 2, 2]);
        assert_eq!(
            indices(&osu_objects),
            [(0, 0, false), (0, 1, true), (1, 0, false), (1, 1, false)]
        );
    }
}
