//! Grammatically correct joining of region phrases.

use access_map_trends_models::RegionKey;

use crate::Vocabulary;

/// Joins an ordered sequence of regions into a single English fragment.
///
/// Grid-cell phrases are introduced with "in the" and repeated with "the";
/// linear-pattern phrases are self-contained and take no article. Exactly
/// two items are joined with a bare "and"; three or more use an Oxford
/// comma before the final "and". Caller order is preserved verbatim.
///
/// The empty sequence returns an empty string; callers substitute their own
/// "no regions" sentence for that case.
#[must_use]
pub fn format_region_list(keys: &[RegionKey], vocabulary: Vocabulary) -> String {
    let mut out = String::new();
    let count = keys.len();

    for (index, key) in keys.iter().enumerate() {
        let label = vocabulary.label(*key);
        let article = if key.is_linear_pattern() { "" } else { "the " };

        if index == 0 {
            if !key.is_linear_pattern() {
                out.push_str("in ");
                out.push_str(article);
            }
        } else if index == count - 1 {
            out.push_str(if count > 2 { ", and " } else { " and " });
            out.push_str(article);
        } else {
            out.push_str(", ");
            out.push_str(article);
        }
        out.push_str(label);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [RegionKey; 9] = [
        RegionKey::Nw,
        RegionKey::N,
        RegionKey::Ne,
        RegionKey::W,
        RegionKey::C,
        RegionKey::E,
        RegionKey::Sw,
        RegionKey::S,
        RegionKey::Se,
    ];

    #[test]
    fn single_grid_cell_screen() {
        assert_eq!(
            format_region_list(&[RegionKey::Nw], Vocabulary::Screen),
            "in the top-left"
        );
    }

    #[test]
    fn single_grid_cell_compass() {
        assert_eq!(
            format_region_list(&[RegionKey::Nw], Vocabulary::Compass),
            "in the Northwest"
        );
    }

    #[test]
    fn two_grid_cells_have_no_comma() {
        assert_eq!(
            format_region_list(&[RegionKey::Nw, RegionKey::Se], Vocabulary::Screen),
            "in the top-left and the bottom-right"
        );
    }

    #[test]
    fn three_grid_cells_use_oxford_comma() {
        assert_eq!(
            format_region_list(
                &[RegionKey::Nw, RegionKey::Se, RegionKey::C],
                Vocabulary::Screen
            ),
            "in the top-left, the bottom-right, and the center"
        );
    }

    #[test]
    fn linear_patterns_take_no_article() {
        assert_eq!(
            format_region_list(
                &[RegionKey::Horizontal, RegionKey::Vertical],
                Vocabulary::Screen
            ),
            "horizontally through the center and vertically through the center"
        );
    }

    #[test]
    fn three_linear_patterns() {
        assert_eq!(
            format_region_list(
                &[
                    RegionKey::LeftDiagonal,
                    RegionKey::Horizontal,
                    RegionKey::Vertical
                ],
                Vocabulary::Screen
            ),
            "diagonally from top-left to bottom-right, horizontally through the center, \
             and vertically through the center"
        );
    }

    #[test]
    fn mixed_list_applies_per_item_articles() {
        assert_eq!(
            format_region_list(&[RegionKey::Nw, RegionKey::Horizontal], Vocabulary::Screen),
            "in the top-left and horizontally through the center"
        );
    }

    #[test]
    fn caller_order_is_preserved() {
        assert_eq!(
            format_region_list(&[RegionKey::Se, RegionKey::Nw], Vocabulary::Screen),
            "in the bottom-right and the top-left"
        );
    }

    #[test]
    fn empty_input_yields_empty_fragment() {
        assert_eq!(format_region_list(&[], Vocabulary::Screen), "");
    }

    // Grid-cell labels never contain the word "and", so counting " and "
    // occurrences in the joined fragment is well-defined.
    #[test]
    fn grid_lists_contain_exactly_one_and() {
        for n in 2..=GRID.len() {
            let formatted = format_region_list(&GRID[..n], Vocabulary::Screen);
            assert_eq!(
                formatted.matches(" and ").count(),
                1,
                "n={n}: {formatted}"
            );
            if n >= 3 {
                assert!(formatted.contains(", and the "), "n={n}: {formatted}");
            } else {
                assert!(!formatted.contains(", and"), "n={n}: {formatted}");
            }
        }
    }

    #[test]
    fn grid_lists_contain_every_label() {
        for n in 1..=GRID.len() {
            let formatted = format_region_list(&GRID[..n], Vocabulary::Screen);
            for key in &GRID[..n] {
                assert!(
                    formatted.contains(Vocabulary::Screen.label(*key)),
                    "n={n}: {formatted}"
                );
            }
        }
    }
}
