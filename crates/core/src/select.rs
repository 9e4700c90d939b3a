//! Placement heuristics - target column and orientation
//!
//! Both selectors are local, non-lookahead rules over a [`HeightProfile`]:
//!
//! - [`select_column`]: the column with the most free space, biased toward the
//!   center on ties
//! - [`select_rotation`]: lay the pair flat over a neighbour that is at least
//!   as free as the target, otherwise lay it flat anyway if a neighbour exists

use crate::profile::HeightProfile;
use crate::types::Rotation;

/// Pick the target column.
///
/// The column with the largest free-space value wins. Among columns sharing
/// that value, a later column only replaces the current best if it is strictly
/// closer to `width / 2`, so exact distance ties keep the leftmost column.
/// An empty profile yields column 0.
///
/// # Examples
///
/// ```
/// use puyo_ai_core::{select_column, HeightProfile};
///
/// let flat = HeightProfile::from_values(&[13; 6], 13).unwrap();
/// assert_eq!(select_column(&flat), 3);
///
/// let dip = HeightProfile::from_values(&[13, 13, 13, 13, 13, 12], 13).unwrap();
/// assert_eq!(select_column(&dip), 3);
/// ```
pub fn select_column(profile: &HeightProfile) -> usize {
    let center = profile.width() / 2;
    let mut best_col = 0usize;
    let mut best_free: Option<usize> = None;

    for (x, &free) in profile.as_slice().iter().enumerate() {
        match best_free {
            Some(bf) if free < bf => {}
            Some(bf) if free == bf => {
                if x.abs_diff(center) < best_col.abs_diff(center) {
                    best_col = x;
                }
            }
            _ => {
                best_free = Some(free);
                best_col = x;
            }
        }
    }

    best_col
}

/// Pick the orientation for a pair landing on `column`.
///
/// Preference order:
/// 1. right neighbour with free space >= the target's: [`Rotation::HorizontalRight`]
/// 2. left neighbour with free space >= the target's: [`Rotation::HorizontalLeft`]
/// 3. any right neighbour: [`Rotation::HorizontalRight`]
/// 4. any left neighbour: [`Rotation::HorizontalLeft`]
/// 5. single-column board: [`Rotation::Vertical`]
pub fn select_rotation(profile: &HeightProfile, column: usize) -> Rotation {
    let Some(target) = profile.free_space(column) else {
        return Rotation::Vertical;
    };
    let right = column.checked_add(1).and_then(|x| profile.free_space(x));
    let left = column.checked_sub(1).and_then(|x| profile.free_space(x));

    if right.is_some_and(|r| r >= target) {
        return Rotation::HorizontalRight;
    }
    if left.is_some_and(|l| l >= target) {
        return Rotation::HorizontalLeft;
    }

    // Any neighbour at all still gets a flat placement.
    if right.is_some() {
        Rotation::HorizontalRight
    } else if left.is_some() {
        Rotation::HorizontalLeft
    } else {
        Rotation::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(values: &[usize]) -> HeightProfile {
        HeightProfile::from_values(values, 13).expect("valid profile")
    }

    #[test]
    fn column_prefers_most_free_space() {
        assert_eq!(select_column(&profile(&[4, 9, 2, 8, 3, 1])), 1);
        assert_eq!(select_column(&profile(&[0, 0, 0, 0, 0, 13])), 5);
    }

    #[test]
    fn column_tie_breaks_toward_center() {
        // center = 3
        assert_eq!(select_column(&profile(&[13; 6])), 3);
        assert_eq!(select_column(&profile(&[10, 13, 10, 10, 10, 13])), 1);
        assert_eq!(select_column(&profile(&[13, 10, 10, 10, 13, 10])), 4);
    }

    #[test]
    fn column_exact_distance_tie_keeps_leftmost() {
        // width 5, center 2; columns 1 and 3 are both one away.
        assert_eq!(select_column(&profile(&[5, 9, 5, 9, 5])), 1);
        // width 6, center 3; columns 2 and 4 are both one away.
        assert_eq!(select_column(&profile(&[1, 1, 7, 1, 7, 1])), 2);
    }

    #[test]
    fn column_skips_full_column() {
        assert_ne!(select_column(&profile(&[0, 13, 13, 13, 13, 13])), 0);
    }

    #[test]
    fn column_all_full_board_still_in_range() {
        assert_eq!(select_column(&profile(&[0; 6])), 3);
    }

    #[test]
    fn rotation_right_when_right_is_as_free() {
        assert_eq!(
            select_rotation(&profile(&[5, 7, 7, 3, 3, 3]), 1),
            Rotation::HorizontalRight
        );
    }

    #[test]
    fn rotation_left_when_only_left_is_as_free() {
        assert_eq!(
            select_rotation(&profile(&[5, 9, 9, 3, 3, 3]), 2),
            Rotation::HorizontalLeft
        );
    }

    #[test]
    fn rotation_falls_back_to_available_neighbour() {
        // Both neighbours taller: right still wins.
        assert_eq!(
            select_rotation(&profile(&[2, 9, 2, 2, 2, 2]), 1),
            Rotation::HorizontalRight
        );
        // Rightmost column, left neighbour taller.
        assert_eq!(
            select_rotation(&profile(&[2, 2, 2, 2, 2, 9]), 5),
            Rotation::HorizontalLeft
        );
    }

    #[test]
    fn rotation_single_column_is_vertical() {
        assert_eq!(select_rotation(&profile(&[13]), 0), Rotation::Vertical);
    }

    #[test]
    fn rotation_out_of_range_column_is_vertical() {
        assert_eq!(select_rotation(&profile(&[13; 6]), 9), Rotation::Vertical);
    }
}
