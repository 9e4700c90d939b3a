//! Move planner - spawn-to-target column shift as client inputs

use crate::types::MoveToken;

/// Translate a spawn-to-target column shift into client inputs.
///
/// Emits one [`MoveToken::Left`] or [`MoveToken::Right`] per column of
/// distance, then exactly one [`MoveToken::Drop`]. Horizontal footprint of a
/// rotated pair is not compensated for.
///
/// # Examples
///
/// ```
/// use puyo_ai_core::plan_moves;
/// use puyo_ai_types::MoveToken;
///
/// assert_eq!(plan_moves(2, 0), vec![MoveToken::Left, MoveToken::Left, MoveToken::Drop]);
/// assert_eq!(plan_moves(2, 2), vec![MoveToken::Drop]);
/// ```
pub fn plan_moves(spawn: usize, target: usize) -> Vec<MoveToken> {
    let (token, steps) = if target < spawn {
        (MoveToken::Left, spawn - target)
    } else {
        (MoveToken::Right, target - spawn)
    };

    let mut moves = Vec::with_capacity(steps + 1);
    moves.extend(std::iter::repeat(token).take(steps));
    moves.push(MoveToken::Drop);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_right() {
        assert_eq!(
            plan_moves(2, 5),
            vec![
                MoveToken::Right,
                MoveToken::Right,
                MoveToken::Right,
                MoveToken::Drop
            ]
        );
    }

    #[test]
    fn shift_left() {
        assert_eq!(plan_moves(2, 1), vec![MoveToken::Left, MoveToken::Drop]);
    }

    #[test]
    fn no_shift_is_drop_only() {
        assert_eq!(plan_moves(3, 3), vec![MoveToken::Drop]);
    }
}
