//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::Game;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|mv| game.play(mv).ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = game
        .legal_moves()
        .into_iter()
        .filter_map(|mv| game.play(mv).ok().map(|next| (mv, next)))
        .map(|(mv, next)| {
            let nodes = if depth > 1 {
                perft(&next, depth - 1)
            } else {
                1
            };
            (mv.to_string(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbiter_core::Color;

    // Pawn endgame with en passant, promotion, and a king exposed along a rank
    // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w
    const ENDGAME: &str = "\
| | | | | | | | |
| | |p| | | | | |
| | | |p| | | | |
|K|P| | | | | |r|
| |R| | | |p| |k|
| | | | | | | | |
| | | | |P| |P| |
| | | | | | | | |
";

    fn endgame() -> Game {
        Game::from_board(ENDGAME.parse().unwrap(), Color::White).unwrap()
    }

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Game::new(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Game::new(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Game::new(), 3), 8902);
    }

    // Slow without optimizations
    #[test]
    #[ignore]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Game::new(), 4), 197281);
    }

    #[test]
    fn perft_endgame_depth_1() {
        assert_eq!(perft(&endgame(), 1), 14);
    }

    #[test]
    fn perft_endgame_depth_2() {
        assert_eq!(perft(&endgame(), 2), 191);
    }

    #[test]
    fn perft_endgame_depth_3() {
        assert_eq!(perft(&endgame(), 3), 2812);
    }

    #[test]
    #[ignore]
    fn perft_endgame_depth_4() {
        assert_eq!(perft(&endgame(), 4), 43238);
    }

    #[test]
    fn perft_divide_works() {
        let results = perft_divide(&Game::new(), 1);
        assert_eq!(results.len(), 20);
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 20);
        assert!(results.iter().any(|(mv, _)| mv == "g1f3"));
    }
}
