//! End-to-end rules tests driven through the public game interface.

use arbiter_core::{Color, Move, PieceType, Position};
use arbiter_engine::{Board, Game, GameStatus, MoveError};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn pos(row: u8, column: u8) -> Position {
    Position::new(row, column).unwrap()
}

fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::normal(pos(from.0, from.1), pos(to.0, to.1))
}

fn play_all(game: &mut Game, moves: &[Move]) {
    for &m in moves {
        game.make_move(m)
            .unwrap_or_else(|err| panic!("{} rejected: {}", m, err));
    }
}

/// Asserts the per-color indices equal a full board scan.
fn assert_index_matches_board(game: &Game) {
    for color in Color::ALL {
        let mut indexed = game.piece_positions(color).to_vec();
        indexed.sort();
        assert_eq!(indexed, game.board().positions_of(color), "{} index", color);
    }
}

#[test]
fn fools_mate() {
    init_tracing();
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            mv((2, 6), (3, 6)),
            mv((7, 5), (5, 5)),
            mv((2, 7), (4, 7)),
            mv((8, 4), (4, 8)),
        ],
    );
    assert_eq!(game.team_turn(), Color::White);
    assert!(game.is_in_check(Color::White));
    assert!(game.is_in_checkmate(Color::White));
    assert!(!game.is_in_stalemate(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
    assert_eq!(game.status().winner(), Some(Color::Black));
    assert!(game.legal_moves().is_empty());
    assert_index_matches_board(&game);
}

#[test]
fn black_cannot_move_first() {
    init_tracing();
    let mut game = Game::new();
    for m in game.legal_moves_for(Color::Black) {
        assert_eq!(
            game.make_move(m),
            Err(MoveError::WrongTurn {
                turn: Color::White,
                piece: Color::Black
            })
        );
    }
    assert_eq!(game, Game::new());
}

/// White double-steps e2-e4 beside a Black pawn on d4.
fn en_passant_setup() -> Game {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            mv((2, 1), (3, 1)),
            mv((7, 4), (5, 4)),
            mv((3, 1), (4, 1)),
            mv((5, 4), (4, 4)),
            mv((2, 5), (4, 5)),
        ],
    );
    game
}

#[test]
fn en_passant_on_the_immediately_following_move() {
    init_tracing();
    let mut game = en_passant_setup();
    assert_eq!(game.en_passant_target(), Some(pos(4, 5)));

    let capture = mv((4, 4), (3, 5));
    assert!(game.valid_moves(pos(4, 4)).unwrap().contains(&capture));
    game.make_move(capture).unwrap();

    assert_eq!(game.board().get(pos(4, 5)), None);
    assert_eq!(
        game.board().get(pos(3, 5)).map(|p| (p.color, p.piece_type)),
        Some((Color::Black, PieceType::Pawn))
    );
    assert_eq!(game.piece_positions(Color::White).len(), 15);
    assert_index_matches_board(&game);
}

#[test]
fn en_passant_expires_after_an_intervening_move() {
    init_tracing();
    let mut game = en_passant_setup();
    play_all(&mut game, &[mv((7, 8), (6, 8)), mv((2, 8), (3, 8))]);

    assert_eq!(game.en_passant_target(), None);
    let capture = mv((4, 4), (3, 5));
    assert!(!game.valid_moves(pos(4, 4)).unwrap().contains(&capture));
    assert_eq!(game.make_move(capture), Err(MoveError::NotInMoveSet(capture)));
}

#[test]
fn promotion_offers_exactly_four_moves() {
    init_tracing();
    let board: Board = "\
| | | | |k| | | |
| | |P| | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | |K| | | |
"
    .parse()
    .unwrap();
    let mut game = Game::from_board(board, Color::White).unwrap();

    let moves = game.valid_moves(pos(7, 3)).unwrap();
    assert_eq!(moves.len(), 4);
    let mut promotions: Vec<PieceType> = moves.iter().filter_map(|m| m.promotion).collect();
    promotions.sort_by_key(|p| p.index());
    assert_eq!(promotions, PieceType::PROMOTIONS.to_vec());

    game.make_move(Move::promoting(pos(7, 3), pos(8, 3), PieceType::Queen))
        .unwrap();
    assert_eq!(game.status(), GameStatus::Check(Color::Black));
}

#[test]
fn moves_cross_the_wire() {
    let mut game = Game::new();
    let json = r#"{"start":[2,4],"end":[4,4]}"#;
    let m: Move = serde_json::from_str(json).unwrap();
    game.make_move(m).unwrap();

    let board_json = serde_json::to_string(game.board()).unwrap();
    let board: Board = serde_json::from_str(&board_json).unwrap();
    assert_eq!(&board, game.board());
}

/// Plays up to `choices.len()` moves, each picked from the legal moves by
/// the next choice, and calls `check` on every position reached.
fn random_playout(choices: &[usize], mut check: impl FnMut(&Game)) {
    let mut game = Game::new();
    check(&game);
    for &choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        game.make_move(moves[choice % moves.len()]).unwrap();
        check(&game);
    }
}

fn arb_move() -> impl Strategy<Value = Move> {
    let coord = 1..=8u8;
    (
        coord.clone(),
        coord.clone(),
        coord.clone(),
        coord,
        prop::option::of(prop::sample::select(PieceType::ALL.to_vec())),
    )
        .prop_map(|(r1, c1, r2, c2, promotion)| Move::new(pos(r1, c1), pos(r2, c2), promotion))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn index_always_matches_board(choices in prop::collection::vec(any::<usize>(), 0..60)) {
        random_playout(&choices, assert_index_matches_board);
    }

    #[test]
    fn legal_moves_never_leave_king_attacked(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        random_playout(&choices, |game| {
            let mover = game.team_turn();
            for m in game.legal_moves() {
                let mut next = game.clone();
                next.make_move(m).unwrap();
                assert!(!next.is_in_check(mover), "{} leaves {} in check", m, mover);
            }
        });
    }

    #[test]
    fn terminal_states_are_consistent(choices in prop::collection::vec(any::<usize>(), 0..80)) {
        random_playout(&choices, |game| {
            for color in Color::ALL {
                let mate = game.is_in_checkmate(color);
                let stale = game.is_in_stalemate(color);
                assert!(!(mate && stale));
                if mate {
                    assert!(game.is_in_check(color));
                    assert!(game.legal_moves_for(color).is_empty());
                }
                if stale {
                    assert!(!game.is_in_check(color));
                    assert!(game.legal_moves_for(color).is_empty());
                }
            }
        });
    }

    #[test]
    fn rejected_moves_change_nothing(
        choices in prop::collection::vec(any::<usize>(), 0..30),
        attempts in prop::collection::vec(arb_move(), 1..20),
    ) {
        let mut game = Game::new();
        for &choice in &choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            game.make_move(moves[choice % moves.len()]).unwrap();
        }

        let legal = game.legal_moves();
        for attempt in attempts {
            let before = game.clone();
            match game.make_move(attempt) {
                Ok(()) => {
                    prop_assert!(legal.contains(&attempt));
                    game = before;
                }
                Err(_) => {
                    prop_assert!(!legal.contains(&attempt));
                    prop_assert_eq!(game.board(), before.board());
                    prop_assert_eq!(game.team_turn(), before.team_turn());
                    prop_assert_eq!(&game, &before);
                }
            }
        }
    }

    #[test]
    fn pseudo_legal_but_illegal_moves_are_rejected_for_king_safety(
        choices in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let mut game = Game::new();
        for &choice in &choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            game.make_move(moves[choice % moves.len()]).unwrap();
        }

        let legal = game.legal_moves();
        for m in game.pseudo_legal_moves_for(game.team_turn()) {
            if legal.contains(&m) {
                continue;
            }
            let mut next = game.clone();
            let err = next.make_move(m).unwrap_err();
            prop_assert!(matches!(
                err,
                MoveError::LeavesKingInCheck(_) | MoveError::CapturesKing(_)
            ));
            prop_assert_eq!(&next, &game);
        }
    }
}
