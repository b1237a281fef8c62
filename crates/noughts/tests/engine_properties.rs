//! Tests for the engine's move, terminal, and reset behavior.

use noughts::{Board, Cell, Engine, GameStatus, Mark, MoveOutcome, Position, WinningLine};

const DRAW_SEQUENCE: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

fn play(engine: &mut Engine, moves: &[usize]) -> Vec<MoveOutcome> {
    moves.iter().map(|&i| engine.apply_move(i)).collect()
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut engine = Engine::new();
    play(&mut engine, &[4, 0]);
    let before = engine.snapshot();

    assert_eq!(engine.apply_move(4), MoveOutcome::Ignored);
    assert_eq!(engine.apply_move(0), MoveOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.snapshot();

    for i in 0..9 {
        assert_eq!(engine.apply_move(i), MoveOutcome::Ignored);
    }
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut engine = Engine::new();
    play(&mut engine, &DRAW_SEQUENCE);
    let before = engine.snapshot();

    assert_eq!(engine.apply_move(0), MoveOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_out_of_range_is_ignored() {
    let mut engine = Engine::new();
    let before = engine.snapshot();

    assert_eq!(engine.apply_move(9), MoveOutcome::Ignored);
    assert_eq!(engine.apply_move(usize::MAX), MoveOutcome::Ignored);
    assert_eq!(engine.apply_move(-3), MoveOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_turns_alternate_from_x() {
    let mut engine = Engine::new();
    let mut expected = Mark::X;

    for i in [4, 0, 8, 2, 1, 7] {
        assert_eq!(engine.current_player(), expected);
        expected = expected.opponent();
        assert_eq!(engine.apply_move(i), MoveOutcome::Continued(expected));
    }
}

#[test]
fn test_top_row_win() {
    let mut engine = Engine::new();
    let outcomes = play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Continued(Mark::O),
            MoveOutcome::Continued(Mark::X),
            MoveOutcome::Continued(Mark::O),
            MoveOutcome::Continued(Mark::X),
            MoveOutcome::Won(Mark::X),
        ]
    );
    assert_eq!(engine.status(), GameStatus::Won(Mark::X));
    assert_eq!(engine.winning_line(), Some(WinningLine::TopRow));
}

#[test]
fn test_o_can_win() {
    let mut engine = Engine::new();
    // X: 0, 1, 8  O: 2, 4, 6
    let outcomes = play(&mut engine, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Mark::O)));
    assert_eq!(engine.winning_line(), Some(WinningLine::AntiDiagonal));
    assert_eq!(engine.status_label(), "Player O has won!");
}

#[test]
fn test_full_board_draw() {
    let mut engine = Engine::new();
    let outcomes = play(&mut engine, &DRAW_SEQUENCE);

    assert!(outcomes[..8].iter().all(|o| matches!(o, MoveOutcome::Continued(_))));
    assert_eq!(outcomes[8], MoveOutcome::Draw);
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.winning_line(), None);
    assert!(engine.board().is_full());
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let mut engine = Engine::new();
    // X: 0, 1, 4, 5, 8  O: 2, 3, 6, 7
    let outcomes = play(&mut engine, &[0, 2, 1, 3, 4, 6, 5, 7, 8]);

    assert_eq!(outcomes[8], MoveOutcome::Won(Mark::X));
    assert!(engine.board().is_full());
    assert_eq!(engine.winning_line(), Some(WinningLine::MainDiagonal));
}

#[test]
fn test_reset_from_any_state() {
    let fresh = Engine::new().snapshot();

    let mut engine = Engine::new();
    engine.reset();
    assert_eq!(engine.snapshot(), fresh);

    play(&mut engine, &[4, 0]);
    engine.reset();
    assert_eq!(engine.snapshot(), fresh);

    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset();
    assert_eq!(engine.snapshot(), fresh);

    play(&mut engine, &DRAW_SEQUENCE);
    engine.reset();
    engine.reset();
    assert_eq!(engine.snapshot(), fresh);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Mark::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_play_after_reset() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset();
    assert_eq!(engine.apply_move(0), MoveOutcome::Continued(Mark::O));
    assert_eq!(engine.board().at(Position::TopLeft), Cell::Occupied(Mark::X));
}

#[test]
fn test_same_inputs_same_results() {
    let inputs = [4, 4, 0, 12, 8, 2, 6, 1, 7, 3, 5];
    let mut a = Engine::new();
    let mut b = Engine::new();

    assert_eq!(play(&mut a, &inputs), play(&mut b, &inputs));
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    let json = serde_json::to_string(&engine.snapshot()).expect("serialize");
    let back: noughts::GameSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, engine.snapshot());
    assert!(json.contains("TopRow"));
}
