//! Gameplay scenarios through the public game board.

use strictly_tictactoe::{Board, GameBoard, Mark, Outcome, Position, Square, rules::check_winner};

#[test]
fn test_top_row_win() {
    let mut game = GameBoard::new();
    for index in [0, 4, 1, 5, 2] {
        assert!(game.select_index(index));
    }
    assert_eq!(game.outcome(), Outcome::Winner(Mark::X));
}

#[test]
fn test_draw_board() {
    let board: Board = "XOX/OXO/OXO".parse().unwrap();
    assert_eq!(check_winner(&board), None);
    assert_eq!(Outcome::evaluate(&board, Mark::X), Outcome::Draw);
}

#[test]
fn test_draw_by_play() {
    let mut game = GameBoard::new();
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    for pos in moves {
        assert!(game.select(pos));
    }
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_restart_after_win() {
    let mut game = GameBoard::new();
    for index in [0, 4, 1, 5, 2] {
        game.select_index(index);
    }
    game.restart();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.next_mark(), GameBoard::FIRST_MARK);
    assert_eq!(game.outcome(), Outcome::InProgress { next: Mark::X });
}

#[test]
fn test_restart_twice_equals_once() {
    let mut once = GameBoard::new();
    once.select(Position::Center);
    once.restart();

    let mut twice = GameBoard::new();
    twice.select(Position::Center);
    twice.restart();
    twice.restart();

    assert_eq!(once, twice);
    assert_eq!(once, GameBoard::new());
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = GameBoard::new();
    for index in [0, 4, 1, 5, 2] {
        game.select_index(index);
    }
    let decided = game;
    assert!(!game.select(Position::BottomLeft));
    assert_eq!(game, decided);
    assert_eq!(game.board().get(Position::BottomLeft), Square::Empty);
}

#[test]
fn test_occupied_cell_keeps_earlier_mark() {
    let mut game = GameBoard::new();
    game.select(Position::Center);
    assert!(!game.select(Position::Center));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(game.next_mark(), Mark::O);
}
