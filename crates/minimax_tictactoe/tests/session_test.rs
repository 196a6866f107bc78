//! Full sessions driven through the public half-move API.

use minimax_tictactoe::{
    Cell, ComputerMove, Coord, EngineError, Game, GameConfig, Mark, Opening, Outcome,
};

/// Plays the first empty cell every turn until the game ends.
fn play_out(game: &mut Game) -> Outcome {
    while !game.outcome().is_terminal() {
        let coord = game
            .board()
            .empty_cells()
            .next()
            .expect("undecided board has an empty cell");
        game.play_turn(coord).expect("first empty cell is legal");
    }
    game.outcome()
}

#[test]
fn test_human_first_never_beats_computer() {
    let config = GameConfig::default()
        .with_first(Mark::Human)
        .with_opening(Opening::Search);
    let mut game = Game::new(config).unwrap();

    let outcome = play_out(&mut game);
    assert_ne!(outcome, Outcome::HumanWins);
    assert!(game.history().len() >= 5);
}

#[test]
fn test_computer_first_with_random_opening() {
    let config = GameConfig::default().with_seed(2024);
    let mut game = Game::new(config).unwrap();

    let opening = game.play_computer().unwrap();
    assert!(matches!(opening, ComputerMove::Opening(_)));
    assert_eq!(game.history()[0].mark, Mark::Computer);

    let outcome = play_out(&mut game);
    assert_ne!(outcome, Outcome::HumanWins);
}

#[test]
fn test_terminal_state_rejects_moves_until_reset() {
    let config = GameConfig::default()
        .with_first(Mark::Human)
        .with_opening(Opening::Search);
    let mut game = Game::new(config).unwrap();
    play_out(&mut game);

    let board = game.board().clone();
    assert_eq!(game.play_turn(Coord::new(0, 0)), Err(EngineError::GameOver));
    assert_eq!(game.play_computer(), Err(EngineError::GameOver));
    assert_eq!(game.board(), &board);

    game.reset();
    assert_eq!(game.outcome(), Outcome::Undecided);
    let report = game.play_turn(Coord::new(1, 1)).unwrap();
    assert_eq!(report.outcome, Outcome::Undecided);
}

#[test]
fn test_turn_report_carries_both_moves() {
    let config = GameConfig::default()
        .with_first(Mark::Human)
        .with_opening(Opening::Search);
    let mut game = Game::new(config).unwrap();

    let first = game.play_turn(Coord::new(1, 1)).unwrap();
    assert_eq!(first.human, Coord::new(1, 1));
    let reply = first.computer.expect("computer replies on an open board");
    assert!(matches!(reply, ComputerMove::Searched(_)));
    assert_eq!(game.to_move(), Mark::Human);
}

#[test]
fn test_capped_search_reports_exhaustion() {
    let config = GameConfig::default()
        .with_first(Mark::Human)
        .with_opening(Opening::Search)
        .with_max_nodes(50);
    let mut game = Game::new(config).unwrap();

    let result = game.play_turn(Coord::new(0, 0));
    assert_eq!(result, Err(EngineError::SearchBudgetExhausted { limit: 50 }));
    // The human move stands; the computer is still to move.
    assert_eq!(game.board().occupied_count(), 1);
    assert_eq!(game.to_move(), Mark::Computer);
}

#[test]
fn test_larger_board_session_starts() {
    let config = GameConfig::default().with_side(4).with_seed(9);
    let mut game = Game::new(config).unwrap();
    assert_eq!(game.board().cells().len(), 16);

    let opening = game.play_computer().unwrap();
    assert_eq!(
        game.board().get(opening.coord()),
        Some(Cell::Occupied(Mark::Computer))
    );
    assert_eq!(game.outcome(), Outcome::Undecided);
}
