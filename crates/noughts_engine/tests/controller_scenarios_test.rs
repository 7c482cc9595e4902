//! End-to-end rounds driven through the public controller API.

use noughts_engine::{
    Board, GameController, GameMode, GameStatus, MoveError, MovePolicy, Player, Position,
    RandomPolicy, rules,
};

fn play(game: &mut GameController, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.submit_move(row, col).expect("legal move");
    }
}

#[test]
fn test_straight_row_win() {
    let mut game = GameController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.scores().wins(Player::X), 1);
    assert_eq!(game.scores().wins(Player::O), 0);
    for pos in Position::ALL {
        assert!(!game.is_clickable(pos.row(), pos.col()));
    }
}

#[test]
fn test_draw_leaves_scores_alone() {
    let mut game = GameController::new();
    // Ends as X O X / X O O / O X X.
    play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.scores().total(), 0);
    assert!(!game.is_clickable(0, 0));
    assert_eq!(game.submit_move(1, 1), Err(MoveError::GameOver));
}

#[test]
fn test_illegal_move_rejected() {
    let mut game = GameController::new();
    game.submit_move(0, 0).expect("legal move");
    let before = *game.board();

    assert_eq!(
        game.submit_move(0, 0),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_computer_turn_gating() {
    let mut game = GameController::with_mode(GameMode::HumanVsComputer, Player::X);
    game.submit_move(1, 1).expect("legal move");
    assert_eq!(game.to_move(), Player::O);

    let before = *game.board();
    assert_eq!(game.submit_move(0, 0), Err(MoveError::WrongTurn(Player::X)));
    assert_eq!(game.board(), &before);

    let mut policy = RandomPolicy::seeded(2024);
    let placed = game.computer_move(&mut policy).expect("computer's turn");
    assert_eq!(placed.mv.player, Player::O);
    assert!(before.is_empty(placed.mv.position));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_terminal_round_is_frozen() {
    let mut game = GameController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let frozen = game.clone();

    assert_eq!(game.submit_move(2, 2), Err(MoveError::GameOver));
    assert_eq!(game.submit_move(0, 0), Err(MoveError::GameOver));
    assert_eq!(game.board(), frozen.board());
    assert_eq!(game.history(), frozen.history());
    assert_eq!(game.scores(), frozen.scores());
}

#[test]
fn test_reset_board_keeps_scores() {
    let mut game = GameController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.reset_board();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.scores().wins(Player::X), 1);
}

#[test]
fn test_new_game_zeroes_scores() {
    let mut game = GameController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    game.reset_board();
    play(&mut game, &[(2, 2), (0, 0), (2, 1), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.scores().total(), 2);

    game.new_game();
    assert_eq!(game.scores().wins(Player::X), 0);
    assert_eq!(game.scores().wins(Player::O), 0);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_mode_and_symbol_changes_start_new_game() {
    let mut game = GameController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.set_mode(GameMode::HumanVsComputer);
    assert_eq!(game.scores().total(), 0);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.computer_symbol(), Some(Player::O));

    game.submit_move(0, 0).expect("legal move");
    game.set_human_symbol(Player::O);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.human_symbol(), Player::O);
    assert_eq!(game.computer_symbol(), Some(Player::X));
}

#[test]
fn test_random_rounds_alternate_and_stay_consistent() {
    let mut game = GameController::with_mode(GameMode::HumanVsComputer, Player::X);
    let mut human = RandomPolicy::seeded(17);
    let mut computer = RandomPolicy::seeded(71);

    for _ in 0..50 {
        let mut expected = Player::X;
        while !game.is_over() {
            assert_eq!(game.to_move(), expected);
            if let Some(turn) = game.pending_computer_turn() {
                let placed = game
                    .play_computer_turn(turn, &mut computer)
                    .expect("fresh ticket");
                assert_eq!(placed.mv.player, expected);
            } else {
                let pos = human
                    .choose(game.board())
                    .expect("cells left while in progress");
                let placed = game.submit_move(pos.row(), pos.col()).expect("legal move");
                assert_eq!(placed.mv.player, expected);
            }
            expected = expected.opponent();
        }

        assert_eq!(game.status(), rules::evaluate(game.board()));
        let marks = game.board().filled_count();
        assert_eq!(marks, game.history().len());
        assert!(marks >= 5);
        game.reset_board();
    }

    assert!(game.scores().total() <= 50);
}
