use std::collections::VecDeque;

use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

/// Plays a fixed list of moves, then aborts.
struct Scripted(VecDeque<Move>);

impl Scripted {
    fn new(moves: &[&str]) -> Self {
        Self(moves.iter().map(|m| mv(m)).collect())
    }
}

impl Player for Scripted {
    fn pick_move(&mut self, _game: &Game) -> Result<Move, PlayerError> {
        self.0.pop_front().ok_or(PlayerError::Aborted)
    }
}

#[derive(Default)]
struct CountingRenderer(usize);

impl Renderer for CountingRenderer {
    fn render(&mut self, _board: &Board) {
        self.0 += 1;
    }
}

#[test]
fn new_game_state() {
    let game = Game::default();
    assert_eq!(game.state(), GameState::WhiteToMove);
    assert_eq!(game.side_to_move(), Color::White);
    assert!(game.history().is_empty());
    assert_eq!(game.fifty_move_counter(), 0);
    assert_eq!(game.legal_moves().len(), 20);
    assert_eq!(game.result(), None);
}

#[test]
fn turns_alternate() {
    let mut game = Game::default();
    assert_eq!(game.apply(mv("e7 e5")), Err(MoveError::NotYourPiece(sq("E7"))));
    assert_eq!(game.apply(mv("e3 e4")), Err(MoveError::NoPieceAtSquare(sq("E3"))));
    game.apply(mv("e2 e4")).unwrap();
    assert_eq!(game.state(), GameState::BlackToMove);
    assert_eq!(game.moves_made(Color::White), 1);
    assert_eq!(game.moves_made(Color::Black), 0);
    assert_eq!(game.apply(mv("d2 d4")), Err(MoveError::NotYourPiece(sq("D2"))));
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = Game::default();
    let before = game.board().clone();
    assert!(game.apply(mv("e2 e5")).is_err());
    assert!(game.apply(mv("f1 c4")).is_err());
    assert_eq!(game.board(), &before);
    assert!(game.history().is_empty());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn fools_mate() {
    let mut game = Game::default();
    for m in ["f2 f3", "e7 e5", "g2 g4"] {
        game.apply(mv(m)).unwrap();
        assert!(!game.is_over());
    }
    game.apply(mv("d8 h4")).unwrap();
    assert!(game.board().is_checkmate(Color::White));
    let result = game.result().unwrap();
    assert_eq!(result, GameResult::win(Color::Black, Termination::Checkmate));
    assert_eq!(result.reason(), "White is in mate");
    assert_eq!(game.state(), GameState::Finished(result));
    assert_eq!(game.apply(mv("e1 f2")), Err(MoveError::GameOver));
    assert!(game.legal_moves().is_empty());
}

#[test]
fn fifty_move_counter_resets_on_pawn_moves_and_captures() {
    let mut game = Game::default();
    game.apply(mv("g1 f3")).unwrap();
    game.apply(mv("b8 c6")).unwrap();
    assert_eq!(game.fifty_move_counter(), 2);
    game.apply(mv("e2 e4")).unwrap();
    assert_eq!(game.fifty_move_counter(), 0);
    game.apply(mv("c6 d4")).unwrap();
    assert_eq!(game.fifty_move_counter(), 1);
    game.apply(mv("f3 d4")).unwrap();
    assert_eq!(game.fifty_move_counter(), 0);
}

#[test]
fn fifty_move_rule_draws() {
    let mut game =
        Game::from_fen("4k3/8/8/8/8/8/8/4K1N1 w - - 49 80", GameConfig::default()).unwrap();
    assert_eq!(game.fifty_move_counter(), 49);
    game.apply(mv("g1 f3")).unwrap();
    assert_eq!(game.result(), Some(GameResult::draw(Termination::FiftyMoveRule)));
}

#[test]
fn threefold_repetition_draws() {
    let mut game = Game::default();
    let shuffle = ["g1 f3", "g8 f6", "f3 g1", "f6 g8"];
    for m in shuffle.iter().chain(shuffle.iter()) {
        game.apply(mv(m)).unwrap();
        assert!(!game.is_over(), "{m}");
    }
    assert_eq!(game.repetitions(&game.position_key()), 2);
    // Ninth ply: the position after 1. Nf3 appears for the third time.
    game.apply(mv("g1 f3")).unwrap();
    assert_eq!(game.repetitions(&game.position_key()), 3);
    assert_eq!(game.result(), Some(GameResult::draw(Termination::Repetition)));
}

#[test]
fn repetition_key_includes_side_to_move() {
    let game = Game::default();
    assert_eq!(
        game.position_key(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
    );
    assert_eq!(game.repetitions(&game.position_key()), 0);
}

#[test]
fn ply_cap_ends_in_a_draw() {
    let mut game = Game::new(GameConfig::default().with_max_plies(2));
    game.apply(mv("e2 e4")).unwrap();
    game.apply(mv("e7 e5")).unwrap();
    assert_eq!(game.result(), Some(GameResult::draw(Termination::PlyLimit)));
}

#[test]
fn from_fen_sees_finished_positions() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", GameConfig::default()).unwrap();
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.result(), Some(GameResult::draw(Termination::Stalemate)));
}

#[test]
fn play_runs_to_checkmate() {
    let mut game = Game::default();
    let mut white = Scripted::new(&["f2 f3", "g2 g4"]);
    // The illegal first reply is rejected and the player asked again.
    let mut black = Scripted::new(&["e7 e4", "e7 e5", "d8 h4"]);
    let mut renderer = CountingRenderer::default();

    let result = game.play(&mut white, &mut black, &mut renderer).unwrap();
    assert_eq!(result.winner, Some(Color::Black));
    assert_eq!(game.history().len(), 4);
    assert_eq!(renderer.0, 5);
}

#[test]
fn play_reports_an_abort() {
    let mut game = Game::default();
    let mut white = Scripted::new(&["e2 e4"]);
    let mut black = Scripted::new(&["e7 e5"]);
    let err = game
        .play(&mut white, &mut black, &mut NullRenderer)
        .unwrap_err();
    assert!(matches!(err, GameError::Aborted { plies: 2 }));
    assert_eq!(game.history().len(), 2);
    assert!(!game.is_over());
}

#[test]
fn result_reasons() {
    assert!(GameResult::draw(Termination::Repetition).is_draw());
    assert_eq!(
        GameResult::win(Color::White, Termination::Checkmate).to_string(),
        "Black is in mate"
    );
    assert_eq!(
        GameResult::draw(Termination::PlyLimit).reason(),
        "draw by ply limit"
    );
}
