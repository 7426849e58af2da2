use serde::Deserialize;

use xiangqi_engine::board::{Board, START_FEN};
use xiangqi_engine::position::Position;

#[derive(Deserialize)]
struct GameSet {
    games: Vec<Game>,
}

#[derive(Deserialize)]
struct Game {
    name: String,
    moves: Vec<GameMove>,
}

#[derive(Deserialize)]
struct GameMove {
    wxf: String,
    iccs: String,
}

fn load_games() -> GameSet {
    let data = include_str!("data/games.json");
    serde_json::from_str(data).expect("invalid games.json")
}

#[test]
fn wxf_and_iccs_agree_over_games() {
    for game in load_games().games {
        let mut pos = Position::new();
        for step in &game.moves {
            let board = *pos.board();
            let by_wxf = board.parse_wxf(&step.wxf).expect("wxf parses");
            let by_iccs = board.parse_iccs(&step.iccs).expect("iccs parses");
            assert_eq!(by_wxf, by_iccs, "{}: {}", game.name, step.wxf);
            assert_eq!(board.move_to_wxf(by_iccs), step.wxf, "{}", game.name);
            assert_eq!(by_iccs.to_string(), step.iccs, "{}", game.name);
            pos.do_textmove(&step.wxf).expect("move plays");
        }
        assert_eq!(pos.history().len(), game.moves.len());
        assert_eq!(pos.hash(), pos.board().calc_hash());
    }
}

#[test]
fn fen_survives_a_game() {
    for game in load_games().games {
        let mut pos = Position::new();
        for step in &game.moves {
            pos.do_textmove(&step.iccs).expect("move plays");
            let fen = pos.to_fen();
            let restored = Board::try_from_fen(&fen).expect("exported fen parses");
            assert_eq!(restored.hash(), pos.hash(), "{}", fen);
            assert_eq!(restored.to_move(), pos.to_move(), "{}", fen);
            assert_eq!(restored.occupied(), pos.board().occupied(), "{}", fen);
        }
    }
}

#[test]
fn undo_walks_back_to_start() {
    let mut pos = Position::new();
    for game in load_games().games {
        for step in &game.moves {
            pos.do_textmove(&step.iccs).expect("move plays");
        }
        while pos.undo_move().is_some() {}
        assert_eq!(pos.to_fen(), START_FEN);
        assert_eq!(*pos.board(), Board::new());
    }
}

#[test]
fn perft_from_start() {
    let board = Board::new();
    assert_eq!(board.perft(1), 44);
    assert_eq!(board.perft(2), 1920);
    assert_eq!(board.perft(3), 79666);
}
