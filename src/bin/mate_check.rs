use std::env;
use std::process;

use xiangqi_engine::position::Position;
use xiangqi_engine::search::ForcedCheckmate;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|a| a == "-h" || a == "--help") {
        eprintln!("usage: mate_check [--fen <fen>] <move1> <move2> ...");
        return;
    }

    let (fen, moves) = match args.first().map(String::as_str) {
        Some("--fen") => match args.get(1) {
            Some(fen) => (Some(fen.as_str()), &args[2..]),
            None => {
                eprintln!("--fen needs a position");
                process::exit(2);
            }
        },
        _ => (None, &args[..]),
    };

    let mut pos = match fen.map(Position::from_fen).transpose() {
        Ok(pos) => pos.unwrap_or_default(),
        Err(err) => {
            eprintln!("bad fen: {err}");
            process::exit(2);
        }
    };
    for text in moves {
        if let Err(err) = pos.do_textmove(text) {
            eprintln!("{text}: {err}");
            process::exit(1);
        }
    }

    let board = pos.board();
    let legal_moves = board.legal_moves();
    let to_move = pos.to_move();
    let prover = ForcedCheckmate::new(&pos);
    let mate = prover.find_checkmate();

    println!("{board}");
    println!("fen: {}", pos.to_fen());
    println!("side_to_move: {to_move}");
    println!("legal_moves: {}", legal_moves.len());
    println!("in_check: {}", board.is_check(to_move));
    println!("winner: {}", pos.winner().map_or("none".to_string(), |c| c.to_string()));
    println!("repetition: {:?}", pos.repetition());
    if mate.is_null() {
        println!("forced_mate: none");
    } else {
        println!("forced_mate: {} ({})", mate, board.move_to_wxf(mate));
    }
    println!("mate_nodes: {}", prover.nodes());
    for mv in &legal_moves {
        println!("{} {}", mv, board.move_to_wxf(*mv));
    }
}
