use std::env;
use std::time::Instant;

use chess_core::board::Board;

fn main() {
    let mut args = env::args().skip(1);
    let fen = args
        .next()
        .unwrap_or_else(|| "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string());
    let depth: u32 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            std::process::exit(1);
        }
    };

    println!("perft divide depth {depth} for {fen}");
    let start = Instant::now();
    let divided = board.perft_divide(depth);
    let elapsed = start.elapsed();

    let mut total = 0u64;
    for (mv, nodes) in &divided {
        println!("  {mv}: {nodes}");
        total += nodes;
    }
    println!("total: {total} in {elapsed:?}");
}
