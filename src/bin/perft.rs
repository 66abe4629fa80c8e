use clap::Parser;
use scacchiera::{load_position, perft, Color, GameState, START_PLACEMENT};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position as _};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Piece placement, top rank first (trailing FEN fields are ignored)
    #[arg(short, long, default_value_t = String::from(START_PLACEMENT))]
    placement: String,

    /// Side to move
    #[arg(short, long, default_value_t = Color::White)]
    side: Color,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Print the node count of every root move
    #[arg(long)]
    divide: bool,

    /// Also run shakmaty on the same position. Counts only agree while
    /// castling, en passant and promotion cannot occur within the depth.
    #[arg(long)]
    oracle: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "scacchiera=warn".into()),
        )
        .init();

    let args = Args::parse();
    scacchiera::init();

    let board = match load_position(&args.placement) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let state = GameState::from_board(board, args.side);

    println!(
        "Running perft on placement '{}' ({} to move) at depth {}",
        state.board().to_placement(),
        args.side,
        args.depth
    );

    let start = std::time::Instant::now();
    let nodes = if args.divide {
        let split = perft::divide(&state, args.depth);
        for (mv, count) in &split {
            println!("{}: {}", mv, count);
        }
        split.iter().map(|(_, count)| count).sum()
    } else {
        perft::perft(&state, args.depth)
    };
    let duration = start.elapsed();
    println!(
        "perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );

    if args.oracle {
        let fen_str = format!(
            "{} {} - - 0 1",
            state.board().to_placement(),
            match args.side {
                Color::White => "w",
                Color::Black => "b",
            }
        );
        let fen: Fen = match fen_str.parse() {
            Ok(fen) => fen,
            Err(e) => {
                eprintln!("shakmaty rejected FEN '{}': {}", fen_str, e);
                std::process::exit(1);
            }
        };
        let pos: Chess = match fen.into_position(CastlingMode::Standard) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("shakmaty rejected position '{}': {}", fen_str, e);
                std::process::exit(1);
            }
        };
        let expected = perft_shakmaty(&pos, args.depth);
        println!("Shakmaty perft({}) = {} nodes", args.depth, expected);
        if expected != nodes {
            println!("MISMATCH: {} vs {}", nodes, expected);
            std::process::exit(2);
        }
    }
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
