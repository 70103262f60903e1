use std::io::{self as stdio, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use game::moves::perft::{perft_divide, start_perft};
use io::{
    game_io::{format_game_state, parse_config_file, GameConfig},
    log_io::LogPresenter,
    move_io::{format_move, format_square, parse_move},
};

#[derive(Parser, Debug)]
#[command(name = "checkers", about = "Play checkers in the terminal")]
struct Args {
    /// Setup file with title, rules and starting position
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject quiet moves while a capture is available
    #[arg(long)]
    forced_captures: bool,

    /// Print perft counts to this depth and exit
    #[arg(long)]
    perft: Option<u8>,
}

const HELP: &str = "\
Enter a move as two squares, e.g. `c3 d4`, `c3-d4` or `c3xe5`.
Commands: board, moves, forced, help, quit";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(stdio::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match parse_config_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    if args.forced_captures {
        config.rules.forced_captures = true;
    }

    if let Some(depth) = args.perft {
        run_perft(&config, depth);
        return ExitCode::SUCCESS;
    }

    play(config);
    ExitCode::SUCCESS
}

fn run_perft(config: &GameConfig, depth: u8) {
    let forced = config.rules.forced_captures;

    for (mv, nodes) in perft_divide(&config.board, config.playing, depth, forced) {
        println!("{}: {}", format_move(&mv), nodes);
    }

    let total = start_perft(&config.board, config.playing, depth, forced);
    println!("Perft {}: {}", depth, total);
}

fn play(config: GameConfig) {
    let mut state = config.into_state(LogPresenter::default());
    let stdin = stdio::stdin();

    println!("{}", format_game_state(&state, true));
    println!("{HELP}");

    loop {
        print!("{}> ", state.playing());
        if stdio::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {}
            Err(e) => {
                error!("failed to read input: {e}");
                return;
            }
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return,
            "help" => println!("{HELP}"),
            "board" => println!("{}", format_game_state(&state, true)),
            "moves" => {
                let moves: Vec<String> = state.legal_moves().iter().map(format_move).collect();
                println!("{}", moves.join(" "));
            }
            "forced" => {
                let forced: Vec<String> = state
                    .list_forced_pieces()
                    .iter()
                    .map(|piece| format!("{}{}", piece.symbol(), format_square(piece.square())))
                    .collect();
                println!("{}", if forced.is_empty() { "-".to_string() } else { forced.join(" ") });
            }
            text => match parse_move(text) {
                Some(intent) => match state.submit(intent) {
                    Ok(outcome) if outcome.cancelled => println!("Move cancelled."),
                    Ok(outcome) => {
                        if let Some(captured) = outcome.captured {
                            println!("Captured {}.", format_square(captured.square()));
                        }
                        if outcome.promoted {
                            println!("Crowned!");
                        }
                        println!("{}", format_game_state(&state, false));
                    }
                    Err(e) => warn!("{e}"),
                },
                None => println!("Unrecognised input. {HELP}"),
            },
        }
    }
}
