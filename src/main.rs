use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connectz::replay;

/// Validate a recorded Connect-Z game and print its result code.
#[derive(Parser)]
#[command(name = "connectz", about = "Validate a recorded Connect-Z game")]
struct Cli {
    /// Path to the game file: a dimensions line, then one column per move
    game_file: PathBuf,

    /// Log replay progress to stderr (-v for moves, -vv for boards)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return;
        }
        Err(_) => {
            // bad usage gets a fixed hint on stdout, not a result code
            println!("Provide one input file");
            return;
        }
    };

    // stdout carries nothing but the result code; logs go to stderr
    let filter = match cli.verbose {
        0 => "warn",
        1 => "connectz=debug",
        _ => "connectz=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match replay::replay_file(&cli.game_file) {
        Ok(outcome) => println!("{}", outcome.code()),
        Err(err) => {
            tracing::debug!("replay failed: {err}");
            println!("{}", err.code());
        }
    }
}
