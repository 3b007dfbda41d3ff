//! # Cart Replay
//!
//! Replays a log of cart actions through a fresh store and prints the
//! resulting view.
//!
//! ## Usage
//! ```bash
//! # Replay a file, one JSON action per line
//! cargo run -p cart-store --bin cart-replay -- actions.jsonl
//!
//! # Read actions from stdin with a custom config
//! cat actions.jsonl | cargo run -p cart-store --bin cart-replay -- --config ./cart.toml
//! ```
//!
//! ## Input Format
//! ```text
//! # comments and blank lines are skipped
//! {"type":"ADD","payload":{"sku":"AAAA0001","name":"Tea","price":10}}
//! {"type":"REMOVE","payload":{"sku":"AAAA0001"}}
//! ```
//!
//! The first action that fails stops the replay with a non-zero exit.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use cart_store::logging::init_tracing;
use cart_store::{replay, CartConfig, CartStore};
use tracing::{error, info};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Cart action replay");
                println!();
                println!("Usage: cart-replay [OPTIONS] [FILE]");
                println!();
                println!("Reads JSON actions (one per line) from FILE or stdin.");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Cart config file (default: platform config dir)");
                println!("  -h, --help           Show this help message");
                return ExitCode::SUCCESS;
            }
            other => input = Some(PathBuf::from(other)),
        }
        i += 1;
    }

    match run(config_path, input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("cart-replay: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<PathBuf>, input: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::load(config_path)?;
    let mut store = CartStore::from_config(&config)?;

    let reader: Box<dyn BufRead> = match &input {
        Some(path) => {
            info!(?path, "Replaying actions from file");
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let replayed = replay(reader, &mut store)?;

    info!(
        dispatched = replayed,
        total_items = store.total_items(),
        "Replay finished"
    );

    println!("{}", serde_json::to_string_pretty(&store.view())?);
    Ok(())
}
