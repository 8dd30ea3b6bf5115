//! # Rampart Replay
//!
//! Runs a recorded JSON-lines session through the client and prints what it
//! would have sent.
//!
//! ## Usage
//!
//! ```bash
//! rampart_replay session.jsonl --config client.toml
//! RUST_LOG=rampart_client=debug rampart_replay < session.jsonl
//! ```
//!
//! The config path may also come from `RAMPART_CONFIG`.

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use rampart_client::{outbound_channel, run_replay, ClientConfig, ClientResult, GameClient, ReplayReport};
use rampart_ui::ManualClock;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    script: Option<String>,
    config_path: Option<String>,
    help: bool,
}

/// Parses arguments after the program name. `config_path` starts from the
/// environment fallback.
fn parse_args(args: &[String], config_path: Option<String>) -> Result<Args, String> {
    let mut parsed = Args {
        config_path,
        ..Args::default()
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    return Err(format!("{} needs a path", args[i]));
                };
                parsed.config_path = Some(path.clone());
                i += 1;
            }
            "--help" | "-h" => parsed.help = true,
            other => parsed.script = Some(other.to_string()),
        }
        i += 1;
    }
    Ok(parsed)
}

fn print_usage() {
    println!("Usage: rampart_replay [SCRIPT] [OPTIONS]");
    println!();
    println!("Reads the script from stdin when SCRIPT is omitted.");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>    Client config TOML (default: $RAMPART_CONFIG)");
    println!("  -h, --help             Show this help");
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Args {
        script,
        config_path,
        help,
    } = match parse_args(&args, std::env::var("RAMPART_CONFIG").ok()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    if help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(script.as_deref(), config_path.as_deref()) {
        Ok(report) => {
            for line in &report.outbound {
                println!("{line}");
            }
            println!(
                "# steps={} frames={} peak_effects={} last_frame_commands={}",
                report.steps, report.frames, report.peak_effects, report.last_frame_commands
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(script: Option<&str>, config_path: Option<&str>) -> ClientResult<ReplayReport> {
    let config = match config_path {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    let clock = ManualClock::new(0);
    let (queue, drain) = outbound_channel(config.outbound_capacity);
    let mut client = GameClient::new(config, clock.clone(), queue);

    match script {
        Some(path) => run_replay(BufReader::new(File::open(path)?), &clock, &mut client, &drain),
        None => run_replay(io::stdin().lock(), &clock, &mut client, &drain),
    }
}
