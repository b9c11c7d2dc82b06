use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader},
    process,
};

use clap::{Arg, ArgAction, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::dispatch::CommandCenter;

mod dispatch;
mod domain;
mod service;

const DEFAULT_INPUT: &str = "testdata/data.txt";

fn main() {
    let matches = Command::new("rover-fleet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates remote-controlled rovers on a bounded landing zone")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .default_value(DEFAULT_INPUT)
                .help("Text file with rover commands, one per line"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v: debug, -vv: trace)"),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let input = matches
        .get_one::<String>("input")
        .cloned()
        .unwrap_or_else(|| DEFAULT_INPUT.to_owned());

    if let Err(e) = run(&input) {
        error!("{e}");
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Feeds the command file line by line into the command center. The first
/// failing command halts the run; reported rover positions go to stdout.
fn run(input: &str) -> Result<(), Box<dyn Error>> {
    let file =
        File::open(input).map_err(|e| format!("unable to open command file {input}: {e}"))?;
    let mut command_center = CommandCenter::new();

    for line in BufReader::new(file).lines() {
        let command = line?;
        info!(%command);
        match command_center.send(&command) {
            Ok(Some(report)) => println!("{report}"),
            Ok(None) => {}
            Err(e) => return Err(format!("bad command {command:?}: {e}").into()),
        }
    }

    Ok(())
}
