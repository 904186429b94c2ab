// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, finds the winning hands among the hands given on the
//! command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use showdown_eval::{EvalError, Evaluation, Hand};

pub mod report;

/// Hands evaluated when none are given.
const SAMPLE_HANDS: [&str; 2] = ["AS 2C 3D 7H TC", "7C 7D 3H 2S 8C"];

#[derive(Debug, Parser)]
#[command(version, about = "Finds the winning poker hands.")]
struct Cli {
    /// The hands to evaluate, five cards each (e.g. "AS 2C 3D 7H TC").
    hands: Vec<String>,
    /// Print all the hands by standing instead of the winners only.
    #[clap(long)]
    all: bool,
    /// Print the evaluation as JSON.
    #[clap(long)]
    json: bool,
    /// Number of evaluation tasks.
    #[cfg(feature = "parallel")]
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

/// Evaluation config.
#[derive(Debug)]
struct Config {
    /// The hands to evaluate.
    hands: Vec<Hand>,
    /// Report all the standings.
    all: bool,
    /// Report as JSON.
    json: bool,
    /// Number of evaluation tasks.
    #[cfg(feature = "parallel")]
    tasks: usize,
}

impl Config {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let hands = if cli.hands.is_empty() {
            info!("No hands given, evaluating the sample hands");
            SAMPLE_HANDS.iter().map(|s| s.to_string()).collect()
        } else {
            cli.hands.clone()
        };

        let hands = hands
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                s.parse::<Hand>()
                    .with_context(|| format!("Cannot parse hand {idx} {s:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            hands,
            all: cli.all,
            json: cli.json,
            #[cfg(feature = "parallel")]
            tasks: cli.tasks as usize,
        })
    }
}

#[cfg(feature = "parallel")]
fn standings(config: &Config) -> Result<Vec<Vec<Evaluation>>, EvalError> {
    showdown_eval::par_standings(&config.hands, config.tasks)
}

#[cfg(not(feature = "parallel"))]
fn standings(config: &Config) -> Result<Vec<Vec<Evaluation>>, EvalError> {
    showdown_eval::standings(&config.hands)
}

fn run(config: Config) -> Result<()> {
    info!("Evaluating {} hands", config.hands.len());

    let mut standings = standings(&config)?;
    if !config.all {
        standings.truncate(1);
    }

    let output = if config.json {
        report::json(&standings)?
    } else {
        report::text(&standings, config.all)
    };

    println!("{output}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = Config::from_cli(&cli).and_then(run) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
