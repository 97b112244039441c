// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Magic square of squares search CLI.
//!
//! Commands:
//! - brute: enumerate candidate squares step by step
//! - graph: build squares from coincident sums of pairs of squares

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mss_search::{brute_force_find, graph_find, SearchConfig};

#[derive(Parser)]
#[command(name = "mss")]
#[command(version)]
#[command(about = "Search for a 3x3 magic square of squares")]
struct Cli {
    /// Log every candidate and every tied bucket
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report the result
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Try every arrangement of every base combination, step by step
    Brute {
        /// The square root of the high value to start with
        #[arg(short, long, value_name = "N", default_value = "9")]
        step: i64,

        /// Do not consider squares with a root less than this
        #[arg(short, long, value_name = "N", default_value = "1")]
        min_root: i64,

        /// Number of candidates to test, default unlimited
        #[arg(short, long, value_name = "N")]
        tests: Option<u64>,

        /// Shuffle the combinations at each step for less predictable progress
        #[arg(short, long)]
        random_combinations: bool,

        /// Seconds between status updates
        #[arg(short, long, value_name = "SECS", default_value = "50")]
        update: u64,

        /// Seed for --random-combinations
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Complete squares around buckets of equal pair sums
    Graph {
        /// Only build from buckets at least as large as the largest seen
        #[arg(long)]
        skip_short_entries: bool,

        /// Number of candidates to test, default unlimited
        #[arg(short, long, value_name = "N")]
        tests: Option<u64>,

        /// Stop after this many shells, default unlimited
        #[arg(long, value_name = "N")]
        max_shells: Option<u64>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let base = SearchConfig {
        verbose: cli.verbose,
        quiet: cli.quiet,
        ..SearchConfig::default()
    };

    let report = match cli.command {
        Commands::Brute {
            step,
            min_root,
            tests,
            random_combinations,
            update,
            seed,
        } => brute_force_find(&SearchConfig {
            step,
            min_root,
            max_tests: tests,
            random_combinations,
            update: Duration::from_secs(update),
            seed,
            ..base
        })?,
        Commands::Graph {
            skip_short_entries,
            tests,
            max_shells,
        } => graph_find(&SearchConfig {
            skip_short_entries,
            max_tests: tests,
            max_shells,
            ..base
        })?,
    };

    match report.render_solution() {
        Some(drawn) => {
            println!("{}", drawn);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            info!("No square found after {} tests", report.state.tests);
            Ok(ExitCode::FAILURE)
        }
    }
}
