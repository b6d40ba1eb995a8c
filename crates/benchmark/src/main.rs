//! boxpack command-line runner

use boxpack_benchmark::{
    BenchmarkConfig, BenchmarkResult, BenchmarkRunner, Dataset, DatasetParser, RunOutcome,
};
use boxpack_core::OrientationPolicy;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boxpack")]
#[command(about = "Pack rectangular boxes into the narrowest fixed-height bin")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a box list and print the bin area
    Pack {
        /// Input file (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Read the JSON dataset format instead of the text format
        #[arg(long)]
        json: bool,

        /// Skip the ASCII diagram
        #[arg(long)]
        no_render: bool,

        /// Pack boxes as given instead of standing them on their short side
        #[arg(long)]
        as_given: bool,
    },

    /// Run the built-in scenario sets
    Scenarios {
        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print each scenario's diagram to stderr
        #[arg(long)]
        render: bool,
    },

    /// Pack a randomly generated box set
    Random {
        /// Number of boxes
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Largest side length (smallest is 3)
        #[arg(short, long, default_value = "49")]
        max_side: i64,

        /// Random seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Skip the ASCII diagram
        #[arg(long)]
        no_render: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn report(outcome: &RunOutcome, render: bool) {
    if render {
        eprint!("{}", outcome.diagram);
    }
    for conflict in outcome.diagram.conflicts() {
        eprintln!(
            "ERR: box #{} at ({}, {})",
            conflict.sequence, conflict.x, conflict.y
        );
    }
    println!("{}", outcome.result.bin.area());
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack {
            file,
            json,
            no_render,
            as_given,
        } => {
            let parser = DatasetParser::new();
            let dataset = match (file, json) {
                (Some(path), true) => parser.parse_file(&path)?,
                (Some(path), false) => parser.parse_text_file(&path)?,
                (None, true) => parser.parse_json(&io::read_to_string(io::stdin())?)?,
                (None, false) => parser.parse_reader(io::stdin().lock())?,
            };

            let orientation = if as_given {
                OrientationPolicy::AsGiven
            } else {
                OrientationPolicy::Tall
            };
            let runner = BenchmarkRunner::new(BenchmarkConfig::new().with_orientation(orientation));

            let outcome = runner.run_dataset(&dataset)?;
            report(&outcome, !no_render);
        }

        Commands::Scenarios { output, render } => {
            let config = BenchmarkConfig::new().with_placements(true);
            let mut results = BenchmarkResult::new().with_config(format!("{:?}", config));
            let runner = BenchmarkRunner::new(config);

            for dataset in Dataset::builtin_scenarios() {
                let outcome = runner.run_dataset(&dataset)?;
                if render {
                    eprintln!(
                        "{} ({}x{}):",
                        dataset.name, outcome.run.bin_width, outcome.run.bin_height
                    );
                    eprint!("{}", outcome.diagram);
                }
                results.add_run(outcome.run);
            }

            results.print_summary();

            if let Some(path) = output {
                results.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }
        }

        Commands::Random {
            count,
            max_side,
            seed,
            no_render,
        } => {
            anyhow::ensure!(max_side >= 3, "--max-side must be at least 3");

            let dataset = Dataset::random(format!("random-{}", seed), count, 3, max_side, seed);
            let runner = BenchmarkRunner::new(BenchmarkConfig::new());

            let outcome = runner.run_dataset(&dataset)?;
            report(&outcome, !no_render);
        }
    }

    Ok(())
}
