//! second-largest
//!
//! Prints the second-largest distinct value of integer sequences.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo inputs [3, 5, 2, 5, 6, 6, 1] and [7, 7, 7]
//! second-largest
//!
//! # One result line per argument
//! second-largest "[3, 5, 2]" "9 9 8" "-1, -2, -3"
//!
//! # `--parallel` may come before or after the sequences
//! second-largest "9 9 8" --parallel
//! ```
//!
//! `-1` is printed when a sequence has no second-largest distinct value.
//! Logs go to stderr and are controlled by `RUST_LOG`.

use std::io::{self, Write};

use anyhow::{Context, ensure};
use clap::Parser;
use second_largest::selection::{find_second_largest_unique, parse_sequence};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_INPUTS: [&[i32]; 2] = [&[3, 5, 2, 5, 6, 6, 1], &[7, 7, 7]];

#[derive(Debug, Parser)]
#[command(name = "second-largest")]
#[command(version, about = "Second-largest distinct value of integer sequences")]
struct Cli {
    /// Evaluate each sequence in parallel (requires the `rayon` feature)
    #[arg(long)]
    parallel: bool,

    /// Integer sequences such as "[3, 5, 2]" or "9 9 8"; runs the demo inputs when omitted
    #[arg(allow_hyphen_values = true)]
    sequences: Vec<String>,
}

impl Cli {
    const PARALLEL_FLAG: &'static str = "--parallel";

    /// Moves a `--parallel` that clap collected as a sequence back to the flag.
    ///
    /// `sequences` accepts hyphen-led values such as `-1,-2`, so a flag after
    /// the first sequence lands there.
    fn normalize(mut self) -> Self {
        let before = self.sequences.len();
        self.sequences.retain(|raw| raw != Self::PARALLEL_FLAG);
        self.parallel |= self.sequences.len() != before;
        self
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "second_largest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse().normalize();
    let results = run(&cli)?;

    let mut stdout = io::stdout().lock();
    for result in results {
        writeln!(stdout, "{result}")?;
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<Vec<i32>> {
    ensure!(
        !cli.parallel || cfg!(feature = "rayon"),
        "--parallel requires a build with the `rayon` feature"
    );

    if cli.sequences.is_empty() {
        tracing::info!("no sequences given, running demo inputs");
        return Ok(DEMO_INPUTS
            .iter()
            .map(|values| evaluate(values, cli.parallel))
            .collect());
    }

    cli.sequences
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let values = parse_sequence(raw).with_context(|| {
                format!("argument {} ({raw:?}) is not an integer sequence", index + 1)
            })?;
            Ok(evaluate(&values, cli.parallel))
        })
        .collect()
}

#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
fn evaluate(values: &[i32], parallel: bool) -> i32 {
    #[cfg(feature = "rayon")]
    let result = if parallel {
        second_largest::selection::par_second_largest_unique(Some(values))
    } else {
        find_second_largest_unique(Some(values))
    };
    #[cfg(not(feature = "rayon"))]
    let result = find_second_largest_unique(Some(values));

    tracing::debug!(length = values.len(), result, "evaluated sequence");
    result
}
