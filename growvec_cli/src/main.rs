use crate::scenarios::{run_edits, run_scale};
use clap::{Parser, Subcommand};
use growvec::Edit;
use miette::{Context, IntoDiagnostic};
use tracing::info;
use tracing_panic::panic_hook;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

mod scenarios;

/// Exercises the growvec collection from the command line
#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Adds sequential integers in one batch, then removes them all starting
    /// from the highest index
    Scale {
        /// Number of integers to add
        #[arg(short, long, env = "GROWVEC_ITEMS", default_value_t = 1_000_000)]
        items: usize,
    },
    /// Seeds a collection with ITEMS, applies the edits in order and prints
    /// the result
    Edit {
        /// Initial elements
        items: Vec<String>,
        /// Edit to apply, e.g. `insert:0:x`, `remove:1`, `swap:0:2`
        #[arg(short, long = "op")]
        ops: Vec<Edit<String>>,
    },
}

pub fn main() -> miette::Result<()> {
    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::Layer::default().pretty())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    tracing::subscriber::set_global_default(subscriber).into_diagnostic()?;

    color_backtrace::install();
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        panic_hook(panic_info);
        prev_hook(panic_info);
    }));

    match Args::parse().command {
        Command::Scale { items } => {
            let report = run_scale(items).context("Scale run failed")?;
            info!(
                items,
                peak_capacity = report.peak_capacity,
                elapsed = ?report.elapsed,
                "scale run finished"
            );
        }
        Command::Edit { items, ops } => {
            let collection = run_edits(items, ops).context("Failed to apply edits")?;
            println!("{collection}");
        }
    }

    Ok(())
}
