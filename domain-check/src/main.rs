use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use boolvar::{BoolSpace, BoolVar};
use clap::Parser;
use space::SpaceConfig;
use tracing_subscriber::EnvFilter;

use crate::bounds::Bounds;

mod bounds;

/// Constructs one boolean variable per bound pair and reports what happened.
#[derive(Debug, Parser)]
#[command(name = "domain-check")]
struct Args {
    /// TOML file with space settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bound pairs, written MIN:MAX.
    #[arg(required = true, allow_hyphen_values = true)]
    bounds: Vec<Bounds>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = io::stdout();
    let code = exit_code(run(Args::parse(), &mut stdout.lock()));
    if code != 0 {
        process::exit(code);
    }
}

/// 0 if every pair was accepted, 1 if any was rejected, 2 if the check could not run.
fn exit_code(result: anyhow::Result<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("error: {:#}", e);
            2
        }
    }
}

/// Writes one line per pair to `out` and returns whether every pair was accepted.
fn run(args: Args, out: &mut impl Write) -> anyhow::Result<bool> {
    let config = match &args.config {
        Some(path) => SpaceConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SpaceConfig::default(),
    };
    let mut space = BoolSpace::with_config(&config);

    let mut all_accepted = true;
    for Bounds { min, max } in args.bounds {
        match BoolVar::new(&mut space, min, max) {
            Ok(var) => {
                let storage = if var.imp().is_canonical() {
                    "canonical"
                } else {
                    "dynamic"
                };
                writeln!(out, "{}:{} -> {} ({})", min, max, var.display(&space), storage)?;
            }
            Err(e) => {
                writeln!(out, "{}:{} -> rejected: {}", min, max, e)?;
                all_accepted = false;
            }
        }
    }

    tracing::debug!(allocations = space.len(), "done");
    Ok(all_accepted)
}
