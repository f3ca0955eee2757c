// Declare modules
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use env_logger::{Env, Target};

use self::cli::Cli;
use self::collector::collect;
use self::config::resolve_config;
use self::formatter::OutputGenerator;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Diagnostics go to stdout; --verbose lowers the default level
    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stdout)
        .init();

    // 3. Resolve Configuration
    let options = resolve_config(args)?;

    if options.includes.is_empty() {
        log::warn!("💡 Tip: No include paths provided (via CLI or presets).");
    }

    // 4. Collect
    let collection = collect(&options);

    if !collection.failures.is_empty() && !options.verbose {
        log::warn!(
            "⚠️ Skipped {} path(s); rerun with --verbose for details.",
            collection.failures.len()
        );
    }

    // 5. Print to Stdout unless the collector already saved it
    match &options.output {
        Some(path) if collection.saved() => log::info!(
            "Collected {} file(s) into {}",
            collection.files.len(),
            path.display()
        ),
        Some(_) => {}
        None => println!("{}", OutputGenerator::to_json(&collection.files)?),
    }

    Ok(())
}
