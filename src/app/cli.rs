use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect the content of selected files into a path -> content JSON map"
)]
pub struct Cli {
    /// Files or directories to collect, relative to --root
    pub includes: Vec<String>,

    /// Base directory the includes are resolved against
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Save the collected map to this JSON file instead of printing it
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Report every file read, skipped path and save result
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only collect the immediate children of included directories
    #[arg(long)]
    pub no_recursive: bool,

    /// Accepted filename suffix, repeatable (e.g., --ext .py --ext .json)
    #[arg(long = "ext", action = ArgAction::Append)]
    pub include_extensions: Option<Vec<String>>,

    /// Substring that excludes any path containing it, repeatable (e.g., --exclude .env)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Option<Vec<String>>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}
