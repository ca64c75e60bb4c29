use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "class2ff - Resolve class2 (COMPASS-style) force-field parameters for every bonded term of a molecular connectivity graph.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for parameter resolution.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate, type and parameterize every bonded term of a connectivity graph.
    Build(BuildArgs),
    /// Parse a parameter library and report the entry count of each section.
    Inspect(InspectArgs),
}

/// Library layout switches shared by every subcommand that parses a library.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LayoutArgs {
    /// Torsion rows carry `K1 K2 K3` without phase angles.
    #[arg(long)]
    pub no_torsion_phases: bool,

    /// Out-of-plane rows carry `K` without a reference angle.
    #[arg(long)]
    pub no_oop_angle: bool,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the connectivity graph (`.bgf` or `.toml`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub graph: PathBuf,

    /// Path to the class2 parameter library (`.frc`).
    /// Overrides `library.path` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Path to a run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the parameterized topology to this path as TOML.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the missing-parameter report to this path as CSV.
    #[arg(long, value_name = "PATH")]
    pub missing_report: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the class2 parameter library (`.frc`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub library: PathBuf,

    #[command(flatten)]
    pub layout: LayoutArgs,
}
