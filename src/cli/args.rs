//! clap definitions for the `altmap` binary.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Translation-aware sitemap generator for bilingual blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Color mode for terminal output
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to the config file
    #[arg(short = 'C', long, default_value = "altmap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a new bilingual content project
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create; omit to use the current directory
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Build per-locale sitemaps, the sitemap index, and robots.txt
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Check content integrity without writing output
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print sitemap entries as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Flags accepted by `build`.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Minify the XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Write robots.txt pointing at the sitemap index
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,

    /// Verbose output, including per-stage debug lines
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Flags accepted by `check`.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Also fail on posts missing their sibling translation
    #[arg(long)]
    pub strict: bool,
}

/// Flags accepted by `query`.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Pretty-print the JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }

    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
