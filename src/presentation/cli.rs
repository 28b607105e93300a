//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--color`, `--verbose`, `--settings`) are
//! inherited by all subcommands. Flags left unset fall back to settings.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// fmview - render feature models against configurations
#[derive(Parser, Debug)]
#[command(name = "fmview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (default: ./fmview.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the selected features as a tree and write the SVG image
    Render {
        /// Active configuration (one feature name per line)
        config: PathBuf,

        /// Image name; `.svg` replaces everything after the first '.'
        output: Option<PathBuf>,

        /// Feature model XML
        #[arg(short, long, value_name = "PATH")]
        model: Option<PathBuf>,

        /// Corpus for the minimal model (default: the configuration's directory)
        #[arg(long, value_name = "DIR")]
        corpus: Option<PathBuf>,

        /// Directory levels searched below the corpus
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Configurations a minimal feature may be missing from
        #[arg(long = "diff", value_name = "N")]
        diff_tolerance: Option<usize>,

        /// SVG font size in pixels
        #[arg(long, value_name = "N")]
        font_size: Option<u32>,

        /// Skip writing the SVG image
        #[arg(long)]
        no_svg: bool,

        /// Log the <prefix>_<integer> sum of every corpus file
        #[arg(long)]
        sums: bool,
    },

    /// Print the minimal model of a corpus
    Minimal {
        /// Corpus directory or a single .config file
        dir: PathBuf,

        /// Directory levels searched below DIR
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Configurations a minimal feature may be missing from
        #[arg(long = "diff", value_name = "N")]
        diff_tolerance: Option<usize>,

        /// Print the <prefix>_<integer> sum of every file
        #[arg(long)]
        sums: bool,
    },

    /// List every model node with its evaluated tags
    Dump {
        /// Feature model XML
        #[arg(short, long, value_name = "PATH")]
        model: Option<PathBuf>,

        /// Configuration to evaluate selection against
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
