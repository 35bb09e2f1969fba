use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::ComplexityLevel;

#[derive(Parser, Debug)]
#[command(name = "estimap")]
#[command(about = "Software module risk and cost estimation toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to .estimap.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the analysis collection (overrides config)
    #[arg(long = "store-dir", global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a module and append the result to the collection
    Analyze {
        /// Module name
        module_name: String,

        /// Lines of code (must be positive)
        #[arg(long = "loc")]
        lines_of_code: u64,

        /// Complexity level
        #[arg(long, value_enum)]
        complexity: ComplexityArg,

        /// Commits in the observation window
        #[arg(long = "commits")]
        commit_frequency: u64,

        /// Team size (advisory; not consumed by the cost model)
        #[arg(long = "team-size", default_value = "5")]
        team_size: u64,

        /// Function points, free-form
        #[arg(long = "function-points")]
        function_points: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Portfolio summary with the most recent analyses
    Dashboard {
        /// How many recent analyses to show
        #[arg(long, default_value = "5")]
        recent: usize,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all recorded analyses, newest first
    List {
        /// Show only the N most recent analyses
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Aggregate risk and cost insights over the collection
    Insights {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every recorded analysis
    Clear {
        /// Skip the safety check
        #[arg(short, long)]
        force: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ComplexityArg {
    Low,
    Medium,
    High,
}

impl From<ComplexityArg> for ComplexityLevel {
    fn from(c: ComplexityArg) -> Self {
        match c {
            ComplexityArg::Low => ComplexityLevel::Low,
            ComplexityArg::Medium => ComplexityLevel::Medium,
            ComplexityArg::High => ComplexityLevel::High,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<crate::config::DefaultFormat> for OutputFormat {
    fn from(f: crate::config::DefaultFormat) -> Self {
        match f {
            crate::config::DefaultFormat::Terminal => OutputFormat::Terminal,
            crate::config::DefaultFormat::Json => OutputFormat::Json,
            crate::config::DefaultFormat::Markdown => OutputFormat::Markdown,
        }
    }
}
