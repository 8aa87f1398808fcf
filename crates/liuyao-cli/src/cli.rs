//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Liuyao CLI - Strength quantification for hexagram readings.
#[derive(Debug, Parser)]
#[command(name = "liuyao")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LIUYAO_CONFIG")]
    pub config: Option<String>,

    /// Branch and element notation
    #[arg(short, long, value_enum, global = true)]
    pub notation: Option<NotationArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (totals only)
    Quiet,
}

/// Notation options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum NotationArg {
    /// Chinese characters
    Hanzi,
    /// Romanized names
    Pinyin,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one branch against a month and day branch
    Score(ScoreArgs),

    /// Quantify a reading from analysis JSON
    Analyze(AnalyzeArgs),

    /// List the twelve branches and their elements
    Branches,

    /// Show the Five-Element relation between two elements or branches
    Relation(RelationArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Month-establishing branch (月建), e.g. 寅 or yin
    pub month: String,

    /// Day branch (日辰)
    pub day: String,

    /// Branch to score (useful spirit or moving line)
    pub target: String,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// JSON file with 月建, 日辰, 用神 and 动爻列表
    #[arg(short = 'i', long)]
    pub file: Option<String>,

    /// Read the JSON from stdin
    #[arg(long, conflicts_with = "file")]
    pub stdin: bool,
}

/// Arguments for the relation command.
#[derive(Debug, Parser)]
pub struct RelationArgs {
    /// Reference element or branch
    pub reference: String,

    /// Target element or branch
    pub target: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    /// Whether the command can run on defaults when the config file is unreadable.
    ///
    /// `config path` and `config init --force` are how a broken file gets
    /// located and replaced.
    pub fn tolerates_bad_config(&self) -> bool {
        matches!(
            self,
            Command::Config(ConfigArgs {
                action: ConfigAction::Path | ConfigAction::Init { force: true },
            })
        )
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<NotationArg> for crate::config::Notation {
    fn from(notation: NotationArg) -> Self {
        match notation {
            NotationArg::Hanzi => crate::config::Notation::Hanzi,
            NotationArg::Pinyin => crate::config::Notation::Pinyin,
        }
    }
}
