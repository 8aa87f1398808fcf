//! Liuyao CLI - Strength quantification for hexagram readings.

use clap::Parser;
use liuyao_cli::commands;
use liuyao_cli::repl;
use liuyao_cli::{logging, Cli, Command, Config, Formatter};
use tracing::{debug, warn};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> liuyao_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the given path, or the default location
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let tolerates_bad_config = cli
        .command
        .as_ref()
        .is_some_and(Command::tolerates_bad_config);
    let (config, load_error) = match Config::load_from(&config_path) {
        Ok(config) => (config, None),
        Err(e) if tolerates_bad_config => (Config::default(), Some(e)),
        Err(e) => return Err(e),
    };

    logging::init(cli.verbose, &config.settings.log_level);
    if let Some(e) = load_error {
        warn!("Ignoring unreadable configuration at {}: {}", config_path.display(), e);
    }
    debug!("Using configuration at {}", config_path.display());

    // Command-line flags override config settings
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let notation = cli
        .notation
        .map(Into::into)
        .unwrap_or(config.settings.notation);
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, notation);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &Config::history_path(&config_path), &formatter)?
        }
        Some(Command::Score(args)) => commands::execute_score(args, &formatter)?,
        Some(Command::Analyze(args)) => commands::execute_analyze(args, &formatter)?,
        Some(Command::Branches) => commands::execute_branches(&formatter)?,
        Some(Command::Relation(args)) => commands::execute_relation(args, &formatter)?,
        Some(Command::Config(args)) => commands::execute_config(args, &config, &config_path, &formatter)?,
    }

    Ok(())
}
