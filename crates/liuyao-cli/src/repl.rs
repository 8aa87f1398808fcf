//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{AnalyzeArgs, Command, RelationArgs, ScoreArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Run the interactive REPL, keeping history in `history_path`.
pub fn run_repl(config: &Config, history_path: &Path, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Liuyao REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let save_history = prepare_history_dir(history_path);
    let _ = editor.load_history(history_path);

    loop {
        match editor.readline("liuyao> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    if save_history {
        editor.save_history(history_path).ok();
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "score" => parse_score_command(&parts[1..]),
        "relation" => parse_relation_command(&parts[1..]),
        "analyze" => parse_analyze_command(&parts[1..]),
        "branches" => Ok(ReplCommand::Command(Command::Branches)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(cmd: Command, formatter: &Formatter) -> Result<()> {
    match cmd {
        Command::Score(args) => commands::execute_score(args, formatter),
        Command::Relation(args) => commands::execute_relation(args, formatter),
        Command::Analyze(args) => commands::execute_analyze(args, formatter),
        Command::Branches => commands::execute_branches(formatter),
        _ => Err(CliError::InvalidInput(
            "Command not available in the REPL".to_string(),
        )),
    }
}

// Simple command parsers for REPL (positional arguments only)

fn parse_score_command(args: &[&str]) -> Result<ReplCommand> {
    let [month, day, target] = args else {
        return Err(CliError::InvalidInput(
            "Usage: score <month> <day> <target>".to_string(),
        ));
    };

    Ok(ReplCommand::Command(Command::Score(ScoreArgs {
        month: month.to_string(),
        day: day.to_string(),
        target: target.to_string(),
    })))
}

fn parse_relation_command(args: &[&str]) -> Result<ReplCommand> {
    let [reference, target] = args else {
        return Err(CliError::InvalidInput(
            "Usage: relation <reference> <target>".to_string(),
        ));
    };

    Ok(ReplCommand::Command(Command::Relation(RelationArgs {
        reference: reference.to_string(),
        target: target.to_string(),
    })))
}

fn parse_analyze_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput("Usage: analyze <file>".to_string()));
    }

    Ok(ReplCommand::Command(Command::Analyze(AnalyzeArgs {
        file: Some(args.join(" ")),
        stdin: false,
    })))
}

/// History is optional; an unwritable directory only disables saving.
fn prepare_history_dir(history_path: &Path) -> bool {
    match history_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => match fs::create_dir_all(dir) {
            Ok(()) => true,
            Err(e) => {
                debug!("History disabled, cannot create {}: {}", dir.display(), e);
                false
            }
        },
        _ => true,
    }
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  score <m> <d> <t>           - Score branch t under month m and day d");
    println!("    branches may be hanzi (寅) or pinyin (yin)");
    println!("  relation <ref> <target>     - Five-Element relation (elements or branches)");
    println!("  analyze <file>              - Quantify a reading from analysis JSON");
    println!("  branches                    - List branches and their elements");
    println!("  help, ?                     - Show this help");
    println!("  exit, quit, q               - Exit REPL");
    println!();
}
