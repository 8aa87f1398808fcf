//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use liuyao_quantify::quantify_text;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    // Read the analysis JSON from file or stdin
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let report = quantify_text(&json_data)?;
    info!(
        "Quantified useful spirit {} and {} moving line(s)",
        report.useful_spirit.branch,
        report.moving_lines.len()
    );

    println!("{}", formatter.format_report(&report)?);

    Ok(())
}
