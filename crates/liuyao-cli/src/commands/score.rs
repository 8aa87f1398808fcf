//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use liuyao_domain::{score, Branch, BranchPosition};
use tracing::debug;

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, formatter: &Formatter) -> Result<()> {
    let month = Branch::parse_at(&args.month, BranchPosition::Month)?;
    let day = Branch::parse_at(&args.day, BranchPosition::Day)?;
    let target = Branch::parse_at(&args.target, BranchPosition::Target)?;

    let s = score(month, day, target);
    debug!("Scored {} under month {} and day {}: {:?}", target, month, day, s);

    println!("{}", formatter.format_score(month, day, target, s)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Notation, OutputFormat};
    use crate::error::CliError;

    #[test]
    fn test_invalid_day_token() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, Notation::Hanzi);
        let args = ScoreArgs {
            month: "寅".to_string(),
            day: "甲".to_string(),
            target: "卯".to_string(),
        };
        match execute_score(args, &formatter) {
            Err(CliError::Branch(e)) => assert_eq!(e.position, BranchPosition::Day),
            other => panic!("Expected branch error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_tokens() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, Notation::Hanzi);
        let args = ScoreArgs {
            month: "yin".to_string(),
            day: "子".to_string(),
            target: "卯".to_string(),
        };
        assert!(execute_score(args, &formatter).is_ok());
    }
}
