//! Quantification of a full reading

use crate::error::QuantifyError;
use crate::parser::parse_quantification;
use crate::types::{QuantificationInput, QuantificationReport, StrengthIndex};
use liuyao_domain::{score, Branch};
use tracing::debug;

/// Score the useful spirit and every moving line against the month and day
///
/// Moving lines are scored once each, in input order; repeated branches
/// produce repeated entries.
pub fn quantify(input: &QuantificationInput) -> QuantificationReport {
    let index = |branch: Branch| StrengthIndex {
        branch,
        score: score(input.month, input.day, branch),
    };

    let useful_spirit = index(input.useful_spirit);
    debug!(
        "Useful spirit {}: month={}, day={}, total={}",
        useful_spirit.branch,
        useful_spirit.month_score(),
        useful_spirit.day_score(),
        useful_spirit.total()
    );

    let moving_lines = input
        .moving_lines
        .iter()
        .map(|&branch| {
            let line = index(branch);
            debug!(
                "Moving line {}: month={}, day={}, total={}",
                line.branch,
                line.month_score(),
                line.day_score(),
                line.total()
            );
            line
        })
        .collect();

    QuantificationReport {
        month: input.month,
        day: input.day,
        useful_spirit,
        moving_lines,
    }
}

/// Parse a quantification response and score it
pub fn quantify_text(response: &str) -> Result<QuantificationReport, QuantifyError> {
    let input = parse_quantification(response)?;
    debug!("Quantifying reading under month {} and day {}", input.month, input.day);
    Ok(quantify(&input))
}
