//! Parse quantification output into scorer inputs

use crate::error::QuantifyError;
use crate::types::QuantificationInput;
use liuyao_domain::{Branch, BranchPosition};
use serde::Deserialize;
use tracing::debug;

/// Raw quantification object, as produced by the analysis step
///
/// Field names are accepted in their original Chinese form or in English.
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawQuantification {
    #[serde(rename = "月建", alias = "month")]
    month: String,

    #[serde(rename = "日辰", alias = "day")]
    day: String,

    #[serde(rename = "用神", alias = "useful_spirit")]
    useful_spirit: String,

    #[serde(rename = "动爻列表", alias = "moving_lines", default)]
    moving_lines: Option<Vec<String>>,
}

/// Parse a quantification response into typed branches
///
/// Every branch token must be valid. A bad token is reported with the
/// field it came from instead of being skipped, since dropping a moving
/// line would silently change the report.
pub fn parse_quantification(response: &str) -> Result<QuantificationInput, QuantifyError> {
    let json_str = extract_json(response)?;

    let raw: RawQuantification = serde_json::from_str(json_str)?;

    let month = parse_field(&raw.month, "月建", BranchPosition::Month)?;
    let day = parse_field(&raw.day, "日辰", BranchPosition::Day)?;
    let useful_spirit = parse_field(&raw.useful_spirit, "用神", BranchPosition::Target)?;

    let moving_lines = raw
        .moving_lines
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(idx, token)| parse_field(token, &format!("动爻列表[{}]", idx), BranchPosition::Target))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Parsed quantification: month={}, day={}, useful_spirit={}, moving_lines={}",
        month,
        day,
        useful_spirit,
        moving_lines.len()
    );

    Ok(QuantificationInput {
        month,
        day,
        useful_spirit,
        moving_lines,
    })
}

fn parse_field(token: &str, field: &str, position: BranchPosition) -> Result<Branch, QuantifyError> {
    Branch::parse_at(token, position).map_err(|source| QuantifyError::InvalidBranch {
        field: field.to_string(),
        source,
    })
}

/// Extract the JSON object from a response
///
/// Slices from the first `{` to the last `}`, which drops Markdown code
/// fences (multi-line or inline) and any prose before or after them.
fn extract_json(response: &str) -> Result<&str, QuantifyError> {
    let trimmed = response.trim();

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&trimmed[start..=end]),
        _ if trimmed.starts_with("```") => Err(QuantifyError::InvalidFormat("Empty code block".to_string())),
        _ => Err(QuantifyError::InvalidFormat(
            "Expected a JSON object".to_string(),
        )),
    }
}
