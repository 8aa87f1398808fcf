//! Relation command implementation.

use crate::cli::RelationArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use liuyao_domain::{Branch, Element};

/// Execute the relation command.
pub fn execute_relation(args: RelationArgs, formatter: &Formatter) -> Result<()> {
    let reference = parse_element(&args.reference)?;
    let target = parse_element(&args.target)?;
    let relation = reference.relation_to(target);

    println!("{}", formatter.format_relation(reference, target, relation)?);

    Ok(())
}

/// Accept either an element name or a branch (taking the branch's element).
fn parse_element(input: &str) -> Result<Element> {
    Branch::parse(input)
        .map(|b| b.element())
        .or_else(|| Element::parse(input))
        .ok_or_else(|| {
            CliError::InvalidInput(format!(
                "'{}' is neither an element nor an Earthly Branch",
                input
            ))
        })
}
