//! Branches command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the branches command.
pub fn execute_branches(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_branches()?);
    Ok(())
}
