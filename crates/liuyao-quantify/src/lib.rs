//! Liuyao Quantify
//!
//! Turns the branches picked out by the analysis step into strength
//! indices for the useful spirit and each moving line.
//!
//! # Architecture
//!
//! ```text
//! Analysis JSON → parser → QuantificationInput → quantify → QuantificationReport
//! ```
//!
//! The report keeps the month and day components of every index, since
//! readers look at them separately as well as at the total.
//!
//! # Example Usage
//!
//! ```
//! use liuyao_quantify::quantify_text;
//!
//! let report = quantify_text(r#"{"月建": "寅", "日辰": "子", "用神": "卯", "动爻列表": ["酉"]}"#)?;
//!
//! assert_eq!(report.useful_spirit.total(), 3);
//! assert_eq!(report.moving_lines.len(), 1);
//! # Ok::<(), liuyao_quantify::QuantifyError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod parser;
mod quantifier;
mod types;

pub use error::QuantifyError;
pub use parser::parse_quantification;
pub use quantifier::{quantify, quantify_text};
pub use types::{QuantificationInput, QuantificationReport, StrengthIndex};
