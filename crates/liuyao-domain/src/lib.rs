//! Liuyao Domain Layer
//!
//! This crate contains the strength-quantification rules used when reading
//! a cast hexagram. It performs no I/O and holds no state; everything here
//! is a constant table or a pure function over one.
//!
//! ## Key Concepts
//!
//! - **Branch**: One of the twelve Earthly Branches (地支)
//! - **Element**: One of the Five Elements (五行)
//! - **Relation**: How a reference element acts on a target element
//! - **Strength score**: Month (月建数) and day (日辰数) contributions for a target branch
//!
//! ## Example
//!
//! ```
//! use liuyao_domain::{score, Branch};
//!
//! // Month 寅, day 子, useful spirit 卯
//! let s = score(Branch::Yin, Branch::Zi, Branch::Mao);
//! assert_eq!(s.month, 2);
//! assert_eq!(s.day, 1);
//! assert_eq!(s.total(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branch;
pub mod element;
pub mod error;
pub mod scoring;

// Re-exports for convenience
pub use branch::Branch;
pub use element::{Element, Relation};
pub use error::{BranchPosition, InvalidBranchError};
pub use scoring::{relation, score, score_tokens, StrengthScore};
