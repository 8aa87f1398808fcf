//! Command implementations.

pub mod analyze;
pub mod branches;
pub mod config;
pub mod relation;
pub mod score;

pub use self::analyze::execute_analyze;
pub use self::branches::execute_branches;
pub use self::config::execute_config;
pub use self::relation::execute_relation;
pub use self::score::execute_score;
