//! Command implementations for the scorecard CLI.
//!
//! Each command has its own module/file for better organization.

pub mod generate;
pub mod list;
pub mod report;
pub mod validate;

// Re-export argument types for parser
pub use generate::GenerateArgs;
pub use list::ListArgs;
pub use report::ReportArgs;
pub use validate::ValidateArgs;
