//! Required-tool detection and gap reporting.
//!
//! This module decides whether the external tools the GenomeScanner pipeline
//! shells out to are resolvable on the executable search path, and renders
//! the aggregated warning for any that are not.
//!
//! # Modules
//!
//! - [`probe`] - Search-path resolution primitives
//! - [`checker`] - The fixed required-tool list and gap computation
//! - [`report`] - Warning block rendering

pub mod checker;
pub mod probe;
pub mod report;

pub use checker::{check_required_tools, missing_tools, CheckReport, REQUIRED_TOOLS};
pub use report::write_missing_report;
