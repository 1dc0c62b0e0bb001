//! Precheck - pre-flight dependency gate for the GenomeScanner pipeline.
//!
//! Precheck verifies that every external tool the pipeline shells out to is
//! resolvable on the executable search path before any real work starts, so
//! the operator sees one aggregated list of gaps instead of a mid-run failure.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`requirements`] - Tool resolution, gap checking, and reporting
//!
//! # Example
//!
//! ```
//! use precheck::requirements::missing_tools;
//! use std::path::PathBuf;
//!
//! // Nothing resolves against an empty search path.
//! let path: Vec<PathBuf> = vec![];
//! let missing = missing_tools(&["mash", "blastn"], &path);
//! assert_eq!(missing, vec!["mash", "blastn"]);
//! ```

pub mod cli;
pub mod error;
pub mod requirements;

pub use error::{PrecheckError, Result};
