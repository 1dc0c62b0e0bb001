//! Gap computation over the fixed required-tool list.
//!
//! The checker is a single stateless pass: resolve each name against the
//! search path, collect the failures in declaration order, and hand the
//! aggregate to the caller. Missing tools are data here, not errors.

use std::path::PathBuf;

use crate::requirements::probe::{parse_system_path, resolve_tool_path};

/// External tools the GenomeScanner pipeline shells out to at run time.
///
/// Declaration order is preserved in reports so repeated runs read the same.
/// `esearch`/`esummary`/`efetch`/`xtract` are the Entrez Direct utilities the
/// NCBI queries go through.
pub const REQUIRED_TOOLS: &[&str] = &[
    "mash",
    "calc",
    "bc",
    "fmt",
    "datasets",
    "esearch",
    "esummary",
    "efetch",
    "xtract",
    "wget",
    "JolyTree.sh",
    "fastANI",
    "blastn",
    "bPTP.py",
];

/// Result of checking the required-tool list against the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Tools that failed resolution, in [`REQUIRED_TOOLS`] order.
    pub missing: Vec<&'static str>,
}

impl CheckReport {
    /// Whether every required tool resolved.
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }

    /// Process exit code: 0 when nothing is missing, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.missing.is_empty() {
            0
        } else {
            1
        }
    }
}

/// Compute the ordered subsequence of `tools` not resolvable via `path_entries`.
///
/// Every resolution failure collapses into the same bucket: a binary that
/// exists without execute permission reports the same as one that is absent
/// entirely.
pub fn missing_tools<'a>(tools: &[&'a str], path_entries: &[PathBuf]) -> Vec<&'a str> {
    let mut missing = Vec::new();
    for tool in tools {
        match resolve_tool_path(tool, path_entries) {
            Some(path) => {
                tracing::debug!("{} resolved at {}", tool, path.display());
            }
            None => {
                tracing::debug!("{} not resolvable", tool);
                missing.push(*tool);
            }
        }
    }
    missing
}

/// Check [`REQUIRED_TOOLS`] against the live search path.
pub fn check_required_tools() -> CheckReport {
    let path_entries = parse_system_path();
    CheckReport {
        missing: missing_tools(REQUIRED_TOOLS, &path_entries),
    }
}
