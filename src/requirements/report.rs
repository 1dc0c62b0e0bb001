//! Warning block rendering.
//!
//! The wording and `****` markers match what the pipeline wrapper and its
//! operators already expect, so they must not drift.

use std::io::Write;

/// Write the aggregated missing-tool warning.
///
/// One block for all gaps rather than one message per tool, so the operator
/// can address everything in a single pass before retrying the pipeline.
pub fn write_missing_report(out: &mut dyn Write, missing: &[&str]) -> std::io::Result<()> {
    writeln!(out, "**** Warning: The following commands are missing:")?;
    writeln!(out, "{}", missing.join(", "))?;
    writeln!(
        out,
        "Please install it, as it is a requirement to run GenomeScanner"
    )?;
    writeln!(out, "****")?;
    writeln!(out)
}
