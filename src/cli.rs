//! CLI argument definitions.
//!
//! Precheck recognizes no flags or subcommands of its own; clap provides the
//! standard `--help`/`--version` surface and rejects anything else.

use clap::Parser;

/// Pre-flight dependency check for the GenomeScanner pipeline.
#[derive(Debug, Parser)]
#[command(name = "precheck")]
#[command(version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["precheck"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn cli_rejects_positional_arguments() {
        let cli = Cli::try_parse_from(["precheck", "extra"]);
        assert!(cli.is_err());
    }
}
