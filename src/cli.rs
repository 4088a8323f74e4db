// src/cli.rs

//! CLI argument capture using `clap`.
//!
//! The launcher deliberately defines no options of its own: everything after
//! the program name belongs to the wrapped script and is captured verbatim.
//! Help and version interception are disabled so that `--help` and friends
//! reach the script instead of being swallowed here.

use std::ffi::OsString;

use clap::Parser;

/// Command-line arguments for `nvnodetop`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nvnodetop",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Arguments forwarded unmodified, in order, to the wrapped script.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub forwarded: Vec<OsString>,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(argv: &[&str]) -> Vec<OsString> {
        CliArgs::parse_from(argv).forwarded
    }

    #[test]
    fn hyphenated_and_spaced_args_pass_through_in_order() {
        let forwarded = parsed(&["nvnodetop", "--flag", "value with spaces", "-x"]);
        assert_eq!(forwarded, vec!["--flag", "value with spaces", "-x"]);
    }

    #[test]
    fn empty_strings_are_preserved() {
        let forwarded = parsed(&["nvnodetop", "", "a", ""]);
        assert_eq!(forwarded, vec!["", "a", ""]);
    }

    #[test]
    fn help_flag_is_not_intercepted() {
        let forwarded = parsed(&["nvnodetop", "--help"]);
        assert_eq!(forwarded, vec!["--help"]);
    }

    #[test]
    fn no_args_means_empty_forward_list() {
        assert!(parsed(&["nvnodetop"]).is_empty());
    }
}
