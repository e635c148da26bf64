use super::*;
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_flags() {
    let cli = Cli::try_parse_from(["envgen"]).unwrap();
    assert!(!cli.global.verbose);
    assert!(!cli.global.quiet);
}

#[test]
fn test_quiet_and_verbose_conflict() {
    assert!(Cli::try_parse_from(["envgen", "-q", "-v"]).is_err());
}

#[test]
fn test_positional_arguments_rejected() {
    assert!(Cli::try_parse_from(["envgen", ".env.custom"]).is_err());
}
