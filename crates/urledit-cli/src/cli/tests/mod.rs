//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn config_load_failure_falls_back_to_defaults() {
    use urledit_core::config::EditorConfig;
    let cfg = super::config_or_default(Err(anyhow::anyhow!("read-only config dir")));
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn loaded_config_is_kept() {
    use urledit_core::config::EditorConfig;
    use urledit_core::QueryDelimiter;
    let custom = EditorConfig {
        default_delimiter: QueryDelimiter::Semicolon,
        ..EditorConfig::default()
    };
    assert_eq!(super::config_or_default(Ok(custom.clone())), custom);
}
