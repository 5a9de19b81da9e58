//! CLI for the urledit URL editing engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use urledit_core::config::{self, EditorConfig};
use urledit_core::QueryDelimiter;

use commands::{
    run_build, run_completions, run_decode, run_decompose, run_delimiter, run_encode, run_form,
    run_man, run_rebuild, run_submit, run_suggest, BuildArgs, RebuildArgs,
};

/// Top-level CLI for urledit.
#[derive(Debug, Parser)]
#[command(name = "urledit")]
#[command(about = "urledit: decompose, edit and rebuild URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into protocol, authority, path, query parameters and fragment.
    Decompose {
        url: String,
        /// Print the parsed record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Assemble a URL from its parts.
    Build(BuildArgs),

    /// Percent-encode every query parameter name and value.
    Encode { url: String },

    /// Percent-decode every query parameter name and value.
    Decode { url: String },

    /// Rewrite the query delimiter.
    Delimiter {
        url: String,
        /// New delimiter: "&", ";", "amp" or "semicolon".
        to: QueryDelimiter,
    },

    /// Apply the submit scheme default to a URL that has none.
    Submit { url: String },

    /// Show the editable form fields for a URL.
    Form {
        url: String,
        /// Print the fields as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Rebuild a URL from form fields.
    Rebuild(RebuildArgs),

    /// Suggest URLs from a JSON history file.
    Suggest {
        /// JSON array of {"url": "..."} objects.
        #[arg(long, value_name = "FILE")]
        history: String,
        term: String,
    },

    /// Print shell completions.
    Completions { shell: Shell },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config_or_default(config::load_or_init());
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Decompose { url, json } => run_decompose(&url, json)?,
            CliCommand::Build(args) => run_build(&args),
            CliCommand::Encode { url } => run_encode(&cfg, &url),
            CliCommand::Decode { url } => run_decode(&cfg, &url),
            CliCommand::Delimiter { url, to } => run_delimiter(&url, to),
            CliCommand::Submit { url } => run_submit(&cfg, &url),
            CliCommand::Form { url, json } => run_form(&cfg, &url, json)?,
            CliCommand::Rebuild(args) => run_rebuild(&cfg, &args),
            CliCommand::Suggest { history, term } => run_suggest(&history, &term)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Commands must still run when the config dir is unwritable or the file is bad.
fn config_or_default(loaded: Result<EditorConfig>) -> EditorConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("using default config: {:#}", err);
        EditorConfig::default()
    })
}

#[cfg(test)]
mod tests;
