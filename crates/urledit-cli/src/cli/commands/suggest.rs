//! `urledit suggest --history <file> <term>` – autocomplete from a history file.

use anyhow::{Context, Result};
use std::fs;
use urledit_core::collab::{suggestions, UrlHistory};

pub fn run_suggest(history_path: &str, term: &str) -> Result<()> {
    let data = fs::read_to_string(history_path)
        .with_context(|| format!("failed to read history file {history_path}"))?;
    let history = UrlHistory::from_json(&data)?;
    for url in suggestions(&history, term) {
        println!("{url}");
    }
    Ok(())
}
