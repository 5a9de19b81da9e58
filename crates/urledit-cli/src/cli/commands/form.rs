//! `urledit form|rebuild|submit` – the form-level editing operations.

use anyhow::Result;
use clap::Args;
use urledit_core::config::EditorConfig;
use urledit_core::editor::{rebuild_form_from_url_with, rebuild_url_from_form_with, submit_url_with};
use urledit_core::{FormState, QueryParam};

use super::parse_param;

#[derive(Debug, Args)]
pub struct RebuildArgs {
    /// protocol://authority; the form default scheme is added when `://` is missing.
    #[arg(long, default_value = "")]
    pub host: String,
    #[arg(long, default_value = "")]
    pub path: String,
    /// Query parameter as name=value or name; repeatable, order kept.
    #[arg(long = "param", value_name = "NAME[=VALUE]", value_parser = parse_param)]
    pub params: Vec<QueryParam>,
    #[arg(long, default_value = "")]
    pub fragment: String,
}

impl RebuildArgs {
    fn to_form(&self) -> FormState {
        FormState {
            host: self.host.clone(),
            path: self.path.clone(),
            params: self.params.clone(),
            fragment: self.fragment.clone(),
        }
    }
}

pub fn run_form(cfg: &EditorConfig, url: &str, json: bool) -> Result<()> {
    let form = rebuild_form_from_url_with(
        url,
        &cfg.form_default_scheme,
        cfg.default_delimiter,
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&form)?);
        return Ok(());
    }
    println!("host:     {}", form.host);
    println!("path:     {}", form.path);
    println!("fragment: {}", form.fragment);
    for (i, param) in form.params.iter().enumerate() {
        println!("param[{i}]: {param}");
    }
    Ok(())
}

pub fn run_rebuild(cfg: &EditorConfig, args: &RebuildArgs) {
    let url = rebuild_url_from_form_with(
        &args.to_form(),
        &cfg.form_default_scheme,
        cfg.default_delimiter,
    );
    println!("{url}");
}

pub fn run_submit(cfg: &EditorConfig, url: &str) {
    println!("{}", submit_url_with(url, &cfg.submit_default_scheme));
}
