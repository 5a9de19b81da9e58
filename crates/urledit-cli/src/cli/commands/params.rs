//! `urledit encode|decode|delimiter` – query parameter transforms.

use urledit_core::config::EditorConfig;
use urledit_core::transform::{decode_url_params, encode_url_params, replace_query_delimiter};
use urledit_core::QueryDelimiter;

pub fn run_encode(cfg: &EditorConfig, url: &str) {
    println!("{}", encode_url_params(url, cfg.default_delimiter, cfg.dedup));
}

pub fn run_decode(cfg: &EditorConfig, url: &str) {
    println!("{}", decode_url_params(url, cfg.default_delimiter, cfg.dedup));
}

pub fn run_delimiter(url: &str, to: QueryDelimiter) {
    println!("{}", replace_query_delimiter(url, to));
}
