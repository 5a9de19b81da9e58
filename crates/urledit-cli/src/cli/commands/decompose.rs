//! `urledit decompose <url>` – print the parts of a URL.

use anyhow::Result;
use urledit_core::{decompose, ParsedUrl};

pub fn run_decompose(url: &str, json: bool) -> Result<()> {
    let parsed = decompose(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print!("{}", format_parsed(&parsed));
    }
    Ok(())
}

fn format_parsed(parsed: &ParsedUrl) -> String {
    let mut out = String::new();
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("protocol:  {}\n", field(&parsed.protocol)));
    out.push_str(&format!("authority: {}\n", field(&parsed.authority)));
    out.push_str(&format!("path:      {}\n", parsed.path));
    out.push_str(&format!("fragment:  {}\n", field(&parsed.fragment)));
    out.push_str(&format!("delimiter: {}\n", parsed.query_delimiter));
    out.push_str(&format!("params:    {}\n", parsed.query_params.len()));
    for param in &parsed.query_params {
        match &param.value {
            Some(value) => out.push_str(&format!("  {:<16} = {}\n", param.name, value)),
            None => out.push_str(&format!("  {:<16} (no value)\n", param.name)),
        }
    }
    out
}
