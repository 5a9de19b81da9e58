//! `urledit build` – assemble a URL from parts.

use clap::Args;
use urledit_core::{build, ParsedUrl, QueryDelimiter, QueryParam};

use super::parse_param;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Scheme without `://` (defaults to http when omitted).
    #[arg(long)]
    pub protocol: Option<String>,
    /// host[:port].
    #[arg(long)]
    pub authority: Option<String>,
    #[arg(long, default_value = "")]
    pub path: String,
    /// Query parameter as name=value or name; repeatable, order kept.
    #[arg(long = "param", value_name = "NAME[=VALUE]", value_parser = parse_param)]
    pub params: Vec<QueryParam>,
    #[arg(long)]
    pub fragment: Option<String>,
    #[arg(long, default_value = "&")]
    pub delimiter: QueryDelimiter,
}

impl BuildArgs {
    fn to_parsed(&self) -> ParsedUrl {
        ParsedUrl {
            protocol: self.protocol.clone(),
            authority: self.authority.clone(),
            path: self.path.clone(),
            query_params: self.params.clone(),
            fragment: self.fragment.clone(),
            query_delimiter: self.delimiter,
        }
    }
}

pub fn run_build(args: &BuildArgs) {
    println!("{}", build(&args.to_parsed()));
}
