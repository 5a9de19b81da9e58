//! CLI command handlers, grouped by the part of the engine they drive.

mod build;
mod completions;
mod decompose;
mod form;
mod params;
mod suggest;

pub use build::{run_build, BuildArgs};
pub use completions::{run_completions, run_man};
pub use decompose::run_decompose;
pub use form::{run_form, run_rebuild, run_submit, RebuildArgs};
pub use params::{run_decode, run_delimiter, run_encode};
pub use suggest::run_suggest;

use urledit_core::QueryParam;

/// Parses `name=value` (or a bare `name`) from a `--param` argument.
pub(crate) fn parse_param(s: &str) -> Result<QueryParam, String> {
    let param = match s.split_once('=') {
        Some((name, value)) => QueryParam::pair(name, value),
        None => QueryParam::flag(s),
    };
    if param.name.is_empty() && param.value.is_none() {
        return Err("parameter must not be empty".to_string());
    }
    Ok(param)
}
