//! URL editing engine: decompose a URL into protocol, authority, path,
//! query parameters and fragment, transform the parameters, and rebuild it.

pub mod config;
pub mod logging;

pub mod collab;
pub mod editor;
pub mod transform;
pub mod url_model;

pub use editor::{rebuild_form_from_url, rebuild_url_from_form, submit_url, FormState, UrlEditor};
pub use transform::{decode_params, encode_params, set_delimiter};
pub use url_model::{build, decompose, ParsedUrl, QueryDelimiter, QueryParam};
