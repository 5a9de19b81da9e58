//! Stateful URL editor session.

use crate::collab::{AnalyticsSink, NoopAnalytics};
use crate::config::EditorConfig;
use crate::transform::{decode_url_params, encode_url_params, replace_query_delimiter};
use crate::url_model::{QueryDelimiter, QueryParam};

use super::{
    rebuild_form_from_url_with, rebuild_url_from_form_with, submit_url_with, EditorAction,
    FormState,
};

/// Analytics category for every editor event.
pub const ANALYTICS_CATEGORY: &str = "Request view";
const TOGGLE_EVENT: &str = "URL widget toggle";
const MENU_ACTION_EVENT: &str = "URL widget context menu action";

/// Holds the master URL and, in detailed mode, its form fields.
///
/// The URL and the form are only synchronised at explicit transitions
/// (`toggle`, `remove_param`, `set_url` with an empty URL); editing one does
/// not silently rewrite the other.
#[derive(Debug)]
pub struct UrlEditor<A = NoopAnalytics> {
    url: String,
    detailed: bool,
    form: FormState,
    suggestions_open: bool,
    config: EditorConfig,
    analytics: A,
}

impl UrlEditor<NoopAnalytics> {
    pub fn with_defaults() -> Self {
        Self::new(EditorConfig::default(), NoopAnalytics)
    }
}

impl<A: AnalyticsSink> UrlEditor<A> {
    pub fn new(config: EditorConfig, analytics: A) -> Self {
        Self {
            url: String::new(),
            detailed: false,
            form: FormState::default(),
            suggestions_open: false,
            config,
            analytics,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_detailed(&self) -> bool {
        self.detailed
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Direct access to the form fields for editing in detailed mode.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    /// Replaces the master URL. Clearing it in detailed mode clears the form.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        if self.detailed && self.url.is_empty() {
            self.update_form();
        }
    }

    pub fn set_suggestions_open(&mut self, open: bool) {
        self.suggestions_open = open;
    }

    /// Switches between single-line and detailed mode, syncing the side that
    /// becomes visible.
    pub fn toggle(&mut self) {
        self.detailed = !self.detailed;
        let state_name = if self.detailed {
            self.update_form();
            "Details form"
        } else {
            self.update_url();
            "Single line"
        };
        self.analytics
            .notify(ANALYTICS_CATEGORY, TOGGLE_EVENT, state_name);
    }

    pub fn append_empty_param(&mut self) {
        self.form.params.push(QueryParam::pair("", ""));
    }

    /// Removes the form entry at `index` and rebuilds the URL.
    /// Returns the removed entry; out-of-range indexes change nothing.
    pub fn remove_param(&mut self, index: usize) -> Option<QueryParam> {
        if index >= self.form.params.len() {
            tracing::debug!(index, len = self.form.params.len(), "remove_param out of range");
            return None;
        }
        let removed = self.form.params.remove(index);
        self.update_url();
        Some(removed)
    }

    /// Runs a context-menu action against the master URL.
    pub fn apply(&mut self, action: EditorAction) {
        if !self.url.is_empty() {
            let delimiter = self.config.default_delimiter;
            let dedup = self.config.dedup;
            self.url = match action {
                EditorAction::EncodeParams => encode_url_params(&self.url, delimiter, dedup),
                EditorAction::DecodeParams => decode_url_params(&self.url, delimiter, dedup),
                EditorAction::ReplaceAmpersand => {
                    replace_query_delimiter(&self.url, QueryDelimiter::Semicolon)
                }
                EditorAction::ReplaceSemicolon => {
                    replace_query_delimiter(&self.url, QueryDelimiter::Ampersand)
                }
            };
            tracing::debug!(action = %action, url = %self.url, "applied editor action");
        }
        self.analytics
            .notify(ANALYTICS_CATEGORY, MENU_ACTION_EVENT, action.label());
    }

    /// Like [`apply`](Self::apply) for an action identified by name.
    /// Unknown names are logged and ignored.
    pub fn apply_named(&mut self, name: &str) {
        match name.parse::<EditorAction>() {
            Ok(action) => self.apply(action),
            Err(err) => tracing::warn!("{}", err),
        }
    }

    pub fn menu_opened(&self) {
        self.analytics
            .notify(ANALYTICS_CATEGORY, TOGGLE_EVENT, "Open menu");
    }

    /// Returns the URL to send, with the submit scheme default applied.
    /// `None` while the suggestion list is open.
    pub fn submit(&mut self) -> Option<String> {
        if self.suggestions_open {
            return None;
        }
        self.url = submit_url_with(&self.url, &self.config.submit_default_scheme);
        Some(self.url.clone())
    }

    fn update_form(&mut self) {
        self.form = rebuild_form_from_url_with(
            &self.url,
            &self.config.form_default_scheme,
            self.config.default_delimiter,
        );
    }

    fn update_url(&mut self) {
        self.url = rebuild_url_from_form_with(
            &self.form,
            &self.config.form_default_scheme,
            self.config.default_delimiter,
        );
    }
}
