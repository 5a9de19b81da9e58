//! Collaborator interfaces the editor reports to or reads from.
//!
//! The engine only depends on these traits; neither affects URL results and
//! both can be no-ops.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fire-and-forget event reporting (e.g. usage analytics).
pub trait AnalyticsSink {
    fn notify(&self, category: &str, action: &str, label: &str);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn notify(&self, _category: &str, _action: &str, _label: &str) {}
}

/// Records events in the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn notify(&self, category: &str, action: &str, label: &str) {
        tracing::info!(category, action, label, "analytics event");
    }
}

impl<T: AnalyticsSink + ?Sized> AnalyticsSink for &T {
    fn notify(&self, category: &str, action: &str, label: &str) {
        (**self).notify(category, action, label)
    }
}

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub url: String,
}

/// Source of previously used URLs for autocomplete.
pub trait SuggestionSource {
    fn query(&self, term: &str) -> Vec<Suggestion>;
}

/// Returns the URLs `source` suggests for `term`.
///
/// An empty term returns nothing without querying the source.
pub fn suggestions<S: SuggestionSource + ?Sized>(source: &S, term: &str) -> Vec<String> {
    if term.is_empty() {
        return Vec::new();
    }
    source.query(term).into_iter().map(|s| s.url).collect()
}

/// In-memory URL history; matches entries containing the term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlHistory {
    pub entries: Vec<Suggestion>,
}

impl UrlHistory {
    pub fn new(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            entries: urls
                .into_iter()
                .map(|url| Suggestion { url: url.into() })
                .collect(),
        }
    }

    /// Parse a JSON array of `{"url": "..."}` objects.
    pub fn from_json(data: &str) -> Result<Self> {
        let entries: Vec<Suggestion> =
            serde_json::from_str(data).context("invalid URL history JSON")?;
        Ok(Self { entries })
    }
}

impl SuggestionSource for UrlHistory {
    fn query(&self, term: &str) -> Vec<Suggestion> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|s| s.url.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
