//! What happens to entries that become identical after a transformation.

use crate::url_model::QueryParam;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamDedup {
    /// Keep every entry, duplicates included.
    #[default]
    Preserve,
    /// Drop any entry equal in name and value to an earlier one.
    Collapse,
}

impl ParamDedup {
    pub fn apply(self, params: Vec<QueryParam>) -> Vec<QueryParam> {
        match self {
            ParamDedup::Preserve => params,
            ParamDedup::Collapse => {
                let before = params.len();
                let mut seen = HashSet::with_capacity(before);
                let kept: Vec<QueryParam> = params
                    .into_iter()
                    .filter(|p| seen.insert(p.clone()))
                    .collect();
                if kept.len() != before {
                    tracing::debug!(dropped = before - kept.len(), "collapsed duplicate params");
                }
                kept
            }
        }
    }
}
