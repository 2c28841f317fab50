//! Retrieval pipeline configuration

use scb_domain::constants::{SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT};
use scb_domain::value_objects::ViewMode;
use serde::{Deserialize, Serialize};

/// Retrieval pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hits returned when a search does not ask for a number
    pub default_limit: usize,
    /// Largest number of hits a single search may return
    pub max_limit: usize,
    /// View returned when a search does not choose one
    pub mode: ViewMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: SEARCH_DEFAULT_LIMIT,
            max_limit: SEARCH_MAX_LIMIT,
            mode: ViewMode::default(),
        }
    }
}
