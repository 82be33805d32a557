// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade configuration.
//!
//! Every field has a default, so hosts can load partial JSON:
//!
//! ```
//! use understory_deck_source::CascadeConfig;
//!
//! let config: CascadeConfig = serde_json::from_str(r#"{ "retries": 3 }"#).unwrap();
//! assert_eq!(config.retries, 3);
//! assert_eq!(config.timeout_ms, 5_000);
//! assert_eq!(config.sources.len(), 2);
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::source::Source;

/// How hard the cascade tries before falling back to placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Per-request timeout, in milliseconds.
    pub timeout_ms: u64,
    /// Extra attempts per source after the first one fails.
    pub retries: u32,
    /// Sources, tried in order.
    pub sources: Vec<Source>,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            retries: 1,
            sources: vec![Source::the_cat_api(), Source::cataas()],
        }
    }
}

impl CascadeConfig {
    /// Per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Total attempts made against each source.
    #[must_use]
    pub fn attempts_per_source(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}
