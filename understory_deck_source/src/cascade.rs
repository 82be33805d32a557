// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded retry over an ordered list of sources, with a placeholder fallback.
//!
//! For each source in order, the cascade makes up to
//! [`CascadeConfig::attempts_per_source`] attempts. The first attempt that
//! yields at least one item wins. If every attempt against every source
//! fails, [`fallback_batch`] is returned instead, so the deck never mistakes
//! a supply failure for a finished round.

use core::num::NonZeroUsize;

use tracing::{info, warn};
use understory_deck::{DeckClient, Item};

use crate::config::CascadeConfig;
use crate::error::FetchError;
use crate::source::Source;
use crate::transport::{Transport, UreqTransport};

/// Where a batch came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The named source answered.
    Source(String),
    /// Every source failed; the batch is placeholders.
    Fallback,
}

/// A fetched batch and its provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    /// Items in presentation order.
    pub items: Vec<Item>,
    /// Where they came from.
    pub origin: Origin,
}

/// Deterministic placeholder items used when no source is reachable.
///
/// ```
/// use core::num::NonZeroUsize;
/// use understory_deck_source::fallback_batch;
///
/// let batch = fallback_batch(NonZeroUsize::new(2).unwrap());
/// assert_eq!(batch[1].id(), "fallback-1");
/// assert_eq!(batch[1].url(), "https://loremflickr.com/400/500/cat?lock=1");
/// ```
#[must_use]
pub fn fallback_batch(limit: NonZeroUsize) -> Vec<Item> {
    (0..limit.get())
        .map(|i| {
            Item::new(
                format!("fallback-{i}"),
                format!("https://loremflickr.com/400/500/cat?lock={i}"),
            )
        })
        .collect()
}

/// A [`DeckClient`] that tries remote sources in order.
#[derive(Clone, Debug)]
pub struct SourceCascade<T = UreqTransport> {
    transport: T,
    config: CascadeConfig,
}

impl SourceCascade {
    /// Creates a cascade over HTTP with the configured timeout.
    #[must_use]
    pub fn new(config: CascadeConfig) -> Self {
        let transport = UreqTransport::new(config.timeout());
        Self { transport, config }
    }
}

impl<T: Transport> SourceCascade<T> {
    /// Creates a cascade over a custom transport.
    pub fn with_transport(transport: T, config: CascadeConfig) -> Self {
        Self { transport, config }
    }

    /// The cascade's configuration.
    #[must_use]
    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// The cascade's transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches up to `limit` items. Never fails and never returns an empty batch.
    pub fn fetch(&self, limit: NonZeroUsize) -> Batch {
        for source in &self.config.sources {
            for attempt in 1..=self.config.attempts_per_source() {
                if attempt == 1 {
                    info!(source = %source.name, "fetching batch");
                } else {
                    info!(source = %source.name, attempt, "retrying");
                }
                match self.attempt(source, limit) {
                    Ok(items) => {
                        info!(source = %source.name, count = items.len(), "fetched batch");
                        return Batch {
                            items,
                            origin: Origin::Source(source.name.clone()),
                        };
                    }
                    Err(err) => {
                        warn!(source = %source.name, attempt, error = %err, "fetch attempt failed");
                    }
                }
            }
        }
        warn!("all sources failed; using placeholder batch");
        Batch {
            items: fallback_batch(limit),
            origin: Origin::Fallback,
        }
    }

    fn attempt(&self, source: &Source, limit: NonZeroUsize) -> Result<Vec<Item>, FetchError> {
        let url = source.request_url(limit);
        let body = self.transport.get(&url)?;
        let mut items = source
            .decode(&body)
            .map_err(|err| FetchError::Decode { url, source: err })?;
        if items.is_empty() {
            return Err(FetchError::EmptyBatch {
                source_name: source.name.clone(),
            });
        }
        items.truncate(limit.get());
        Ok(items)
    }
}

impl<T: Transport> DeckClient for SourceCascade<T> {
    fn fetch_batch(&mut self, limit: NonZeroUsize) -> Vec<Item> {
        self.fetch(limit).items
    }
}
