// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deck_source --heading-base-level=0

//! Understory Deck Source: batch supply for `understory_deck`.
//!
//! [`SourceCascade`] implements [`DeckClient`](understory_deck::DeckClient) on
//! top of one or more remote JSON endpoints. It retries each source a bounded
//! number of times, falls through to the next source, and, when nothing
//! answers, returns a deterministic placeholder batch. A deck fed by a
//! cascade therefore only ever reports "empty" because the user swiped
//! everything, never because the network was down.
//!
//! - [`source`]: [`Source`] endpoints and how their responses decode into items.
//! - [`cascade`]: the retry/fallback loop.
//! - [`transport`]: the [`Transport`] trait and its `ureq` implementation.
//! - [`config`]: [`CascadeConfig`], loadable with serde.
//!
//! ## Example
//!
//! ```no_run
//! use core::num::NonZeroUsize;
//! use understory_deck_source::{CascadeConfig, Origin, SourceCascade};
//!
//! let cascade = SourceCascade::new(CascadeConfig::default());
//! let batch = cascade.fetch(NonZeroUsize::new(10).unwrap());
//! if batch.origin == Origin::Fallback {
//!     eprintln!("showing placeholders");
//! }
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod source;
pub mod transport;

pub use cascade::{Batch, Origin, SourceCascade, fallback_batch};
pub use config::CascadeConfig;
pub use error::FetchError;
pub use source::{Source, SourceKind};
pub use transport::{Transport, UreqTransport};
