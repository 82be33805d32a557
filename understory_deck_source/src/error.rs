// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failures of a single fetch attempt.

/// Why one attempt against one source did not yield items.
///
/// These never reach the deck: the cascade logs them and moves on to the next
/// attempt, the next source, or the placeholder batch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read, including timeouts.
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The body was not the JSON shape the source promises.
    #[error("could not decode response from {url}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The body decoded, but contained no usable items.
    #[error("{source_name} returned no usable items")]
    EmptyBatch {
        /// Name of the source.
        source_name: String,
    },
}
