// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTTP transport behind the cascade.

use std::time::Duration;

use crate::error::FetchError;

/// Performs a GET request and returns the response body.
///
/// Non-success statuses must be reported as [`FetchError::Status`], and the
/// request must give up after the implementation's timeout.
pub trait Transport {
    /// Fetches `url`.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking [`Transport`] built on `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Creates a transport whose requests time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::StatusCode(status) => FetchError::Status {
                url: url.to_owned(),
                status,
            },
            other => FetchError::Transport {
                url: url.to_owned(),
                message: other.to_string(),
            },
        })?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|err| FetchError::Transport {
                url: url.to_owned(),
                message: err.to_string(),
            })
    }
}
