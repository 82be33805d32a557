// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the deck demos.
//!
//! [`TerminalView`] is a headless [`CardView`] whose cards trace every visual
//! update instead of drawing it. [`DemoTransport`] lets a demo switch between
//! real HTTP and a transport that is always offline.

use std::time::Duration;

use kurbo::Affine;
use tracing::{debug, trace};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use understory_deck::{CardView, CardVisual, Feedback, Item, PointerId, Transition};
use understory_deck_source::{FetchError, Transport, UreqTransport};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();
}

/// A card that traces what a renderer would draw.
#[derive(Debug)]
pub struct TerminalCard {
    id: String,
    z: usize,
    attached: bool,
    offset: f64,
}

impl TerminalCard {
    /// The item this card shows.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stacking order; larger is on top.
    pub fn z(&self) -> usize {
        self.z
    }

    /// Last horizontal translation written to the card.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl CardVisual for TerminalCard {
    fn set_transition(&mut self, transition: Option<Transition>) {
        trace!(card = %self.id, ?transition, "transition");
    }

    fn set_transform(&mut self, transform: Affine) {
        self.offset = transform.translation().x;
        debug!(card = %self.id, offset = self.offset, "transform");
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        match feedback.color() {
            Some(color) => {
                let [r, g, b, a] = color.to_rgba8().to_u8_array();
                debug!(card = %self.id, "feedback #{r:02x}{g:02x}{b:02x} alpha {a}");
            }
            None => trace!(card = %self.id, "feedback cleared"),
        }
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        trace!(card = %self.id, pointer = pointer.0, "captured");
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        trace!(card = %self.id, pointer = pointer.0, "released");
    }

    fn detach(&mut self) {
        self.attached = false;
        debug!(card = %self.id, "removed from stage");
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Headless stage for [`TerminalCard`]s.
#[derive(Debug, Default)]
pub struct TerminalView {
    rendered: usize,
}

impl TerminalView {
    /// Cards rendered since the view was created.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl CardView for TerminalView {
    type Visual = TerminalCard;

    fn render(&mut self, item: &Item, stack_index: usize, total: usize) -> TerminalCard {
        self.rendered += 1;
        let z = understory_deck::stack_z(stack_index, total);
        if item.has_image() {
            debug!(card = %item.id(), z, url = %item.url(), "rendered");
        } else {
            debug!(card = %item.id(), z, "rendered without image");
        }
        TerminalCard {
            id: item.id().to_owned(),
            z,
            attached: true,
            offset: 0.0,
        }
    }

    fn clear(&mut self) {
        debug!("stage cleared");
    }
}

/// HTTP, or a network that is never there.
#[derive(Debug, Clone)]
pub enum DemoTransport {
    /// Real requests through `ureq`.
    Online(UreqTransport),
    /// Every request fails, exercising the placeholder fallback.
    Offline,
}

impl DemoTransport {
    /// Picks a transport.
    pub fn new(offline: bool, timeout: Duration) -> Self {
        if offline {
            Self::Offline
        } else {
            Self::Online(UreqTransport::new(timeout))
        }
    }
}

impl Transport for DemoTransport {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        match self {
            Self::Online(inner) => inner.get(url),
            Self::Offline => Err(FetchError::Transport {
                url: url.to_owned(),
                message: "offline mode".to_owned(),
            }),
        }
    }
}
