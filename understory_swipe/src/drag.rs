// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: track the horizontal offset of one pointer-down to pointer-up cycle.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`] from the pointer-down sample.
//! 2) On each move of the same pointer, call [`DragSession::update`] to get the offset from the start.
//! 3) End the session with [`DragSession::end`], which yields the final offset.
//!
//! Samples from other pointers are not this session's business; check
//! [`DragSession::accepts`] before feeding them in.
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::{DragSession, PointerId};
//!
//! let mut drag = DragSession::start(PointerId(1), 120.0);
//! assert!(drag.active);
//!
//! assert_eq!(drag.update(90.0), -30.0);
//! assert_eq!(drag.update(260.0), 140.0);
//!
//! assert_eq!(drag.end(), 140.0);
//! assert!(!drag.active);
//! assert!(!drag.accepts(PointerId(1)));
//! ```

use crate::visual::PointerId;

/// State of a single drag cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// The contact that started this session; all others are ignored.
    pub pointer: PointerId,
    /// Horizontal pointer coordinate at pointer-down.
    pub start_x: f64,
    /// Horizontal offset of the latest sample from `start_x`.
    pub current_offset: f64,
    /// `true` from pointer-down until [`DragSession::end`].
    pub active: bool,
}

impl DragSession {
    /// Starts a session for `pointer` at horizontal coordinate `x`.
    #[must_use]
    pub fn start(pointer: PointerId, x: f64) -> Self {
        Self {
            pointer,
            start_x: x,
            current_offset: 0.0,
            active: true,
        }
    }

    /// Returns `true` if samples from `pointer` belong to this live session.
    #[must_use]
    pub fn accepts(&self, pointer: PointerId) -> bool {
        self.active && self.pointer == pointer
    }

    /// Records a new horizontal coordinate and returns the offset from the start.
    pub fn update(&mut self, x: f64) -> f64 {
        if self.active {
            self.current_offset = x - self.start_x;
        }
        self.current_offset
    }

    /// Ends the session and returns its final offset.
    pub fn end(&mut self) -> f64 {
        self.active = false;
        self.current_offset
    }
}
