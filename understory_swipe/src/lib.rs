// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a drag-to-swipe gesture state machine for card decks.
//!
//! This crate turns a stream of pointer samples into the horizontal drag of a
//! single card and decides, on release, whether the drag commits (the card is
//! dismissed to the left or right) or springs back to rest. It is the
//! per-card half of `understory_deck`, but it is usable on its own.
//!
//! The modules are:
//!
//! - [`drag`]: [`DragSession`], the ephemeral state of one pointer-down to
//!   pointer-up cycle.
//! - [`gesture`]: [`GestureController`], the four-state machine
//!   (`Idle → Dragging → {Committing, Resetting} → Idle`).
//! - [`config`]: [`SwipeConfig`], thresholds, rotation, and animation timing,
//!   plus the drag and exit transforms derived from them.
//! - [`visual`]: the [`CardVisual`] boundary trait, [`Feedback`], and
//!   [`Transition`], which describe what a controller writes to a card.
//!
//! Like the other Understory crates, nothing here assumes a particular UI
//! framework. Hosts translate their native pointer events into
//! [`PointerSample`] values and implement [`CardVisual`] for whatever handle
//! they use to draw a card (a DOM element, a scene node, a test recorder).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point};
//! use understory_swipe::{
//!     CardVisual, Feedback, GestureController, GestureState, PointerId, PointerSample, Release,
//!     SwipeConfig, Transition,
//! };
//!
//! struct Card {
//!     transform: Affine,
//! }
//!
//! impl CardVisual for Card {
//!     fn set_transition(&mut self, _transition: Option<Transition>) {}
//!     fn set_transform(&mut self, transform: Affine) {
//!         self.transform = transform;
//!     }
//!     fn set_feedback(&mut self, _feedback: Feedback) {}
//!     fn capture_pointer(&mut self, _pointer: PointerId) {}
//!     fn release_pointer(&mut self, _pointer: PointerId) {}
//!     fn detach(&mut self) {}
//!     fn is_attached(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let mut card = Card { transform: Affine::IDENTITY };
//! let mut gesture = GestureController::new(0_u32, SwipeConfig::default());
//! let finger = PointerId(1);
//!
//! gesture.pointer_down(&mut card, PointerSample::new(finger, Point::new(50.0, 0.0), 0));
//! gesture.pointer_move(&mut card, PointerSample::new(finger, Point::new(200.0, 0.0), 16));
//! assert_eq!(gesture.state(), GestureState::Dragging);
//!
//! let release = gesture.pointer_up(&mut card, PointerSample::new(finger, Point::new(200.0, 0.0), 32));
//! assert_eq!(release, Release::Commit { liked: true });
//! ```

pub mod config;
pub mod drag;
pub mod gesture;
pub mod visual;

pub use config::SwipeConfig;
pub use drag::DragSession;
pub use gesture::{GestureController, GestureState, Release};
pub use visual::{CardVisual, Feedback, PointerId, PointerSample, Transition};
