// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deck --heading-base-level=0

//! Understory Deck: a swipeable stack of cards.
//!
//! A [`Deck`] presents items one at a time. The top card follows the pointer
//! while dragged and, on release, is either committed (accepted to the right,
//! rejected to the left) or springs back. Committed cards fly off-screen, the
//! host is told about the decision, and the next card becomes interactive.
//! When no cards remain, the host is told the deck is empty.
//!
//! The crate is split along the deck's boundaries:
//!
//! - [`deck`]: the [`Deck`] itself; ordering, commits, timers, and events.
//! - [`item`]: [`Item`] data and the [`CardEntry`] rendered from it.
//! - [`view`]: the [`CardView`] and [`DeckClient`] traits implemented by the host.
//! - [`listener`]: the [`DeckListener`] callbacks, with [`FnListener`] and
//!   [`SwipeTally`] ready-made.
//! - [`timer`]: the host-driven [`TimerQueue`](timer::TimerQueue) behind
//!   exit and spring-back animations.
//!
//! Per-card gesture handling lives in `understory_swipe`; its public types are
//! re-exported here.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Affine;
//! use understory_deck::{
//!     CardView, CardVisual, Deck, Feedback, Item, PointerId, PointerSample, SwipeConfig,
//!     SwipeTally, Transition,
//! };
//!
//! struct Card(bool);
//!
//! impl CardVisual for Card {
//!     fn set_transition(&mut self, _: Option<Transition>) {}
//!     fn set_transform(&mut self, _: Affine) {}
//!     fn set_feedback(&mut self, _: Feedback) {}
//!     fn capture_pointer(&mut self, _: PointerId) {}
//!     fn release_pointer(&mut self, _: PointerId) {}
//!     fn detach(&mut self) {
//!         self.0 = false;
//!     }
//!     fn is_attached(&self) -> bool {
//!         self.0
//!     }
//! }
//!
//! struct View;
//!
//! impl CardView for View {
//!     type Visual = Card;
//!     fn render(&mut self, _: &Item, _: usize, _: usize) -> Card {
//!         Card(true)
//!     }
//!     fn clear(&mut self) {}
//! }
//!
//! let mut deck = Deck::new(View, SwipeTally::new(), SwipeConfig::default());
//! deck.add_cards([Item::new("a", "https://example.com/a.jpg"), Item::new("b", "")]);
//!
//! // Drag "a" 150px to the right and let go.
//! let finger = PointerId(0);
//! deck.pointer_down(PointerSample::at_x(finger, 100.0, 0));
//! deck.pointer_move(PointerSample::at_x(finger, 250.0, 16));
//! deck.pointer_up(PointerSample::at_x(finger, 250.0, 32));
//! assert_eq!(deck.listener().accepted()[0].id(), "a");
//!
//! // Reject "b" with a button and let the animations finish.
//! deck.reject(40);
//! deck.advance(1_000);
//! assert!(deck.listener().is_finished());
//! ```

pub mod deck;
pub mod item;
pub mod listener;
pub mod timer;
pub mod view;

pub use deck::Deck;
pub use item::{CardEntry, CardKey, Item};
pub use listener::{DeckListener, FnListener, SwipeTally};
pub use view::{CardView, DeckClient, stack_z};

pub use understory_swipe::{
    CardVisual, DragSession, Feedback, GestureController, GestureState, PointerId, PointerSample,
    Release, SwipeConfig, Transition,
};
