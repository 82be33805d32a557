// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host callbacks fired by the deck.
//!
//! The deck calls its listener synchronously from inside its own event
//! handling. Listeners must return promptly; there is no way for them to
//! suspend the deck.

use core::fmt;

use crate::item::Item;

/// Receives deck lifecycle events.
pub trait DeckListener {
    /// A card was committed. The item is handed over to the host.
    ///
    /// Fires exactly once per committed card, before its exit animation has
    /// finished.
    fn swipe_end(&mut self, item: Item, liked: bool);

    /// The deck has no pending cards left.
    fn empty(&mut self);
}

/// A [`DeckListener`] built from two closures.
///
/// ```
/// use understory_deck::{DeckListener, FnListener, Item};
///
/// let mut liked = Vec::new();
/// let mut done = false;
/// {
///     let mut listener = FnListener::new(
///         |item: Item, yes| if yes { liked.push(item) },
///         || done = true,
///     );
///     listener.swipe_end(Item::new("a", "u"), true);
///     listener.empty();
/// }
/// assert_eq!(liked.len(), 1);
/// assert!(done);
/// ```
pub struct FnListener<S, E> {
    on_swipe_end: S,
    on_empty: E,
}

impl<S, E> FnListener<S, E>
where
    S: FnMut(Item, bool),
    E: FnMut(),
{
    /// Binds the two callbacks.
    pub fn new(on_swipe_end: S, on_empty: E) -> Self {
        Self {
            on_swipe_end,
            on_empty,
        }
    }
}

impl<S, E> DeckListener for FnListener<S, E>
where
    S: FnMut(Item, bool),
    E: FnMut(),
{
    fn swipe_end(&mut self, item: Item, liked: bool) {
        (self.on_swipe_end)(item, liked);
    }

    fn empty(&mut self) {
        (self.on_empty)();
    }
}

impl<S, E> fmt::Debug for FnListener<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

/// A listener that keeps score for one round of swiping.
///
/// Accepted items are kept in swipe order; rejected ones are only counted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwipeTally {
    accepted: Vec<Item>,
    rejected: usize,
    empties: usize,
}

impl SwipeTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted items, in the order they were swiped.
    #[must_use]
    pub fn accepted(&self) -> &[Item] {
        &self.accepted
    }

    /// Number of rejected items.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of items swiped either way.
    #[must_use]
    pub fn swiped(&self) -> usize {
        self.accepted.len() + self.rejected
    }

    /// Returns `true` once the deck has reported that it is empty.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.empties > 0
    }

    /// How many times the deck has reported that it is empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empties
    }

    /// Clears the tally for a new round.
    pub fn reset(&mut self) {
        self.accepted.clear();
        self.rejected = 0;
        self.empties = 0;
    }
}

impl DeckListener for SwipeTally {
    fn swipe_end(&mut self, item: Item, liked: bool) {
        if liked {
            self.accepted.push(item);
        } else {
            self.rejected += 1;
        }
    }

    fn empty(&mut self) {
        self.empties += 1;
    }
}
