// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck data: items and the cards rendered from them.

use core::fmt;

/// One data item presented by the deck.
///
/// Items are immutable once created. The deck owns them while they are
/// pending and hands them to the host when they are swiped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    id: String,
    url: String,
}

impl Item {
    /// Creates an item from an opaque unique id and an image URL.
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// The item's opaque unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The item's image URL. May be empty for malformed items.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns `false` for items without a usable image reference.
    ///
    /// Such items are still rendered and swipeable; views may show a broken state.
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Deck-unique identifier of a rendered card. Never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey(pub(crate) u64);

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// A rendered card: its key, its visual handle, and its item.
#[derive(Debug)]
pub struct CardEntry<E> {
    pub(crate) key: CardKey,
    pub(crate) element: E,
    pub(crate) data: Item,
}

impl<E> CardEntry<E> {
    /// The card's key.
    #[must_use]
    pub fn key(&self) -> CardKey {
        self.key
    }

    /// The card's visual handle.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The item this card presents.
    #[must_use]
    pub fn data(&self) -> &Item {
        &self.data
    }
}
