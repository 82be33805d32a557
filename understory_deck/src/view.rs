// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundaries to the host: card rendering and batch supply.
//!
//! Both traits describe external collaborators. The deck only calls them; it
//! never inspects what a view draws or where a client gets its items.

use core::num::NonZeroUsize;

use understory_swipe::CardVisual;

use crate::item::Item;

/// Builds the visual for one item.
///
/// Implementations should:
///
/// - layer the visual so that `stack_index == 0` is on top (see [`stack_z`]),
/// - tag it with the item's id for lookup and debugging,
/// - disable any native drag-image behavior so the deck's gesture handling is
///   the only source of movement.
pub trait CardView {
    /// The visual handle produced by [`CardView::render`].
    type Visual: CardVisual;

    /// Renders `item` at position `stack_index` of a stack of `total` cards.
    fn render(&mut self, item: &Item, stack_index: usize, total: usize) -> Self::Visual;

    /// Detaches every visual this view has rendered so far.
    fn clear(&mut self);
}

/// Layering order for a card: larger is nearer the viewer.
///
/// The card at `stack_index == 0` gets the largest value.
#[must_use]
pub fn stack_z(stack_index: usize, total: usize) -> usize {
    total.saturating_sub(stack_index)
}

/// Supplies batches of items.
///
/// Under normal operation a client returns at least one item. A client that
/// cannot reach its data should return a placeholder batch rather than an
/// empty one; the deck treats an empty batch as an exhausted deck.
pub trait DeckClient {
    /// Fetches up to `limit` items, in presentation order.
    fn fetch_batch(&mut self, limit: NonZeroUsize) -> Vec<Item>;
}

impl<F> DeckClient for F
where
    F: FnMut(NonZeroUsize) -> Vec<Item>,
{
    fn fetch_batch(&mut self, limit: NonZeroUsize) -> Vec<Item> {
        self(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_is_on_top() {
        assert_eq!(stack_z(0, 3), 3);
        assert_eq!(stack_z(2, 3), 1);
        assert!(stack_z(0, 3) > stack_z(1, 3));
    }

    #[test]
    fn closures_are_clients() {
        let mut client = |limit: NonZeroUsize| -> Vec<Item> {
            (0..limit.get())
                .map(|i| Item::new(format!("{i}"), ""))
                .collect()
        };
        let batch = DeckClient::fetch_batch(&mut client, NonZeroUsize::new(2).unwrap());
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].id(), "1");
    }
}
