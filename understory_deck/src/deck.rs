// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deck: an ordered stack of pending cards with one interactive top card.
//!
//! ## Lifecycle
//!
//! 1) [`Deck::add_cards`] renders a batch through the [`CardView`] and makes
//!    the first card interactive.
//! 2) Pointer events go through [`Deck::pointer_down`], [`Deck::pointer_move`],
//!    [`Deck::pointer_up`], and [`Deck::pointer_cancel`]. They reach the
//!    single [`GestureController`] attached to the top card.
//! 3) A release past the threshold, or [`Deck::swipe`], commits the top card:
//!    it leaves `pending`, the listener gets
//!    [`swipe_end`](DeckListener::swipe_end), and the exit animation starts.
//! 4) The host calls [`Deck::advance`] with its clock. When an exit animation
//!    finishes, its visual is detached and the next card becomes interactive,
//!    or the listener gets [`empty`](DeckListener::empty).
//!
//! No card is interactive while an exit animation is in flight, so input for
//! the next card can never overtake the commit of the previous one.
//!
//! ## Stale timers
//!
//! Timers are never cancelled. Each exit timer remembers the deck epoch it
//! was scheduled in and the card it belongs to; [`Deck::add_cards`] starts a
//! new epoch and clears all visuals, so exit timers from an earlier population
//! complete as no-ops. Spring-back timers remember the controller session
//! they belong to. An exit whose visual the host already removed still
//! completes; only the detach is skipped.

use core::fmt;
use core::num::NonZeroUsize;
use std::collections::VecDeque;

use tracing::{debug, info};
use understory_swipe::{
    CardVisual, GestureController, GestureState, PointerSample, Release, SwipeConfig,
};

use crate::item::{CardEntry, CardKey, Item};
use crate::listener::DeckListener;
use crate::timer::TimerQueue;
use crate::view::{CardView, DeckClient};

/// Viewport width assumed until the host calls [`Deck::set_viewport_width`].
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Continuation {
    ExitComplete { card: CardKey, epoch: u64 },
    SpringBack { card: CardKey, session: u64 },
}

struct ExitingCard<E> {
    key: CardKey,
    element: E,
}

/// Ordered stack of cards, swiped one at a time from the front.
pub struct Deck<V: CardView, L: DeckListener> {
    view: V,
    listener: L,
    config: SwipeConfig,
    viewport_width: f64,
    pending: VecDeque<CardEntry<V::Visual>>,
    exiting: Vec<ExitingCard<V::Visual>>,
    active: Option<GestureController<CardKey>>,
    timers: TimerQueue<Continuation>,
    epoch: u64,
    next_key: u64,
}

impl<V: CardView, L: DeckListener> Deck<V, L> {
    /// Creates an empty deck drawing through `view` and reporting to `listener`.
    ///
    /// The deck stays silent until it is populated or
    /// [`Deck::enable_interaction`] is called.
    pub fn new(view: V, listener: L, config: SwipeConfig) -> Self {
        Self {
            view,
            listener,
            config,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            pending: VecDeque::new(),
            exiting: Vec::new(),
            active: None,
            timers: TimerQueue::new(),
            epoch: 0,
            next_key: 0,
        }
    }

    /// Sets the width used to fly committed cards off-screen.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Replaces every card with a freshly rendered batch and makes the first
    /// one interactive.
    ///
    /// Previously rendered visuals are cleared, including cards still playing
    /// their exit animation. Replaced cards are dropped without
    /// [`swipe_end`](DeckListener::swipe_end). An empty batch fires
    /// [`empty`](DeckListener::empty) right away.
    pub fn add_cards(&mut self, items: impl IntoIterator<Item = Item>) {
        let items: Vec<Item> = items.into_iter().collect();
        let total = items.len();

        self.view.clear();
        self.pending.clear();
        self.exiting.clear();
        self.active = None;
        self.epoch += 1;

        for (stack_index, data) in items.into_iter().enumerate() {
            let element = self.view.render(&data, stack_index, total);
            let key = CardKey(self.next_key);
            self.next_key += 1;
            self.pending.push_back(CardEntry { key, element, data });
        }
        debug!(epoch = self.epoch, total, "deck populated");

        self.enable_interaction();
    }

    /// Fetches up to `limit` items from `client` and populates the deck with them.
    ///
    /// Returns the number of cards added.
    pub fn load_from<C: DeckClient + ?Sized>(
        &mut self,
        client: &mut C,
        limit: NonZeroUsize,
    ) -> usize {
        let batch = client.fetch_batch(limit);
        let count = batch.len();
        self.add_cards(batch);
        count
    }

    /// Makes the top card interactive, or reports an empty deck.
    ///
    /// Calling this while the top card is already interactive keeps its
    /// controller, including any drag in progress.
    pub fn enable_interaction(&mut self) {
        let Some(top) = self.pending.front() else {
            info!("deck is empty");
            self.listener.empty();
            return;
        };
        if self.active.as_ref().map(GestureController::card) == Some(top.key) {
            return;
        }
        debug!(card = %top.key, id = top.data.id(), "card is interactive");
        self.active = Some(GestureController::new(top.key, self.config));
    }

    /// Commits `card` as accepted (`liked`) or rejected.
    ///
    /// Only the top card can be committed. Requests for any other card, for
    /// example a button press racing a drag that already committed, are
    /// ignored and return `false`.
    pub fn commit(&mut self, card: CardKey, liked: bool, time: u64) -> bool {
        if self.pending.front().map(CardEntry::key) != Some(card) {
            debug!(%card, "ignoring commit for a card that is not on top");
            return false;
        }
        let Some(CardEntry {
            key,
            mut element,
            data,
        }) = self.pending.pop_front()
        else {
            return false;
        };
        if let Some(mut controller) = self.active.take() {
            controller.abandon(&mut element);
        }

        info!(%key, id = data.id(), liked, "card committed");
        self.listener.swipe_end(data, liked);

        element.set_transition(Some(self.config.transition()));
        element.set_transform(self.config.exit_transform(liked, self.viewport_width));
        self.exiting.push(ExitingCard { key, element });
        self.timers.schedule(
            time.saturating_add(self.config.animation_ms),
            Continuation::ExitComplete {
                card: key,
                epoch: self.epoch,
            },
        );
        true
    }

    /// Commits the top card as if it had been dragged past the threshold.
    ///
    /// Returns `false` on an empty deck.
    pub fn swipe(&mut self, liked: bool, time: u64) -> bool {
        match self.pending.front().map(CardEntry::key) {
            Some(card) => self.commit(card, liked, time),
            None => false,
        }
    }

    /// Accepts the top card; the "like" button.
    pub fn accept(&mut self, time: u64) -> bool {
        self.swipe(true, time)
    }

    /// Rejects the top card; the "nope" button.
    pub fn reject(&mut self, time: u64) -> bool {
        self.swipe(false, time)
    }

    /// Routes a pointer-down to the interactive card. Returns `true` if a drag started.
    pub fn pointer_down(&mut self, sample: PointerSample) -> bool {
        match self.interactive() {
            Some((controller, element)) => controller.pointer_down(element, sample),
            None => false,
        }
    }

    /// Routes a pointer-move to the interactive card. Returns the drag offset if it moved.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<f64> {
        let (controller, element) = self.interactive()?;
        controller.pointer_move(element, sample)
    }

    /// Routes a pointer-up to the interactive card and acts on the decision.
    pub fn pointer_up(&mut self, sample: PointerSample) -> Release {
        let Some((controller, element)) = self.interactive() else {
            return Release::Ignored;
        };
        let release = controller.pointer_up(element, sample);
        let card = controller.card();
        let session = controller.session_id();
        match release {
            Release::Commit { liked } => {
                self.commit(card, liked, sample.time);
            }
            Release::Reset => {
                debug!(%card, "drag released short of the threshold");
                self.timers.schedule(
                    sample.time.saturating_add(self.config.animation_ms),
                    Continuation::SpringBack { card, session },
                );
            }
            Release::Ignored => {}
        }
        release
    }

    /// Routes a pointer-cancel; decided exactly like [`Deck::pointer_up`].
    pub fn pointer_cancel(&mut self, sample: PointerSample) -> Release {
        self.pointer_up(sample)
    }

    /// Runs every timer due at `now`, in deadline order. Returns how many ran.
    pub fn advance(&mut self, now: u64) -> usize {
        let mut fired = 0;
        while let Some(continuation) = self.timers.pop_due(now) {
            fired += 1;
            match continuation {
                Continuation::ExitComplete { card, epoch } => self.finish_exit(card, epoch),
                Continuation::SpringBack { card, session } => {
                    if let Some(controller) = self.active.as_mut()
                        && controller.card() == card
                    {
                        controller.finish_reset(session);
                    }
                }
            }
        }
        fired
    }

    fn finish_exit(&mut self, card: CardKey, epoch: u64) {
        if epoch != self.epoch {
            debug!(%card, "exit timer from an earlier deck ignored");
            return;
        }
        let Some(index) = self.exiting.iter().position(|e| e.key == card) else {
            return;
        };
        let mut exiting = self.exiting.remove(index);
        if exiting.element.is_attached() {
            exiting.element.detach();
        } else {
            debug!(%card, "exiting card was already detached by the host");
        }
        // Overlapping exits advance the deck once, when the last one lands.
        if self.exiting.is_empty() {
            self.enable_interaction();
        }
    }

    fn interactive(&mut self) -> Option<(&mut GestureController<CardKey>, &mut V::Visual)> {
        let controller = self.active.as_mut()?;
        let top = self.pending.front_mut()?;
        debug_assert_eq!(
            controller.card(),
            top.key,
            "the interactive card is always the top card"
        );
        Some((controller, &mut top.element))
    }

    /// Number of pending cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no cards are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The top card, interactive or about to be.
    #[must_use]
    pub fn top(&self) -> Option<&CardEntry<V::Visual>> {
        self.pending.front()
    }

    /// Pending items, top first.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pending.iter().map(CardEntry::data)
    }

    /// Key of the card with an attached gesture controller.
    #[must_use]
    pub fn interactive_card(&self) -> Option<CardKey> {
        self.active.as_ref().map(GestureController::card)
    }

    /// Phase of the interactive card's gesture.
    #[must_use]
    pub fn gesture_state(&self) -> Option<GestureState> {
        self.active.as_ref().map(GestureController::state)
    }

    /// Number of committed cards whose exit animation is still running.
    #[must_use]
    pub fn exiting_len(&self) -> usize {
        self.exiting.len()
    }

    /// When the host should next call [`Deck::advance`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// The view cards are rendered through.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The listener, mutably; for example to reset a tally between rounds.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}

impl<V: CardView, L: DeckListener> fmt::Debug for Deck<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("pending", &self.pending.len())
            .field("exiting", &self.exiting.len())
            .field("interactive", &self.interactive_card())
            .field("timers", &self.timers.len())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}
