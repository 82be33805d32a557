// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for deck integration tests: a view whose cards record
//! what the deck writes to them, and a listener that logs events in order.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Affine;
use understory_deck::{
    CardView, CardVisual, Deck, DeckListener, Feedback, Item, PointerId, PointerSample,
    SwipeConfig, Transition, stack_z,
};

#[derive(Debug)]
pub struct CardState {
    pub id: String,
    pub z: usize,
    pub attached: bool,
    pub transform: Affine,
    pub feedback: Feedback,
    pub transition: Option<Transition>,
    pub captured: Option<PointerId>,
}

pub type SharedCard = Rc<RefCell<CardState>>;

#[derive(Debug)]
pub struct RecordedCard(SharedCard);

impl CardVisual for RecordedCard {
    fn set_transition(&mut self, transition: Option<Transition>) {
        self.0.borrow_mut().transition = transition;
    }
    fn set_transform(&mut self, transform: Affine) {
        self.0.borrow_mut().transform = transform;
    }
    fn set_feedback(&mut self, feedback: Feedback) {
        self.0.borrow_mut().feedback = feedback;
    }
    fn capture_pointer(&mut self, pointer: PointerId) {
        self.0.borrow_mut().captured = Some(pointer);
    }
    fn release_pointer(&mut self, pointer: PointerId) {
        let mut card = self.0.borrow_mut();
        if card.captured == Some(pointer) {
            card.captured = None;
        }
    }
    fn detach(&mut self) {
        self.0.borrow_mut().attached = false;
    }
    fn is_attached(&self) -> bool {
        self.0.borrow().attached
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub cards: Vec<SharedCard>,
    pub clears: usize,
}

impl RecordingView {
    /// The most recently rendered card for `id`.
    pub fn card(&self, id: &str) -> SharedCard {
        self.cards
            .iter()
            .rev()
            .find(|c| c.borrow().id == id)
            .cloned()
            .unwrap_or_else(|| panic!("no card rendered for {id}"))
    }
}

impl CardView for RecordingView {
    type Visual = RecordedCard;

    fn render(&mut self, item: &Item, stack_index: usize, total: usize) -> RecordedCard {
        let card = Rc::new(RefCell::new(CardState {
            id: item.id().to_owned(),
            z: stack_z(stack_index, total),
            attached: true,
            transform: Affine::IDENTITY,
            feedback: Feedback::Neutral,
            transition: None,
            captured: None,
        }));
        self.cards.push(Rc::clone(&card));
        RecordedCard(card)
    }

    fn clear(&mut self) {
        for card in self.cards.drain(..) {
            card.borrow_mut().attached = false;
        }
        self.clears += 1;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SwipeEnd(String, bool),
    Empty,
}

#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn empties(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Empty).count()
    }

    pub fn swipes(&self) -> usize {
        self.events.len() - self.empties()
    }
}

impl DeckListener for EventLog {
    fn swipe_end(&mut self, item: Item, liked: bool) {
        self.events
            .push(Event::SwipeEnd(item.id().to_owned(), liked));
    }

    fn empty(&mut self) {
        self.events.push(Event::Empty);
    }
}

pub type TestDeck = Deck<RecordingView, EventLog>;

pub const FINGER: PointerId = PointerId(1);

pub fn swipe(id: &str, liked: bool) -> Event {
    Event::SwipeEnd(id.to_owned(), liked)
}

pub fn items(ids: &[&str]) -> Vec<Item> {
    ids.iter()
        .map(|id| Item::new(*id, format!("https://example.com/{id}.jpg")))
        .collect()
}

pub fn deck_with(ids: &[&str]) -> TestDeck {
    let mut deck = Deck::new(
        RecordingView::default(),
        EventLog::default(),
        SwipeConfig::default(),
    );
    deck.add_cards(items(ids));
    deck
}

pub fn top_id(deck: &TestDeck) -> Option<String> {
    deck.top().map(|c| c.data().id().to_owned())
}

/// Drags the interactive card by `offset` pixels starting at `time` and
/// releases it. Returns the time of the release.
pub fn drag(deck: &mut TestDeck, offset: f64, time: u64) -> u64 {
    let start = 200.0;
    deck.pointer_down(PointerSample::at_x(FINGER, start, time));
    deck.pointer_move(PointerSample::at_x(FINGER, start + offset / 2.0, time + 8));
    deck.pointer_move(PointerSample::at_x(FINGER, start + offset, time + 16));
    deck.pointer_up(PointerSample::at_x(FINGER, start + offset, time + 24));
    time + 24
}

/// Asserts that, outside exit animations, only the top card is interactive.
pub fn assert_top_is_interactive(deck: &TestDeck) {
    if deck.exiting_len() == 0 {
        assert_eq!(
            deck.interactive_card(),
            deck.top().map(|c| c.key()),
            "the top card, and only it, is interactive"
        );
    }
}
