// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_deck` crate.
//!
//! These drive a [`Deck`] the way a host would: pointer samples, button
//! swipes, and clock ticks, checking the events it raises and what it writes
//! to the card visuals.

mod common;

use core::num::NonZeroUsize;

use common::*;
use kurbo::Affine;
use understory_deck::{
    Deck, Feedback, GestureState, Item, PointerId, PointerSample, Release, SwipeConfig,
};

const EXIT_MS: u64 = 300;

#[test]
fn drag_past_threshold_commits_then_short_drag_springs_back() {
    let mut deck = deck_with(&["a", "b"]);
    assert_eq!(top_id(&deck).as_deref(), Some("a"));

    let t = drag(&mut deck, 150.0, 0);
    assert_eq!(deck.listener().events, [swipe("a", true)]);
    assert_eq!(top_id(&deck).as_deref(), Some("b"));

    deck.advance(t + EXIT_MS);
    assert_top_is_interactive(&deck);

    let t = drag(&mut deck, -50.0, t + EXIT_MS);
    assert_eq!(deck.listener().events, [swipe("a", true)]);
    assert_eq!(top_id(&deck).as_deref(), Some("b"));

    let b = deck.view().card("b");
    assert_eq!(b.borrow().transform, Affine::IDENTITY);
    assert_eq!(b.borrow().feedback, Feedback::Neutral);
    assert_eq!(deck.gesture_state(), Some(GestureState::Resetting));

    deck.advance(t + EXIT_MS);
    assert_eq!(deck.gesture_state(), Some(GestureState::Idle));
    assert_top_is_interactive(&deck);
}

#[test]
fn button_reject_on_single_card_reports_swipe_then_empty() {
    let mut deck = deck_with(&["x"]);
    assert!(deck.swipe(false, 0));
    assert_eq!(deck.listener().events, [swipe("x", false)]);

    deck.advance(EXIT_MS);
    assert_eq!(deck.listener().events, [swipe("x", false), Event::Empty]);
}

#[test]
fn n_commits_drain_the_deck_and_report_empty_once() {
    let ids = ["1", "2", "3", "4", "5"];
    let mut deck = deck_with(&ids);
    let mut t = 0;
    for (i, _) in ids.iter().enumerate() {
        assert_top_is_interactive(&deck);
        if i % 2 == 0 {
            t = drag(&mut deck, 180.0, t);
        } else {
            deck.reject(t);
        }
        t += EXIT_MS;
        deck.advance(t);
    }
    assert!(deck.is_empty());
    assert_eq!(deck.listener().swipes(), ids.len());
    assert_eq!(deck.listener().empties(), 1);

    // Nothing left to swipe; buttons are no-ops.
    assert!(!deck.accept(t));
    deck.advance(t + EXIT_MS);
    assert_eq!(deck.listener().empties(), 1);
}

#[test]
fn empty_population_reports_empty_every_time_it_is_enabled() {
    let mut deck = deck_with(&[]);
    assert_eq!(deck.listener().events, [Event::Empty]);

    deck.enable_interaction();
    assert_eq!(deck.listener().events, [Event::Empty, Event::Empty]);
    assert_eq!(deck.interactive_card(), None);
}

#[test]
fn button_swipe_matches_manual_drag() {
    let mut by_button = deck_with(&["solo"]);
    by_button.swipe(true, 0);
    by_button.advance(EXIT_MS);

    let mut by_drag = deck_with(&["solo"]);
    let t = drag(&mut by_drag, 150.0, 0);
    by_drag.advance(t + EXIT_MS);

    assert_eq!(by_button.listener().events, by_drag.listener().events);
    assert_eq!(
        by_drag.listener().events,
        [swipe("solo", true), Event::Empty]
    );
}

#[test]
fn committed_card_flies_off_and_is_detached_after_animation() {
    let mut deck = deck_with(&["a", "b"]);
    deck.set_viewport_width(500.0);
    deck.accept(0);

    let a = deck.view().card("a");
    assert!(a.borrow().attached);
    assert_eq!(
        a.borrow().transform,
        SwipeConfig::default().exit_transform(true, 500.0)
    );
    assert_eq!(a.borrow().transition.map(|t| t.duration_ms), Some(EXIT_MS));

    deck.advance(EXIT_MS - 1);
    assert!(a.borrow().attached);
    deck.advance(EXIT_MS);
    assert!(!a.borrow().attached);
}

#[test]
fn exit_completes_even_if_the_host_removed_the_card_first() {
    let mut deck = deck_with(&["a", "b"]);
    deck.accept(0);
    deck.view().card("a").borrow_mut().attached = false;

    deck.advance(EXIT_MS);
    assert_eq!(top_id(&deck).as_deref(), Some("b"));
    assert_top_is_interactive(&deck);

    deck.reject(EXIT_MS);
    deck.view().card("b").borrow_mut().attached = false;
    deck.advance(2 * EXIT_MS);
    assert_eq!(
        deck.listener().events,
        [swipe("a", true), swipe("b", false), Event::Empty]
    );
}

#[test]
fn no_input_reaches_the_next_card_before_exit_completes() {
    let mut deck = deck_with(&["a", "b"]);
    let t = drag(&mut deck, 150.0, 0);

    assert!(!deck.pointer_down(PointerSample::at_x(FINGER, 0.0, t + 1)));
    assert_eq!(deck.pointer_move(PointerSample::at_x(FINGER, 500.0, t + 2)), None);
    assert_eq!(
        deck.pointer_up(PointerSample::at_x(FINGER, 500.0, t + 3)),
        Release::Ignored
    );
    assert_eq!(deck.listener().swipes(), 1);
    assert_eq!(deck.view().card("b").borrow().transform, Affine::IDENTITY);
}

#[test]
fn stale_exit_timer_does_not_advance_a_repopulated_deck() {
    let mut deck = deck_with(&["a", "b"]);
    deck.accept(0);

    deck.add_cards(items(&["c", "d"]));
    assert_eq!(deck.view().card("c").borrow().captured, None);
    deck.pointer_down(PointerSample::at_x(FINGER, 100.0, 100));
    deck.pointer_move(PointerSample::at_x(FINGER, 140.0, 120));

    deck.advance(EXIT_MS);
    assert_eq!(deck.next_deadline(), None);
    assert_eq!(top_id(&deck).as_deref(), Some("c"));
    assert_eq!(deck.gesture_state(), Some(GestureState::Dragging));
    assert_eq!(deck.listener().events, [swipe("a", true)]);
    assert_top_is_interactive(&deck);
}

#[test]
fn repopulating_clears_old_visuals_without_swipe_events() {
    let mut deck = deck_with(&["a", "b"]);
    let a = deck.view().card("a");
    deck.add_cards(items(&["c"]));

    assert!(!a.borrow().attached);
    assert_eq!(deck.view().clears, 2);
    assert!(deck.listener().events.is_empty());
    assert_eq!(deck.len(), 1);
}

#[test]
fn button_during_drag_commits_once_and_releases_capture() {
    let mut deck = deck_with(&["a", "b"]);
    deck.pointer_down(PointerSample::at_x(FINGER, 100.0, 0));
    deck.pointer_move(PointerSample::at_x(FINGER, 260.0, 10));
    let a = deck.view().card("a");
    assert_eq!(a.borrow().captured, Some(FINGER));

    assert!(deck.reject(20));
    assert_eq!(a.borrow().captured, None);

    // The drag's own release arrives late and is ignored.
    assert_eq!(
        deck.pointer_up(PointerSample::at_x(FINGER, 260.0, 30)),
        Release::Ignored
    );
    assert_eq!(deck.listener().events, [swipe("a", false)]);
}

#[test]
fn stale_commit_for_swiped_card_is_ignored() {
    let mut deck = deck_with(&["a", "b"]);
    let a = deck.top().unwrap().key();
    assert!(deck.commit(a, true, 0));
    assert!(!deck.commit(a, true, 1));
    assert_eq!(deck.listener().swipes(), 1);
    assert_eq!(deck.len(), 1);
}

#[test]
fn pointer_capture_spans_the_drag() {
    let mut deck = deck_with(&["a"]);
    let a = deck.view().card("a");

    deck.pointer_down(PointerSample::at_x(FINGER, 10.0, 0));
    assert_eq!(a.borrow().captured, Some(FINGER));
    assert_eq!(a.borrow().transition, None);

    deck.pointer_move(PointerSample::at_x(FINGER, 60.0, 5));
    assert_eq!(a.borrow().feedback, Feedback::Positive(0.25));

    deck.pointer_cancel(PointerSample::at_x(FINGER, 60.0, 9));
    assert_eq!(a.borrow().captured, None);
    assert!(a.borrow().transition.is_some());
    assert_eq!(deck.listener().swipes(), 0);
}

#[test]
fn second_finger_cannot_steer_the_card() {
    let mut deck = deck_with(&["a"]);
    let thumb = PointerId(2);
    deck.pointer_down(PointerSample::at_x(FINGER, 100.0, 0));
    assert!(!deck.pointer_down(PointerSample::at_x(thumb, 0.0, 1)));
    assert_eq!(deck.pointer_move(PointerSample::at_x(thumb, 400.0, 2)), None);
    assert_eq!(
        deck.pointer_up(PointerSample::at_x(thumb, 400.0, 3)),
        Release::Ignored
    );
    assert_eq!(deck.gesture_state(), Some(GestureState::Dragging));
}

#[test]
fn drag_interrupting_spring_back_keeps_the_new_session() {
    let mut deck = deck_with(&["a"]);
    let t = drag(&mut deck, 40.0, 0);
    deck.pointer_down(PointerSample::at_x(FINGER, 100.0, t + 10));

    deck.advance(t + EXIT_MS);
    assert_eq!(deck.gesture_state(), Some(GestureState::Dragging));
}

#[test]
fn cards_stack_with_first_on_top() {
    let deck = deck_with(&["a", "b", "c"]);
    let z: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|id| deck.view().card(id).borrow().z)
        .collect();
    assert_eq!(z, [3, 2, 1]);
}

#[test]
fn malformed_item_is_still_swipeable() {
    let mut deck = deck_with(&[]);
    deck.add_cards([Item::new("broken", "")]);
    assert!(!deck.top().unwrap().data().has_image());

    let t = drag(&mut deck, -120.0, 0);
    deck.advance(t + EXIT_MS);
    assert_eq!(
        deck.listener().events,
        [Event::Empty, swipe("broken", false), Event::Empty]
    );
}

#[test]
fn load_from_client_populates_in_order() {
    let mut deck = Deck::new(
        RecordingView::default(),
        EventLog::default(),
        SwipeConfig::default(),
    );
    let mut client = |limit: NonZeroUsize| -> Vec<Item> {
        (0..limit.get())
            .map(|i| Item::new(format!("cat-{i}"), "https://example.com/cat.jpg"))
            .collect()
    };
    let added = deck.load_from(&mut client, NonZeroUsize::new(3).unwrap());
    assert_eq!(added, 3);
    assert_eq!(top_id(&deck).as_deref(), Some("cat-0"));
    assert_top_is_interactive(&deck);
}

#[test]
fn empty_batch_from_client_reports_empty() {
    let mut deck = Deck::new(
        RecordingView::default(),
        EventLog::default(),
        SwipeConfig::default(),
    );
    let mut client = |_: NonZeroUsize| -> Vec<Item> { Vec::new() };
    assert_eq!(deck.load_from(&mut client, NonZeroUsize::MIN), 0);
    assert_eq!(deck.listener().events, [Event::Empty]);
}

#[test]
fn custom_threshold_is_honored() {
    let config = SwipeConfig {
        threshold_px: 40.0,
        animation_ms: 100,
        ..SwipeConfig::default()
    };
    let mut deck = Deck::new(RecordingView::default(), EventLog::default(), config);
    deck.add_cards(items(&["a"]));

    let t = drag(&mut deck, 50.0, 0);
    assert_eq!(deck.next_deadline(), Some(t + 100));
    deck.advance(t + 100);
    assert_eq!(deck.listener().events, [swipe("a", true), Event::Empty]);
}
