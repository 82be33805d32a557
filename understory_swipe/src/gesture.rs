// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture controller: the drag-to-swipe state machine for one card.
//!
//! ## States
//!
//! ```text
//!            pointer-down                 up/cancel, |offset| > threshold
//!   Idle ─────────────────▶ Dragging ─────────────────────────────────▶ Committing
//!    ▲                        │  ▲
//!    │   spring-back done     │  │ pointer-down
//!    └──────── Resetting ◀────┘  │ (interrupts the spring-back)
//!              │   up/cancel, |offset| <= threshold
//!              └─────────────────┘
//! ```
//!
//! - Pointer-up and pointer-cancel are the same transition; there is no
//!   "abort" path that neither commits nor resets.
//! - Only the contact that started a session drives it. A second finger, a
//!   move before any down, or an up while idle are no-ops reported as
//!   [`Release::Ignored`] (or `None`/`false`).
//! - `Committing` is terminal: the owner removes the card and drops the
//!   controller.
//! - `Resetting` lasts for the spring-back animation. The owner schedules a
//!   timer and calls [`GestureController::finish_reset`] with the session id
//!   that was current at release; a newer session makes that call a no-op.
//!
//! The controller is generic over the key `K` of the card it tracks. It holds
//! only that key, never the card itself: every call borrows the card's
//! [`CardVisual`] for the duration of the call.
//!
//! ## Spring-back example
//!
//! ```
//! use kurbo::Affine;
//! use understory_swipe::{
//!     CardVisual, Feedback, GestureController, GestureState, PointerId, PointerSample, Release,
//!     SwipeConfig, Transition,
//! };
//!
//! # struct Card { transform: Affine, feedback: Feedback }
//! # impl CardVisual for Card {
//! #     fn set_transition(&mut self, _: Option<Transition>) {}
//! #     fn set_transform(&mut self, t: Affine) { self.transform = t; }
//! #     fn set_feedback(&mut self, f: Feedback) { self.feedback = f; }
//! #     fn capture_pointer(&mut self, _: PointerId) {}
//! #     fn release_pointer(&mut self, _: PointerId) {}
//! #     fn detach(&mut self) {}
//! #     fn is_attached(&self) -> bool { true }
//! # }
//! let mut card = Card { transform: Affine::IDENTITY, feedback: Feedback::Neutral };
//! let mut gesture = GestureController::new("b", SwipeConfig::default());
//! let p = PointerId(1);
//!
//! gesture.pointer_down(&mut card, PointerSample::at_x(p, 300.0, 0));
//! gesture.pointer_move(&mut card, PointerSample::at_x(p, 250.0, 10));
//! assert_eq!(card.feedback, Feedback::Negative(0.25));
//!
//! assert_eq!(gesture.pointer_up(&mut card, PointerSample::at_x(p, 250.0, 20)), Release::Reset);
//! assert_eq!(card.transform, Affine::IDENTITY);
//! assert_eq!(gesture.state(), GestureState::Resetting);
//!
//! assert!(gesture.finish_reset(gesture.session_id()));
//! assert_eq!(gesture.state(), GestureState::Idle);
//! ```

use kurbo::Affine;

use crate::config::SwipeConfig;
use crate::drag::DragSession;
use crate::visual::{CardVisual, Feedback, PointerSample};

/// Phase of a [`GestureController`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// A pointer is driving the card.
    Dragging,
    /// The drag was released past the threshold; the card is leaving.
    Committing,
    /// The drag was released short of the threshold; the card is springing back.
    Resetting,
}

/// Outcome of a pointer-up or pointer-cancel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// The event did not end a session of this controller.
    Ignored,
    /// The drag crossed the threshold; `liked` is `true` for a rightward drag.
    Commit {
        /// Direction of the commit.
        liked: bool,
    },
    /// The drag stayed within the threshold and the card was reset.
    Reset,
}

/// Drag-to-swipe state machine bound to one card.
#[derive(Clone, Debug)]
pub struct GestureController<K> {
    card: K,
    config: SwipeConfig,
    state: GestureState,
    session: Option<DragSession>,
    sessions: u64,
}

impl<K: Copy> GestureController<K> {
    /// Creates an idle controller tracking `card`.
    #[must_use]
    pub fn new(card: K, config: SwipeConfig) -> Self {
        Self {
            card,
            config,
            state: GestureState::Idle,
            session: None,
            sessions: 0,
        }
    }

    /// Key of the tracked card.
    #[must_use]
    pub fn card(&self) -> K {
        self.card
    }

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// The live drag session, if a pointer is down.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Identifier of the most recent session; increases with every pointer-down.
    #[must_use]
    pub fn session_id(&self) -> u64 {
        self.sessions
    }

    /// Current horizontal offset, or zero when no session is live.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.session.map_or(0.0, |s| s.current_offset)
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Handles pointer-down. Returns `true` if a session started.
    pub fn pointer_down<V: CardVisual + ?Sized>(
        &mut self,
        visual: &mut V,
        sample: PointerSample,
    ) -> bool {
        match self.state {
            GestureState::Idle | GestureState::Resetting => {}
            GestureState::Dragging | GestureState::Committing => return false,
        }
        self.sessions += 1;
        self.session = Some(DragSession::start(sample.pointer, sample.position.x));
        self.state = GestureState::Dragging;
        visual.set_transition(None);
        visual.capture_pointer(sample.pointer);
        true
    }

    /// Handles pointer-move. Returns the new offset if the sample drove the card.
    pub fn pointer_move<V: CardVisual + ?Sized>(
        &mut self,
        visual: &mut V,
        sample: PointerSample,
    ) -> Option<f64> {
        if self.state != GestureState::Dragging {
            return None;
        }
        let session = self
            .session
            .as_mut()
            .filter(|s| s.accepts(sample.pointer))?;
        let offset = session.update(sample.position.x);
        visual.set_transform(self.config.drag_transform(offset));
        visual.set_feedback(self.config.feedback(offset));
        Some(offset)
    }

    /// Handles pointer-up and decides between commit and spring-back.
    ///
    /// The decision uses the offset of the last move; the up position itself
    /// is not applied.
    pub fn pointer_up<V: CardVisual + ?Sized>(
        &mut self,
        visual: &mut V,
        sample: PointerSample,
    ) -> Release {
        if self.state != GestureState::Dragging {
            return Release::Ignored;
        }
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.accepts(sample.pointer))
        else {
            return Release::Ignored;
        };
        let offset = session.end();
        self.session = None;

        visual.set_transition(Some(self.config.transition()));
        visual.release_pointer(sample.pointer);

        if self.config.is_commit(offset) {
            self.state = GestureState::Committing;
            Release::Commit { liked: offset > 0.0 }
        } else {
            visual.set_transform(Affine::IDENTITY);
            visual.set_feedback(Feedback::Neutral);
            self.state = GestureState::Resetting;
            Release::Reset
        }
    }

    /// Handles pointer-cancel, which ends a session exactly like pointer-up.
    pub fn pointer_cancel<V: CardVisual + ?Sized>(
        &mut self,
        visual: &mut V,
        sample: PointerSample,
    ) -> Release {
        self.pointer_up(visual, sample)
    }

    /// Completes the spring-back of session `session_id`.
    ///
    /// Returns `true` if the controller went back to [`GestureState::Idle`].
    pub fn finish_reset(&mut self, session_id: u64) -> bool {
        if self.state == GestureState::Resetting && self.sessions == session_id {
            self.state = GestureState::Idle;
            true
        } else {
            false
        }
    }

    /// Retires the controller because its card is being committed by other
    /// means (for example a button press during a drag).
    ///
    /// A live session is ended without a decision: pointer capture is
    /// released and the transition restored so the exit animation plays.
    pub fn abandon<V: CardVisual + ?Sized>(&mut self, visual: &mut V) {
        if let Some(mut session) = self.session.take() {
            session.end();
            visual.set_transition(Some(self.config.transition()));
            visual.release_pointer(session.pointer);
        }
        self.state = GestureState::Committing;
    }
}
