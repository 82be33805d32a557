// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between gesture logic and whatever draws a card.
//!
//! A [`GestureController`](crate::GestureController) never draws anything. It
//! writes a small set of properties to a [`CardVisual`]: a transition (or
//! none, while the pointer is driving the card directly), an affine transform,
//! and a directional [`Feedback`] hint. It also asks the visual to capture and
//! release the pointer so that move/up events keep arriving while the pointer
//! is outside the card's bounds.

use kurbo::{Affine, Point};
use peniko::Color;

/// Host-assigned identifier of one pointer contact.
///
/// Mice usually have a single stable id; touch screens assign one per finger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// One pointer event as seen by the gesture logic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// The contact this sample belongs to.
    pub pointer: PointerId,
    /// Pointer position in the card's parent coordinate space.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub time: u64,
}

impl PointerSample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(pointer: PointerId, position: Point, time: u64) -> Self {
        Self {
            pointer,
            position,
            time,
        }
    }

    /// Creates a sample at horizontal coordinate `x` (vertical position zero).
    ///
    /// Swiping only looks at the horizontal axis, so this is often all a host
    /// or a test needs.
    #[must_use]
    pub fn at_x(pointer: PointerId, x: f64, time: u64) -> Self {
        Self::new(pointer, Point::new(x, 0.0), time)
    }
}

/// Animated easing applied to transform writes.
///
/// `None` in [`CardVisual::set_transition`] means writes apply instantly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Duration of the ease curve, in milliseconds.
    pub duration_ms: u64,
}

/// Directional hint shown while a card is dragged.
///
/// Intensities are in `0.0..=1.0`, although the default configuration
/// saturates at half intensity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Feedback {
    /// No hint; the card's resting look.
    #[default]
    Neutral,
    /// Dragged to the right (towards "accept").
    Positive(f64),
    /// Dragged to the left (towards "reject").
    Negative(f64),
}

impl Feedback {
    /// Accent of the positive hint (teal).
    pub const POSITIVE_COLOR: Color = Color::from_rgba8(78, 205, 196, 255);
    /// Accent of the negative hint (coral).
    pub const NEGATIVE_COLOR: Color = Color::from_rgba8(255, 107, 107, 255);

    /// Returns the hint intensity; zero for [`Feedback::Neutral`].
    #[must_use]
    pub fn intensity(self) -> f64 {
        match self {
            Self::Neutral => 0.0,
            Self::Positive(i) | Self::Negative(i) => i,
        }
    }

    /// Returns the glow color to draw for this hint, with its intensity as alpha.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "intensity is within 0..=1, well inside f32 precision"
        )]
        let alpha = self.intensity() as f32;
        match self {
            Self::Neutral => None,
            Self::Positive(_) => Some(Self::POSITIVE_COLOR.multiply_alpha(alpha)),
            Self::Negative(_) => Some(Self::NEGATIVE_COLOR.multiply_alpha(alpha)),
        }
    }
}

/// A drawable card, as seen by the gesture and deck logic.
///
/// Implementations are expected to be cheap handles; every method is called
/// on the main event turn and must not block.
pub trait CardVisual {
    /// Enables an eased transition for subsequent transform writes, or
    /// disables it so writes apply instantly.
    fn set_transition(&mut self, transition: Option<Transition>);

    /// Sets the card's transform relative to its resting position.
    fn set_transform(&mut self, transform: Affine);

    /// Sets the directional hint.
    fn set_feedback(&mut self, feedback: Feedback);

    /// Routes all further events of `pointer` to this card.
    fn capture_pointer(&mut self, pointer: PointerId);

    /// Undoes [`CardVisual::capture_pointer`].
    fn release_pointer(&mut self, pointer: PointerId);

    /// Removes the card from the host's visual tree.
    fn detach(&mut self);

    /// Returns `true` until the card has been detached, either through
    /// [`CardVisual::detach`] or by the host clearing its container.
    fn is_attached(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_feedback_has_no_color() {
        assert_eq!(Feedback::Neutral.intensity(), 0.0);
        assert_eq!(Feedback::Neutral.color(), None);
    }

    #[test]
    fn feedback_color_carries_intensity_as_alpha() {
        let c = Feedback::Positive(0.5).color().unwrap();
        assert_eq!(c, Feedback::POSITIVE_COLOR.multiply_alpha(0.5));

        let c = Feedback::Negative(0.25).color().unwrap();
        assert_eq!(c, Feedback::NEGATIVE_COLOR.multiply_alpha(0.25));
    }

    #[test]
    fn at_x_places_sample_on_horizontal_axis() {
        let s = PointerSample::at_x(PointerId(3), 42.0, 7);
        assert_eq!(s.position, Point::new(42.0, 0.0));
        assert_eq!(s.pointer, PointerId(3));
        assert_eq!(s.time, 7);
    }
}
