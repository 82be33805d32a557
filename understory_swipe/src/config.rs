// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe tuning: commit threshold, rotation, feedback, and animation timing.
//!
//! None of these values are semantically load-bearing; they shape how a swipe
//! feels. The defaults match a typical phone-sized card:
//!
//! ```
//! use understory_swipe::SwipeConfig;
//!
//! let config = SwipeConfig::default();
//! assert!(!config.is_commit(100.0));
//! assert!(config.is_commit(-100.5));
//! ```

use kurbo::Affine;

use crate::visual::{Feedback, Transition};

/// Tuning constants for a swipe gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Absolute horizontal offset, in pixels, a drag must exceed to commit.
    pub threshold_px: f64,
    /// Card rotation per pixel of horizontal offset, in degrees.
    pub rotation_factor: f64,
    /// Duration of the exit and spring-back animations, in milliseconds.
    pub animation_ms: u64,
    /// Offset at which feedback would reach full intensity.
    pub feedback_span_px: f64,
    /// Upper bound on feedback intensity.
    pub feedback_max: f64,
    /// How far past the origin an exiting card travels, in viewport widths.
    pub exit_overshoot: f64,
    /// Rotation flourish of an exiting card, in degrees.
    pub exit_rotation_deg: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 100.0,
            rotation_factor: 0.1,
            animation_ms: 300,
            feedback_span_px: 200.0,
            feedback_max: 0.5,
            exit_overshoot: 1.5,
            exit_rotation_deg: 30.0,
        }
    }
}

impl SwipeConfig {
    /// Returns `true` if releasing at `offset` commits the card.
    ///
    /// The threshold itself springs back.
    #[must_use]
    pub fn is_commit(&self, offset: f64) -> bool {
        offset.abs() > self.threshold_px
    }

    /// Transform of a card dragged by `offset`: translate, then tilt.
    #[must_use]
    pub fn drag_transform(&self, offset: f64) -> Affine {
        Affine::translate((offset, 0.0))
            * Affine::rotate((offset * self.rotation_factor).to_radians())
    }

    /// Transform that flies a committed card off-screen in its direction.
    #[must_use]
    pub fn exit_transform(&self, liked: bool, viewport_width: f64) -> Affine {
        let direction = if liked { 1.0 } else { -1.0 };
        Affine::translate((direction * viewport_width * self.exit_overshoot, 0.0))
            * Affine::rotate((direction * self.exit_rotation_deg).to_radians())
    }

    /// Directional hint for a card dragged by `offset`.
    ///
    /// Intensity saturates at [`SwipeConfig::feedback_max`] rather than cutting off.
    #[must_use]
    pub fn feedback(&self, offset: f64) -> Feedback {
        let intensity = (offset.abs() / self.feedback_span_px).min(self.feedback_max);
        if offset > 0.0 {
            Feedback::Positive(intensity)
        } else {
            Feedback::Negative(intensity)
        }
    }

    /// The eased transition used for release animations.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition {
            duration_ms: self.animation_ms,
        }
    }
}
