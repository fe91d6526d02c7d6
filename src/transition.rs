// SPDX-License-Identifier: MPL-2.0
//! Entrance/exit transition kinds and their style mapping.
//!
//! [`style`] is the pure mapping from a transition kind, an animation
//! progress value and an anchor position to the visual adjustments applied
//! while a snackbar enters or leaves: an opacity multiplier and a draw
//! offset in logical pixels.

use iced::Vector;

use crate::design_tokens::sizing;
use crate::position::{Horizontal, Vertical};

/// Animation style used for snackbar entrance and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    /// Fade the snackbar in and out in place.
    #[default]
    Fade,
    /// Slide the snackbar in from the anchored edge.
    Slide,
}

/// Computed visual state of a snackbar at a given animation progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    /// Alpha multiplier applied on top of the variant color.
    pub opacity: f32,
    /// Draw offset relative to the resting position.
    pub offset: Vector,
}

impl TransitionStyle {
    /// Fully settled: opaque and at the resting position.
    pub const RESTING: Self = Self {
        opacity: 1.0,
        offset: Vector::ZERO,
    };
}

/// Maps a transition kind and progress (0.0 = fully hidden, 1.0 = fully
/// shown) to the style adjustments for the given anchor.
///
/// Slide travel runs along the horizontal axis for left/right anchors and
/// along the vertical axis otherwise; the vertical anchor picks the travel
/// direction, as the original "animation direction" contract requires.
#[must_use]
pub fn style(
    transition: Transition,
    progress: f32,
    vertical: Vertical,
    horizontal: Horizontal,
) -> TransitionStyle {
    let progress = progress.clamp(0.0, 1.0);

    match transition {
        Transition::Fade => TransitionStyle {
            opacity: progress,
            offset: Vector::ZERO,
        },
        Transition::Slide => {
            let travel = sizing::SNACKBAR_SLIDE_DISTANCE * (1.0 - progress);
            let offset = if horizontal.slide_sign() != 0.0 {
                Vector::new(horizontal.slide_sign() * travel, 0.0)
            } else {
                Vector::new(0.0, vertical.slide_sign() * travel)
            };

            TransitionStyle {
                opacity: 1.0,
                offset,
            }
        }
    }
}
