// SPDX-License-Identifier: MPL-2.0
//! Anchor positions for snackbars and their container.
//!
//! The (vertical, horizontal) pair determines both where the container
//! anchors its content and which direction the slide transition travels.

use iced::alignment;

/// Vertical anchor of a snackbar within the overlay region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    Top,
    #[default]
    Bottom,
}

/// Horizontal anchor of a snackbar within the overlay region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    Left,
    #[default]
    Center,
    Right,
}

impl Vertical {
    /// Alignment of the overlay content along the vertical axis.
    #[must_use]
    pub fn alignment(&self) -> alignment::Vertical {
        match self {
            Vertical::Top => alignment::Vertical::Top,
            Vertical::Bottom => alignment::Vertical::Bottom,
        }
    }

    /// Direction sign of vertical slide travel, away from the anchored edge.
    pub(crate) fn slide_sign(&self) -> f32 {
        match self {
            Vertical::Top => -1.0,
            Vertical::Bottom => 1.0,
        }
    }
}

impl Horizontal {
    /// Alignment of the overlay content along the horizontal axis.
    #[must_use]
    pub fn alignment(&self) -> alignment::Horizontal {
        match self {
            Horizontal::Left => alignment::Horizontal::Left,
            Horizontal::Center => alignment::Horizontal::Center,
            Horizontal::Right => alignment::Horizontal::Right,
        }
    }

    /// Direction sign of horizontal slide travel, zero when centered.
    pub(crate) fn slide_sign(&self) -> f32 {
        match self {
            Horizontal::Left => -1.0,
            Horizontal::Center => 0.0,
            Horizontal::Right => 1.0,
        }
    }
}
