// SPDX-License-Identifier: MPL-2.0
//! The anchored overlay region for snackbars.
//!
//! [`SnackbarContainer`] spans the whole window and aligns its children to
//! one of the six (vertical, horizontal) anchors. It draws nothing itself
//! and only the children react to input, so content underneath stays
//! interactive. Layering above the rest of the application is the caller's
//! side of the contract, via [`SnackbarContainer::overlay`] or Iced's
//! `stack` directly.

use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

use crate::design_tokens::spacing;
use crate::position::{Horizontal, Vertical};

/// Full-screen region anchoring snackbars to an edge or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnackbarContainer {
    vertical: Vertical,
    horizontal: Horizontal,
}

impl SnackbarContainer {
    /// Creates a container anchored at the default bottom-center position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertical anchor.
    #[must_use]
    pub fn vertical(mut self, vertical: Vertical) -> Self {
        self.vertical = vertical;
        self
    }

    /// Sets the horizontal anchor.
    #[must_use]
    pub fn horizontal(mut self, horizontal: Horizontal) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Current vertical anchor.
    #[must_use]
    pub fn vertical_anchor(&self) -> Vertical {
        self.vertical
    }

    /// Current horizontal anchor.
    #[must_use]
    pub fn horizontal_anchor(&self) -> Horizontal {
        self.horizontal
    }

    /// Renders the anchored region with the given snackbars stacked at the
    /// anchor, newest last.
    pub fn view<'a, Message: 'a>(
        &self,
        children: impl IntoIterator<Item = Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let column = Column::with_children(children.into_iter().collect::<Vec<_>>())
            .spacing(spacing::XS)
            .align_x(self.horizontal.alignment());

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(self.horizontal.alignment())
            .align_y(self.vertical.alignment())
            .padding(spacing::MD)
            .into()
    }

    /// Layers the anchored region above `base`, lifting the snackbars over
    /// the rest of the screen content.
    pub fn overlay<'a, Message: 'a>(
        &self,
        base: Element<'a, Message>,
        children: impl IntoIterator<Item = Element<'a, Message>>,
    ) -> Element<'a, Message> {
        Stack::with_children(vec![base, self.view(children)]).into()
    }
}
