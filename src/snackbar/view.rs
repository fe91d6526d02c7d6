// SPDX-License-Identifier: MPL-2.0
//! Rendering for a single snackbar.
//!
//! The card is a row holding the message and an optional action button,
//! painted with the variant color. The transition contributes an alpha
//! multiplier folded into the colors and a draw offset applied by the
//! [`Shifted`] wrapper, so the variant color itself is never animated.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Event, Length, Rectangle, Size, Theme, Vector};

use super::state::{Message, Snackbar};
use crate::design_tokens::{palette, radius, shadow, spacing, typography};

/// Renders a snackbar at its current animation state.
pub fn view(snackbar: &Snackbar) -> iced::Element<'_, Message> {
    if !snackbar.is_visible() {
        // A dismissed instance takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let transition = snackbar.transition_style();
    let background = snackbar.variant_kind().color();
    let opacity = transition.opacity;

    let message = Text::new(snackbar.message())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(palette::ON_SNACKBAR, opacity)),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(label) = snackbar.action_label() {
        let action = button(Text::new(label).size(typography::BODY_SM))
            .on_press(Message::ActionPressed)
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| action_button_style(status, opacity));
        content = content.push(action);
    }

    let mut card = Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |_theme: &Theme| card_style(background, opacity));

    if let Some(max_width) = snackbar.max_width() {
        card = card.max_width(max_width);
    }

    Shifted::new(card).offset(transition.offset).into()
}

/// Style for the snackbar card at the given transition opacity.
fn card_style(background: Color, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(background, opacity))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(faded(palette::ON_SNACKBAR, opacity)),
        ..Default::default()
    }
}

/// Style for the action button; text only, with a subtle hover wash.
fn action_button_style(status: button::Status, opacity: f32) -> button::Style {
    let text_color = faded(palette::ON_SNACKBAR, opacity);

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(faded(palette::WHITE, 0.2 * opacity))),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn is_resting(offset: Vector) -> bool {
    offset.x == 0.0 && offset.y == 0.0
}

/// A widget that wraps content and draws it at an offset from its laid-out
/// position. Layout and hit-testing keep the resting position; the offset
/// only exists while a transition is in flight.
pub struct Shifted<'a, Message, Theme, Renderer> {
    content: iced::Element<'a, Message, Theme, Renderer>,
    offset: Vector,
}

impl<'a, Message, Theme, Renderer> Shifted<'a, Message, Theme, Renderer> {
    /// Creates a new `Shifted` wrapping the given content.
    pub fn new(content: impl Into<iced::Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset: Vector::ZERO,
        }
    }

    /// Sets the draw offset.
    #[must_use]
    pub fn offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Shifted<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if is_resting(self.offset) {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        } else {
            renderer.with_translation(self.offset, |renderer| {
                self.content.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    style,
                    layout,
                    cursor,
                    viewport,
                );
            });
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Shifted<'a, Message, Theme, Renderer>>
    for iced::Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(shifted: Shifted<'a, Message, Theme, Renderer>) -> Self {
        Self::new(shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn card_style_keeps_the_variant_color_channels() {
        let style = card_style(Variant::Error.color(), 0.5);

        match style.background {
            Some(Background::Color(color)) => {
                let expected = Variant::Error.color();
                assert_eq!(color.r, expected.r);
                assert_eq!(color.g, expected.g);
                assert_eq!(color.b, expected.b);
                assert_eq!(color.a, 0.5);
            }
            _ => panic!("expected a solid background"),
        }
    }

    #[test]
    fn card_text_fades_with_the_transition() {
        let opaque = card_style(Variant::Info.color(), 1.0);
        let dimmed = card_style(Variant::Info.color(), 0.25);

        assert_eq!(opaque.text_color.map(|c| c.a), Some(1.0));
        assert_eq!(dimmed.text_color.map(|c| c.a), Some(0.25));
    }

    #[test]
    fn action_button_has_no_background_at_rest() {
        let style = action_button_style(button::Status::Active, 1.0);
        assert!(style.background.is_none());

        let hovered = action_button_style(button::Status::Hovered, 1.0);
        assert!(hovered.background.is_some());
    }

    #[test]
    fn resting_offset_is_detected() {
        assert!(is_resting(Vector::ZERO));
        assert!(!is_resting(Vector::new(0.0, 12.0)));
        assert!(!is_resting(Vector::new(-3.0, 0.0)));
    }
}
