// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the toast surface.
//!
//! The surface renders as a dark, rounded scrim card holding the message
//! text, horizontally centered and vertically anchored by fill-portion
//! spacing so no display measurements are needed. Tapping anywhere on the
//! card emits [`Message::SurfaceTapped`] for the notifier's interrupt
//! handler; the widget layer owns gesture recognition, nothing else.

use crate::design_tokens::{opacity, palette, radius, shadow, sizing, typography};
use crate::notifier::Message;
use crate::surface::{layout, Surface};
use iced::widget::{container, mouse_area, text, Column, Container, Space, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast overlay widget configuration.
pub struct ToastOverlay;

impl ToastOverlay {
    /// Renders a single surface as a positioned, tappable card.
    pub fn view(surface: &Surface, anchor: f32, now: Instant) -> Element<'_, Message> {
        let alpha = surface.opacity(now);

        let message_widget = Text::new(surface.message())
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
            });

        let card = Container::new(message_widget)
            .max_width(sizing::TOAST_CONTENT_MAX_WIDTH)
            .padding(sizing::TOAST_MARGIN)
            .style(move |_theme: &Theme| surface_style(alpha));

        let tappable = mouse_area(card).on_press(Message::SurfaceTapped);

        let (above, below) = layout::fill_portions(anchor);
        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(Space::new().height(Length::FillPortion(above)))
            .push(tappable)
            .push(Space::new().height(Length::FillPortion(below)))
            .into()
    }

    /// Renders the overlay: the active surface plus, during hide, the
    /// retiring one still fading out. Stack this over the host's content.
    pub fn view_overlay<'a>(
        active: Option<&'a Surface>,
        retiring: Option<&'a Surface>,
        anchor: f32,
        now: Instant,
    ) -> Element<'a, Message> {
        let surfaces: Vec<&Surface> = retiring.into_iter().chain(active).collect();

        if surfaces.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
            for surface in surfaces {
                stack = stack.push(Self::view(surface, anchor, now));
            }
            stack.into()
        }
    }
}

/// Style function for the surface card.
fn surface_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SCRIM * alpha,
            ..palette::GRAY_900
        })),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn surface_style_scales_scrim_with_surface_alpha() {
        let full = surface_style(1.0);
        let half = surface_style(0.5);

        let alpha_of = |style: &container::Style| match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => panic!("expected a color background"),
        };

        assert_abs_diff_eq!(alpha_of(&full), opacity::SCRIM, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(alpha_of(&half), opacity::SCRIM * 0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn surface_style_is_fully_transparent_when_hidden() {
        let hidden = surface_style(0.0);
        match hidden.background {
            Some(iced::Background::Color(color)) => {
                assert_abs_diff_eq!(color.a, 0.0, epsilon = F32_EPSILON);
            }
            _ => panic!("expected a color background"),
        }
        match hidden.text_color {
            Some(color) => assert_abs_diff_eq!(color.a, 0.0, epsilon = F32_EPSILON),
            None => panic!("expected a text color"),
        }
    }

    #[test]
    fn surface_style_keeps_rounded_corners() {
        let style = surface_style(1.0);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::MD));
    }
}
