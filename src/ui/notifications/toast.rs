// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as small
//! cards with a kind-colored accent, a title line, the message text, and a
//! dismiss button. A toast in its closing phase fades out before removal.

use super::manager::{Manager, Message};
use super::notification::{Body, Notification};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let kind = notification.kind();
        let closing = notification.is_closing();
        let accent_color = faded(kind.color(), closing);

        // Resolve the message text; flash messages carry literal text while
        // client-triggered notifications carry localization keys
        let message_text = match notification.body() {
            Body::Text(text) => text.clone(),
            Body::Key { key, args } => {
                if args.is_empty() {
                    i18n.tr(key)
                } else {
                    let args: Vec<(&str, &str)> = args
                        .iter()
                        .map(|(k, v)| (k.as_str(), v.as_str()))
                        .collect();
                    i18n.tr_with_args(key, &args)
                }
            }
        };

        // An explicit title wins over the per-kind default
        let title_text = match notification.title_override() {
            Some(title) => title.to_string(),
            None => i18n.tr(kind.title_key()),
        };

        let icon_widget = icons::sized(kind.icon(), sizing::ICON_MD).color(accent_color);

        let title_widget = Text::new(title_text)
            .size(typography::BODY)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            })
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, closing)),
            });

        let message_widget =
            Text::new(message_text)
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, closing)),
                });

        let content_column = Column::new()
            .spacing(spacing::XXS)
            .push(title_widget)
            .push(message_widget);

        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(styles::button::subtle);

        // Layout: [icon] [title + message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(content_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, closing))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Toasts stack in the bottom-right corner in display order: the oldest
    /// sits on top of the stack, the newest is appended at the bottom.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .active()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Applies the closing-phase fade to a color.
fn faded(color: Color, closing: bool) -> Color {
    if closing {
        Color {
            a: color.a * opacity::TOAST_CLOSING,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, closing: bool) -> container::Style {
    let bg_color = faded(theme.extended_palette().background.base.color, closing);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
