// SPDX-License-Identifier: MPL-2.0
//! Profile pane: the avatar preview slot and the picture chooser.
//!
//! The pane renders the avatar slot in both of its shapes (a decoded preview
//! or the placeholder silhouette), the button that opens the file dialog, and
//! a hint about the accepted formats.

use crate::i18n::fluent::I18n;
use crate::profile::AvatarSlot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Messages emitted by the profile pane.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user asked to pick a new profile picture.
    ChoosePicture,
}

/// Context required to render the profile pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub avatar: &'a AvatarSlot,
    /// File name of the current valid selection, if any.
    pub selected_file_name: Option<&'a str>,
}

/// Renders the profile pane centered in the window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("profile-title")).size(typography::TITLE_MD);

    let avatar = view_avatar(ctx.avatar, ctx.i18n);

    let selection_caption = Text::new(match ctx.selected_file_name {
        Some(name) => name.to_string(),
        None => ctx.i18n.tr("profile-no-selection"),
    })
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    let hint = Text::new(ctx.i18n.tr("profile-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let button_content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::person(), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr("profile-choose-button")));

    let choose_button = button(button_content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ChoosePicture);

    let drop_hint = Text::new(ctx.i18n.tr("profile-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(avatar)
        .push(selection_caption)
        .push(hint)
        .push(choose_button)
        .push(drop_hint);

    let panel = Container::new(content)
        .padding(spacing::XL)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Renders the avatar slot: the preview image when one is loaded, the
/// placeholder silhouette otherwise. Both shapes share the circular frame,
/// so swapping one for the other keeps the pane layout stable.
fn view_avatar<'a>(avatar: &'a AvatarSlot, i18n: &'a I18n) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match avatar {
        AvatarSlot::Image(data) => Image::new(data.handle.clone())
            .width(Length::Fixed(sizing::AVATAR_SIZE))
            .height(Length::Fixed(sizing::AVATAR_SIZE))
            .into(),
        AvatarSlot::Placeholder => icons::sized(icons::person(), sizing::ICON_XL)
            .color(palette::GRAY_400)
            .into(),
    };

    let frame = Container::new(inner)
        .width(Length::Fixed(sizing::AVATAR_SIZE))
        .height(Length::Fixed(sizing::AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::avatar_circle);

    // Caption doubles as the preview's accessible label
    let label = Text::new(i18n.tr("avatar-preview-label"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(frame)
        .push(label)
        .into()
}
