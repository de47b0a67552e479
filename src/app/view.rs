// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The profile pane fills the window; the toast overlay is layered on top of
//! it so notifications never displace the content underneath.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::profile::AvatarSlot;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::profile_pane;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::path::PathBuf;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub avatar: &'a AvatarSlot,
    pub selected_path: Option<&'a PathBuf>,
    pub notifications: &'a Manager,
}

/// Renders the application view with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let pane = profile_pane::view(profile_pane::ViewContext {
        i18n: ctx.i18n,
        avatar: ctx.avatar,
        selected_file_name: ctx
            .selected_path
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str()),
    })
    .map(Message::ProfilePane);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(pane)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}
