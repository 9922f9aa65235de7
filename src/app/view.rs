// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::result;
use crate::ui::upload;
use iced::widget::{Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub upload: &'a upload::State,
    pub result: Option<&'a result::State>,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Upload => ctx.upload.view(ctx.i18n).map(Message::Upload),
        Screen::Result => view_result(ctx.result, ctx.i18n),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn view_result<'a>(result: Option<&'a result::State>, i18n: &'a I18n) -> Element<'a, Message> {
    if let Some(state) = result {
        state.view(i18n).map(Message::Result)
    } else {
        // Fallback if result state is missing
        Container::new(Text::new("Result error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
