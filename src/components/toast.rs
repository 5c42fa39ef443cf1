use crate::message::Message;
use crate::notifications::{Level, Notification};
use iced::alignment::Horizontal;
use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Background, Element, Length, Theme};

const TOAST_WIDTH: f32 = 320.0;

/// Notifications stacked in the top-right corner, oldest at the top.
pub fn toast_stack(notifications: &[Notification]) -> Element<'_, Message> {
    let toasts = notifications
        .iter()
        .fold(Column::new().spacing(8), |column, notification| {
            column.push(toast(notification))
        });

    container(toasts)
        .width(Length::Fill)
        .padding(16)
        .align_x(Horizontal::Right)
        .into()
}

fn toast(notification: &Notification) -> Element<'_, Message> {
    let level = notification.level;
    let body = row![
        text(&notification.text)
            .size(14)
            .wrapping(Wrapping::Word)
            .width(Length::Fill),
        button(text("×").size(14))
            .padding([0, 6])
            .style(button::text)
            .on_press(Message::DismissNotification(notification.id)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(column![body])
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(12)
        .style(move |theme: &Theme| toast_style(theme, level))
        .into()
}

fn toast_style(theme: &Theme, level: Level) -> container::Style {
    let palette = theme.extended_palette();
    let pair = match level {
        Level::Success => palette.success.base,
        Level::Error => palette.danger.base,
    };

    container::Style {
        background: Some(Background::Color(pair.color)),
        text_color: Some(pair.text),
        border: Border {
            color: pair.color.scale_alpha(0.8),
            width: 1.0,
            radius: Radius::new(8.0),
        },
        ..Default::default()
    }
}
