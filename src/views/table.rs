use crate::message::Message;
use crate::model::LayoutMode;
use iced::widget::text::Wrapping;
use iced::widget::{column, container, horizontal_space, row, text, text_input, Row};
use iced::{Alignment, Element, Length, Theme};

const SEARCH_WIDTH: f32 = 280.0;
const PLACEHOLDER_HEIGHT: f32 = 256.0;

pub type ColumnSpec = (&'static str, u16);

pub fn header_row(columns: &[ColumnSpec]) -> Row<'static, Message> {
    columns
        .iter()
        .fold(Row::new().spacing(12), |header, &(title, portion)| {
            header.push(
                text(title.to_uppercase())
                    .size(12)
                    .style(text::secondary)
                    .width(Length::FillPortion(portion)),
            )
        })
}

pub fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .align_y(Alignment::Center)
        .into()
}

pub fn text_cell<'a>(value: impl text::IntoFragment<'a>, portion: u16) -> Element<'a, Message> {
    cell(text(value).size(14).wrapping(Wrapping::Word), portion)
}

/// Section heading with the search box beside it, or under it when compact.
pub fn section_header<'a>(
    title: &'a str,
    placeholder: &'a str,
    search: &'a str,
    on_search: fn(String) -> Message,
    layout: LayoutMode,
) -> Element<'a, Message> {
    let heading = text(title).size(20);
    let search_box = text_input(placeholder, search)
        .on_input(on_search)
        .padding(8);

    if layout.is_compact() {
        column![heading, search_box.width(Length::Fill)]
            .spacing(12)
            .into()
    } else {
        row![
            heading,
            horizontal_space(),
            search_box.width(Length::Fixed(SEARCH_WIDTH))
        ]
        .align_y(Alignment::Center)
        .into()
    }
}

pub fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).style(text::secondary))
        .width(Length::Fill)
        .height(Length::Fixed(PLACEHOLDER_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}

pub fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14).wrapping(Wrapping::Word))
        .width(Length::Fill)
        .padding(10)
        .style(|theme: &Theme| {
            let pair = theme.extended_palette().danger.weak;
            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                ..container::rounded_box(theme)
            }
        })
        .into()
}

pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
