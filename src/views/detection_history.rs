use super::table::{
    card, cell, error_banner, header_row, placeholder, section_header, text_cell, ColumnSpec,
};
use crate::message::Message;
use crate::model::{DetectionRecord, LayoutMode};
use crate::store::Slice;
use crate::utils::format_date;
use iced::border::Radius;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Theme};

const COLUMNS: [ColumnSpec; 5] = [
    ("Patient", 3),
    ("Detected Disease", 3),
    ("Confidence", 1),
    ("Date", 2),
    ("Actions", 2),
];

pub fn detection_history_panel<'a>(
    slice: &'a Slice<DetectionRecord>,
    visible: Vec<&'a DetectionRecord>,
    search: &'a str,
    layout: LayoutMode,
) -> Element<'a, Message> {
    let mut content = column![section_header(
        "All Skin Disease Detections",
        "Search detections...",
        search,
        Message::DetectionSearchChanged,
        layout,
    )]
    .spacing(16);

    if let Some(err) = slice.error() {
        content = content.push(error_banner(err));
    }

    let body = if slice.is_loading() {
        placeholder("Loading detection history…")
    } else if visible.is_empty() {
        placeholder("No detection history found.")
    } else {
        detection_table(visible, layout)
    };

    card(content.push(body))
}

fn detection_table(records: Vec<&DetectionRecord>, layout: LayoutMode) -> Element<'_, Message> {
    let rows = records
        .into_iter()
        .fold(Column::new().spacing(10), |table, record| {
            table.push(detection_row(record, layout))
        });

    column![header_row(&COLUMNS), scrollable(rows).height(Length::Fill)]
        .spacing(12)
        .into()
}

fn detection_row(record: &DetectionRecord, layout: LayoutMode) -> Element<'_, Message> {
    let patient = column![
        text(record.patient_name().unwrap_or("Unknown Patient")).size(14),
        text(record.patient_email().unwrap_or("No email"))
            .size(12)
            .style(text::secondary),
    ]
    .spacing(2);

    let view_label = if layout.is_compact() {
        "View"
    } else {
        "View Image"
    };
    let view_image = button(text(view_label).size(14))
        .style(button::secondary)
        .on_press(Message::OpenImage(record.image_url.clone()));
    let delete = button(text("Delete").size(14))
        .style(button::danger)
        .on_press(Message::RequestDeleteDetection(record.clone()));

    let actions: Element<'_, Message> = if layout.is_compact() {
        column![view_image, delete].spacing(6).into()
    } else {
        row![view_image, delete].spacing(8).into()
    };

    row![
        cell(patient, COLUMNS[0].1),
        cell(disease_badge(&record.detected_disease), COLUMNS[1].1),
        text_cell(record.confidence_label(), COLUMNS[2].1),
        text_cell(format_date(record.created_at.as_ref()), COLUMNS[3].1),
        cell(actions, COLUMNS[4].1),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn disease_badge(label: &str) -> Element<'_, Message> {
    container(text(label).size(13))
        .padding([2, 10])
        .style(|theme: &Theme| {
            let pair = theme.extended_palette().danger.weak;
            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: iced::Border {
                    radius: Radius::new(999.0),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
