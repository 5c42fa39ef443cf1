use crate::message::Message;
use crate::model::{DetectionRecord, Doctor, ImagePreview, PreviewState};
use crate::utils::format_date;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, horizontal_space, row, text, Image};
use iced::{Alignment, Element, Length};

const DIALOG_WIDTH: f32 = 440.0;
const PREVIEW_WIDTH: f32 = 760.0;
const PREVIEW_HEIGHT: f32 = 560.0;

pub fn confirm_delete_doctor(doctor: &Doctor) -> Element<'_, Message> {
    let body = column![
        text(format!(
            "Are you sure you want to permanently delete doctor {}?",
            doctor.name
        ))
        .wrapping(Wrapping::Word),
        text(&doctor.email).size(14),
        text("This action cannot be undone.").size(14),
    ]
    .spacing(6);

    confirm_dialog(body)
}

pub fn confirm_delete_detection(record: &DetectionRecord) -> Element<'_, Message> {
    let subject = format!(
        "{} for {} on {}",
        record.detected_disease,
        record.patient_name().unwrap_or("Unknown Patient"),
        format_date(record.created_at.as_ref()),
    );

    let body = column![
        text("Are you sure you want to permanently delete this detection record?")
            .wrapping(Wrapping::Word),
        text(subject).size(14),
        text("This action cannot be undone.").size(14),
    ]
    .spacing(6);

    confirm_dialog(body)
}

fn confirm_dialog<'a>(body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let body: Element<'a, Message> = body.into();
    let actions = row![
        horizontal_space(),
        button("Cancel")
            .style(button::secondary)
            .on_press(Message::CancelDelete),
        button("Delete")
            .style(button::danger)
            .on_press(Message::ConfirmDelete),
    ]
    .spacing(12);

    container(
        column![text("Confirm Delete").size(22), body, actions].spacing(18),
    )
    .width(Length::Fixed(DIALOG_WIDTH))
    .padding(24)
    .style(container::rounded_box)
    .into()
}

pub fn image_preview(preview: &ImagePreview) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &preview.state {
        PreviewState::Loading => text("Loading image…").into(),
        PreviewState::Ready(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        PreviewState::Failed(err) => text(format!("Could not load image: {err}"))
            .wrapping(Wrapping::Word)
            .into(),
    };

    let frame = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    container(
        column![
            frame,
            button("Close")
                .style(button::primary)
                .on_press(Message::CloseImage)
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(PREVIEW_WIDTH))
    .padding(12)
    .style(container::rounded_box)
    .into()
}
