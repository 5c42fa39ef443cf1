use super::table::{
    card, cell, error_banner, header_row, placeholder, section_header, text_cell, ColumnSpec,
};
use crate::message::Message;
use crate::model::{Doctor, LayoutMode};
use crate::store::Slice;
use crate::utils::{format_date, format_experience, initial};
use iced::border::Radius;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Theme};

const COLUMNS: [ColumnSpec; 8] = [
    ("Name", 3),
    ("Email", 3),
    ("Qualification", 2),
    ("Experience", 1),
    ("Location", 2),
    ("Gender", 1),
    ("Joined", 2),
    ("Actions", 1),
];

const AVATAR_SIZE: f32 = 32.0;

pub fn doctors_panel<'a>(
    slice: &'a Slice<Doctor>,
    visible: Vec<&'a Doctor>,
    search: &'a str,
    layout: LayoutMode,
) -> Element<'a, Message> {
    let mut content = column![section_header(
        "All Doctors",
        "Search doctors...",
        search,
        Message::DoctorSearchChanged,
        layout,
    )]
    .spacing(16);

    if let Some(err) = slice.error() {
        content = content.push(error_banner(err));
    }

    let body = if slice.is_loading() {
        placeholder("Loading doctors…")
    } else if visible.is_empty() {
        placeholder("No doctors found.")
    } else {
        doctor_table(visible)
    };

    card(content.push(body))
}

fn doctor_table(doctors: Vec<&Doctor>) -> Element<'_, Message> {
    let rows = doctors
        .into_iter()
        .fold(Column::new().spacing(10), |table, doctor| {
            table.push(doctor_row(doctor))
        });

    column![header_row(&COLUMNS), scrollable(rows).height(Length::Fill)]
        .spacing(12)
        .into()
}

fn doctor_row(doctor: &Doctor) -> Element<'_, Message> {
    let name = row![avatar(&doctor.name), text(&doctor.name).size(14)]
        .spacing(8)
        .align_y(Alignment::Center);

    let delete = button(text("Delete").size(14))
        .style(button::danger)
        .on_press(Message::RequestDeleteDoctor(doctor.clone()));

    row![
        cell(name, COLUMNS[0].1),
        text_cell(&doctor.email, COLUMNS[1].1),
        text_cell(&doctor.qualification, COLUMNS[2].1),
        text_cell(format_experience(doctor.experience), COLUMNS[3].1),
        text_cell(&doctor.location, COLUMNS[4].1),
        text_cell(doctor.gender_label(), COLUMNS[5].1),
        text_cell(format_date(doctor.created_at.as_ref()), COLUMNS[6].1),
        cell(delete, COLUMNS[7].1),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn avatar(name: &str) -> Element<'static, Message> {
    container(text(initial(name)).size(14))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(|theme: &Theme| {
            let pair = theme.extended_palette().success.weak;
            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: iced::Border {
                    radius: Radius::new(AVATAR_SIZE / 2.0),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
