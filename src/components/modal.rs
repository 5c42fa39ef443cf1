use crate::message::Message;
use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element, Theme};

/// Lays `content` over `base` on a dimmed backdrop. Clicking the backdrop
/// emits `on_blur` when one is given; clicks on the content never reach it.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
    backdrop_alpha: f32,
) -> Element<'a, Message> {
    let backdrop = center(opaque(content)).style(move |_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: backdrop_alpha,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    let overlay: Element<'a, Message> = match on_blur {
        Some(message) => opaque(mouse_area(backdrop).on_press(message)),
        None => opaque(backdrop),
    };

    let base: Element<'a, Message> = base.into();
    stack![base, overlay].into()
}
