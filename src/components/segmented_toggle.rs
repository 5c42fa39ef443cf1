use crate::message::Message;
use crate::model::{LayoutMode, Screen};
use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Button, Container};
use iced::{Alignment, Background, Color, Element, Length, Shadow, Theme};

const OUTER_RADIUS: f32 = 999.0;
const INNER_RADIUS: f32 = 10.0;

/// Screen switcher: a vertical pill beside the content, or a horizontal one
/// when the sidebar sits below it.
pub fn screen_toggle(current: Screen, layout: LayoutMode) -> Container<'static, Message> {
    let last = Screen::ALL.len() - 1;
    let width = if layout.is_compact() {
        Length::FillPortion(1)
    } else {
        Length::Fill
    };

    let options: Vec<Element<'static, Message>> = Screen::ALL
        .into_iter()
        .enumerate()
        .map(|(index, screen)| {
            let position = match index {
                0 => SegmentPosition::First,
                i if i == last => SegmentPosition::Last,
                _ => SegmentPosition::Middle,
            };
            segmented_toggle_option(screen, current, position, layout)
                .width(width)
                .into()
        })
        .collect();

    let toggle: Element<'static, Message> = if layout.is_compact() {
        row(options).spacing(0).into()
    } else {
        column(options).spacing(0).into()
    };

    container(toggle)
        .padding(3)
        .width(Length::Fill)
        .style(move |theme| segmented_container_style(theme, layout))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    First,
    Middle,
    Last,
}

fn segmented_toggle_option(
    screen: Screen,
    current: Screen,
    position: SegmentPosition,
    layout: LayoutMode,
) -> Button<'static, Message> {
    let is_active = screen == current;
    let content = container(text(screen.nav_label()).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(36.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .on_press(Message::Navigate(screen))
        .style(move |theme, status| {
            segmented_button_style(theme, status, is_active, position, layout)
        })
}

fn segmented_container_style(theme: &Theme, layout: LayoutMode) -> container::Style {
    let palette = theme.extended_palette();
    let radius = if layout.is_compact() {
        OUTER_RADIUS
    } else {
        INNER_RADIUS * 2.0
    };

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: Radius::new(radius),
        },
        ..Default::default()
    }
}

fn segmented_button_style(
    theme: &Theme,
    status: button::Status,
    is_active: bool,
    position: SegmentPosition,
    layout: LayoutMode,
) -> button::Style {
    let palette = theme.extended_palette();
    let background_color = segment_background(theme, status, is_active);

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: segment_radius(position, layout),
        },
        shadow: Shadow::default(),
    }
}

fn segment_background(theme: &Theme, status: button::Status, is_active: bool) -> Color {
    let palette = theme.extended_palette();
    let (base, alpha) = match (status, is_active) {
        (button::Status::Active, true) => (palette.primary.strong.color, 1.0),
        (button::Status::Active, false) => (palette.background.strong.color, 0.4),
        (button::Status::Hovered, true) => (palette.primary.base.color, 1.0),
        (button::Status::Hovered, false) => (palette.background.base.color, 0.8),
        (button::Status::Pressed, true) => (palette.primary.base.color, 0.9),
        (button::Status::Pressed, false) => (palette.background.base.color, 0.9),
        (button::Status::Disabled, true) => (palette.primary.strong.color, 0.5),
        (button::Status::Disabled, false) => (palette.background.strong.color, 0.2),
    };
    base.scale_alpha(alpha)
}

fn segment_radius(position: SegmentPosition, layout: LayoutMode) -> Radius {
    let (outer, inner) = if layout.is_compact() {
        (OUTER_RADIUS, INNER_RADIUS)
    } else {
        (INNER_RADIUS * 2.0, INNER_RADIUS / 2.0)
    };

    match (position, layout.is_compact()) {
        (SegmentPosition::Middle, _) => Radius::new(inner),
        (SegmentPosition::First, true) => Radius {
            top_left: outer,
            top_right: inner,
            bottom_right: inner,
            bottom_left: outer,
        },
        (SegmentPosition::Last, true) => Radius {
            top_left: inner,
            top_right: outer,
            bottom_right: outer,
            bottom_left: inner,
        },
        (SegmentPosition::First, false) => Radius {
            top_left: outer,
            top_right: outer,
            bottom_right: inner,
            bottom_left: inner,
        },
        (SegmentPosition::Last, false) => Radius {
            top_left: inner,
            top_right: inner,
            bottom_right: outer,
            bottom_left: outer,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_segments_fade_their_resting_colour() {
        let theme = Theme::Dark;
        for is_active in [true, false] {
            let resting = segment_background(&theme, button::Status::Active, is_active);
            let disabled = segment_background(&theme, button::Status::Disabled, is_active);
            assert!((disabled.a - resting.a * 0.5).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn hover_changes_only_the_targeted_segment_colour() {
        let theme = Theme::Dark;
        let active = segment_background(&theme, button::Status::Hovered, true);
        let inactive = segment_background(&theme, button::Status::Hovered, false);
        assert_ne!(active, inactive);
        assert_eq!(active, theme.extended_palette().primary.base.color);
    }

    #[test]
    fn end_segments_round_their_outer_corners() {
        let first = segment_radius(SegmentPosition::First, LayoutMode::SidebarBelow);
        assert_eq!(first.top_left, OUTER_RADIUS);
        assert_eq!(first.top_right, INNER_RADIUS);

        let last = segment_radius(SegmentPosition::Last, LayoutMode::SidebarBeside);
        assert_eq!(last.bottom_left, INNER_RADIUS * 2.0);
        assert_eq!(last.top_left, INNER_RADIUS / 2.0);
    }
}
