use crate::message::Message;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, text, Button};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Start,
    Stop,
    Primary,
}

/// A filled button that greys out when `on_press` is `None`.
pub fn action_button(
    label: &'static str,
    tone: ButtonTone,
    on_press: Option<Message>,
    width: Length,
) -> Button<'static, Message> {
    let content = container(text(label).size(14).wrapping(Wrapping::None))
        .width(width)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([8, 16]);

    button(content)
        .width(width)
        .padding(0)
        .on_press_maybe(on_press)
        .style(move |theme, status| action_button_style(theme, status, tone))
}

fn tone_colors(tone: ButtonTone) -> (Color, Color) {
    match tone {
        ButtonTone::Start => (
            Color::from_rgb8(0x16, 0xa3, 0x4a),
            Color::from_rgb8(0x15, 0x80, 0x3d),
        ),
        ButtonTone::Stop => (
            Color::from_rgb8(0xdc, 0x26, 0x26),
            Color::from_rgb8(0xb9, 0x1c, 0x1c),
        ),
        ButtonTone::Primary => (
            Color::from_rgb8(0x25, 0x63, 0xeb),
            Color::from_rgb8(0x1d, 0x4e, 0xd8),
        ),
    }
}

fn action_button_style(
    theme: &Theme,
    status: button::Status,
    tone: ButtonTone,
) -> button::Style {
    let palette = theme.extended_palette();
    let (base, hovered) = tone_colors(tone);

    let (background_color, text_color, border_color) = match status {
        button::Status::Active => (base, Color::WHITE, base),
        button::Status::Hovered | button::Status::Pressed => (hovered, Color::WHITE, hovered),
        button::Status::Disabled => (
            palette.background.weak.color,
            palette.background.strong.color,
            palette.background.strong.color.scale_alpha(0.6),
        ),
    };

    button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: border_color,
            width: 1.0,
            radius: iced::border::Radius::new(8.0),
        },
        shadow: Shadow::default(),
    }
}
