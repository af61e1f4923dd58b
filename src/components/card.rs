use iced::{Background, Color, Shadow, Theme, Vector};

pub fn card_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(12.0),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.05),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

pub fn inset_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color.scale_alpha(0.4))),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

pub fn error_banner_style(_theme: &Theme) -> iced::widget::container::Style {
    iced::widget::container::Style {
        text_color: Some(Color::from_rgb8(0xdc, 0x26, 0x26)),
        background: Some(Background::Color(Color::from_rgb8(0xfe, 0xf2, 0xf2))),
        border: iced::border::Border {
            color: Color::from_rgb8(0xfe, 0xca, 0xca),
            width: 1.0,
            radius: iced::border::Radius::new(6.0),
        },
        ..Default::default()
    }
}
