use crate::message::Message;
use crate::model::{BadgeTone, StatusIcon, WorklistEntry};
use iced::widget::text::Wrapping;
use iced::widget::{container, row, text, Container};
use iced::{Alignment, Background, Color, Theme};

pub fn status_badge(entry: &WorklistEntry) -> Container<'_, Message> {
    let tone = entry.badge_tone();
    let content = row![
        text(icon_glyph(entry.status_icon())).size(12),
        text(&entry.status).size(12).wrapping(Wrapping::None),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    container(content)
        .padding([2, 8])
        .style(move |theme| badge_style(theme, tone))
}

pub fn icon_glyph(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Check => "✔",
        StatusIcon::Pending => "◷",
    }
}

struct BadgePalette {
    background: Color,
    text: Color,
    border: Color,
}

fn badge_palette(tone: BadgeTone) -> BadgePalette {
    match tone {
        BadgeTone::Success => BadgePalette {
            background: Color::from_rgb8(0xf0, 0xfd, 0xf4),
            text: Color::from_rgb8(0x15, 0x80, 0x3d),
            border: Color::from_rgb8(0xbb, 0xf7, 0xd0),
        },
        BadgeTone::InProgress => BadgePalette {
            background: Color::from_rgb8(0xff, 0xfb, 0xeb),
            text: Color::from_rgb8(0xb4, 0x53, 0x09),
            border: Color::from_rgb8(0xfd, 0xe6, 0x8a),
        },
        BadgeTone::Neutral => BadgePalette {
            background: Color::from_rgb8(0xf8, 0xfa, 0xfc),
            text: Color::from_rgb8(0x33, 0x41, 0x55),
            border: Color::from_rgb8(0xe2, 0xe8, 0xf0),
        },
    }
}

fn badge_style(_theme: &Theme, tone: BadgeTone) -> container::Style {
    let palette = badge_palette(tone);

    container::Style {
        text_color: Some(palette.text),
        background: Some(Background::Color(palette.background)),
        border: iced::border::Border {
            color: palette.border,
            width: 1.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tone_has_distinct_colors() {
        let success = badge_palette(BadgeTone::Success);
        let pending = badge_palette(BadgeTone::InProgress);
        let neutral = badge_palette(BadgeTone::Neutral);
        assert_ne!(success.background, pending.background);
        assert_ne!(pending.background, neutral.background);
        assert_ne!(success.text, neutral.text);
    }

    #[test]
    fn in_progress_uses_the_pending_glyph() {
        let in_progress = WorklistEntry {
            status: "In Progress".into(),
            ..Default::default()
        };
        let unknown = WorklistEntry {
            status: "Archived".into(),
            ..Default::default()
        };
        assert_eq!(
            icon_glyph(in_progress.status_icon()),
            icon_glyph(unknown.status_icon())
        );
        assert_ne!(icon_glyph(StatusIcon::Check), icon_glyph(StatusIcon::Pending));
    }
}
