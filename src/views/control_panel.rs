use crate::components::{action_button, card_style, inset_style, ButtonTone};
use crate::message::Message;
use crate::model::{ControlState, LogLevel};
use iced::widget::{column, container, horizontal_space, row, scrollable, text, Column, Space};
use iced::{Alignment, Background, Color, Element, Length};

const STATUS_DOT: f32 = 10.0;

pub fn control_panel(state: &ControlState) -> Element<'static, Message> {
    let running = state.is_running();

    let modality = column![
        text("Modality").size(13),
        text("CT / MR / CR").size(16),
    ]
    .spacing(2);

    let controls = row![
        action_button(
            "Start Server",
            ButtonTone::Start,
            (!running).then_some(Message::StartServer),
            Length::FillPortion(1),
        ),
        action_button(
            "Stop Server",
            ButtonTone::Stop,
            running.then_some(Message::StopServer),
            Length::FillPortion(1),
        ),
    ]
    .spacing(12);

    let status_row = row![
        status_dot(running),
        text(state.status_label()).size(14),
        horizontal_space(),
        action_button(
            "Kirim 1 Gambar ke PACS",
            ButtonTone::Primary,
            running.then_some(Message::SendImage),
            Length::Shrink,
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let status = container(
        column![
            text("Status").size(13),
            status_row,
            text(format!("Gambar terkirim ke PACS: {}", state.sent_count())).size(14),
        ]
        .spacing(10),
    )
    .padding(14)
    .width(Length::Fill)
    .style(inset_style);

    let log = container(
        column![
            text("Log").size(14),
            scrollable(log_column(state)).height(Length::Fixed(140.0)),
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(inset_style);

    container(column![modality, controls, status, log].spacing(18))
        .padding(20)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

fn log_column(state: &ControlState) -> Column<'static, Message> {
    state
        .log_lines()
        .into_iter()
        .fold(Column::new().spacing(4), |column, line| {
            column.push(text(line.to_string()).size(12).color(log_color(line.level)))
        })
}

fn log_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::from_rgb8(0x47, 0x55, 0x69),
        LogLevel::Running => Color::from_rgb8(0x15, 0x80, 0x3d),
        LogLevel::Stopped => Color::from_rgb8(0x64, 0x74, 0x8b),
        LogLevel::Ok => Color::from_rgb8(0x1d, 0x4e, 0xd8),
    }
}

fn status_dot(running: bool) -> Element<'static, Message> {
    let color = if running {
        Color::from_rgb8(0x22, 0xc5, 0x5e)
    } else {
        Color::from_rgb8(0xcb, 0xd5, 0xe1)
    };

    container(Space::new(Length::Fixed(STATUS_DOT), Length::Fixed(STATUS_DOT)))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(color)),
            border: iced::border::Border {
                radius: iced::border::Radius::new(STATUS_DOT / 2.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
