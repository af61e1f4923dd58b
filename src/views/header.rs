use crate::components::card_style;
use crate::message::Message;
use iced::widget::{container, text};
use iced::{Alignment, Element, Length};

pub fn header_panel() -> Element<'static, Message> {
    container(text("Modality Emulator").size(28))
        .width(Length::Fill)
        .height(Length::Fixed(96.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(card_style)
        .into()
}
