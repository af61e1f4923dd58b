use crate::components::{action_button, card_style, error_banner_style, status_badge, ButtonTone};
use crate::message::Message;
use crate::model::{WorklistEntry, WorklistState};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, horizontal_rule, horizontal_space, row, scrollable, text, Row, Text};
use iced::{Alignment, Element, Length};

const COLUMNS: [(&str, u16); 6] = [
    ("Patient Name", 3),
    ("Patient ID", 2),
    ("Modality", 1),
    ("Study", 3),
    ("Accession", 2),
    ("Status", 2),
];

pub fn fetch_button_label(loading: bool) -> &'static str {
    if loading {
        "Mengambil..."
    } else {
        "Get Worklist"
    }
}

pub fn worklist_panel(state: &WorklistState) -> Element<'_, Message> {
    let on_press = (!state.is_loading()).then_some(Message::FetchWorklist);
    let fetch_button = action_button(
        fetch_button_label(state.is_loading()),
        ButtonTone::Primary,
        on_press,
        Length::Shrink,
    );

    let header = row![text("Worklist").size(18), horizontal_space(), fetch_button]
        .align_y(Alignment::Center)
        .spacing(12);

    let mut content = column![header, horizontal_rule(1.0)].spacing(12);

    if let Some(error) = state.error() {
        content = content.push(
            container(text(error).size(14).wrapping(Wrapping::Word))
                .padding([8, 12])
                .width(Length::Fill)
                .style(error_banner_style),
        );
    }

    let heading = COLUMNS
        .iter()
        .fold(Row::<Message>::new(), |heading, (label, portion)| {
            heading.push(text(*label).size(14).width(Length::FillPortion(*portion)))
        })
        .spacing(12);

    let table = state
        .rows()
        .iter()
        .fold(column![heading, horizontal_rule(1.0)], |table, entry| {
            table.push(entry_row(entry))
        })
        .spacing(8);

    content = content.push(scrollable(table).height(Length::Fill));

    container(content)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(card_style)
        .into()
}

fn entry_row(entry: &WorklistEntry) -> Element<'_, Message> {
    row![
        cell(&entry.name, COLUMNS[0].1),
        cell(&entry.id, COLUMNS[1].1),
        cell(&entry.modality, COLUMNS[2].1),
        cell(&entry.study, COLUMNS[3].1),
        cell(&entry.accession, COLUMNS[4].1),
        container(status_badge(entry)).width(Length::FillPortion(COLUMNS[5].1)),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn cell(value: &str, portion: u16) -> Text<'_> {
    text(value)
        .size(14)
        .wrapping(Wrapping::Word)
        .width(Length::FillPortion(portion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reflects_loading() {
        assert_eq!(fetch_button_label(false), "Get Worklist");
        assert_eq!(fetch_button_label(true), "Mengambil...");
    }
}
