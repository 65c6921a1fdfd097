//! Toolbar component
//!
//! Field selection buttons plus previous/next navigation between beam cases.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use diag_core::calculations::Field;

use crate::Message;

/// Render the toolbar for the current selection
pub fn view_toolbar<'a>(selected: Field, case_label: &'a str, case_index: usize, case_count: usize) -> Element<'a, Message> {
    let field_buttons = Field::ALL.iter().fold(row![].spacing(4), |buttons, field| {
        buttons.push(
            button(text(field.display_name()).size(11))
                .on_press(Message::SelectField(*field))
                .padding(Padding::from([4, 8]))
                .style(if *field == selected { button::primary } else { button::secondary }),
        )
    });

    let mut case_nav = row![].spacing(4).align_y(Alignment::Center);
    if case_count > 1 {
        case_nav = case_nav
            .push(
                button(text("<").size(11))
                    .on_press(Message::PreviousCase)
                    .padding(Padding::from([4, 8]))
                    .style(button::secondary),
            )
            .push(text(format!("{}/{}", case_index + 1, case_count)).size(11))
            .push(
                button(text(">").size(11))
                    .on_press(Message::NextCase)
                    .padding(Padding::from([4, 8]))
                    .style(button::secondary),
            );
    }

    row![
        field_buttons,
        Space::new().width(Length::Fill),
        text(case_label).size(14),
        case_nav,
    ]
    .spacing(8)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
