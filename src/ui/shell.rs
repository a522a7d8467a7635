use iced::widget::{button, column, container, horizontal_space, row, text, Row};
use iced::{Alignment, Color, Element, Length};

use crate::state::navigation::{Navigator, Page};
use crate::Message;

/// Grey used for secondary copy across the app
pub const MUTED_TEXT: Color = Color::from_rgb(0.61, 0.64, 0.69);

/// Orange used for categories and highlights
pub const ACCENT: Color = Color::from_rgb(0.98, 0.45, 0.09);

fn wordmark<'a>(size: u16) -> Element<'a, Message> {
    row![
        text("ORBIT").size(size).color(Color::WHITE),
        text("VISUALS").size(size).color(MUTED_TEXT),
    ]
    .into()
}

/// Top bar: brand on the left, one button per reachable page
pub fn navbar(navigator: &Navigator) -> Element<'_, Message> {
    let links = navigator.pages().fold(Row::new().spacing(8), |links, page| {
        let style: fn(&iced::Theme, button::Status) -> button::Style = if page == navigator.current() {
            button::primary
        } else {
            button::text
        };
        links.push(
            button(text(page.label().to_uppercase()).size(14))
                .style(style)
                .on_press(Message::Navigate(page)),
        )
    });

    container(
        row![
            button(wordmark(22))
                .style(button::text)
                .on_press(Message::Navigate(Page::Home)),
            horizontal_space(),
            links,
        ]
        .align_y(Alignment::Center),
    )
    .padding([16, 32])
    .width(Length::Fill)
    .into()
}

/// Bottom bar with the same links and a sign-off
pub fn footer(navigator: &Navigator) -> Element<'_, Message> {
    let links = navigator.pages().fold(Row::new().spacing(4), |links, page| {
        links.push(
            button(text(page.label()).size(13).color(MUTED_TEXT))
                .style(button::text)
                .on_press(Message::Navigate(page)),
        )
    });

    container(
        column![
            row![wordmark(18), horizontal_space(), links].align_y(Alignment::Center),
            text("Cinematography, edits and visual identity for brands that move.")
                .size(13)
                .color(MUTED_TEXT),
        ]
        .spacing(12),
    )
    .padding([40, 32])
    .width(Length::Fill)
    .into()
}
