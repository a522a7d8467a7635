/// Works page: two gallery grids and the full-window carousel.
///
/// Clips are represented by cards; each card shows its playback state
/// (looping, muted or with sound) as tracked by the carousel session.
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use super::shell::{ACCENT, MUTED_TEXT};
use crate::state::data::{Orientation, WorkItem};
use crate::state::works::{Playback, WorksState};
use crate::Message;

/// Card size for one orientation, scaled for gallery or carousel
fn card_size(orientation: Orientation, scale: f32) -> (f32, f32) {
    let (width, height) = match orientation {
        Orientation::Vertical => (180.0, 320.0),
        Orientation::Horizontal => (400.0, 225.0),
    };
    (width * scale, height * scale)
}

fn playback_label(playback: Playback) -> &'static str {
    match (playback.looping, playback.muted) {
        (true, true) => "LOOP · MUTED",
        (true, false) => "LOOP · SOUND ON",
        (false, true) => "MUTED",
        (false, false) => "SOUND ON",
    }
}

fn work_card<'a>(work: &'a WorkItem, playback: Playback, scale: f32, active: bool) -> Element<'a, Message> {
    let (width, height) = card_size(work.orientation, scale);
    let title_color = if active { Color::WHITE } else { MUTED_TEXT };

    container(
        column![
            text(playback_label(playback)).size(10).color(MUTED_TEXT),
            Space::with_height(Length::Fill),
            text(work.category.to_uppercase()).size(11).color(ACCENT),
            text(work.title.to_uppercase()).size(18).color(title_color),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .style(container::rounded_box)
    .into()
}

fn gallery_section<'a>(state: &'a WorksState, orientation: Orientation) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = state
        .catalog()
        .section(orientation)
        .iter()
        .enumerate()
        .map(|(index, work)| {
            button(work_card(work, Playback::PREVIEW, 1.0, true))
                .style(button::text)
                .padding(0)
                .on_press(Message::OpenWork(orientation, index))
                .into()
        })
        .collect();

    column![
        text(orientation.heading().to_uppercase()).size(20).color(Color::WHITE),
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(24)
    .into()
}

/// Grid of every work, grouped by orientation
pub fn gallery(state: &WorksState) -> Element<'_, Message> {
    container(
        column![
            row![
                column![
                    text("SELECTED").size(72).color(Color::WHITE),
                    text("WORKS").size(72).color(Color::WHITE),
                ],
                horizontal_space(),
                text("SCROLL TO EXPLORE").size(12).color(MUTED_TEXT),
            ]
            .align_y(Alignment::End),
            gallery_section(state, Orientation::Vertical),
            gallery_section(state, Orientation::Horizontal),
        ]
        .spacing(64),
    )
    .padding([48, 32])
    .width(Length::Fill)
    .into()
}

/// Full-window player focused on one work
pub fn carousel(state: &WorksState) -> Element<'_, Message> {
    let Some(selection) = state.selection() else {
        return gallery(state);
    };
    let works = state.current_works();

    let header = row![
        button(text("← BACK TO GALLERY").size(14))
            .style(button::secondary)
            .on_press(Message::BackToGallery),
        horizontal_space(),
        button(text(if state.is_muted() { "UNMUTE" } else { "MUTE" }).size(14))
            .style(button::secondary)
            .on_press(Message::ToggleMute),
        column![
            text(
                state
                    .active_work()
                    .map(|work| work.category.to_uppercase())
                    .unwrap_or_default()
            )
            .size(24)
            .color(Color::WHITE),
            text(state.counter()).size(14).color(MUTED_TEXT),
        ]
        .align_x(Alignment::End),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let track = works
        .iter()
        .enumerate()
        .fold(Row::new().spacing(40).align_y(Alignment::Center), |track, (index, work)| {
            let active = index == selection.index;
            let playback = state.playback(index).unwrap_or(Playback::PREVIEW);
            let card = work_card(work, playback, if active { 1.6 } else { 1.1 }, active);
            if active {
                track.push(card)
            } else {
                track.push(
                    button(card)
                        .style(button::text)
                        .padding(0)
                        .on_press(Message::FocusWork(index)),
                )
            }
        });

    let previous = button(text("‹").size(32)).style(button::secondary);
    let previous = if state.can_go_previous() {
        previous.on_press(Message::PreviousWork)
    } else {
        previous
    };
    let next = button(text("›").size(32)).style(button::secondary);
    let next = if state.can_go_next() {
        next.on_press(Message::NextWork)
    } else {
        next
    };

    let details: Element<'_, Message> = match state.active_work() {
        Some(work) => column![
            text(work.title.to_uppercase()).size(40).color(Color::WHITE),
            text(format!("{}  ·  {}", work.client.to_uppercase(), work.year))
                .size(14)
                .color(MUTED_TEXT),
        ]
        .spacing(8)
        .into(),
        None => Space::with_height(Length::Shrink).into(),
    };

    let dots = (0..works.len()).fold(Row::new().spacing(8), |dots, index| {
        let (width, color) = if index == selection.index {
            (24.0, Color::WHITE)
        } else {
            (6.0, Color::from_rgb8(0x37, 0x41, 0x51))
        };
        dots.push(
            container(Space::new(Length::Fixed(width), Length::Fixed(4.0))).style(move |_theme| {
                container::Style::default().background(color)
            }),
        )
    });

    let body: Column<'_, Message> = column![
        header,
        row![
            previous,
            container(track).width(Length::Fill).center_x(Length::Fill),
            next
        ]
        .spacing(16)
        .align_y(Alignment::Center)
        .height(Length::Fill),
        details,
        container(dots).width(Length::Fill).center_x(Length::Fill),
    ]
    .spacing(24);

    container(body)
        .padding(40)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
