/// Static content pages: Home, About, Contact and Store
use iced::widget::{button, column, container, row, text, Column, Image, Space};
use iced::{Color, Element, Length};
use iced_aw::Wrap;

use super::assets::AssetCache;
use super::shell::{ACCENT, MUTED_TEXT};
use crate::state::data::{StoreItem, MERCH, PRINTS};
use crate::state::navigation::Page;
use crate::Message;

fn heading<'a>(lines: &'a [&'a str]) -> Element<'a, Message> {
    lines
        .iter()
        .fold(Column::new(), |column, line| {
            column.push(text(line.to_uppercase()).size(72).color(Color::WHITE))
        })
        .into()
}

fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding([48, 32])
        .width(Length::Fill)
        .into()
}

/// Landing page. `hero_images` are the preloaded stills in manifest order.
pub fn home<'a>(assets: &'a AssetCache, hero_images: &'a [String]) -> Element<'a, Message> {
    let stills: Vec<Element<'a, Message>> = assets
        .select(hero_images)
        .map(|handle| {
            Image::new(handle.clone())
                .width(Length::Fixed(260.0))
                .height(Length::Fixed(170.0))
                .into()
        })
        .collect();
    let strip = Wrap::with_elements(stills).spacing(12.0).line_spacing(12.0);

    let calls_to_action = row![
        button(text("VIEW WORKS").size(14))
            .padding([12, 24])
            .style(button::primary)
            .on_press(Message::Navigate(Page::Works)),
        button(text("START A PROJECT").size(14))
            .padding([12, 24])
            .style(button::secondary)
            .on_press(Message::Navigate(Page::Contact)),
    ]
    .spacing(16);

    column![
        section(
            column![
                text("VIDEO PRODUCTION STUDIO").size(14).color(ACCENT),
                heading(&["We make", "motion that sells."]),
                text("Short-form reels, brand films and cinematic travel work, shot and cut in-house.")
                    .size(18)
                    .color(MUTED_TEXT),
                calls_to_action,
            ]
            .spacing(24)
        ),
        section(strip),
    ]
    .into()
}

pub fn about<'a>() -> Element<'a, Message> {
    let philosophy = [
        "Cian Cinematic was born from a desire to break the mold of traditional production. \
         In a world saturated with content, only the boldest visuals survive. We combine \
         high-end cinematography with fast-paced editing techniques to create work that \
         demands attention.",
        "From the streets of Tokyo to the coastlines of California, our lens has no boundaries. \
         We are storytellers, adrenaline junkies, and perfectionists dedicated to elevating your \
         brand to the stratosphere.",
        "We believe that every frame matters. Whether it's a 15-second social spot or a \
         full-length documentary, we bring the same level of intensity and precision to every \
         project.",
    ];

    column![
        section(
            column![
                heading(&["We are", "Cian Cinematic."]),
                text("A collective of creators pushing the boundaries of what's possible in digital media.")
                    .size(20)
                    .color(MUTED_TEXT),
            ]
            .spacing(24)
        ),
        section(
            column![
                text("OUR PHILOSOPHY").size(14).color(ACCENT),
                text("We don't just capture moments; we manufacture emotions.")
                    .size(36)
                    .color(Color::WHITE),
                philosophy
                    .into_iter()
                    .fold(Column::new().spacing(16), |column, paragraph| {
                        column.push(text(paragraph).size(16).color(MUTED_TEXT))
                    }),
            ]
            .spacing(24)
        ),
    ]
    .into()
}

pub fn contact<'a>() -> Element<'a, Message> {
    let channels = [
        ("PROJECTS", "Commercials, launches and brand films"),
        ("SOCIAL", "Reels, shorts and always-on content"),
        ("TRAVEL", "Destination and tourism campaigns"),
    ];

    section(
        column![
            heading(&["Let's", "talk."]),
            text("Tell us about the story you want to tell. We reply within two working days.")
                .size(18)
                .color(MUTED_TEXT),
            channels
                .into_iter()
                .fold(Column::new().spacing(12), |column, (label, detail)| {
                    column.push(
                        row![
                            text(label).size(14).color(ACCENT).width(Length::Fixed(120.0)),
                            text(detail).size(16).color(Color::WHITE),
                        ]
                        .spacing(16),
                    )
                }),
        ]
        .spacing(24),
    )
}

fn product_card<'a>(item: &'a StoreItem, assets: &'a AssetCache) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match assets.get(item.image) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(240.0))
            .height(Length::Fixed(300.0))
            .into(),
        None => container(text("Loading…").size(12).color(MUTED_TEXT))
            .width(Length::Fixed(240.0))
            .height(Length::Fixed(300.0))
            .center_x(Length::Fixed(240.0))
            .center_y(Length::Fixed(300.0))
            .style(container::rounded_box)
            .into(),
    };

    let mut details = column![
        text(item.category.to_uppercase()).size(11).color(ACCENT),
        text(item.name).size(18).color(Color::WHITE),
        text(item.price).size(14).color(MUTED_TEXT),
    ]
    .spacing(4);
    if let Some(size) = item.size {
        details = details.push(text(format!("{size} in")).size(12).color(MUTED_TEXT));
    }

    // Checkout is not offered, the button stays disabled
    column![picture, details, button(text("ADD TO CART").size(12))]
        .spacing(10)
        .width(Length::Fixed(240.0))
        .into()
}

fn shelf<'a>(title: &'a str, items: &'a [StoreItem], assets: &'a AssetCache) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = items
        .iter()
        .map(|item| product_card(item, assets))
        .collect();

    column![
        text(title).size(20).color(Color::WHITE),
        Wrap::with_elements(cards).spacing(24.0).line_spacing(32.0),
    ]
    .spacing(20)
    .into()
}

pub fn store(assets: &AssetCache) -> Element<'_, Message> {
    column![
        section(
            column![
                heading(&["The", "Collection."]),
                text("Professional grade prints and exclusive merchandise. Designed for creators.")
                    .size(18)
                    .color(MUTED_TEXT),
            ]
            .spacing(16)
        ),
        section(
            column![
                shelf("PRINTS", PRINTS, assets),
                Space::with_height(Length::Fixed(24.0)),
                shelf("MERCH", MERCH, assets),
            ]
        ),
    ]
    .into()
}

/// Every product image the Store shows
pub fn store_images() -> impl Iterator<Item = &'static str> {
    PRINTS.iter().chain(MERCH.iter()).map(|item| item.image)
}
