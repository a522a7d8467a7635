/// Splash screen shown while the preload gate runs
use iced::widget::canvas::{self, Canvas};
use iced::widget::{column, container, row, text};
use iced::{Alignment, Color, Element, Length, Point, Rectangle, Size};

use crate::Message;

/// One sweep of the loading bar, in seconds
pub const SWEEP_SECONDS: f32 = 1.5;

/// Indeterminate loading bar: a segment that grows, crosses the track and
/// shrinks away once per sweep
#[derive(Debug, Clone, Copy)]
pub struct LoadingBar {
    /// Position within the current sweep, 0.0 to 1.0
    pub phase: f32,
}

impl LoadingBar {
    /// Horizontal extent of the segment as fractions of the track width
    pub fn segment(&self) -> (f32, f32) {
        let phase = self.phase.rem_euclid(1.0);
        let width = 1.0 - (2.0 * phase - 1.0).abs();
        let start = (phase - width / 2.0).max(0.0);
        let end = (phase + width / 2.0).min(1.0);
        (start, end)
    }
}

impl canvas::Program<Message> for LoadingBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Track
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb8(0x1f, 0x29, 0x37));

        let (start, end) = self.segment();
        if end > start {
            frame.fill_rectangle(
                Point::new(start * bounds.width, 0.0),
                Size::new((end - start) * bounds.width, bounds.height),
                Color::WHITE,
            );
        }

        vec![frame.into_geometry()]
    }
}

pub fn view<'a>(bar: LoadingBar) -> Element<'a, Message> {
    let wordmark = row![
        text("ORBIT").size(56).color(Color::WHITE),
        text("VISUALS").size(56).color(Color::from_rgb8(0x6b, 0x72, 0x80)),
    ];

    let content = column![
        wordmark,
        Canvas::new(bar)
            .width(Length::Fixed(192.0))
            .height(Length::Fixed(2.0)),
        text("INITIALIZING EXPERIENCE")
            .size(12)
            .color(Color::from_rgb8(0x4b, 0x55, 0x63)),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
