/// Works page view state: grid gallery or focused carousel.
///
/// The carousel is a session. Entering it acquires one playback slot per
/// item in the chosen section plus a drag tracker; leaving it drops them,
/// whichever transition caused the exit.

use super::data::{Catalog, Orientation, WorkItem};
use super::navigation::Effect;
use super::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Gallery,
    Carousel,
}

/// Which item the carousel is focused on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSelection {
    pub section: Orientation,
    pub index: usize,
}

/// Playback state of one media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub muted: bool,
    pub looping: bool,
}

impl Playback {
    /// Inline gallery previews never play sound
    pub const PREVIEW: Playback = Playback {
        muted: true,
        looping: true,
    };
}

/// One carousel move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Keys bound while the carousel is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    Left,
    Right,
    Escape,
}

/// Raw pointer input routed to the carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    /// Mouse moved to this x position
    Moved(f32),
    /// Left button down at the last known cursor position
    Pressed,
    /// Left button up at the last known cursor position
    Released,
    /// Finger down at this x position
    TouchStart(f32),
    /// Finger up at this x position
    TouchEnd(f32),
}

/// Turns a press/release pair into a swipe
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    cursor_x: Option<f32>,
    start_x: Option<f32>,
}

impl DragTracker {
    /// Tracker whose cursor starts where the pointer already is
    pub fn at(cursor_x: Option<f32>) -> Self {
        Self {
            cursor_x,
            start_x: None,
        }
    }

    pub fn cursor_moved(&mut self, x: f32) {
        self.cursor_x = Some(x);
    }

    pub fn press_at(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the drag. A displacement strictly beyond `threshold` is a swipe:
    /// dragging left moves to the next item, dragging right to the previous.
    pub fn release_at(&mut self, x: f32, threshold: f32) -> Option<Step> {
        let start = self.start_x.take()?;
        let displacement = x - start;

        if displacement < -threshold {
            Some(Step::Next)
        } else if displacement > threshold {
            Some(Step::Previous)
        } else {
            None
        }
    }
}

/// Resources owned by one open carousel
#[derive(Debug)]
struct CarouselSession {
    slots: Vec<Playback>,
    drag: DragTracker,
}

/// Gallery/carousel state machine for the Works page
#[derive(Debug)]
pub struct WorksState {
    catalog: Catalog,
    mode: ViewMode,
    /// Kept after returning to the gallery, only read in carousel mode
    selection: ActiveSelection,
    muted: bool,
    session: Option<CarouselSession>,
    /// Last cursor x seen on the Works page, outlives carousel sessions
    cursor_x: Option<f32>,
    swipe_threshold: f32,
    starts_muted: bool,
    reset_mute_on_enter: bool,
}

impl WorksState {
    pub fn new(catalog: Catalog, settings: &Settings) -> Self {
        Self {
            catalog,
            mode: ViewMode::Gallery,
            selection: ActiveSelection {
                section: Orientation::Vertical,
                index: 0,
            },
            muted: settings.carousel_starts_muted,
            session: None,
            cursor_x: None,
            swipe_threshold: settings.swipe_threshold_px,
            starts_muted: settings.carousel_starts_muted,
            reset_mute_on_enter: settings.reset_mute_on_enter,
        }
    }

    /// Back to a fresh gallery. The cursor position is kept.
    pub fn reset(&mut self) {
        self.mode = ViewMode::Gallery;
        self.selection = ActiveSelection {
            section: Orientation::Vertical,
            index: 0,
        };
        self.muted = self.starts_muted;
        self.session = None;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The focused item, only while the carousel is open
    pub fn selection(&self) -> Option<ActiveSelection> {
        match self.mode {
            ViewMode::Carousel => Some(self.selection),
            ViewMode::Gallery => None,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Sequence the carousel is cycling through
    pub fn current_works(&self) -> &'static [WorkItem] {
        self.catalog.section(self.selection.section)
    }

    pub fn active_work(&self) -> Option<&'static WorkItem> {
        self.selection()
            .and_then(|selection| self.catalog.section(selection.section).get(selection.index))
    }

    /// Gallery -> Carousel on the given item. Ignored while the carousel is
    /// already open or when the item does not exist.
    pub fn open(&mut self, section: Orientation, index: usize) -> Effect {
        if self.mode == ViewMode::Carousel {
            return Effect::None;
        }
        let works = self.catalog.section(section);
        if index >= works.len() {
            log::warn!("Ignoring selection of missing work {:?}[{}]", section, index);
            return Effect::None;
        }

        if self.reset_mute_on_enter {
            self.muted = self.starts_muted;
        }
        self.selection = ActiveSelection { section, index };
        self.mode = ViewMode::Carousel;
        self.session = Some(CarouselSession {
            slots: vec![Playback::PREVIEW; works.len()],
            drag: DragTracker::at(self.cursor_x),
        });
        self.refresh_playback();

        log::debug!("Carousel opened on {}", works[index].title);
        Effect::None
    }

    /// Carousel -> Gallery. Releases the session and scrolls the gallery back
    /// to the top.
    pub fn back(&mut self) -> Effect {
        if self.mode == ViewMode::Gallery {
            return Effect::None;
        }
        self.mode = ViewMode::Gallery;
        self.session = None;
        Effect::ScrollToTop
    }

    /// Saturating move to the next item
    pub fn next(&mut self) {
        if self.mode == ViewMode::Carousel && self.selection.index + 1 < self.current_works().len() {
            self.selection.index += 1;
            self.refresh_playback();
        }
    }

    /// Saturating move to the previous item
    pub fn previous(&mut self) {
        if self.mode == ViewMode::Carousel && self.selection.index > 0 {
            self.selection.index -= 1;
            self.refresh_playback();
        }
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Next => self.next(),
            Step::Previous => self.previous(),
        }
    }

    /// Direct selection of another visible item in the carousel
    pub fn focus(&mut self, index: usize) {
        if self.mode == ViewMode::Carousel
            && index != self.selection.index
            && index < self.current_works().len()
        {
            self.selection.index = index;
            self.refresh_playback();
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.refresh_playback();
    }

    pub fn can_go_previous(&self) -> bool {
        self.selection().is_some_and(|selection| selection.index > 0)
    }

    pub fn can_go_next(&self) -> bool {
        self.selection()
            .is_some_and(|selection| selection.index + 1 < self.current_works().len())
    }

    /// Keyboard input. Only meaningful while the carousel is open.
    pub fn key(&mut self, key: CarouselKey) -> Effect {
        match key {
            CarouselKey::Left => {
                self.previous();
                Effect::None
            }
            CarouselKey::Right => {
                self.next();
                Effect::None
            }
            CarouselKey::Escape => self.back(),
        }
    }

    /// Pointer input. Swipes beyond the threshold move the carousel.
    pub fn pointer(&mut self, pointer: Pointer) {
        let threshold = self.swipe_threshold;
        if let Pointer::Moved(x) = pointer {
            self.cursor_x = Some(x);
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let swipe = match pointer {
            Pointer::Moved(x) => {
                session.drag.cursor_moved(x);
                None
            }
            Pointer::Pressed => {
                if let Some(x) = session.drag.cursor_x {
                    session.drag.press_at(x);
                }
                None
            }
            Pointer::Released => match session.drag.cursor_x {
                Some(x) => session.drag.release_at(x, threshold),
                None => None,
            },
            Pointer::TouchStart(x) => {
                session.drag.press_at(x);
                None
            }
            Pointer::TouchEnd(x) => session.drag.release_at(x, threshold),
        };

        if let Some(step) = swipe {
            self.step(step);
        }
    }

    /// Playback of the carousel item at `index`
    pub fn playback(&self, index: usize) -> Option<Playback> {
        self.session.as_ref()?.slots.get(index).copied()
    }

    /// Whether the carousel currently owns media and input bindings
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// "01 / 04" style position label
    pub fn counter(&self) -> String {
        format!(
            "{:02} / {:02}",
            self.selection.index + 1,
            self.current_works().len()
        )
    }

    fn refresh_playback(&mut self) {
        let active = self.selection.index;
        let muted = self.muted;
        if let Some(session) = self.session.as_mut() {
            for (index, slot) in session.slots.iter_mut().enumerate() {
                slot.looping = true;
                slot.muted = index != active || muted;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn works() -> WorksState {
        WorksState::new(Catalog::portfolio(), &Settings::default())
    }

    #[test]
    fn test_starts_in_gallery() {
        let state = works();
        assert_eq!(state.mode(), ViewMode::Gallery);
        assert_eq!(state.selection(), None);
        assert!(!state.has_session());
    }

    #[test]
    fn test_open_sets_selection() {
        let mut state = works();

        let effect = state.open(Orientation::Horizontal, 1);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.mode(), ViewMode::Carousel);
        assert_eq!(
            state.selection(),
            Some(ActiveSelection {
                section: Orientation::Horizontal,
                index: 1
            })
        );
        assert_eq!(state.active_work().map(|work| work.id), Some(202));
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut state = works();
        state.open(Orientation::Horizontal, 3);
        assert_eq!(state.mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_no_section_switch_inside_carousel() {
        let mut state = works();
        state.open(Orientation::Vertical, 2);

        state.open(Orientation::Horizontal, 0);

        assert_eq!(state.selection().map(|s| s.section), Some(Orientation::Vertical));
        assert_eq!(state.selection().map(|s| s.index), Some(2));
    }

    #[test]
    fn test_bounds_saturate() {
        let mut state = works();
        state.open(Orientation::Vertical, 0);
        assert_eq!(state.current_works().len(), 4);

        state.previous();
        assert_eq!(state.selection().map(|s| s.index), Some(0));

        for _ in 0..3 {
            state.next();
        }
        assert_eq!(state.selection().map(|s| s.index), Some(3));

        state.next();
        assert_eq!(state.selection().map(|s| s.index), Some(3));
        assert!(!state.can_go_next());
        assert!(state.can_go_previous());
    }

    #[test]
    fn test_focus_other_item() {
        let mut state = works();
        state.open(Orientation::Vertical, 0);

        state.focus(2);
        assert_eq!(state.selection().map(|s| s.index), Some(2));

        state.focus(9);
        assert_eq!(state.selection().map(|s| s.index), Some(2));
    }

    #[test]
    fn test_only_active_item_plays_sound() {
        let mut state = works();
        state.open(Orientation::Vertical, 2);
        assert!(!state.is_muted());

        for index in 0..4 {
            let playback = state.playback(index).unwrap();
            assert!(playback.looping);
            assert_eq!(playback.muted, index != 2, "item {index}");
        }

        state.toggle_mute();

        assert!((0..4).all(|index| state.playback(index).unwrap().muted));
    }

    #[test]
    fn test_mute_persists_across_index_changes() {
        let mut state = works();
        state.open(Orientation::Vertical, 0);
        state.toggle_mute();

        state.next();

        assert!(state.is_muted());
        assert!(state.playback(1).unwrap().muted);
    }

    #[test]
    fn test_mute_persists_across_sessions_by_default() {
        let mut state = works();
        state.open(Orientation::Vertical, 0);
        state.toggle_mute();
        state.back();

        state.open(Orientation::Horizontal, 0);

        assert!(state.is_muted());
    }

    #[test]
    fn test_mute_resets_when_configured() {
        let settings = Settings {
            reset_mute_on_enter: true,
            ..Settings::default()
        };
        let mut state = WorksState::new(Catalog::portfolio(), &settings);
        state.open(Orientation::Vertical, 0);
        state.toggle_mute();
        state.back();

        state.open(Orientation::Vertical, 0);

        assert!(!state.is_muted());
    }

    #[test]
    fn test_swipe_left_past_threshold_moves_next() {
        let mut state = works();
        state.open(Orientation::Horizontal, 1);

        state.pointer(Pointer::TouchStart(300.0));
        state.pointer(Pointer::TouchEnd(240.0));

        assert_eq!(state.selection().map(|s| s.index), Some(2));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut state = works();
        state.open(Orientation::Horizontal, 1);

        state.pointer(Pointer::TouchStart(300.0));
        state.pointer(Pointer::TouchEnd(260.0));

        assert_eq!(state.selection().map(|s| s.index), Some(1));
    }

    #[test]
    fn test_mouse_drag_right_moves_previous() {
        let mut state = works();
        state.open(Orientation::Horizontal, 1);

        state.pointer(Pointer::Moved(100.0));
        state.pointer(Pointer::Pressed);
        state.pointer(Pointer::Moved(180.0));
        state.pointer(Pointer::Released);

        assert_eq!(state.selection().map(|s| s.index), Some(0));
    }

    #[test]
    fn test_drag_before_first_move_in_carousel() {
        let mut state = works();
        // Cursor seen over the gallery card that opens the carousel
        state.pointer(Pointer::Moved(300.0));
        state.open(Orientation::Horizontal, 1);

        state.pointer(Pointer::Pressed);
        state.pointer(Pointer::Moved(200.0));
        state.pointer(Pointer::Released);

        assert_eq!(state.selection().map(|s| s.index), Some(2));
    }

    #[test]
    fn test_reset_keeps_cursor_and_drops_session() {
        let mut state = works();
        state.pointer(Pointer::Moved(500.0));
        state.open(Orientation::Vertical, 1);
        state.toggle_mute();

        state.reset();
        assert_eq!(state.mode(), ViewMode::Gallery);
        assert!(!state.has_session());
        assert!(!state.is_muted());

        state.open(Orientation::Vertical, 1);
        state.pointer(Pointer::Pressed);
        state.pointer(Pointer::Moved(560.0));
        state.pointer(Pointer::Released);

        assert_eq!(state.selection().map(|s| s.index), Some(0));
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.release_at(0.0, 50.0), None);

        tracker.press_at(100.0);
        assert_eq!(tracker.release_at(50.0, 50.0), None);
        assert_eq!(tracker.release_at(0.0, 50.0), None);
    }

    #[test]
    fn test_escape_returns_to_gallery_and_releases_session() {
        let mut state = works();
        state.open(Orientation::Vertical, 1);
        assert!(state.has_session());

        let effect = state.key(CarouselKey::Escape);

        assert_eq!(effect, Effect::ScrollToTop);
        assert_eq!(state.mode(), ViewMode::Gallery);
        assert!(!state.has_session());
        assert_eq!(state.playback(0), None);
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut state = works();
        state.open(Orientation::Vertical, 1);

        state.key(CarouselKey::Right);
        state.key(CarouselKey::Right);
        state.key(CarouselKey::Left);

        assert_eq!(state.selection().map(|s| s.index), Some(2));
    }

    #[test]
    fn test_gallery_ignores_carousel_input() {
        let mut state = works();

        state.next();
        state.pointer(Pointer::TouchStart(300.0));
        state.pointer(Pointer::TouchEnd(0.0));

        assert_eq!(state.back(), Effect::None);
        assert_eq!(state.mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_counter_label() {
        let mut state = works();
        state.open(Orientation::Vertical, 2);
        assert_eq!(state.counter(), "03 / 04");
    }
}
