use iced::event::{self, Event};
use iced::keyboard::{self, key, Key, Modifiers};
use iced::time::{self, Instant};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, scrollable};
use iced::{mouse, touch, window};
use iced::{Element, Length, Subscription, Task, Theme};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

mod preload;
mod state;
mod ui;

use preload::gate::{self, GateConfig, PreloadReport, Settlement};
use preload::loader::{HttpLoader, LoadedImage};
use preload::manifest::AssetManifest;
use state::data::{Catalog, Orientation};
use state::navigation::{Effect, LoadState, Navigator, Page};
use state::settings::Settings;
use state::works::{CarouselKey, Pointer, ViewMode, WorksState};
use ui::assets::AssetCache;
use ui::splash::{LoadingBar, SWEEP_SECONDS};

/// Main application state
struct OrbitVisuals {
    settings: Settings,
    /// Splash until the preload gate reports back
    load_state: LoadState,
    navigator: Navigator,
    works: WorksState,
    /// Startup media, kept to order the Home page stills
    manifest: AssetManifest,
    assets: AssetCache,
    /// `None` when no HTTP client could be built; pages then show placeholders
    loader: Option<Arc<HttpLoader>>,
    /// First splash animation frame
    splash_started: Option<Instant>,
    loading_bar: LoadingBar,
    /// Store image URLs with a fetch in flight
    store_pending: HashSet<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The preload gate finished
    PreloadFinished(PreloadReport),
    /// Preloading could not start, wait out the splash and continue
    PreloadSkipped,
    /// Splash animation frame
    SplashTick(Instant),
    /// Navbar, footer or page button
    Navigate(Page),
    /// Gallery card clicked
    OpenWork(Orientation, usize),
    BackToGallery,
    NextWork,
    PreviousWork,
    /// Inactive carousel card clicked
    FocusWork(usize),
    ToggleMute,
    CarouselKey(CarouselKey),
    Pointer(Pointer),
    /// A lazily fetched Store image settled
    StoreImageLoaded(String, Settlement<LoadedImage>),
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl OrbitVisuals {
    /// Create a new instance of the application and start the preload gate
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load().unwrap_or_else(|e| {
            log::warn!("⚠️  {}; using default settings", e);
            Settings::default()
        });

        let loader = match HttpLoader::new() {
            Ok(loader) => Some(Arc::new(loader)),
            Err(e) => {
                log::error!("❌ Could not create HTTP client: {}", e);
                None
            }
        };

        let manifest = AssetManifest::showcase();
        let startup = match &loader {
            Some(loader) => Task::perform(
                gate::run(manifest.clone(), Arc::clone(loader), GateConfig::from(&settings)),
                Message::PreloadFinished,
            ),
            None => Task::perform(tokio::time::sleep(settings.min_display()), |_| {
                Message::PreloadSkipped
            }),
        };

        log::info!("🎬 Orbit Visuals starting");

        (Self::with_settings(settings, manifest, loader), startup)
    }

    /// Splash-state application without any startup work
    fn with_settings(settings: Settings, manifest: AssetManifest, loader: Option<Arc<HttpLoader>>) -> Self {
        OrbitVisuals {
            navigator: Navigator::new(settings.show_store),
            works: WorksState::new(Catalog::portfolio(), &settings),
            settings,
            load_state: LoadState::Loading,
            manifest,
            assets: AssetCache::default(),
            loader,
            splash_started: None,
            loading_bar: LoadingBar { phase: 0.0 },
            store_pending: HashSet::new(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PreloadFinished(report) => {
                for image in report.loaded_images() {
                    self.assets.insert(image);
                }
                if report.degraded() > 0 {
                    log::warn!("⚠️  {} assets did not preload, continuing anyway", report.degraded());
                }
                self.finish_loading()
            }
            Message::PreloadSkipped => self.finish_loading(),
            Message::SplashTick(now) => {
                let started = *self.splash_started.get_or_insert(now);
                let seconds = now.saturating_duration_since(started).as_secs_f32();
                self.loading_bar.phase = (seconds / SWEEP_SECONDS).fract();
                Task::none()
            }
            Message::Navigate(page) => {
                let effect = self.navigator.set_page(page);
                log::debug!("Navigated to {}", self.navigator.current().label());

                // Leaving Works drops any carousel session; a fresh Works page opens on the gallery
                self.works.reset();

                let mut tasks = vec![apply(effect)];
                if self.navigator.current() == Page::Store {
                    tasks.push(self.request_store_images());
                }
                Task::batch(tasks)
            }
            Message::OpenWork(section, index) => apply(self.works.open(section, index)),
            Message::BackToGallery => apply(self.works.back()),
            Message::NextWork => {
                self.works.next();
                Task::none()
            }
            Message::PreviousWork => {
                self.works.previous();
                Task::none()
            }
            Message::FocusWork(index) => {
                self.works.focus(index);
                Task::none()
            }
            Message::ToggleMute => {
                self.works.toggle_mute();
                Task::none()
            }
            Message::CarouselKey(key) => apply(self.works.key(key)),
            Message::Pointer(pointer) => {
                self.works.pointer(pointer);
                Task::none()
            }
            Message::StoreImageLoaded(url, settlement) => {
                self.store_pending.remove(&url);
                if let Settlement::Ready(image) = settlement {
                    self.assets.insert(&image);
                }
                Task::none()
            }
        }
    }

    /// Loading -> Ready, once
    fn finish_loading(&mut self) -> Task<Message> {
        if self.load_state.mark_ready() {
            log::info!("✨ Ready, {} images cached", self.assets.len());
        }
        Task::none()
    }

    /// Store images that are neither cached nor being fetched
    fn missing_store_images(&self) -> Vec<String> {
        ui::pages::store_images()
            .filter(|url| self.assets.get(url).is_none() && !self.store_pending.contains(*url))
            .map(str::to_string)
            .collect()
    }

    /// Fetch the Store images still missing. Failed ones are retried on the next visit.
    fn request_store_images(&mut self) -> Task<Message> {
        let Some(loader) = self.loader.clone() else {
            return Task::none();
        };

        let timeout = self.settings.image_timeout();
        let missing = self.missing_store_images();
        if !missing.is_empty() {
            log::debug!("Fetching {} Store images", missing.len());
        }
        Task::batch(missing.into_iter().map(|url| {
            self.store_pending.insert(url.clone());
            Task::perform(
                gate::fetch_image(Arc::clone(&loader), url.clone(), timeout),
                move |settlement| Message::StoreImageLoaded(url.clone(), settlement),
            )
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if !self.load_state.is_ready() {
            return ui::splash::view(self.loading_bar);
        }

        let page = self.navigator.current();
        if page == Page::Works && self.works.mode() == ViewMode::Carousel {
            return ui::works::carousel(&self.works);
        }

        let content: Element<Message> = match page {
            Page::Home => ui::pages::home(&self.assets, self.manifest.images()),
            Page::Works => ui::works::gallery(&self.works),
            Page::About => ui::pages::about(),
            Page::Contact => ui::pages::contact(),
            Page::Store => ui::pages::store(&self.assets),
        };

        column![
            ui::shell::navbar(&self.navigator),
            scrollable(column![content, ui::shell::footer(&self.navigator)])
                .id(page_scroll_id())
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .into()
    }

    /// Whether the carousel key and pointer bindings are registered
    fn carousel_input_active(&self) -> bool {
        self.load_state.is_ready() && self.navigator.current() == Page::Works && self.works.has_session()
    }

    /// Timers and input bindings exist only while something needs them
    fn subscription(&self) -> Subscription<Message> {
        if !self.load_state.is_ready() {
            return time::every(Duration::from_millis(16)).map(Message::SplashTick);
        }

        if self.carousel_input_active() {
            return Subscription::batch([
                keyboard::on_key_press(carousel_key),
                event::listen_with(carousel_pointer),
            ]);
        }

        // The gallery only follows the cursor so a carousel drag can start before it moves
        if self.navigator.current() == Page::Works {
            return event::listen_with(gallery_cursor);
        }

        Subscription::none()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Carry out a state transition's side effect
fn apply(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::ScrollToTop => scrollable::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y: 0.0 }),
    }
}

fn carousel_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    let key = match key.as_ref() {
        Key::Named(key::Named::ArrowLeft) => CarouselKey::Left,
        Key::Named(key::Named::ArrowRight) => CarouselKey::Right,
        Key::Named(key::Named::Escape) => CarouselKey::Escape,
        _ => return None,
    };
    Some(Message::CarouselKey(key))
}

fn carousel_pointer(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    let pointer = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Pointer::Moved(position.x),
        // Clicks taken by the back, mute and arrow buttons never start a drag
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if status == event::Status::Ignored => {
            Pointer::Pressed
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Pointer::Released,
        Event::Touch(touch::Event::FingerPressed { position, .. }) => Pointer::TouchStart(position.x),
        Event::Touch(touch::Event::FingerLifted { position, .. }) => Pointer::TouchEnd(position.x),
        _ => return None,
    };
    Some(Message::Pointer(pointer))
}

fn gallery_cursor(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::Pointer(Pointer::Moved(position.x))),
        _ => None,
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application("Orbit Visuals", OrbitVisuals::update, OrbitVisuals::view)
        .subscription(OrbitVisuals::subscription)
        .theme(OrbitVisuals::theme)
        .centered()
        .run_with(OrbitVisuals::new)
}
