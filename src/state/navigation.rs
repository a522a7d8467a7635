/// Top-level application state: load phase and current page.

/// Whole-application load phase. Moves from `Loading` to `Ready` once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

impl LoadState {
    /// Perform the Loading -> Ready transition.
    ///
    /// Returns `true` only for the call that actually transitioned.
    pub fn mark_ready(&mut self) -> bool {
        match self {
            LoadState::Loading => {
                *self = LoadState::Ready;
                true
            }
            LoadState::Ready => false,
        }
    }

    pub fn is_ready(self) -> bool {
        self == LoadState::Ready
    }
}

/// Top-level routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Works,
    About,
    Contact,
    Store,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Works, Page::About, Page::Contact, Page::Store];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Works => "Works",
            Page::About => "About",
            Page::Contact => "Contact",
            Page::Store => "Store",
        }
    }
}

/// Side effect requested by a state transition, carried out by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ScrollToTop,
}

/// Holds the current page. `set_page` is the only mutator.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    store_enabled: bool,
}

impl Navigator {
    /// Start on the Home page
    pub fn new(store_enabled: bool) -> Self {
        Self {
            current: Page::Home,
            store_enabled,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch pages. Every call asks for a scroll to the top, even when
    /// the page is unchanged. A disabled Store resolves to Home.
    pub fn set_page(&mut self, page: Page) -> Effect {
        self.current = if self.is_available(page) {
            page
        } else {
            log::debug!("{} page is disabled, falling back to Home", page.label());
            Page::Home
        };
        Effect::ScrollToTop
    }

    pub fn is_available(&self, page: Page) -> bool {
        page != Page::Store || self.store_enabled
    }

    /// Pages shown in the navbar and footer, in order
    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        Page::ALL.into_iter().filter(|page| self.is_available(*page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let navigator = Navigator::new(true);
        assert_eq!(navigator.current(), Page::Home);
    }

    #[test]
    fn test_every_page_change_scrolls_to_top() {
        let mut navigator = Navigator::new(true);

        let effects = [navigator.set_page(Page::Works), navigator.set_page(Page::About)];

        assert_eq!(navigator.current(), Page::About);
        assert_eq!(
            effects.iter().filter(|effect| **effect == Effect::ScrollToTop).count(),
            2
        );
    }

    #[test]
    fn test_same_page_still_scrolls() {
        let mut navigator = Navigator::new(true);
        assert_eq!(navigator.set_page(Page::Home), Effect::ScrollToTop);
        assert_eq!(navigator.current(), Page::Home);
    }

    #[test]
    fn test_disabled_store_falls_back_to_home() {
        let mut navigator = Navigator::new(false);
        navigator.set_page(Page::Contact);

        navigator.set_page(Page::Store);

        assert_eq!(navigator.current(), Page::Home);
        assert!(!navigator.pages().any(|page| page == Page::Store));
    }

    #[test]
    fn test_load_state_transitions_once() {
        let mut state = LoadState::default();
        assert!(!state.is_ready());

        assert!(state.mark_ready());
        assert!(!state.mark_ready());
        assert!(state.is_ready());
    }
}
