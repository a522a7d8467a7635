/// State management module
///
/// This module handles all application state, including:
/// - Static portfolio and store data (data.rs)
/// - Load phase and page navigation (navigation.rs)
/// - Works gallery/carousel state machine (works.rs)
/// - User settings (settings.rs)

pub mod data;
pub mod navigation;
pub mod settings;
pub mod works;
