/// UI building blocks
///
/// - Splash screen and its animated loading bar (splash.rs)
/// - Navbar and footer shared by every page (shell.rs)
/// - Home, About, Contact and Store pages (pages.rs)
/// - Works gallery and carousel (works.rs)
/// - Decoded image handles shared between pages (assets.rs)

pub mod assets;
pub mod pages;
pub mod shell;
pub mod splash;
pub mod works;
