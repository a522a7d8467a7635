/// Asset preloading module
///
/// This module handles:
/// - The fixed manifest of startup media (manifest.rs)
/// - Fetching and validating remote images and video (loader.rs)
/// - The startup gate that joins all loads with a minimum splash time (gate.rs)

pub mod gate;
pub mod loader;
pub mod manifest;
