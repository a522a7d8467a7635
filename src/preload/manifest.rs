/// Startup media that must settle before the splash screen goes away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    images: Vec<String>,
    video: String,
}

impl AssetManifest {
    /// A manifest always carries exactly one video
    pub fn new(images: Vec<String>, video: impl Into<String>) -> Self {
        Self {
            images,
            video: video.into(),
        }
    }

    /// The media used by the Home page hero
    pub fn showcase() -> Self {
        Self::new(
            SHOWCASE_IMAGES.iter().map(|url| url.to_string()).collect(),
            SHOWCASE_VIDEO,
        )
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn video(&self) -> &str {
        &self.video
    }

    /// Number of assets, video included
    pub fn len(&self) -> usize {
        self.images.len() + 1
    }
}

const SHOWCASE_VIDEO: &str = "https://www.dropbox.com/scl/fi/tz20d2xwyzl770wkhehkx/IMG_0669-2.mp4?rlkey=wptpf6cnzoz5vbjvzkfh2si8t&st=r71hja1x&raw=1";

const SHOWCASE_IMAGES: [&str; 8] = [
    "https://images.unsplash.com/photo-1519741497674-611481863552?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1503899036084-c55cdd92da26?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1483985988355-763728e1935b?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?auto=format&fit=crop&w=1200&q=80",
    "https://images.unsplash.com/photo-1496747611176-843222e1e57c?auto=format&fit=crop&w=1200&q=80",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_manifest() {
        let manifest = AssetManifest::showcase();
        assert_eq!(manifest.images().len(), 8);
        assert_eq!(manifest.len(), 9);
        assert!(manifest.video().ends_with("raw=1"));
    }
}
