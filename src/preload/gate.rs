/// Startup preload gate
///
/// Every image and the video load concurrently. Each asset settles exactly
/// once: ready, failed, or timed out. The gate finishes when all assets have
/// settled AND the minimum splash time has passed. Failures never block it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;

use super::loader::{AssetError, AssetLoader, LoadedImage};
use super::manifest::AssetManifest;
use crate::state::settings::Settings;

/// Terminal outcome of one asset load
#[derive(Debug, Clone)]
pub enum Settlement<T> {
    Ready(T),
    Failed(String),
    TimedOut,
}

impl<T> Settlement<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Settlement::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Settlement::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Gate timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateConfig {
    pub min_display: Duration,
    pub video_timeout: Duration,
    /// `None` waits on each image's own outcome, however long that takes
    pub image_timeout: Option<Duration>,
    pub video_ready_bytes: u64,
}

impl From<&Settings> for GateConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            min_display: settings.min_display(),
            video_timeout: settings.video_timeout(),
            image_timeout: settings.image_timeout(),
            video_ready_bytes: settings.video_ready_bytes,
        }
    }
}

/// What the gate saw, in manifest order
#[derive(Debug, Clone)]
pub struct PreloadReport {
    pub images: Vec<Settlement<LoadedImage>>,
    pub video: Settlement<()>,
    pub elapsed: Duration,
}

impl PreloadReport {
    pub fn loaded_images(&self) -> impl Iterator<Item = &LoadedImage> {
        self.images.iter().filter_map(Settlement::ready)
    }

    /// Assets that did not end up ready
    pub fn degraded(&self) -> usize {
        let images = self.images.iter().filter(|s| !s.is_ready()).count();
        images + usize::from(!self.video.is_ready())
    }

    pub fn summary(&self) -> String {
        format!(
            "{}/{} images ready, video {}, {} ms",
            self.loaded_images().count(),
            self.images.len(),
            match self.video {
                Settlement::Ready(()) => "ready",
                Settlement::Failed(_) => "failed",
                Settlement::TimedOut => "timed out",
            },
            self.elapsed.as_millis()
        )
    }
}

/// Run the gate to completion.
///
/// Dropping the returned future cancels the timers and any loads still
/// in flight.
pub async fn run<L: AssetLoader>(
    manifest: AssetManifest,
    loader: Arc<L>,
    config: GateConfig,
) -> PreloadReport {
    let started = Instant::now();
    log::info!("⏳ Preloading {} assets", manifest.len());

    let mut pending = JoinSet::new();
    for (index, url) in manifest.images().iter().cloned().enumerate() {
        let loader = Arc::clone(&loader);
        pending.spawn(async move {
            let settlement = settle(loader.load_image(url.clone()), config.image_timeout).await;
            log_settlement("image", &url, &settlement);
            (index, settlement)
        });
    }

    let video = async {
        let url = manifest.video().to_string();
        let settlement = settle(
            loader.buffer_video(url.clone(), config.video_ready_bytes),
            Some(config.video_timeout),
        )
        .await;
        log_settlement("video", &url, &settlement);
        settlement
    };

    let (images, video, ()) = tokio::join!(
        collect_images(pending, manifest.images().len()),
        video,
        tokio::time::sleep(config.min_display),
    );

    let report = PreloadReport {
        images,
        video,
        elapsed: started.elapsed(),
    };
    log::info!("✅ Preload finished: {}", report.summary());
    report
}

/// Load one image outside the gate, with the same timeout policy
pub async fn fetch_image<L: AssetLoader>(
    loader: Arc<L>,
    url: String,
    limit: Option<Duration>,
) -> Settlement<LoadedImage> {
    let settlement = settle(loader.load_image(url.clone()), limit).await;
    log_settlement("image", &url, &settlement);
    settlement
}

/// Resolve a load to its first terminal outcome
async fn settle<T, F>(load: F, limit: Option<Duration>) -> Settlement<T>
where
    F: Future<Output = Result<T, AssetError>>,
{
    let outcome = match limit {
        Some(limit) => match tokio::time::timeout(limit, load).await {
            Ok(outcome) => outcome,
            Err(_) => return Settlement::TimedOut,
        },
        None => load.await,
    };

    match outcome {
        Ok(value) => Settlement::Ready(value),
        Err(e) => Settlement::Failed(e.to_string()),
    }
}

async fn collect_images(
    mut pending: JoinSet<(usize, Settlement<LoadedImage>)>,
    count: usize,
) -> Vec<Settlement<LoadedImage>> {
    let mut slots: Vec<Option<Settlement<LoadedImage>>> = vec![None; count];

    while let Some(joined) = pending.join_next().await {
        match joined {
            Ok((index, settlement)) => slots[index] = Some(settlement),
            Err(e) => log::warn!("⚠️  Image load task ended abnormally: {}", e),
        }
    }

    slots
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| Settlement::Failed("load task aborted".to_string())))
        .collect()
}

fn log_settlement<T>(kind: &str, url: &str, settlement: &Settlement<T>) {
    match settlement {
        Settlement::Ready(_) => log::debug!("{} ready: {}", kind, url),
        Settlement::Failed(reason) => log::warn!("⚠️  {} failed ({}): {}", kind, reason, url),
        Settlement::TimedOut => log::warn!("⚠️  {} timed out: {}", kind, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// How a fake asset behaves
    #[derive(Debug, Clone, Copy)]
    enum Behavior {
        After(Duration),
        FailAfter(Duration),
        Hang,
    }

    struct FakeLoader {
        images: HashMap<String, Behavior>,
        default_image: Behavior,
        video: Behavior,
    }

    impl FakeLoader {
        fn new(default_image: Behavior, video: Behavior) -> Self {
            Self {
                images: HashMap::new(),
                default_image,
                video,
            }
        }

        fn with_image(mut self, url: &str, behavior: Behavior) -> Self {
            self.images.insert(url.to_string(), behavior);
            self
        }
    }

    async fn act(behavior: Behavior) -> Result<(), AssetError> {
        match behavior {
            Behavior::After(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
            Behavior::FailAfter(delay) => {
                tokio::time::sleep(delay).await;
                Err(AssetError::Status(404))
            }
            Behavior::Hang => std::future::pending().await,
        }
    }

    impl AssetLoader for FakeLoader {
        async fn load_image(&self, url: String) -> Result<LoadedImage, AssetError> {
            let behavior = self.images.get(&url).copied().unwrap_or(self.default_image);
            act(behavior).await?;
            Ok(LoadedImage {
                url,
                width: 1,
                height: 1,
                bytes: Vec::new(),
            })
        }

        async fn buffer_video(&self, _url: String, _ready_bytes: u64) -> Result<(), AssetError> {
            act(self.video).await
        }
    }

    fn manifest() -> AssetManifest {
        AssetManifest::new(
            vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
            "hero.mp4",
        )
    }

    fn config() -> GateConfig {
        GateConfig::from(&Settings::default())
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn test_minimum_display_holds_fast_loads() {
        let loader = Arc::new(FakeLoader::new(Behavior::After(ms(1)), Behavior::After(ms(1))));

        let report = run(manifest(), loader, config()).await;

        assert!(report.elapsed >= ms(2500));
        assert!(report.elapsed < ms(2510));
        assert_eq!(report.degraded(), 0);
        assert_eq!(report.loaded_images().count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_images_do_not_block() {
        let loader = Arc::new(
            FakeLoader::new(Behavior::After(ms(5)), Behavior::After(ms(5)))
                .with_image("b.jpg", Behavior::FailAfter(ms(10))),
        );

        let report = run(manifest(), loader, config()).await;

        assert!(report.elapsed < ms(2510));
        assert!(matches!(report.images[1], Settlement::Failed(_)));
        assert_eq!(report.degraded(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_image_settles_at_image_timeout() {
        let loader = Arc::new(
            FakeLoader::new(Behavior::After(ms(1)), Behavior::After(ms(1)))
                .with_image("c.jpg", Behavior::Hang),
        );

        let report = run(manifest(), loader, config()).await;

        assert!(matches!(report.images[2], Settlement::TimedOut));
        assert!(report.elapsed >= ms(10_000));
        assert!(report.elapsed < ms(10_010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_image_without_timeout_blocks_gate() {
        let loader = Arc::new(
            FakeLoader::new(Behavior::After(ms(1)), Behavior::After(ms(1)))
                .with_image("a.jpg", Behavior::Hang),
        );
        let config = GateConfig {
            image_timeout: None,
            ..config()
        };

        let outcome = tokio::time::timeout(Duration::from_secs(60), run(manifest(), loader, config)).await;

        assert!(outcome.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_video_releases_at_video_timeout() {
        let loader = Arc::new(FakeLoader::new(Behavior::After(ms(1)), Behavior::Hang));

        let report = run(manifest(), loader, config()).await;

        assert!(matches!(report.video, Settlement::TimedOut));
        assert!(report.elapsed >= ms(8000));
        assert!(report.elapsed < ms(8010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_image_is_waited_for() {
        let loader = Arc::new(
            FakeLoader::new(Behavior::After(ms(1)), Behavior::After(ms(1)))
                .with_image("a.jpg", Behavior::After(ms(4000))),
        );

        let report = run(manifest(), loader, config()).await;

        assert!(report.images[0].is_ready());
        assert!(report.elapsed >= ms(4000));
        assert!(report.elapsed < ms(4010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_image_list() {
        let loader = Arc::new(FakeLoader::new(Behavior::Hang, Behavior::FailAfter(ms(3))));

        let report = run(AssetManifest::new(Vec::new(), "hero.mp4"), loader, config()).await;

        assert!(report.images.is_empty());
        assert!(matches!(report.video, Settlement::Failed(_)));
        assert!(report.elapsed >= ms(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_image_uses_timeout() {
        let loader = Arc::new(
            FakeLoader::new(Behavior::After(ms(1)), Behavior::After(ms(1)))
                .with_image("slow.jpg", Behavior::Hang),
        );

        let ready = fetch_image(Arc::clone(&loader), "fast.jpg".to_string(), Some(ms(100))).await;
        let stalled = fetch_image(loader, "slow.jpg".to_string(), Some(ms(100))).await;

        assert!(ready.is_ready());
        assert!(matches!(stalled, Settlement::TimedOut));
    }

    #[test]
    fn test_report_summary() {
        let report = PreloadReport {
            images: vec![Settlement::TimedOut],
            video: Settlement::Ready(()),
            elapsed: ms(2600),
        };
        assert_eq!(report.summary(), "0/1 images ready, video ready, 2600 ms");
        assert_eq!(report.degraded(), 1);
    }
}
