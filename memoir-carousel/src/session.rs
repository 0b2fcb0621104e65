//! CarouselSession: a mounted carousel with its autoplay task
//!
//! The autoplay task only exists while the carousel is in the running
//! autoplay phase. Every input goes through [`CarouselSession::dispatch`], which
//! re-evaluates the phase afterwards: entering a suspension or manual mode
//! cancels the task's token, leaving a suspension spawns a fresh task with a
//! fresh token. Elapsed time lives in the carousel's clock, so a paused
//! countdown resumes where it stopped. Dropping the session cancels the task.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use memoir_model::EntryId;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::capabilities::icons::IconRenderer;
use crate::capabilities::viewer::{FullScreenViewer, NoopViewer};
use crate::carousel::{Carousel, CarouselMessage, Direction};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::preload::{ImageProbe, PreloadReport, preload_images};
use crate::view_models::CarouselView;

/// Published whenever the current slide changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub index: usize,
    pub id: Option<EntryId>,
    pub direction: Direction,
    pub autoplay: bool,
}

impl SlideChange {
    fn of(carousel: &Carousel) -> Self {
        Self {
            index: carousel.current_index(),
            id: carousel.current_entry().map(|entry| entry.id),
            direction: carousel.direction(),
            autoplay: carousel.autoplay_enabled(),
        }
    }
}

/// Read-only access to a mounted carousel. Input goes through
/// [`CarouselSession::dispatch`] so the autoplay task stays in step with the
/// phase it depends on.
#[derive(Debug, Clone)]
pub struct CarouselHandle(Arc<Mutex<Carousel>>);

impl CarouselHandle {
    pub fn read<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R {
        f(&self.0.lock())
    }

    pub fn current_index(&self) -> usize {
        self.read(Carousel::current_index)
    }
}

struct AutoplayTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl AutoplayTask {
    fn stop(self) {
        self.token.cancel();
        self.handle.abort();
    }
}

pub struct CarouselSession<V = NoopViewer> {
    carousel: Arc<Mutex<Carousel>>,
    viewer: V,
    config: CarouselConfig,
    runtime: tokio::runtime::Handle,
    autoplay: Option<AutoplayTask>,
    changes: Arc<watch::Sender<SlideChange>>,
}

impl<V> fmt::Debug for CarouselSession<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let carousel = self.carousel.try_lock();
        f.debug_struct("CarouselSession")
            .field("config", &self.config)
            .field(
                "current_index",
                &carousel.as_ref().map(|c| c.current_index()),
            )
            .field("phase", &carousel.as_ref().map(|c| c.phase()))
            .field("autoplay_task", &self.autoplay.is_some())
            .finish()
    }
}

impl<V: FullScreenViewer> CarouselSession<V> {
    /// Mount `carousel` on the current Tokio runtime and start autoplay.
    pub fn mount(
        carousel: Carousel,
        viewer: V,
        config: CarouselConfig,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|err| {
            CarouselError::Config(format!(
                "carousel session needs a Tokio runtime: {err}"
            ))
        })?;
        let (changes, _) = watch::channel(SlideChange::of(&carousel));

        let mut session = Self {
            carousel: Arc::new(Mutex::new(carousel)),
            viewer,
            config,
            runtime,
            autoplay: None,
            changes: Arc::new(changes),
        };
        session.sync_autoplay();
        Ok(session)
    }

    /// Read-only handle that outlives the session.
    pub fn carousel(&self) -> CarouselHandle {
        CarouselHandle(Arc::clone(&self.carousel))
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.carousel.lock().current_index()
    }

    /// Receiver that observes every slide change, autoplay included.
    pub fn subscribe(&self) -> watch::Receiver<SlideChange> {
        self.changes.subscribe()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay
            .as_ref()
            .is_some_and(|task| {
                !task.token.is_cancelled() && !task.handle.is_finished()
            })
    }

    /// Apply an input, then re-arm or cancel the autoplay task to match.
    pub fn dispatch(&mut self, message: CarouselMessage) -> bool {
        let changed = {
            let mut carousel = self.carousel.lock();
            let changed = carousel.update(message, &mut self.viewer);
            publish(&self.changes, &carousel);
            changed
        };
        self.sync_autoplay();
        changed
    }

    /// Preload every image and drop the loading overlay once all settled.
    pub async fn preload<P>(&self, probe: &P) -> PreloadReport
    where
        P: ImageProbe + ?Sized,
    {
        let images = {
            let mut carousel = self.carousel.lock();
            carousel.preload_started();
            carousel.images()
        };
        let report =
            preload_images(images, probe, self.config.preload_timeout()).await;
        self.carousel.lock().preload_finished(&report);
        report
    }

    /// Drop the loading overlay without probing any image.
    pub fn skip_preload(&self) {
        self.carousel
            .lock()
            .preload_finished(&PreloadReport::default());
    }

    pub fn view<R>(&self, icons: &R) -> CarouselView<R::Output>
    where
        R: IconRenderer + ?Sized,
    {
        CarouselView::build(&self.carousel.lock(), icons)
    }

    /// Cancel autoplay for good; the session stays usable for manual input.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.autoplay.take() {
            log::info!("Carousel session shut down");
            task.stop();
        }
    }

    fn sync_autoplay(&mut self) {
        let running = self.carousel.lock().phase().is_running();
        let active = self.is_autoplay_running();

        if running && !active {
            self.autoplay = None;
            let token = CancellationToken::new();
            let handle = self.runtime.spawn(run_autoplay(
                Arc::clone(&self.carousel),
                self.config.autoplay_resolution(),
                token.clone(),
                Arc::clone(&self.changes),
            ));
            log::debug!("Autoplay task armed");
            self.autoplay = Some(AutoplayTask { token, handle });
        } else if !running && let Some(task) = self.autoplay.take() {
            log::debug!("Autoplay task cancelled");
            task.stop();
        }
    }
}

impl<V> Drop for CarouselSession<V> {
    fn drop(&mut self) {
        if let Some(task) = self.autoplay.take() {
            task.stop();
        }
    }
}

fn publish(changes: &watch::Sender<SlideChange>, carousel: &Carousel) {
    let change = SlideChange::of(carousel);
    changes.send_if_modified(|current| {
        if *current == change {
            return false;
        }
        *current = change;
        true
    });
}

async fn run_autoplay(
    carousel: Arc<Mutex<Carousel>>,
    resolution: Duration,
    token: CancellationToken,
    changes: Arc<watch::Sender<SlideChange>>,
) {
    let mut ticker = tokio::time::interval(resolution);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    let mut last = Instant::now();

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(last);
                last = now;

                let mut carousel = carousel.lock();
                if carousel.advance_clock(dt) > 0 {
                    log::debug!(
                        "Autoplay advanced to {}",
                        carousel.current_index()
                    );
                    publish(&changes, &carousel);
                }
                if !carousel.phase().is_running() {
                    break;
                }
            }
        }
    }
}
