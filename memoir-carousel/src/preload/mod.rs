//! Image preloading
//!
//! Every entry's image is probed once at mount. Attempts are independent:
//! a failure is recorded and the rest carry on. The loading overlay stays up
//! until all of them have settled.

pub mod probe;

use std::time::Duration;

use futures::future::join_all;
use memoir_model::{EntryId, ImageRef};

pub use probe::{FsImageProbe, HttpImageProbe, ImageProbe, ProbeError, SchemeProbe};

/// Aggregate outcome of a preload pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub loaded: Vec<EntryId>,
    pub failed: Vec<EntryId>,
}

impl PreloadReport {
    pub fn total(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }

    pub fn all_loaded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Probes every image concurrently and waits for all of them to settle.
/// Report order follows `images`.
pub async fn preload_images<P>(
    images: Vec<(EntryId, ImageRef)>,
    probe: &P,
    timeout: Duration,
) -> PreloadReport
where
    P: ImageProbe + ?Sized,
{
    let attempts = images.into_iter().map(|(id, image)| async move {
        let outcome = match tokio::time::timeout(timeout, probe.probe(&image)).await
        {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout(timeout)),
        };
        if let Err(err) = &outcome {
            log::warn!("Preload failed for {id} ({image}): {err}");
        }
        (id, outcome.is_ok())
    });

    let mut report = PreloadReport::default();
    for (id, ok) in join_all(attempts).await {
        if ok {
            report.loaded.push(id);
        } else {
            report.failed.push(id);
        }
    }

    log::info!(
        "Preload settled: {} loaded, {} failed",
        report.loaded.len(),
        report.failed.len()
    );
    report
}
