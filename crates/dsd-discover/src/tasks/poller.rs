use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::publish::Publisher;

/// Run discovery cycles until `token` is cancelled.
///
/// The first cycle starts immediately, later ones every `period`. A cycle is awaited
/// before the next tick is taken, so cycles never overlap; ticks missed while a slow
/// cycle runs are pushed back rather than fired in a burst. Cancellation is observed
/// between cycles, never in the middle of a write.
pub async fn poll(publisher: &Publisher, period: Duration, token: CancellationToken) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(period_ms = period.as_millis() as u64, "discovery loop started");

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        match publisher.run_cycle().await {
            Ok(report) => debug!(
                containers = report.containers,
                targets = report.targets,
                path = %report.path.display(),
                "discovery cycle completed"
            ),
            Err(e) => error!(error = %e, "discovery cycle failed, previous file kept"),
        }
    }
    info!("discovery loop stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use dsd_model::{ContainerInspection, DiscoveryDocument, LABEL_ENABLED};

    use super::*;
    use crate::extract::Extractor;
    use crate::publish::TargetFileWriter;
    use crate::runtime::fake::FakeRuntime;

    fn publisher(runtime: Arc<FakeRuntime>, path: std::path::PathBuf) -> Publisher {
        Publisher::new(runtime, Extractor::default(), TargetFileWriter::new(path))
    }

    #[tokio::test]
    async fn first_cycle_runs_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.json");
        let runtime = Arc::new(FakeRuntime::new().with_container(
            "1",
            ContainerInspection::new("/web1", "h1").with_label(LABEL_ENABLED, "true"),
        ));
        let p = publisher(Arc::clone(&runtime), path.clone());
        let token = CancellationToken::new();

        let stop = token.clone();
        let watcher = async {
            while runtime.lists.load(Ordering::SeqCst) == 0 || !path.exists() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            stop.cancel();
        };
        tokio::join!(poll(&p, Duration::from_secs(3600), token), watcher);

        let doc: DiscoveryDocument = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(runtime.lists.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn slow_cycles_never_overlap() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Arc::new(FakeRuntime::new().with_list_delay(Duration::from_millis(40)));
        let p = publisher(Arc::clone(&runtime), dir.path().join("targets.json"));
        let token = CancellationToken::new();

        let stop = token.clone();
        let watcher = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            stop.cancel();
        };
        tokio::join!(poll(&p, Duration::from_millis(10), token), watcher);

        assert!(runtime.lists.load(Ordering::SeqCst) >= 2);
        assert_eq!(runtime.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancelled_before_start_runs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Arc::new(FakeRuntime::new());
        let p = publisher(Arc::clone(&runtime), dir.path().join("targets.json"));
        let token = CancellationToken::new();
        token.cancel();

        poll(&p, Duration::from_millis(10), token).await;
        assert_eq!(runtime.lists.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failing_cycles_keep_looping() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Arc::new(
            FakeRuntime::new()
                .with_container("1", ContainerInspection::new("/a", "h"))
                .failing_on("1"),
        );
        let path = dir.path().join("targets.json");
        let p = publisher(Arc::clone(&runtime), path.clone());
        let token = CancellationToken::new();

        let stop = token.clone();
        let watcher = async {
            while runtime.lists.load(Ordering::SeqCst) < 3 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            stop.cancel();
        };
        tokio::join!(poll(&p, Duration::from_millis(5), token), watcher);

        assert!(!path.exists());
    }
}
