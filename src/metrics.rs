// Metrics hooks for phrase alignment.
//
// Callers install a global `AlignMetrics` implementation via
// [`set_align_metrics`]; every call to [`align`](crate::align) then reports
// its latency, matrix shape and outcome. Nothing is recorded until a
// recorder is installed.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for alignment runs.
pub trait AlignMetrics: Send + Sync {
    /// Record the outcome of one alignment.
    ///
    /// `rows` and `columns` are the sizes of the smaller and larger phrase
    /// set. `result` carries the total pairing cost on success.
    fn record_align(
        &self,
        latency: Duration,
        rows: usize,
        columns: usize,
        result: Result<usize, &crate::AlignError>,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AlignMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn AlignMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn AlignMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global alignment metrics recorder.
pub fn set_align_metrics(recorder: Option<Arc<dyn AlignMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
