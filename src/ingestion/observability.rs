use std::fmt;
use std::sync::Arc;

use crate::error::LoadError;

use super::unified::TableFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the file was rejected).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// Where the data came from: a path, or `<upload>` for byte buffers.
    pub source: String,
    /// Format used for parsing.
    pub format: TableFormat,
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of data rows read.
    pub rows: usize,
}

/// Observer interface for load outcomes.
///
/// The presentation layer implements this to surface success banners, rejection
/// reasons, and the fell-back-to-synthetic notice.
pub trait LoadObserver: Send + Sync {
    /// Called when a file is parsed successfully.
    fn on_loaded(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a file is rejected (parse or validation failure).
    fn on_rejected(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a rejection meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_rejected`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_rejected(ctx, severity, error)
    }

    /// Called when the caller substitutes the synthetic dataset for a rejected file.
    fn on_fallback(&self, _ctx: &LoadContext, _error: &LoadError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_loaded(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_loaded(ctx, stats);
        }
    }

    fn on_rejected(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_rejected(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }

    fn on_fallback(&self, ctx: &LoadContext, error: &LoadError) {
        for o in &self.observers {
            o.on_fallback(ctx, error);
        }
    }
}

/// Routes load events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn on_loaded(&self, ctx: &LoadContext, stats: LoadStats) {
        log::info!(
            "loaded format={:?} source={} rows={}",
            ctx.format,
            ctx.source,
            stats.rows
        );
    }

    fn on_rejected(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        log::warn!(
            "rejected severity={severity:?} format={:?} source={} err={error}",
            ctx.format,
            ctx.source
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        log::error!(
            "ALERT severity={severity:?} format={:?} source={} err={error}",
            ctx.format,
            ctx.source
        );
    }

    fn on_fallback(&self, ctx: &LoadContext, error: &LoadError) {
        log::warn!(
            "falling back to the synthetic dataset: source={} err={error}",
            ctx.source
        );
    }
}
