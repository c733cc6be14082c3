//! Translation metrics and observability.
//!
//! Missing keys and invalid language codes are silently skipped at the call
//! site (they only produce a log diagnostic), so these counters are the one
//! place where that breakage stays visible.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Elements whose key resolved and whose content was overwritten
    applied: AtomicUsize,

    /// Key paths that failed to resolve during an `apply` pass
    missing_keys: AtomicUsize,

    /// Rejected `switch` calls with an unsupported language code
    invalid_languages: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            applied: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
            invalid_languages: AtomicUsize::new(0),
        })
    }

    /// Record a successfully applied translation.
    pub fn record_applied(&self) {
        self.applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key path that did not resolve.
    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected switch to an unsupported language.
    pub fn record_invalid_language(&self) {
        self.invalid_languages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn invalid_languages(&self) -> usize {
        self.invalid_languages.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let applied = self.applied();
        let missing = self.missing_keys();
        let total = applied + missing;
        let hit_rate = if total > 0 {
            (applied as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            applied,
            missing_keys: missing,
            invalid_languages: self.invalid_languages(),
            hit_rate,
        }
    }
}

/// Snapshot of translation metrics, serializable for logging.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub applied: usize,
    pub missing_keys: usize,
    pub invalid_languages: usize,
    /// Percentage of lookups that resolved
    pub hit_rate: f64,
}
