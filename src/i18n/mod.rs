//! Internationalization (i18n) module for the two-language UI.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the validated `Language` type, the nested string tables with
//! dot-path lookup, the document-level switcher, and translation metrics.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported languages (Greek
//!   canonical, English alternate)
//! - `language`: type-safe `Language` validated against the registry
//! - `table`: static nested string tables plus key-path resolution
//! - `switcher`: the page-lifetime controller that applies translations
//! - `metrics`: observability for missing keys and rejected switches

mod language;
mod metrics;
mod registry;
mod switcher;
pub mod table;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use switcher::{LanguageSwitcher, STORAGE_KEY};
