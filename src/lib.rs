//! WhiteArmy - Community Portal Core
//!
//! Core services for the White Army Arts & Sports Club portal (Thumpoly
//! village). Provides the localization engine (locale state, message bundle
//! loading, key resolution, placeholder interpolation), the header
//! visibility state machine, the canonical navigation table, and the club
//! identity constants the localized strings interpolate.

pub mod constants;
pub mod i18n;
pub mod ui;

// Re-export commonly used types
pub use i18n::context::I18nContext;
pub use i18n::document::MessageDocument;
pub use i18n::loader::{BundledMessages, MessageSource};
pub use i18n::Locale;
