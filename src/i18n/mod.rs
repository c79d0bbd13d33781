//! Internationalization module for multi-language support.
//!
//! Provides the portal's translation services: locale state with persisted
//! preference, message bundle loading, dot-path key resolution, and
//! placeholder interpolation for runtime language switching.

pub mod context;
pub mod document;
pub mod interpolate;
pub mod loader;
pub mod prefs;

// Re-export types
pub use context::{I18nContext, LoadRequest};
pub use document::{MessageDocument, MessageNode};
pub use loader::{BundledMessages, DirectorySource, MessageLoadError, MessageSource};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Malayalam.
    Ml,
}

impl Locale {
    /// Get the locale identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ml => "ml",
        }
    }

    /// Language tag to reflect into the document-level language attribute.
    pub fn lang_tag(&self) -> &'static str {
        self.id()
    }

    /// Get the display name, as rendered by the language switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ml => "മലയാളം",
        }
    }

    /// Parse from a locale identifier (case-insensitive, tolerant of
    /// region tags such as `ml-IN`).
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        let lang = id.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "ml" => Some(Locale::Ml),
            _ => None,
        }
    }

    /// Get all supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ml]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Detect the system locale and return the best matching supported locale.
///
/// Not consulted by [`I18nContext::new`] (startup order is persisted
/// preference, then default); offered for embedders that want a smarter
/// first-run default before any preference has been saved.
pub fn detect_system_locale() -> Option<Locale> {
    sys_locale::get_locale().and_then(|locale| Locale::from_id(&locale))
}

/// Macro for convenient translation through an [`I18nContext`].
///
/// Arguments are converted with `to_string()`, so numeric values may be
/// passed directly.
#[macro_export]
macro_rules! t {
    ($ctx:expr, $key:expr) => {
        $ctx.t($key)
    };
    ($ctx:expr, $key:expr, $($name:expr => $value:expr),+ $(,)?) => {
        $ctx.t_args($key, &[$(($name, $value.to_string())),+])
    };
}
