//! Locale state manager and translation facade.
//!
//! [`I18nContext`] is the single owner of the current locale and message
//! document. Consumers read synchronous snapshots through [`I18nContext::t`]
//! and friends; locale switches trigger an asynchronous bundle load whose
//! result is applied last-writer-wins.

use crate::i18n::document::MessageDocument;
use crate::i18n::interpolate::interpolate;
use crate::i18n::loader::{BundledMessages, MessageLoadError, MessageSource};
use crate::i18n::prefs::{FilePreferenceStore, PreferenceStore};
use crate::i18n::Locale;
use std::sync::Arc;

/// A pending bundle load issued by [`I18nContext::set_locale`] or
/// [`I18nContext::reload`].
///
/// Each request is tagged with the generation it was issued at; a request
/// whose generation no longer matches the context's latest is stale and its
/// result is discarded on completion.
#[derive(Debug, Clone, Copy)]
pub struct LoadRequest {
    /// The locale this load targets.
    pub locale: Locale,
    generation: u64,
}

/// The portal's translation context.
///
/// Holds the current locale (restored from the persisted preference at
/// startup), the currently loaded message document, and the loading flag.
/// The facade methods never panic and always return a string: while no
/// document is loaded, or when a key does not resolve, the key itself is
/// returned verbatim.
pub struct I18nContext {
    locale: Locale,
    document: Option<MessageDocument>,
    loading: bool,
    generation: u64,
    source: Arc<dyn MessageSource + Send + Sync>,
    prefs: Box<dyn PreferenceStore + Send + Sync>,
}

impl I18nContext {
    /// Create a context with the given bundle source and preference store.
    ///
    /// The initial locale is the persisted preference if it parses to a
    /// supported locale, else the default. No document is loaded yet; call
    /// [`I18nContext::init`] (or drive [`I18nContext::reload`] manually) to
    /// load the first bundle.
    pub fn new(
        source: impl MessageSource + Send + Sync + 'static,
        prefs: impl PreferenceStore + Send + Sync + 'static,
    ) -> Self {
        let prefs: Box<dyn PreferenceStore + Send + Sync> = Box::new(prefs);
        let locale = match prefs.load().as_deref().and_then(Locale::from_id) {
            Some(stored) => {
                tracing::debug!(locale = %stored, "Restored locale preference");
                stored
            }
            None => Locale::default(),
        };

        Self {
            locale,
            document: None,
            loading: true,
            generation: 0,
            source: Arc::new(source),
            prefs,
        }
    }

    /// Create a context with the embedded bundles and the default
    /// file-backed preference store.
    pub fn with_defaults() -> Self {
        Self::new(BundledMessages, FilePreferenceStore::new())
    }

    /// The current locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Language tag for the document-level language attribute; the shell
    /// embedding this context reflects it for accessibility and SEO.
    pub fn lang_tag(&self) -> &'static str {
        self.locale.lang_tag()
    }

    /// Whether a bundle load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The currently loaded message document, if any.
    pub fn document(&self) -> Option<&MessageDocument> {
        self.document.as_ref()
    }

    /// Switch to `locale`, persisting the choice.
    ///
    /// Returns the load request to drive, or `None` when `locale` is
    /// already current with a document loaded (no reload needed). The
    /// previous document keeps serving until the new load completes.
    pub fn set_locale(&mut self, locale: Locale) -> Option<LoadRequest> {
        if locale == self.locale && self.document.is_some() {
            return None;
        }

        if let Err(e) = self.prefs.save(locale.id()) {
            tracing::warn!(locale = %locale, error = %e, "Failed to persist locale preference");
        }

        tracing::info!(from = %self.locale, to = %locale, "Locale changed");
        self.locale = locale;
        Some(self.begin_load(locale))
    }

    /// Request a fresh load of the current locale's bundle, e.g. at startup
    /// or to retry after a failed load.
    pub fn reload(&mut self) -> LoadRequest {
        self.begin_load(self.locale)
    }

    fn begin_load(&mut self, locale: Locale) -> LoadRequest {
        self.loading = true;
        self.generation += 1;
        LoadRequest {
            locale,
            generation: self.generation,
        }
    }

    /// Apply a finished load.
    ///
    /// Only the latest issued request wins: a stale request (superseded by
    /// a newer `set_locale`/`reload` before it completed) is discarded
    /// silently. A failed load keeps the previously loaded document.
    pub fn complete(&mut self, request: LoadRequest, result: Result<MessageDocument, MessageLoadError>) {
        if request.generation != self.generation {
            tracing::debug!(locale = %request.locale, "Discarding stale bundle load");
            return;
        }

        self.loading = false;
        match result {
            Ok(document) => {
                tracing::debug!(locale = %request.locale, messages = document.count(), "Bundle loaded");
                self.document = Some(document);
            }
            Err(e) => {
                tracing::warn!(
                    locale = %request.locale,
                    error = %e,
                    "Failed to load message bundle; keeping previous messages"
                );
            }
        }
    }

    /// Load the initial bundle for the startup locale.
    pub async fn init(&mut self) {
        let request = self.reload();
        self.drive(request).await;
    }

    /// Switch to `locale` and drive the resulting load to completion.
    pub async fn change_locale(&mut self, locale: Locale) {
        if let Some(request) = self.set_locale(locale) {
            self.drive(request).await;
        }
    }

    async fn drive(&mut self, request: LoadRequest) {
        let source = Arc::clone(&self.source);
        let result = tokio::task::spawn_blocking(move || source.load(request.locale)).await;
        match result {
            Ok(result) => self.complete(request, result),
            Err(e) => self.complete(request, Err(MessageLoadError::IoError(e.to_string()))),
        }
    }

    /// Translate `key`, falling back to the key itself while no document is
    /// loaded or when the key does not resolve.
    pub fn t(&self, key: &str) -> String {
        self.t_args(key, &[])
    }

    /// Translate `key` with placeholder arguments.
    ///
    /// Always returns synchronously and never panics; unresolved keys fall
    /// back to the key, unresolved placeholders stay verbatim.
    pub fn t_args(&self, key: &str, args: &[(&str, String)]) -> String {
        let Some(document) = &self.document else {
            return key.to_string();
        };

        match document.resolve(key) {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }
}

impl std::fmt::Debug for I18nContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nContext")
            .field("locale", &self.locale)
            .field("loading", &self.loading)
            .field("loaded", &self.document.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::prefs::MemoryPreferenceStore;

    fn context() -> I18nContext {
        I18nContext::new(BundledMessages, MemoryPreferenceStore::new())
    }

    #[test]
    fn test_starts_loading_with_no_document() {
        let ctx = context();
        assert_eq!(ctx.locale(), Locale::En);
        assert!(ctx.is_loading());
        assert!(ctx.document().is_none());
    }

    #[test]
    fn test_fallback_to_key_before_load() {
        let ctx = context();
        assert_eq!(ctx.t("nav.home"), "nav.home");
    }

    #[test]
    fn test_set_locale_persists_preference() {
        let mut ctx = context();
        let request = ctx.set_locale(Locale::Ml).expect("Should issue a load");
        assert_eq!(request.locale, Locale::Ml);
        assert_eq!(ctx.prefs.load(), Some("ml".to_string()));
        assert!(ctx.is_loading());
    }

    #[test]
    fn test_set_locale_noop_when_already_loaded() {
        let mut ctx = context();
        let request = ctx.reload();
        let result = BundledMessages.load(Locale::En);
        ctx.complete(request, result);

        assert!(ctx.set_locale(Locale::En).is_none());
        assert!(!ctx.is_loading());
    }

    #[test]
    fn test_failed_load_keeps_previous_document() {
        let mut ctx = context();
        let request = ctx.reload();
        ctx.complete(request, BundledMessages.load(Locale::En));
        assert_eq!(ctx.t("nav.home"), "Home");

        let retry = ctx.reload();
        ctx.complete(retry, Err(MessageLoadError::IoError("offline".to_string())));
        assert!(!ctx.is_loading());
        assert_eq!(ctx.t("nav.home"), "Home");
    }

    #[test]
    fn test_failed_first_load_falls_back_to_keys() {
        let mut ctx = context();
        let request = ctx.reload();
        ctx.complete(request, Err(MessageLoadError::IoError("offline".to_string())));
        assert!(!ctx.is_loading());
        assert_eq!(ctx.t("nav.home"), "nav.home");
    }

    #[test]
    fn test_lang_tag_follows_locale() {
        let mut ctx = context();
        assert_eq!(ctx.lang_tag(), "en");
        let _ = ctx.set_locale(Locale::Ml);
        assert_eq!(ctx.lang_tag(), "ml");
    }
}
