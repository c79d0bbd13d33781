//! Message bundle sources for compile-time and filesystem loading.

use crate::i18n::document::MessageDocument;
use crate::i18n::Locale;
use std::path::{Path, PathBuf};

/// A source of message bundles, one per supported locale.
///
/// Loading is idempotent: repeated calls for the same locale re-fetch the
/// bundle with no other side effects.
pub trait MessageSource {
    /// Load the message document for `locale`.
    fn load(&self, locale: Locale) -> Result<MessageDocument, MessageLoadError>;
}

/// Message bundles embedded at compile time.
///
/// The bundles for every supported locale are part of the binary, so the
/// happy path cannot fail at runtime; a parse error would indicate a broken
/// build asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledMessages;

impl BundledMessages {
    fn raw_bundle(locale: Locale) -> &'static str {
        match locale {
            Locale::En => include_str!("messages/en.json"),
            Locale::Ml => include_str!("messages/ml.json"),
        }
    }
}

impl MessageSource for BundledMessages {
    fn load(&self, locale: Locale) -> Result<MessageDocument, MessageLoadError> {
        MessageDocument::from_json(Self::raw_bundle(locale))
            .map_err(|e| MessageLoadError::ParseError(e.to_string()))
    }
}

/// Message bundles loaded from a directory of `<locale>.json` files.
///
/// Useful for deployments that override the embedded bundles without a
/// rebuild.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Create a source reading bundles from `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The path a locale's bundle is expected at.
    pub fn bundle_path(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.id()))
    }
}

impl MessageSource for DirectorySource {
    fn load(&self, locale: Locale) -> Result<MessageDocument, MessageLoadError> {
        let path = self.bundle_path(locale);
        if !path.exists() {
            return Err(MessageLoadError::BundleNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| MessageLoadError::IoError(e.to_string()))?;

        MessageDocument::from_json(&content).map_err(|e| MessageLoadError::ParseError(e.to_string()))
    }
}

/// Errors that can occur when loading a message bundle.
#[derive(Debug, thiserror::Error)]
pub enum MessageLoadError {
    #[error("Bundle not found: {0}")]
    BundleNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
