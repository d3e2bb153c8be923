//! Resource locators - where font bytes come from.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::{AssetError, AssetResult};

const MEMORY_SCHEME: &str = "memory://";

/// An opaque string naming a font's byte source.
///
/// Accepted forms:
/// - `file:///usr/share/fonts/DejaVuSans.ttf` (percent-encoded file URI)
/// - `memory://builtin/Sample.ttf` (bytes registered with a [`MemoryReader`](crate::MemoryReader))
/// - `/usr/share/fonts/DejaVuSans.ttf` or `fonts/Sample.otf` (plain paths)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locator(String);

/// A locator resolved to a concrete byte source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// A file on disk.
    Disk(PathBuf),
    /// A named in-memory blob.
    Memory(String),
}

impl Locator {
    /// Wrap a locator string. No validation happens until [`Locator::resolve`].
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Build a `memory://` locator for the given key.
    pub fn memory(key: impl AsRef<str>) -> Self {
        Self(format!("{}{}", MEMORY_SCHEME, key.as_ref()))
    }

    /// Build a `file://` URI locator from a filesystem path.
    ///
    /// Relative paths are resolved against the current directory. Falls back to the
    /// plain path form when no URI can be built.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let absolute = if path.is_absolute() {
            path
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path)
        };

        match Url::from_file_path(&absolute) {
            Ok(url) => Self(url.to_string()),
            Err(()) => Self(absolute.to_string_lossy().into_owned()),
        }
    }

    /// The locator string as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the locator is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Map this locator to the byte source it names.
    pub fn resolve(&self) -> AssetResult<ResolvedSource> {
        let raw = self.0.as_str();

        if raw.is_empty() {
            return Err(self.invalid("empty locator"));
        }

        if let Some(key) = raw.strip_prefix(MEMORY_SCHEME) {
            if key.is_empty() {
                return Err(self.invalid("memory locator without a key"));
            }
            return Ok(ResolvedSource::Memory(key.to_string()));
        }

        if raw.starts_with("file:") {
            let url = Url::parse(raw).map_err(|e| self.invalid(e.to_string()))?;
            let path = url
                .to_file_path()
                .map_err(|()| self.invalid("file URI does not name a local path"))?;
            return Ok(ResolvedSource::Disk(path));
        }

        // Anything else with a scheme (http://, smb://, ...) is not a local source.
        if let Some((scheme, _)) = raw.split_once("://")
            && !scheme.is_empty()
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
        {
            return Err(self.invalid(format!("unsupported scheme '{}'", scheme)));
        }

        Ok(ResolvedSource::Disk(PathBuf::from(raw)))
    }

    fn invalid(&self, reason: impl Into<String>) -> AssetError {
        AssetError::InvalidLocator {
            locator: self.0.clone(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for Locator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

impl From<&String> for Locator {
    fn from(locator: &String) -> Self {
        Self(locator.clone())
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
