//! Background byte reading for locators.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{AssetError, AssetResult};
use crate::source::{Locator, ResolvedSource};

/// Future type for async byte loading.
pub type BytesFuture = Pin<Box<dyn Future<Output = AssetResult<Vec<u8>>> + Send + 'static>>;

/// Trait for loading the full contents of a locator.
///
/// The returned future owns everything it needs. Implementations must not do the
/// actual I/O before the future is first polled: the future is driven on a
/// background pool and the caller expects `read_bytes` itself to return at once.
pub trait BytesReader: Send + Sync {
    /// Read all bytes named by `locator`.
    fn read_bytes(&self, locator: &Locator) -> BytesFuture;
}

/// Reads files from disk.
pub struct FileReader {
    /// Base path for relative paths.
    base_path: PathBuf,
}

impl FileReader {
    /// Create a new file reader with a base path.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Read the file at `path` once the returned future is polled.
    pub fn read_path(&self, path: &Path) -> BytesFuture {
        let full_path = self.resolve_path(path);
        Box::pin(async move { read_file(full_path) })
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self::new(".")
    }
}

fn read_file(full_path: PathBuf) -> AssetResult<Vec<u8>> {
    tracing::trace!("reading {}", full_path.display());
    std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound {
                path: full_path.display().to_string(),
            }
        } else {
            AssetError::Io {
                path: full_path,
                source: e,
            }
        }
    })
}

impl BytesReader for FileReader {
    fn read_bytes(&self, locator: &Locator) -> BytesFuture {
        match locator.resolve() {
            Ok(ResolvedSource::Disk(path)) => self.read_path(&path),
            Ok(ResolvedSource::Memory(key)) => Box::pin(async move {
                Err(AssetError::NotFound {
                    path: format!("memory://{}", key),
                })
            }),
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }
}

/// In-memory bytes for embedded fonts and tests.
#[derive(Default)]
pub struct MemoryReader {
    /// Stored bytes keyed by memory key.
    files: HashMap<String, Arc<[u8]>>,
}

impl MemoryReader {
    /// Create a new empty memory reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes for a key.
    pub fn insert(&mut self, key: impl AsRef<str>, bytes: impl Into<Arc<[u8]>>) {
        self.files.insert(key.as_ref().to_string(), bytes.into());
    }

    /// Add bytes from static data.
    pub fn insert_static(&mut self, key: impl AsRef<str>, bytes: &'static [u8]) {
        self.files.insert(key.as_ref().to_string(), Arc::from(bytes));
    }

    /// Check if bytes exist for a key.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.files.contains_key(key.as_ref())
    }

    fn read_key(&self, key: String) -> BytesFuture {
        let shared = self.files.get(&key).cloned();
        Box::pin(async move {
            shared
                .map(|bytes| bytes.to_vec())
                .ok_or(AssetError::NotFound {
                    path: format!("memory://{}", key),
                })
        })
    }
}

impl BytesReader for MemoryReader {
    fn read_bytes(&self, locator: &Locator) -> BytesFuture {
        match locator.resolve() {
            Ok(ResolvedSource::Memory(key)) => self.read_key(key),
            // Bare keys are accepted so a MemoryReader can be used on its own.
            Ok(ResolvedSource::Disk(_)) => self.read_key(locator.as_str().to_string()),
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }
}

/// Dispatches each locator to the disk or memory reader by its scheme.
#[derive(Default)]
pub struct LocatorReader {
    files: FileReader,
    memory: MemoryReader,
}

impl LocatorReader {
    /// Create a reader resolving relative paths against the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader resolving relative paths against `base_path`.
    pub fn with_base_path(base_path: impl AsRef<Path>) -> Self {
        Self {
            files: FileReader::new(base_path),
            memory: MemoryReader::new(),
        }
    }

    /// Register embedded bytes reachable as `memory://<key>`.
    pub fn add_embedded(&mut self, key: impl AsRef<str>, bytes: impl Into<Arc<[u8]>>) {
        self.memory.insert(key, bytes);
    }
}

impl BytesReader for LocatorReader {
    fn read_bytes(&self, locator: &Locator) -> BytesFuture {
        match locator.resolve() {
            Ok(ResolvedSource::Disk(path)) => self.files.read_path(&path),
            Ok(ResolvedSource::Memory(key)) => self.memory.read_key(key),
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }
}
