//! The preview model.
//!
//! A [`FontPreview`] is owned by one thread. Setting a locator starts a background
//! load; the owner calls [`FontPreview::process_pending`] (once per frame or idle tick)
//! to apply finished loads. Every load is tagged with a generation and only the most
//! recent generation may change the model, so overlapping loads can finish in any order.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use specimen_assets::{Locator, LocatorReader, TaskPool};
use specimen_core::PreviewConfig;
use specimen_text::{FontFace, FontLoader, LoadError, LoadErrorKind, LoadJob, LoadResult, language};

use crate::content::{LoadedFont, PreviewContent};
use crate::event::{PreviewEvent, PreviewEventBuffer};
use crate::layout::{self, PreviewGeometry};
use crate::surface::TextSurface;

type LoadedObserver = Box<dyn FnMut(&PreviewContent)>;

struct PendingLoad {
    generation: u64,
    job: LoadJob,
}

/// Preview state for one font locator.
pub struct FontPreview {
    loader: FontLoader,
    config: PreviewConfig,
    language: String,
    rng: StdRng,

    locator: Option<Locator>,
    generation: u64,
    pending: Vec<PendingLoad>,

    font: Option<LoadedFont>,
    last_error: Option<LoadError>,

    events: PreviewEventBuffer,
    observers: Vec<LoadedObserver>,
}

impl FontPreview {
    /// Create an empty preview loading through `loader`.
    pub fn new(loader: FontLoader, config: PreviewConfig) -> Self {
        let language = config
            .language
            .clone()
            .unwrap_or_else(language::current_language);
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        tracing::debug!("font preview created (sample language '{}')", language);

        Self {
            loader,
            config,
            language,
            rng,
            locator: None,
            generation: 0,
            pending: Vec::new(),
            font: None,
            last_error: None,
            events: PreviewEventBuffer::new(),
            observers: Vec::new(),
        }
    }

    /// Create a preview reading disk and `memory://` locators on its own pool.
    pub fn from_config(config: PreviewConfig) -> Self {
        let pool = match config.worker_threads {
            Some(threads) => TaskPool::new(threads),
            None => TaskPool::default_threads(),
        };
        Self::new(FontLoader::new(LocatorReader::new(), Arc::new(pool)), config)
    }

    /// The locator most recently set.
    pub fn locator(&self) -> Option<&Locator> {
        self.locator.as_ref()
    }

    /// Set the locator and start loading it. Returns the load's generation.
    ///
    /// Loads already in flight keep running, but their results are discarded.
    pub fn set_locator(&mut self, locator: impl Into<Locator>) -> u64 {
        let locator = locator.into();
        self.generation += 1;

        tracing::debug!("loading '{}' as generation {}", locator, self.generation);
        let job = self.loader.load(locator.clone());
        self.pending.push(PendingLoad {
            generation: self.generation,
            job,
        });
        self.locator = Some(locator);
        self.generation
    }

    /// Generation of the most recent [`set_locator`](Self::set_locator) call.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether any load is still in flight.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply every finished load without blocking. Returns how many completed.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        let mut i = 0;
        while i < self.pending.len() {
            match self.pending[i].job.try_complete() {
                Some(result) => {
                    let load = self.pending.remove(i);
                    self.complete(load.generation, result);
                    handled += 1;
                }
                None => i += 1,
            }
        }
        handled
    }

    /// Block until the current generation's load has been applied.
    ///
    /// Returns the failure kind if that load failed.
    pub fn block_until_loaded(&mut self) -> Result<(), LoadErrorKind> {
        let current = self
            .pending
            .iter()
            .position(|load| load.generation == self.generation);

        if let Some(index) = current {
            let load = self.pending.remove(index);
            let result = load.job.wait();
            self.complete(load.generation, result);
        }
        self.process_pending();

        match &self.last_error {
            Some(err) => Err(err.kind()),
            None => Ok(()),
        }
    }

    fn complete(&mut self, generation: u64, result: LoadResult<FontFace>) {
        if generation != self.generation {
            tracing::debug!(
                "discarding stale load of generation {} (current {})",
                generation,
                self.generation
            );
            return;
        }

        match result {
            Ok(face) => {
                let loaded = LoadedFont::new(
                    face,
                    &self.language,
                    self.config.random_sample_len,
                    &mut self.rng,
                );
                let title = loaded.content().text.title.clone();

                // The previous face and its buffer go before the new one is installed.
                drop(self.font.take());
                self.font = Some(loaded);
                self.last_error = None;

                tracing::debug!("generation {} loaded: {}", generation, title);
                self.events.push(PreviewEvent::ResizeRequested);
                self.events.push(PreviewEvent::Loaded { generation, title });

                if let Some(font) = &self.font {
                    for observer in &mut self.observers {
                        observer(font.content());
                    }
                }
            }
            Err(err) => {
                tracing::warn!("generation {} failed to load: {}", generation, err);
                self.events.push(PreviewEvent::LoadFailed {
                    generation,
                    kind: err.kind(),
                    message: err.to_string(),
                });
                self.last_error = Some(err);
            }
        }
    }

    /// Register a callback run once per successful load, after content is installed.
    pub fn connect_loaded(&mut self, observer: impl FnMut(&PreviewContent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Drain events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<PreviewEvent> {
        self.events.drain().collect()
    }

    /// The most recent load failure, cleared by the next successful load.
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }

    pub fn face(&self) -> Option<&FontFace> {
        self.font.as_ref().map(LoadedFont::face)
    }

    pub fn content(&self) -> Option<&PreviewContent> {
        self.font.as_ref().map(LoadedFont::content)
    }

    pub fn loaded_font(&self) -> Option<&LoadedFont> {
        self.font.as_ref()
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Language the sample string is chosen for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Size the preview needs; 1x1 when nothing is loaded.
    pub fn measure<'f, S: TextSurface<'f>>(&'f self, surface: &mut S) -> PreviewGeometry {
        layout::measure(self.font.as_ref(), self.config.section_spacing, surface)
    }

    /// Draw the preview onto `surface`.
    pub fn paint<'f, S: TextSurface<'f>>(&'f self, surface: &mut S) -> PreviewGeometry {
        layout::paint(self.font.as_ref(), self.config.section_spacing, surface)
    }
}
