//! Background font loading.
//!
//! [`FontLoader::load`] returns immediately with a [`LoadJob`]. The locator's bytes are
//! read and parsed on the loader's [`TaskPool`]; the owning context collects the
//! result by polling the job ([`LoadJob::try_complete`]) or awaiting it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use async_executor::Task;
use futures_lite::future;
use specimen_assets::{BytesReader, Locator, LocatorReader, TaskPool};

use crate::error::{LoadError, LoadResult};
use crate::face::FontFace;

/// Face index loaded from every font file.
pub const FACE_INDEX: u32 = 0;

/// Loads font faces off the calling thread.
pub struct FontLoader {
    reader: Arc<dyn BytesReader>,
    pool: Arc<TaskPool>,
}

impl FontLoader {
    /// Create a loader reading through `reader` on `pool`.
    pub fn new(reader: impl BytesReader + 'static, pool: Arc<TaskPool>) -> Self {
        Self {
            reader: Arc::new(reader),
            pool,
        }
    }

    /// Create a loader with its own pool of `threads` workers.
    pub fn with_threads(reader: impl BytesReader + 'static, threads: usize) -> Self {
        Self::new(reader, Arc::new(TaskPool::new(threads)))
    }

    /// The pool reads and parses run on.
    pub fn pool(&self) -> &Arc<TaskPool> {
        &self.pool
    }

    /// Start loading face 0 of `locator`.
    ///
    /// Never blocks. If the pool is not running the returned job has already failed
    /// with [`LoadError::EngineInit`] and nothing was scheduled.
    pub fn load(&self, locator: impl Into<Locator>) -> LoadJob {
        let locator = locator.into();

        if !self.pool.is_running() {
            tracing::warn!("cannot load '{}': task pool is not running", locator);
            return LoadJob::failed(
                locator,
                LoadError::EngineInit {
                    message: "background task pool is not running".to_string(),
                },
            );
        }

        let read = self.reader.read_bytes(&locator);
        let name = locator.to_string();
        let spawned = self.pool.spawn(async move {
            let bytes = read.await.map_err(|source| LoadError::Read {
                locator: name.clone(),
                source,
            })?;

            tracing::trace!("read {} bytes from '{}'", bytes.len(), name);
            FontFace::from_bytes(bytes, FACE_INDEX).map_err(|source| LoadError::Parse {
                locator: name,
                source,
            })
        });

        match spawned {
            Ok(task) => {
                tracing::debug!("load of '{}' scheduled", locator);
                LoadJob {
                    locator,
                    state: JobState::Running(task),
                }
            }
            Err(err) => LoadJob::failed(
                locator,
                LoadError::EngineInit {
                    message: err.to_string(),
                },
            ),
        }
    }
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new(LocatorReader::new(), Arc::new(TaskPool::default_threads()))
    }
}

enum JobState {
    Running(Task<LoadResult<FontFace>>),
    Failed(LoadError),
    Finished,
}

/// One in-flight font load.
///
/// The job yields its completion exactly once. Dropping a job that has not completed
/// cancels the background work.
pub struct LoadJob {
    locator: Locator,
    state: JobState,
}

impl LoadJob {
    fn failed(locator: Locator, error: LoadError) -> Self {
        Self {
            locator,
            state: JobState::Failed(error),
        }
    }

    /// The locator being loaded.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Whether the completion has already been handed out.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, JobState::Finished)
    }

    /// Take the completion if it is ready, without blocking.
    ///
    /// Returns `None` while the load is in flight and after the completion was taken.
    pub fn try_complete(&mut self) -> Option<LoadResult<FontFace>> {
        if self.is_finished() {
            return None;
        }
        future::block_on(future::poll_once(&mut *self))
    }

    /// Block the calling thread until the load completes.
    pub fn wait(self) -> LoadResult<FontFace> {
        future::block_on(self)
    }
}

impl Future for LoadJob {
    type Output = LoadResult<FontFace>;

    /// A job polled again after completing stays pending.
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match std::mem::replace(&mut self.state, JobState::Finished) {
            JobState::Running(mut task) => match Pin::new(&mut task).poll(cx) {
                Poll::Ready(result) => {
                    tracing::debug!("load of '{}' completed", self.locator);
                    Poll::Ready(result)
                }
                Poll::Pending => {
                    self.state = JobState::Running(task);
                    Poll::Pending
                }
            },
            JobState::Failed(err) => Poll::Ready(Err(err)),
            JobState::Finished => Poll::Pending,
        }
    }
}

impl std::fmt::Debug for LoadJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            JobState::Running(_) => "running",
            JobState::Failed(_) => "failed",
            JobState::Finished => "finished",
        };
        f.debug_struct("LoadJob")
            .field("locator", &self.locator)
            .field("state", &state)
            .finish()
    }
}
