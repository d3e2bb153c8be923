//! Byte sources for the specimen previewer.
//!
//! A [`Locator`] names where font bytes live, a [`BytesReader`] turns it into a future
//! resolving to the full contents, and the [`TaskPool`] drives those futures on
//! background threads so the owning context never blocks on I/O.

pub mod error;
pub mod io;
pub mod source;
pub mod task_pool;

pub use error::{AssetError, AssetResult};
pub use io::{BytesFuture, BytesReader, FileReader, LocatorReader, MemoryReader};
pub use source::{Locator, ResolvedSource};
pub use task_pool::TaskPool;
