//! Test utilities for the specimen crates.
//!
//! - [`TestFontBuilder`] - synthesizes small but valid sfnt font binaries with chosen
//!   names, character maps, outlines and bitmap strikes
//! - `RecordingSurface` - a `TextSurface` with deterministic metrics that records every
//!   call (requires the `surface` feature)
//!
//! # Example
//!
//! ```rust
//! use specimen_test_utils::TestFontBuilder;
//!
//! let bytes = TestFontBuilder::new()
//!     .family("Fixture Sans")
//!     .unicode_charmap("abc")
//!     .build();
//!
//! assert_eq!(&bytes[..4], &[0x00, 0x01, 0x00, 0x00]);
//! ```

pub mod font_builder;
#[cfg(feature = "surface")]
pub mod recording_surface;

pub use font_builder::{PRINTABLE_ASCII, TestFontBuilder};
#[cfg(feature = "surface")]
pub use recording_surface::*;
