//! Specimen - font previews
//!
//! Specimen loads a font file in the background and lays out a preview of it: the
//! family name, alphabet and punctuation lines, and a sample string at a ladder of
//! sizes. Drawing goes through the [`TextSurface`] trait so any canvas can host it.
//!
//! - [`FontPreview`] - the preview model (locator property, load generations, events)
//! - [`layout`] - the shared measure/paint traversal
//! - [`DisplayListSurface`] - a headless surface recording draw commands
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use specimen::{DisplayListSurface, FontPreview, Padding, PreviewConfig, SurfaceStyle};
//!
//! specimen::logging::init();
//!
//! let mut preview = FontPreview::from_config(PreviewConfig::default());
//! preview.set_locator("/usr/share/fonts/DejaVuSans.ttf");
//!
//! // In a real host, call `process_pending` once per frame instead.
//! preview.block_until_loaded().ok();
//!
//! let mut surface = DisplayListSurface::new(SurfaceStyle {
//!     padding: Padding::uniform(6),
//!     ..Default::default()
//! });
//! let size = preview.measure(&mut surface);
//! preview.paint(&mut surface);
//! println!("{}x{} with {} draws", size.width, size.height, surface.display_list().len());
//! ```

pub mod content;
pub mod display_list;
pub mod event;
pub mod layout;
pub mod preview;
pub mod surface;

pub use content::{LoadedFont, PreviewContent};
pub use display_list::{DisplayList, DisplayListSurface, DrawText, FontKind};
pub use event::{PreviewEvent, PreviewEventBuffer};
pub use layout::{LayoutPass, PreviewGeometry};
pub use preview::FontPreview;
pub use surface::{Color, FontChoice, Padding, SurfaceStyle, TextExtents, TextSurface};

pub use specimen_assets::Locator;
pub use specimen_core::{PreviewConfig, logging};
pub use specimen_text::{LoadError, LoadErrorKind};
