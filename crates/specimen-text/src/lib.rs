//! Specimen Text - font faces and preview content
//!
//! This crate turns a font file into the content of a preview:
//! - [`FontLoader`] reads and parses fonts on a background pool
//! - [`coverage`] checks which strings a face can render
//! - [`synthesize`] picks the alphabet lines, sample string and title
//! - [`build_sizes`] computes the size ladder
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use specimen_text::{FontLoader, build_sizes, synthesize};
//!
//! let loader = FontLoader::default();
//! let mut face = loader.load("/usr/share/fonts/DejaVuSans.ttf").wait()?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let text = synthesize(&mut face, "en-US", 36, &mut rng);
//! let ladder = build_sizes(&face);
//! println!("{} at {:?}", text.title, ladder.sizes);
//! # Ok::<(), specimen_text::LoadError>(())
//! ```

pub mod coverage;
pub mod error;
pub mod face;
pub mod language;
pub mod loader;
pub mod sample;
pub mod sizes;
pub mod strikes;

pub use coverage::{Coverage, covers, probe};
pub use error::{FaceError, LoadError, LoadErrorKind, LoadResult};
pub use face::{CharMapIndex, CharMapInfo, FontFace, FontFormat};
pub use loader::{FACE_INDEX, FontLoader, LoadJob};
pub use sample::{
    LOWERCASE_TEXT, PUNCTUATION_TEXT, SampleText, UPPERCASE_TEXT, random_sample, synthesize,
};
pub use sizes::{ALPHA_SIZE, SCALABLE_SIZES, SizeLadder, build_sizes};
pub use strikes::FixedSize;
