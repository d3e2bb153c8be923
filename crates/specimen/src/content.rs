//! Loaded face together with the content derived from it.

use rand::Rng;
use specimen_text::{FontFace, SampleText, SizeLadder, build_sizes, synthesize};

/// Everything the layout engine renders for one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewContent {
    pub text: SampleText,
    pub ladder: SizeLadder,
}

/// A face and its derived content, installed and released as one unit.
#[derive(Debug)]
pub struct LoadedFont {
    face: FontFace,
    content: PreviewContent,
}

impl LoadedFont {
    /// Derive the preview content for `face` and bundle the two.
    pub fn new<R: Rng + ?Sized>(
        mut face: FontFace,
        language: &str,
        sample_len: usize,
        rng: &mut R,
    ) -> Self {
        let text = synthesize(&mut face, language, sample_len, rng);
        let ladder = build_sizes(&face);
        Self {
            face,
            content: PreviewContent { text, ladder },
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn content(&self) -> &PreviewContent {
        &self.content
    }
}

impl Drop for LoadedFont {
    fn drop(&mut self) {
        tracing::debug!("releasing face '{}'", self.content.text.title);
    }
}
