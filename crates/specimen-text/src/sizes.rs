//! Size ladders for the sample string.

use crate::face::FontFace;

/// Sizes a scalable face is previewed at.
pub const SCALABLE_SIZES: [u32; 8] = [8, 10, 12, 18, 24, 36, 48, 72];
/// Alphabet line size for scalable faces, and the ceiling for bitmap faces.
pub const ALPHA_SIZE: u32 = 24;

/// Sizes to render the sample at, and the size of the alphabet lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeLadder {
    pub sizes: Vec<u32>,
    /// Zero when a bitmap face has no strike small enough.
    pub alpha_size: u32,
}

impl SizeLadder {
    /// The ladder used for every scalable face.
    pub fn scalable() -> Self {
        Self {
            sizes: SCALABLE_SIZES.to_vec(),
            alpha_size: ALPHA_SIZE,
        }
    }

    /// Ladder for a bitmap face offering `heights`, kept in the given order.
    pub fn from_heights(heights: impl IntoIterator<Item = u32>) -> Self {
        let sizes: Vec<u32> = heights.into_iter().filter(|&h| h > 0).collect();
        let alpha_size = sizes
            .iter()
            .copied()
            .filter(|&h| h <= ALPHA_SIZE)
            .max()
            .unwrap_or(0);
        Self { sizes, alpha_size }
    }
}

/// Compute the size ladder for `face`.
pub fn build_sizes(face: &FontFace) -> SizeLadder {
    if face.is_scalable() {
        return SizeLadder::scalable();
    }

    let ladder = SizeLadder::from_heights(face.fixed_sizes().iter().map(|s| s.height as u32));
    if ladder.sizes.is_empty() {
        tracing::warn!("bitmap face '{}' lists no strikes", face.family_name());
    }
    ladder
}
