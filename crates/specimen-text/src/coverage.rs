//! Glyph coverage probing.
//!
//! Probing never changes the face: maps are queried by index and the active map is
//! left as it was.

use crate::face::{CharMapIndex, FontFace};

/// Outcome of a coverage probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    /// First map, in enumeration order, that resolves every codepoint.
    pub charmap: Option<CharMapIndex>,
    /// Number of maps examined before stopping.
    pub maps_tried: u16,
}

impl Coverage {
    pub fn is_covered(&self) -> bool {
        self.charmap.is_some()
    }
}

/// Probe each character map in order and stop at the first that covers `text`.
pub fn probe(face: &FontFace, text: &str) -> Coverage {
    let mut maps_tried = 0;

    for info in face.charmaps() {
        maps_tried += 1;
        let missing = text
            .chars()
            .find(|&c| face.char_index_in(info.index, c as u32).is_none());

        match missing {
            None => {
                tracing::trace!("charmap {} covers {:?}", info.index, text);
                return Coverage {
                    charmap: Some(info.index),
                    maps_tried,
                };
            }
            Some(c) => {
                tracing::trace!("charmap {} lacks U+{:04X}", info.index, c as u32);
            }
        }
    }

    Coverage {
        charmap: None,
        maps_tried,
    }
}

/// Whether some character map of `face` has a glyph for every codepoint of `text`.
pub fn covers(face: &FontFace, text: &str) -> bool {
    probe(face, text).is_covered()
}
