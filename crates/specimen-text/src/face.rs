//! Owned font face handle.
//!
//! [`FontFace`] bundles the parsed face with the byte buffer it borrows from. Dropping
//! the handle drops the parsed face first and the buffer second, and the buffer itself
//! is never handed out.

use owned_ttf_parser::{
    AsFaceRef, Face, GlyphId, OwnedFace, PlatformId, Tag, cmap, name_id,
};

use crate::error::FaceError;
use crate::strikes::{self, FixedSize};

/// Index of a character map within a face, in the face's enumeration order.
pub type CharMapIndex = u16;

/// Descriptor of one character map of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMapInfo {
    pub index: CharMapIndex,
    pub platform_id: u16,
    pub encoding_id: u16,
    pub format: u16,
}

impl CharMapInfo {
    /// Whether the map is keyed by Unicode codepoints.
    pub fn is_unicode(&self) -> bool {
        match self.platform_id {
            0 => true,
            3 => matches!(self.encoding_id, 1 | 10),
            _ => false,
        }
    }

    /// Whether the map can reach codepoints beyond the Basic Multilingual Plane.
    pub fn is_full_repertoire(&self) -> bool {
        matches!(
            (self.platform_id, self.encoding_id),
            (0, 4) | (0, 6) | (3, 10)
        )
    }
}

/// Detected font container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// TrueType font (.ttf)
    TrueType,
    /// OpenType font with CFF outlines (.otf)
    OpenType,
    /// Web Open Font Format (.woff)
    Woff,
    /// Web Open Font Format 2 (.woff2)
    Woff2,
    /// TrueType/OpenType collection (.ttc, .otc)
    Collection,
    Unknown,
}

impl FontFormat {
    /// Detect the format from the leading magic bytes.
    pub fn detect(data: &[u8]) -> Self {
        if data.len() < 4 {
            return FontFormat::Unknown;
        }

        match &data[0..4] {
            [0x00, 0x01, 0x00, 0x00] | [b't', b'r', b'u', b'e'] => FontFormat::TrueType,
            [b'O', b'T', b'T', b'O'] => FontFormat::OpenType,
            [b'w', b'O', b'F', b'F'] => FontFormat::Woff,
            [b'w', b'O', b'F', b'2'] => FontFormat::Woff2,
            [b't', b't', b'c', b'f'] => FontFormat::Collection,
            _ => FontFormat::Unknown,
        }
    }

    /// Whether faces in this format can be parsed directly.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            FontFormat::TrueType | FontFormat::OpenType | FontFormat::Collection
        )
    }
}

/// A parsed font face together with its backing bytes.
pub struct FontFace {
    face: OwnedFace,
    byte_len: usize,
    charmaps: Vec<CharMapInfo>,
    active: Option<CharMapIndex>,
    /// Sorted codepoints with a nonzero glyph under the active map.
    active_codepoints: Vec<char>,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family_name())
            .field("style", &self.style_name())
            .field("byte_len", &self.byte_len)
            .field("charmaps", &self.charmaps)
            .field("active", &self.active)
            .finish()
    }
}

impl FontFace {
    /// Parse face `index` of `data`, taking ownership of the buffer.
    ///
    /// On failure the buffer is released.
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self, FaceError> {
        let format = FontFormat::detect(&data);
        if !format.is_supported() {
            return Err(FaceError::Unsupported(format));
        }

        let byte_len = data.len();
        let face = OwnedFace::from_vec(data, index)?;

        let charmaps = face
            .as_face_ref()
            .tables()
            .cmap
            .map(|table| {
                table
                    .subtables
                    .into_iter()
                    .enumerate()
                    .map(|(i, sub)| CharMapInfo {
                        index: i as CharMapIndex,
                        platform_id: platform_code(sub.platform_id),
                        encoding_id: sub.encoding_id,
                        format: format_code(sub.format),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let mut face = Self {
            face,
            byte_len,
            charmaps,
            active: None,
            active_codepoints: Vec::new(),
        };
        if let Some(map) = face.preferred_charmap() {
            face.set_charmap(map);
        }
        Ok(face)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Size of the backing buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Family name, preferring the typographic family.
    pub fn family_name(&self) -> String {
        self.name(name_id::TYPOGRAPHIC_FAMILY)
            .or_else(|| self.name(name_id::FAMILY))
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Style name, preferring the typographic subfamily.
    pub fn style_name(&self) -> String {
        self.name(name_id::TYPOGRAPHIC_SUBFAMILY)
            .or_else(|| self.name(name_id::SUBFAMILY))
            .unwrap_or_else(|| {
                let face = self.face();
                match (face.is_bold(), face.is_italic()) {
                    (true, true) => "Bold Italic",
                    (true, false) => "Bold",
                    (false, true) => "Italic",
                    (false, false) => "Regular",
                }
                .to_string()
            })
    }

    fn name(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .filter(|name| name.name_id == id)
            .find_map(|name| name.to_string())
            .filter(|name| !name.is_empty())
    }

    /// Character maps in enumeration order.
    pub fn charmaps(&self) -> &[CharMapInfo] {
        &self.charmaps
    }

    fn subtable(&self, map: CharMapIndex) -> Option<cmap::Subtable<'_>> {
        self.face().tables().cmap?.subtables.get(map)
    }

    /// Glyph for `cp` under `map`; `None` when unmapped or mapped to glyph 0.
    pub fn char_index_in(&self, map: CharMapIndex, cp: u32) -> Option<GlyphId> {
        self.subtable(map)?
            .glyph_index(cp)
            .filter(|glyph| glyph.0 != 0)
    }

    /// The currently active character map.
    pub fn active_charmap(&self) -> Option<CharMapIndex> {
        self.active
    }

    /// Make `map` the active character map. Out-of-range indices are ignored.
    pub fn set_charmap(&mut self, map: CharMapIndex) {
        if map as usize >= self.charmaps.len() || self.active == Some(map) {
            return;
        }

        let mut codepoints = Vec::new();
        if let Some(subtable) = self.subtable(map) {
            subtable.codepoints(|cp| {
                if let Some(c) = char::from_u32(cp)
                    && subtable.glyph_index(cp).is_some_and(|g| g.0 != 0)
                {
                    codepoints.push(c);
                }
            });
        }
        codepoints.sort_unstable();
        codepoints.dedup();

        tracing::trace!(
            "activated charmap {} ({} codepoints)",
            map,
            codepoints.len()
        );
        self.active = Some(map);
        self.active_codepoints = codepoints;
    }

    /// The map previews enumerate from: a full-repertoire Unicode map, then any
    /// Unicode map, then the first map.
    pub fn preferred_charmap(&self) -> Option<CharMapIndex> {
        self.charmaps
            .iter()
            .find(|info| info.is_full_repertoire())
            .or_else(|| self.charmaps.iter().find(|info| info.is_unicode()))
            .or_else(|| self.charmaps.first())
            .map(|info| info.index)
    }

    /// Glyph for `cp` under the active map.
    pub fn char_index(&self, cp: u32) -> Option<GlyphId> {
        self.char_index_in(self.active?, cp)
    }

    /// The smallest codepoint greater than `after` with a glyph under the active map.
    pub fn next_char(&self, after: u32) -> Option<char> {
        let start = self
            .active_codepoints
            .partition_point(|&c| (c as u32) <= after);
        self.active_codepoints.get(start).copied()
    }

    /// Whether glyphs are outlines that scale to any size.
    pub fn is_scalable(&self) -> bool {
        let raw = self.face().raw_face();
        [b"glyf", b"CFF ", b"CFF2"]
            .iter()
            .any(|tag| raw.table(Tag::from_bytes(tag)).is_some())
    }

    /// Bitmap strikes in the face's native order.
    pub fn fixed_sizes(&self) -> Vec<FixedSize> {
        let raw = self.face().raw_face();
        let location = raw
            .table(Tag::from_bytes(b"EBLC"))
            .or_else(|| raw.table(Tag::from_bytes(b"CBLC")));

        let sizes = location.map(strikes::bitmap_location_sizes).unwrap_or_default();
        if !sizes.is_empty() {
            return sizes;
        }
        raw.table(Tag::from_bytes(b"sbix"))
            .map(strikes::sbix_sizes)
            .unwrap_or_default()
    }

    pub fn units_per_em(&self) -> u16 {
        self.face().units_per_em()
    }

    pub fn ascender(&self) -> i16 {
        self.face().ascender()
    }

    pub fn descender(&self) -> i16 {
        self.face().descender()
    }

    /// Horizontal advance of `c` in font units, looked up through the active map.
    pub fn advance(&self, c: char) -> Option<u16> {
        let glyph = self
            .char_index(c as u32)
            .or_else(|| self.face().glyph_index(c))?;
        self.face().glyph_hor_advance(glyph)
    }
}

fn platform_code(platform: PlatformId) -> u16 {
    match platform {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}

fn format_code(format: cmap::Format<'_>) -> u16 {
    match format {
        cmap::Format::ByteEncodingTable(_) => 0,
        cmap::Format::HighByteMappingThroughTable(_) => 2,
        cmap::Format::SegmentMappingToDeltaValues(_) => 4,
        cmap::Format::TrimmedTableMapping(_) => 6,
        cmap::Format::MixedCoverage => 8,
        cmap::Format::TrimmedArray(_) => 10,
        cmap::Format::SegmentedCoverage(_) => 12,
        cmap::Format::ManyToOneRangeMappings(_) => 13,
        cmap::Format::UnicodeVariationSequences(_) => 14,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_test_utils::TestFontBuilder;

    #[test]
    fn test_names_and_metrics() {
        let bytes = TestFontBuilder::latin()
            .family("Fixture Sans")
            .style("Bold")
            .build();
        let len = bytes.len();
        let face = FontFace::from_bytes(bytes, 0).unwrap();

        assert_eq!(face.family_name(), "Fixture Sans");
        assert_eq!(face.style_name(), "Bold");
        assert_eq!(face.byte_len(), len);
        assert_eq!(face.units_per_em(), 1000);
        assert_eq!(face.ascender(), 800);
        assert_eq!(face.descender(), -200);
        assert_eq!(face.advance('a'), Some(500));
        assert!(face.is_scalable());
        assert!(face.fixed_sizes().is_empty());
    }

    #[test]
    fn test_typographic_family_preferred() {
        let bytes = TestFontBuilder::latin()
            .family("Fixture Sans Bold")
            .typographic_family("Fixture Sans")
            .build();
        let face = FontFace::from_bytes(bytes, 0).unwrap();
        assert_eq!(face.family_name(), "Fixture Sans");
    }

    #[test]
    fn test_missing_names_fall_back() {
        let bytes = TestFontBuilder::latin().without_names().build();
        let face = FontFace::from_bytes(bytes, 0).unwrap();
        assert_eq!(face.family_name(), "Unknown");
        assert_eq!(face.style_name(), "Regular");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(FontFace::from_bytes(b"not a font".to_vec(), 0).is_err());
        assert!(FontFace::from_bytes(Vec::new(), 0).is_err());

        let mut woff2 = b"wOF2".to_vec();
        woff2.extend([0u8; 64]);
        let err = FontFace::from_bytes(woff2, 0).unwrap_err();
        assert!(matches!(err, FaceError::Unsupported(FontFormat::Woff2)));

        let truncated = b"\x00\x01\x00\x00garbage".to_vec();
        let err = FontFace::from_bytes(truncated, 0).unwrap_err();
        assert!(matches!(err, FaceError::Malformed(_)));
    }

    #[test]
    fn test_charmap_descriptors_and_preference() {
        let bytes = TestFontBuilder::new()
            .symbol_charmap([0xF041])
            .unicode_charmap("abc")
            .unicode_platform_charmap("abcd")
            .build();
        let face = FontFace::from_bytes(bytes, 0).unwrap();

        let maps = face.charmaps();
        assert_eq!(maps.len(), 3);
        assert_eq!((maps[0].platform_id, maps[0].encoding_id), (3, 0));
        assert_eq!(maps[1].format, 12);
        assert!(!maps[0].is_unicode());
        assert!(maps[2].is_full_repertoire());

        // Full-repertoire Unicode map wins and is active after parsing.
        assert_eq!(face.preferred_charmap(), Some(2));
        assert_eq!(face.active_charmap(), Some(2));
    }

    #[test]
    fn test_char_index_and_next_char_follow_active_map() {
        let bytes = TestFontBuilder::new()
            .unicode_charmap("ac")
            .symbol_charmap([0xF020, 0xF021])
            .build();
        let mut face = FontFace::from_bytes(bytes, 0).unwrap();

        assert_eq!(face.active_charmap(), Some(0));
        assert!(face.char_index('a' as u32).is_some());
        assert!(face.char_index('b' as u32).is_none());
        assert_eq!(face.next_char('a' as u32), Some('c'));
        assert_eq!(face.next_char('c' as u32), None);

        face.set_charmap(1);
        assert!(face.char_index('a' as u32).is_none());
        assert_eq!(face.next_char(255), Some('\u{F020}'));

        // Out of range is ignored.
        face.set_charmap(7);
        assert_eq!(face.active_charmap(), Some(1));
    }

    #[test]
    fn test_bitmap_only_face() {
        let bytes = TestFontBuilder::latin()
            .outlines(false)
            .bitmap_strike(12)
            .bitmap_strike(24)
            .bitmap_strike(48)
            .build();
        let face = FontFace::from_bytes(bytes, 0).unwrap();

        assert!(!face.is_scalable());
        let heights: Vec<u16> = face.fixed_sizes().iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![12, 24, 48]);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FontFormat::detect(&[0, 1, 0, 0]), FontFormat::TrueType);
        assert_eq!(FontFormat::detect(b"OTTO"), FontFormat::OpenType);
        assert_eq!(FontFormat::detect(b"wOFF"), FontFormat::Woff);
        assert_eq!(FontFormat::detect(b"ttcf"), FontFormat::Collection);
        assert_eq!(FontFormat::detect(b"ab"), FontFormat::Unknown);
        assert!(!FontFormat::Woff.is_supported());
    }
}
