//! Synthetic sfnt font binaries for tests and benchmarks.
//!
//! The produced fonts carry `head`, `hhea`, `maxp`, `hmtx`, `name` and `cmap`
//! (format 12 subtables), plus `glyf`/`loca` when outlines are requested and an
//! `EBLC` table listing bitmap strikes when strikes are added. Glyphs themselves are
//! empty: the fonts exist to exercise metadata, coverage and metrics, not rasterization.

use std::collections::{BTreeMap, BTreeSet};

/// Every printable ASCII character, space through tilde.
pub const PRINTABLE_ASCII: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

const PLATFORM_UNICODE: u16 = 0;
const PLATFORM_WINDOWS: u16 = 3;
const WINDOWS_UNICODE_BMP: u16 = 1;
const WINDOWS_SYMBOL: u16 = 0;
const WINDOWS_ENGLISH_US: u16 = 0x0409;

#[derive(Debug, Clone)]
struct CharmapSpec {
    platform_id: u16,
    encoding_id: u16,
    codepoints: BTreeSet<u32>,
}

#[derive(Debug, Clone, Copy)]
struct StrikeSpec {
    ascender: i8,
    descender: i8,
    ppem: u8,
}

/// Builder for synthetic font binaries.
///
/// Glyph ids are assigned per distinct codepoint in the order codepoints are first
/// added, so the same character maps to the same glyph in every character map.
#[derive(Debug, Clone)]
pub struct TestFontBuilder {
    family: Option<String>,
    style: Option<String>,
    typographic_family: Option<String>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    advance: u16,
    outlines: bool,
    charmaps: Vec<CharmapSpec>,
    strikes: Vec<StrikeSpec>,
    glyph_ids: BTreeMap<u32, u16>,
}

impl Default for TestFontBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFontBuilder {
    /// A scalable font named "Test Sans Regular" with no character maps yet.
    pub fn new() -> Self {
        Self {
            family: Some("Test Sans".to_string()),
            style: Some("Regular".to_string()),
            typographic_family: None,
            units_per_em: 1000,
            ascender: 800,
            descender: -200,
            advance: 500,
            outlines: true,
            charmaps: Vec::new(),
            strikes: Vec::new(),
            glyph_ids: BTreeMap::new(),
        }
    }

    /// A scalable font covering all printable ASCII through a Windows Unicode map.
    pub fn latin() -> Self {
        Self::new().unicode_charmap(PRINTABLE_ASCII)
    }

    pub fn family(mut self, family: &str) -> Self {
        self.family = Some(family.to_string());
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    /// Set the typographic family name (name ID 16).
    pub fn typographic_family(mut self, family: &str) -> Self {
        self.typographic_family = Some(family.to_string());
        self
    }

    /// Drop the family and style names.
    pub fn without_names(mut self) -> Self {
        self.family = None;
        self.style = None;
        self.typographic_family = None;
        self
    }

    pub fn units_per_em(mut self, units_per_em: u16) -> Self {
        self.units_per_em = units_per_em;
        self
    }

    /// Vertical metrics in font units (descender is negative).
    pub fn vertical_metrics(mut self, ascender: i16, descender: i16) -> Self {
        self.ascender = ascender;
        self.descender = descender;
        self
    }

    /// Horizontal advance shared by every glyph, in font units.
    pub fn advance(mut self, advance: u16) -> Self {
        self.advance = advance;
        self
    }

    /// Whether the font carries `glyf`/`loca` outlines (and is therefore scalable).
    pub fn outlines(mut self, outlines: bool) -> Self {
        self.outlines = outlines;
        self
    }

    /// Add a Windows Unicode BMP (3, 1) character map covering `text`.
    pub fn unicode_charmap(self, text: &str) -> Self {
        self.charmap(PLATFORM_WINDOWS, WINDOWS_UNICODE_BMP, text.chars().map(u32::from))
    }

    /// Add a Unicode-platform (0, 4) character map covering `text`.
    pub fn unicode_platform_charmap(self, text: &str) -> Self {
        self.charmap(PLATFORM_UNICODE, 4, text.chars().map(u32::from))
    }

    /// Add a Windows Symbol (3, 0) character map with the given codepoints.
    pub fn symbol_charmap(self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.charmap(PLATFORM_WINDOWS, WINDOWS_SYMBOL, codepoints)
    }

    /// Add a character map with an explicit platform/encoding pair.
    pub fn charmap(
        mut self,
        platform_id: u16,
        encoding_id: u16,
        codepoints: impl IntoIterator<Item = u32>,
    ) -> Self {
        let mut set = BTreeSet::new();
        for cp in codepoints {
            let next_id = self.glyph_ids.len() as u16 + 1;
            self.glyph_ids.entry(cp).or_insert(next_id);
            set.insert(cp);
        }
        self.charmaps.push(CharmapSpec {
            platform_id,
            encoding_id,
            codepoints: set,
        });
        self
    }

    /// Add a bitmap strike whose reported pixel height is `height` (max 127).
    pub fn bitmap_strike(self, height: u8) -> Self {
        let height = height.min(127) as i8;
        self.bitmap_strike_with_metrics(height, 0, height as u8)
    }

    /// Add a bitmap strike with explicit line metrics and ppem.
    pub fn bitmap_strike_with_metrics(mut self, ascender: i8, descender: i8, ppem: u8) -> Self {
        self.strikes.push(StrikeSpec {
            ascender,
            descender,
            ppem,
        });
        self
    }

    /// Number of glyphs the built font will declare (including `.notdef`).
    pub fn glyph_count(&self) -> u16 {
        self.glyph_ids.len() as u16 + 1
    }

    /// Serialize the font.
    pub fn build(&self) -> Vec<u8> {
        let num_glyphs = self.glyph_count();
        let mut tables: BTreeMap<[u8; 4], Vec<u8>> = BTreeMap::new();

        tables.insert(*b"head", self.head());
        tables.insert(*b"hhea", self.hhea(num_glyphs));
        tables.insert(*b"maxp", maxp(num_glyphs));
        tables.insert(*b"hmtx", self.hmtx(num_glyphs));
        tables.insert(*b"name", self.name());
        if !self.charmaps.is_empty() {
            tables.insert(*b"cmap", self.cmap());
        }
        if self.outlines {
            tables.insert(*b"loca", vec![0; (num_glyphs as usize + 1) * 2]);
            tables.insert(*b"glyf", vec![0; 4]);
        }
        if !self.strikes.is_empty() {
            tables.insert(*b"EBLC", self.eblc(num_glyphs));
        }

        assemble(&tables)
    }

    fn head(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        put_u32(&mut out, 0x0001_0000); // version
        put_u32(&mut out, 0x0001_0000); // fontRevision
        put_u32(&mut out, 0); // checksumAdjustment
        put_u32(&mut out, 0x5F0F_3CF5); // magicNumber
        put_u16(&mut out, 0x000B); // flags
        put_u16(&mut out, self.units_per_em);
        out.extend_from_slice(&[0; 16]); // created, modified
        put_i16(&mut out, 0); // xMin
        put_i16(&mut out, self.descender);
        put_i16(&mut out, self.advance as i16);
        put_i16(&mut out, self.ascender);
        put_u16(&mut out, 0); // macStyle
        put_u16(&mut out, 8); // lowestRecPPEM
        put_i16(&mut out, 2); // fontDirectionHint
        put_i16(&mut out, 0); // indexToLocFormat: short
        put_i16(&mut out, 0); // glyphDataFormat
        out
    }

    fn hhea(&self, num_glyphs: u16) -> Vec<u8> {
        let mut out = Vec::with_capacity(36);
        put_u32(&mut out, 0x0001_0000);
        put_i16(&mut out, self.ascender);
        put_i16(&mut out, self.descender);
        put_i16(&mut out, 0); // lineGap
        put_u16(&mut out, self.advance); // advanceWidthMax
        put_i16(&mut out, 0); // minLeftSideBearing
        put_i16(&mut out, 0); // minRightSideBearing
        put_i16(&mut out, self.advance as i16); // xMaxExtent
        put_i16(&mut out, 1); // caretSlopeRise
        put_i16(&mut out, 0); // caretSlopeRun
        put_i16(&mut out, 0); // caretOffset
        out.extend_from_slice(&[0; 8]); // reserved
        put_i16(&mut out, 0); // metricDataFormat
        put_u16(&mut out, num_glyphs); // numberOfHMetrics
        out
    }

    fn hmtx(&self, num_glyphs: u16) -> Vec<u8> {
        let mut out = Vec::with_capacity(num_glyphs as usize * 4);
        for _ in 0..num_glyphs {
            put_u16(&mut out, self.advance);
            put_i16(&mut out, 0);
        }
        out
    }

    fn name(&self) -> Vec<u8> {
        let mut records: Vec<(u16, Vec<u8>)> = Vec::new();
        if let Some(family) = &self.family {
            records.push((1, utf16_be(family)));
        }
        if let Some(style) = &self.style {
            records.push((2, utf16_be(style)));
        }
        if let Some(family) = &self.typographic_family {
            records.push((16, utf16_be(family)));
        }

        let count = records.len() as u16;
        let string_offset = 6 + 12 * count;
        let mut out = Vec::new();
        put_u16(&mut out, 0); // format
        put_u16(&mut out, count);
        put_u16(&mut out, string_offset);

        let mut storage = Vec::new();
        for (name_id, bytes) in &records {
            put_u16(&mut out, PLATFORM_WINDOWS);
            put_u16(&mut out, WINDOWS_UNICODE_BMP);
            put_u16(&mut out, WINDOWS_ENGLISH_US);
            put_u16(&mut out, *name_id);
            put_u16(&mut out, bytes.len() as u16);
            put_u16(&mut out, storage.len() as u16);
            storage.extend_from_slice(bytes);
        }
        out.extend_from_slice(&storage);
        out
    }

    fn cmap(&self) -> Vec<u8> {
        let subtables: Vec<Vec<u8>> = self
            .charmaps
            .iter()
            .map(|spec| self.format12(&spec.codepoints))
            .collect();

        let header_len = 4 + 8 * self.charmaps.len();
        let mut out = Vec::new();
        put_u16(&mut out, 0); // version
        put_u16(&mut out, self.charmaps.len() as u16);

        let mut offset = header_len;
        for (spec, subtable) in self.charmaps.iter().zip(&subtables) {
            put_u16(&mut out, spec.platform_id);
            put_u16(&mut out, spec.encoding_id);
            put_u32(&mut out, offset as u32);
            offset += subtable.len();
        }
        for subtable in subtables {
            out.extend_from_slice(&subtable);
        }
        out
    }

    fn format12(&self, codepoints: &BTreeSet<u32>) -> Vec<u8> {
        let mut out = Vec::new();
        put_u16(&mut out, 12);
        put_u16(&mut out, 0); // reserved
        put_u32(&mut out, 16 + 12 * codepoints.len() as u32);
        put_u32(&mut out, 0); // language
        put_u32(&mut out, codepoints.len() as u32);
        for cp in codepoints {
            let glyph = self.glyph_ids.get(cp).copied().unwrap_or(0);
            put_u32(&mut out, *cp);
            put_u32(&mut out, *cp);
            put_u32(&mut out, glyph as u32);
        }
        out
    }

    fn eblc(&self, num_glyphs: u16) -> Vec<u8> {
        let mut out = Vec::new();
        put_u16(&mut out, 2); // majorVersion
        put_u16(&mut out, 0); // minorVersion
        put_u32(&mut out, self.strikes.len() as u32);

        for strike in &self.strikes {
            put_u32(&mut out, 0); // indexSubTableArrayOffset
            put_u32(&mut out, 0); // indexTablesSize
            put_u32(&mut out, 0); // numberOfIndexSubTables
            put_u32(&mut out, 0); // colorRef

            // hori SbitLineMetrics
            out.push(strike.ascender as u8);
            out.push(strike.descender as u8);
            out.extend_from_slice(&[strike.ppem, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
            // vert SbitLineMetrics
            out.extend_from_slice(&[0; 12]);

            put_u16(&mut out, 1); // startGlyphIndex
            put_u16(&mut out, num_glyphs.saturating_sub(1)); // endGlyphIndex
            out.push(strike.ppem); // ppemX
            out.push(strike.ppem); // ppemY
            out.push(1); // bitDepth
            out.push(0x01); // flags: horizontal metrics
        }
        out
    }
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(6);
    put_u32(&mut out, 0x0000_5000);
    put_u16(&mut out, num_glyphs);
    out
}

/// Lay out the table directory followed by 4-byte aligned table data.
fn assemble(tables: &BTreeMap<[u8; 4], Vec<u8>>) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let mut entry_selector = 0u16;
    while (1u16 << (entry_selector + 1)) <= num_tables {
        entry_selector += 1;
    }
    let search_range = (1u16 << entry_selector) * 16;

    let mut out = Vec::new();
    put_u32(&mut out, 0x0001_0000);
    put_u16(&mut out, num_tables);
    put_u16(&mut out, search_range);
    put_u16(&mut out, entry_selector);
    put_u16(&mut out, num_tables * 16 - search_range);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        put_u32(&mut out, checksum(data));
        put_u32(&mut out, offset as u32);
        put_u32(&mut out, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    out.extend_from_slice(&body);
    out
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn utf16_be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|unit| unit.to_be_bytes()).collect()
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
