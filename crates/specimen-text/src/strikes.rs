//! Bitmap strike tables.
//!
//! Reads the pixel heights a fixed-size face offers from `EBLC`/`CBLC` BitmapSize
//! records, or from `sbix` strikes when neither is present.

/// A bitmap strike available in a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize {
    /// Line height in pixels.
    pub height: u16,
    /// Pixels per em.
    pub ppem: u16,
}

const BITMAP_SIZE_LEN: usize = 48;

/// Big-endian reader with bounds checking.
struct TableReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TableReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn skip(&mut self, n: usize) -> Option<()> {
        if self.pos + n > self.data.len() {
            return None;
        }
        self.pos += n;
        Some(())
    }

    fn read_u8(&mut self) -> Option<u8> {
        let v = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }

    fn read_i8(&mut self) -> Option<i8> {
        self.read_u8().map(|v| v as i8)
    }

    fn read_u16(&mut self) -> Option<u16> {
        let bytes = self.data.get(self.pos..self.pos + 2)?;
        self.pos += 2;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Option<u32> {
        let bytes = self.data.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

/// Parse the BitmapSize records of an `EBLC` or `CBLC` table.
///
/// Truncated tables yield the records that fit.
pub fn bitmap_location_sizes(table: &[u8]) -> Vec<FixedSize> {
    let mut reader = TableReader::new(table);
    let Some(count) = reader.skip(4).and_then(|_| reader.read_u32()) else {
        return Vec::new();
    };

    let mut sizes = Vec::new();
    for i in 0..count as usize {
        let mut record = TableReader::at(table, 8 + i * BITMAP_SIZE_LEN);
        let Some(size) = read_bitmap_size(&mut record) else {
            tracing::trace!("bitmap size table truncated after {} of {} records", i, count);
            break;
        };
        sizes.push(size);
    }
    sizes
}

fn read_bitmap_size(reader: &mut TableReader<'_>) -> Option<FixedSize> {
    reader.skip(16)?;
    let ascender = reader.read_i8()? as i16;
    let descender = reader.read_i8()? as i16;
    // Rest of hori, all of vert, start/end glyph index, ppemX.
    reader.skip(10 + 12 + 4 + 1)?;
    let ppem = reader.read_u8()? as u16;

    let line = ascender - descender;
    let height = if line > 0 { line as u16 } else { ppem };
    Some(FixedSize { height, ppem })
}

/// Parse the strike headers of an `sbix` table. Height equals ppem.
pub fn sbix_sizes(table: &[u8]) -> Vec<FixedSize> {
    let mut reader = TableReader::new(table);
    let Some(count) = reader.skip(4).and_then(|_| reader.read_u32()) else {
        return Vec::new();
    };

    let mut sizes = Vec::new();
    for _ in 0..count {
        let Some(offset) = reader.read_u32() else {
            break;
        };
        let mut strike = TableReader::at(table, offset as usize);
        let Some(ppem) = strike.read_u16() else {
            continue;
        };
        sizes.push(FixedSize { height: ppem, ppem });
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap_size(ascender: i8, descender: i8, ppem: u8) -> Vec<u8> {
        let mut record = vec![0u8; BITMAP_SIZE_LEN];
        record[16] = ascender as u8;
        record[17] = descender as u8;
        record[44] = ppem;
        record[45] = ppem;
        record
    }

    #[test]
    fn test_bitmap_sizes_use_line_metrics() {
        let mut table = vec![0, 2, 0, 0, 0, 0, 0, 2];
        table.extend(bitmap_size(10, -2, 11));
        table.extend(bitmap_size(0, 0, 16));

        let sizes = bitmap_location_sizes(&table);
        assert_eq!(
            sizes,
            vec![
                FixedSize { height: 12, ppem: 11 },
                FixedSize { height: 16, ppem: 16 },
            ]
        );
    }

    #[test]
    fn test_truncated_bitmap_table() {
        let mut table = vec![0, 2, 0, 0, 0, 0, 0, 3];
        table.extend(bitmap_size(12, 0, 12));
        table.extend([0u8; 10]);

        assert_eq!(bitmap_location_sizes(&table).len(), 1);
        assert!(bitmap_location_sizes(&[0, 2]).is_empty());
    }

    #[test]
    fn test_sbix_strikes() {
        // version, flags, numStrikes = 2, offsets 16 and 20
        let mut table = vec![0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 16, 0, 0, 0, 20];
        table.extend([0, 20, 0, 72]);
        table.extend([0, 40, 0, 72]);

        let heights: Vec<u16> = sbix_sizes(&table).iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![20, 40]);
    }
}
