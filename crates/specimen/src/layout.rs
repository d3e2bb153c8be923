//! Two-pass preview layout.
//!
//! Measuring and painting run the same traversal; only the [`LayoutPass`] differs.
//! The vertical cursor is an integer and each block advances it as
//!
//! ```text
//! cursor = trunc(cursor + extents.height + extents.y_advance + padding.top)
//! draw at (padding.left, cursor)
//! cursor += padding.bottom
//! ```
//!
//! so the height reported by [`measure`] bounds every baseline [`paint`] uses. The
//! reported width is the widest block plus horizontal padding, rounded up, so it
//! bounds the right edge of every painted block even with fractional extents.

use crate::content::LoadedFont;
use crate::surface::{FontChoice, SurfaceStyle, TextSurface};

/// Extra size of the title over the alphabet lines.
pub const TITLE_SIZE_BOOST: u32 = 6;

/// Pixel size of the whole preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewGeometry {
    pub width: i32,
    pub height: i32,
}

impl PreviewGeometry {
    /// Reported when no face is loaded.
    pub const PLACEHOLDER: PreviewGeometry = PreviewGeometry {
        width: 1,
        height: 1,
    };
}

/// Whether a traversal only measures or also draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPass {
    Measure,
    Paint,
}

/// Compute the preview size without drawing.
pub fn measure<'f, S: TextSurface<'f>>(
    font: Option<&'f LoadedFont>,
    section_spacing: i32,
    surface: &mut S,
) -> PreviewGeometry {
    layout(font, section_spacing, surface, LayoutPass::Measure)
}

/// Draw the preview, returning the same geometry [`measure`] reports.
pub fn paint<'f, S: TextSurface<'f>>(
    font: Option<&'f LoadedFont>,
    section_spacing: i32,
    surface: &mut S,
) -> PreviewGeometry {
    layout(font, section_spacing, surface, LayoutPass::Paint)
}

/// Run one traversal over the preview blocks.
pub fn layout<'f, S: TextSurface<'f>>(
    font: Option<&'f LoadedFont>,
    section_spacing: i32,
    surface: &mut S,
    pass: LayoutPass,
) -> PreviewGeometry {
    let Some(font) = font else {
        return PreviewGeometry::PLACEHOLDER;
    };

    let content = font.content();
    let text = &content.text;
    let alpha_size = content.ladder.alpha_size as f64;
    let previewed = FontChoice::Previewed(font.face());

    let mut cursor = Cursor::new(surface.style(), pass);

    surface.set_font(if text.title_is_covered {
        previewed
    } else {
        FontChoice::Fallback
    });
    surface.set_font_size(alpha_size + TITLE_SIZE_BOOST as f64);
    cursor.block(surface, &text.title);
    surface.set_font(previewed);

    cursor.skip(section_spacing / 2);

    surface.set_font_size(alpha_size);
    for line in [&text.lowercase, &text.uppercase, &text.punctuation]
        .into_iter()
        .flatten()
    {
        cursor.block(surface, line);
    }

    cursor.skip(section_spacing);

    for &size in &content.ladder.sizes {
        surface.set_font_size(size as f64);
        cursor.block(surface, &text.sample);
    }

    let trailing = cursor.style.padding.bottom + section_spacing;
    cursor.skip(trailing);
    cursor.geometry()
}

struct Cursor {
    style: SurfaceStyle,
    pass: LayoutPass,
    y: i32,
    width: f64,
}

impl Cursor {
    fn new(style: SurfaceStyle, pass: LayoutPass) -> Self {
        Self {
            style,
            pass,
            y: 0,
            width: style.padding.horizontal() as f64,
        }
    }

    fn block<'f, S: TextSurface<'f>>(&mut self, surface: &mut S, text: &str) {
        let padding = self.style.padding;
        let extents = surface.text_extents(text);

        self.y = (self.y as f64 + extents.height + extents.y_advance + padding.top as f64) as i32;
        self.width = self
            .width
            .max(extents.width + padding.horizontal() as f64);

        if self.pass == LayoutPass::Paint {
            surface.show_text(padding.left as f64, self.y as f64, text);
        }

        self.y += padding.bottom;
    }

    fn skip(&mut self, amount: i32) {
        self.y += amount;
    }

    fn geometry(&self) -> PreviewGeometry {
        PreviewGeometry {
            width: self.width.ceil() as i32,
            height: self.y,
        }
    }
}
