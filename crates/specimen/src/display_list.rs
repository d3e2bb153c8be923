//! Headless text surface recording a display list.
//!
//! [`DisplayListSurface`] measures text from the previewed face's own metrics and
//! records every draw as a [`DrawText`] command. A host renderer replays the list; the
//! preview core never touches a real canvas.

use specimen_text::FontFace;

use crate::surface::{Color, FontChoice, SurfaceStyle, TextExtents, TextSurface};

/// Advance of a fallback glyph, relative to the font size.
const FALLBACK_ADVANCE_EM: f64 = 0.5;
/// Advance used for previewed glyphs that have no metrics.
const MISSING_ADVANCE_EM: f64 = 0.5;

/// Face a command is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Previewed,
    Fallback,
}

/// Command to draw one run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawText {
    /// Baseline origin.
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub font: FontKind,
    pub color: Color,
    /// Width the surface measured for this text.
    pub width: f64,
}

/// Ordered draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawText>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawText) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawText> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Furthest right edge and lowest baseline of any command.
    pub fn extent(&self) -> (f64, f64) {
        self.commands.iter().fold((0.0, 0.0), |(right, bottom), cmd| {
            (right.max(cmd.x + cmd.width), bottom.max(cmd.y))
        })
    }
}

/// A [`TextSurface`] that measures with face metrics and records draws.
pub struct DisplayListSurface<'f> {
    style: SurfaceStyle,
    font: FontChoice<'f>,
    size: f64,
    list: DisplayList,
}

impl<'f> DisplayListSurface<'f> {
    pub fn new(style: SurfaceStyle) -> Self {
        Self {
            style,
            font: FontChoice::Fallback,
            size: 0.0,
            list: DisplayList::new(),
        }
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take_display_list(&mut self) -> DisplayList {
        std::mem::take(&mut self.list)
    }

    fn measure_previewed(&self, face: &FontFace, text: &str) -> TextExtents {
        let upem = face.units_per_em().max(1) as f64;
        let scale = self.size / upem;

        let width = text
            .chars()
            .map(|c| match face.advance(c) {
                Some(advance) => advance as f64 * scale,
                None => MISSING_ADVANCE_EM * self.size,
            })
            .sum();
        let line = (face.ascender() as f64 - face.descender() as f64).max(0.0);

        TextExtents {
            width,
            height: line * scale,
            y_advance: 0.0,
        }
    }

    fn measure_fallback(&self, text: &str) -> TextExtents {
        TextExtents {
            width: text.chars().count() as f64 * FALLBACK_ADVANCE_EM * self.size,
            height: self.size,
            y_advance: 0.0,
        }
    }
}

impl Default for DisplayListSurface<'_> {
    fn default() -> Self {
        Self::new(SurfaceStyle::default())
    }
}

impl<'f> TextSurface<'f> for DisplayListSurface<'f> {
    fn set_font(&mut self, font: FontChoice<'f>) {
        self.font = font;
    }

    fn set_font_size(&mut self, size: f64) {
        self.size = size;
    }

    fn text_extents(&mut self, text: &str) -> TextExtents {
        match self.font {
            FontChoice::Previewed(face) => self.measure_previewed(face, text),
            FontChoice::Fallback => self.measure_fallback(text),
        }
    }

    fn show_text(&mut self, x: f64, y: f64, text: &str) {
        let width = self.text_extents(text).width;
        let font = match self.font {
            FontChoice::Previewed(_) => FontKind::Previewed,
            FontChoice::Fallback => FontKind::Fallback,
        };
        self.list.push(DrawText {
            x,
            y,
            text: text.to_string(),
            size: self.size,
            font,
            color: self.style.foreground,
            width,
        });
    }

    fn style(&self) -> SurfaceStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Padding;
    use specimen_test_utils::TestFontBuilder;

    #[test]
    fn test_previewed_metrics_scale_with_size() {
        let face = FontFace::from_bytes(
            TestFontBuilder::latin().units_per_em(2000).advance(1000).build(),
            0,
        )
        .unwrap();
        let mut surface = DisplayListSurface::default();
        surface.set_font(FontChoice::Previewed(&face));
        surface.set_font_size(20.0);

        let extents = surface.text_extents("abcd");
        assert_eq!(extents.width, 40.0);
        // (800 - -200) / 2000 * 20
        assert_eq!(extents.height, 10.0);
        assert_eq!(extents.y_advance, 0.0);
    }

    #[test]
    fn test_previewed_height_follows_vertical_metrics() {
        let face = FontFace::from_bytes(
            TestFontBuilder::latin()
                .units_per_em(1000)
                .vertical_metrics(1500, -500)
                .build(),
            0,
        )
        .unwrap();
        let mut surface = DisplayListSurface::default();
        surface.set_font(FontChoice::Previewed(&face));
        surface.set_font_size(10.0);

        assert_eq!(surface.text_extents("x").height, 20.0);
    }

    #[test]
    fn test_fallback_metrics() {
        let mut surface = DisplayListSurface::default();
        surface.set_font_size(10.0);
        let extents = surface.text_extents("abc");
        assert_eq!(extents.width, 15.0);
        assert_eq!(extents.height, 10.0);
    }

    #[test]
    fn test_show_text_records_commands() {
        let style = SurfaceStyle {
            padding: Padding::uniform(2),
            foreground: Color::rgb(0.2, 0.4, 0.6),
        };
        let mut surface = DisplayListSurface::new(style);
        surface.set_font_size(12.0);
        surface.show_text(2.0, 14.0, "hi");

        let list = surface.take_display_list();
        assert_eq!(list.len(), 1);
        let cmd = list.iter().next().unwrap();
        assert_eq!(cmd.text, "hi");
        assert_eq!(cmd.font, FontKind::Fallback);
        assert_eq!(cmd.color, style.foreground);
        assert_eq!(list.extent(), (14.0, 14.0));
        assert!(surface.display_list().is_empty());
    }
}
