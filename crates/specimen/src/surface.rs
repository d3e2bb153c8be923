//! Drawing surface capability used by the layout engine.

use specimen_text::FontFace;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Space around each text block, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }
}

/// Style values the host applies to the preview.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceStyle {
    pub padding: Padding,
    pub foreground: Color,
}

/// Extents of a string at the current font and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
    /// Vertical pen advance after the string (zero for horizontal text).
    pub y_advance: f64,
}

/// Which face text is set in.
#[derive(Debug, Clone, Copy)]
pub enum FontChoice<'f> {
    /// The face being previewed.
    Previewed(&'f FontFace),
    /// The host's default UI face.
    Fallback,
}

impl FontChoice<'_> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FontChoice::Fallback)
    }
}

/// A text drawing backend.
///
/// `'f` is the lifetime of the previewed face, which the surface may hold on to
/// between `set_font` and the calls that measure or draw with it.
pub trait TextSurface<'f> {
    /// Set the face used by subsequent calls.
    fn set_font(&mut self, font: FontChoice<'f>);

    /// Set the size, in pixels, used by subsequent calls.
    fn set_font_size(&mut self, size: f64);

    /// Measure `text` at the current font and size.
    fn text_extents(&mut self, text: &str) -> TextExtents;

    /// Draw `text` with its baseline origin at `(x, y)`.
    fn show_text(&mut self, x: f64, y: f64, text: &str);

    /// Current padding and foreground color.
    fn style(&self) -> SurfaceStyle;
}
