//! A text surface that records every call.
//!
//! Metrics are deterministic and independent of the face: a string is
//! `chars * size * 0.6` wide and `size` tall, with no vertical advance.

use specimen::{FontChoice, Padding, SurfaceStyle, TextExtents, TextSurface};

/// Width of one character relative to the font size.
pub const RECORDED_ADVANCE_EM: f64 = 0.6;

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetFont { fallback: bool, family: Option<String> },
    SetFontSize(f64),
    TextExtents { text: String, extents: TextExtents },
    ShowText { x: f64, y: f64, text: String, size: f64, extents: TextExtents },
}

/// Records surface calls for verification in tests.
///
/// # Example
///
/// ```rust
/// use specimen::{TextSurface, FontChoice};
/// use specimen_test_utils::{RecordingSurface, SurfaceCall};
///
/// let mut surface = RecordingSurface::new();
/// surface.set_font(FontChoice::Fallback);
/// surface.set_font_size(10.0);
/// surface.show_text(0.0, 10.0, "abc");
///
/// assert_eq!(surface.draws().count(), 1);
/// assert!(matches!(surface.calls()[1], SurfaceCall::SetFontSize(s) if s == 10.0));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSurface {
    style: SurfaceStyle,
    size: f64,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(padding: Padding) -> Self {
        Self {
            style: SurfaceStyle {
                padding,
                ..SurfaceStyle::default()
            },
            ..Self::default()
        }
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Only the `show_text` calls.
    pub fn draws(&self) -> impl Iterator<Item = &SurfaceCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::ShowText { .. }))
    }

    /// Number of `text_extents` calls.
    pub fn measure_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::TextExtents { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn extents(&self, text: &str) -> TextExtents {
        TextExtents {
            width: text.chars().count() as f64 * self.size * RECORDED_ADVANCE_EM,
            height: self.size,
            y_advance: 0.0,
        }
    }
}

impl<'f> TextSurface<'f> for RecordingSurface {
    fn set_font(&mut self, font: FontChoice<'f>) {
        let call = match font {
            FontChoice::Previewed(face) => SurfaceCall::SetFont {
                fallback: false,
                family: Some(face.family_name()),
            },
            FontChoice::Fallback => SurfaceCall::SetFont {
                fallback: true,
                family: None,
            },
        };
        self.calls.push(call);
    }

    fn set_font_size(&mut self, size: f64) {
        self.size = size;
        self.calls.push(SurfaceCall::SetFontSize(size));
    }

    fn text_extents(&mut self, text: &str) -> TextExtents {
        let extents = self.extents(text);
        self.calls.push(SurfaceCall::TextExtents {
            text: text.to_string(),
            extents,
        });
        extents
    }

    fn show_text(&mut self, x: f64, y: f64, text: &str) {
        let extents = self.extents(text);
        self.calls.push(SurfaceCall::ShowText {
            x,
            y,
            text: text.to_string(),
            size: self.size,
            extents,
        });
    }

    fn style(&self) -> SurfaceStyle {
        self.style
    }
}
