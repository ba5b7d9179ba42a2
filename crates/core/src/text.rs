use clockface_protocol::Size;

/// Reports the extents of a single line of text as the drawing surface
/// would lay it out. Labels are centered on the box this returns.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Fixed-advance approximation for surfaces without a font engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance per character, in ems.
    pub advance: f64,
    /// Line height, in ems.
    pub line_height: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * self.advance * font_size, self.line_height * font_size)
    }
}
