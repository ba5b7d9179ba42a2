use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::Point;

/// A single, stateless draw instruction.
///
/// The core emits a fresh `Vec<RenderCommand>` for every frame. Surfaces
/// consume the list in order (later commands paint over earlier ones) and
/// drop it afterwards; nothing is retained between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw an axis-aligned ellipse. `fill: None` leaves the interior
    /// transparent; the outline is always stroked.
    DrawEllipse {
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Option<ThemeToken>,
        stroke: ThemeToken,
        stroke_width: f64,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Draw a single line of text. `position` is the top-left corner of the
    /// text's measured box, so centering has already been applied.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
    },
}

impl RenderCommand {
    pub fn is_line(&self) -> bool {
        matches!(self, RenderCommand::DrawLine { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RenderCommand::DrawText { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_variant_tag() {
        let cmd = RenderCommand::DrawLine {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 2.0),
            color: ThemeToken::Hand,
            width: 3.0,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        assert!(json.starts_with("{\"DrawLine\""), "json={json}");
        assert!(json.contains("\"Hand\""));
    }

    #[test]
    fn transparent_fill_survives_json() {
        let cmd = RenderCommand::DrawEllipse {
            center: Point::new(50.0, 50.0),
            radius_x: 45.0,
            radius_y: 45.0,
            fill: None,
            stroke: ThemeToken::Bezel,
            stroke_width: 5.0,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        let back: Option<RenderCommand> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cmd));
    }

    #[test]
    fn kind_predicates() {
        let text = RenderCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: "12".to_string(),
            color: ThemeToken::Label,
            font_size: 18.0,
        };
        assert!(text.is_text());
        assert!(!text.is_line());
    }
}
