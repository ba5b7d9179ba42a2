use clockface_core::TextMeasure;
use clockface_protocol::{RenderCommand, Size};
use egui::{Align2, FontId, Pos2, Shape, Stroke, Vec2};

use crate::theme::{self, ThemeMode};

/// Measures labels with the painter's own font layout, so centering matches
/// what `render_commands` draws.
pub struct PainterMetrics<'a> {
    pub painter: &'a egui::Painter,
}

impl TextMeasure for PainterMetrics<'_> {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            FontId::proportional(font_size as f32),
            egui::Color32::PLACEHOLDER,
        );
        let size = galley.size();
        Size::new(f64::from(size.x), f64::from(size.y))
    }
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) {
    let at = |x: f64, y: f64| Pos2::new(x as f32 + offset.x, y as f32 + offset.y);

    for cmd in commands {
        match cmd {
            RenderCommand::DrawEllipse {
                center,
                radius_x,
                radius_y,
                fill,
                stroke,
                stroke_width,
            } => {
                let center = at(center.x, center.y);
                let radius = Vec2::new(*radius_x as f32, *radius_y as f32);
                if let Some(fill) = fill {
                    painter.add(Shape::ellipse_filled(
                        center,
                        radius,
                        theme::resolve(*fill, mode),
                    ));
                }
                painter.add(Shape::ellipse_stroke(
                    center,
                    radius,
                    Stroke::new(*stroke_width as f32, theme::resolve(*stroke, mode)),
                ));
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [at(from.x, from.y), at(to.x, to.y)],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
            } => {
                let size = *font_size as f32;
                if size < 1.0 {
                    continue;
                }
                painter.text(
                    at(position.x, position.y),
                    Align2::LEFT_TOP,
                    text,
                    FontId::proportional(size),
                    theme::resolve(*color, mode),
                );
            }
        }
    }
}
