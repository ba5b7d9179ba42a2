//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use clockface_protocol::{RenderCommand, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 120 + 256);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));

    let bg = resolve_color(ThemeToken::Background, dark);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

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
                let fill = fill.map_or("none", |token| resolve_color(token, dark));
                let stroke = resolve_color(*stroke, dark);
                svg.push_str(&format!(
                    r#"<ellipse cx="{}" cy="{}" rx="{radius_x}" ry="{radius_y}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
                    center.x, center.y,
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}" stroke-linecap="round"/>"#,
                    from.x, from.y, to.x, to.y,
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
            } => {
                let fill = resolve_color(*color, dark);
                // Positions are top-left of the text box.
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" dominant-baseline="text-before-edge">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::FaceFill => "#202020",
            ThemeToken::Bezel | ThemeToken::Hand | ThemeToken::Tick => "#ececec",
            ThemeToken::Label => "#f44336",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::FaceFill => "#f8f9fa",
            ThemeToken::Bezel | ThemeToken::Hand | ThemeToken::Tick => "#000000",
            ThemeToken::Label => "#ff0000",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
