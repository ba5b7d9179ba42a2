use std::f64::consts::TAU;
use std::io::stdout;
use std::time::Instant;

use anyhow::Result;
use clockface_core::{
    ClockState, FaceRenderer, TICK_INTERVAL, TextMeasure, Ticker, TimeSource,
};
use clockface_protocol::{RenderCommand, Size, ThemeToken};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block,
        canvas::{Canvas, Context, Line},
    },
};

/// Terminal cells are roughly twice as tall as they are wide; the dial is
/// laid out with two vertical units per row so it stays round.
const UNITS_PER_ROW: f64 = 2.0;
const ELLIPSE_SEGMENTS: usize = 96;

/// Text extents in dial units: one unit per column, one row high.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl TextMeasure for CellMetrics {
    fn measure(&self, text: &str, _font_size: f64) -> Size {
        Size::new(text.chars().count() as f64, UNITS_PER_ROW)
    }
}

fn theme_to_color(token: ThemeToken, dark: bool) -> Color {
    match (token, dark) {
        (ThemeToken::Background, true) => Color::Black,
        (ThemeToken::Background, false) => Color::White,
        (ThemeToken::FaceFill, _) => Color::DarkGray,
        (ThemeToken::Bezel | ThemeToken::Hand | ThemeToken::Tick, true) => Color::White,
        (ThemeToken::Bezel | ThemeToken::Hand | ThemeToken::Tick, false) => Color::Black,
        (ThemeToken::Label, _) => Color::Red,
    }
}

/// Dial size in layout units for a terminal of `cols` x `rows` cells,
/// leaving the top row for the header.
fn dial_size(cols: u16, rows: u16) -> (u32, u32) {
    let rows = rows.saturating_sub(1);
    (u32::from(cols), (f64::from(rows) * UNITS_PER_ROW) as u32)
}

/// Paint one command onto the canvas. Canvas y grows upwards, so every
/// y coordinate is flipped against `height`.
fn draw_command(ctx: &mut Context<'_>, cmd: &RenderCommand, height: f64, dark: bool) {
    match cmd {
        RenderCommand::DrawEllipse {
            center,
            radius_x,
            radius_y,
            stroke,
            ..
        } => {
            let color = theme_to_color(*stroke, dark);
            let point = |i: usize| {
                let a = TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
                (
                    center.x + radius_x * a.sin(),
                    height - (center.y - radius_y * a.cos()),
                )
            };
            for i in 0..ELLIPSE_SEGMENTS {
                let (x1, y1) = point(i);
                let (x2, y2) = point(i + 1);
                ctx.draw(&Line::new(x1, y1, x2, y2, color));
            }
        }
        RenderCommand::DrawLine {
            from, to, color, ..
        } => {
            ctx.draw(&Line::new(
                from.x,
                height - from.y,
                to.x,
                height - to.y,
                theme_to_color(*color, dark),
            ));
        }
        RenderCommand::DrawText {
            position,
            text,
            color,
            ..
        } => {
            // Print on the row through the middle of the text box.
            ctx.print(
                position.x,
                height - (position.y + UNITS_PER_ROW / 2.0),
                Span::styled(
                    text.clone(),
                    Style::default().fg(theme_to_color(*color, dark)),
                ),
            );
        }
    }
}

/// Run the live clock until the user quits.
pub fn run_tui(renderer: &FaceRenderer, clock: &dyn TimeSource, dark: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, renderer, clock, dark);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    renderer: &FaceRenderer,
    clock: &dyn TimeSource,
    mut dark: bool,
) -> Result<()> {
    let term_size = terminal.size()?;
    let (w, h) = dial_size(term_size.width, term_size.height);
    let mut state = ClockState::new(w, h, clock.now().into());
    let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());
    let mut dirty = true;

    log::info!("clock started with {} time source", clock.name());

    loop {
        if dirty {
            draw_frame(terminal, &state, renderer, dark)?;
            dirty = false;
        }

        if event::poll(ticker.until_next(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('d') => {
                        dark = !dark;
                        dirty = true;
                    }
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    let (w, h) = dial_size(cols, rows);
                    dirty |= state.resize(w, h);
                }
                _ => {}
            }
        }

        if ticker.poll(Instant::now()) {
            dirty |= state.set_time(clock.now());
        }
    }

    Ok(())
}

fn draw_frame(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &ClockState,
    renderer: &FaceRenderer,
    dark: bool,
) -> Result<()> {
    let cmds = match state.render(renderer, &CellMetrics) {
        Ok(cmds) => cmds,
        Err(e) => {
            // Skip this frame; the next tick renders afresh.
            log::warn!("failed to render clock face: {e}");
            Vec::new()
        }
    };

    let metrics = *state.metrics();
    let width = f64::from(metrics.width);
    let height = f64::from(metrics.height);
    let bg = theme_to_color(ThemeToken::Background, dark);
    let fg = theme_to_color(ThemeToken::Hand, dark);

    terminal.draw(|frame| {
        let area = frame.area();

        let header_area = Rect::new(0, 0, area.width, 1);
        let header = Block::default()
            .title(" clockface | d dark/light | q quit ")
            .style(Style::default().fg(fg).bg(bg));
        frame.render_widget(header, header_area);

        let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
        let canvas = Canvas::default()
            .background_color(bg)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for cmd in &cmds {
                    draw_command(ctx, cmd, height, dark);
                }
            });
        frame.render_widget(canvas, content_area);
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_size_reserves_header_row() {
        assert_eq!(dial_size(80, 25), (80, 48));
        assert_eq!(dial_size(10, 0), (10, 0));
    }

    #[test]
    fn labels_are_one_row_high() {
        let size = CellMetrics.measure("12", 18.0);
        assert_eq!(size, Size::new(2.0, UNITS_PER_ROW));
    }

    #[test]
    fn light_mode_draws_dark_hands() {
        assert_eq!(theme_to_color(ThemeToken::Hand, false), Color::Black);
        assert_eq!(theme_to_color(ThemeToken::Hand, true), Color::White);
        assert_eq!(theme_to_color(ThemeToken::Label, true), Color::Red);
    }
}
