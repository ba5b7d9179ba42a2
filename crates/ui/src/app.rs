use std::path::Path;

use clockface_core::layout::ViewportMetrics;
use clockface_core::{
    ClockState, ConfigError, DialTime, FaceConfig, FaceRenderer, LocalClock, TICK_INTERVAL,
    TimeSource,
};

use eframe::egui;

use crate::renderer::{self, PainterMetrics};
use crate::theme::{self, ThemeMode};

/// Format seconds since midnight as `HH:MM:SS`.
fn format_time(time: DialTime) -> String {
    let total = time.seconds_of_day() as u32;
    format!("{:02}:{:02}:{:02}", total / 3600, total / 60 % 60, total % 60)
}

/// Renderer for an optional face configuration file; defaults otherwise.
pub fn load_renderer(config: Option<&Path>) -> Result<FaceRenderer, ConfigError> {
    match config {
        Some(path) => FaceRenderer::new(FaceConfig::load(path)?),
        None => Ok(FaceRenderer::default()),
    }
}

/// Main application state.
pub struct ClockApp {
    state: ClockState,
    renderer: FaceRenderer,
    clock: Box<dyn TimeSource>,
    /// Theme mode.
    theme_mode: ThemeMode,
    /// Last render failure, shown until a frame succeeds.
    error: Option<String>,
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_renderer(cc, FaceRenderer::default(), Box::new(LocalClock))
    }

    pub fn with_renderer(
        cc: &eframe::CreationContext<'_>,
        renderer: FaceRenderer,
        clock: Box<dyn TimeSource>,
    ) -> Self {
        // Use dark theme by default
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let state = ClockState::new(0, 0, clock.now().into());
        Self {
            state,
            renderer,
            clock,
            theme_mode: ThemeMode::Dark,
            error: None,
        }
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.set_time(self.clock.now());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("clockface");
                ui.separator();

                let theme_label = match self.theme_mode {
                    ThemeMode::Dark => "Dark",
                    ThemeMode::Light => "Light",
                };
                if ui.button(theme_label).clicked() {
                    self.theme_mode = self.theme_mode.toggled();
                    ctx.set_visuals(match self.theme_mode {
                        ThemeMode::Dark => egui::Visuals::dark(),
                        ThemeMode::Light => egui::Visuals::light(),
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(format_time(self.state.time()));
                    if let Some(error) = &self.error {
                        ui.colored_label(egui::Color32::RED, error);
                    }
                });
            });
        });

        let bg = theme::resolve(clockface_protocol::ThemeToken::Background, self.theme_mode);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(bg))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let bounds =
                    ViewportMetrics::from_bounds(f64::from(rect.width()), f64::from(rect.height()));
                self.state.resize(bounds.width, bounds.height);

                let painter = ui.painter_at(rect);
                let measure = PainterMetrics { painter: &painter };
                match self.state.render(&self.renderer, &measure) {
                    Ok(commands) => {
                        renderer::render_commands(&painter, &commands, rect.min, self.theme_mode);
                        self.error = None;
                    }
                    Err(e) => {
                        log::warn!("failed to render clock face: {e}");
                        self.error = Some(e.to_string());
                    }
                }
            });

        ctx.request_repaint_after(TICK_INTERVAL);
    }
}
