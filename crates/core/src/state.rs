use clockface_protocol::RenderCommand;

use crate::error::RenderError;
use crate::face::FaceRenderer;
use crate::layout::{ViewportMetrics, compute_metrics};
use crate::text::TextMeasure;
use crate::time::DialTime;

/// Host-owned clock state: the cached layout and the latest observed time.
///
/// Hosts call [`resize`](Self::resize) and [`set_time`](Self::set_time) from
/// their event loop and repaint when either reports a change. Both must be
/// driven from the same thread as [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct ClockState {
    metrics: ViewportMetrics,
    time: DialTime,
}

impl ClockState {
    pub fn new(width: u32, height: u32, time: DialTime) -> Self {
        Self {
            metrics: compute_metrics(width, height),
            time,
        }
    }

    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    pub fn time(&self) -> DialTime {
        self.time
    }

    /// Recompute the layout if the viewport size changed.
    ///
    /// Returns `true` when a repaint is needed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.metrics.width == width && self.metrics.height == height {
            return false;
        }
        self.metrics = compute_metrics(width, height);
        log::debug!(
            "viewport {}x{} -> radius {:.1}",
            width,
            height,
            self.metrics.clock_radius
        );
        true
    }

    /// Store the latest time. Returns `true` when a repaint is needed.
    pub fn set_time(&mut self, time: impl Into<DialTime>) -> bool {
        let time = time.into();
        if time == self.time {
            return false;
        }
        self.time = time;
        true
    }

    pub fn render(
        &self,
        renderer: &FaceRenderer,
        measure: &dyn TextMeasure,
    ) -> Result<Vec<RenderCommand>, RenderError> {
        renderer.render(&self.metrics, self.time, measure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMetrics;

    #[test]
    fn resize_recomputes_only_on_change() {
        let mut state = ClockState::new(400, 300, DialTime::from_hms(0, 0, 0));
        assert!((state.metrics().clock_radius - 135.0).abs() < 1e-9);

        assert!(!state.resize(400, 300));
        assert!(state.resize(800, 800));
        assert!((state.metrics().clock_radius - 360.0).abs() < 1e-9);
        assert_eq!(state.metrics().center.x, 400.0);
    }

    #[test]
    fn set_time_reports_changes() {
        let mut state = ClockState::new(100, 100, DialTime::from_hms(1, 2, 3));
        assert!(!state.set_time(DialTime::from_hms(1, 2, 3)));
        assert!(state.set_time(DialTime::from_hms(1, 2, 4)));
        assert_eq!(state.time().seconds(), 4);
    }

    #[test]
    fn render_uses_latest_state() {
        let mut state = ClockState::new(100, 100, DialTime::from_hms(0, 0, 0));
        let renderer = FaceRenderer::default();
        let measure = MonospaceMetrics::default();

        let before = state.render(&renderer, &measure).unwrap_or_default();
        state.set_time(DialTime::from_hms(0, 0, 15));
        let after = state.render(&renderer, &measure).unwrap_or_default();

        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
    }
}
