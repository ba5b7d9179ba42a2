use clockface_protocol::{Point, RenderCommand};

use crate::config::{FaceConfig, HandSpec, TickSpec};
use crate::error::{ConfigError, RenderError};
use crate::geometry::{angle, face_point, radial_segment};
use crate::layout::ViewportMetrics;
use crate::text::TextMeasure;
use crate::time::DialTime;

/// Number of hour graduations around the dial.
pub const HOUR_MARKS: u32 = 12;

/// One hour graduation with its label anchor, derived from the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub hour: u32,
    pub angle: f64,
    pub begin: Point,
    pub end: Point,
    pub label: String,
    /// Center of the label's box.
    pub label_anchor: Point,
}

impl TickMark {
    /// Graduation for `hour` in `1..=12`; 12 sits at the top of the dial.
    pub fn for_hour(
        hour: u32,
        metrics: &ViewportMetrics,
        spec: &TickSpec,
    ) -> Result<Self, RenderError> {
        let radius = metrics.clock_radius;
        let angle = angle(f64::from(hour % HOUR_MARKS) / f64::from(HOUR_MARKS));
        let (begin, end) =
            radial_segment(metrics.center, radius * spec.begin, radius * spec.end, angle)?;
        let label_anchor = face_point(metrics.center, radius * spec.label_radius, angle)?;

        Ok(Self {
            hour,
            angle,
            begin,
            end,
            label: hour.to_string(),
            label_anchor,
        })
    }
}

/// Produces the draw commands for one frame of the clock face.
///
/// Holds only immutable configuration; each call to [`render`](Self::render)
/// is a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct FaceRenderer {
    config: FaceConfig,
}

impl FaceRenderer {
    /// Build a renderer, rejecting hand or tick proportions that would
    /// leave the dial.
    pub fn new(config: FaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Render the bezel, the twelve graduations with their labels, and the
    /// second, minute and hour hands, in that stacking order.
    ///
    /// Aborts on the first geometry or time-range error.
    pub fn render(
        &self,
        metrics: &ViewportMetrics,
        time: DialTime,
        measure: &dyn TextMeasure,
    ) -> Result<Vec<RenderCommand>, RenderError> {
        let style = &self.config.style;
        let mut commands = Vec::with_capacity(1 + 2 * HOUR_MARKS as usize + 3);

        commands.push(RenderCommand::DrawEllipse {
            center: metrics.center,
            radius_x: metrics.clock_radius,
            radius_y: metrics.clock_radius,
            fill: style.bezel.fill,
            stroke: style.bezel.stroke,
            stroke_width: style.bezel.stroke_width,
        });

        self.push_ticks(&mut commands, metrics, measure)?;

        let second = time.second_fraction(self.config.second_motion)?;
        let minute = time.minute_fraction()?;
        let hour = time.hour_fraction()?;

        self.push_hand(&mut commands, metrics, &self.config.second_hand, second)?;
        self.push_hand(&mut commands, metrics, &self.config.minute_hand, minute)?;
        self.push_hand(&mut commands, metrics, &self.config.hour_hand, hour)?;

        log::trace!(
            "rendered {} commands for {:.3}s into {}x{}",
            commands.len(),
            time.seconds_of_day(),
            metrics.width,
            metrics.height
        );
        Ok(commands)
    }

    fn push_ticks(
        &self,
        commands: &mut Vec<RenderCommand>,
        metrics: &ViewportMetrics,
        measure: &dyn TextMeasure,
    ) -> Result<(), RenderError> {
        let style = &self.config.style;
        let spec = &self.config.ticks;

        for hour in 1..=HOUR_MARKS {
            let tick = TickMark::for_hour(hour, metrics, spec)?;

            commands.push(RenderCommand::DrawLine {
                from: tick.begin,
                to: tick.end,
                color: style.tick,
                width: spec.thickness,
            });

            let size = measure.measure(&tick.label, style.label_font_size);
            commands.push(RenderCommand::DrawText {
                position: Point::new(
                    tick.label_anchor.x - size.width / 2.0,
                    tick.label_anchor.y - size.height / 2.0,
                ),
                text: tick.label,
                color: style.label,
                font_size: style.label_font_size,
            });
        }
        Ok(())
    }

    fn push_hand(
        &self,
        commands: &mut Vec<RenderCommand>,
        metrics: &ViewportMetrics,
        hand: &HandSpec,
        fraction: f64,
    ) -> Result<(), RenderError> {
        let radius = metrics.clock_radius;
        let (from, to) = radial_segment(
            metrics.center,
            radius * hand.begin,
            radius * hand.end,
            angle(fraction),
        )?;
        commands.push(RenderCommand::DrawLine {
            from,
            to,
            color: self.config.style.hand,
            width: hand.thickness,
        });
        Ok(())
    }
}

/// Render a frame with the default face configuration.
pub fn render_face(
    metrics: &ViewportMetrics,
    time: DialTime,
    measure: &dyn TextMeasure,
) -> Result<Vec<RenderCommand>, RenderError> {
    FaceRenderer::default().render(metrics, time, measure)
}
