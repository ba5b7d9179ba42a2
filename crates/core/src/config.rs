//! Face configuration: styling tokens, hand and tick proportions.
//!
//! All radii are fractions of the dial radius. Every field has a default, so
//! a JSON file only needs to name what it overrides.

use std::path::Path;

use clockface_protocol::ThemeToken;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Outline and fill of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// `None` leaves the interior transparent.
    pub fill: Option<ThemeToken>,
    pub stroke: ThemeToken,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceStyle {
    pub bezel: ShapeStyle,
    /// Shared by all three hands.
    pub hand: ThemeToken,
    pub tick: ThemeToken,
    pub label: ThemeToken,
    pub label_font_size: f64,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            bezel: ShapeStyle {
                fill: None,
                stroke: ThemeToken::Bezel,
                stroke_width: 5.0,
            },
            hand: ThemeToken::Hand,
            tick: ThemeToken::Tick,
            label: ThemeToken::Label,
            label_font_size: 18.0,
        }
    }
}

/// Radial extent and stroke thickness of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandSpec {
    pub begin: f64,
    pub end: f64,
    pub thickness: f64,
}

impl HandSpec {
    pub const SECOND: HandSpec = HandSpec::new(0.0, 0.9, 1.0);
    pub const MINUTE: HandSpec = HandSpec::new(0.0, 0.7, 3.0);
    pub const HOUR: HandSpec = HandSpec::new(0.0, 0.5, 5.0);

    pub const fn new(begin: f64, end: f64, thickness: f64) -> Self {
        Self {
            begin,
            end,
            thickness,
        }
    }

    fn validate(&self, hand: &'static str) -> Result<(), ConfigError> {
        if !is_radius_span(self.begin, self.end) {
            return Err(ConfigError::InvalidHand {
                hand,
                begin: self.begin,
                end: self.end,
            });
        }
        positive(self.thickness, "hand thickness")
    }
}

/// Hour graduations and the radius their labels are centered on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSpec {
    pub begin: f64,
    pub end: f64,
    pub thickness: f64,
    pub label_radius: f64,
}

impl Default for TickSpec {
    fn default() -> Self {
        Self {
            begin: 0.9,
            end: 0.98,
            thickness: 4.0,
            label_radius: 0.85,
        }
    }
}

/// How the second hand advances between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecondMotion {
    /// Jump once per whole second.
    #[default]
    Tick,
    /// Follow fractional seconds.
    Sweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub style: FaceStyle,
    pub second_hand: HandSpec,
    pub minute_hand: HandSpec,
    pub hour_hand: HandSpec,
    pub ticks: TickSpec,
    pub second_motion: SecondMotion,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            style: FaceStyle::default(),
            second_hand: HandSpec::SECOND,
            minute_hand: HandSpec::MINUTE,
            hour_hand: HandSpec::HOUR,
            ticks: TickSpec::default(),
            second_motion: SecondMotion::default(),
        }
    }
}

impl FaceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FaceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded face config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.second_hand.validate("second")?;
        self.minute_hand.validate("minute")?;
        self.hour_hand.validate("hour")?;

        let t = &self.ticks;
        if !is_radius_span(t.begin, t.end) || !(0.0..=1.0).contains(&t.label_radius) {
            return Err(ConfigError::InvalidTicks);
        }
        positive(t.thickness, "tick thickness")?;
        positive(self.style.bezel.stroke_width, "bezel stroke width")?;
        positive(self.style.label_font_size, "label font size")
    }
}

fn is_radius_span(begin: f64, end: f64) -> bool {
    (0.0..=1.0).contains(&begin) && (0.0..=1.0).contains(&end) && begin <= end
}

fn positive(v: f64, what: &'static str) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive(what))
    }
}
