use std::sync::Mutex;

use clockface_core::{
    DialTime, FaceConfig, FaceRenderer, MonospaceMetrics, ViewportMetrics, compute_metrics,
};
use wasm_bindgen::prelude::*;

static RENDERER: Mutex<Option<FaceRenderer>> = Mutex::new(None);

/// Replace the face configuration with one parsed from JSON.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsError> {
    let config = FaceConfig::from_json_str(config_json).map_err(|e| JsError::new(&e.to_string()))?;
    let face = FaceRenderer::new(config).map_err(|e| JsError::new(&e.to_string()))?;
    let mut renderer = RENDERER.lock().unwrap_or_else(|e| e.into_inner());
    *renderer = Some(face);
    Ok(())
}

/// Render one frame of the clock, returning render commands as JSON.
///
/// `seconds_of_day` is local wall-clock time as seconds since midnight;
/// the page reads it from its own `Date`. Label boxes are approximated
/// with monospace metrics.
#[wasm_bindgen]
pub fn render_clock(width: f64, height: f64, seconds_of_day: f64) -> Result<String, JsError> {
    let metrics = ViewportMetrics::from_bounds(width, height);
    let renderer = RENDERER.lock().unwrap_or_else(|e| e.into_inner());
    let time = DialTime::from_seconds_of_day(seconds_of_day);
    let measure = MonospaceMetrics::default();

    let commands = match renderer.as_ref() {
        Some(r) => r.render(&metrics, time, &measure),
        None => FaceRenderer::default().render(&metrics, time, &measure),
    }
    .map_err(|e| JsError::new(&e.to_string()))?;

    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the dial layout (center, radius) for a viewport as JSON.
#[wasm_bindgen]
pub fn get_layout(width: u32, height: u32) -> Result<String, JsError> {
    serde_json::to_string(&compute_metrics(width, height)).map_err(|e| JsError::new(&e.to_string()))
}
