#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clockface_core::LocalClock;
    use clockface_ui::{ClockApp, load_renderer};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1).map(String::as_str) {
        None => None,
        Some("--config") if args.len() == 3 => Some(std::path::PathBuf::from(&args[2])),
        Some(_) => {
            eprintln!("Usage: clockface-gui [--config <face.json>]");
            std::process::exit(1);
        }
    };
    let renderer = match load_renderer(config.as_deref()) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("clockface-gui: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 460.0])
            .with_title("clockface"),
        ..Default::default()
    };
    eframe::run_native(
        "clockface",
        options,
        Box::new(|cc| Ok(Box::new(ClockApp::with_renderer(cc, renderer, Box::new(LocalClock))))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
