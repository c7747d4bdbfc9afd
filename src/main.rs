#![warn(clippy::all, rust_2018_idioms)]

use rect_canvas::CanvasApp;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1920.0, 1080.0])
            .with_title("Rect Canvas"),
        ..Default::default()
    };

    eframe::run_native(
        "Rect Canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(CanvasApp::new(cc)?))),
    )
}
