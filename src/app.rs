use eframe::egui;

use crate::config::CanvasConfig;
use crate::controller::CanvasController;
use crate::error::ThemeError;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// The canvas window: one frame polls input, mutates the model, then redraws.
#[derive(Debug)]
pub struct CanvasApp {
    controller: CanvasController,
    renderer: Renderer,
    input: InputHandler,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, ThemeError> {
        // Load previous settings (if any).
        let config: CanvasConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Result<Self, ThemeError> {
        let controller = CanvasController::from_config(&config)?;
        Ok(Self {
            controller,
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
        })
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CanvasController {
        &mut self.controller
    }

    /// Settings as they should be persisted, with the theme currently in use
    pub fn config(&self) -> CanvasConfig {
        CanvasConfig {
            theme: self.controller.themes().current().name.clone(),
        }
    }

    /// Feeds one frame of input to the controller and paints the result
    fn canvas(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        self.input.set_canvas_rect(canvas_rect);
        self.controller.begin_frame();
        for event in self.input.process_input(ctx) {
            self.controller.handle_event(event);
        }

        self.renderer.render(&painter, canvas_rect, &self.controller);
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = self.controller.themes().current();
        let modeline = egui::Frame::none()
            .fill(egui::Color32::from(theme.modeline))
            .inner_margin(4.0);

        egui::TopBottomPanel::bottom("modeline")
            .frame(modeline)
            .show(ctx, |ui| {
                self.renderer.render_modeline(ui, &self.controller);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas(ctx, ui);
            });
    }
}
