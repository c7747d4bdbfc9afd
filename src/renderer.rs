// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use crate::color::Color;
use crate::controller::CanvasController;
use crate::snapping::SnapGuide;
use crate::theme::Theme;

/// Line widths used when painting the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    selection_thickness: f32,
    marquee_thickness: f32,
    guide_thickness: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            selection_thickness: 2.0,
            marquee_thickness: 1.0,
            guide_thickness: 1.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     canvas (egui::Rect): The rectangle to draw in; guides span all of it
    ///     controller (CanvasController): Shapes, theme and gesture state to draw
    pub fn render(&self, painter: &egui::Painter, canvas: Rect, controller: &CanvasController) {
        let theme = controller.themes().current();

        painter.rect_filled(canvas, 0.0, Color32::from(theme.background));

        let fill = Color32::from(theme.text);
        let outline = Stroke::new(self.selection_thickness, theme.cursor);
        for rectangle in controller.shapes().layered() {
            painter.rect_filled(rectangle.rect(), 0.0, fill);
            if rectangle.selected {
                painter.rect_stroke(rectangle.rect(), 0.0, outline);
            }
        }

        if let Some(marquee) = controller.marquee() {
            let stroke = Stroke::new(self.marquee_thickness, Color::MARQUEE);
            painter.rect_stroke(marquee, 0.0, stroke);
        }

        self.render_guides(painter, canvas, controller.guides(), theme);
    }

    fn render_guides(
        &self,
        painter: &egui::Painter,
        canvas: Rect,
        guides: &[SnapGuide],
        theme: &Theme,
    ) {
        let stroke = Stroke::new(self.guide_thickness, theme.cursor);
        for guide in guides {
            let segment = match *guide {
                SnapGuide::Horizontal(y) => {
                    [Pos2::new(canvas.left(), y), Pos2::new(canvas.right(), y)]
                }
                SnapGuide::Vertical(x) => {
                    [Pos2::new(x, canvas.top()), Pos2::new(x, canvas.bottom())]
                }
            };
            painter.line_segment(segment, stroke);
        }
    }

    /// Status strip with the theme name and the number of shapes
    pub fn render_modeline(&self, ui: &mut egui::Ui, controller: &CanvasController) {
        let theme = controller.themes().current();
        let shapes = controller.shapes();
        ui.horizontal(|ui| {
            ui.colored_label(Color32::from(theme.text), theme.name.as_str());
            ui.separator();
            ui.colored_label(
                Color32::from(theme.text),
                format!("{} / {} shapes", shapes.len(), shapes.capacity()),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeStore;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    fn controller() -> CanvasController {
        CanvasController::new(ThemeStore::builtin().unwrap())
    }

    fn marquee(controller: &mut CanvasController, start: Pos2, end: Pos2) {
        controller.pointer_down(start);
        controller.pointer_move(end);
        controller.pointer_up(end);
    }

    /// Paints one frame and returns the shapes egui collected
    fn rendered_shapes(controller: &CanvasController) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), canvas());
            Renderer::new().render(&painter, canvas(), controller);
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    fn rects(shapes: &[egui::Shape]) -> Vec<egui::epaint::RectShape> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Rect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_render_fills_outline_and_guide() {
        let mut controller = controller();
        marquee(&mut controller, Pos2::new(0.0, 0.0), Pos2::new(50.0, 50.0));
        marquee(&mut controller, Pos2::new(300.0, 300.0), Pos2::new(350.0, 350.0));

        // Grab the second rectangle and drop its top edge near the first one's bottom
        controller.pointer_down(Pos2::new(300.0, 300.0));
        controller.pointer_move(Pos2::new(200.0, 59.0));

        let theme = controller.themes().current();
        let background = Color32::from(theme.background);
        let text = Color32::from(theme.text);
        let cursor = Color32::from(theme.cursor);
        assert_eq!(text, Color32::from_rgb(0xD6, 0xD6, 0xD4));

        let shapes = rendered_shapes(&controller);
        let rects = rects(&shapes);

        assert!(rects.iter().any(|r| r.rect == canvas() && r.fill == background));

        let filled: Vec<Rect> = rects.iter().filter(|r| r.fill == text).map(|r| r.rect).collect();
        let moved = Rect::from_min_size(Pos2::new(200.0, 50.0), egui::vec2(50.0, 50.0));
        assert_eq!(
            filled,
            vec![Rect::from_min_size(Pos2::ZERO, egui::vec2(50.0, 50.0)), moved]
        );

        let outlines: Vec<_> = rects.iter().filter(|r| r.stroke.width > 0.0).collect();
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].rect, moved);
        assert_eq!(outlines[0].stroke.width, 2.0);
        assert_eq!(outlines[0].stroke.color, cursor);

        let segments: Vec<[Pos2; 2]> = shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::LineSegment { points, .. } => Some(*points),
                _ => None,
            })
            .collect();
        assert_eq!(segments, vec![[Pos2::new(0.0, 50.0), Pos2::new(800.0, 50.0)]]);
    }

    #[test]
    fn test_render_marquee_outline() {
        let mut controller = controller();
        controller.pointer_down(Pos2::new(500.0, 500.0));
        controller.pointer_move(Pos2::new(450.0, 520.0));

        let shapes = rendered_shapes(&controller);
        let outlines: Vec<_> = rects(&shapes)
            .into_iter()
            .filter(|r| r.stroke.width > 0.0)
            .collect();

        assert_eq!(outlines.len(), 1);
        assert_eq!(
            outlines[0].rect,
            Rect::from_min_max(Pos2::new(450.0, 500.0), Pos2::new(500.0, 520.0))
        );
        assert_eq!(outlines[0].stroke.width, 1.0);
        assert_eq!(outlines[0].stroke.color, Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_render_modeline_text() {
        let controller = controller();
        let text = Color32::from(controller.themes().current().text);

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                Renderer::new().render_modeline(ui, &controller);
            });
        });

        let labels: Vec<_> = output
            .shapes
            .into_iter()
            .filter_map(|clipped| match clipped.shape {
                egui::Shape::Text(text_shape) => Some(text_shape.galley),
                _ => None,
            })
            .collect();
        let texts: Vec<&str> = labels.iter().map(|galley| galley.text()).collect();
        assert!(texts.contains(&"Molokai"));
        assert!(texts.contains(&"0 / 100 shapes"));

        for galley in &labels {
            for section in &galley.job.sections {
                assert_eq!(section.format.color, text);
            }
        }
    }
}
