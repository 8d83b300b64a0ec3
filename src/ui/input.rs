//! Eingabe der Zeichenfläche: egui-Zeigerereignisse, Tastatur und Resize → SketchIntent.
//!
//! Positionen werden relativ zur linken oberen Ecke der Zeichenfläche gemeldet.
//! Das Einrasten und die Projektion passieren erst im Controller.

use super::keyboard;
use crate::app::{SketchIntent, SurfaceMetrics};
use glam::Vec2;

/// Merkt sich die zuletzt gemeldeten Werte, damit nur Änderungen Intents erzeugen.
#[derive(Debug, Default)]
pub struct InputState {
    last_pointer: Option<Vec2>,
    last_metrics: Option<SurfaceMetrics>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt alle Intents der Zeichenfläche für diesen Frame.
    ///
    /// Reihenfolge: Resize, Tastatur, Zeigerbewegung, Klicks.
    pub fn collect_surface_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<SketchIntent> {
        let mut events = Vec::new();

        let metrics = SurfaceMetrics::new(
            Vec2::new(response.rect.width(), response.rect.height()),
            ui.ctx().pixels_per_point(),
        );
        if self.last_metrics != Some(metrics) {
            self.last_metrics = Some(metrics);
            events.push(SketchIntent::SurfaceResized {
                metrics: Some(metrics),
            });
        }

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_pointer_move(response, &mut events);
        handle_clicks(response, &mut events);

        events
    }

    fn handle_pointer_move(&mut self, response: &egui::Response, events: &mut Vec<SketchIntent>) {
        let Some(pos) = response.hover_pos() else {
            self.last_pointer = None;
            return;
        };
        let device = to_surface(pos, response);
        if self.last_pointer == Some(device) {
            return;
        }
        self.last_pointer = Some(device);
        events.push(SketchIntent::PointerMoved { device });
    }
}

fn handle_clicks(response: &egui::Response, events: &mut Vec<SketchIntent>) {
    if response.secondary_clicked() {
        // Kontextmenü wird verschluckt
        events.push(SketchIntent::ContextMenuRequested);
    }
    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(SketchIntent::PointerClicked {
                device: to_surface(pos, response),
            });
        }
    }
}

fn to_surface(pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pos - response.rect.min;
    Vec2::new(local.x, local.y)
}
