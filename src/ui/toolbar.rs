//! Toolbar für die Werkzeugauswahl.

use crate::app::{SketchIntent, SketchState};
use crate::core::FigureKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &SketchState) -> Vec<SketchIntent> {
    let mut events = Vec::new();
    let active = state.tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            if ui
                .add(egui::Button::new("Kein (0)").selected(active.is_none()))
                .clicked()
            {
                events.push(SketchIntent::ToolSelected { tool: None });
            }

            for (idx, kind) in FigureKind::ALL.into_iter().enumerate() {
                let label = format!("{} ({})", kind.label(), idx + 1);
                if ui
                    .add(egui::Button::new(label).selected(active == Some(kind)))
                    .clicked()
                {
                    events.push(SketchIntent::ToolSelected { tool: Some(kind) });
                }
            }

            ui.separator();

            let last = state.figures.iter().last().map(|figure| figure.id());
            if ui
                .add_enabled(last.is_some(), egui::Button::new("🗑 Letzte Figur"))
                .clicked()
            {
                if let Some(id) = last {
                    events.push(SketchIntent::RemoveFigureRequested { id });
                }
            }

            if state.construction.is_building() {
                ui.separator();
                ui.label("Enter = abschließen, Esc = abbrechen");
            }
        });
    });

    events
}
