//! Status-Bar am unteren Bildschirmrand.

use crate::app::{ConstructionState, SketchState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &SketchState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Cursor: ({:.2}, {:.2})",
                state.cursor.x, state.cursor.y
            ));

            ui.separator();

            let hovered = state.hovered_figures();
            if hovered.is_empty() {
                ui.label("Hover: –");
            } else {
                let ids: Vec<String> = hovered.iter().map(|id| id.to_string()).collect();
                ui.label(format!("Hover: {}", ids.join(", ")));
            }

            ui.separator();

            match state.construction {
                ConstructionState::Idle => ui.label("Konstruktion: –"),
                ConstructionState::Building(id) => ui.label(format!("Konstruktion: {}", id)),
            };

            ui.separator();

            ui.label(format!("Figuren: {}", state.figure_count()));

            ui.separator();

            let tool_name = state.tool.map_or("–", |kind| kind.as_str());
            ui.label(format!("Tool: {}", tool_name));

            ui.separator();

            let action = state
                .command_log
                .last_action()
                .map_or("–", |command| command.label());
            ui.label(format!("Letzte Aktion: {}", action));
        });
    });
}
