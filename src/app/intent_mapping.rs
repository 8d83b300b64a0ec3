//! Mapping von UI-Intents auf mutierende Sketch-Commands.
//!
//! Hier liegt die Grenze der Eingabe-Koordination: Geräte-Koordinaten werden
//! geprüft, eingerastet und in logische Koordinaten umgerechnet, bevor
//! irgendein Command sie an Figuren weiterreicht.

use super::snapping::snap_to_logical;
use super::{SketchCommand, SketchIntent, SketchKey, SketchState};
use glam::Vec2;

/// Übersetzt einen `SketchIntent` in eine Sequenz ausführbarer `SketchCommand`s.
pub fn map_intent_to_commands(state: &SketchState, intent: SketchIntent) -> Vec<SketchCommand> {
    match intent {
        SketchIntent::PointerClicked { device } => match snapped_logical(state, device) {
            Some(logical) => vec![SketchCommand::ClickAt { logical }],
            None => vec![],
        },
        SketchIntent::PointerMoved { device } => match snapped_logical(state, device) {
            // Hover testet gegen den rohen Cursor, Vorschau und Platzierung gegen das Raster
            Some(logical) => vec![
                SketchCommand::SetCursor { logical },
                SketchCommand::RefreshHover { device },
                SketchCommand::RefreshPreview { logical },
            ],
            None => vec![],
        },
        SketchIntent::ContextMenuRequested => vec![],
        SketchIntent::KeyPressed { key } => match key {
            SketchKey::Enter => vec![SketchCommand::FinishConstruction],
            SketchKey::Escape => vec![SketchCommand::CancelConstruction],
        },
        SketchIntent::ToolSelected { tool } => vec![SketchCommand::SetTool { tool }],
        SketchIntent::SurfaceResized { metrics } => match metrics {
            Some(metrics) => vec![SketchCommand::ResizeSurface { metrics }],
            None => {
                log::debug!("Resize ohne Zeichenfläche ignoriert");
                vec![]
            }
        },
        SketchIntent::RemoveFigureRequested { id } => vec![SketchCommand::RemoveFigure { id }],
    }
}

/// Prüft und rastet einen Geräte-Punkt ein. Nicht-endliche Koordinaten werden verworfen.
fn snapped_logical(state: &SketchState, device: Vec2) -> Option<Vec2> {
    if !device.is_finite() {
        log::warn!("Eingabe mit ungültigen Koordinaten verworfen: {:?}", device);
        return None;
    }
    Some(snap_to_logical(
        device,
        &state.view.params,
        state.options.fine_grid_step,
        state.options.snap_bias_px,
    ))
}
