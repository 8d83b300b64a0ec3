//! Handler für Werkzeugwahl, Konstruktionsabschluss und Entfernen von Figuren.

use crate::app::construction::{self, ConstructionState};
use crate::app::SketchState;
use crate::core::{FigureId, FigureKind};

/// Setzt das aktive Werkzeug. Eine laufende Konstruktion bleibt aktiv.
pub fn set_tool(state: &mut SketchState, tool: Option<FigureKind>) {
    state.tool = tool;
    state.preview = None;
    match tool {
        Some(kind) => log::info!("Werkzeug: {}", kind),
        None => log::info!("Werkzeug: keines"),
    }
}

/// Schließt die laufende Konstruktion ab (Enter).
pub fn finish_construction(state: &mut SketchState) {
    construction::finish(state);
}

/// Bricht die laufende Konstruktion ab (Escape).
pub fn cancel_construction(state: &mut SketchState) {
    construction::cancel(state);
}

/// Entfernt eine Figur. War sie in Konstruktion, kehrt die Maschine zu `Idle` zurück.
pub fn remove_figure(state: &mut SketchState, id: FigureId) {
    if state.figures.remove(id).is_none() {
        log::debug!("Figur {} nicht vorhanden", id);
        return;
    }
    state.hover.forget(id);
    if state.construction == ConstructionState::Building(id) {
        state.construction = ConstructionState::Idle;
        state.preview = None;
    }
    log::info!("Figur {} entfernt", id);
}
