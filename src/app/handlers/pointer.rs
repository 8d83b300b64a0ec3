//! Handler für Zeiger-Events: Klick, Cursor, Hover und Vorschau.

use crate::app::construction;
use crate::app::SketchState;

/// Verarbeitet einen eingerasteten Klick über die Konstruktions-Zustandsmaschine.
pub fn click(state: &mut SketchState, logical: glam::Vec2) -> anyhow::Result<()> {
    construction::click(state, logical)
}

/// Speichert die eingerastete Cursor-Position.
pub fn set_cursor(state: &mut SketchState, logical: glam::Vec2) {
    state.cursor = logical;
}

/// Berechnet die Hover-Menge gegen den rohen Cursor neu.
pub fn refresh_hover(state: &mut SketchState, device: glam::Vec2) {
    state
        .hover
        .update(&mut state.figures, device, &state.view.params);
}

/// Aktualisiert Vorschau-Figur bzw. Vorschau-Punkt der Konstruktion.
pub fn refresh_preview(state: &mut SketchState, logical: glam::Vec2) {
    construction::refresh_preview(state, logical);
}
