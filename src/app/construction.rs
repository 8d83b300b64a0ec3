//! Konstruktions-Zustandsmaschine: entscheidet pro Klick zwischen Starten,
//! Erweitern und einmaligem Platzieren und verwaltet die Vorschau-Figur.

use super::SketchState;
use crate::core::{FigureId, ToolCategory};
use anyhow::{bail, Context};
use glam::Vec2;

/// Zustand der laufenden Konstruktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstructionState {
    /// Keine Figur im Aufbau
    #[default]
    Idle,
    /// Eine Figur der Figurenliste wird aufgebaut
    Building(FigureId),
}

impl ConstructionState {
    /// ID der Figur im Aufbau.
    pub fn active(&self) -> Option<FigureId> {
        match self {
            ConstructionState::Idle => None,
            ConstructionState::Building(id) => Some(*id),
        }
    }

    /// Läuft gerade eine Konstruktion?
    pub fn is_building(&self) -> bool {
        matches!(self, ConstructionState::Building(_))
    }
}

/// Verarbeitet einen (bereits eingerasteten) Klick in logischen Koordinaten.
pub fn click(state: &mut SketchState, p: Vec2) -> anyhow::Result<()> {
    let Some(tool) = state.tool else {
        return Ok(());
    };

    if let ConstructionState::Building(id) = state.construction {
        match state
            .figures
            .get_mut(id)
            .and_then(|fig| fig.as_constructible_mut())
        {
            Some(construct) if construct.point_count() == 0 => construct.start(p),
            Some(construct) => construct.add_vertex(p),
            None => {
                log::warn!("Figur {} im Aufbau nicht mehr vorhanden", id);
                state.construction = ConstructionState::Idle;
            }
        }
        return Ok(());
    }

    let category = match state.registry.category(tool) {
        Ok(category) => category,
        Err(e) => {
            log::warn!("Klick ignoriert: {}", e);
            return Ok(());
        }
    };

    match category {
        ToolCategory::Constructible => {
            let id = state.figures.allocate_id();
            let mut figure = state
                .registry
                .create(tool, id, p, false)
                .with_context(|| format!("Figur '{}' konnte nicht erzeugt werden", tool))?;
            let Some(construct) = figure.as_constructible_mut() else {
                bail!("Fabrik für '{}' liefert keine konstruierbare Figur", tool);
            };
            construct.start(p);
            state.figures.push(figure);
            state.construction = ConstructionState::Building(id);
            state.preview = None;
            log::debug!("Konstruktion {} ({}) gestartet", id, tool);
        }
        ToolCategory::Placeable => {
            let id = state.figures.allocate_id();
            let figure = state
                .registry
                .create(tool, id, p, false)
                .with_context(|| format!("Figur '{}' konnte nicht erzeugt werden", tool))?;
            state.figures.push(figure);
            state.preview = state.registry.create(tool, FigureId::PREVIEW, p, true).ok();
            log::debug!("Figur {} ({}) platziert", id, tool);
        }
    }

    Ok(())
}

/// Aktualisiert die Vorschau nach einer Zeigerbewegung.
///
/// Während einer Konstruktion mit Live-Vorschau erhält die aktive Figur den
/// Punkt und es gibt keine separate Vorschau-Figur. Sonst folgt eine
/// Vorschau-Instanz platzierbarer Werkzeuge dem Cursor.
pub fn refresh_preview(state: &mut SketchState, p: Vec2) {
    let Some(tool) = state.tool else {
        state.preview = None;
        return;
    };

    if let Some(id) = state.construction.active() {
        if let Some(construct) = state
            .figures
            .get_mut(id)
            .and_then(|fig| fig.as_constructible_mut())
        {
            if construct.supports_preview() {
                construct.update_preview(p);
                state.preview = None;
                return;
            }
        }
    }

    state.preview = match state.registry.category(tool) {
        Ok(ToolCategory::Placeable) => state.registry.create(tool, FigureId::PREVIEW, p, true).ok(),
        Ok(ToolCategory::Constructible) => None,
        Err(e) => {
            log::trace!("Keine Vorschau: {}", e);
            None
        }
    };
}

/// Schließt die laufende Konstruktion ab (Enter). No-op ohne Konstruktion.
pub fn finish(state: &mut SketchState) {
    let ConstructionState::Building(id) = state.construction else {
        return;
    };
    if let Some(construct) = state
        .figures
        .get_mut(id)
        .and_then(|fig| fig.as_constructible_mut())
    {
        construct.finish();
        log::debug!(
            "Konstruktion {} abgeschlossen ({} Punkte, geschlossen: {})",
            id,
            construct.point_count(),
            construct.is_closed()
        );
    }
    state.construction = ConstructionState::Idle;
    state.preview = None;
}

/// Bricht die laufende Konstruktion ab (Escape). Die Figur bleibt leer in der Liste.
pub fn cancel(state: &mut SketchState) {
    let ConstructionState::Building(id) = state.construction else {
        return;
    };
    if let Some(construct) = state
        .figures
        .get_mut(id)
        .and_then(|fig| fig.as_constructible_mut())
    {
        construct.cancel();
        log::debug!("Konstruktion {} abgebrochen", id);
    }
    state.construction = ConstructionState::Idle;
    state.preview = None;
}
