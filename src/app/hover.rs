//! Hover-Engine: berechnet pro Zeigerbewegung die Menge getroffener Figuren
//! und löst Enter-/Exit-Reaktionen genau einmal pro Übergang aus.

use crate::core::{FigureId, FigureList, ProjectParams};
use glam::Vec2;
use indexmap::IndexSet;

/// Übergänge einer Hover-Aktualisierung.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverTransitions {
    /// Neu getroffene Figuren (Enter-Reaktion ausgelöst)
    pub entered: Vec<FigureId>,
    /// Nicht mehr getroffene Figuren (Exit-Reaktion ausgelöst)
    pub exited: Vec<FigureId>,
}

impl HoverTransitions {
    /// Gab es keinen Übergang?
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Aktuelle Hover-Menge in Trefferreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hovered: IndexSet<FigureId>,
}

impl HoverTracker {
    /// Erstellt eine leere Hover-Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell getroffene Figuren.
    pub fn hovered(&self) -> impl Iterator<Item = FigureId> + '_ {
        self.hovered.iter().copied()
    }

    /// Ist `id` aktuell in der Hover-Menge?
    pub fn contains(&self, id: FigureId) -> bool {
        self.hovered.contains(&id)
    }

    /// Anzahl getroffener Figuren.
    pub fn len(&self) -> usize {
        self.hovered.len()
    }

    /// Gibt `true` zurück, wenn keine Figur getroffen ist.
    pub fn is_empty(&self) -> bool {
        self.hovered.is_empty()
    }

    /// Testet alle Figuren mit Hit-Test gegen den Cursor (Geräte-Pixel).
    ///
    /// Vorschau-Figuren werden getestet, nehmen aber nie an Reaktionen teil.
    pub fn update(
        &mut self,
        figures: &mut FigureList,
        device: Vec2,
        params: &ProjectParams,
    ) -> HoverTransitions {
        let mut now = IndexSet::with_capacity(self.hovered.len());
        let mut transitions = HoverTransitions::default();

        for fig in figures.iter_mut() {
            if !fig.has_hit_test() || !fig.hit_test(device, params) || fig.is_preview() {
                continue;
            }
            let id = fig.id();
            now.insert(id);
            if !self.hovered.contains(&id) {
                fig.set_hovered(true);
                fig.hover_start();
                transitions.entered.push(id);
            }
        }

        for &id in self.hovered.iter().filter(|id| !now.contains(*id)) {
            if let Some(fig) = figures.get_mut(id) {
                fig.set_hovered(false);
                fig.hover_end();
            }
            transitions.exited.push(id);
        }

        self.hovered = now;
        if !transitions.is_empty() {
            log::trace!(
                "Hover: +{:?} -{:?}",
                transitions.entered,
                transitions.exited
            );
        }
        transitions
    }

    /// Vergisst eine entfernte Figur ohne Reaktion.
    pub fn forget(&mut self, id: FigureId) {
        self.hovered.shift_remove(&id);
    }

    /// Leert die Hover-Menge; verbliebene Figuren erhalten ihre Exit-Reaktion.
    pub fn clear(&mut self, figures: &mut FigureList) {
        for id in self.hovered.drain(..) {
            if let Some(fig) = figures.get_mut(id) {
                fig.set_hovered(false);
                fig.hover_end();
            }
        }
    }
}
