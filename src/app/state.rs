//! Application State: zentrale Datenhaltung.

use super::construction::ConstructionState;
use super::hover::HoverTracker;
use super::CommandLog;
use crate::core::{Figure, FigureId, FigureKind, FigureList, FigureRegistry, ProjectParams};
use crate::shared::SketchOptions;
use glam::Vec2;

/// Vom Host gemeldete Maße der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Größe in Punkten (Höhe ≤ 0 = unbekannt)
    pub size: Vec2,
    /// Geräte-Pixel pro Punkt
    pub pixels_per_point: f32,
}

impl SurfaceMetrics {
    /// Erstellt Maße aus Größe und Pixeldichte.
    pub fn new(size: Vec2, pixels_per_point: f32) -> Self {
        Self {
            size,
            pixels_per_point,
        }
    }
}

/// Projektions- und Flächenzustand (nur durch Resize verändert).
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Projektionsparameter
    pub params: ProjectParams,
    /// Logische Größe der Zeichenfläche in Punkten
    pub surface_size: Vec2,
    /// Backing-Auflösung in physischen Pixeln
    pub backing_size: [u32; 2],
    /// Geräte-Pixel pro Punkt
    pub pixels_per_point: f32,
}

impl ViewState {
    /// Erstellt den View-Zustand mit den Start-Optionen.
    pub fn new(options: &SketchOptions) -> Self {
        let mut params = ProjectParams::new(options.initial_scale);
        params.perspective = options.perspective_factor;
        Self {
            params,
            surface_size: Vec2::ZERO,
            backing_size: [0, 0],
            pixels_per_point: 1.0,
        }
    }
}

/// Hauptzustand der Zeichen-Engine
pub struct SketchState {
    /// Alle platzierten Figuren (alleiniger Besitzer)
    pub figures: FigureList,
    /// Fabriken pro Figurenart
    pub registry: FigureRegistry,
    /// Aktives Werkzeug (von außen gesetzt, beim nächsten Event wirksam)
    pub tool: Option<FigureKind>,
    /// Laufende Konstruktion
    pub construction: ConstructionState,
    /// Höchstens eine Vorschau-Figur (nie in der Figurenliste)
    pub preview: Option<Box<dyn Figure>>,
    /// Aktuelle Hover-Menge
    pub hover: HoverTracker,
    /// Eingerastete Cursor-Position in logischen Koordinaten
    pub cursor: Vec2,
    /// Projektion und Flächenmaße
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: SketchOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen und -Figuren.
    pub fn new() -> Self {
        Self::with_options(SketchOptions::default())
    }

    /// Erstellt einen leeren Zustand mit gegebenen Optionen.
    pub fn with_options(options: SketchOptions) -> Self {
        Self {
            figures: FigureList::new(),
            registry: FigureRegistry::with_default_figures(),
            tool: None,
            construction: ConstructionState::Idle,
            preview: None,
            hover: HoverTracker::new(),
            cursor: Vec2::ZERO,
            view: ViewState::new(&options),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Anzahl der Figuren (für UI-Anzeige)
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Aktuell gehoverte Figuren in Trefferreihenfolge.
    pub fn hovered_figures(&self) -> Vec<FigureId> {
        self.hover.hovered().collect()
    }

    /// Verwirft alle flüchtigen Zustände (Hover, Vorschau, Konstruktion).
    pub fn clear_transient(&mut self) {
        self.hover.clear(&mut self.figures);
        self.preview = None;
        self.construction = ConstructionState::Idle;
    }
}
