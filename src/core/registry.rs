//! Figuren-Registry: ordnet jeder Figurenart eine Fabrik zu.
//!
//! Die Kategorie (einmalig platzierbar vs. mehrstufig konstruierbar) wird
//! bei der Registrierung festgelegt und ist vor jeder Instanziierung abfragbar.

use super::figure::{
    ContourFigure, Figure, FigureId, FigureKind, MarkerFigure, PointFigure, PolylineFigure,
};
use glam::Vec2;
use indexmap::IndexMap;
use thiserror::Error;

/// Klick-Protokoll einer Figurenart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    /// Ein Klick platziert eine fertige Figur
    Placeable,
    /// Mehrere Klicks bauen eine Figur auf, Abschluss per Enter
    Constructible,
}

/// Fabrik einer Figurenart.
#[derive(Clone, Copy)]
pub enum FigureFactory {
    /// Erzeugt eine fertige Figur an einer logischen Position (`preview` = Vorschau-Instanz)
    Placeable(fn(FigureId, Vec2, bool) -> Box<dyn Figure>),
    /// Erzeugt eine leere, noch nicht gestartete Figur
    Constructible(fn(FigureId) -> Box<dyn Figure>),
}

impl FigureFactory {
    /// Kategorie dieser Fabrik.
    pub fn category(&self) -> ToolCategory {
        match self {
            FigureFactory::Placeable(_) => ToolCategory::Placeable,
            FigureFactory::Constructible(_) => ToolCategory::Constructible,
        }
    }
}

impl std::fmt::Debug for FigureFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FigureFactory::{:?}", self.category())
    }
}

/// Für die angefragte Art ist keine Fabrik registriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unbekannte Figurenart: {0}")]
pub struct UnknownKindError(pub FigureKind);

/// Registry aller bekannten Figurenarten (Registrierungsreihenfolge bleibt erhalten).
#[derive(Debug, Default, Clone)]
pub struct FigureRegistry {
    factories: IndexMap<FigureKind, FigureFactory>,
}

impl FigureRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registry mit Punkt, Polylinie, Kontur und Marker.
    pub fn with_default_figures() -> Self {
        let mut registry = Self::new();
        registry.register(FigureKind::Point, FigureFactory::Placeable(make_point));
        registry.register(
            FigureKind::Polyline,
            FigureFactory::Constructible(make_polyline),
        );
        registry.register(FigureKind::Contour, FigureFactory::Constructible(make_contour));
        registry.register(FigureKind::Marker, FigureFactory::Placeable(make_marker));
        registry
    }

    /// Registriert eine Fabrik. Eine vorhandene Fabrik derselben Art wird still ersetzt.
    pub fn register(&mut self, kind: FigureKind, factory: FigureFactory) {
        if self.factories.insert(kind, factory).is_some() {
            log::debug!("Fabrik für '{}' ersetzt", kind);
        }
    }

    /// Ist für `kind` eine Fabrik registriert?
    pub fn contains(&self, kind: FigureKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Registrierte Arten in Registrierungsreihenfolge.
    pub fn kinds(&self) -> impl Iterator<Item = FigureKind> + '_ {
        self.factories.keys().copied()
    }

    /// Kategorie einer Art, ohne eine Instanz zu erzeugen.
    pub fn category(&self, kind: FigureKind) -> Result<ToolCategory, UnknownKindError> {
        self.factories
            .get(&kind)
            .map(FigureFactory::category)
            .ok_or(UnknownKindError(kind))
    }

    /// Erzeugt eine neue, noch nicht in die Figurenliste aufgenommene Figur.
    ///
    /// Platzierbare Arten entstehen an `at`; konstruierbare Arten entstehen
    /// leer und ignorieren `at` und `preview` (Aufbau beginnt mit `start`).
    pub fn create(
        &self,
        kind: FigureKind,
        id: FigureId,
        at: Vec2,
        preview: bool,
    ) -> Result<Box<dyn Figure>, UnknownKindError> {
        match self.factories.get(&kind) {
            Some(FigureFactory::Placeable(make)) => Ok(make(id, at, preview)),
            Some(FigureFactory::Constructible(make)) => Ok(make(id)),
            None => Err(UnknownKindError(kind)),
        }
    }
}

fn make_point(id: FigureId, pos: Vec2, preview: bool) -> Box<dyn Figure> {
    Box::new(PointFigure::new(id, pos, preview))
}

fn make_marker(id: FigureId, pos: Vec2, preview: bool) -> Box<dyn Figure> {
    Box::new(MarkerFigure::new(id, pos, preview))
}

fn make_polyline(id: FigureId) -> Box<dyn Figure> {
    Box::new(PolylineFigure::new(id))
}

fn make_contour(id: FigureId) -> Box<dyn Figure> {
    Box::new(ContourFigure::new(id))
}
