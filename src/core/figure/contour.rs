//! Kontur-Figur: geschlossenes Polygon, Klick für Klick aufgebaut.

use super::{BuildState, Constructible, Figure, FigureGeometry, FigureId, FigureKind};
use crate::core::projection::ProjectParams;
use crate::core::surface::{Rgba, StrokeStyle, Surface};
use glam::Vec2;

const STROKE: Rgba = [0.118, 0.533, 0.898, 1.0];
const FILL: Rgba = [0.118, 0.533, 0.898, 0.3];

/// Geschlossene Kontur.
///
/// Nach `finish` mit mindestens drei Ecken wird der erste Punkt am Ende
/// wiederholt und die Kontur gilt als geschlossen.
#[derive(Debug, Clone)]
pub struct ContourFigure {
    id: FigureId,
    points: Vec<Vec2>,
    preview_point: Option<Vec2>,
    state: BuildState,
    hovered: bool,
}

impl ContourFigure {
    /// Mindestanzahl Ecken zum Schließen.
    pub const MIN_VERTICES: usize = 3;

    /// Erstellt eine leere Kontur.
    pub fn new(id: FigureId) -> Self {
        Self {
            id,
            points: Vec::new(),
            preview_point: None,
            state: BuildState::Empty,
            hovered: false,
        }
    }

    /// Stützpunkte (geschlossen: letzter == erster).
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Aktueller Vorschau-Punkt.
    pub fn preview_point(&self) -> Option<Vec2> {
        self.preview_point
    }
}

impl Figure for ContourFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Contour
    }

    fn geometry(&self) -> FigureGeometry<'_> {
        FigureGeometry::Path {
            points: &self.points,
            closed: self.is_closed(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface, params: &ProjectParams) {
        if self.points.is_empty() {
            return;
        }
        let mut device: Vec<Vec2> = self.points.iter().map(|&p| params.to_device(p)).collect();
        let stroke = StrokeStyle::new(2.0, STROKE);

        if self.is_closed() {
            // Wiederholten Startpunkt nicht doppelt an den Painter geben
            device.pop();
            surface.fill_polygon(&device, FILL);
            surface.polyline(&device, true, stroke);
            return;
        }

        if let Some(ghost) = self.preview_point {
            device.push(params.to_device(ghost));
        }
        surface.polyline(&device, false, stroke);
    }

    fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    fn as_constructible(&self) -> Option<&dyn Constructible> {
        Some(self as &dyn Constructible)
    }

    fn as_constructible_mut(&mut self) -> Option<&mut dyn Constructible> {
        Some(self as &mut dyn Constructible)
    }
}

impl Constructible for ContourFigure {
    fn start(&mut self, p: Vec2) {
        self.points.clear();
        self.points.push(p);
        self.preview_point = None;
        self.state = BuildState::Building;
    }

    fn add_vertex(&mut self, p: Vec2) {
        if self.state != BuildState::Building {
            return;
        }
        self.points.push(p);
    }

    fn supports_preview(&self) -> bool {
        true
    }

    fn update_preview(&mut self, p: Vec2) {
        if self.state == BuildState::Building {
            self.preview_point = Some(p);
        }
    }

    fn finish(&mut self) {
        if self.state == BuildState::Building && self.points.len() >= Self::MIN_VERTICES {
            self.points.push(self.points[0]);
            self.state = BuildState::Closed;
        }
        self.preview_point = None;
    }

    fn cancel(&mut self) {
        self.points.clear();
        self.preview_point = None;
        self.state = BuildState::Empty;
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn build_state(&self) -> BuildState {
        self.state
    }
}
