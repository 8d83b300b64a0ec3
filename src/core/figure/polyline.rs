//! Polylinien-Figur: offener Linienzug, Klick für Klick aufgebaut.

use super::animation::{Eased, EASE};
use super::{
    distance_to_segment, BuildState, Constructible, Figure, FigureGeometry, FigureId, FigureKind,
};
use crate::core::projection::ProjectParams;
use crate::core::surface::{Rgba, StrokeStyle, Surface};
use glam::Vec2;

const COLOR: Rgba = [0.118, 0.533, 0.898, 1.0];

/// Offener Linienzug.
#[derive(Debug, Clone)]
pub struct PolylineFigure {
    id: FigureId,
    points: Vec<Vec2>,
    preview_point: Option<Vec2>,
    state: BuildState,
    preview: bool,
    hovered: bool,
    alpha: Eased,
    width: Eased,
}

impl PolylineFigure {
    /// Linienbreite in Ruhe.
    pub const BASE_WIDTH: f32 = 2.0;
    /// Linienbreite im Hover.
    pub const HOVER_WIDTH: f32 = 3.5;
    /// Deckkraft im Hover.
    pub const HOVER_ALPHA: f32 = 0.6;
    /// Deckkraft einer Vorschau-Instanz.
    pub const PREVIEW_ALPHA: f32 = 0.4;
    /// Hit-Schwelle in Geräte-Pixeln.
    pub const HIT_THRESHOLD_PX: f32 = 10.0;

    /// Erstellt eine leere Polylinie (Konstruktion beginnt mit `start`).
    pub fn new(id: FigureId) -> Self {
        Self {
            id,
            points: Vec::new(),
            preview_point: None,
            state: BuildState::Empty,
            preview: false,
            hovered: false,
            alpha: Eased::new(1.0),
            width: Eased::new(Self::BASE_WIDTH),
        }
    }

    /// Erstellt eine fertige Polylinie aus gegebenen Punkten.
    pub fn from_points(id: FigureId, points: Vec<Vec2>, preview: bool) -> Self {
        let mut fig = Self::new(id);
        fig.state = if points.is_empty() {
            BuildState::Empty
        } else {
            BuildState::Finalized
        };
        fig.points = points;
        fig.preview = preview;
        if preview {
            fig.alpha = Eased::new(Self::PREVIEW_ALPHA);
        }
        fig
    }

    /// Stützpunkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Aktueller Vorschau-Punkt.
    pub fn preview_point(&self) -> Option<Vec2> {
        self.preview_point
    }

    /// Aktuelle (animierte) Linienbreite.
    pub fn current_width(&self) -> f32 {
        self.width.current
    }
}

impl Figure for PolylineFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Polyline
    }

    fn geometry(&self) -> FigureGeometry<'_> {
        FigureGeometry::Path {
            points: &self.points,
            closed: false,
        }
    }

    fn draw(&self, surface: &mut dyn Surface, params: &ProjectParams) {
        let Some(&first) = self.points.first() else {
            return;
        };
        let alpha = if self.preview {
            Self::PREVIEW_ALPHA
        } else {
            self.alpha.current
        };
        surface.push_alpha(alpha);

        if self.points.len() == 1 && self.preview_point.is_none() {
            // Einzelpunkt sichtbar machen, bevor die zweite Ecke existiert
            surface.fill_circle(params.to_device(first), 3.0, COLOR);
        } else {
            let mut device: Vec<Vec2> =
                self.points.iter().map(|&p| params.to_device(p)).collect();
            if self.state == BuildState::Building {
                if let Some(ghost) = self.preview_point {
                    device.push(params.to_device(ghost));
                }
            }
            surface.polyline(&device, false, StrokeStyle::new(self.width.current, COLOR));
        }

        surface.pop_alpha();
    }

    fn tick(&mut self) {
        self.alpha.step(EASE);
        self.width.step(EASE);
    }

    fn has_hit_test(&self) -> bool {
        true
    }

    fn hit_test(&self, device: Vec2, params: &ProjectParams) -> bool {
        if self.points.len() < 2 {
            return false;
        }
        let min_dist = self
            .points
            .windows(2)
            .map(|w| distance_to_segment(device, params.to_device(w[0]), params.to_device(w[1])))
            .fold(f32::INFINITY, f32::min);
        min_dist <= Self::HIT_THRESHOLD_PX
    }

    fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    fn hover_start(&mut self) {
        if self.preview {
            return;
        }
        self.alpha.set_target(Self::HOVER_ALPHA);
        self.width.set_target(Self::HOVER_WIDTH);
    }

    fn hover_end(&mut self) {
        if self.preview {
            return;
        }
        self.alpha.set_target(1.0);
        self.width.set_target(Self::BASE_WIDTH);
    }

    fn is_preview(&self) -> bool {
        self.preview
    }

    fn as_constructible(&self) -> Option<&dyn Constructible> {
        Some(self as &dyn Constructible)
    }

    fn as_constructible_mut(&mut self) -> Option<&mut dyn Constructible> {
        Some(self as &mut dyn Constructible)
    }
}

impl Constructible for PolylineFigure {
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
        if self.state == BuildState::Building {
            self.state = BuildState::Finalized;
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
