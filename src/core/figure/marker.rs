//! Marker-Figur: Pin-Silhouette aus zwei kubischen Béziers.
//!
//! Die Silhouette ist in einem lokalen 20×20-Rahmen definiert, dessen Spitze
//! bei (0, 0) auf der Ankerposition liegt. Hit-Test per Non-Zero-Winding
//! im lokalen (verschobenen, skalierten) Rahmen.

use super::animation::{Eased, EASE};
use super::{Figure, FigureGeometry, FigureId, FigureKind};
use crate::core::projection::ProjectParams;
use crate::core::surface::{Rgba, StrokeStyle, Surface};
use glam::Vec2;
use kurbo::{Affine, BezPath, Point, Shape};

const FILL: Rgba = [0.898, 0.224, 0.208, 1.0];
const OUTLINE: Rgba = [0.0, 0.0, 0.0, 1.0];
const INNER: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Kantenlänge des lokalen Silhouetten-Rahmens.
const LOCAL_FRAME: f64 = 20.0;

/// Pin-Marker an einer logischen Koordinate.
#[derive(Debug, Clone)]
pub struct MarkerFigure {
    id: FigureId,
    pos: Vec2,
    preview: bool,
    hovered: bool,
    scale: Eased,
    alpha: Eased,
}

/// Silhouette im lokalen Rahmen (Spitze bei 0/0, Kopf bei y = -20).
pub fn marker_silhouette() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.curve_to((10.0, -10.0), (10.0, -20.0), (0.0, -20.0));
    path.curve_to((-10.0, -20.0), (-10.0, -10.0), (0.0, 0.0));
    path.close_path();
    path
}

impl MarkerFigure {
    /// Basisgröße in Geräte-Pixeln.
    pub const BASE_SIZE: f32 = 16.0;
    /// Skalierung im Hover.
    pub const HOVER_SCALE: f32 = 1.5;
    /// Deckkraft im Hover.
    pub const HOVER_ALPHA: f32 = 0.5;
    /// Deckkraft einer Vorschau-Instanz.
    pub const PREVIEW_ALPHA: f32 = 0.4;

    /// Erstellt einen Marker; `preview` markiert eine Vorschau-Instanz.
    pub fn new(id: FigureId, pos: Vec2, preview: bool) -> Self {
        let alpha = if preview { Self::PREVIEW_ALPHA } else { 1.0 };
        Self {
            id,
            pos,
            preview,
            hovered: false,
            scale: Eased::new(1.0),
            alpha: Eased::new(alpha),
        }
    }

    /// Logische Position.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Faktor lokaler Rahmen → Geräte-Pixel.
    fn local_factor(&self) -> f64 {
        (Self::BASE_SIZE * self.scale.current) as f64 / LOCAL_FRAME
    }

    fn local_to_device(&self, params: &ProjectParams) -> Affine {
        let c = params.to_device(self.pos);
        Affine::translate((c.x as f64, c.y as f64)) * Affine::scale(self.local_factor())
    }
}

impl Figure for MarkerFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Marker
    }

    fn geometry(&self) -> FigureGeometry<'_> {
        FigureGeometry::Single(self.pos)
    }

    fn draw(&self, surface: &mut dyn Surface, params: &ProjectParams) {
        let alpha = if self.preview {
            Self::PREVIEW_ALPHA
        } else {
            self.alpha.current
        };
        let transform = self.local_to_device(params);
        let silhouette = transform * marker_silhouette();
        surface.push_alpha(alpha);
        surface.path(&silhouette, Some(FILL), Some(StrokeStyle::new(1.0, OUTLINE)));

        let k = self.local_factor() as f32;
        let center = params.to_device(self.pos) + Vec2::new(0.0, -12.0) * k;
        surface.fill_circle(center, 4.0 * k, INNER);
        surface.pop_alpha();
    }

    fn tick(&mut self) {
        self.scale.step(EASE);
        self.alpha.step(EASE);
    }

    fn has_hit_test(&self) -> bool {
        true
    }

    fn hit_test(&self, device: Vec2, params: &ProjectParams) -> bool {
        let c = params.to_device(self.pos);
        let k = self.local_factor();
        let local = Point::new((device.x - c.x) as f64 / k, (device.y - c.y) as f64 / k);
        marker_silhouette().contains(local)
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
        self.scale.set_target(Self::HOVER_SCALE);
        self.alpha.set_target(Self::HOVER_ALPHA);
    }

    fn hover_end(&mut self) {
        if self.preview {
            return;
        }
        self.scale.set_target(1.0);
        self.alpha.set_target(1.0);
    }

    fn is_preview(&self) -> bool {
        self.preview
    }
}
