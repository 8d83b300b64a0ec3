//! `Surface`-Implementierung über einen egui-Painter.
//!
//! Geräte-Pixel entsprechen egui-Punkten relativ zur linken oberen Ecke des
//! Zeichenbereichs. Die physische Auflösung regelt egui über `pixels_per_point`.

use crate::core::{Rgba, StrokeStyle, Surface};
use glam::Vec2;
use kurbo::{BezPath, PathEl};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers,
};

/// Toleranz beim Abflachen von Bézier-Pfaden (Punkte).
const FLATTEN_TOLERANCE: f64 = 0.1;

/// Zeichenfläche auf einem egui-Painter.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    background: egui::Color32,
    alpha: Vec<f32>,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Fläche über `rect` mit weißem Hintergrund.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            background: egui::Color32::WHITE,
            alpha: Vec::new(),
        }
    }

    fn global_alpha(&self) -> f32 {
        self.alpha.last().copied().unwrap_or(1.0)
    }

    fn pos(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.x, self.rect.min.y + p.y)
    }

    fn color(&self, c: Rgba) -> egui::Color32 {
        let a = (c[3] * self.global_alpha()).clamp(0.0, 1.0);
        egui::Color32::from_rgba_unmultiplied(
            (c[0].clamp(0.0, 1.0) * 255.0) as u8,
            (c[1].clamp(0.0, 1.0) * 255.0) as u8,
            (c[2].clamp(0.0, 1.0) * 255.0) as u8,
            (a * 255.0) as u8,
        )
    }

    fn stroke(&self, s: StrokeStyle) -> egui::Stroke {
        egui::Stroke::new(s.width, self.color(s.color))
    }

    /// Füllt geschlossene Ringe nach Non-Zero-Regel als Dreiecksnetz
    /// (auch konkave Umrisse).
    fn fill_rings(&self, rings: &[Vec<egui::Pos2>], color: egui::Color32) {
        let mut builder = Path::builder();
        for ring in rings.iter().filter(|r| r.len() >= 3) {
            builder.begin(point(ring[0].x, ring[0].y));
            for p in &ring[1..] {
                builder.line_to(point(p.x, p.y));
            }
            builder.end(true);
        }
        let path = builder.build();

        let mut buffers: VertexBuffers<egui::Pos2, u32> = VertexBuffers::new();
        let result = FillTessellator::new().tessellate_path(
            &path,
            &FillOptions::non_zero(),
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
                egui::pos2(v.position().x, v.position().y)
            }),
        );
        if let Err(err) = result {
            log::warn!("Füllung konnte nicht trianguliert werden: {err:?}");
            return;
        }

        let mut mesh = egui::Mesh::default();
        for pos in buffers.vertices {
            mesh.colored_vertex(pos, color);
        }
        mesh.indices = buffers.indices;
        self.painter.add(egui::Shape::mesh(mesh));
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn line(&mut self, a: Vec2, b: Vec2, stroke: StrokeStyle) {
        self.painter
            .line_segment([self.pos(a), self.pos(b)], self.stroke(stroke));
    }

    fn polyline(&mut self, points: &[Vec2], closed: bool, stroke: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let pts: Vec<egui::Pos2> = points.iter().map(|&p| self.pos(p)).collect();
        let stroke = self.stroke(stroke);
        if closed {
            self.painter.add(egui::Shape::closed_line(pts, stroke));
        } else {
            self.painter.add(egui::Shape::line(pts, stroke));
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: Rgba) {
        if points.len() < 3 {
            return;
        }
        let ring: Vec<egui::Pos2> = points.iter().map(|&p| self.pos(p)).collect();
        self.fill_rings(&[ring], self.color(fill));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba) {
        self.painter
            .circle_filled(self.pos(center), radius, self.color(fill));
    }

    fn path(&mut self, path: &BezPath, fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        let mut rings: Vec<Vec<egui::Pos2>> = Vec::new();
        path.flatten(FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => {
                rings.push(vec![self.pos(Vec2::new(p.x as f32, p.y as f32))]);
            }
            PathEl::LineTo(p) => {
                if let Some(ring) = rings.last_mut() {
                    ring.push(self.pos(Vec2::new(p.x as f32, p.y as f32)));
                }
            }
            _ => {}
        });
        rings.retain(|r| r.len() >= 3);
        if rings.is_empty() {
            return;
        }

        if let Some(c) = fill {
            self.fill_rings(&rings, self.color(c));
        }
        if let Some(s) = stroke {
            let stroke = self.stroke(s);
            for ring in rings {
                self.painter.add(egui::Shape::closed_line(ring, stroke));
            }
        }
    }

    fn push_alpha(&mut self, alpha: f32) {
        self.alpha.push(alpha.clamp(0.0, 1.0));
    }

    fn pop_alpha(&mut self) {
        self.alpha.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Führt `draw` auf einer 300×300-Fläche aus und liefert die erzeugten Shapes.
    fn painted_shapes(draw: impl Fn(&mut EguiSurface<'_>)) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(300.0, 300.0));
            let mut surface = EguiSurface::new(&painter, rect);
            draw(&mut surface);
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    fn mesh_area(shapes: &[egui::Shape]) -> f32 {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Mesh(mesh) => Some(mesh),
                _ => None,
            })
            .map(|mesh| {
                mesh.indices
                    .chunks(3)
                    .map(|tri| {
                        let a = mesh.vertices[tri[0] as usize].pos;
                        let b = mesh.vertices[tri[1] as usize].pos;
                        let c = mesh.vertices[tri[2] as usize].pos;
                        ((b - a).x * (c - a).y - (b - a).y * (c - a).x).abs() * 0.5
                    })
                    .sum::<f32>()
            })
            .sum()
    }

    #[test]
    fn test_nested_alpha_replaces_instead_of_multiplying() {
        let shapes = painted_shapes(|surface| {
            surface.push_alpha(0.4);
            surface.push_alpha(0.4);
            surface.fill_circle(Vec2::splat(50.0), 5.0, [0.0, 0.0, 1.0, 1.0]);
            surface.pop_alpha();
            surface.fill_circle(Vec2::splat(80.0), 5.0, [0.0, 0.0, 1.0, 1.0]);
            surface.pop_alpha();
            surface.fill_circle(Vec2::splat(110.0), 5.0, [0.0, 0.0, 1.0, 1.0]);
        });

        let alphas: Vec<u8> = shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Circle(circle) => Some(circle.fill.a()),
                _ => None,
            })
            .collect();
        assert_eq!(alphas, vec![102, 102, 255]);
    }

    #[test]
    fn test_concave_polygon_fill_covers_exact_area() {
        // L-Form: 100×100-Quadrat ohne das rechte obere 50×50-Viertel
        let outline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 100.0),
        ];
        let shapes = painted_shapes(|surface| {
            surface.fill_polygon(&outline, [0.0, 0.0, 1.0, 0.3]);
        });

        approx::assert_relative_eq!(mesh_area(&shapes), 7500.0, epsilon = 1e-2);
    }

    #[test]
    fn test_path_fill_and_stroke_are_separate_shapes() {
        let mut path = BezPath::new();
        path.move_to((10.0, 10.0));
        path.line_to((60.0, 10.0));
        path.line_to((10.0, 60.0));
        path.close_path();

        let shapes = painted_shapes(|surface| {
            surface.path(
                &path,
                Some([1.0, 0.0, 0.0, 1.0]),
                Some(StrokeStyle::new(1.0, [0.0, 0.0, 0.0, 1.0])),
            );
        });

        assert!(shapes.iter().any(|s| matches!(s, egui::Shape::Mesh(_))));
        assert!(shapes.iter().any(|s| matches!(s, egui::Shape::Path(_))));
        approx::assert_relative_eq!(mesh_area(&shapes), 1250.0, epsilon = 1e-2);
    }
}
