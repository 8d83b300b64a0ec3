//! Projektion zwischen logischen Koordinaten und Geräte-Pixeln.

use glam::{Vec2, Vec3};

/// Projektionsparameter: Perspektive, Skalierung und Ursprung in Geräte-Pixeln.
///
/// Wird nur beim Resize verändert, überall sonst read-only gelesen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectParams {
    /// Perspektiv-Faktor `k` für die 3D-Variante (0.0 = orthogonal)
    pub perspective: f32,
    /// Pixel pro logischer Einheit (immer > 0)
    pub scale: f32,
    /// Ursprung X in Geräte-Pixeln
    pub origin_x: f32,
    /// Ursprung Y in Geräte-Pixeln
    pub origin_y: f32,
}

impl ProjectParams {
    /// Standard-Skalierung (Pixel pro logischer Einheit).
    pub const DEFAULT_SCALE: f32 = 100.0;
    /// Kleinste zulässige Skalierung.
    pub const MIN_SCALE: f32 = 1e-3;

    /// Erstellt Parameter mit Ursprung (0, 0) und gegebener Skalierung.
    pub fn new(scale: f32) -> Self {
        Self {
            perspective: 0.0,
            scale: scale.max(Self::MIN_SCALE),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Ursprung als Vektor.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.origin_x, self.origin_y)
    }

    /// Setzt den Ursprung (Resize).
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin_x = origin.x;
        self.origin_y = origin.y;
    }

    /// Setzt die Skalierung; Werte ≤ 0 werden auf `MIN_SCALE` angehoben.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = if scale.is_finite() {
            scale.max(Self::MIN_SCALE)
        } else {
            Self::DEFAULT_SCALE
        };
    }

    /// Logisch → Gerät. Y wird invertiert (Bildschirm-Konvention).
    pub fn to_device(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.origin_x + p.x * self.scale,
            self.origin_y - p.y * self.scale,
        )
    }

    /// Logisch (3D) → Gerät. X/Y werden durch `1 + z·k` geteilt.
    pub fn to_device_3d(&self, p: Vec3) -> Vec2 {
        let denom = 1.0 + p.z * self.perspective;
        self.to_device(Vec2::new(p.x / denom, p.y / denom))
    }

    /// Gerät → logisch. Exakte Umkehrung von [`Self::to_device`].
    pub fn to_logical(&self, device: Vec2) -> Vec2 {
        Vec2::new(
            (device.x - self.origin_x) / self.scale,
            (self.origin_y - device.y) / self.scale,
        )
    }
}

impl Default for ProjectParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE)
    }
}
