//! Raster-Einrasten von Geräte-Pixeln vor der Umrechnung in logische Koordinaten.

use crate::core::ProjectParams;
use glam::Vec2;

/// Rundet zur nächsten ganzen Zahl, `.5` immer nach oben (auch im Negativen).
fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}

/// Rastet einen Geräte-Punkt auf das feine Raster ein.
///
/// Das Raster hat die Pixel-Weite `scale · fine_step` und ist am Ursprung
/// ausgerichtet, um `bias` Pixel verschoben. Ergebnis in Geräte-Pixeln.
pub fn snap_to_grid(device: Vec2, params: &ProjectParams, fine_step: f32, bias: f32) -> Vec2 {
    let step_px = params.scale * fine_step;
    if !step_px.is_finite() || step_px <= 0.0 {
        return device;
    }
    let origin = params.origin();
    let snap_axis = |v: f32, o: f32| round_half_up((v - bias - o) / step_px) * step_px + o + bias;
    Vec2::new(snap_axis(device.x, origin.x), snap_axis(device.y, origin.y))
}

/// Einrasten und direkt in logische Koordinaten umrechnen.
pub fn snap_to_logical(device: Vec2, params: &ProjectParams, fine_step: f32, bias: f32) -> Vec2 {
    params.to_logical(snap_to_grid(device, params, fine_step, bias))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(origin: Vec2) -> ProjectParams {
        let mut p = ProjectParams::new(100.0);
        p.set_origin(origin);
        p
    }

    #[test]
    fn test_snap_keeps_grid_points_with_bias() {
        let p = params(Vec2::ZERO);
        let snapped = snap_to_grid(Vec2::new(25.0, 35.0), &p, 0.1, 5.0);
        assert_relative_eq!(snapped.x, 25.0);
        assert_relative_eq!(snapped.y, 35.0);
    }

    #[test]
    fn test_snap_rounds_half_up() {
        let p = params(Vec2::ZERO);
        // (100 - 5) / 10 = 9.5 → 10
        let snapped = snap_to_grid(Vec2::new(100.0, 100.0), &p, 0.1, 5.0);
        assert_relative_eq!(snapped.x, 105.0);
        // (-90 - 5) / 10 = -9.5 → -9
        let snapped = snap_to_grid(Vec2::new(-90.0, 0.0), &p, 0.1, 5.0);
        assert_relative_eq!(snapped.x, -85.0);
    }

    #[test]
    fn test_snap_to_logical_near_unit_point() {
        let p = params(Vec2::ZERO);
        let logical = snap_to_logical(Vec2::new(100.0, 100.0), &p, 0.1, 5.0);
        assert_relative_eq!(logical.x, 1.0, epsilon = 0.1);
        assert_relative_eq!(logical.y, -1.0, epsilon = 0.1);
    }

    #[test]
    fn test_snap_follows_origin() {
        let p = params(Vec2::new(403.0, 297.0));
        let snapped = snap_to_grid(Vec2::new(409.0, 301.0), &p, 0.1, 5.0);
        assert_relative_eq!(snapped.x, 408.0);
        assert_relative_eq!(snapped.y, 302.0);
    }
}
