//! Zentrale Konfiguration für Plane Sketch.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Feines Rasterintervall in logischen Einheiten (Snap-Raster).
pub const FINE_GRID_STEP: f32 = 0.1;
/// Grobes Rasterintervall in logischen Einheiten (Achsen liegen darauf).
pub const COARSE_GRID_STEP: f32 = 1.0;
/// Pixel-Versatz beim Einrasten. Empirischer Wert, exakt beibehalten.
pub const SNAP_BIAS_PX: f32 = 5.0;

// ── Projektion ──────────────────────────────────────────────────────

/// Start-Skalierung: Geräte-Pixel pro logischer Einheit.
pub const INITIAL_SCALE: f32 = 100.0;
/// Perspektivfaktor der 3-D-Projektion (0 = rein planar).
pub const PERSPECTIVE_FACTOR: f32 = 0.0;

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Minimale Höhe der Zeichenfläche in Punkten.
pub const MIN_SURFACE_HEIGHT: f32 = 320.0;
/// Höhe, falls der Host keine Höhe meldet.
pub const FALLBACK_SURFACE_HEIGHT: f32 = 480.0;

// ── Vorschau ────────────────────────────────────────────────────────

/// Globale Deckkraft der Vorschau-Figur.
pub const PREVIEW_ALPHA: f32 = 0.4;

/// Laufzeit-Optionen (als TOML neben der Binary gespeichert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Feines Rasterintervall (logische Einheiten)
    pub fine_grid_step: f32,
    /// Grobes Rasterintervall (logische Einheiten)
    pub coarse_grid_step: f32,
    /// Pixel-Versatz beim Einrasten
    #[serde(default = "default_snap_bias_px")]
    pub snap_bias_px: f32,

    // ── Projektion ──────────────────────────────────────────────
    /// Start-Skalierung (Geräte-Pixel pro Einheit)
    pub initial_scale: f32,
    /// Perspektivfaktor der 3-D-Projektion
    #[serde(default)]
    pub perspective_factor: f32,

    // ── Zeichenfläche ───────────────────────────────────────────
    /// Minimale Höhe der Zeichenfläche
    pub min_surface_height: f32,
    /// Ersatzhöhe ohne Host-Angabe
    pub fallback_surface_height: f32,

    // ── Vorschau ────────────────────────────────────────────────
    /// Globale Deckkraft der Vorschau-Figur
    pub preview_alpha: f32,

    // ── Demo ────────────────────────────────────────────────────
    /// Punktraster des Geometrie-Kerns über die 3-D-Projektion einblenden
    #[serde(default)]
    pub show_demo_lattice: bool,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            fine_grid_step: FINE_GRID_STEP,
            coarse_grid_step: COARSE_GRID_STEP,
            snap_bias_px: SNAP_BIAS_PX,
            initial_scale: INITIAL_SCALE,
            perspective_factor: PERSPECTIVE_FACTOR,
            min_surface_height: MIN_SURFACE_HEIGHT,
            fallback_surface_height: FALLBACK_SURFACE_HEIGHT,
            preview_alpha: PREVIEW_ALPHA,
            show_demo_lattice: false,
        }
    }
}

/// Serde-Default für `snap_bias_px` (ältere TOML-Dateien ohne den Eintrag).
fn default_snap_bias_px() -> f32 {
    SNAP_BIAS_PX
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("plane-sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("plane_sketch.toml")
    }

    /// Feines Rasterintervall in Geräte-Pixeln bei gegebener Skalierung.
    pub fn fine_step_px(&self, scale: f32) -> f32 {
        scale * self.fine_grid_step
    }

    /// Grobes Rasterintervall in Geräte-Pixeln bei gegebener Skalierung.
    pub fn coarse_step_px(&self, scale: f32) -> f32 {
        scale * self.coarse_grid_step
    }
}
