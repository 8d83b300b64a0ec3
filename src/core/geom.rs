//! Geometrie-Backend: Grundprimitive über `Vec3` und ein einmaliger, geteilter Ladevorgang.
//!
//! Der Kern wird asynchron geladen. Parallele Ladeaufrufe teilen sich denselben
//! laufenden Vorgang und erhalten dieselbe Instanz.

use glam::Vec3;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Fehler der Geometrie-Primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// Eine Kontur braucht mindestens zwei Punkte
    #[error("Kontur braucht mindestens {min} Punkte, erhalten: {got}")]
    TooFewPoints { min: usize, got: usize },
}

/// Geladener Geometrie-Kern.
#[derive(Debug)]
pub struct GeomCore {
    _private: (),
}

impl GeomCore {
    /// Mindestanzahl Punkte für `make_contour`.
    pub const CONTOUR_MIN_POINTS: usize = 2;

    fn new() -> Self {
        Self { _private: () }
    }

    /// Einzelner Punkt.
    pub fn make_point(&self, x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    /// Offener Linienzug aus den gegebenen Punkten.
    pub fn make_polyline(&self, points: &[Vec3]) -> Vec<Vec3> {
        points.to_vec()
    }

    /// Geschlossene Kontur: der erste Punkt wird am Ende wiederholt,
    /// sofern die Folge nicht bereits geschlossen ist.
    pub fn make_contour(&self, points: &[Vec3]) -> Result<Vec<Vec3>, GeomError> {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return Err(GeomError::TooFewPoints {
                min: Self::CONTOUR_MIN_POINTS,
                got: 0,
            });
        };
        if points.len() < Self::CONTOUR_MIN_POINTS {
            return Err(GeomError::TooFewPoints {
                min: Self::CONTOUR_MIN_POINTS,
                got: points.len(),
            });
        }

        let mut out = points.to_vec();
        if first != last {
            out.push(first);
        }
        Ok(out)
    }

    /// Punktraster mit `rows × cols` Punkten, zeilenweise.
    ///
    /// Spalte `c`, Zeile `r` liegt bei `(c·dx, r·dy, r·dz)`.
    pub fn make_point_matrix(&self, rows: u32, cols: u32, step: Vec3) -> Vec<Vec3> {
        let mut out = Vec::with_capacity((rows * cols) as usize);
        for r in 0..rows {
            for c in 0..cols {
                out.push(Vec3::new(
                    c as f32 * step.x,
                    r as f32 * step.y,
                    r as f32 * step.z,
                ));
            }
        }
        out
    }

    /// Achsenparalleles Quadrat um den Ursprung (z = 0), gegen den Uhrzeigersinn.
    pub fn make_square(&self, side: f32) -> [Vec3; 4] {
        let s = side / 2.0;
        [
            Vec3::new(-s, -s, 0.0),
            Vec3::new(s, -s, 0.0),
            Vec3::new(s, s, 0.0),
            Vec3::new(-s, s, 0.0),
        ]
    }
}

/// Lädt den Geometrie-Kern genau einmal. Klone teilen denselben Zustand.
#[derive(Debug, Clone, Default)]
pub struct GeomLoader {
    inner: Arc<LoaderInner>,
}

#[derive(Debug, Default)]
struct LoaderInner {
    core: OnceCell<Arc<GeomCore>>,
    loads: AtomicUsize,
}

impl GeomLoader {
    /// Erstellt einen neuen, noch nicht geladenen Loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt den Kern oder wartet auf den bereits laufenden Ladevorgang.
    pub async fn load(&self) -> anyhow::Result<Arc<GeomCore>> {
        let inner = &self.inner;
        let core = inner
            .core
            .get_or_try_init(|| async {
                inner.loads.fetch_add(1, Ordering::SeqCst);
                // Await-Punkt: parallele Aufrufer treffen auf den laufenden Load
                tokio::task::yield_now().await;
                let core = GeomCore::new();
                self_check(&core)?;
                log::info!("Geometrie-Kern geladen");
                Ok::<_, anyhow::Error>(Arc::new(core))
            })
            .await?;
        Ok(Arc::clone(core))
    }

    /// Bereits geladener Kern, ohne zu warten.
    pub fn get(&self) -> Option<Arc<GeomCore>> {
        self.inner.core.get().cloned()
    }

    /// Wie oft tatsächlich geladen wurde (0 oder 1 nach Erfolg).
    pub fn load_count(&self) -> usize {
        self.inner.loads.load(Ordering::SeqCst)
    }
}

fn self_check(core: &GeomCore) -> anyhow::Result<()> {
    let square = core.make_square(1.0);
    let contour = core.make_contour(&square)?;
    anyhow::ensure!(
        contour.len() == square.len() + 1,
        "Geometrie-Kern liefert unerwartete Kontur ({} Punkte)",
        contour.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_contour_closes_open_sequence() {
        let core = GeomCore::new();
        let pts = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let out = core.make_contour(&pts).expect("drei Punkte reichen");
        assert_eq!(out.len(), 4);
        assert_eq!(out[3], Vec3::ZERO);
    }

    #[test]
    fn test_make_contour_keeps_closed_sequence() {
        let core = GeomCore::new();
        let pts = [Vec3::ZERO, Vec3::X, Vec3::ZERO];
        let out = core.make_contour(&pts).expect("bereits geschlossen");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_make_contour_rejects_single_point() {
        let core = GeomCore::new();
        assert_eq!(
            core.make_contour(&[Vec3::ONE]),
            Err(GeomError::TooFewPoints { min: 2, got: 1 })
        );
        assert_eq!(
            core.make_contour(&[]),
            Err(GeomError::TooFewPoints { min: 2, got: 0 })
        );
    }

    #[test]
    fn test_point_matrix_layout() {
        let core = GeomCore::new();
        let m = core.make_point_matrix(2, 3, Vec3::new(1.0, 2.0, 0.5));
        assert_eq!(m.len(), 6);
        assert_eq!(m[2], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(m[4], Vec3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_square_is_centered() {
        let core = GeomCore::new();
        let sq = core.make_square(2.0);
        let sum: Vec3 = sq.iter().copied().sum();
        assert_eq!(sum, Vec3::ZERO);
        assert_eq!(sq[2], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_loader_loads_once_and_shares_instance() {
        let loader = GeomLoader::new();
        let other = loader.clone();
        assert!(loader.get().is_none());

        let a = pollster::block_on(loader.load()).expect("Laden erfolgreich");
        let b = pollster::block_on(other.load()).expect("Laden erfolgreich");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loader.load_count(), 1);
        assert!(other.get().is_some());
    }
}
