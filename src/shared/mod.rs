//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `render` und `ui` gemeinsam lesen.

pub mod options;

pub use options::SketchOptions;
pub use options::{FINE_GRID_STEP, PREVIEW_ALPHA, SNAP_BIAS_PX};
