//! Application-Layer: Controller, State, Events, Handler und Lebenszyklus.

pub mod command_log;
pub mod construction;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod hover;
mod intent_mapping;
pub mod lifecycle;
pub mod snapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Engine (Figuren, Werkzeug, Projektion).
pub mod state;

pub use command_log::CommandLog;
pub use construction::ConstructionState;
pub use controller::SketchController;
pub use events::{Listener, SketchCommand, SketchIntent, SketchKey};
pub use hover::{HoverTracker, HoverTransitions};
pub use lifecycle::{FrameLoop, InputBindings, SketchEngine};
pub use state::{SketchState, SurfaceMetrics, ViewState};
