//! Lebenszyklus der Zeichen-Engine: Init, Listener-Bindung, Frame-Loop, Destroy.
//!
//! Eine `SketchEngine` gehört genau zu einer Zeichenfläche. `init` lädt den
//! Geometrie-Kern (geteilt über den `GeomLoader`), vermisst die Fläche, bindet
//! die Listener und startet den Frame-Loop. Erst danach werden Intents
//! von der Zeichenfläche verarbeitet.

use super::state::SurfaceMetrics;
use super::{Listener, SketchCommand, SketchController, SketchIntent, SketchState};
use crate::core::{GeomCore, GeomLoader, Surface};
use crate::shared::SketchOptions;
use anyhow::Context;
use glam::Vec3;
use indexmap::IndexSet;
use std::sync::Arc;

/// Selbst neu planender Frame-Loop. `stop` verhindert jede weitere Planung.
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    /// Startet den Loop. Gibt `false` zurück, wenn er bereits lief.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stoppt den Loop. Idempotent; gibt `true` nur beim ersten Aufruf zurück.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Läuft der Loop?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Anzahl gezeichneter Frames seit Erstellung.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Beginnt einen Frame. `false` = Loop gestoppt, nichts zeichnen.
    pub fn begin_frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Plant den nächsten Frame über den Host-Callback, solange der Loop läuft.
    pub fn schedule(&self, request_repaint: impl FnOnce()) {
        if self.running {
            request_repaint();
        }
    }
}

/// Gebundene Eingabequellen. Jede Quelle wird genau einmal gebunden und gelöst.
#[derive(Debug, Default)]
pub struct InputBindings {
    attached: IndexSet<Listener>,
    attach_total: usize,
    detach_total: usize,
}

impl InputBindings {
    /// Bindet alle noch nicht gebundenen Quellen.
    pub fn attach_all(&mut self) {
        for listener in Listener::ALL {
            if self.attached.insert(listener) {
                self.attach_total += 1;
            }
        }
    }

    /// Löst alle gebundenen Quellen. Gibt die Anzahl gelöster Quellen zurück.
    pub fn detach_all(&mut self) -> usize {
        let count = self.attached.len();
        self.attached.clear();
        self.detach_total += count;
        count
    }

    /// Ist `listener` gebunden?
    pub fn is_attached(&self, listener: Listener) -> bool {
        self.attached.contains(&listener)
    }

    /// Anzahl aktuell gebundener Quellen.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Bindungen seit Erstellung.
    pub fn attach_total(&self) -> usize {
        self.attach_total
    }

    /// Lösungen seit Erstellung.
    pub fn detach_total(&self) -> usize {
        self.detach_total
    }
}

/// Kontextobjekt der Engine für genau eine Zeichenfläche.
pub struct SketchEngine {
    state: SketchState,
    controller: SketchController,
    loader: GeomLoader,
    geom: Option<Arc<GeomCore>>,
    bindings: InputBindings,
    frame_loop: FrameLoop,
    demo_lattice: Vec<Vec3>,
    initialized: bool,
}

impl SketchEngine {
    /// Rastermaße des Demo-Punktrasters.
    const LATTICE_SIZE: u32 = 5;

    /// Erstellt eine nicht initialisierte Engine.
    pub fn new(options: SketchOptions, loader: GeomLoader) -> Self {
        Self {
            state: SketchState::with_options(options),
            controller: SketchController::new(),
            loader,
            geom: None,
            bindings: InputBindings::default(),
            frame_loop: FrameLoop::default(),
            demo_lattice: Vec::new(),
            initialized: false,
        }
    }

    /// Initialisiert die Engine. Idempotent; ohne Zeichenfläche ein No-op.
    ///
    /// Nur dieser Pfad wartet auf den Geometrie-Kern. Resize und Listener-Bindung
    /// laufen erst nach dem Laden, Intents davor werden verworfen.
    pub async fn init(&mut self, surface: Option<SurfaceMetrics>) -> anyhow::Result<()> {
        if self.initialized {
            log::debug!("Engine bereits initialisiert");
            return Ok(());
        }
        let Some(metrics) = surface else {
            log::debug!("Init ohne Zeichenfläche ignoriert");
            return Ok(());
        };

        let core = self
            .loader
            .load()
            .await
            .context("Geometrie-Kern konnte nicht geladen werden")?;
        if self.state.options.show_demo_lattice {
            self.demo_lattice = core.make_point_matrix(
                Self::LATTICE_SIZE,
                Self::LATTICE_SIZE,
                Vec3::new(0.5, 0.5, 0.25),
            );
        }
        self.geom = Some(core);

        self.controller
            .handle_command(&mut self.state, SketchCommand::ResizeSurface { metrics })?;
        self.bindings.attach_all();
        self.frame_loop.start();
        self.initialized = true;
        log::info!(
            "Engine initialisiert ({} Listener gebunden)",
            self.bindings.attached_count()
        );
        Ok(())
    }

    /// Baut die Engine ab. Zweiter Aufruf ist ein No-op.
    ///
    /// Stoppt den Frame-Loop, löst jede Bindung genau einmal und verwirft
    /// Hover-Menge, Vorschau und laufende Konstruktion.
    pub fn destroy(&mut self) {
        if !self.initialized {
            return;
        }
        self.frame_loop.stop();
        let detached = self.bindings.detach_all();
        self.state.clear_transient();
        self.initialized = false;
        log::info!("Engine abgebaut ({} Listener gelöst)", detached);
    }

    /// Leitet einen Intent an den Controller weiter, sofern seine Quelle gebunden ist.
    pub fn dispatch(&mut self, intent: SketchIntent) -> anyhow::Result<()> {
        if let Some(listener) = intent.listener() {
            if !self.bindings.is_attached(listener) {
                log::trace!("Intent ohne gebundene Quelle verworfen: {:?}", intent);
                return Ok(());
            }
        }
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Zeichnet einen Frame, solange der Frame-Loop läuft.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.frame_loop.begin_frame() {
            return false;
        }
        crate::render::render_frame(&mut self.state, surface, &self.demo_lattice);
        true
    }

    /// Ist die Engine initialisiert?
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Read-only Sicht auf den Zustand.
    pub fn state(&self) -> &SketchState {
        &self.state
    }

    /// Geladener Geometrie-Kern.
    pub fn geom(&self) -> Option<&Arc<GeomCore>> {
        self.geom.as_ref()
    }

    /// Gebundene Eingabequellen.
    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    /// Frame-Loop.
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_loop_stop_is_idempotent() {
        let mut frame_loop = FrameLoop::default();
        assert!(frame_loop.start());
        assert!(!frame_loop.start());
        assert!(frame_loop.begin_frame());

        assert!(frame_loop.stop());
        assert!(!frame_loop.stop());
        assert!(!frame_loop.begin_frame());
        assert_eq!(frame_loop.frames(), 1);

        let mut scheduled = false;
        frame_loop.schedule(|| scheduled = true);
        assert!(!scheduled);
    }

    #[test]
    fn test_bindings_attach_and_detach_exactly_once() {
        let mut bindings = InputBindings::default();
        bindings.attach_all();
        bindings.attach_all();
        assert_eq!(bindings.attach_total(), Listener::ALL.len());

        assert_eq!(bindings.detach_all(), Listener::ALL.len());
        assert_eq!(bindings.detach_all(), 0);
        assert_eq!(bindings.detach_total(), Listener::ALL.len());
        assert!(!bindings.is_attached(Listener::Keyboard));
    }
}
