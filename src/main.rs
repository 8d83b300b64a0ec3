//! Plane Sketch.
//!
//! Interaktiver Editor für Punkte, Marker, Polylinien und Konturen auf einem
//! projizierten Raster, gezeichnet mit egui.

use eframe::egui;
use plane_sketch::{
    ui, EguiSurface, GeomLoader, SketchEngine, SketchIntent, SketchOptions, SurfaceMetrics,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Plane Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Plane Sketch"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Plane Sketch",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    engine: SketchEngine,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let options = SketchOptions::load_from_file(&config_path);

        Self {
            engine: SketchEngine::new(options, GeomLoader::new()),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(ctx, self.engine.state());
        let toolbar_events = ui::render_toolbar(ctx, self.engine.state());
        self.process_events(toolbar_events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                if !self.engine.is_initialized() {
                    let metrics = SurfaceMetrics::new(
                        glam::Vec2::new(rect.width(), rect.height()),
                        ctx.pixels_per_point(),
                    );
                    if let Err(e) = pollster::block_on(self.engine.init(Some(metrics))) {
                        log::error!("Engine-Init fehlgeschlagen: {:#}", e);
                    }
                }

                let events = self.input.collect_surface_events(ui, &response);
                self.process_events(events);

                let mut surface = EguiSurface::new(ui.painter(), rect);
                self.engine.render_frame(&mut surface);
            });

        self.engine
            .frame_loop()
            .schedule(|| ctx.request_repaint());
    }
}

impl SketchApp {
    fn process_events(&mut self, events: Vec<SketchIntent>) {
        for event in events {
            if let Err(e) = self.engine.dispatch(event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl Drop for SketchApp {
    fn drop(&mut self) {
        self.engine.destroy();
    }
}
