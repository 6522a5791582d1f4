//! Fixed Point Studio.
//!
//! Desktop-Editor zum Erstellen von Valorant-Lineups ("Fixed Points"):
//! Karten-Annotation mit Start- und Zielpunkt plus mehrstufige
//! Schritt-Komposition mit Bild-Uploads.

use std::sync::Arc;

use eframe::egui;
use fixed_point_studio::{ui, AppController, AppIntent, AppState, LocalBackend, StudioOptions};

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

        log::info!("Fixed Point Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1180.0, 780.0])
                .with_title("Fixed Point Studio"),
            ..Default::default()
        };

        eframe::run_native(
            "Fixed Point Studio",
            options,
            Box::new(|_cc| Ok(Box::new(StudioApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct StudioApp {
    state: AppState,
    controller: AppController,
    textures: ui::TextureCache,
}

impl StudioApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = StudioOptions::config_path();
        let studio_options = StudioOptions::load_from_file(&config_path);

        let backend = Arc::new(LocalBackend::new(studio_options.data_dir.clone()));

        let mut state = AppState::new();
        state.options = studio_options;

        let mut controller = AppController::new(backend);

        // Kataloge direkt beim Start laden
        if let Err(e) = controller.handle_intent(&mut state, AppIntent::ReloadCatalogsRequested) {
            log::error!("Kataloge konnten nicht geladen werden: {:#}", e);
        }

        Self {
            state,
            controller,
            textures: ui::TextureCache::new(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.textures.sync_map(ctx, &mut self.state);

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        // Neu geladenes Kartenbild noch im selben Frame hochladen
        self.textures.sync_map(ctx, &mut self.state);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl StudioApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_form_panel(ctx, &mut self.state));
        events.extend(ui::render_step_slots(ctx, &mut self.state, &mut self.textures));
        events.extend(ui::handle_image_dialog(&mut self.state));

        let scene = self.controller.build_annotation_scene(&self.state);
        events.extend(ui::show_capture_modal(
            ctx,
            &self.state,
            &scene,
            &self.textures,
        ));
        events.extend(ui::show_detail_view(ctx, &self.state, &self.textures));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_map_modal
            || self.state.ui.show_detail
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
