//! Integrationstests für Validierung, Upload-Reihenfolge und Anlage.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use fixed_point_studio::{
    Agent, AppCommand, AppController, AppIntent, AppState, CreateFixedPointRequest, FixedPoint,
    FixedPointBackend, FixedPointStep, GameMap, NormalizedPoint, PointKind,
};

/// Backend-Attrappe mit Aufzeichnung aller Aufrufe.
struct MockBackend {
    uploads: Mutex<Vec<String>>,
    creates: Mutex<Vec<CreateFixedPointRequest>>,
    /// Upload dieses Dateinamens schlägt fehl
    fail_upload_for: Option<String>,
    /// Anlage schlägt mit dieser Meldung fehl
    fail_create_with: Option<String>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            creates: Mutex::new(Vec::new()),
            fail_upload_for: None,
            fail_create_with: None,
        }
    }

    fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    fn create_count(&self) -> usize {
        self.creates.lock().unwrap().len()
    }

    fn last_request(&self) -> CreateFixedPointRequest {
        self.creates
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("Anlage wurde aufgerufen")
    }
}

impl FixedPointBackend for MockBackend {
    fn fetch_agents(&self) -> anyhow::Result<Vec<Agent>> {
        Ok(vec![Agent {
            uuid: "agent-sova".to_string(),
            display_name: "Sova".to_string(),
            description: String::new(),
            display_icon: String::new(),
            role: None,
        }])
    }

    fn fetch_maps(&self) -> anyhow::Result<Vec<GameMap>> {
        Ok(vec![GameMap {
            uuid: "map-bind".to_string(),
            display_name: "Bind".to_string(),
            coordinates: String::new(),
            display_icon: String::new(),
            splash: String::new(),
        }])
    }

    fn upload_image(&self, file_name: &str, _bytes: &[u8]) -> anyhow::Result<String> {
        if self.fail_upload_for.as_deref() == Some(file_name) {
            anyhow::bail!("Upload abgelehnt: {}", file_name);
        }
        self.uploads.lock().unwrap().push(file_name.to_string());
        Ok(format!("/uploads/{}", file_name))
    }

    fn create_fixed_point(&self, request: &CreateFixedPointRequest) -> anyhow::Result<FixedPoint> {
        if let Some(message) = &self.fail_create_with {
            anyhow::bail!("{}", message);
        }
        self.creates.lock().unwrap().push(request.clone());

        let steps = request
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| FixedPointStep {
                id: i as u64 + 1,
                fixed_point_id: 42,
                step_order: s.step_order,
                image_url: s.image_url.clone(),
                description: s.description.clone(),
                position_x: s.position_x,
                position_y: s.position_y,
                skill_position_x: s.skill_position_x,
                skill_position_y: s.skill_position_y,
                created_at: String::new(),
            })
            .collect();

        Ok(FixedPoint {
            id: 42,
            title: request.title.clone(),
            character_id: request.character_id.clone(),
            map_id: request.map_id.clone(),
            created_at: String::new(),
            steps,
        })
    }
}

fn setup(backend: MockBackend) -> (Arc<MockBackend>, AppController, AppState) {
    let backend = Arc::new(backend);
    let mut controller = AppController::new(backend.clone());
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ReloadCatalogsRequested)
        .expect("Kataloge laden fehlgeschlagen");
    (backend, controller, state)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent-Verarbeitung fehlgeschlagen");
}

/// Wählt Agent und Karte über reguläre Intents.
fn select_agent_and_map(controller: &mut AppController, state: &mut AppState) {
    send(
        controller,
        state,
        AppIntent::AgentSelected {
            agent_id: "agent-sova".to_string(),
        },
    );
    send(
        controller,
        state,
        AppIntent::MapSelected {
            map_id: "map-bind".to_string(),
        },
    );
}

/// Erzeugt gültige PNG-Bytes für das Staging.
fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 30, 30, 255]));
    let mut buffer = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .expect("PNG-Encoding fehlgeschlagen");
    buffer.into_inner()
}

fn stage_image(controller: &mut AppController, state: &mut AppState, slot: u32, name: &str) {
    send(
        controller,
        state,
        AppIntent::StepImageBytesDropped {
            slot,
            file_name: name.to_string(),
            bytes: png_bytes().into(),
        },
    );
    assert!(
        state.form.step(slot).unwrap().staged_image.is_some(),
        "Bild für Slot {} wurde nicht vorgemerkt",
        slot
    );
}

#[test]
fn test_missing_selection_blocks_without_backend_calls() {
    let (backend, mut controller, mut state) = setup(MockBackend::new());

    state.form.title = "Ohne Auswahl".to_string();
    state.form.step_mut(1).unwrap().description = "Text".to_string();

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    let status = state.ui.status_message.as_ref().expect("Statusmeldung");
    assert!(status.is_error);
    assert_eq!(status.text, "Agent und Map müssen ausgewählt sein");
    assert_eq!(backend.upload_count(), 0);
    assert_eq!(backend.create_count(), 0);
    // Formular bleibt für Korrekturen erhalten
    assert_eq!(state.form.title, "Ohne Auswahl");
    assert!(!state.form.submission_in_flight);
}

#[test]
fn test_all_empty_slots_block_without_backend_calls() {
    let (backend, mut controller, mut state) = setup(MockBackend::new());

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Nur Titel".to_string();
    // Whitespace zählt nicht als Inhalt
    state.form.step_mut(3).unwrap().description = "   ".to_string();

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    let status = state.ui.status_message.as_ref().expect("Statusmeldung");
    assert!(status.is_error);
    assert_eq!(status.text, "Schritt 1 braucht Text oder ein Bild");
    assert_eq!(backend.upload_count(), 0);
    assert_eq!(backend.create_count(), 0);
}

#[test]
fn test_successful_submission_payload_and_reset() {
    let (backend, mut controller, mut state) = setup(MockBackend::new());

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "  Sova Pfeil A-Site  ".to_string();
    state.form.step_mut(1).unwrap().description = "Peek A site".to_string();
    stage_image(&mut controller, &mut state, 2, "zweiter_schritt.png");
    // Slot 3 bleibt leer und darf nicht im Payload landen

    state
        .form
        .annotation
        .set(PointKind::Origin, NormalizedPoint::new(0.32, 0.41));
    state
        .form
        .annotation
        .set(PointKind::Target, NormalizedPoint::new(0.7, 0.2));

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    // Genau ein Upload (nur Slot 2 trug ein Bild), genau eine Anlage
    assert_eq!(backend.upload_count(), 1);
    assert_eq!(backend.create_count(), 1);

    let request = backend.last_request();
    assert_eq!(request.title, "Sova Pfeil A-Site", "Titel wird getrimmt");
    assert_eq!(request.character_id, "agent-sova");
    assert_eq!(request.map_id, "map-bind");
    assert_eq!(request.steps.len(), 2);

    // Schritt 1: Text + Punkte, kein Bild
    let first = &request.steps[0];
    assert_eq!(first.step_order, 1);
    assert_eq!(first.description, "Peek A site");
    assert!(first.image_url.is_none());
    assert_eq!(first.position_x, Some(0.32));
    assert_eq!(first.position_y, Some(0.41));
    assert_eq!(first.skill_position_x, Some(0.7));
    assert_eq!(first.skill_position_y, Some(0.2));

    // Schritt 2: Bild, keine Punkte
    let second = &request.steps[1];
    assert_eq!(second.step_order, 2);
    assert_eq!(second.image_url.as_deref(), Some("/uploads/zweiter_schritt.png"));
    assert!(second.position_x.is_none());
    assert!(second.skill_position_x.is_none());

    // Erfolg: Formular zurückgesetzt, Statusmeldung und Datensatz gesetzt
    assert!(state.form.title.is_empty());
    assert!(state.form.annotation.origin.is_none());
    assert!(state.form.steps.iter().all(|s| s.is_empty()));
    let status = state.ui.status_message.as_ref().expect("Statusmeldung");
    assert!(!status.is_error);
    assert_eq!(state.ui.last_created.as_ref().map(|r| r.id), Some(42));
}

#[test]
fn test_empty_first_slot_blocks_submission() {
    let (backend, mut controller, mut state) = setup(MockBackend::new());

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Nur Slot 2".to_string();
    // Slot 1 bleibt leer, Inhalt nur in Slot 2 — die gesetzten Punkte
    // hätten sonst keinen Schritt, an dem sie gespeichert werden
    state.form.step_mut(2).unwrap().description = "Smoke werfen".to_string();
    state
        .form
        .annotation
        .set(PointKind::Origin, NormalizedPoint::new(0.32, 0.41));
    state
        .form
        .annotation
        .set(PointKind::Target, NormalizedPoint::new(0.55, 0.6));

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    let status = state.ui.status_message.as_ref().expect("Statusmeldung");
    assert!(status.is_error);
    assert_eq!(status.text, "Schritt 1 braucht Text oder ein Bild");
    assert_eq!(backend.upload_count(), 0);
    assert_eq!(backend.create_count(), 0);

    // Formular samt Punkten bleibt für Korrekturen erhalten
    assert!(state.form.annotation.origin.is_some());
    assert!(state.form.annotation.target.is_some());
    assert!(!state.form.submission_in_flight);
}

#[test]
fn test_points_attach_to_first_step_only() {
    let (backend, mut controller, mut state) = setup(MockBackend::new());

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Zwei Schritte".to_string();
    state.form.step_mut(1).unwrap().description = "Anlauf".to_string();
    state.form.step_mut(3).unwrap().description = "Pfeil schießen".to_string();
    state
        .form
        .annotation
        .set(PointKind::Origin, NormalizedPoint::new(0.5, 0.5));

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    let request = backend.last_request();
    assert_eq!(request.steps.len(), 2);
    assert_eq!(request.steps[0].step_order, 1);
    assert_eq!(request.steps[0].position_x, Some(0.5));
    // Spätere Schritte tragen nie Positionsfelder
    assert_eq!(request.steps[1].step_order, 3);
    assert!(request.steps[1].position_x.is_none());
    assert!(request.steps[1].skill_position_x.is_none());
}

#[test]
fn test_dropped_image_bytes_are_shared_not_copied() {
    let (_backend, mut controller, mut state) = setup(MockBackend::new());

    let bytes: Arc<[u8]> = png_bytes().into();
    send(
        &mut controller,
        &mut state,
        AppIntent::StepImageBytesDropped {
            slot: 1,
            file_name: "drop.png".to_string(),
            bytes: bytes.clone(),
        },
    );

    let staged = state
        .form
        .step(1)
        .unwrap()
        .staged_image
        .as_ref()
        .expect("Bild wurde vorgemerkt");
    assert!(
        Arc::ptr_eq(&staged.bytes, &bytes),
        "Staging teilt den Puffer statt ihn zu kopieren"
    );

    // Auch der Command-Log-Eintrag hält nur eine weitere Referenz
    match state.command_log.entries().last() {
        Some(AppCommand::StageImageBytes { bytes: logged, .. }) => {
            assert!(Arc::ptr_eq(logged, &bytes));
        }
        other => panic!("Unerwarteter letzter Command: {:?}", other),
    }
}

#[test]
fn test_upload_failure_aborts_before_create_without_rollback() {
    let mut backend = MockBackend::new();
    backend.fail_upload_for = Some("schlaegt_fehl.png".to_string());
    let (backend, mut controller, mut state) = setup(backend);

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Upload-Fehler".to_string();
    stage_image(&mut controller, &mut state, 1, "geht_durch.png");
    stage_image(&mut controller, &mut state, 2, "schlaegt_fehl.png");
    stage_image(&mut controller, &mut state, 3, "nie_versucht.png");

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    // Slot 1 wurde hochgeladen und bleibt hochgeladen (kein Rollback),
    // Slot 3 wird nach dem Fehler gar nicht mehr versucht
    assert_eq!(backend.uploads.lock().unwrap().as_slice(), ["geht_durch.png"]);
    assert_eq!(backend.create_count(), 0, "Anlage darf nicht erreicht werden");

    let status = state.ui.status_message.as_ref().expect("Statusmeldung");
    assert!(status.is_error);
    assert_eq!(status.text, "Bild-Upload für Schritt 2 fehlgeschlagen");

    // Formular bleibt vollständig erhalten
    assert_eq!(state.form.title, "Upload-Fehler");
    assert!(state.form.step(3).unwrap().staged_image.is_some());
    assert!(!state.form.submission_in_flight);
}

#[test]
fn test_create_failure_shows_message_verbatim() {
    let mut backend = MockBackend::new();
    backend.fail_create_with = Some("Titel bereits vergeben".to_string());
    let (_backend, mut controller, mut state) = setup(backend);

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Doppelt".to_string();
    state.form.step_mut(1).unwrap().description = "Text".to_string();

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    let status = state.ui.status_message.as_ref().expect("Statusmeldung");
    assert!(status.is_error);
    assert_eq!(status.text, "Titel bereits vergeben");
    assert_eq!(state.form.title, "Doppelt", "Formular bleibt erhalten");
}

#[test]
fn test_submit_while_in_flight_is_ignored() {
    let (backend, mut controller, mut state) = setup(MockBackend::new());

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Laufend".to_string();
    state.form.step_mut(1).unwrap().description = "Text".to_string();
    state.form.submission_in_flight = true;

    send(&mut controller, &mut state, AppIntent::SubmitRequested);

    assert_eq!(backend.upload_count(), 0);
    assert_eq!(backend.create_count(), 0);
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_cancel_form_resets_everything() {
    let (_backend, mut controller, mut state) = setup(MockBackend::new());

    select_agent_and_map(&mut controller, &mut state);
    state.form.title = "Wird verworfen".to_string();
    stage_image(&mut controller, &mut state, 1, "bild.png");
    state
        .form
        .annotation
        .set(PointKind::Origin, NormalizedPoint::new(0.3, 0.3));

    send(&mut controller, &mut state, AppIntent::CancelFormRequested);

    assert!(state.form.title.is_empty());
    assert!(state.form.agent_id.is_none());
    assert!(state.form.map_id.is_none());
    assert!(state.form.annotation.origin.is_none());
    assert!(state.form.steps.iter().all(|s| s.is_empty()));
}
