//! UI-Layer mit egui
//!
//! Dieses Modul implementiert alle UI-Komponenten: Menü, Formular-Panel,
//! Schritt-Slots, Capture-Modal, Detail-Ansicht, Status-Bar und Dialoge.
//! Jede Komponente sammelt `AppIntent`s; mutiert wird nur im Controller.

pub mod annotation;
pub mod detail;
pub mod form_panel;
pub mod map_capture;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod step_slots;
pub mod textures;

pub use detail::show_detail_view;
pub use form_panel::render_form_panel;
pub use map_capture::show_capture_modal;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use step_slots::{handle_image_dialog, render_step_slots};
pub use textures::TextureCache;
