//! Textur-Verwaltung: Kartenbild und Slot-Vorschauen.

use std::collections::HashMap;
use std::sync::Arc;

use egui::{ColorImage, TextureHandle, TextureOptions};
use image::RgbaImage;

use crate::app::AppState;
use crate::core::MapImage;

/// Hält hochgeladene egui-Texturen über Frames hinweg.
///
/// Das Kartenbild wird über das Dirty-Flag im ViewState synchronisiert;
/// Slot-Vorschauen über die `preview_version` des jeweiligen Drafts.
#[derive(Default)]
pub struct TextureCache {
    map_texture: Option<TextureHandle>,
    detail_texture: Option<TextureHandle>,
    previews: HashMap<u32, (u64, TextureHandle)>,
}

impl TextureCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt die Kartenbilder (Capture und Detail-Ansicht) neu hoch,
    /// falls sie sich geändert haben.
    pub fn sync_map(&mut self, ctx: &egui::Context, state: &mut AppState) {
        if state.view.map_image_dirty {
            state.view.map_image_dirty = false;
            self.map_texture = state
                .view
                .map_image
                .as_ref()
                .map(|image| upload_map_image(ctx, "map_image", image));
        }

        if state.view.detail_map_dirty {
            state.view.detail_map_dirty = false;
            self.detail_texture = state
                .view
                .detail_map_image
                .as_ref()
                .map(|image| upload_map_image(ctx, "detail_map_image", image));
        }
    }

    /// Textur des aktuellen Kartenbilds, falls vorhanden.
    pub fn map_texture(&self) -> Option<&TextureHandle> {
        self.map_texture.as_ref()
    }

    /// Textur der Detail-Karte, falls vorhanden.
    pub fn detail_texture(&self) -> Option<&TextureHandle> {
        self.detail_texture.as_ref()
    }

    /// Vorschau-Textur eines Slots; lädt bei Versionswechsel neu hoch.
    pub fn preview_texture(
        &mut self,
        ctx: &egui::Context,
        slot: u32,
        version: u64,
        preview: &RgbaImage,
    ) -> &TextureHandle {
        let entry = self
            .previews
            .entry(slot)
            .or_insert_with(|| (version, upload_rgba(ctx, &format!("step_preview_{}", slot), preview)));

        if entry.0 != version {
            *entry = (
                version,
                upload_rgba(ctx, &format!("step_preview_{}", slot), preview),
            );
        }

        &entry.1
    }

    /// Entfernt die Vorschau-Textur eines Slots.
    pub fn drop_preview(&mut self, slot: u32) {
        self.previews.remove(&slot);
    }
}

fn upload_map_image(ctx: &egui::Context, name: &str, image: &Arc<MapImage>) -> TextureHandle {
    upload_rgba(ctx, name, &image.image_data)
}

fn upload_rgba(ctx: &egui::Context, name: &str, rgba: &RgbaImage) -> TextureHandle {
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    ctx.load_texture(name, color_image, TextureOptions::LINEAR)
}
