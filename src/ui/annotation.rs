//! Malen der Annotations-Szene über dem Kartenbild.

use egui::{Color32, Painter, Pos2, Rect, Stroke};
use glam::Vec2;

use crate::core::{NormalizedPoint, PointKind};
use crate::shared::{AnnotationScene, StudioOptions};

/// Konvertiert eine RGBA-Option in eine egui-Farbe.
pub fn color32(rgba: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Bildet einen normalisierten Punkt auf die gerenderte Fläche ab.
fn to_screen(rect: Rect, point: NormalizedPoint) -> Pos2 {
    let px = point.to_pixels(rect.width(), rect.height());
    Pos2::new(rect.left() + px.x, rect.top() + px.y)
}

/// Malt die komplette Szene: Connector zuerst, dann Marker, dann Hover.
pub fn paint_annotation(
    painter: &Painter,
    rect: Rect,
    scene: &AnnotationScene,
    options: &StudioOptions,
) {
    if let Some(connector) = &scene.connector {
        paint_connector(
            painter,
            to_screen(rect, connector.from),
            to_screen(rect, connector.to),
            options,
        );
    }

    if let Some(origin) = scene.origin {
        paint_marker(
            painter,
            to_screen(rect, origin),
            color32(options.origin_color),
            options.marker_radius_px,
        );
    }
    if let Some(target) = scene.target {
        paint_marker(
            painter,
            to_screen(rect, target),
            color32(options.target_color),
            options.marker_radius_px,
        );
    }

    if let Some(hover) = &scene.hover {
        let color = match hover.kind {
            PointKind::Origin => color32(options.origin_color),
            PointKind::Target => color32(options.target_color),
        };
        let pos = to_screen(rect, hover.point);
        painter.circle_filled(pos, options.hover_radius_px, color.gamma_multiply(0.35));
        painter.circle_stroke(pos, options.hover_radius_px, Stroke::new(1.5, color));
    }
}

/// Gefüllter Marker mit weißem Rand.
fn paint_marker(painter: &Painter, pos: Pos2, color: Color32, radius: f32) {
    painter.circle_filled(pos, radius, color);
    painter.circle_stroke(pos, radius, Stroke::new(3.0, Color32::WHITE));
}

/// Gestrichelte Linie mit Pfeilspitze am Ziel.
fn paint_connector(painter: &Painter, from: Pos2, to: Pos2, options: &StudioOptions) {
    let color = color32(options.connector_color);
    let stroke = Stroke::new(2.0, color);

    painter.add(egui::Shape::dashed_line(
        &[from, to],
        stroke,
        options.connector_dash_px,
        options.connector_gap_px,
    ));

    paint_arrowhead(painter, from, to, color, options.marker_radius_px);
}

/// Pfeilspitze, knapp vor dem Ziel-Marker abgesetzt.
fn paint_arrowhead(painter: &Painter, from: Pos2, to: Pos2, color: Color32, marker_radius: f32) {
    let dir = Vec2::new(to.x - from.x, to.y - from.y);
    if dir.length_squared() < 1.0 {
        return;
    }
    let dir = dir.normalize();
    let ortho = Vec2::new(-dir.y, dir.x);

    // Spitze endet am Marker-Rand statt in dessen Mitte
    let tip = Vec2::new(to.x, to.y) - dir * marker_radius;
    let base = tip - dir * 12.0;
    let left = base + ortho * 5.0;
    let right = base - ortho * 5.0;

    painter.add(egui::Shape::convex_polygon(
        vec![
            Pos2::new(tip.x, tip.y),
            Pos2::new(left.x, left.y),
            Pos2::new(right.x, right.y),
        ],
        color,
        Stroke::NONE,
    ));
}

/// Legende: farbige Punkte mit Beschriftung.
pub fn paint_legend(ui: &mut egui::Ui, options: &StudioOptions) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("●").color(color32(options.origin_color)));
        ui.label("Startpunkt");
        ui.add_space(12.0);
        ui.label(egui::RichText::new("●").color(color32(options.target_color)));
        ui.label("Skill-Ziel");
    });
}

/// Orientierungs-Raster in gleichmäßigen Abständen.
pub fn paint_grid(painter: &Painter, rect: Rect, divisions: u32) {
    if divisions == 0 {
        return;
    }
    let stroke = Stroke::new(1.0, Color32::from_white_alpha(12));

    for i in 1..divisions {
        let t = i as f32 / divisions as f32;
        let x = rect.left() + rect.width() * t;
        let y = rect.top() + rect.height() * t;
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
    }
}
