//! Pinta la cola de toasts en la esquina superior derecha.

use egui::{Align2, Color32, Context, Id, RichText, Vec2};

use crate::toast::{TOAST_SECONDS, Toast, ToastKind, Toasts};

/// Duración del fundido de entrada y salida.
const FADE_SECONDS: f64 = 0.3;

fn fade_alpha(age: f64) -> f32 {
    let alpha = if age < FADE_SECONDS {
        age / FADE_SECONDS
    } else if age > TOAST_SECONDS - FADE_SECONDS {
        (TOAST_SECONDS - age) / FADE_SECONDS
    } else {
        1.0
    };
    alpha.clamp(0.0, 1.0) as f32
}

fn accent(kind: ToastKind) -> (Color32, &'static str) {
    match kind {
        ToastKind::Success => (Color32::from_rgb(34, 197, 94), "✅"),
        ToastKind::Error => (Color32::from_rgb(239, 68, 68), "⚠"),
        ToastKind::Info => (Color32::from_rgb(59, 130, 246), "ℹ"),
    }
}

fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (alpha * 255.0) as u8)
}

pub fn show_toasts(toasts: &mut Toasts, ctx: &Context, now: f64) {
    if toasts.is_empty() {
        return;
    }
    let visible: Vec<Toast> = toasts.visible(now).cloned().collect();

    egui::Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 60.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in &visible {
                let alpha = fade_alpha(toast.age(now));
                let (color, icon) = accent(toast.kind);
                egui::Frame::NONE
                    .fill(Color32::from_rgba_unmultiplied(30, 30, 40, (alpha * 240.0) as u8))
                    .stroke(egui::Stroke::new(1.0, with_alpha(color, alpha)))
                    .corner_radius(8.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_width(260.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).size(18.0).color(with_alpha(color, alpha)));
                            ui.label(
                                RichText::new(&toast.text)
                                    .color(with_alpha(Color32::WHITE, alpha)),
                            );
                        });
                    });
                ui.add_space(6.0);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_in_and_out() {
        assert_eq!(fade_alpha(0.0), 0.0);
        assert_eq!(fade_alpha(1.0), 1.0);
        assert!(fade_alpha(TOAST_SECONDS - 0.1) < 1.0);
        assert_eq!(fade_alpha(TOAST_SECONDS + 1.0), 0.0);
    }
}
