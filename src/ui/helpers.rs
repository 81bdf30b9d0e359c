// src/ui/helpers.rs
use egui::{Button, Color32, Frame, ProgressBar, RichText, Stroke, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: impl Into<String>, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label.into()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Tarjeta con borde suave; `accent` tiñe el borde.
pub fn card<R>(ui: &mut Ui, accent: Option<Color32>, inner: impl FnOnce(&mut Ui) -> R) -> R {
    let stroke_color = accent.unwrap_or_else(|| ui.visuals().widgets.noninteractive.bg_stroke.color);
    Frame::group(ui.style())
        .stroke(Stroke::new(1.5, stroke_color))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, inner)
        .inner
}

/// Tarjeta de estadística: título, valor grande y pie.
pub fn stat_card(ui: &mut Ui, width: f32, icon: &str, title: &str, value: &str, footer: &str) {
    card(ui, None, |ui| {
        ui.set_width(width);
        ui.label(RichText::new(format!("{icon} {title}")).small().weak());
        ui.label(RichText::new(value).heading().strong());
        ui.label(RichText::new(footer).small());
    });
}

/// Barra de progreso con fracción 0..=1.
pub fn progress_bar(ui: &mut Ui, fraction: f32, text: Option<String>) {
    let mut bar = ProgressBar::new(fraction.clamp(0.0, 1.0));
    if let Some(text) = text {
        bar = bar.text(text);
    }
    ui.add(bar);
}

pub fn heading_block(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(title);
    ui.label(RichText::new(subtitle).weak());
    ui.add_space(12.0);
}

pub fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
