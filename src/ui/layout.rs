use egui::{CentralPanel, Context, Frame, RichText, ScrollArea, Ui, Visuals};

use crate::app::LearningQuestApp;
use crate::i18n::{Locale, Msg};
use crate::model::{AppState, GameView};

pub fn top_panel(app: &mut LearningQuestApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("◎ Solana Quest").strong());
            ui.separator();

            if app.state == AppState::Game {
                for view in GameView::ALL {
                    let selected = app.view == view;
                    if ui.selectable_label(selected, app.t(Msg::Nav(view))).clicked() {
                        app.go_to(view);
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                language_switch(app, ui);

                if app.state == AppState::Game {
                    if ui.button(app.t(Msg::Logout)).clicked() {
                        app.logout();
                    }
                    if let Some(short) = app.wallet.short_address() {
                        ui.label(RichText::new(format!("🔑 {short}")).monospace())
                            .on_hover_text(app.wallet.address().unwrap_or_default());
                    }
                    let now = ctx.input(|i| i.time);
                    crate::ui::avatar::avatar_badge(app, ui, now);
                }
            });
        });
    });
}

fn language_switch(app: &mut LearningQuestApp, ui: &mut Ui) {
    let current = app.locale();
    egui::ComboBox::from_id_salt("locale_switch")
        .selected_text(current.native_name())
        .show_ui(ui, |ui| {
            for locale in Locale::ALL {
                if ui
                    .selectable_label(locale == current, locale.native_name())
                    .clicked()
                {
                    app.set_locale(locale);
                }
            }
        });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙").on_hover_text("Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀").on_hover_text("Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical y ancho máximo, para las vistas largas.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_max_width(w);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                });
            });
    });
}
