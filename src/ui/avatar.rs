//! Dibujo del personaje del jugador.

use egui::{Align2, Color32, FontId, Sense, Stroke, Ui, Vec2};

use crate::app::LearningQuestApp;
use crate::avatar::{Avatar, AvatarSize, Emotion};
use crate::dashboard::level_progress_percent;
use crate::i18n::Msg;

fn ring_color(level: u32) -> Color32 {
    match level {
        0..=4 => Color32::from_rgb(59, 130, 246),
        5..=9 => Color32::from_rgb(168, 85, 247),
        _ => Color32::from_rgb(234, 179, 8),
    }
}

/// Círculo con la emoción, anillo de progreso de nivel y etiqueta.
pub fn avatar_widget(ui: &mut Ui, avatar: &Avatar, level_label: &str) {
    let d = avatar.size.diameter();
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(d), Sense::hover());
    let painter = ui.painter_at(rect.expand(4.0));
    let center = rect.center();
    let radius = d / 2.0;
    let color = ring_color(avatar.level);

    painter.circle_filled(center, radius, color.gamma_multiply(0.25));
    painter.circle_stroke(center, radius, Stroke::new(2.0, color.gamma_multiply(0.5)));

    // Arco de progreso hacia el siguiente nivel
    let pct = level_progress_percent(avatar.level, avatar.experience) / 100.0;
    if pct > 0.0 {
        let steps = 48;
        let points: Vec<egui::Pos2> = (0..=steps)
            .map(|i| {
                let a = -std::f32::consts::FRAC_PI_2 + std::f32::consts::TAU * pct * i as f32 / steps as f32;
                center + Vec2::new(a.cos(), a.sin()) * radius
            })
            .collect();
        painter.add(egui::Shape::line(points, Stroke::new(4.0, color)));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        avatar.emotion.icon(),
        FontId::proportional(d * 0.45),
        Color32::WHITE,
    );
    response.on_hover_text(level_label);
}

/// Versión pequeña para la cabecera.
pub fn avatar_badge(app: &LearningQuestApp, ui: &mut Ui, now: f64) {
    let stats = &app.dashboard.stats;
    let avatar = Avatar {
        level: stats.level,
        experience: stats.experience,
        emotion: app.level_up.emotion(Emotion::Happy, now),
        size: AvatarSize::Small,
    };
    ui.add_space(4.0);
    let label = app.t(Msg::CharacterLevel(stats.level));
    ui.label(&label);
    ui.scope(|ui| {
        ui.set_max_height(28.0);
        let d = 28.0;
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(d), Sense::hover());
        ui.painter().circle_filled(rect.center(), d / 2.0, ring_color(avatar.level).gamma_multiply(0.4));
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            avatar.emotion.icon(),
            FontId::proportional(16.0),
            Color32::WHITE,
        );
    });
}

/// Tarjeta del personaje con la animación de subida de nivel.
pub fn character_card(app: &LearningQuestApp, ui: &mut Ui, now: f64) {
    let stats = &app.dashboard.stats;
    let animating = app.level_up.is_animating(now);
    let avatar = Avatar {
        level: stats.level,
        experience: stats.experience,
        emotion: app.level_up.emotion(Emotion::Neutral, now),
        size: if animating { AvatarSize::Large } else { AvatarSize::Medium },
    };
    ui.vertical_centered(|ui| {
        avatar_widget(ui, &avatar, &app.t(Msg::CharacterLevel(stats.level)));
        ui.label(app.t(Msg::CharacterLevel(stats.level)));
        ui.label(egui::RichText::new(app.t(Msg::Experience(stats.experience))).small());
        if animating {
            ui.label(
                egui::RichText::new(app.t(Msg::LevelUp))
                    .strong()
                    .color(Color32::from_rgb(234, 179, 8)),
            );
            ui.label(app.t(Msg::NewAbilities));
        } else if app.level_up.emotion(Emotion::Neutral, now) == Emotion::Happy {
            ui.label(egui::RichText::new(app.t(Msg::CharacterEvolved)).small());
        }
    });
}
