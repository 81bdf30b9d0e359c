use crate::LearningQuestApp;
use crate::avatar::{Avatar, AvatarSize, Emotion};
use crate::i18n::{Feature, Msg};
use crate::ui::avatar::avatar_widget;
use crate::ui::helpers::{big_button, card};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_landing(app: &mut LearningQuestApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 760.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("◎").size(56.0));
            ui.heading(RichText::new(app.t(Msg::HomeTitle)).size(32.0).strong());
            ui.add_space(6.0);
            ui.label(RichText::new(app.t(Msg::HomeSubtitle)).size(16.0));
            ui.add_space(24.0);
        });

        // Tres tarjetas de características en fila
        let features = [
            ("🤖", Feature::AiLearning),
            ("🎮", Feature::Gamified),
            ("🏆", Feature::NftCerts),
        ];
        let col_w = (ui.available_width() - 32.0) / 3.0;
        ui.columns(3, |cols| {
            for (col, (icon, feature)) in cols.iter_mut().zip(features) {
                card(col, None, |ui| {
                    ui.set_min_width(col_w - 24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(28.0));
                        ui.label(RichText::new(app.t(Msg::FeatureTitle(feature))).strong());
                        ui.label(RichText::new(app.t(Msg::FeatureDescription(feature))).small());
                    });
                });
            }
        });

        // Vista previa de la evolución del personaje
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let previews = [
                (1, Emotion::Happy),
                (5, Emotion::Excited),
                (10, Emotion::Celebrating),
            ];
            let total = previews.len() as f32 * (AvatarSize::Small.diameter() + 24.0);
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));
            for (level, emotion) in previews {
                let avatar = Avatar {
                    level,
                    experience: 0,
                    emotion,
                    size: AvatarSize::Small,
                };
                avatar_widget(ui, &avatar, &app.t(Msg::CharacterLevel(level)));
                ui.add_space(24.0);
            }
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            let label = if app.wallet.connected() {
                app.t(Msg::CtaEnterGame)
            } else {
                app.t(Msg::CtaConnectAndStart)
            };
            if big_button(ui, format!("🚀 {label}"), 280.0, 44.0, true) {
                app.enter_game();
            }
            ui.add_space(8.0);
            ui.label(RichText::new(app.t(Msg::CtaPoweredBy)).small().weak());
        });
    });
}
