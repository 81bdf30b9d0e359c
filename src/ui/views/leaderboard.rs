use crate::LearningQuestApp;
use crate::i18n::Msg;
use crate::leaderboard::{LeaderboardCategory, RankedPlayer, TimeFrame};
use crate::model::GameView;
use crate::ui::helpers::{big_button, card, heading_block};
use crate::ui::layout::scroll_panel;
use crate::wallet::shorten;
use egui::{Color32, Context, RichText, Ui};

const GOLD: Color32 = Color32::from_rgb(234, 179, 8);
const SILVER: Color32 = Color32::from_rgb(156, 163, 175);
const BRONZE: Color32 = Color32::from_rgb(180, 83, 9);
const HIGHLIGHT: Color32 = Color32::from_rgb(59, 130, 246);

fn medal(rank: u32) -> (&'static str, Option<Color32>) {
    match rank {
        1 => ("🥇", Some(GOLD)),
        2 => ("🥈", Some(SILVER)),
        3 => ("🥉", Some(BRONZE)),
        _ => ("", None),
    }
}

pub fn ui_leaderboard(app: &mut LearningQuestApp, ctx: &Context) {
    app.leaderboard.sync(app.wallet.public_key());
    let mut go_to = None;

    scroll_panel(ctx, 900.0, |ui| {
        heading_block(ui, &app.t(Msg::LeaderboardTitle), &app.t(Msg::LeaderboardSubtitle));

        // ---------- Filtros ----------
        ui.horizontal(|ui| {
            ui.label(app.t(Msg::TimeFrameLabel));
            let current = app.leaderboard.time_frame();
            egui::ComboBox::from_id_salt("lb_time_frame")
                .selected_text(app.t(Msg::TimeFrameName(current)))
                .show_ui(ui, |ui| {
                    for tf in TimeFrame::ALL {
                        if ui.selectable_label(tf == current, app.t(Msg::TimeFrameName(tf))).clicked() {
                            app.leaderboard.set_time_frame(tf);
                        }
                    }
                });

            ui.add_space(16.0);
            ui.label(app.t(Msg::LeaderboardCategoryLabel));
            let current = app.leaderboard.category();
            egui::ComboBox::from_id_salt("lb_category")
                .selected_text(app.t(Msg::LeaderboardCategoryName(current)))
                .show_ui(ui, |ui| {
                    for cat in LeaderboardCategory::ALL {
                        if ui
                            .selectable_label(cat == current, app.t(Msg::LeaderboardCategoryName(cat)))
                            .clicked()
                        {
                            app.leaderboard.set_category(cat);
                        }
                    }
                });
        });
        ui.add_space(12.0);

        // ---------- Podio ----------
        ui.heading(app.t(Msg::TopPerformers));
        let podium: Vec<RankedPlayer> = app.leaderboard.podium().cloned().collect();
        ui.columns(3, |cols| {
            for (col, player) in cols.iter_mut().zip(&podium) {
                let (icon, color) = medal(player.rank);
                card(col, color, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(32.0));
                        ui.label(RichText::new(&player.record.display_name).strong());
                        ui.label(RichText::new(shorten(&player.record.address)).small().monospace());
                        ui.label(
                            RichText::new(format!("{} {}", player.record.total_points, app.t(Msg::Points)))
                                .heading(),
                        );
                    });
                });
            }
        });
        ui.add_space(12.0);

        // ---------- Tabla ----------
        ui.heading(app.t(Msg::Rankings));
        let rows = app.leaderboard.players().to_vec();
        for player in &rows {
            ranking_row(app, ui, player);
        }
        ui.add_space(16.0);

        card(ui, Some(HIGHLIGHT), |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(app.t(Msg::ClimbRankings)).strong());
                ui.label(app.t(Msg::ClimbDescription));
                ui.horizontal(|ui| {
                    if big_button(ui, app.t(Msg::TakeQuiz), 140.0, 32.0, true) {
                        go_to = Some(GameView::Quiz);
                    }
                    if big_button(ui, app.t(Msg::LearnMore), 140.0, 32.0, true) {
                        go_to = Some(GameView::Tutor);
                    }
                });
            });
        });
    });

    if let Some(view) = go_to {
        app.go_to(view);
    }
}

fn ranking_row(app: &LearningQuestApp, ui: &mut Ui, player: &RankedPlayer) {
    let accent = if player.is_current_user {
        Some(HIGHLIGHT)
    } else {
        medal(player.rank).1
    };
    let record = &player.record;
    card(ui, accent, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (icon, _) = medal(player.rank);
            ui.label(RichText::new(format!("#{} {icon}", player.rank)).strong().monospace());
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&record.display_name).strong());
                    if player.is_current_user {
                        ui.label(RichText::new(app.t(Msg::You)).small().color(HIGHLIGHT));
                    }
                });
                ui.label(RichText::new(shorten(&record.address)).small().monospace().weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("🏆 {} {}", record.nfts_claimed, app.t(Msg::Nfts)));
                ui.label(format!("{}: {}%", app.t(Msg::AvgScore), record.average_score));
                ui.label(format!("🔥 {}", record.streak));
                ui.label(format!("{} {}", app.t(Msg::Level), record.level));
                ui.label(RichText::new(format!("{} {}", record.total_points, app.t(Msg::Points))).strong());
            });
        });
    });
}
