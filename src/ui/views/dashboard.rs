use crate::LearningQuestApp;
use crate::i18n::{Msg, QuickAction};
use crate::model::GameView;
use crate::ui::avatar::character_card;
use crate::ui::helpers::{big_button, card, heading_block, progress_bar, stat_card};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};

pub fn ui_dashboard(app: &mut LearningQuestApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let mut go_to = None;

    scroll_panel(ctx, 960.0, |ui| {
        let address = app.wallet.short_address().unwrap_or_default();
        heading_block(
            ui,
            &app.t(Msg::DashboardWelcome { address: &address }),
            &app.t(Msg::DashboardSubtitle),
        );

        // ---------- Estadísticas ----------
        let stats = app.dashboard.stats.clone();
        let w = ((ui.available_width() - 48.0) / 4.0).max(120.0);
        ui.horizontal_wrapped(|ui| {
            card(ui, None, |ui| {
                ui.set_width(w);
                ui.label(RichText::new(format!("⭐ {}", app.t(Msg::StatsLevel(stats.level)))).small().weak());
                ui.label(RichText::new(app.t(Msg::StatsExplorer)).heading().strong());
                progress_bar(
                    ui,
                    app.dashboard.level_progress() / 100.0,
                    Some(app.t(Msg::StatsProgress)),
                );
            });
            stat_card(
                ui,
                w,
                "🪙",
                &app.t(Msg::StatsPoints),
                &stats.points.to_string(),
                &app.t(Msg::StatsToday(stats.today_points)),
            );
            stat_card(
                ui,
                w,
                "🔥",
                &app.t(Msg::StatsStreak),
                &stats.streak_days.to_string(),
                &app.t(Msg::StatsKeepItUp),
            );
            card(ui, None, |ui| {
                ui.set_width(w);
                ui.label(RichText::new(format!("🏅 {}", app.t(Msg::StatsGlobalRank))).small().weak());
                ui.label(RichText::new(format!("#{}", stats.rank)).heading().strong());
                if ui.link(app.t(Msg::StatsViewLeaderboard)).clicked() {
                    go_to = Some(GameView::Leaderboard);
                }
            });
        });
        ui.add_space(16.0);

        ui.columns(2, |cols| {
            // ---------- Categorías ----------
            cols[0].heading(app.t(Msg::LearningCategories));
            for cat in &app.dashboard.categories {
                card(&mut cols[0], None, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&cat.icon).size(22.0));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(app.t(Msg::DashboardCategoryName(cat.category))).strong());
                            ui.label(
                                RichText::new(app.t(Msg::CategoryCompleted {
                                    completed: cat.completed,
                                    total: cat.total,
                                }))
                                .small(),
                            );
                        });
                    });
                    progress_bar(ui, cat.fraction(), None);
                });
            }

            // ---------- Personaje y acciones ----------
            card(&mut cols[1], None, |ui| character_card(app, ui, now));
            cols[1].add_space(8.0);
            cols[1].heading(app.t(Msg::QuickActions));
            let actions = [
                ("🤖", QuickAction::ChatWithAi, GameView::Tutor),
                ("🎯", QuickAction::StartQuiz, GameView::Quiz),
                ("🏆", QuickAction::ViewNfts, GameView::Nft),
                ("📊", QuickAction::ViewLeaderboard, GameView::Leaderboard),
            ];
            let bw = cols[1].available_width();
            for (icon, action, view) in actions {
                if big_button(&mut cols[1], format!("{icon} {}", app.t(Msg::Action(action))), bw, 36.0, true) {
                    go_to = Some(view);
                }
            }

            // ---------- Logros ----------
            cols[1].add_space(8.0);
            cols[1].heading(app.t(Msg::Achievements));
            for achievement in &app.dashboard.achievements {
                let earned = achievement.is_earned();
                card(&mut cols[1], None, |ui| {
                    ui.horizontal(|ui| {
                        let icon = RichText::new(&achievement.icon).size(20.0);
                        ui.label(if earned { icon } else { icon.weak() });
                        ui.vertical(|ui| {
                            ui.label(RichText::new(app.t(Msg::AchievementName(achievement.id))).strong());
                            ui.label(RichText::new(app.t(Msg::AchievementDescription(achievement.id))).small());
                            if let Some(date) = achievement.earned_on {
                                let date = date.format("%Y-%m-%d").to_string();
                                ui.label(RichText::new(app.t(Msg::AchievementEarned { date: &date })).small().weak());
                            } else if let (Some(current), Some(target)) = (achievement.progress, achievement.target) {
                                ui.label(RichText::new(app.t(Msg::AchievementProgress { current, target })).small());
                                progress_bar(ui, current as f32 / target.max(1) as f32, None);
                            }
                        });
                    });
                });
            }
        });
    });

    if let Some(view) = go_to {
        app.go_to(view);
    }
}
