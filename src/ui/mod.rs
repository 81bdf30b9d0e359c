pub mod avatar;
pub mod fonts;
mod helpers;
pub mod layout;
pub mod toasts;
pub mod views;

use std::time::Duration;

use crate::app::LearningQuestApp;
use crate::i18n::LOCALE_KEY;
use crate::model::{AppState, GameView};
use crate::quiz::QuizPhase;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for LearningQuestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.poll_tasks(now);
        self.enforce_wallet_gate();

        // CABECERA (navegación, wallet e idioma)
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::Landing => views::landing::ui_landing(self, ctx),
            AppState::Game => match self.view {
                GameView::Dashboard => views::dashboard::ui_dashboard(self, ctx),
                GameView::Quiz => views::quiz::ui_quiz(self, ctx),
                GameView::Tutor => views::tutor::ui_tutor(self, ctx),
                GameView::Leaderboard => views::leaderboard::ui_leaderboard(self, ctx),
                GameView::Nft => views::certificates::ui_certificates(self, ctx),
            },
        }

        toasts::show_toasts(&mut self.toasts, ctx, now);

        // Temporizadores y tareas avanzan sin input del usuario
        if self.is_busy() || self.quiz.phase() == QuizPhase::Playing || self.level_up.is_animating(now)
        {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, LOCALE_KEY, &self.locale());
    }
}
