use super::*;

impl LearningQuestApp {
    /// CTA de la landing: conecta si hace falta y entra al juego.
    pub fn enter_game(&mut self) {
        if !self.wallet.connected() {
            if let Err(err) = self.wallet.connect() {
                log::error!("No se pudo conectar la wallet: {err}");
                self.toasts.error(self.t(Msg::ConnectFailed));
                return;
            }
        }
        self.state = AppState::Game;
        self.view = GameView::Dashboard;
        log::info!("Entrando al juego");
    }

    pub fn go_to(&mut self, view: GameView) {
        if self.view == view {
            return;
        }
        self.leave_view();
        log::info!("Navegación: {:?} -> {:?}", self.view, view);
        self.view = view;
    }

    /// Al salir de una vista se descarta su estado y su llamada en curso.
    fn leave_view(&mut self) {
        match self.view {
            GameView::Quiz => {
                self.quiz_task.cancel();
                self.quiz.reset();
            }
            GameView::Tutor => {
                self.tutor_task.cancel();
                self.tutor = TutorChat::new(self.t(Msg::TutorWelcome));
            }
            GameView::Dashboard | GameView::Leaderboard | GameView::Nft => {}
        }
    }

    pub fn logout(&mut self) {
        self.leave_view();
        self.gallery.cancel_mint();
        self.wallet.disconnect();
        self.state = AppState::Landing;
        self.view = GameView::Dashboard;
    }

    /// El juego sólo se muestra con la wallet conectada.
    pub fn enforce_wallet_gate(&mut self) {
        if self.state == AppState::Game && !self.wallet.connected() {
            log::warn!("Wallet desconectada: volviendo a la landing");
            self.logout();
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.i18n.set_locale(locale);
        let welcome = self.t(Msg::TutorWelcome);
        self.tutor.relocalize_welcome(&welcome);
    }
}
