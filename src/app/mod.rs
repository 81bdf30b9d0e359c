use std::sync::Arc;

use egui_commonmark::CommonMarkCache;

use crate::avatar::LevelUpAnimation;
use crate::certificates::CertificateGallery;
use crate::config::AppConfig;
use crate::dashboard::DashboardSeed;
use crate::data::MockData;
use crate::i18n::{Locale, Msg, Translator};
use crate::leaderboard::Leaderboard;
use crate::llm::{GenerateResponse, LlmError, TextGenerator};
use crate::model::{AppState, GameView};
use crate::quiz::QuizSession;
use crate::task::TaskSlot;
use crate::toast::Toasts;
use crate::tutor::TutorChat;
use crate::wallet::{RpcClient, WalletSession};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod view_models;

pub use view_models::{CertificateCard, CertificateStatus};

pub type GenerationResult = Result<GenerateResponse, LlmError>;

pub struct LearningQuestApp {
    pub config: AppConfig,
    pub i18n: Translator,
    pub state: AppState,
    pub view: GameView,
    pub wallet: WalletSession,
    pub rpc: RpcClient,
    pub generator: Arc<dyn TextGenerator>,

    pub quiz: QuizSession,
    pub quiz_task: TaskSlot<GenerationResult>,
    pub tutor: TutorChat,
    pub tutor_task: TaskSlot<GenerationResult>,

    pub dashboard: DashboardSeed,
    pub leaderboard: Leaderboard,
    pub gallery: CertificateGallery,

    pub level_up: LevelUpAnimation,
    pub toasts: Toasts,
    pub cm_cache: CommonMarkCache,
}

impl LearningQuestApp {
    pub fn new(
        config: AppConfig,
        data: MockData,
        wallet: WalletSession,
        generator: Arc<dyn TextGenerator>,
        locale: Locale,
    ) -> Self {
        let i18n = Translator::new(locale);
        let rpc = RpcClient::new(config.rpc_url.clone());
        let welcome = i18n.t(Msg::TutorWelcome);

        Self {
            config,
            i18n,
            state: AppState::Landing,
            view: GameView::Dashboard,
            wallet,
            rpc,
            generator,
            quiz: QuizSession::new(),
            quiz_task: TaskSlot::new("quiz"),
            tutor: TutorChat::new(welcome),
            tutor_task: TaskSlot::new("tutor"),
            dashboard: data.dashboard,
            leaderboard: Leaderboard::new(data.leaderboard),
            gallery: CertificateGallery::new(data.certificates),
            level_up: LevelUpAnimation::default(),
            toasts: Toasts::default(),
            cm_cache: CommonMarkCache::default(),
        }
    }

    /// Texto en el idioma actual.
    pub fn t(&self, msg: Msg<'_>) -> String {
        self.i18n.t(msg)
    }

    pub fn locale(&self) -> Locale {
        self.i18n.locale()
    }

    /// Hay algo en marcha que necesita repintar aunque no haya input.
    pub fn is_busy(&self) -> bool {
        self.quiz_task.is_pending()
            || self.tutor_task.is_pending()
            || self.gallery.any_minting()
            || !self.toasts.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::config::{DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, DEFAULT_TEMPERATURE, LlmConfig};
    use crate::data::read_mock_data;
    use crate::llm::testing::ScriptedGenerator;
    use crate::wallet::testing::FakeWallet;

    pub fn test_config() -> AppConfig {
        AppConfig {
            rpc_url: "http://127.0.0.1:8899".into(),
            llm: LlmConfig {
                endpoint: DEFAULT_LLM_ENDPOINT.into(),
                model: DEFAULT_LLM_MODEL.into(),
                api_key: None,
                temperature: DEFAULT_TEMPERATURE,
            },
            keypair_path: None,
        }
    }

    pub fn test_app(replies: Vec<Result<String, ()>>, fail_connect: bool) -> LearningQuestApp {
        scripted_app(replies, fail_connect).0
    }

    /// Como `test_app`, pero devuelve también el generador para revisar las peticiones.
    pub fn scripted_app(
        replies: Vec<Result<String, ()>>,
        fail_connect: bool,
    ) -> (LearningQuestApp, Arc<ScriptedGenerator>) {
        let generator = Arc::new(ScriptedGenerator::new(replies));
        let app = LearningQuestApp::new(
            test_config(),
            read_mock_data().unwrap(),
            WalletSession::new(Box::new(FakeWallet::new(fail_connect))),
            generator.clone(),
            Locale::En,
        );
        (app, generator)
    }

    /// Espera (con tope) a que el hilo de trabajo entregue el resultado.
    pub fn wait_for(app: &mut LearningQuestApp, now: f64, done: impl Fn(&LearningQuestApp) -> bool) {
        for _ in 0..400 {
            app.poll_tasks(now);
            if done(app) {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        panic!("la tarea no terminó a tiempo");
    }
}
