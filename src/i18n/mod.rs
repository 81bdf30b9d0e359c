//! Textos de la interfaz en inglés y japonés.
//!
//! Cada texto es una variante de [`Msg`]; los parámetros viajan dentro de la
//! variante. Cada idioma es un `match` exhaustivo, así que un texto que falte
//! en cualquiera de los dos no compila.

mod en;
mod ja;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::certificates::Rarity;
use crate::dashboard::AchievementId;
use crate::leaderboard::{LeaderboardCategory, TimeFrame};
use crate::model::{Category, Difficulty, GameView};
use crate::quiz::grading::Grade;
use crate::tutor::TutorMode;

/// Clave única bajo la que se guarda el idioma.
pub const LOCALE_KEY: &str = "locale";

/// Número de preguntas rápidas del tutor.
pub const QUICK_QUESTION_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Nombre del idioma en su propio idioma (para el selector).
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ja => "日本語",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    AiLearning,
    Gamified,
    NftCerts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    ChatWithAi,
    StartQuiz,
    ViewNfts,
    ViewLeaderboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg<'a> {
    // Landing
    HomeTitle,
    HomeSubtitle,
    FeatureTitle(Feature),
    FeatureDescription(Feature),
    CtaConnectAndStart,
    CtaEnterGame,
    CtaPoweredBy,
    ConnectFailed,
    Logout,

    // Navegación
    Nav(GameView),
    ViewTitle(GameView),

    // Dashboard
    DashboardWelcome { address: &'a str },
    DashboardSubtitle,
    LearningCategories,
    Achievements,
    QuickActions,
    DashboardCategoryName(Category),
    CategoryCompleted { completed: u32, total: u32 },
    StatsLevel(u32),
    StatsExplorer,
    StatsProgress,
    StatsPoints,
    StatsLearningCredits,
    StatsStreak,
    StatsDailyLearning,
    StatsGlobalRank,
    StatsLeaderboard,
    StatsKeepItUp,
    StatsToday(u32),
    StatsViewLeaderboard,
    Action(QuickAction),
    AchievementName(AchievementId),
    AchievementDescription(AchievementId),
    AchievementEarned { date: &'a str },
    AchievementProgress { current: u32, target: u32 },

    // Leaderboard
    LeaderboardTitle,
    LeaderboardSubtitle,
    TimeFrameLabel,
    TimeFrameName(TimeFrame),
    LeaderboardCategoryLabel,
    LeaderboardCategoryName(LeaderboardCategory),
    TopPerformers,
    Rankings,
    Points,
    Level,
    Streak,
    AvgScore,
    Nfts,
    You,
    ClimbRankings,
    ClimbDescription,
    TakeQuiz,
    LearnMore,

    // Quiz
    QuizTitle,
    QuizSubtitle,
    SelectDifficulty,
    SelectCategory,
    DifficultyName(Difficulty),
    DifficultyPoints(Difficulty),
    StartQuizChallenge,
    GeneratingQuiz,
    QuizComplete,
    HowYouPerformed,
    GradeMessage(Grade),
    QuestionReview,
    TakeAnotherQuiz,
    BackToDashboard,
    QuizCategoryName(Category),
    QuizCategoryDescription(Category),
    QuestionCounter { current: usize, total: usize },
    TimeLeft(u32),
    SubmitAnswer,
    NextQuestion,
    ViewResults,
    Explanation,
    Correct,
    Incorrect,
    TimeUp,
    QuizGenerationFailed,
    Score,
    CorrectCount { correct: usize, total: usize },
    YourAnswer,
    NoAnswer,

    // Certificados
    NftTitle,
    NftSubtitle,
    CertificatesEarned,
    ReadyToClaim,
    InProgress,
    LegendaryCerts,
    StartJourney,
    JourneyDescription,
    CertificateName(Category),
    CertificateDescription(Category),
    RarityName(Rarity),
    Requirements { completed: u32, total: u32, min_score: u32 },
    ClaimCertificate,
    Minting,
    EarnedOn { date: &'a str },
    MintNotAllowed,
    MintPreparing,
    MintInProgress,
    MintSucceeded,
    MintRecorded,
    MintFailed,
    Close,

    // Tutor
    TutorTitle,
    TutorSubtitle,
    TutorWelcome,
    TutorModeName(TutorMode),
    QuickQuestions,
    QuickQuestion(usize),
    TutorYou,
    TutorAiTutor,
    TutorPlaceholder,
    TutorPoweredBy,
    TutorThinking,
    TutorSend,
    TutorEmptyReply,
    TutorApology,

    // Personaje
    CharacterLevel(u32),
    LevelUp,
    NewAbilities,
    CharacterEvolved,
    Experience(u32),
}

/// Texto de `msg` en `locale`.
pub fn text(locale: Locale, msg: Msg<'_>) -> Cow<'static, str> {
    match locale {
        Locale::En => en::text(msg),
        Locale::Ja => ja::text(msg),
    }
}

/// Traductor del proceso: idioma actual + búsqueda.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            log::info!("Idioma cambiado a {}", locale.code());
        }
        self.locale = locale;
    }

    pub fn t(&self, msg: Msg<'_>) -> String {
        text(self.locale, msg).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_messages() -> Vec<Msg<'static>> {
        let mut all = vec![
            Msg::HomeTitle,
            Msg::HomeSubtitle,
            Msg::CtaConnectAndStart,
            Msg::CtaEnterGame,
            Msg::CtaPoweredBy,
            Msg::DashboardWelcome { address: "7Kf8...9Nw3" },
            Msg::CategoryCompleted { completed: 3, total: 5 },
            Msg::StatsLevel(4),
            Msg::StatsToday(50),
            Msg::AchievementEarned { date: "2024-06-15" },
            Msg::AchievementProgress { current: 5, target: 7 },
            Msg::QuestionCounter { current: 2, total: 5 },
            Msg::TimeLeft(12),
            Msg::TutorWelcome,
            Msg::Requirements { completed: 12, total: 15, min_score: 80 },
            Msg::EarnedOn { date: "2024-06-15" },
            Msg::CharacterLevel(11),
        ];
        all.extend(GameView::ALL.into_iter().map(Msg::Nav));
        all.extend(GameView::ALL.into_iter().map(Msg::ViewTitle));
        all.extend(Category::ALL.into_iter().map(Msg::QuizCategoryName));
        all.extend(Category::ALL.into_iter().map(Msg::CertificateName));
        all.extend(Difficulty::ALL.into_iter().map(Msg::DifficultyPoints));
        all.extend((1..=10).map(Msg::CharacterLevel));
        all.extend((0..QUICK_QUESTION_COUNT).map(Msg::QuickQuestion));
        all
    }

    #[test]
    fn every_sample_message_has_text_in_both_locales() {
        for msg in sample_messages() {
            for locale in Locale::ALL {
                assert!(!text(locale, msg).trim().is_empty(), "{msg:?} vacío en {locale:?}");
            }
        }
    }

    #[test]
    fn interpolation_fills_parameters() {
        let welcome = text(Locale::En, Msg::DashboardWelcome { address: "AbCd...WxYz" });
        assert_eq!(welcome, "Welcome back, AbCd...WxYz!");
        let progress = text(Locale::Ja, Msg::CategoryCompleted { completed: 12, total: 15 });
        assert_eq!(progress, "12 / 15 完了");
    }

    #[test]
    fn switching_locale_and_back_restores_text() {
        let mut translator = Translator::new(Locale::En);
        let before: Vec<String> = sample_messages().into_iter().map(|m| translator.t(m)).collect();

        translator.set_locale(Locale::Ja);
        translator.set_locale(Locale::Ja);
        assert_eq!(translator.t(Msg::HomeSubtitle), "AIパワードゲーミングでSolanaブロックチェーンをマスター");

        translator.set_locale(Locale::En);
        let after: Vec<String> = sample_messages().into_iter().map(|m| translator.t(m)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_character_level_falls_back_to_number() {
        assert_eq!(text(Locale::En, Msg::CharacterLevel(42)), "Level 42");
        assert_eq!(text(Locale::En, Msg::CharacterLevel(10)), "Solana Master");
    }

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
    }
}
