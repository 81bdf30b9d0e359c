use serde::{Deserialize, Serialize};

/// Pantalla de primer nivel: la landing o el "juego" (protegido por wallet).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Landing,
    Game,
}

/// Vistas dentro del juego.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GameView {
    #[default]
    Dashboard,
    Quiz,
    Tutor,
    Leaderboard,
    Nft,
}

impl GameView {
    pub const ALL: [GameView; 5] = [
        GameView::Dashboard,
        GameView::Quiz,
        GameView::Tutor,
        GameView::Leaderboard,
        GameView::Nft,
    ];
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn points_per_question(self) -> u32 {
        match self {
            Difficulty::Beginner => 10,
            Difficulty::Intermediate => 20,
            Difficulty::Advanced => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BlockchainBasics,
    SolanaFundamentals,
    DefiProtocols,
    NftTokens,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::BlockchainBasics,
        Category::SolanaFundamentals,
        Category::DefiProtocols,
        Category::NftTokens,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::BlockchainBasics => "blockchain-basics",
            Category::SolanaFundamentals => "solana-fundamentals",
            Category::DefiProtocols => "defi-protocols",
            Category::NftTokens => "nft-tokens",
        }
    }

    /// Temario que se le pasa al modelo al generar preguntas.
    pub fn topic_description(self) -> &'static str {
        match self {
            Category::BlockchainBasics => {
                "fundamental blockchain concepts, cryptography, consensus mechanisms, and basic principles"
            }
            Category::SolanaFundamentals => {
                "Solana architecture, Proof of History, validators, programs, accounts, and ecosystem"
            }
            Category::DefiProtocols => {
                "decentralized finance, AMMs, liquidity pools, yield farming, lending protocols"
            }
            Category::NftTokens => "non-fungible tokens, token standards, marketplaces, and tokenomics",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub points: u32,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: Answer) -> bool {
        answer == Answer::Chosen(self.correct_answer)
    }
}

/// Entrada del registro de respuestas: una opción o el centinela de tiempo agotado.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Answer {
    Chosen(usize),
    TimedOut,
}

impl Answer {
    /// Índice como lo guardaría un log plano: `-1` cuando se acabó el tiempo.
    pub fn as_index(self) -> i64 {
        match self {
            Answer::Chosen(i) => i as i64,
            Answer::TimedOut => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
