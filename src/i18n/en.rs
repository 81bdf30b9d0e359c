use std::borrow::Cow;

use super::{Feature, Msg, QuickAction};
use crate::certificates::Rarity;
use crate::dashboard::AchievementId;
use crate::leaderboard::{LeaderboardCategory, TimeFrame};
use crate::model::{Category, Difficulty, GameView};
use crate::quiz::grading::Grade;
use crate::tutor::TutorMode;

const TUTOR_WELCOME: &str = "🎯 **Welcome to your AI Solana Tutor!**\n\n\
I'm here to help you master Solana blockchain technology. You can ask me anything about:\n\n\
🔷 **Blockchain Fundamentals** - Basic concepts, cryptography, consensus\n\
🔷 **Solana Architecture** - Proof of History, validators, clusters\n\
🔷 **Smart Contracts** - Program development, Anchor framework\n\
🔷 **DeFi Protocols** - DEXs, lending, yield farming\n\
🔷 **NFTs & Tokens** - Token standards, marketplaces, minting\n\n\
Choose your learning level and let's start your journey!";

pub(super) fn text(msg: Msg<'_>) -> Cow<'static, str> {
    match msg {
        Msg::HomeTitle => "SolanaLearningQuest".into(),
        Msg::HomeSubtitle => "Master Solana Blockchain Through AI-Powered Gaming".into(),
        Msg::FeatureTitle(f) => match f {
            Feature::AiLearning => "AI-Powered Learning",
            Feature::Gamified => "Gamified Experience",
            Feature::NftCerts => "NFT Certificates",
        }
        .into(),
        Msg::FeatureDescription(f) => match f {
            Feature::AiLearning => "Personalized learning paths with intelligent tutoring",
            Feature::Gamified => "Learn through interactive quizzes and challenges",
            Feature::NftCerts => "Earn verifiable blockchain credentials",
        }
        .into(),
        Msg::CtaConnectAndStart => "Connect Wallet & Start".into(),
        Msg::CtaEnterGame => "Enter Game".into(),
        Msg::CtaPoweredBy => "Powered by Solana Blockchain".into(),
        Msg::ConnectFailed => "Failed to connect wallet. Please try again.".into(),
        Msg::Logout => "Disconnect".into(),

        Msg::Nav(view) => match view {
            GameView::Dashboard => "Dashboard",
            GameView::Quiz => "Quiz Arena",
            GameView::Tutor => "AI Tutor",
            GameView::Leaderboard => "Leaderboard",
            GameView::Nft => "NFT Certificates",
        }
        .into(),
        Msg::ViewTitle(view) => match view {
            GameView::Dashboard => "Dashboard",
            GameView::Quiz => "Quiz Arena",
            GameView::Tutor => "AI Tutor",
            GameView::Leaderboard => "Leaderboard",
            GameView::Nft => "NFT Certificates",
        }
        .into(),

        Msg::DashboardWelcome { address } => format!("Welcome back, {address}!").into(),
        Msg::DashboardSubtitle => "Ready to continue your Solana learning journey?".into(),
        Msg::LearningCategories => "Learning Categories".into(),
        Msg::Achievements => "Achievements".into(),
        Msg::QuickActions => "Quick Actions".into(),
        Msg::DashboardCategoryName(c) => match c {
            Category::BlockchainBasics => "Blockchain Basics",
            Category::SolanaFundamentals => "Solana Fundamentals",
            Category::DefiProtocols => "DeFi Protocols",
            Category::NftTokens => "NFT & Tokens",
        }
        .into(),
        Msg::CategoryCompleted { completed, total } => {
            format!("{completed} / {total} completed").into()
        }
        Msg::StatsLevel(level) => format!("Level {level}").into(),
        Msg::StatsExplorer => "Explorer".into(),
        Msg::StatsProgress => "Progress".into(),
        Msg::StatsPoints => "Points".into(),
        Msg::StatsLearningCredits => "Learning Credits".into(),
        Msg::StatsStreak => "Streak".into(),
        Msg::StatsDailyLearning => "Daily Learning".into(),
        Msg::StatsGlobalRank => "Global Rank".into(),
        Msg::StatsLeaderboard => "Leaderboard".into(),
        Msg::StatsKeepItUp => "Keep it up!".into(),
        Msg::StatsToday(points) => format!("+{points} today").into(),
        Msg::StatsViewLeaderboard => "View leaderboard →".into(),
        Msg::Action(a) => match a {
            QuickAction::ChatWithAi => "Chat with AI Tutor",
            QuickAction::StartQuiz => "Start Quiz Challenge",
            QuickAction::ViewNfts => "View NFT Certificates",
            QuickAction::ViewLeaderboard => "View Leaderboard",
        }
        .into(),
        Msg::AchievementName(id) => match id {
            AchievementId::FirstSteps => "First Steps",
            AchievementId::WeekWarrior => "Week Warrior",
            AchievementId::PerfectMind => "Perfect Mind",
            AchievementId::BlockchainMaster => "Blockchain Master",
        }
        .into(),
        Msg::AchievementDescription(id) => match id {
            AchievementId::FirstSteps => "Complete your first quiz",
            AchievementId::WeekWarrior => "7-day learning streak",
            AchievementId::PerfectMind => "Score 100% on any quiz",
            AchievementId::BlockchainMaster => "Complete all basic courses",
        }
        .into(),
        Msg::AchievementEarned { date } => format!("Earned {date}").into(),
        Msg::AchievementProgress { current, target } => {
            format!("Progress: {current} / {target}").into()
        }

        Msg::LeaderboardTitle => "Leaderboard".into(),
        Msg::LeaderboardSubtitle => "Compete with other learners globally".into(),
        Msg::TimeFrameLabel => "Time Frame".into(),
        Msg::TimeFrameName(tf) => match tf {
            TimeFrame::Weekly => "This Week",
            TimeFrame::Monthly => "This Month",
            TimeFrame::AllTime => "All Time",
        }
        .into(),
        Msg::LeaderboardCategoryLabel => "Category".into(),
        Msg::LeaderboardCategoryName(c) => match c {
            LeaderboardCategory::Overall => "Overall Rankings",
            LeaderboardCategory::Category(Category::BlockchainBasics) => "Blockchain Basics",
            LeaderboardCategory::Category(Category::SolanaFundamentals) => "Solana Fundamentals",
            LeaderboardCategory::Category(Category::DefiProtocols) => "DeFi Protocols",
            LeaderboardCategory::Category(Category::NftTokens) => "NFTs & Tokens",
        }
        .into(),
        Msg::TopPerformers => "Top Performers".into(),
        Msg::Rankings => "Rankings".into(),
        Msg::Points => "Points".into(),
        Msg::Level => "Level".into(),
        Msg::Streak => "Streak".into(),
        Msg::AvgScore => "Avg Score".into(),
        Msg::Nfts => "NFTs".into(),
        Msg::You => "YOU".into(),
        Msg::ClimbRankings => "Climb the Rankings!".into(),
        Msg::ClimbDescription => {
            "Complete more quizzes and improve your scores to rise in the leaderboard".into()
        }
        Msg::TakeQuiz => "Take Quiz".into(),
        Msg::LearnMore => "Learn More".into(),

        Msg::QuizTitle => "Quiz Arena".into(),
        Msg::QuizSubtitle => "Test your Solana knowledge and earn points".into(),
        Msg::SelectDifficulty => "Select Difficulty".into(),
        Msg::SelectCategory => "Select Category".into(),
        Msg::DifficultyName(d) => match d {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
        .into(),
        Msg::DifficultyPoints(d) => format!("{} pts/question", d.points_per_question()).into(),
        Msg::StartQuizChallenge => "Start Quiz Challenge".into(),
        Msg::GeneratingQuiz => "Generating Quiz...".into(),
        Msg::QuizComplete => "Quiz Complete!".into(),
        Msg::HowYouPerformed => "Here's how you performed".into(),
        Msg::GradeMessage(g) => match g {
            Grade::APlus => "Outstanding!",
            Grade::A => "Excellent!",
            Grade::B => "Good job!",
            Grade::C => "Keep learning!",
            Grade::F => "Try again!",
        }
        .into(),
        Msg::QuestionReview => "Question Review".into(),
        Msg::TakeAnotherQuiz => "Take Another Quiz".into(),
        Msg::BackToDashboard => "Back to Dashboard".into(),
        Msg::QuizCategoryName(c) => match c {
            Category::BlockchainBasics => "Blockchain Basics",
            Category::SolanaFundamentals => "Solana Fundamentals",
            Category::DefiProtocols => "DeFi Protocols",
            Category::NftTokens => "NFT & Tokens",
        }
        .into(),
        Msg::QuizCategoryDescription(c) => match c {
            Category::BlockchainBasics => "Learn fundamental blockchain concepts and cryptography",
            Category::SolanaFundamentals => "Master Solana's unique features and architecture",
            Category::DefiProtocols => "Explore decentralized finance on Solana",
            Category::NftTokens => "Understand digital assets and token standards",
        }
        .into(),
        Msg::QuestionCounter { current, total } => {
            format!("Question {current} of {total}").into()
        }
        Msg::TimeLeft(secs) => format!("Time: {secs}s").into(),
        Msg::SubmitAnswer => "Submit Answer".into(),
        Msg::NextQuestion => "Next Question".into(),
        Msg::ViewResults => "View Results".into(),
        Msg::Explanation => "Explanation".into(),
        Msg::Correct => "Correct! 🎉".into(),
        Msg::Incorrect => "Incorrect ❌".into(),
        Msg::TimeUp => "Time's up! ⏰".into(),
        Msg::QuizGenerationFailed => "Failed to generate quiz. Please try again.".into(),
        Msg::Score => "Score".into(),
        Msg::CorrectCount { correct, total } => format!("{correct} / {total} correct").into(),
        Msg::YourAnswer => "Your answer".into(),
        Msg::NoAnswer => "No answer".into(),

        Msg::NftTitle => "NFT Certificates".into(),
        Msg::NftSubtitle => "Earn blockchain credentials verified on Solana".into(),
        Msg::CertificatesEarned => "Certificates Earned".into(),
        Msg::ReadyToClaim => "Ready to Claim".into(),
        Msg::InProgress => "In Progress".into(),
        Msg::LegendaryCerts => "Legendary Certs".into(),
        Msg::StartJourney => "Start Your Journey".into(),
        Msg::JourneyDescription => "Complete quizzes and learn about Solana to earn verifiable NFT certificates that prove your blockchain expertise.".into(),
        Msg::CertificateName(c) => match c {
            Category::BlockchainBasics => "Blockchain Explorer",
            Category::SolanaFundamentals => "Solana Pioneer",
            Category::DefiProtocols => "DeFi Specialist",
            Category::NftTokens => "NFT Master",
        }
        .into(),
        Msg::CertificateDescription(c) => match c {
            Category::BlockchainBasics => "Master the fundamentals of blockchain technology",
            Category::SolanaFundamentals => "Demonstrate expertise in Solana ecosystem",
            Category::DefiProtocols => "Proven knowledge in decentralized finance",
            Category::NftTokens => "Expert in digital assets and NFT technology",
        }
        .into(),
        Msg::RarityName(r) => match r {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
        .into(),
        Msg::Requirements {
            completed,
            total,
            min_score,
        } => format!("{completed} / {total} quizzes · min. score {min_score}%").into(),
        Msg::ClaimCertificate => "Claim Certificate".into(),
        Msg::Minting => "Minting...".into(),
        Msg::EarnedOn { date } => format!("Earned {date}").into(),
        Msg::MintNotAllowed => "Cannot mint this certificate yet!".into(),
        Msg::MintPreparing => "Preparing to mint your NFT certificate...".into(),
        Msg::MintInProgress => "Minting your certificate NFT...".into(),
        Msg::MintSucceeded => "🎉 Certificate NFT minted successfully!".into(),
        Msg::MintRecorded => "Your achievement is now recorded on the Solana blockchain!".into(),
        Msg::MintFailed => "Failed to mint certificate. Please try again.".into(),
        Msg::Close => "Close".into(),

        Msg::TutorTitle => "AI Solana Tutor".into(),
        Msg::TutorSubtitle => "Your personal blockchain learning companion".into(),
        Msg::TutorWelcome => TUTOR_WELCOME.into(),
        Msg::TutorModeName(m) => match m {
            TutorMode::Beginner => "Beginner",
            TutorMode::General => "General",
            TutorMode::Advanced => "Advanced",
        }
        .into(),
        Msg::QuickQuestions => "Quick Questions".into(),
        Msg::QuickQuestion(i) => match i {
            0 => "What makes Solana so fast?",
            1 => "Explain Proof of History in simple terms",
            2 => "How do SPL tokens work?",
            _ => "Give me a quiz about DeFi on Solana",
        }
        .into(),
        Msg::TutorYou => "You".into(),
        Msg::TutorAiTutor => "AI Tutor".into(),
        Msg::TutorPlaceholder => "Ask me anything about Solana, or request a quiz...".into(),
        Msg::TutorPoweredBy => "Press Enter to send • Shift+Enter for new line".into(),
        Msg::TutorThinking => "Thinking...".into(),
        Msg::TutorSend => "Send".into(),
        Msg::TutorEmptyReply => {
            "I'm having trouble processing that. Could you try rephrasing your question?".into()
        }
        Msg::TutorApology => {
            "I'm experiencing some technical difficulties. Please try again in a moment! 🤖".into()
        }

        Msg::CharacterLevel(level) => match level {
            1 => "Novice Explorer".into(),
            2 => "Curious Learner".into(),
            3 => "Blockchain Student".into(),
            4 => "Crypto Enthusiast".into(),
            5 => "Solana Apprentice".into(),
            6 => "DeFi Discoverer".into(),
            7 => "Smart Contract Scholar".into(),
            8 => "Protocol Pioneer".into(),
            9 => "Blockchain Architect".into(),
            10 => "Solana Master".into(),
            n => format!("Level {n}").into(),
        },
        Msg::LevelUp => "Level Up!".into(),
        Msg::NewAbilities => "You've unlocked new abilities!".into(),
        Msg::CharacterEvolved => "Your character has evolved!".into(),
        Msg::Experience(xp) => format!("{xp} XP").into(),
    }
}
