use std::borrow::Cow;

use super::{Feature, Msg, QuickAction};
use crate::certificates::Rarity;
use crate::dashboard::AchievementId;
use crate::leaderboard::{LeaderboardCategory, TimeFrame};
use crate::model::{Category, Difficulty, GameView};
use crate::quiz::grading::Grade;
use crate::tutor::TutorMode;

const TUTOR_WELCOME: &str = "🎯 **AI Solanaチューターへようこそ！**\n\n\
Solanaブロックチェーン技術をマスターするお手伝いをします。以下について何でもお聞きください：\n\n\
🔷 **ブロックチェーン基礎** - 基本概念、暗号技術、コンセンサス\n\
🔷 **Solanaアーキテクチャ** - Proof of History、バリデーター、クラスター\n\
🔷 **スマートコントラクト** - プログラム開発、Anchorフレームワーク\n\
🔷 **DeFiプロトコル** - DEX、レンディング、イールドファーミング\n\
🔷 **NFT・トークン** - トークン標準、マーケットプレイス、ミンティング\n\n\
学習レベルを選択して、あなたの学習の旅を始めましょう！";

pub(super) fn text(msg: Msg<'_>) -> Cow<'static, str> {
    match msg {
        Msg::HomeTitle => "SolanaLearningQuest".into(),
        Msg::HomeSubtitle => "AIパワードゲーミングでSolanaブロックチェーンをマスター".into(),
        Msg::FeatureTitle(f) => match f {
            Feature::AiLearning => "AI学習システム",
            Feature::Gamified => "ゲーミフィケーション",
            Feature::NftCerts => "NFT認定証",
        }
        .into(),
        Msg::FeatureDescription(f) => match f {
            Feature::AiLearning => "インテリジェントな個人指導による学習パス",
            Feature::Gamified => "インタラクティブなクイズとチャレンジで学習",
            Feature::NftCerts => "検証可能なブロックチェーン資格を獲得",
        }
        .into(),
        Msg::CtaConnectAndStart => "ウォレット接続＆開始".into(),
        Msg::CtaEnterGame => "ゲーム開始".into(),
        Msg::CtaPoweredBy => "Solana ブロックチェーン対応".into(),
        Msg::ConnectFailed => "ウォレットの接続に失敗しました。もう一度お試しください。".into(),
        Msg::Logout => "切断".into(),

        Msg::Nav(view) => match view {
            GameView::Dashboard => "ダッシュボード",
            GameView::Quiz => "クイズアリーナ",
            GameView::Tutor => "AIチューター",
            GameView::Leaderboard => "リーダーボード",
            GameView::Nft => "NFT認定証",
        }
        .into(),
        Msg::ViewTitle(view) => match view {
            GameView::Dashboard => "ダッシュボード",
            GameView::Quiz => "クイズアリーナ",
            GameView::Tutor => "AIチューター",
            GameView::Leaderboard => "リーダーボード",
            GameView::Nft => "NFT認定証",
        }
        .into(),

        Msg::DashboardWelcome { address } => format!("おかえりなさい、{address}さん！").into(),
        Msg::DashboardSubtitle => "Solana学習の旅を続ける準備はできていますか？".into(),
        Msg::LearningCategories => "学習カテゴリ".into(),
        Msg::Achievements => "実績".into(),
        Msg::QuickActions => "クイックアクション".into(),
        Msg::DashboardCategoryName(c) => match c {
            Category::BlockchainBasics => "ブロックチェーン基礎",
            Category::SolanaFundamentals => "Solana基礎",
            Category::DefiProtocols => "DeFiプロトコル",
            Category::NftTokens => "NFT・トークン",
        }
        .into(),
        Msg::CategoryCompleted { completed, total } => {
            format!("{completed} / {total} 完了").into()
        }
        Msg::StatsLevel(level) => format!("レベル{level}").into(),
        Msg::StatsExplorer => "エクスプローラー".into(),
        Msg::StatsProgress => "進行状況".into(),
        Msg::StatsPoints => "ポイント".into(),
        Msg::StatsLearningCredits => "学習クレジット".into(),
        Msg::StatsStreak => "連続記録".into(),
        Msg::StatsDailyLearning => "日次学習".into(),
        Msg::StatsGlobalRank => "世界ランク".into(),
        Msg::StatsLeaderboard => "リーダーボード".into(),
        Msg::StatsKeepItUp => "この調子で頑張って！".into(),
        Msg::StatsToday(points) => format!("今日+{points}").into(),
        Msg::StatsViewLeaderboard => "リーダーボードを見る →".into(),
        Msg::Action(a) => match a {
            QuickAction::ChatWithAi => "AIチューターとチャット",
            QuickAction::StartQuiz => "クイズチャレンジ開始",
            QuickAction::ViewNfts => "NFT認定証を見る",
            QuickAction::ViewLeaderboard => "リーダーボードを見る",
        }
        .into(),
        Msg::AchievementName(id) => match id {
            AchievementId::FirstSteps => "はじめの一歩",
            AchievementId::WeekWarrior => "一週間の戦士",
            AchievementId::PerfectMind => "完璧な心",
            AchievementId::BlockchainMaster => "ブロックチェーンマスター",
        }
        .into(),
        Msg::AchievementDescription(id) => match id {
            AchievementId::FirstSteps => "初回クイズ完了",
            AchievementId::WeekWarrior => "7日間学習継続",
            AchievementId::PerfectMind => "クイズで100%獲得",
            AchievementId::BlockchainMaster => "基礎コース全完了",
        }
        .into(),
        Msg::AchievementEarned { date } => format!("{date} 獲得").into(),
        Msg::AchievementProgress { current, target } => {
            format!("進捗: {current} / {target}").into()
        }

        Msg::LeaderboardTitle => "リーダーボード".into(),
        Msg::LeaderboardSubtitle => "世界中の学習者と競争しよう".into(),
        Msg::TimeFrameLabel => "期間".into(),
        Msg::TimeFrameName(tf) => match tf {
            TimeFrame::Weekly => "今週",
            TimeFrame::Monthly => "今月",
            TimeFrame::AllTime => "全期間",
        }
        .into(),
        Msg::LeaderboardCategoryLabel => "カテゴリ".into(),
        Msg::LeaderboardCategoryName(c) => match c {
            LeaderboardCategory::Overall => "総合ランキング",
            LeaderboardCategory::Category(Category::BlockchainBasics) => "ブロックチェーン基礎",
            LeaderboardCategory::Category(Category::SolanaFundamentals) => "Solana基礎",
            LeaderboardCategory::Category(Category::DefiProtocols) => "DeFiプロトコル",
            LeaderboardCategory::Category(Category::NftTokens) => "NFT・トークン",
        }
        .into(),
        Msg::TopPerformers => "トップパフォーマー".into(),
        Msg::Rankings => "ランキング".into(),
        Msg::Points => "ポイント".into(),
        Msg::Level => "レベル".into(),
        Msg::Streak => "連続記録".into(),
        Msg::AvgScore => "平均スコア".into(),
        Msg::Nfts => "NFT".into(),
        Msg::You => "あなた".into(),
        Msg::ClimbRankings => "ランキングを上がろう！".into(),
        Msg::ClimbDescription => {
            "より多くのクイズを完了し、スコアを向上させてリーダーボードで上位を目指しましょう".into()
        }
        Msg::TakeQuiz => "クイズに挑戦".into(),
        Msg::LearnMore => "詳しく学ぶ".into(),

        Msg::QuizTitle => "クイズアリーナ".into(),
        Msg::QuizSubtitle => "Solanaの知識をテストしてポイントを獲得".into(),
        Msg::SelectDifficulty => "難易度選択".into(),
        Msg::SelectCategory => "カテゴリ選択".into(),
        Msg::DifficultyName(d) => match d {
            Difficulty::Beginner => "初級",
            Difficulty::Intermediate => "中級",
            Difficulty::Advanced => "上級",
        }
        .into(),
        Msg::DifficultyPoints(d) => format!("{}ポイント/問", d.points_per_question()).into(),
        Msg::StartQuizChallenge => "クイズチャレンジ開始".into(),
        Msg::GeneratingQuiz => "クイズ生成中...".into(),
        Msg::QuizComplete => "クイズ完了！".into(),
        Msg::HowYouPerformed => "あなたの成績です".into(),
        Msg::GradeMessage(g) => match g {
            Grade::APlus => "素晴らしい！",
            Grade::A => "優秀！",
            Grade::B => "よくできました！",
            Grade::C => "学習を続けよう！",
            Grade::F => "再挑戦！",
        }
        .into(),
        Msg::QuestionReview => "問題レビュー".into(),
        Msg::TakeAnotherQuiz => "別のクイズに挑戦".into(),
        Msg::BackToDashboard => "ダッシュボードに戻る".into(),
        Msg::QuizCategoryName(c) => match c {
            Category::BlockchainBasics => "ブロックチェーン基礎",
            Category::SolanaFundamentals => "Solana基礎",
            Category::DefiProtocols => "DeFiプロトコル",
            Category::NftTokens => "NFT・トークン",
        }
        .into(),
        Msg::QuizCategoryDescription(c) => match c {
            Category::BlockchainBasics => "基本的なブロックチェーン概念と暗号技術を学ぶ",
            Category::SolanaFundamentals => "Solanaの独自機能とアーキテクチャをマスター",
            Category::DefiProtocols => "Solana上の分散型金融を探索",
            Category::NftTokens => "デジタル資産とトークン標準を理解",
        }
        .into(),
        Msg::QuestionCounter { current, total } => format!("問題 {current} / {total}").into(),
        Msg::TimeLeft(secs) => format!("残り時間: {secs}秒").into(),
        Msg::SubmitAnswer => "回答する".into(),
        Msg::NextQuestion => "次の問題".into(),
        Msg::ViewResults => "結果を見る".into(),
        Msg::Explanation => "解説".into(),
        Msg::Correct => "正解！🎉".into(),
        Msg::Incorrect => "不正解 ❌".into(),
        Msg::TimeUp => "時間切れ！⏰".into(),
        Msg::QuizGenerationFailed => "クイズの生成に失敗しました。もう一度お試しください。".into(),
        Msg::Score => "スコア".into(),
        Msg::CorrectCount { correct, total } => format!("{total}問中{correct}問正解").into(),
        Msg::YourAnswer => "あなたの回答".into(),
        Msg::NoAnswer => "未回答".into(),

        Msg::NftTitle => "NFT認定証".into(),
        Msg::NftSubtitle => "Solanaで検証されたブロックチェーン資格を獲得".into(),
        Msg::CertificatesEarned => "取得した認定証".into(),
        Msg::ReadyToClaim => "受け取り可能".into(),
        Msg::InProgress => "進行中".into(),
        Msg::LegendaryCerts => "レジェンダリー認定証".into(),
        Msg::StartJourney => "旅を始めよう".into(),
        Msg::JourneyDescription => "クイズを完了しSolanaについて学んで、あなたのブロックチェーン専門知識を証明する検証可能なNFT認定証を獲得しましょう。".into(),
        Msg::CertificateName(c) => match c {
            Category::BlockchainBasics => "ブロックチェーンエクスプローラー",
            Category::SolanaFundamentals => "Solanaパイオニア",
            Category::DefiProtocols => "DeFiスペシャリスト",
            Category::NftTokens => "NFTマスター",
        }
        .into(),
        Msg::CertificateDescription(c) => match c {
            Category::BlockchainBasics => "ブロックチェーン技術の基礎をマスター",
            Category::SolanaFundamentals => "Solanaエコシステムの専門知識を実証",
            Category::DefiProtocols => "分散型金融における実証された知識",
            Category::NftTokens => "デジタル資産とNFT技術のエキスパート",
        }
        .into(),
        Msg::RarityName(r) => match r {
            Rarity::Common => "コモン",
            Rarity::Rare => "レア",
            Rarity::Epic => "エピック",
            Rarity::Legendary => "レジェンダリー",
        }
        .into(),
        Msg::Requirements {
            completed,
            total,
            min_score,
        } => format!("クイズ {completed} / {total} ・ 最低スコア {min_score}%").into(),
        Msg::ClaimCertificate => "認定証を受け取る".into(),
        Msg::Minting => "ミント中...".into(),
        Msg::EarnedOn { date } => format!("{date} 獲得").into(),
        Msg::MintNotAllowed => "この認定証はまだミントできません！".into(),
        Msg::MintPreparing => "NFT認定証のミントを準備中...".into(),
        Msg::MintInProgress => "認定証NFTをミント中...".into(),
        Msg::MintSucceeded => "🎉 認定証NFTのミントに成功しました！".into(),
        Msg::MintRecorded => "あなたの実績がSolanaブロックチェーンに記録されました！".into(),
        Msg::MintFailed => "認定証のミントに失敗しました。もう一度お試しください。".into(),
        Msg::Close => "閉じる".into(),

        Msg::TutorTitle => "AI Solanaチューター".into(),
        Msg::TutorSubtitle => "あなた専用のブロックチェーン学習コンパニオン".into(),
        Msg::TutorWelcome => TUTOR_WELCOME.into(),
        Msg::TutorModeName(m) => match m {
            TutorMode::Beginner => "初級",
            TutorMode::General => "一般",
            TutorMode::Advanced => "上級",
        }
        .into(),
        Msg::QuickQuestions => "クイック質問".into(),
        Msg::QuickQuestion(i) => match i {
            0 => "Solanaはなぜこんなに速いの？",
            1 => "Proof of Historyを簡単に説明して",
            2 => "SPLトークンはどのように機能しますか？",
            _ => "Solana上のDeFiについてクイズを出して",
        }
        .into(),
        Msg::TutorYou => "あなた".into(),
        Msg::TutorAiTutor => "AIチューター".into(),
        Msg::TutorPlaceholder => {
            "Solanaについて何でも聞いてください、またはクイズをリクエストしてください...".into()
        }
        Msg::TutorPoweredBy => "Enterで送信 • Shift+Enterで改行".into(),
        Msg::TutorThinking => "考え中...".into(),
        Msg::TutorSend => "送信".into(),
        Msg::TutorEmptyReply => {
            "うまく処理できませんでした。質問を言い換えていただけますか？".into()
        }
        Msg::TutorApology => {
            "技術的な問題が発生しています。少し時間をおいて再度お試しください！🤖".into()
        }

        Msg::CharacterLevel(level) => match level {
            1 => "初心者エクスプローラー".into(),
            2 => "好奇心旺盛な学習者".into(),
            3 => "ブロックチェーン学生".into(),
            4 => "暗号愛好家".into(),
            5 => "Solana見習い".into(),
            6 => "DeFi発見者".into(),
            7 => "スマートコントラクト研究者".into(),
            8 => "プロトコルパイオニア".into(),
            9 => "ブロックチェーンアーキテクト".into(),
            10 => "Solanaマスター".into(),
            n => format!("レベル{n}").into(),
        },
        Msg::LevelUp => "レベルアップ！".into(),
        Msg::NewAbilities => "新しい能力を解放しました！".into(),
        Msg::CharacterEvolved => "キャラクターが進化しました！".into(),
        Msg::Experience(xp) => format!("{xp} XP").into(),
    }
}
