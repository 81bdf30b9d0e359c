//! Clasificación con datos de ejemplo y la fila del jugador conectado.

use serde::Deserialize;

use crate::model::Category;
use crate::wallet::PublicKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeFrame {
    #[default]
    Weekly,
    Monthly,
    AllTime,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [TimeFrame::Weekly, TimeFrame::Monthly, TimeFrame::AllTime];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LeaderboardCategory {
    #[default]
    Overall,
    Category(Category),
}

impl LeaderboardCategory {
    pub const ALL: [LeaderboardCategory; 5] = [
        LeaderboardCategory::Overall,
        LeaderboardCategory::Category(Category::BlockchainBasics),
        LeaderboardCategory::Category(Category::SolanaFundamentals),
        LeaderboardCategory::Category(Category::DefiProtocols),
        LeaderboardCategory::Category(Category::NftTokens),
    ];
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub id: String,
    pub address: String,
    pub display_name: String,
    pub total_points: u32,
    pub level: u32,
    pub streak: u32,
    pub completed_quizzes: u32,
    pub average_score: u32,
    pub nfts_claimed: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LeaderboardSeed {
    pub players: Vec<PlayerRecord>,
    pub current_user: PlayerRecord,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedPlayer {
    pub record: PlayerRecord,
    pub rank: u32,
    pub is_current_user: bool,
}

/// Añade al jugador conectado (si lo hay), ordena por puntos y asigna rangos.
/// Los empates comparten rango: 1 + cuántos tienen estrictamente más puntos.
pub fn merge(seed: &LeaderboardSeed, current: Option<PublicKey>) -> Vec<RankedPlayer> {
    let mut rows: Vec<(PlayerRecord, bool)> =
        seed.players.iter().cloned().map(|p| (p, false)).collect();
    if let Some(key) = current {
        let mut me = seed.current_user.clone();
        me.id = "current".to_string();
        me.address = key.to_string();
        rows.push((me, true));
    }
    rows.sort_by(|a, b| b.0.total_points.cmp(&a.0.total_points));

    let points: Vec<u32> = rows.iter().map(|(p, _)| p.total_points).collect();
    rows.into_iter()
        .map(|(record, is_current_user)| {
            let above = points.iter().filter(|p| **p > record.total_points).count();
            RankedPlayer {
                rank: above as u32 + 1,
                record,
                is_current_user,
            }
        })
        .collect()
}

pub struct Leaderboard {
    seed: LeaderboardSeed,
    time_frame: TimeFrame,
    category: LeaderboardCategory,
    players: Vec<RankedPlayer>,
    merged_for: Option<Option<PublicKey>>,
}

impl Leaderboard {
    pub fn new(seed: LeaderboardSeed) -> Self {
        Self {
            seed,
            time_frame: TimeFrame::default(),
            category: LeaderboardCategory::default(),
            players: Vec::new(),
            merged_for: None,
        }
    }

    /// Rehace la mezcla si cambió la wallet o algún filtro.
    pub fn sync(&mut self, current: Option<PublicKey>) {
        if self.merged_for == Some(current) {
            return;
        }
        self.players = merge(&self.seed, current);
        self.merged_for = Some(current);
        log::debug!("Leaderboard recalculado ({} jugadores)", self.players.len());
    }

    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    pub fn set_time_frame(&mut self, time_frame: TimeFrame) {
        if self.time_frame != time_frame {
            self.time_frame = time_frame;
            self.merged_for = None;
        }
    }

    pub fn category(&self) -> LeaderboardCategory {
        self.category
    }

    pub fn set_category(&mut self, category: LeaderboardCategory) {
        if self.category != category {
            self.category = category;
            self.merged_for = None;
        }
    }

    pub fn players(&self) -> &[RankedPlayer] {
        &self.players
    }

    /// Los tres primeros puestos, en orden de rango.
    pub fn podium(&self) -> impl Iterator<Item = &RankedPlayer> {
        self.players.iter().filter(|p| p.rank <= 3).take(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, points: u32) -> PlayerRecord {
        PlayerRecord {
            id: id.into(),
            address: format!("{id}...addr"),
            display_name: id.into(),
            total_points: points,
            level: 1,
            streak: 0,
            completed_quizzes: 0,
            average_score: 0,
            nfts_claimed: 0,
        }
    }

    fn seed() -> LeaderboardSeed {
        LeaderboardSeed {
            players: vec![player("a", 300), player("b", 100), player("c", 200)],
            current_user: player("me", 150),
        }
    }

    #[test]
    fn without_wallet_only_mock_players() {
        let rows = merge(&seed(), None);
        let ids: Vec<_> = rows.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), [1, 2, 3]);
        assert!(rows.iter().all(|r| !r.is_current_user));
    }

    #[test]
    fn current_user_is_inserted_by_points() {
        let key = PublicKey::new([5; 32]);
        let rows = merge(&seed(), Some(key));
        assert_eq!(rows.len(), 4);
        let me = rows.iter().find(|r| r.is_current_user).unwrap();
        assert_eq!(me.rank, 3);
        assert_eq!(me.record.address, key.to_string());
        assert!(rows.windows(2).all(|w| w[0].record.total_points >= w[1].record.total_points));
    }

    #[test]
    fn ties_share_rank() {
        let mut s = seed();
        s.current_user.total_points = 200;
        let rows = merge(&s, Some(PublicKey::new([1; 32])));
        let ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 2, 4]);
        for r in &rows {
            let greater = rows
                .iter()
                .filter(|o| o.record.total_points > r.record.total_points)
                .count() as u32;
            assert_eq!(r.rank, greater + 1);
        }
    }

    #[test]
    fn sync_remerges_on_wallet_and_filter_changes() {
        let mut board = Leaderboard::new(seed());
        board.sync(None);
        assert_eq!(board.players().len(), 3);

        let key = PublicKey::new([2; 32]);
        board.sync(Some(key));
        assert_eq!(board.players().len(), 4);

        board.set_time_frame(TimeFrame::Monthly);
        board.set_category(LeaderboardCategory::Category(Category::NftTokens));
        board.sync(Some(key));
        assert_eq!(board.players().len(), 4);
        assert_eq!(board.podium().count(), 3);

        board.sync(None);
        assert_eq!(board.players().len(), 3);
    }
}
