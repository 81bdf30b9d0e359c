use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::Category;

/// Experiencia acumulada necesaria para el nivel `level`.
pub fn experience_for_level(level: u32) -> u32 {
    level * 200
}

/// Porcentaje (0–100) de avance dentro del nivel actual.
pub fn level_progress_percent(level: u32, experience: u32) -> f32 {
    let current = experience_for_level(level) as f32;
    let next = experience_for_level(level + 1) as f32;
    let pct = (experience as f32 - current) / (next - current) * 100.0;
    pct.clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    FirstSteps,
    WeekWarrior,
    PerfectMind,
    BlockchainMaster,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub level: u32,
    pub experience: u32,
    pub points: u32,
    pub streak_days: u32,
    pub completed_quizzes: u32,
    pub total_quizzes: u32,
    pub rank: u32,
    pub today_points: u32,
}

impl PlayerStats {
    /// Suma un quiz terminado; devuelve `true` si se sube de nivel.
    pub fn record_quiz(&mut self, score: u32) -> bool {
        self.points += score;
        self.today_points += score;
        self.experience += score;
        self.completed_quizzes += 1;
        let mut leveled = false;
        while self.experience >= experience_for_level(self.level + 1) {
            self.level += 1;
            leveled = true;
        }
        if leveled {
            log::info!("Subida a nivel {}", self.level);
        }
        leveled
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CategoryCard {
    pub category: Category,
    pub icon: String,
    pub completed: u32,
    pub total: u32,
}

impl CategoryCard {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f32 / self.total as f32).min(1.0)
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub icon: String,
    #[serde(default)]
    pub earned_on: Option<NaiveDate>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub target: Option<u32>,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        self.earned_on.is_some()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DashboardSeed {
    pub stats: PlayerStats,
    pub categories: Vec<CategoryCard>,
    pub achievements: Vec<Achievement>,
}

impl DashboardSeed {
    pub fn level_progress(&self) -> f32 {
        level_progress_percent(self.stats.level, self.stats.experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_scale() {
        assert_eq!(experience_for_level(1), 200);
        assert_eq!(experience_for_level(7), 1400);
    }

    #[test]
    fn progress_is_clamped() {
        // 150 XP en nivel 1 queda por debajo del umbral del nivel
        assert_eq!(level_progress_percent(1, 150), 0.0);
        assert_eq!(level_progress_percent(1, 300), 50.0);
        assert_eq!(level_progress_percent(1, 5000), 100.0);
    }

    #[test]
    fn finished_quiz_feeds_stats_and_levels_up() {
        let mut stats = PlayerStats {
            level: 1,
            experience: 150,
            points: 1250,
            streak_days: 5,
            completed_quizzes: 12,
            total_quizzes: 45,
            rank: 42,
            today_points: 0,
        };
        assert!(!stats.record_quiz(50));
        assert_eq!((stats.points, stats.experience, stats.completed_quizzes), (1300, 200, 13));

        assert!(stats.record_quiz(200));
        assert_eq!(stats.level, 2);
        assert_eq!(stats.today_points, 250);
    }

    #[test]
    fn category_fraction() {
        let card = CategoryCard {
            category: Category::DefiProtocols,
            icon: "💰".into(),
            completed: 5,
            total: 20,
        };
        assert_eq!(card.fraction(), 0.25);
    }
}
