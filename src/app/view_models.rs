use super::*;

use crate::certificates::Rarity;
use crate::model::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertificateStatus {
    Earned,
    Minting,
    Ready,
    Locked,
}

/// Datos ya resueltos para pintar una tarjeta de certificado.
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateCard {
    pub id: String,
    pub category: Category,
    pub rarity: Rarity,
    pub icon: String,
    pub background: [u8; 3],
    pub status: CertificateStatus,
    pub completed: u32,
    pub required: u32,
    pub total: u32,
    pub score: u32,
    pub min_score: u32,
    pub earned_date: Option<String>,
}

impl CertificateCard {
    /// Avance hacia el requisito de quizzes (0..=1).
    pub fn progress(&self) -> f32 {
        if self.required == 0 {
            1.0
        } else {
            (self.completed as f32 / self.required as f32).min(1.0)
        }
    }
}

impl LearningQuestApp {
    pub fn certificate_cards(&self) -> Vec<CertificateCard> {
        self.gallery
            .certificates()
            .iter()
            .map(|c| {
                let progress = self.gallery.progress(c.category).unwrap_or_default();
                let status = if c.earned {
                    CertificateStatus::Earned
                } else if self.gallery.is_minting(&c.id) {
                    CertificateStatus::Minting
                } else if self.gallery.is_eligible(c) {
                    CertificateStatus::Ready
                } else {
                    CertificateStatus::Locked
                };
                CertificateCard {
                    id: c.id.clone(),
                    category: c.category,
                    rarity: c.rarity,
                    icon: c.design.icon.clone(),
                    background: c.design.background,
                    status,
                    completed: progress.completed,
                    required: c.requirements.completed_quizzes,
                    total: c.requirements.total_quizzes,
                    score: progress.score,
                    min_score: c.requirements.minimum_score,
                    earned_date: c.earned_date.map(|d| d.format("%Y-%m-%d").to_string()),
                }
            })
            .collect()
    }
}
