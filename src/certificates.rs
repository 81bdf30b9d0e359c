//! Catálogo de certificados NFT, elegibilidad y minteo simulado.

use std::collections::HashMap;

use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::model::Category;
use crate::wallet::PublicKey;

/// Duración del minteo simulado, en segundos.
pub const MINT_SECONDS: f64 = 3.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Requirements {
    pub completed_quizzes: u32,
    pub total_quizzes: u32,
    pub minimum_score: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CertificateDesign {
    /// Color de fondo en RGB.
    pub background: [u8; 3],
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Certificate {
    pub id: String,
    pub category: Category,
    pub requirements: Requirements,
    pub design: CertificateDesign,
    #[serde(default)]
    pub earned: bool,
    #[serde(default)]
    pub earned_date: Option<NaiveDate>,
    pub rarity: Rarity,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CategoryProgress {
    pub completed: u32,
    pub score: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CertificateCatalogue {
    pub certificates: Vec<Certificate>,
    pub progress: HashMap<Category, CategoryProgress>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NftAttribute {
    pub trait_type: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<NftAttribute>,
}

impl NftMetadata {
    pub fn build(
        certificate: &Certificate,
        name: &str,
        description: &str,
        owner: PublicKey,
        today: NaiveDate,
    ) -> Self {
        let owner = owner.to_string();
        let earned_by: String = owner.chars().take(8).collect();
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: format!(
                "https://via.placeholder.com/400x400/6366f1/ffffff?text={}",
                utf8_percent_encode(name, URI_COMPONENT)
            ),
            attributes: vec![
                NftAttribute {
                    trait_type: "Category",
                    value: certificate.category.slug().to_string(),
                },
                NftAttribute {
                    trait_type: "Rarity",
                    value: certificate.rarity.as_str().to_string(),
                },
                NftAttribute {
                    trait_type: "Completion Date",
                    value: today.format("%Y-%m-%d").to_string(),
                },
                NftAttribute {
                    trait_type: "Earned By",
                    value: format!("{earned_by}..."),
                },
            ],
        }
    }
}

/// Lo que `encodeURIComponent` deja sin escapar.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintRefusal {
    NotConnected,
    AlreadyEarned,
    NotEligible,
    Busy,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MintEvent {
    Succeeded { id: String },
    Failed { id: String },
}

#[derive(Clone, Debug)]
struct MintJob {
    id: String,
    started_at: f64,
    metadata: NftMetadata,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryCounts {
    pub earned: usize,
    pub ready: usize,
    pub in_progress: usize,
    pub legendary: usize,
}

pub struct CertificateGallery {
    certificates: Vec<Certificate>,
    progress: HashMap<Category, CategoryProgress>,
    minting: Option<MintJob>,
    pub selected: Option<String>,
}

impl CertificateGallery {
    pub fn new(catalogue: CertificateCatalogue) -> Self {
        Self {
            certificates: catalogue.certificates,
            progress: catalogue.progress,
            minting: None,
            selected: None,
        }
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn get(&self, id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    pub fn progress(&self, category: Category) -> Option<CategoryProgress> {
        self.progress.get(&category).copied()
    }

    pub fn is_eligible(&self, certificate: &Certificate) -> bool {
        self.progress(certificate.category).is_some_and(|p| {
            p.completed >= certificate.requirements.completed_quizzes
                && p.score >= certificate.requirements.minimum_score
        })
    }

    pub fn can_claim(&self, certificate: &Certificate) -> bool {
        !certificate.earned && self.is_eligible(certificate)
    }

    pub fn counts(&self) -> GalleryCounts {
        self.certificates
            .iter()
            .fold(GalleryCounts::default(), |mut acc, c| {
                let eligible = self.is_eligible(c);
                if c.earned {
                    acc.earned += 1;
                    if c.rarity == Rarity::Legendary {
                        acc.legendary += 1;
                    }
                } else if eligible {
                    acc.ready += 1;
                } else {
                    acc.in_progress += 1;
                }
                acc
            })
    }

    pub fn is_minting(&self, id: &str) -> bool {
        self.minting.as_ref().is_some_and(|job| job.id == id)
    }

    pub fn any_minting(&self) -> bool {
        self.minting.is_some()
    }

    /// Empieza el minteo simulado; los textos son los ya traducidos.
    pub fn start_mint(
        &mut self,
        id: &str,
        owner: Option<PublicKey>,
        name: &str,
        description: &str,
        now: f64,
        today: NaiveDate,
    ) -> Result<(), MintRefusal> {
        let owner = owner.ok_or(MintRefusal::NotConnected)?;
        if self.minting.is_some() {
            return Err(MintRefusal::Busy);
        }
        let certificate = self.get(id).ok_or(MintRefusal::Unknown)?;
        if certificate.earned {
            return Err(MintRefusal::AlreadyEarned);
        }
        if !self.is_eligible(certificate) {
            return Err(MintRefusal::NotEligible);
        }

        let metadata = NftMetadata::build(certificate, name, description, owner, today);
        match serde_json::to_string(&metadata) {
            Ok(json) => log::info!("Metadatos del certificado {id}: {json}"),
            Err(err) => log::warn!("No se pudieron serializar los metadatos de {id}: {err}"),
        }
        self.minting = Some(MintJob {
            id: id.to_string(),
            started_at: now,
            metadata,
        });
        Ok(())
    }

    /// Termina el minteo cuando ha pasado el tiempo simulado.
    pub fn poll_mint(&mut self, now: f64, today: NaiveDate, connected: bool) -> Option<MintEvent> {
        let job = self.minting.as_ref()?;
        if connected && now - job.started_at < MINT_SECONDS {
            return None;
        }
        let job = self.minting.take()?;
        if !connected {
            log::error!("Minteo de {} interrumpido: wallet desconectada", job.id);
            return Some(MintEvent::Failed { id: job.id });
        }
        let certificate = self.certificates.iter_mut().find(|c| c.id == job.id)?;
        certificate.earned = true;
        certificate.earned_date = Some(today);
        log::info!("Certificado {} minteado ({})", job.id, job.metadata.name);
        Some(MintEvent::Succeeded { id: job.id })
    }

    pub fn cancel_mint(&mut self) {
        if let Some(job) = self.minting.take() {
            log::debug!("Minteo de {} cancelado", job.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(id: &str, category: Category, completed: u32, score: u32, earned: bool, rarity: Rarity) -> Certificate {
        Certificate {
            id: id.into(),
            category,
            requirements: Requirements {
                completed_quizzes: completed,
                total_quizzes: completed + 3,
                minimum_score: score,
            },
            design: CertificateDesign {
                background: [0, 0, 0],
                icon: "📘".into(),
            },
            earned,
            earned_date: None,
            rarity,
        }
    }

    fn gallery() -> CertificateGallery {
        let progress = HashMap::from([
            (Category::BlockchainBasics, CategoryProgress { completed: 12, score: 85 }),
            (Category::SolanaFundamentals, CategoryProgress { completed: 10, score: 82 }),
            (Category::DefiProtocols, CategoryProgress { completed: 8, score: 88 }),
            (Category::NftTokens, CategoryProgress { completed: 6, score: 91 }),
        ]);
        CertificateGallery::new(CertificateCatalogue {
            certificates: vec![
                cert("basics", Category::BlockchainBasics, 12, 80, true, Rarity::Common),
                cert("solana", Category::SolanaFundamentals, 10, 80, false, Rarity::Rare),
                cert("defi", Category::DefiProtocols, 14, 90, false, Rarity::Epic),
                cert("nft", Category::NftTokens, 10, 95, false, Rarity::Legendary),
            ],
            progress,
        })
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn eligibility_needs_both_thresholds() {
        let g = gallery();
        assert!(g.is_eligible(g.get("basics").unwrap()));
        assert!(g.is_eligible(g.get("solana").unwrap()));
        assert!(!g.is_eligible(g.get("defi").unwrap()));
        assert!(!g.can_claim(g.get("basics").unwrap()));
        assert!(g.can_claim(g.get("solana").unwrap()));
    }

    #[test]
    fn counters() {
        let g = gallery();
        assert_eq!(
            g.counts(),
            GalleryCounts {
                earned: 1,
                ready: 1,
                in_progress: 2,
                legendary: 0
            }
        );
    }

    #[test]
    fn mint_is_refused_when_not_allowed() {
        let mut g = gallery();
        let key = Some(PublicKey::new([9; 32]));
        assert_eq!(g.start_mint("solana", None, "n", "d", 0.0, day()), Err(MintRefusal::NotConnected));
        assert_eq!(g.start_mint("basics", key, "n", "d", 0.0, day()), Err(MintRefusal::AlreadyEarned));
        assert_eq!(g.start_mint("defi", key, "n", "d", 0.0, day()), Err(MintRefusal::NotEligible));
        assert_eq!(g.start_mint("nope", key, "n", "d", 0.0, day()), Err(MintRefusal::Unknown));
        assert!(!g.any_minting());
    }

    #[test]
    fn mint_completes_after_delay() {
        let mut g = gallery();
        let key = Some(PublicKey::new([9; 32]));
        g.start_mint("solana", key, "Solana Pioneer", "d", 10.0, day()).unwrap();
        assert!(g.is_minting("solana"));
        assert_eq!(g.start_mint("solana", key, "n", "d", 10.5, day()), Err(MintRefusal::Busy));

        assert_eq!(g.poll_mint(12.9, day(), true), None);
        assert_eq!(
            g.poll_mint(13.0, day(), true),
            Some(MintEvent::Succeeded { id: "solana".into() })
        );
        let c = g.get("solana").unwrap();
        assert!(c.earned);
        assert_eq!(c.earned_date, Some(day()));
        assert_eq!(g.counts().earned, 2);
        assert!(!g.any_minting());
    }

    #[test]
    fn disconnect_during_mint_fails_it() {
        let mut g = gallery();
        g.start_mint("solana", Some(PublicKey::new([9; 32])), "n", "d", 0.0, day())
            .unwrap();
        assert_eq!(
            g.poll_mint(1.0, day(), false),
            Some(MintEvent::Failed { id: "solana".into() })
        );
        assert!(!g.get("solana").unwrap().earned);
    }

    #[test]
    fn metadata_has_the_four_attributes() {
        let g = gallery();
        let key = PublicKey::new([9; 32]);
        let meta = NftMetadata::build(g.get("nft").unwrap(), "NFT Master", "d", key, day());
        assert_eq!(meta.image, "https://via.placeholder.com/400x400/6366f1/ffffff?text=NFT%20Master");
        let traits: Vec<_> = meta.attributes.iter().map(|a| a.trait_type).collect();
        assert_eq!(traits, ["Category", "Rarity", "Completion Date", "Earned By"]);
        assert_eq!(meta.attributes[0].value, "nft-tokens");
        assert_eq!(meta.attributes[2].value, "2025-03-01");
        assert!(meta.attributes[3].value.ends_with("..."));
        assert_eq!(meta.attributes[3].value.len(), 11);
    }

    #[test]
    fn image_url_escapes_like_encode_uri_component() {
        let g = gallery();
        let key = PublicKey::new([9; 32]);
        let meta = NftMetadata::build(g.get("nft").unwrap(), "DeFi & NFT (ja: 証明)", "d", key, day());
        assert!(meta.image.ends_with("?text=DeFi%20%26%20NFT%20(ja%3A%20%E8%A8%BC%E6%98%8E)"));
    }
}
