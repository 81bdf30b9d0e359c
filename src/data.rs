// src/data.rs

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::certificates::CertificateCatalogue;
use crate::dashboard::DashboardSeed;
use crate::leaderboard::LeaderboardSeed;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no se pudo parsear {file}: {source}")]
    Yaml {
        file: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Datos de ejemplo embebidos en el binario.
#[derive(Clone, Debug, PartialEq)]
pub struct MockData {
    pub dashboard: DashboardSeed,
    pub leaderboard: LeaderboardSeed,
    pub certificates: CertificateCatalogue,
}

fn parse<T: DeserializeOwned>(file: &'static str, content: &str) -> Result<T, DataError> {
    serde_yaml::from_str(content).map_err(|source| DataError::Yaml { file, source })
}

pub fn read_mock_data() -> Result<MockData, DataError> {
    Ok(MockData {
        dashboard: parse("dashboard.yaml", include_str!("data/dashboard.yaml"))?,
        leaderboard: parse("leaderboard.yaml", include_str!("data/leaderboard.yaml"))?,
        certificates: parse("certificates.yaml", include_str!("data/certificates.yaml"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificates::{CertificateGallery, Rarity};
    use crate::error::AppError;
    use crate::model::Category;

    fn load_for_main(raw: &str) -> Result<DashboardSeed, AppError> {
        Ok(parse("dashboard.yaml", raw)?)
    }

    #[test]
    fn broken_yaml_aborts_startup_naming_the_file() {
        let err = load_for_main("level: [").unwrap_err();
        assert!(matches!(err, AppError::Data(DataError::Yaml { file: "dashboard.yaml", .. })));
        assert!(err.to_string().contains("dashboard.yaml"));
    }

    #[test]
    fn embedded_data_parses() {
        let data = read_mock_data().unwrap();
        assert_eq!(data.leaderboard.players.len(), 5);
        assert_eq!(data.leaderboard.current_user.total_points, 8750);
        assert_eq!(data.dashboard.categories.len(), 4);
        assert_eq!(data.dashboard.achievements.len(), 4);
        assert_eq!(data.certificates.certificates.len(), 4);
        assert_eq!(data.certificates.progress.len(), 4);
    }

    #[test]
    fn shipped_progress_and_catalogue() {
        let data = read_mock_data().unwrap();
        let basics = data.certificates.progress[&Category::BlockchainBasics];
        assert_eq!((basics.completed, basics.score), (12, 85));

        let gallery = CertificateGallery::new(data.certificates);
        let legendary = gallery
            .certificates()
            .iter()
            .find(|c| c.rarity == Rarity::Legendary)
            .unwrap();
        assert_eq!(legendary.category, Category::NftTokens);
        assert!(gallery.certificates()[0].earned);
        assert!(gallery.certificates()[0].earned_date.is_some());
    }

    #[test]
    fn bad_yaml_reports_file_name() {
        let err = parse::<DashboardSeed>("roto.yaml", "dashboard: [").unwrap_err();
        assert!(err.to_string().contains("roto.yaml"));
    }
}
