use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;

/// Error de arranque: lo que puede abortar `main` antes de abrir la ventana.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("error de la interfaz: {0}")]
    Ui(#[from] eframe::Error),
}
