//! Configuración leída del entorno al arrancar.
//!
//! En nativo se carga antes un `.env` (si existe) con `dotenv`; en WASM no hay
//! entorno de proceso, así que los valores se fijan en tiempo de compilación.

use thiserror::Error;

pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("falta la variable de entorno obligatoria {0}")]
    Missing(&'static str),
    #[error("la variable {name} no es una URL http(s): {value}")]
    InvalidUrl { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub rpc_url: String,
    pub llm: LlmConfig,
    pub keypair_path: Option<String>,
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            log::info!("Variables cargadas desde .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| {
            let value = match name {
                "SOLANA_RPC_URL" => option_env!("SOLANA_RPC_URL"),
                "LLM_ENDPOINT" => option_env!("LLM_ENDPOINT"),
                "LLM_MODEL" => option_env!("LLM_MODEL"),
                "OPENAI_API_KEY" => option_env!("OPENAI_API_KEY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Construye la configuración a partir de una función de búsqueda
    /// (el entorno real o un mapa en los tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let rpc_url = get("SOLANA_RPC_URL").ok_or(ConfigError::Missing("SOLANA_RPC_URL"))?;
        check_url("SOLANA_RPC_URL", &rpc_url)?;

        let endpoint = get("LLM_ENDPOINT").unwrap_or_else(|| DEFAULT_LLM_ENDPOINT.to_string());
        check_url("LLM_ENDPOINT", &endpoint)?;

        Ok(Self {
            rpc_url,
            llm: LlmConfig {
                endpoint,
                model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
                api_key: get("OPENAI_API_KEY"),
                temperature: DEFAULT_TEMPERATURE,
            },
            keypair_path: get("SOLANA_KEYPAIR_PATH"),
        })
    }
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        })
    }
}
