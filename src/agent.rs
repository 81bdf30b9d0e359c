//! Herramientas on-chain que el tutor puede usar durante la conversación.

use serde_json::{Value, json};
use thiserror::Error;

use crate::llm::{ToolDefinition, ToolExecutor};
use crate::task::BoxedFuture;
use crate::wallet::rpc::{LAMPORTS_PER_SOL, lamports_to_sol};
use crate::wallet::{PublicKey, RpcClient, WalletError};

/// Tope del airdrop de devnet por petición.
pub const MAX_AIRDROP_SOL: f64 = 2.0;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("herramienta desconocida: {0}")]
    UnknownTool(String),
    #[error("argumentos inválidos: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

#[derive(Clone, Debug)]
pub struct AgentToolkit {
    owner: PublicKey,
    rpc: RpcClient,
}

impl AgentToolkit {
    pub fn new(owner: PublicKey, rpc: RpcClient) -> Self {
        Self { owner, rpc }
    }

    fn target(&self, arguments: &Value) -> Result<PublicKey, ToolError> {
        match arguments.get("address").and_then(Value::as_str) {
            Some(address) if !address.trim().is_empty() => address
                .trim()
                .parse()
                .map_err(|_| ToolError::InvalidArguments(format!("dirección inválida: {address}"))),
            _ => Ok(self.owner),
        }
    }
}

fn airdrop_lamports(arguments: &Value) -> Result<u64, ToolError> {
    let sol = arguments
        .get("amount_sol")
        .and_then(Value::as_f64)
        .unwrap_or(1.0);
    if !(sol > 0.0 && sol <= MAX_AIRDROP_SOL) {
        return Err(ToolError::InvalidArguments(format!(
            "amount_sol debe estar entre 0 y {MAX_AIRDROP_SOL}"
        )));
    }
    Ok((sol * LAMPORTS_PER_SOL as f64).round() as u64)
}

impl ToolExecutor for AgentToolkit {
    fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "get_wallet_address",
                description: "Returns the public key of the learner's connected wallet.",
                parameters: json!({"type": "object", "properties": {}}),
            },
            ToolDefinition {
                name: "get_balance",
                description: "Returns the SOL balance of a wallet. Defaults to the learner's wallet.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "address": {"type": "string", "description": "Base58 public key"}
                    }
                }),
            },
            ToolDefinition {
                name: "request_airdrop",
                description: "Requests a devnet SOL airdrop to the learner's wallet.",
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "amount_sol": {"type": "number", "description": "Amount in SOL (max 2)"}
                    }
                }),
            },
        ]
    }

    fn invoke(&self, name: &str, arguments: Value) -> BoxedFuture<Result<String, ToolError>> {
        let owner = self.owner;
        let rpc = self.rpc.clone();
        match name {
            "get_wallet_address" => Box::pin(async move { Ok(owner.to_string()) }),
            "get_balance" => {
                let target = self.target(&arguments);
                Box::pin(async move {
                    let target = target?;
                    let lamports = rpc.get_balance(target).await?;
                    Ok(json!({"address": target.to_string(), "sol": lamports_to_sol(lamports)}).to_string())
                })
            }
            "request_airdrop" => {
                let lamports = airdrop_lamports(&arguments);
                Box::pin(async move {
                    let lamports = lamports?;
                    let sig = rpc.request_airdrop(owner, lamports).await?;
                    log::info!("Airdrop de {} SOL solicitado: {sig}", lamports_to_sol(lamports));
                    Ok(json!({"signature": sig.to_string(), "sol": lamports_to_sol(lamports)}).to_string())
                })
            }
            other => {
                let other = other.to_string();
                Box::pin(async move { Err(ToolError::UnknownTool(other)) })
            }
        }
    }
}
