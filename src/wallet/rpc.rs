use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{PublicKey, Signature, Transaction, WalletError};
use crate::http::post_json;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RpcResponse<T> {
    Ok { result: T },
    Err { error: RpcErrorBody },
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

/// Cliente JSON-RPC mínimo de Solana.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcClient {
    url: String,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R, WalletError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response: RpcResponse<R> = post_json(&self.url, None, &body).await?;
        match response {
            RpcResponse::Ok { result } => Ok(result),
            RpcResponse::Err { error } => Err(WalletError::Rpc {
                code: error.code,
                message: error.message,
            }),
        }
    }

    pub async fn get_balance(&self, key: PublicKey) -> Result<u64, WalletError> {
        let balance: WithContext<u64> = self.call("getBalance", json!([key.to_string()])).await?;
        Ok(balance.value)
    }

    pub async fn request_airdrop(&self, key: PublicKey, lamports: u64) -> Result<Signature, WalletError> {
        let sig: String = self
            .call("requestAirdrop", json!([key.to_string(), lamports]))
            .await?;
        sig.parse()
    }

    pub async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, WalletError> {
        let encoded = bs58::encode(transaction.wire_bytes()).into_string();
        let sig: String = self
            .call("sendTransaction", json!([encoded, {"encoding": "base58"}]))
            .await?;
        sig.parse()
    }
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
