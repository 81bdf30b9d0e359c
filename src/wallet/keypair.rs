//! Wallet local con un par de claves ed25519.
//!
//! Con ruta configurada lee un keypair de la CLI de Solana (array JSON de 64
//! bytes); sin ruta genera una clave efímera al conectar.

use std::path::PathBuf;

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

use super::{PublicKey, RpcClient, Signature, Transaction, WalletAdapter, WalletError};
use crate::task::BoxedFuture;

pub struct KeypairWallet {
    path: Option<PathBuf>,
    signing: Option<SigningKey>,
    rpc: RpcClient,
}

impl KeypairWallet {
    pub fn new(path: Option<PathBuf>, rpc: RpcClient) -> Self {
        Self {
            path,
            signing: None,
            rpc,
        }
    }

    fn load(&self) -> Result<SigningKey, WalletError> {
        let Some(path) = &self.path else {
            log::warn!("Sin SOLANA_KEYPAIR_PATH: se usa una clave efímera");
            return Ok(SigningKey::generate(&mut OsRng));
        };
        let keypair_err = |message: String| WalletError::Keypair {
            path: path.display().to_string(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| keypair_err(e.to_string()))?;
        parse_keypair(&raw).map_err(keypair_err)
    }

    fn signer(&self) -> Result<&SigningKey, WalletError> {
        self.signing.as_ref().ok_or(WalletError::NotConnected)
    }
}

pub fn parse_keypair(raw: &str) -> Result<SigningKey, String> {
    let bytes: Vec<u8> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let bytes: [u8; 64] = bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("{} bytes, se esperaban 64", b.len()))?;
    SigningKey::from_keypair_bytes(&bytes).map_err(|e| e.to_string())
}

impl WalletAdapter for KeypairWallet {
    fn name(&self) -> &str {
        "keypair"
    }

    fn connect(&mut self) -> Result<PublicKey, WalletError> {
        let signing = self.load()?;
        let key = PublicKey::new(signing.verifying_key().to_bytes());
        self.signing = Some(signing);
        Ok(key)
    }

    fn disconnect(&mut self) {
        self.signing = None;
    }

    fn public_key(&self) -> Option<PublicKey> {
        self.signing
            .as_ref()
            .map(|s| PublicKey::new(s.verifying_key().to_bytes()))
    }

    fn sign_transaction(&self, mut transaction: Transaction) -> Result<Transaction, WalletError> {
        let signature = self.sign_message(&transaction.message)?;
        let slot = transaction
            .signatures
            .first_mut()
            .ok_or(WalletError::MissingSignerSlot)?;
        *slot = signature;
        Ok(transaction)
    }

    fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        let signer = self.signer()?;
        Ok(Signature::new(signer.sign(message).to_bytes()))
    }

    fn send_transaction(&self, transaction: &Transaction) -> BoxedFuture<Result<Signature, WalletError>> {
        let rpc = self.rpc.clone();
        let transaction = transaction.clone();
        let connected = self.signing.is_some();
        Box::pin(async move {
            if !connected {
                return Err(WalletError::NotConnected);
            }
            let sig = rpc.send_transaction(&transaction).await?;
            log::info!("Transacción enviada: {sig}");
            Ok(sig)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Verifier, VerifyingKey};

    fn wallet() -> KeypairWallet {
        KeypairWallet::new(None, RpcClient::new("http://127.0.0.1:8899"))
    }

    #[test]
    fn signing_requires_connection() {
        let w = wallet();
        assert!(w.public_key().is_none());
        assert!(matches!(w.sign_message(b"hola"), Err(WalletError::NotConnected)));
    }

    #[test]
    fn ephemeral_key_signs_verifiable_messages() {
        let mut w = wallet();
        let key = w.connect().unwrap();
        let sig = w.sign_message(b"hola").unwrap();

        let verifying = VerifyingKey::from_bytes(&key.to_bytes()).unwrap();
        let sig = ed25519_dalek::Signature::from_bytes(&sig.to_bytes());
        assert!(verifying.verify(b"hola", &sig).is_ok());

        w.disconnect();
        assert!(w.public_key().is_none());
    }

    #[test]
    fn signs_payer_slot_of_transaction() {
        let mut w = wallet();
        w.connect().unwrap();
        let tx = Transaction::new_unsigned(vec![1, 2, 3], 2);
        let signed = w.sign_transaction(tx).unwrap();
        assert!(signed.is_signed());
        assert!(signed.signatures[1].is_empty());

        let all = w
            .sign_all_transactions(vec![Transaction::new_unsigned(vec![4], 1); 3])
            .unwrap();
        assert!(all.iter().all(Transaction::is_signed));
    }

    #[test]
    fn parses_cli_keypair_file_format() {
        let signing = SigningKey::generate(&mut OsRng);
        let json = serde_json::to_string(&signing.to_keypair_bytes().to_vec()).unwrap();
        let parsed = parse_keypair(&json).unwrap();
        assert_eq!(parsed.verifying_key(), signing.verifying_key());

        assert!(parse_keypair("[1,2,3]").is_err());
        assert!(parse_keypair("no json").is_err());
    }

    #[test]
    fn unreadable_keypair_file_fails_to_connect() {
        let mut w = KeypairWallet::new(
            Some(PathBuf::from("/nonexistent/id.json")),
            RpcClient::new("http://127.0.0.1:8899"),
        );
        assert!(matches!(w.connect(), Err(WalletError::Keypair { .. })));
    }
}
