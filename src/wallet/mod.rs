//! Sesión de wallet y el contrato que cumple cualquier adaptador.
//!
//! La app sólo ve [`WalletSession`]; el adaptador concreto (por ahora un par
//! de claves ed25519 local) queda detrás de [`WalletAdapter`].

pub mod keypair;
pub mod rpc;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::http::HttpError;
use crate::task::BoxedFuture;

pub use keypair::KeypairWallet;
pub use rpc::RpcClient;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("la wallet no está conectada")]
    NotConnected,
    #[error("no se pudo leer el keypair {path}: {message}")]
    Keypair { path: String, message: String },
    #[error("base58 inválido: {0}")]
    InvalidEncoding(String),
    #[error("la transacción no tiene hueco para la firma de esta wallet")]
    MissingSignerSlot,
    #[error("error RPC {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// `AbCd...WxYz`, como se muestra en la cabecera.
    pub fn short(&self) -> String {
        shorten(&self.to_string())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

impl FromStr for PublicKey {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<32>(s).map(Self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn new(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(self) -> [u8; 64] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self([0; 64])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}

impl FromStr for Signature {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed::<64>(s).map(Self)
    }
}

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], WalletError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|err| WalletError::InvalidEncoding(err.to_string()))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| WalletError::InvalidEncoding(format!("{} bytes, se esperaban {N}", b.len())))
}

pub fn shorten(address: &str) -> String {
    if address.chars().count() <= 8 {
        return address.to_string();
    }
    let head: String = address.chars().take(4).collect();
    let tail: String = address
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{head}...{tail}")
}

/// Transacción opaca: firmas + mensaje ya serializado.
///
/// La app no construye mensajes; sólo los firma y los envía. La firma del
/// pagador (esta wallet) va en la posición 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub signatures: Vec<Signature>,
    pub message: Vec<u8>,
}

impl Transaction {
    pub fn new_unsigned(message: Vec<u8>, required_signatures: usize) -> Self {
        Self {
            signatures: vec![Signature::default(); required_signatures.max(1)],
            message,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signatures.first().is_some_and(|s| !s.is_empty())
    }

    /// Formato de red: número de firmas (short-vec), firmas, mensaje.
    pub fn wire_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(3 + self.signatures.len() * 64 + self.message.len());
        encode_short_vec_len(self.signatures.len(), &mut out);
        for sig in &self.signatures {
            out.extend_from_slice(&sig.0);
        }
        out.extend_from_slice(&self.message);
        out
    }
}

fn encode_short_vec_len(mut len: usize, out: &mut Vec<u8>) {
    loop {
        let mut byte = (len & 0x7f) as u8;
        len >>= 7;
        if len == 0 {
            out.push(byte);
            return;
        }
        byte |= 0x80;
        out.push(byte);
    }
}

pub trait WalletAdapter: Send + Sync {
    fn name(&self) -> &str;
    fn connect(&mut self) -> Result<PublicKey, WalletError>;
    fn disconnect(&mut self);
    fn public_key(&self) -> Option<PublicKey>;
    fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, WalletError>;
    fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError>;
    fn send_transaction(&self, transaction: &Transaction) -> BoxedFuture<Result<Signature, WalletError>>;

    fn sign_all_transactions(
        &self,
        transactions: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, WalletError> {
        transactions
            .into_iter()
            .map(|tx| self.sign_transaction(tx))
            .collect()
    }

    fn sign_and_send_transaction(
        &self,
        transaction: Transaction,
    ) -> BoxedFuture<Result<Signature, WalletError>> {
        match self.sign_transaction(transaction) {
            Ok(signed) => self.send_transaction(&signed),
            Err(err) => Box::pin(async move { Err(err) }),
        }
    }
}

/// Estado de conexión que la app pasa a las vistas.
pub struct WalletSession {
    adapter: Box<dyn WalletAdapter>,
}

impl WalletSession {
    pub fn new(adapter: Box<dyn WalletAdapter>) -> Self {
        Self { adapter }
    }

    pub fn connected(&self) -> bool {
        self.adapter.public_key().is_some()
    }

    pub fn public_key(&self) -> Option<PublicKey> {
        self.adapter.public_key()
    }

    pub fn address(&self) -> Option<String> {
        self.public_key().map(|k| k.to_string())
    }

    pub fn short_address(&self) -> Option<String> {
        self.public_key().map(|k| k.short())
    }

    pub fn connect(&mut self) -> Result<PublicKey, WalletError> {
        if let Some(key) = self.adapter.public_key() {
            return Ok(key);
        }
        let key = self.adapter.connect()?;
        log::info!("Wallet {} conectada: {key}", self.adapter.name());
        Ok(key)
    }

    pub fn disconnect(&mut self) {
        if self.connected() {
            log::info!("Wallet {} desconectada", self.adapter.name());
        }
        self.adapter.disconnect();
    }

    pub fn adapter(&self) -> &dyn WalletAdapter {
        self.adapter.as_ref()
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Adaptador en memoria: conecta a una clave fija o falla a propósito.
    pub struct FakeWallet {
        pub key: PublicKey,
        pub fail_connect: bool,
        connected: bool,
    }

    impl FakeWallet {
        pub fn new(fail_connect: bool) -> Self {
            Self {
                key: PublicKey::new([7; 32]),
                fail_connect,
                connected: false,
            }
        }
    }

    impl WalletAdapter for FakeWallet {
        fn name(&self) -> &str {
            "fake"
        }

        fn connect(&mut self) -> Result<PublicKey, WalletError> {
            if self.fail_connect {
                return Err(WalletError::NotConnected);
            }
            self.connected = true;
            Ok(self.key)
        }

        fn disconnect(&mut self) {
            self.connected = false;
        }

        fn public_key(&self) -> Option<PublicKey> {
            self.connected.then_some(self.key)
        }

        fn sign_transaction(&self, mut tx: Transaction) -> Result<Transaction, WalletError> {
            tx.signatures[0] = Signature::new([1; 64]);
            Ok(tx)
        }

        fn sign_message(&self, _: &[u8]) -> Result<Signature, WalletError> {
            Ok(Signature::new([1; 64]))
        }

        fn send_transaction(&self, tx: &Transaction) -> BoxedFuture<Result<Signature, WalletError>> {
            let sig = tx.signatures[0];
            Box::pin(async move { Ok(sig) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeWallet;
    use super::*;

    #[test]
    fn public_key_round_trips_through_base58() {
        let key = PublicKey::new([42; 32]);
        let text = key.to_string();
        assert_eq!(text.parse::<PublicKey>().unwrap(), key);
        assert!("abc".parse::<PublicKey>().is_err());
        assert!("0OIl".parse::<PublicKey>().is_err());
    }

    #[test]
    fn short_address_keeps_both_ends() {
        assert_eq!(shorten("7Kf8abcdefghij9Nw3"), "7Kf8...9Nw3");
        assert_eq!(shorten("short"), "short");
    }

    #[test]
    fn short_vec_length_prefix() {
        let mut out = Vec::new();
        encode_short_vec_len(1, &mut out);
        assert_eq!(out, [1]);
        out.clear();
        encode_short_vec_len(0x80, &mut out);
        assert_eq!(out, [0x80, 0x01]);
        out.clear();
        encode_short_vec_len(0x3fff, &mut out);
        assert_eq!(out, [0xff, 0x7f]);
    }

    #[test]
    fn wire_bytes_put_signatures_before_message() {
        let tx = Transaction::new_unsigned(vec![9, 9, 9], 1);
        let bytes = tx.wire_bytes();
        assert_eq!(bytes.len(), 1 + 64 + 3);
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[65..], &[9, 9, 9]);
        assert!(!tx.is_signed());
    }

    #[test]
    fn session_reflects_adapter_connection() {
        let mut session = WalletSession::new(Box::new(FakeWallet::new(false)));
        assert!(!session.connected());
        assert_eq!(session.short_address(), None);

        let key = session.connect().unwrap();
        assert!(session.connected());
        assert_eq!(session.public_key(), Some(key));

        let signed = session
            .adapter()
            .sign_all_transactions(vec![Transaction::new_unsigned(vec![3], 1)])
            .unwrap();
        assert!(signed[0].is_signed());

        session.disconnect();
        assert!(!session.connected());
    }

    #[test]
    fn failed_connect_leaves_session_disconnected() {
        let mut session = WalletSession::new(Box::new(FakeWallet::new(true)));
        assert!(session.connect().is_err());
        assert!(!session.connected());
    }

    #[test]
    fn sign_and_send_signs_first() {
        let wallet = FakeWallet::new(false);
        let tx = Transaction::new_unsigned(vec![1], 1);
        let sig = futures::executor::block_on(wallet.sign_and_send_transaction(tx)).unwrap();
        assert_eq!(sig, Signature::new([1; 64]));
    }
}
