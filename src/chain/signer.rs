//! Local signature provider.
//!
//! Holds private keys supplied at runtime. Keys are checked for shape only and
//! are never printed, logged, or serialized.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

const K1_PREFIX: &str = "PVT_K1_";
/// Version byte, 32-byte secret, 4-byte checksum.
const LEGACY_WIF_BYTES: usize = 37;
const LEGACY_WIF_VERSION: u8 = 0x80;
/// 32-byte secret, 4-byte checksum.
const K1_BYTES: usize = 36;

/// A private key that redacts itself in `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(Arc<str>);

impl PrivateKey {
    /// Parse a key in legacy WIF or `PVT_K1_` form.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidPrivateKey("key is empty"));
        }

        if let Some(body) = raw.strip_prefix(K1_PREFIX) {
            let bytes = decode_base58(body)?;
            if bytes.len() != K1_BYTES {
                return Err(Error::InvalidPrivateKey("PVT_K1 key must decode to 36 bytes"));
            }
        } else {
            let bytes = decode_base58(raw)?;
            if bytes.len() != LEGACY_WIF_BYTES {
                return Err(Error::InvalidPrivateKey("WIF key must decode to 37 bytes"));
            }
            if bytes[0] != LEGACY_WIF_VERSION {
                return Err(Error::InvalidPrivateKey("WIF key has wrong version byte"));
            }
        }

        Ok(Self(Arc::from(raw)))
    }

    /// Raw key material. Keep the borrow short.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

// The decode error names the offending character, so it is dropped.
#[allow(clippy::map_err_ignore)]
fn decode_base58(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .into_vec()
        .map_err(|_| Error::InvalidPrivateKey("key is not base58"))
}

/// Holds private keys for signing outgoing transactions.
#[derive(Clone, Default)]
pub struct SignatureProvider {
    keys: Vec<PrivateKey>,
}

impl SignatureProvider {
    /// Build a provider from raw key strings. Fails on the first malformed key.
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keys
            .into_iter()
            .map(|k| PrivateKey::parse(k.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { keys })
    }

    /// A provider with no keys.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PrivateKey> {
        self.keys.iter()
    }
}

impl fmt::Debug for SignatureProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureProvider")
            .field("keys", &self.keys.len())
            .finish()
    }
}
