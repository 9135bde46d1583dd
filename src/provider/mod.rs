//! Cryptographic provider capability.
//!
//! Every random byte, digest, key and signature used by the authenticator is
//! obtained through a [`CryptoProvider`]. The crate ships [`SoftwareProvider`];
//! hosts with a platform keystore (or tests) supply their own implementation.

pub mod keys;
pub mod software;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use software::SoftwareProvider;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("entropy source failure: {0}")]
    Entropy(String),
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("digest failure: {0}")]
    Digest(String),
    #[error("signature failure: {0}")]
    Signature(String),
    #[error("provider error: {0}")]
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DigestAlgorithm {
    Sha256,
}

impl DigestAlgorithm {
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
        }
    }
}

/// Curve a key pair lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyAlgorithm {
    /// NIST P-256 (secp256r1), signing only.
    EcdsaP256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SignatureAlgorithm {
    /// ECDSA over P-256 with SHA-256, DER-encoded `(r, s)`.
    EcdsaP256Sha256,
}

impl SignatureAlgorithm {
    /// COSE algorithm identifier (ES256 = -7).
    pub fn cose_id(self) -> i64 {
        match self {
            Self::EcdsaP256Sha256 => -7,
        }
    }

    pub fn key_algorithm(self) -> KeyAlgorithm {
        match self {
            Self::EcdsaP256Sha256 => KeyAlgorithm::EcdsaP256,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha256 => f.write_str("SHA-256"),
        }
    }
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EcdsaP256 => f.write_str("P-256"),
        }
    }
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EcdsaP256Sha256 => f.write_str("ES256"),
        }
    }
}

/// Source of randomness, digests, key generation and signing.
///
/// Implementations must be safe to share between concurrent ceremonies.
/// Errors are reported as-is; callers decide whether to retry.
#[async_trait::async_trait]
pub trait CryptoProvider: Send + Sync {
    /// Fill `len` bytes from a cryptographically secure source.
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, ProviderError>;

    async fn digest(&self, alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError>;

    async fn generate_key_pair(&self, alg: KeyAlgorithm) -> Result<KeyPair, ProviderError>;

    /// Sign `data`. The provider hashes `data` as part of `alg`.
    async fn sign(
        &self,
        alg: SignatureAlgorithm,
        key: &PrivateKey,
        data: &[u8],
    ) -> Result<Vec<u8>, ProviderError>;
}

#[async_trait::async_trait]
impl<P: CryptoProvider + ?Sized> CryptoProvider for Arc<P> {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, ProviderError> {
        (**self).random_bytes(len).await
    }

    async fn digest(&self, alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        (**self).digest(alg, data).await
    }

    async fn generate_key_pair(&self, alg: KeyAlgorithm) -> Result<KeyPair, ProviderError> {
        (**self).generate_key_pair(alg).await
    }

    async fn sign(
        &self,
        alg: SignatureAlgorithm,
        key: &PrivateKey,
        data: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        (**self).sign(alg, key, data).await
    }
}
