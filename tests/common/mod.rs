#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use softkey::provider::{
    CryptoProvider, DigestAlgorithm, KeyAlgorithm, KeyPair, PrivateKey, ProviderError, PublicKey,
    SignatureAlgorithm, SoftwareProvider,
};

/// Software provider that records every digest and sign input along with the
/// algorithm it was requested under.
pub struct RecordingProvider {
    inner: SoftwareProvider,
    pub digests: Mutex<Vec<(DigestAlgorithm, Vec<u8>)>>,
    pub signed: Mutex<Vec<(SignatureAlgorithm, Vec<u8>)>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            inner: SoftwareProvider::new().expect("OS randomness available"),
            digests: Mutex::new(Vec::new()),
            signed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CryptoProvider for RecordingProvider {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, ProviderError> {
        self.inner.random_bytes(len).await
    }

    async fn digest(&self, alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        self.digests.lock().unwrap().push((alg, data.to_vec()));
        self.inner.digest(alg, data).await
    }

    async fn generate_key_pair(&self, alg: KeyAlgorithm) -> Result<KeyPair, ProviderError> {
        self.inner.generate_key_pair(alg).await
    }

    async fn sign(
        &self,
        alg: SignatureAlgorithm,
        key: &PrivateKey,
        data: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        self.signed.lock().unwrap().push((alg, data.to_vec()));
        self.inner.sign(alg, key, data).await
    }
}

pub const MOCK_SIGNATURE: [u8; 64] = [0x5Au8; 64];

/// MOCK provider: deterministic counter bytes instead of randomness, a fixed
/// 64-byte signature, placeholder key handles. Never use outside tests.
pub struct MockProvider {
    counter: Mutex<u8>,
    pub signed: Mutex<Vec<Vec<u8>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            counter: Mutex::new(0),
            signed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CryptoProvider for MockProvider {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, ProviderError> {
        let mut counter = self.counter.lock().unwrap();
        Ok((0..len)
            .map(|_| {
                *counter = counter.wrapping_add(1);
                *counter
            })
            .collect())
    }

    async fn digest(&self, _alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Ok(Sha256::digest(data).to_vec())
    }

    async fn generate_key_pair(&self, alg: KeyAlgorithm) -> Result<KeyPair, ProviderError> {
        Ok(KeyPair {
            private_key: PrivateKey::from_bytes(alg, b"mock-private".to_vec()),
            public_key: PublicKey::from_sec1(alg, b"mock-public".to_vec()),
        })
    }

    async fn sign(
        &self,
        _alg: SignatureAlgorithm,
        _key: &PrivateKey,
        data: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        self.signed.lock().unwrap().push(data.to_vec());
        Ok(MOCK_SIGNATURE.to_vec())
    }
}

/// Provider whose every operation fails with the configured error.
pub struct FailingProvider {
    pub error: ProviderError,
}

#[async_trait]
impl CryptoProvider for FailingProvider {
    async fn random_bytes(&self, _len: usize) -> Result<Vec<u8>, ProviderError> {
        Err(self.error.clone())
    }

    async fn digest(&self, _alg: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Err(self.error.clone())
    }

    async fn generate_key_pair(&self, _alg: KeyAlgorithm) -> Result<KeyPair, ProviderError> {
        Err(self.error.clone())
    }

    async fn sign(
        &self,
        _alg: SignatureAlgorithm,
        _key: &PrivateKey,
        _data: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        Err(self.error.clone())
    }
}

/// Delegates digests to software, fails only at signing.
pub struct SignRejectingProvider {
    pub error: ProviderError,
}

#[async_trait]
impl CryptoProvider for SignRejectingProvider {
    async fn random_bytes(&self, _len: usize) -> Result<Vec<u8>, ProviderError> {
        Err(self.error.clone())
    }

    async fn digest(&self, _alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        Ok(Sha256::digest(data).to_vec())
    }

    async fn generate_key_pair(&self, _alg: KeyAlgorithm) -> Result<KeyPair, ProviderError> {
        Err(ProviderError::UnsupportedAlgorithm("not used".into()))
    }

    async fn sign(
        &self,
        _alg: SignatureAlgorithm,
        _key: &PrivateKey,
        _data: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        Err(self.error.clone())
    }
}
