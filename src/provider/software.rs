use p256::ecdsa::signature::Signer as _;
use p256::ecdsa::{Signature, SigningKey};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use super::{
    CryptoProvider, DigestAlgorithm, KeyAlgorithm, KeyPair, PrivateKey, ProviderError, PublicKey,
    SignatureAlgorithm,
};

/// In-process provider: P-256 keys held as raw scalars, randomness from the
/// operating system.
#[derive(Debug, Clone)]
pub struct SoftwareProvider {
    _private: (),
}

impl SoftwareProvider {
    /// Probe the OS randomness source once. A host without one cannot run an
    /// authenticator at all, so this is the only place entropy absence is
    /// detected.
    pub fn new() -> Result<Self, ProviderError> {
        let mut probe = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| ProviderError::Entropy(e.to_string()))?;
        tracing::debug!("OS randomness source available");
        Ok(Self { _private: () })
    }
}

fn load_signing_key(key: &PrivateKey) -> Result<SigningKey, ProviderError> {
    if key.algorithm() != KeyAlgorithm::EcdsaP256 {
        return Err(ProviderError::InvalidKey(format!(
            "expected a P-256 key, got {}",
            key.algorithm()
        )));
    }
    SigningKey::from_slice(key.as_bytes()).map_err(|e| ProviderError::InvalidKey(e.to_string()))
}

#[async_trait::async_trait]
impl CryptoProvider for SoftwareProvider {
    async fn random_bytes(&self, len: usize) -> Result<Vec<u8>, ProviderError> {
        let mut buf = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| ProviderError::Entropy(e.to_string()))?;
        Ok(buf)
    }

    async fn digest(&self, alg: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, ProviderError> {
        match alg {
            DigestAlgorithm::Sha256 => Ok(Sha256::digest(data).to_vec()),
        }
    }

    async fn generate_key_pair(&self, alg: KeyAlgorithm) -> Result<KeyPair, ProviderError> {
        match alg {
            KeyAlgorithm::EcdsaP256 => {
                let signing_key = SigningKey::random(&mut OsRng);
                let public = signing_key.verifying_key().to_encoded_point(false);
                Ok(KeyPair {
                    private_key: PrivateKey::from_bytes(alg, signing_key.to_bytes().to_vec()),
                    public_key: PublicKey::from_sec1(alg, public.as_bytes().to_vec()),
                })
            }
        }
    }

    async fn sign(
        &self,
        alg: SignatureAlgorithm,
        key: &PrivateKey,
        data: &[u8],
    ) -> Result<Vec<u8>, ProviderError> {
        match alg {
            SignatureAlgorithm::EcdsaP256Sha256 => {
                let signing_key = load_signing_key(key)?;
                let signature: Signature = signing_key
                    .try_sign(data)
                    .map_err(|e| ProviderError::Signature(e.to_string()))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }
}
