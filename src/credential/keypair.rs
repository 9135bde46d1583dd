use serde::{Deserialize, Serialize};

use super::CredentialId;
use crate::provider::{CryptoProvider, KeyAlgorithm, KeyPair, ProviderError};

/// Generate a P-256 signing key pair for a credential.
///
/// Provider failures are returned untouched.
pub async fn generate_key_pair<P: CryptoProvider + ?Sized>(
    provider: &P,
) -> Result<KeyPair, ProviderError> {
    let pair = provider
        .generate_key_pair(KeyAlgorithm::EcdsaP256)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Key pair generation failed"))?;
    tracing::debug!(algorithm = %pair.public_key.algorithm(), "Key pair generated");
    Ok(pair)
}

/// Freshly registered credential: identifier plus the key pair it owns.
///
/// Persisting it is the caller's business; nothing here is mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: CredentialId,
    pub key_pair: KeyPair,
}

impl Credential {
    pub async fn generate<P: CryptoProvider + ?Sized>(provider: &P) -> Result<Self, ProviderError> {
        let id = CredentialId::generate(provider).await?;
        let key_pair = generate_key_pair(provider).await?;
        tracing::info!(credential_id = %id, "Credential created");
        Ok(Self { id, key_pair })
    }
}
