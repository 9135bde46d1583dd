use p256::ecdsa::signature::Verifier as _;
use p256::ecdsa::{DerSignature, VerifyingKey};
use sha2::{Digest, Sha256};

use super::VerifyError;
use crate::provider::{CryptoProvider, DigestAlgorithm, PrivateKey, ProviderError, PublicKey, SignatureAlgorithm};

/// `authenticatorData || clientDataHash`, no separator or length prefix.
pub fn signed_data(authenticator_data: &[u8], client_data_hash: &[u8]) -> Vec<u8> {
    let mut to_sign = Vec::with_capacity(authenticator_data.len() + client_data_hash.len());
    to_sign.extend_from_slice(authenticator_data);
    to_sign.extend_from_slice(client_data_hash);
    to_sign
}

/// Produce the assertion signature a relying party verifies.
///
/// Hashes `client_data_json` with SHA-256, appends the hash to
/// `authenticator_data`, and has the provider sign the result with ES256.
/// The provider's signature bytes are returned as they come back (DER for
/// [`crate::provider::SoftwareProvider`]). Nothing is retried.
pub async fn sign_assertion<P: CryptoProvider + ?Sized>(
    provider: &P,
    private_key: &PrivateKey,
    authenticator_data: &[u8],
    client_data_json: &[u8],
) -> Result<Vec<u8>, ProviderError> {
    let alg = DigestAlgorithm::Sha256;
    let client_data_hash = provider
        .digest(alg, client_data_json)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "clientDataJSON digest failed"))?;
    if client_data_hash.len() != alg.output_len() {
        return Err(ProviderError::Digest(format!(
            "{alg} digest must be {} bytes, got {}",
            alg.output_len(),
            client_data_hash.len()
        )));
    }

    let to_sign = signed_data(authenticator_data, &client_data_hash);
    let signature = provider
        .sign(SignatureAlgorithm::EcdsaP256Sha256, private_key, &to_sign)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Assertion signing failed"))?;
    tracing::debug!(
        signed_len = to_sign.len(),
        sig_len = signature.len(),
        "Assertion signed"
    );
    Ok(signature)
}

/// Check an assertion the way a relying party would.
pub fn verify_assertion(
    public_key: &PublicKey,
    authenticator_data: &[u8],
    client_data_json: &[u8],
    signature: &[u8],
) -> Result<(), VerifyError> {
    let key = VerifyingKey::from_sec1_bytes(public_key.as_sec1())
        .map_err(|e| VerifyError::InvalidPublicKey(e.to_string()))?;
    let client_data_hash = Sha256::digest(client_data_json);
    let to_verify = signed_data(authenticator_data, &client_data_hash);
    let der = DerSignature::from_bytes(signature)
        .map_err(|e| VerifyError::InvalidSignature(e.to_string()))?;
    key.verify(&to_verify, &der)
        .map_err(|e| VerifyError::InvalidSignature(e.to_string()))
}
