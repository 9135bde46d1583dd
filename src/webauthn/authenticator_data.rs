use crate::credential::CredentialId;
use crate::provider::{CryptoProvider, DigestAlgorithm, ProviderError, PublicKey};

pub const FLAG_UP: u8 = 0x01;
pub const FLAG_UV: u8 = 0x04;
pub const FLAG_AT: u8 = 0x40;

/// SHA-256 of the relying party id, via `provider`.
pub async fn rp_id_hash<P: CryptoProvider + ?Sized>(
    provider: &P,
    rp_id: &str,
) -> Result<[u8; 32], ProviderError> {
    let hash = provider.digest(DigestAlgorithm::Sha256, rp_id.as_bytes()).await?;
    hash.as_slice()
        .try_into()
        .map_err(|_| ProviderError::Digest(format!("rpIdHash must be 32 bytes, got {}", hash.len())))
}

/// Build authenticatorData for an assertion (no attested credential data).
pub fn build_assertion_auth_data(rp_id_hash: &[u8; 32], flags: u8, sign_count: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(37);
    data.extend_from_slice(rp_id_hash);
    data.push(flags & !FLAG_AT);
    data.extend_from_slice(&sign_count.to_be_bytes());
    data
}

/// Build authenticatorData for registration (AT set, signCount = 0).
pub fn build_registration_auth_data(
    rp_id_hash: &[u8; 32],
    flags: u8,
    credential_id: &CredentialId,
    public_key: &PublicKey,
) -> Result<Vec<u8>, ProviderError> {
    let cose_key = public_key.to_cose_key()?;
    let cred_id = credential_id.as_bytes();
    let cred_id_len = cred_id.len() as u16;
    let mut data = Vec::new();
    data.extend_from_slice(rp_id_hash);
    data.push(flags | FLAG_AT);
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&crate::config::AAGUID);
    data.extend_from_slice(&cred_id_len.to_be_bytes());
    data.extend_from_slice(cred_id);
    data.extend_from_slice(&cose_key);
    Ok(data)
}
