use std::sync::Arc;

use crate::credential::Credential;
use crate::error::Result;
use crate::provider::{CryptoProvider, PrivateKey, PublicKey};
use crate::webauthn::authenticator_data::{
    FLAG_UP, build_assertion_auth_data, build_registration_auth_data, rp_id_hash,
};
use crate::webauthn::{CeremonyType, build_client_data_json, sign_assertion, verify_assertion};

/// Ceremony inputs supplied by the calling page.
#[derive(Debug, Clone)]
pub struct CeremonyRequest<'a> {
    pub rp_id: &'a str,
    /// Already base64url-encoded.
    pub challenge: &'a str,
    pub origin: &'a str,
    /// authenticatorData flags; UP is always set.
    pub flags: u8,
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub credential: Credential,
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
}

impl Assertion {
    pub fn verify(&self, public_key: &PublicKey) -> Result<()> {
        verify_assertion(
            public_key,
            &self.authenticator_data,
            &self.client_data_json,
            &self.signature,
        )?;
        Ok(())
    }
}

/// Virtual security key over a shared [`CryptoProvider`].
///
/// Holds no per-credential state; clones share the provider.
pub struct Authenticator<P: ?Sized> {
    provider: Arc<P>,
}

impl<P: ?Sized> Clone for Authenticator<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: CryptoProvider + ?Sized> Authenticator<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Create a credential and the registration-side authenticatorData and
    /// clientDataJSON. No attestation statement is produced.
    pub async fn register(&self, req: &CeremonyRequest<'_>) -> Result<Registration> {
        let credential = Credential::generate(&*self.provider).await?;
        let rp_hash = rp_id_hash(&*self.provider, req.rp_id).await?;
        let authenticator_data = build_registration_auth_data(
            &rp_hash,
            req.flags | FLAG_UP,
            &credential.id,
            &credential.key_pair.public_key,
        )?;
        let client_data_json = build_client_data_json(req.challenge, req.origin, &CeremonyType::Create);
        tracing::info!(rp_id = req.rp_id, credential_id = %credential.id, "Registration prepared");
        Ok(Registration {
            credential,
            authenticator_data,
            client_data_json,
        })
    }

    /// Produce a `webauthn.get` assertion with the given signature counter.
    pub async fn assert(
        &self,
        private_key: &PrivateKey,
        req: &CeremonyRequest<'_>,
        sign_count: u32,
    ) -> Result<Assertion> {
        let rp_hash = rp_id_hash(&*self.provider, req.rp_id).await?;
        let authenticator_data = build_assertion_auth_data(&rp_hash, req.flags | FLAG_UP, sign_count);
        let client_data_json = build_client_data_json(req.challenge, req.origin, &CeremonyType::Get);
        let signature = sign_assertion(
            &*self.provider,
            private_key,
            &authenticator_data,
            &client_data_json,
        )
        .await?;
        tracing::info!(rp_id = req.rp_id, count = sign_count, "Assertion produced");
        Ok(Assertion {
            authenticator_data,
            client_data_json,
            signature,
        })
    }
}
