use crate::authenticator::{Authenticator, CeremonyRequest};
use crate::config::Command;
use crate::credential::{self, Credential};
use crate::error::{Error, Result};
use crate::provider::{CryptoProvider, KeyAlgorithm, PrivateKey};
use crate::webauthn::authenticator_data::FLAG_UV;
use crate::webauthn::{CeremonyType, build_client_data_json};

pub(crate) fn hex(b: &[u8]) -> String {
    b.iter().map(|x| format!("{x:02x}")).collect()
}

pub(crate) fn parse_hex(s: &str) -> Result<Vec<u8>> {
    if !s.is_ascii() || s.len() % 2 != 0 {
        return Err(Error::Input(format!("invalid hex string of length {}", s.len())));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|e| Error::Input(format!("invalid hex at offset {i}: {e}")))
        })
        .collect()
}

/// Run one subcommand, returning the lines it prints.
pub(crate) async fn execute<P: CryptoProvider + ?Sized>(
    command: Command,
    authenticator: &Authenticator<P>,
) -> Result<Vec<String>> {
    let provider = authenticator.provider();
    let lines = match command {
        Command::NewId => {
            let id = credential::CredentialId::generate(provider).await?;
            vec![id.to_string(), hex(id.as_bytes())]
        }
        Command::IdBytes { id } => vec![hex(&credential::id::to_bytes(&id)?)],
        Command::Keygen => {
            let cred = Credential::generate(provider).await?;
            vec![
                format!("id:      {}", cred.id),
                format!("private: {}", hex(cred.key_pair.private_key.as_bytes())),
                format!("public:  {}", hex(cred.key_pair.public_key.as_sec1())),
            ]
        }
        Command::ClientData {
            challenge,
            origin,
            ceremony,
        } => {
            let json = build_client_data_json(&challenge, &origin, &CeremonyType::from(ceremony.as_str()));
            vec![String::from_utf8_lossy(&json).into_owned()]
        }
        Command::Assert {
            key,
            rp_id,
            challenge,
            origin,
            counter,
            uv,
        } => {
            let private_key = PrivateKey::from_bytes(KeyAlgorithm::EcdsaP256, parse_hex(&key)?);
            let req = CeremonyRequest {
                rp_id: &rp_id,
                challenge: &challenge,
                origin: &origin,
                flags: if uv { FLAG_UV } else { 0 },
            };
            let assertion = authenticator.assert(&private_key, &req, counter).await?;
            vec![
                format!("authenticatorData: {}", hex(&assertion.authenticator_data)),
                format!("clientDataJSON:    {}", hex(&assertion.client_data_json)),
                format!("signature:         {}", hex(&assertion.signature)),
            ]
        }
    };
    Ok(lines)
}
