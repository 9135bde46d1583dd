pub mod assertion;
pub mod authenticator_data;
pub mod client_data;

pub use assertion::{sign_assertion, signed_data, verify_assertion};
pub use client_data::{CeremonyType, ClientData, build_client_data_json};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}
