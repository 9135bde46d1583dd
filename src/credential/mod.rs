pub mod id;
pub mod keypair;

pub use id::CredentialId;
pub use keypair::{Credential, generate_key_pair};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("credential id must have 32 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("credential id has non-hex character {character:?} at digit {position}")]
    InvalidHex { position: usize, character: char },
}
