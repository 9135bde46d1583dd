#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("credential id: {0}")]
    Format(#[from] crate::credential::FormatError),
    #[error("crypto provider: {0}")]
    Provider(#[from] crate::provider::ProviderError),
    #[error("verification: {0}")]
    Verify(#[from] crate::webauthn::VerifyError),
    #[error("{0}")]
    Input(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
