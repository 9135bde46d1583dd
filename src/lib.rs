//! Software WebAuthn authenticator core.
//!
//! Lets a host act as a virtual security key: credential identifiers
//! ([`credential::CredentialId`]), P-256 key pairs
//! ([`credential::generate_key_pair`]), canonical `clientDataJSON`
//! ([`webauthn::build_client_data_json`]) and assertion signatures
//! ([`webauthn::sign_assertion`]). All cryptography goes through an injected
//! [`provider::CryptoProvider`].

pub mod authenticator;
pub mod config;
pub mod credential;
pub mod error;
pub mod provider;
pub mod webauthn;

pub(crate) mod cli;

pub use authenticator::{Assertion, Authenticator, CeremonyRequest, Registration};
pub use error::{Error, Result};

pub async fn run(cfg: config::Config) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    let level = match cfg.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();

    let provider = provider::SoftwareProvider::new()
        .map_err(|e| anyhow::anyhow!("no usable randomness source: {e}"))?;
    let authenticator = Authenticator::new(std::sync::Arc::new(provider));

    for line in cli::execute(cfg.command, &authenticator).await? {
        println!("{line}");
    }
    Ok(())
}
