use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::{Builder, Uuid};

use super::FormatError;
use crate::provider::{CryptoProvider, ProviderError};

const HEX_DIGITS: usize = 32;

/// 128-bit credential identifier in RFC 4122 layout.
///
/// Displays as lowercase `8-4-4-4-12` hex; parses from the same form, with or
/// without hyphens, in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CredentialId([u8; 16]);

impl CredentialId {
    /// Draw a fresh version-4 identifier from `provider`.
    pub async fn generate<P: CryptoProvider + ?Sized>(provider: &P) -> Result<Self, ProviderError> {
        let random = provider.random_bytes(16).await?;
        let bytes: [u8; 16] = random.as_slice().try_into().map_err(|_| {
            ProviderError::Entropy(format!("expected 16 random bytes, got {}", random.len()))
        })?;
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Ok(Self(uuid.into_bytes()))
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn parse(identifier: &str) -> Result<Self, FormatError> {
        to_bytes(identifier).map(Self)
    }
}

/// Decode an identifier string into its 16-byte form, left to right.
///
/// Hyphens are ignored wherever they appear; exactly 32 hex digits must remain.
/// Braced and `urn:uuid:` forms are rejected, unlike `Uuid::try_parse`.
pub fn to_bytes(identifier: &str) -> Result<[u8; 16], FormatError> {
    let digits: Vec<char> = identifier.chars().filter(|&c| c != '-').collect();
    if digits.len() != HEX_DIGITS {
        return Err(FormatError::InvalidLength(digits.len()));
    }

    let nibble = |position: usize| -> Result<u8, FormatError> {
        let character = digits[position];
        character
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(FormatError::InvalidHex { position, character })
    };

    let mut out = [0u8; 16];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (nibble(2 * i)? << 4) | nibble(2 * i + 1)?;
    }
    Ok(out)
}

/// Generate a fresh identifier in canonical string form.
pub async fn generate<P: CryptoProvider + ?Sized>(provider: &P) -> Result<String, ProviderError> {
    Ok(CredentialId::generate(provider).await?.to_string())
}

impl std::fmt::Display for CredentialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Uuid::from_bytes(self.0).hyphenated(), f)
    }
}

impl From<CredentialId> for Uuid {
    fn from(id: CredentialId) -> Self {
        Uuid::from_bytes(id.0)
    }
}

impl FromStr for CredentialId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 16]> for CredentialId {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl Serialize for CredentialId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CredentialId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
