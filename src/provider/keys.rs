use ciborium::value::Value;
use serde::{Deserialize, Serialize};

use super::{KeyAlgorithm, ProviderError, SignatureAlgorithm};

/// Private half of a credential key pair.
///
/// The bytes are whatever the issuing provider needs to find the key again:
/// the raw 32-byte scalar for [`super::SoftwareProvider`], a wrapped blob or
/// keystore reference for hardware-backed providers.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    algorithm: KeyAlgorithm,
    bytes: Vec<u8>,
}

impl PrivateKey {
    pub fn from_bytes(algorithm: KeyAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .field("bytes", &"<redacted>")
            .finish()
    }
}

/// Public half of a credential key pair, as an uncompressed SEC1 point
/// (`0x04 || x || y`, 65 bytes for P-256).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    algorithm: KeyAlgorithm,
    sec1: Vec<u8>,
}

impl PublicKey {
    pub fn from_sec1(algorithm: KeyAlgorithm, sec1: Vec<u8>) -> Self {
        Self { algorithm, sec1 }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn as_sec1(&self) -> &[u8] {
        &self.sec1
    }

    /// Extract the affine (x, y) coordinates.
    pub fn coordinates(&self) -> Result<([u8; 32], [u8; 32]), ProviderError> {
        match (self.sec1.first(), self.sec1.len()) {
            (Some(0x04), 65) => {
                let mut x = [0u8; 32];
                let mut y = [0u8; 32];
                x.copy_from_slice(&self.sec1[1..33]);
                y.copy_from_slice(&self.sec1[33..65]);
                Ok((x, y))
            }
            _ => Err(ProviderError::InvalidKey(format!(
                "expected 65-byte uncompressed P-256 point, got {} bytes",
                self.sec1.len()
            ))),
        }
    }

    /// Encode as a COSE_Key CBOR map (kty=2, alg=-7, crv=1, x, y) for
    /// attested credential data.
    pub fn to_cose_key(&self) -> Result<Vec<u8>, ProviderError> {
        let (x, y) = self.coordinates()?;
        Ok(encode_cose_key(&x, &y))
    }
}

fn encode_cose_key(x: &[u8; 32], y: &[u8; 32]) -> Vec<u8> {
    let alg = SignatureAlgorithm::EcdsaP256Sha256.cose_id();
    let map = Value::Map(vec![
        (Value::Integer(1i64.into()), Value::Integer(2i64.into())),
        (Value::Integer(3i64.into()), Value::Integer(alg.into())),
        (Value::Integer((-1i64).into()), Value::Integer(1i64.into())),
        (Value::Integer((-2i64).into()), Value::Bytes(x.to_vec())),
        (Value::Integer((-3i64).into()), Value::Bytes(y.to_vec())),
    ]);
    let mut buf = Vec::new();
    ciborium::into_writer(&map, &mut buf).expect("COSE key encoding is infallible");
    buf
}

/// Signing key pair bound to one credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}
