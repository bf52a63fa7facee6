//! Extraction of raw P-256 key material from DER containers.
//!
//! Web Push (RFC 8292) wants the bare 65-byte uncompressed public point and
//! the bare 32-byte private scalar, but standard encoders hand out SPKI and
//! PKCS#8 documents with algorithm headers around them. For a P-256 key
//! those headers have a fixed byte layout, so the raw material sits at a
//! fixed offset. The functions here verify the header bytes (including both
//! OIDs) before slicing, so a container that isn't an EC P-256 key is
//! rejected instead of silently yielding garbage key bytes.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use thiserror::Error;

/// Uncompressed SEC1 point: 0x04 || X(32) || Y(32).
pub const RAW_PUBLIC_KEY_LEN: usize = 65;
/// Big-endian private scalar.
pub const RAW_PRIVATE_KEY_LEN: usize = 32;

/// AlgorithmIdentifier SEQUENCE for id-ecPublicKey with the prime256v1
/// named-curve parameter. Identical in SPKI and PKCS#8 documents.
const EC_P256_ALG_ID: [u8; 21] = [
    0x30, 0x13, // SEQUENCE, 19 bytes
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // 1.2.840.10045.2.1
    0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, // 1.2.840.10045.3.1.7
];

/// The SPKI header is exactly 26 bytes for a P-256 key; the point follows.
const SPKI_HEADER_LEN: usize = 26;
/// In PKCS#8 the scalar starts at byte 36; the embedded public key (if the
/// encoder included one) trails after it.
const PKCS8_SCALAR_OFFSET: usize = 36;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The container does not match the layout standard encoders emit for a
    /// P-256 key, so the fixed offsets cannot be trusted.
    #[error("malformed key container ({0} bytes)")]
    MalformedContainer(usize),
    #[error("container algorithm identifier is not EC over P-256")]
    UnsupportedAlgorithm,
}

/// Pull the 65-byte uncompressed point out of a SubjectPublicKeyInfo
/// document.
///
/// A P-256 SPKI is always 91 bytes: the 26-byte header, then the point.
pub fn extract_public_key(container: &[u8]) -> Result<[u8; RAW_PUBLIC_KEY_LEN], ExtractError> {
    if container.len() != SPKI_HEADER_LEN + RAW_PUBLIC_KEY_LEN {
        return Err(ExtractError::MalformedContainer(container.len()));
    }
    if container[2..23] != EC_P256_ALG_ID {
        return Err(ExtractError::UnsupportedAlgorithm);
    }
    // Outer SEQUENCE (89 content bytes), then the subjectPublicKey
    // BIT STRING (66 bytes, no unused bits) wrapping an uncompressed point.
    if container[..2] != [0x30, 0x59]
        || container[23..26] != [0x03, 0x42, 0x00]
        || container[SPKI_HEADER_LEN] != 0x04
    {
        return Err(ExtractError::MalformedContainer(container.len()));
    }

    let mut point = [0u8; RAW_PUBLIC_KEY_LEN];
    point.copy_from_slice(&container[SPKI_HEADER_LEN..]);
    Ok(point)
}

/// Pull the 32-byte private scalar out of a PKCS#8 document.
///
/// Layout: outer SEQUENCE, version 0, the EC AlgorithmIdentifier, then an
/// OCTET STRING holding a SEC1 ECPrivateKey (version 1) whose own OCTET
/// STRING is the scalar. Standard encoders append the public key after the
/// scalar, so anything past byte 68 is accepted unchecked.
pub fn extract_private_key(container: &[u8]) -> Result<[u8; RAW_PRIVATE_KEY_LEN], ExtractError> {
    if container.len() < PKCS8_SCALAR_OFFSET + RAW_PRIVATE_KEY_LEN {
        return Err(ExtractError::MalformedContainer(container.len()));
    }
    if container[6..27] != EC_P256_ALG_ID {
        return Err(ExtractError::UnsupportedAlgorithm);
    }
    if container[..2] != [0x30, 0x81] // long-form outer length, or offsets shift
        || container[3..6] != [0x02, 0x01, 0x00]
        || container[27] != 0x04
        || container[29] != 0x30
        || container[31..36] != [0x02, 0x01, 0x01, 0x04, 0x20]
    {
        return Err(ExtractError::MalformedContainer(container.len()));
    }

    let mut scalar = [0u8; RAW_PRIVATE_KEY_LEN];
    scalar.copy_from_slice(
        &container[PKCS8_SCALAR_OFFSET..PKCS8_SCALAR_OFFSET + RAW_PRIVATE_KEY_LEN],
    );
    Ok(scalar)
}

/// Unpadded base64url (RFC 4648 §5).
pub fn to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
