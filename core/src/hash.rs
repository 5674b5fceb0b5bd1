//! Hash related utils.
//!
//! All base64 produced and consumed by the PlaceNext API is the standard
//! alphabet without padding.

use crate::Error;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::DecodePaddingMode;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use log::warn;
use md5::Md5;
use sha2::Digest;
use sha2::Sha256;

/// Standard alphabet, no padding, and lenient about the unused bits of the
/// last symbol so that `aR` decodes the same as `aQ`.
const STANDARD_NO_PAD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Base64 encode without padding.
pub fn base64_encode(content: &[u8]) -> String {
    STANDARD_NO_PAD_LENIENT.encode(content)
}

/// Base64 decode input that carries no padding.
pub fn base64_decode(content: &str) -> crate::Result<Vec<u8>> {
    Ok(STANDARD_NO_PAD_LENIENT.decode(content)?)
}

/// MD5 hash.
pub fn md5(content: &[u8]) -> Vec<u8> {
    Md5::digest(content).to_vec()
}

fn new_hmac_sha256(key: &[u8]) -> crate::Result<Hmac<Sha256>> {
    Hmac::<Sha256>::new_from_slice(key).map_err(|e| {
        warn!("hmac-sha256 rejected the signing key: {e}");
        Error::unexpected("initialize hmac-sha256 failed").with_source(anyhow::anyhow!(e))
    })
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> crate::Result<Vec<u8>> {
    let mut h = new_hmac_sha256(key)?;
    h.update(content);

    Ok(h.finalize().into_bytes().to_vec())
}

/// Check `content` against an expected HMAC-SHA256 in constant time.
pub fn hmac_sha256_verify(key: &[u8], content: &[u8], expected: &[u8]) -> crate::Result<bool> {
    let mut h = new_hmac_sha256(key)?;
    h.update(content);

    Ok(h.verify_slice(expected).is_ok())
}
