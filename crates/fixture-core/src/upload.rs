//! Upload echo check
//!
//! An upload passes when its token matches and its content, decoded as
//! UTF-8, equals the reference file text. The caller reads the reference
//! file; the token is checked first so that a bad token never needs it.

use crate::error::Rejection;

/// Check an upload token on its own.
///
/// Handlers call this before touching the reference file.
pub fn check_upload_token(expected_token: &str, token: &str) -> Result<(), Rejection> {
    if token == expected_token {
        Ok(())
    } else {
        Err(Rejection::InvalidUploadToken)
    }
}

/// Compare uploaded bytes against the reference file text.
///
/// Bytes that are not valid UTF-8 are rejected with `UndecodableFile`
/// rather than compared byte-wise.
pub fn check_upload_content(file: &[u8], reference: &str) -> Result<(), Rejection> {
    let uploaded = std::str::from_utf8(file).map_err(|e| {
        tracing::debug!(valid_up_to = e.valid_up_to(), "Upload is not valid UTF-8");
        Rejection::UndecodableFile
    })?;

    if uploaded == reference {
        Ok(())
    } else {
        Err(Rejection::InvalidFile)
    }
}
