//! Access-token claims decoding.
//!
//! TRUST MODEL
//! ===========
//! This is a structural decode only. The signature segment is never checked:
//! the refresh call that produced the token was already authenticated by the
//! session cookie, so integrity is delegated entirely to the transport. Do not
//! use these claims for anything the server does not re-check.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Decoded payload of an access token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub org_role: String,
    /// Every other claim, `exp` included, kept as issued. Their shape never
    /// fails a decode.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    /// Expiry as unix seconds. Accepts integer, fractional, and numeric-string
    /// `exp` values; anything else reads as "no expiry".
    pub fn expires_at(&self) -> Option<f64> {
        match self.extra.get("exp")? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_expired_at(&self, now_secs: f64) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now_secs)
    }
}

/// Errors produced while decoding an access token.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token did not have exactly three dot-separated segments.
    #[error("expected 3 token segments, found {found}")]
    SegmentCount { found: usize },

    /// The payload segment was not valid base64url.
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload decoded but was not a JSON claims object.
    #[error("payload is not a claims object: {0}")]
    Json(#[from] serde_json::Error),

    /// A required claim was present but empty.
    #[error("claim {0} is empty")]
    MissingClaim(&'static str),
}

/// Decode the claims carried in the middle segment of `token`.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is not three segments, the payload
/// is not base64url, the payload is not a JSON object with `userId` and
/// `orgRole`, or either of those claims is empty.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::SegmentCount { found: segments.len() });
    };

    let bytes = URL_SAFE_NO_PAD.decode(normalize_segment(payload))?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    if claims.user_id.is_empty() {
        return Err(DecodeError::MissingClaim("userId"));
    }
    if claims.org_role.is_empty() {
        return Err(DecodeError::MissingClaim("orgRole"));
    }
    Ok(claims)
}

/// Accept padded and standard-alphabet segments by folding them into the
/// unpadded url-safe alphabet.
fn normalize_segment(segment: &str) -> String {
    segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
#[path = "claims_test.rs"]
mod tests;
