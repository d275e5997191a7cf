//! JWT types and data structures

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

/// Verifier for provider-issued access tokens
#[derive(Clone)]
pub struct JwtVerifier {
    /// Encoding key, used to mint tokens in development and tests
    pub(super) encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    pub(super) decoding_key: DecodingKey,
    /// JWT algorithm
    pub(super) algorithm: Algorithm,
    /// Expected audience
    pub(super) audience: String,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("algorithm", &self.algorithm)
            .field("audience", &self.audience)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// Claims carried by a provider access token
///
/// The provider's own `role` claim (e.g. `authenticated`) is not the club
/// role; that one always comes from the profile row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (provider user id)
    pub sub: String,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Audience
    pub aud: String,
    /// Issued at timestamp
    #[serde(default)]
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
}
