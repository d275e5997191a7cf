//! Core JWT verifier implementation

use super::types::{Claims, JwtVerifier};
use crate::auth::session::SessionIdentity;
use crate::config::AuthConfig;
use crate::utils::error::{DashboardError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

impl JwtVerifier {
    /// Create a verifier from the shared provider secret
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            audience: config.jwt_audience.clone(),
        }
    }

    /// Verify a token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        if token_data.claims.sub.trim().is_empty() {
            return Err(DashboardError::unauthorized("Token has an empty subject"));
        }

        Ok(token_data.claims)
    }

    /// Verify a token and return the session identity it carries
    pub fn verify_session(&self, token: &str) -> Result<SessionIdentity> {
        let claims = self.verify_token(token)?;
        debug!("Verified session token for user: {}", claims.sub);

        Ok(SessionIdentity {
            user_id: claims.sub,
            email: claims.email,
        })
    }

    /// Mint a token for `identity`, valid for `ttl_secs`
    ///
    /// Production tokens come from the auth provider; this exists for the
    /// development stand-in and for tests.
    pub fn issue_token(&self, identity: &SessionIdentity, ttl_secs: u64) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| DashboardError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: identity.user_id.clone(),
            email: identity.email.clone(),
            aud: self.audience.clone(),
            iat: now,
            exp: now + ttl_secs,
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)?;
        Ok(token)
    }
}
