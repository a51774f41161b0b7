use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity a token is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    pub email: &'a str,
    pub username: &'a str,
}

impl<'a> Identity<'a> {
    pub fn new(email: &'a str, username: &'a str) -> Self {
        Self { email, username }
    }
}

/// Access token payload.
///
/// Standard RFC 7519 metadata plus the username. `sub` holds the email
/// address. Every field is required when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Subject (email address)
    pub sub: String,

    pub username: String,
}

impl Claims {
    /// Create claims for an identity, valid from now for `ttl_minutes`.
    ///
    /// # Arguments
    /// * `identity` - Email and username of the principal
    /// * `issuer` - Service issuing the token
    /// * `audience` - Intended audience
    /// * `ttl_minutes` - Minutes until token expires (may be negative)
    pub fn for_identity(
        identity: Identity<'_>,
        issuer: impl ToString,
        audience: impl ToString,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            sub: identity.email.to_string(),
            username: identity.username.to_string(),
        }
    }

    /// Email address carried in `sub`.
    pub fn email(&self) -> &str {
        &self.sub
    }
}
