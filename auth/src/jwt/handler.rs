use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Identity;
use super::errors::JwtError;

/// Largest accepted distance, in seconds, between a token's `iat` and the
/// verifier's clock when `iat` lies in the future.
const MAX_CLOCK_SKEW_SECONDS: i64 = 30;

/// JWT token handler for issuing and verifying access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Issuer and audience are fixed per
/// deployment; the verifier only ever accepts its own audience.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `issuer` - Value written to the `iss` claim
    /// * `audience` - Value written to, and required in, the `aud` claim
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Issue a signed token for an identity.
    ///
    /// # Arguments
    /// * `identity` - Email and username of the principal
    /// * `ttl_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `MissingClaim` - Identity has no email or no username
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: Identity<'_>, ttl_minutes: i64) -> Result<String, JwtError> {
        if identity.email.trim().is_empty() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }
        if identity.username.trim().is_empty() {
            return Err(JwtError::MissingClaim("username".to_string()));
        }

        let claims = Claims::for_identity(identity, &self.issuer, &self.audience, ttl_minutes);
        self.encode(&claims)
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Checks the signature, the audience, expiry with zero leeway, and that
    /// the token was not issued in the future.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match
    /// * `InvalidAudience` - Audience is not this service's audience
    /// * `TokenExpired` - Token has expired
    /// * `MissingClaim` - A required claim is absent
    /// * `InvalidToken` - Timestamps are inconsistent
    /// * `DecodingFailed` - Token is malformed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "aud", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidAudience => JwtError::InvalidAudience,
                ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
                _ => JwtError::DecodingFailed(e.to_string()),
            })?
            .claims;

        let now = Utc::now().timestamp();
        if claims.iat > now + MAX_CLOCK_SKEW_SECONDS {
            return Err(JwtError::InvalidToken("issued in the future".to_string()));
        }
        if claims.exp <= claims.iat {
            return Err(JwtError::InvalidToken(
                "expires before it was issued".to_string(),
            ));
        }

        Ok(claims)
    }
}
