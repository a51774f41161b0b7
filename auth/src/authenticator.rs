use std::sync::OnceLock;

use crate::jwt::Claims;
use crate::jwt::Identity;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::Credentials;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Authentication coordinator combining credential handling and JWT issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl_minutes: i64,
    decoy: OnceLock<Credentials>,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_handler` - Handler configured with secret, issuer and audience
    /// * `token_ttl_minutes` - Lifetime of issued access tokens
    pub fn new(jwt_handler: JwtHandler, token_ttl_minutes: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler,
            token_ttl_minutes,
            decoy: OnceLock::new(),
        }
    }

    /// Produce a salt and hash pair for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn create_credentials(&self, password: &str) -> Result<Credentials, PasswordError> {
        self.password_hasher.create_credentials(password)
    }

    /// Check a plaintext password against a stored credential pair.
    pub fn verify_credentials(&self, password: &str, credentials: &Credentials) -> bool {
        self.password_hasher.verify_credentials(password, credentials)
    }

    /// Spend the same effort as a real verification, then report no match.
    ///
    /// Used when no stored credentials exist for a login attempt, so the
    /// response time does not reveal whether the account exists.
    pub fn verify_decoy(&self, password: &str) -> bool {
        let decoy = self.decoy.get_or_init(|| {
            self.password_hasher
                .create_credentials(DECOY_PASSWORD)
                .unwrap_or_else(|_| Credentials::new(String::new(), String::new()))
        });
        self.password_hasher.verify_credentials(password, decoy);
        false
    }

    /// Generate a JWT for an already verified identity.
    ///
    /// # Errors
    /// * `MissingClaim` - Identity has no email or username
    /// * `EncodingFailed` - Token generation failed
    pub fn generate_token(&self, identity: Identity<'_>) -> Result<String, JwtError> {
        self.jwt_handler.issue(identity, self.token_ttl_minutes)
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
