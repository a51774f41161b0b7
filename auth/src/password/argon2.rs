use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Stored credential pair: an application salt and the one-way hash of
/// `password ‖ salt`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub salt: String,
    pub hash: String,
}

impl Credentials {
    pub fn new(salt: String, hash: String) -> Self {
        Self { salt, hash }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("salt", &self.salt)
            .field("hash", &"<redacted>")
            .finish()
    }
}

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// Every password is concatenated with an application-level salt before
/// hashing; Argon2 then adds its own per-call salt on top of that.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh application-level salt.
    ///
    /// 16 bytes drawn from the operating system CSPRNG, B64 encoded.
    pub fn generate_salt(&self) -> String {
        SaltString::generate(&mut OsRng).as_str().to_string()
    }

    /// Hash a plaintext password together with its application salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    /// * `salt` - Application salt appended to the password before hashing
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, internal salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str, salt: &str) -> Result<String, PasswordError> {
        let scheme_salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let salted = format!("{}{}", password, salt);

        argon2
            .hash_password(salted.as_bytes(), &scheme_salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Produce a complete credential pair for a new password.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn create_credentials(&self, password: &str) -> Result<Credentials, PasswordError> {
        let salt = self.generate_salt();
        let hash = self.hash(password, &salt)?;
        Ok(Credentials { salt, hash })
    }

    /// Verify a password against a stored salt and hash.
    ///
    /// Comparison is done by the Argon2 verifier in constant time. A stored
    /// hash that cannot be parsed never matches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `salt` - Stored application salt
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, salt: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
                return false;
            }
        };

        let salted = format!("{}{}", password, salt);

        Argon2::default()
            .verify_password(salted.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Verify a password against a stored credential pair.
    pub fn verify_credentials(&self, password: &str, credentials: &Credentials) -> bool {
        self.verify(password, &credentials.salt, &credentials.hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
