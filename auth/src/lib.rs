//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the service:
//! - Password hashing (application salt + Argon2id)
//! - JWT access token issuance and validation
//! - `Authorization: Bearer` header parsing
//! - Authentication coordination
//!
//! Nothing here performs I/O. Services adapt these implementations behind
//! their own ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let credentials = hasher.create_credentials("my_password").unwrap();
//! assert!(hasher.verify("my_password", &credentials.salt, &credentials.hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Identity, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", "issuer", "audience");
//! let token = handler.issue(Identity::new("alice@example.com", "alice"), 60).unwrap();
//! let claims = handler.decode(&token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Identity, JwtHandler};
//!
//! let jwt = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", "issuer", "audience");
//! let auth = Authenticator::new(jwt, 60);
//!
//! // Register: salt and hash password
//! let credentials = auth.create_credentials("password123").unwrap();
//!
//! // Login: verify, then generate token
//! assert!(auth.verify_credentials("password123", &credentials));
//! let token = auth
//!     .generate_token(Identity::new("alice@example.com", "alice"))
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```

pub mod authenticator;
pub mod bearer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use bearer::extract_bearer_token;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::Credentials;
pub use password::PasswordError;
pub use password::PasswordHasher;
