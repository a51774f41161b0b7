use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserAccount;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user directory operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user together with an empty profile.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, username, and password
    ///
    /// # Returns
    /// Created user with its profile
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Credential` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<UserAccount, UserError>;

    /// Check an email and password pair.
    ///
    /// # Returns
    /// The matching user, or `None` when the email is unknown or the password
    /// does not match. Both cases take comparable time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, UserError>;

    /// Exact-match lookup by email.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Exact-match lookup by username.
    ///
    /// A string that is not a valid username matches nobody.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Issue an access token for a user.
    ///
    /// # Errors
    /// * `Credential` - Token could not be signed
    fn issue_token(&self, user: &User) -> Result<String, UserError>;

    /// Resolve an `Authorization` header value to a live, active user.
    ///
    /// Every call decodes the token and reads the user from storage again.
    ///
    /// # Errors
    /// * `Unauthenticated` - Missing or malformed header, invalid token,
    ///   unknown or inactive user
    /// * `DatabaseError` - Database operation failed
    async fn authenticate_bearer(&self, authorization: Option<&str>) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and its empty profile atomically.
    ///
    /// # Arguments
    /// * `user` - User data with credentials already derived
    ///
    /// # Returns
    /// Stored user with its profile
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_with_profile(&self, user: NewUser) -> Result<UserAccount, UserError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address string, compared exactly
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
