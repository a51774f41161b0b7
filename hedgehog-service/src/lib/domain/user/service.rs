use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Identity;
use tokio::task;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserAccount;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::AuthFailure;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for the user directory.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Credential and token handling
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn reject(failure: AuthFailure) -> UserError {
        tracing::warn!(reason = %failure, "Rejected bearer authentication");
        UserError::Unauthenticated(failure)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserAccount, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists);
        }

        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists);
        }

        // Argon2 is CPU bound; keep it off the async workers
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let credentials =
            task::spawn_blocking(move || authenticator.create_credentials(password.as_str()))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
                .map_err(|e| UserError::Credential(e.to_string()))?;

        let new_user = NewUser {
            id: UserId::new(),
            email: command.email,
            username: command.username,
            credentials,
        };

        let account = self.repository.create_with_profile(new_user).await?;

        tracing::info!(
            user_id = %account.user.id,
            username = %account.user.username,
            "User registered"
        );

        Ok(account)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, UserError> {
        let user = self.repository.find_by_email(email).await?;

        let authenticator = Arc::clone(&self.authenticator);
        let stored = user.as_ref().map(|user| user.credentials.clone());
        let password = password.to_owned();
        let matched = task::spawn_blocking(move || match stored {
            Some(credentials) => authenticator.verify_credentials(&password, &credentials),
            None => authenticator.verify_decoy(&password),
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        if !matched {
            tracing::debug!("Login rejected");
            return Ok(None);
        }

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.repository.find_by_email(email).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await,
            Err(_) => Ok(None),
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, UserError> {
        let identity = Identity::new(user.email.as_str(), user.username.as_str());
        self.authenticator
            .generate_token(identity)
            .map_err(|e| UserError::Credential(e.to_string()))
    }

    async fn authenticate_bearer(&self, authorization: Option<&str>) -> Result<User, UserError> {
        let token = authorization
            .and_then(auth::extract_bearer_token)
            .ok_or_else(|| Self::reject(AuthFailure::MissingToken))?;

        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| Self::reject(AuthFailure::InvalidToken(e)))?;

        let user = self
            .repository
            .find_by_email(claims.email())
            .await?
            .ok_or_else(|| Self::reject(AuthFailure::UnknownUser))?;

        if !user.is_active {
            return Err(Self::reject(AuthFailure::InactiveUser));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use auth::Credentials;
    use auth::JwtHandler;
    use mockall::mock;

    use super::*;
    use crate::domain::common::Timestamps;
    use crate::domain::profile::models::Profile;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Password;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create_with_profile(&self, user: NewUser) -> Result<UserAccount, UserError>;
            async fn find_by_username(
                &self,
                username: &Username,
            ) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        let jwt = JwtHandler::new(
            b"unit-test-secret-that-is-long-enough",
            "hedgehog-reservation.com",
            "hedgehog-reservation:auth",
        );
        Arc::new(Authenticator::new(jwt, 15))
    }

    fn user_with(credentials: Credentials) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            username: Username::new("testuser".to_string()).unwrap(),
            credentials,
            email_verified: false,
            is_active: true,
            is_superuser: false,
            timestamps: Timestamps::now(),
        }
    }

    fn placeholder_user() -> User {
        user_with(Credentials::new("salt".to_string(), "hash".to_string()))
    }

    fn register_command() -> RegisterUserCommand {
        RegisterUserCommand::new(
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            Username::new("testuser".to_string()).unwrap(),
            Password::new("password123".to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();
        let authenticator = authenticator();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let verifier = Arc::clone(&authenticator);
        repository
            .expect_create_with_profile()
            .withf(move |user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.credentials.hash.starts_with("$argon2")
                    && verifier.verify_credentials("password123", &user.credentials)
            })
            .times(1)
            .returning(|user| {
                let account = UserAccount {
                    profile: Profile::empty(user.id),
                    user: User {
                        id: user.id,
                        email: user.email,
                        username: user.username,
                        credentials: user.credentials,
                        email_verified: false,
                        is_active: true,
                        is_superuser: false,
                        timestamps: Timestamps::now(),
                    },
                };
                Ok(account)
            });

        let service = UserService::new(Arc::new(repository), authenticator);

        let account = service.register(register_command()).await.unwrap();
        assert_eq!(account.user.username.as_str(), "testuser");
        assert_eq!(account.profile.user_id, account.user.id);
        assert_ne!(account.user.credentials.hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(placeholder_user())));
        repository.expect_find_by_username().times(0);
        repository.expect_create_with_profile().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(placeholder_user())));
        repository.expect_create_with_profile().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_constraint_race_surfaces_conflict() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_find_by_email().returning(|_| Ok(None));
        repository.expect_find_by_username().returning(|_| Ok(None));
        repository
            .expect_create_with_profile()
            .times(1)
            .returning(|_| Err(UserError::EmailAlreadyExists));

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let authenticator = authenticator();
        let credentials = authenticator.create_credentials("password123").unwrap();
        let stored = user_with(credentials);

        let mut repository = MockTestUserRepository::new();
        let returned = stored.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), authenticator);

        let user = service
            .authenticate("test@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(user.map(|u| u.id), Some(stored.id));

        let user = service
            .authenticate("test@example.com", "wrong-password")
            .await
            .unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_is_no_match() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let user = service
            .authenticate("nobody@example.com", "password123")
            .await
            .unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_get_by_username_invalid_string_matches_nobody() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let user = service.get_by_username("no spaces allowed").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email_is_exact_match() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(|_| Ok(Some(placeholder_user())));
        repository
            .expect_find_by_email()
            .withf(|email| email == "TEST@example.com")
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());

        let found = service.get_by_email("test@example.com").await.unwrap();
        assert_eq!(found.unwrap().email.as_str(), "test@example.com");
        assert!(service.get_by_email("TEST@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_authenticate_bearer_resolves_user() {
        let stored = placeholder_user();
        let mut repository = MockTestUserRepository::new();
        let returned = stored.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), authenticator());
        let token = service.issue_token(&stored).unwrap();
        let header = format!("Bearer {}", token);

        let user = service.authenticate_bearer(Some(&header)).await.unwrap();
        assert_eq!(user.id, stored.id);
    }

    #[tokio::test]
    async fn test_authenticate_bearer_rejects_missing_and_malformed_headers() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());
        let token = service.issue_token(&placeholder_user()).unwrap();

        for header in [
            None,
            Some(token.clone()),
            Some(format!("bearer {}", token)),
            Some(format!("Token {}", token)),
            Some(format!("Bearer  {}", token)),
        ] {
            let result = service.authenticate_bearer(header.as_deref()).await;
            assert!(matches!(
                result,
                Err(UserError::Unauthenticated(AuthFailure::MissingToken))
            ));
        }
    }

    #[tokio::test]
    async fn test_authenticate_bearer_rejects_invalid_token() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().times(0);

        let service = UserService::new(Arc::new(repository), authenticator());

        let result = service
            .authenticate_bearer(Some("Bearer not.a.token"))
            .await;
        assert!(matches!(
            result,
            Err(UserError::Unauthenticated(AuthFailure::InvalidToken(_)))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_bearer_rejects_unknown_user() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());
        let token = service.issue_token(&placeholder_user()).unwrap();
        let header = format!("Bearer {}", token);

        let result = service.authenticate_bearer(Some(&header)).await;
        assert!(matches!(
            result,
            Err(UserError::Unauthenticated(AuthFailure::UnknownUser))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_bearer_rejects_inactive_user() {
        let mut inactive = placeholder_user();
        inactive.is_active = false;

        let mut repository = MockTestUserRepository::new();
        let returned = inactive.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), authenticator());
        let token = service.issue_token(&inactive).unwrap();
        let header = format!("Bearer {}", token);

        let result = service.authenticate_bearer(Some(&header)).await;
        assert!(matches!(
            result,
            Err(UserError::Unauthenticated(AuthFailure::InactiveUser))
        ));
    }
}
