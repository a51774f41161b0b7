use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::PublicProfile;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::profile::ports::ProfileServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Domain service implementation for profile operations.
pub struct ProfileService<PR>
where
    PR: ProfileRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProfileService<PR>
where
    PR: ProfileRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProfileServicePort for ProfileService<PR>
where
    PR: ProfileRepository,
{
    async fn get_profile_by_username(
        &self,
        username: &str,
    ) -> Result<PublicProfile, ProfileError> {
        let not_found = || ProfileError::NotFound(username.to_string());

        let Ok(parsed) = Username::new(username.to_string()) else {
            return Err(not_found());
        };

        self.repository
            .find_public_by_username(&parsed)
            .await?
            .ok_or_else(not_found)
    }

    async fn get_profile_for_user(&self, user_id: &UserId) -> Result<Profile, ProfileError> {
        self.repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(user_id.to_string()))
    }

    async fn update_own_profile(
        &self,
        user_id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self.get_profile_for_user(user_id).await?;
        profile.apply(command);

        let updated = self.repository.update(profile).await?;
        tracing::debug!(user_id = %user_id, "Profile updated");

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::profile::models::ImageUrl;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn find_by_user_id(
                &self,
                user_id: &UserId,
            ) -> Result<Option<Profile>, ProfileError>;
            async fn find_public_by_username(
                &self,
                username: &Username,
            ) -> Result<Option<PublicProfile>, ProfileError>;
            async fn update(&self, profile: Profile) -> Result<Profile, ProfileError>;
        }
    }

    #[tokio::test]
    async fn test_get_profile_by_username_success() {
        let mut repository = MockTestProfileRepository::new();
        let owner = UserId::new();

        repository
            .expect_find_public_by_username()
            .withf(|username| username.as_str() == "hedgehog")
            .times(1)
            .returning(move |username| {
                Ok(Some(PublicProfile {
                    profile: Profile::empty(owner),
                    username: username.clone(),
                    email: EmailAddress::new("hedgehog@example.com".to_string()).unwrap(),
                }))
            });

        let service = ProfileService::new(Arc::new(repository));

        let public = service.get_profile_by_username("hedgehog").await.unwrap();
        assert_eq!(public.username.as_str(), "hedgehog");
        assert_eq!(public.profile.user_id, owner);
    }

    #[tokio::test]
    async fn test_get_profile_by_username_not_found() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_public_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(repository));

        let result = service.get_profile_by_username("user_doesnt_match").await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_profile_by_invalid_username_is_not_found() {
        let mut repository = MockTestProfileRepository::new();
        repository.expect_find_public_by_username().times(0);

        let service = ProfileService::new(Arc::new(repository));

        let result = service.get_profile_by_username("x").await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_own_profile_merges_fields() {
        let mut repository = MockTestProfileRepository::new();
        let owner = UserId::new();

        repository
            .expect_find_by_user_id()
            .withf(move |id| *id == owner)
            .times(1)
            .returning(move |id| {
                let mut profile = Profile::empty(*id);
                profile.bio = Some("Original bio".to_string());
                Ok(Some(profile))
            });
        repository
            .expect_update()
            .withf(|profile| {
                profile.bio.as_deref() == Some("Original bio")
                    && profile.image.as_ref().map(|i| i.as_str())
                        == Some("https://example.com/me.jpg")
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(repository));

        let command = UpdateProfileCommand {
            image: Some(Some(
                ImageUrl::new("https://example.com/me.jpg".to_string()).unwrap(),
            )),
            ..Default::default()
        };

        let updated = service.update_own_profile(&owner, command).await.unwrap();
        assert_eq!(updated.user_id, owner);
    }

    #[tokio::test]
    async fn test_update_own_profile_missing_profile() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_user_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = ProfileService::new(Arc::new(repository));

        let result = service
            .update_own_profile(&UserId::new(), UpdateProfileCommand::default())
            .await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }
}
