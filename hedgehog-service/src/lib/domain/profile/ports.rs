use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::PublicProfile;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for profile domain service operations.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Look up another user's profile by their username.
    ///
    /// # Errors
    /// * `NotFound` - No user has this username
    /// * `DatabaseError` - Database operation failed
    async fn get_profile_by_username(&self, username: &str)
        -> Result<PublicProfile, ProfileError>;

    /// Retrieve the profile owned by a user.
    ///
    /// # Errors
    /// * `NotFound` - User has no profile
    /// * `DatabaseError` - Database operation failed
    async fn get_profile_for_user(&self, user_id: &UserId) -> Result<Profile, ProfileError>;

    /// Update the caller's own profile, keeping fields that were not supplied.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated owner
    /// * `command` - Fields to overwrite
    ///
    /// # Errors
    /// * `NotFound` - User has no profile
    /// * `DatabaseError` - Database operation failed
    async fn update_own_profile(
        &self,
        user_id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError>;
}

/// Persistence operations for profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError>;

    /// Profile joined with its owner's username and email.
    async fn find_public_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<PublicProfile>, ProfileError>;

    /// Overwrite the editable fields of an existing profile.
    ///
    /// # Errors
    /// * `NotFound` - Profile does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, profile: Profile) -> Result<Profile, ProfileError>;
}
