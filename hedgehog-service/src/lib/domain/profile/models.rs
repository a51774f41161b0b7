use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::domain::common::Timestamps;
use crate::domain::profile::errors::ImageUrlError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

lazy_static! {
    static ref IMAGE_URL_REGEX: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
}

/// Profile unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Absolute http(s) URL pointing at a profile picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// # Errors
    /// * `InvalidFormat` - Not an absolute http or https URL
    pub fn new(url: String) -> Result<Self, ImageUrlError> {
        if IMAGE_URL_REGEX.is_match(&url) {
            Ok(Self(url))
        } else {
            Err(ImageUrlError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Personal details owned by exactly one user.
///
/// Every field besides the owner is optional and starts out empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub image: Option<ImageUrl>,
    pub timestamps: Timestamps,
}

impl Profile {
    /// Blank profile created alongside a new user.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            id: ProfileId::new(),
            user_id,
            full_name: None,
            phone_number: None,
            bio: None,
            image: None,
            timestamps: Timestamps::now(),
        }
    }

    /// Apply the fields present in `command`, keeping the rest.
    pub fn apply(&mut self, command: UpdateProfileCommand) {
        if let Some(full_name) = command.full_name {
            self.full_name = full_name;
        }
        if let Some(phone_number) = command.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(bio) = command.bio {
            self.bio = bio;
        }
        if let Some(image) = command.image {
            self.image = image;
        }
        self.timestamps.touch();
    }
}

/// A profile as seen by other authenticated users.
#[derive(Debug, Clone)]
pub struct PublicProfile {
    pub profile: Profile,
    pub username: Username,
    pub email: EmailAddress,
}

/// Partial profile update.
///
/// The outer `Option` tells whether a field was supplied; the inner one
/// carries an explicit clear.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub full_name: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub image: Option<Option<ImageUrl>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_validation() {
        assert!(ImageUrl::new("https://example.com/me.jpg".to_string()).is_ok());
        assert!(ImageUrl::new("http://example.com".to_string()).is_ok());
        assert_eq!(
            ImageUrl::new("ftp://example.com/me.jpg".to_string()),
            Err(ImageUrlError::InvalidFormat)
        );
        assert_eq!(
            ImageUrl::new("not a url".to_string()),
            Err(ImageUrlError::InvalidFormat)
        );
        assert_eq!(
            ImageUrl::new("/relative/path.png".to_string()),
            Err(ImageUrlError::InvalidFormat)
        );
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut profile = Profile::empty(UserId::new());
        profile.bio = Some("Loves mealworms".to_string());

        profile.apply(UpdateProfileCommand {
            full_name: Some(Some("Sonic".to_string())),
            ..Default::default()
        });

        assert_eq!(profile.full_name.as_deref(), Some("Sonic"));
        assert_eq!(profile.bio.as_deref(), Some("Loves mealworms"));
    }

    #[test]
    fn test_apply_clears_explicit_null() {
        let mut profile = Profile::empty(UserId::new());
        profile.phone_number = Some("111-222-3333".to_string());

        profile.apply(UpdateProfileCommand {
            phone_number: Some(None),
            ..Default::default()
        });

        assert_eq!(profile.phone_number, None);
    }
}
