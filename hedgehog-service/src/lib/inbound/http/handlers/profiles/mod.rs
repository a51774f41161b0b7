pub mod get_profile_by_username;
pub mod update_own_profile;

pub use get_profile_by_username::get_profile_by_username;
pub use update_own_profile::update_own_profile;
