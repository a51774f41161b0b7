pub mod get_current_user;
pub mod login;
pub mod register_user;

pub use get_current_user::get_current_user;
pub use login::login;
pub use register_user::register_user;
