pub mod common;
pub mod hedgehog;
pub mod profile;
pub mod user;
