pub mod hedgehog;
pub mod profile;
pub mod user;

pub use hedgehog::PostgresHedgehogRepository;
pub use profile::PostgresProfileRepository;
pub use user::PostgresUserRepository;
