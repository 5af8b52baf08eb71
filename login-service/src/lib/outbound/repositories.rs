pub mod user;

pub use user::InMemoryCredentialStore;
