pub mod errors;
pub mod store;

pub use errors::SessionError;
pub use store::SessionId;
pub use store::SessionStore;
