pub mod queries;
pub mod stats;
pub mod store;

pub use store::SessionStore;
