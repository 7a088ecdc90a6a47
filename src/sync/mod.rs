pub mod provider;
pub mod reconcile;
pub mod service;

pub use provider::{HttpNflDataProvider, NflDataProvider};
pub use service::SyncService;
