pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::ConnectorFeatureFlags;
pub use error::{CoreError, CoreResult};
pub use types::{ActionTypeId, CaseConnector, ConnectorConfig, ConnectorType, IconType};
