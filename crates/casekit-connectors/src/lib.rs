pub mod builtin;
pub mod form;
pub mod icon;
pub mod legacy;
pub mod servicenow;
pub mod swimlane;

// Re-export commonly used types
pub use form::{
    connector_by_id, connector_form_validators, ConnectorValidator, FieldConfig,
    ValidationConfig, ValidationError,
};
pub use icon::connector_icon;
pub use legacy::is_legacy_connector;
