//! Form-field validation for the connector selection control

use crate::{servicenow, swimlane};
use casekit_core::{CaseConnector, ConnectorType};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Validation failure surfaced to the form framework.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Per-connector-type validation routine.
pub type ConnectorValidator = fn(&CaseConnector) -> Option<ValidationError>;

/// A single validator attached to a form field.
///
/// The form framework invokes it with the field's candidate value, here a
/// connector id. `None` means the value passed.
#[derive(Clone)]
pub struct ValidationConfig {
    validator: Arc<dyn Fn(&str) -> Option<ValidationError> + Send + Sync>,
}

impl ValidationConfig {
    pub fn new<F>(validator: F) -> Self
    where
        F: Fn(&str) -> Option<ValidationError> + Send + Sync + 'static,
    {
        Self { validator: Arc::new(validator) }
    }

    /// Run the validator against a candidate connector id.
    pub fn validate(&self, value: &str) -> Option<ValidationError> {
        (self.validator)(value)
    }
}

impl fmt::Debug for ValidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfig").finish_non_exhaustive()
    }
}

/// Validation configuration of a single form field.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    pub label: Option<String>,
    pub default_value: Option<JsonValue>,
    pub validations: Vec<ValidationConfig>,
}

/// Find a connector by id in a caller-supplied list.
///
/// Absence is a normal result, not a failure. On duplicate ids the first
/// match wins.
pub fn connector_by_id<'a>(id: &str, connectors: &'a [CaseConnector]) -> Option<&'a CaseConnector> {
    connectors.iter().find(|c| c.id == id)
}

/// The validation routine for a known connector type.
///
/// Both ServiceNow variants resolve to the same routine: their validation
/// logic is identical.
fn validator_for(connector_type: ConnectorType) -> ConnectorValidator {
    match connector_type {
        ConnectorType::Swimlane => swimlane::validate_connector,
        ConnectorType::ServiceNowItsm | ConnectorType::ServiceNowSir => {
            servicenow::validate_connector
        }
    }
}

/// Extend a field configuration with the connector-selection validator.
///
/// The returned configuration carries every validation of the input, in
/// order, plus one appended validator that resolves the candidate id against
/// `connectors` and dispatches to the matching per-type routine. An unknown
/// id or an action type without a routine yields no validation result; the
/// dispatched routine's outcome is returned verbatim.
pub fn connector_form_validators(
    connectors: Vec<CaseConnector>,
    config: FieldConfig,
) -> FieldConfig {
    let mut config = config;
    config.validations.push(ValidationConfig::new(move |connector_id| {
        let connector = connector_by_id(connector_id, &connectors)?;
        let connector_type = connector.connector_type()?;
        validator_for(connector_type)(connector)
    }));
    config
}
