//! Swimlane connector validation for the cases form

use crate::form::ValidationError;
use casekit_core::CaseConnector;
use serde::{Deserialize, Serialize};

/// Scope a Swimlane connector is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwimlaneConnectorType {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "alerts")]
    Alerts,
    #[serde(rename = "cases")]
    Cases,
}

/// Reject Swimlane connectors scoped to alerts only.
///
/// The scope lives in the connector config under `connectorType`. A missing
/// or unrecognized scope is left for the connector's own configuration form
/// to flag.
pub fn validate_connector(connector: &CaseConnector) -> Option<ValidationError> {
    let scope = connector
        .config
        .extra
        .get("connectorType")
        .and_then(|value| serde_json::from_value::<SwimlaneConnectorType>(value.clone()).ok());

    if scope == Some(SwimlaneConnectorType::Alerts) {
        return Some(ValidationError::new(
            "The connector is configured for alerts only and cannot be used with cases.",
        ));
    }

    None
}
