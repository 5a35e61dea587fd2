//! ServiceNow connector validation, shared by the ITSM and SIR variants

use crate::form::ValidationError;
use casekit_core::CaseConnector;

/// Reject connectors still pointing at the legacy ServiceNow application.
///
/// `.servicenow` and `.servicenow-sir` are validated identically; the cases
/// form dispatches both variants here.
pub fn validate_connector(connector: &CaseConnector) -> Option<ValidationError> {
    if connector.config.is_legacy {
        return Some(ValidationError::new(
            "The connector is deprecated. Update it, or select a different connector.",
        ));
    }

    None
}
