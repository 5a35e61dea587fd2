//! Legacy classification for case connectors

use casekit_core::{CaseConnector, ConnectorFeatureFlags, ConnectorType};

/// Whether a connector must keep using the legacy behavior.
///
/// No connector selected classifies as legacy. A ServiceNow connector whose
/// new integration is still flagged off classifies as legacy regardless of
/// its own configuration; otherwise the connector's `isLegacy` flag decides.
pub fn is_legacy_connector(
    connector: Option<&CaseConnector>,
    flags: &ConnectorFeatureFlags,
) -> bool {
    let Some(connector) = connector else {
        return true;
    };

    if !flags.enable_new_sn_itsm
        && connector.action_type_id.as_str() == ConnectorType::ServiceNowItsm.id()
    {
        return true;
    }

    if !flags.enable_new_sn_sir
        && connector.action_type_id.as_str() == ConnectorType::ServiceNowSir.id()
    {
        return true;
    }

    connector.config.is_legacy
}
