use serde::{Deserialize, Serialize};

/// Feature flags governing the new ServiceNow case integrations.
///
/// Supplied by the hosting environment's configuration and passed in
/// explicitly, so legacy classification stays a pure function of its inputs.
/// Both flags default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorFeatureFlags {
    /// Route `.servicenow` connectors through the new ITSM integration.
    #[serde(default)]
    pub enable_new_sn_itsm: bool,
    /// Route `.servicenow-sir` connectors through the new SIR integration.
    #[serde(default)]
    pub enable_new_sn_sir: bool,
}

impl ConnectorFeatureFlags {
    pub fn all_enabled() -> Self {
        Self { enable_new_sn_itsm: true, enable_new_sn_sir: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_off() {
        let flags: ConnectorFeatureFlags = serde_json::from_str("{}").expect("should parse");
        assert!(!flags.enable_new_sn_itsm);
        assert!(!flags.enable_new_sn_sir);
    }

    #[test]
    fn flags_parse_from_host_config() {
        let flags: ConnectorFeatureFlags =
            serde_json::from_str(r#"{ "enable_new_sn_itsm": true }"#).expect("should parse");
        assert!(flags.enable_new_sn_itsm);
        assert!(!flags.enable_new_sn_sir);
    }
}
