use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Identifier of a backend action type (e.g. `.servicenow`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionTypeId(pub String);

impl ActionTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionTypeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Connector types the cases form knows how to validate.
///
/// The two ServiceNow variants are distinct action types but share the same
/// validation logic downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorType {
    #[serde(rename = ".swimlane")]
    Swimlane,
    #[serde(rename = ".servicenow")]
    ServiceNowItsm,
    #[serde(rename = ".servicenow-sir")]
    ServiceNowSir,
}

impl ConnectorType {
    /// The action-type identifier backing this connector type.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Swimlane => ".swimlane",
            Self::ServiceNowItsm => ".servicenow",
            Self::ServiceNowSir => ".servicenow-sir",
        }
    }

    /// Map an action-type identifier back to a known connector type.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            ".swimlane" => Some(Self::Swimlane),
            ".servicenow" => Some(Self::ServiceNowItsm),
            ".servicenow-sir" => Some(Self::ServiceNowSir),
            _ => None,
        }
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A configured connector as handed over by the actions plugin.
///
/// Records are read-only from this toolkit's point of view; nothing here
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseConnector {
    pub id: String,
    pub name: String,
    pub action_type_id: ActionTypeId,
    #[serde(default)]
    pub config: ConnectorConfig,
}

impl CaseConnector {
    /// The known connector type backing this record, if any.
    pub fn connector_type(&self) -> Option<ConnectorType> {
        ConnectorType::from_id(self.action_type_id.as_str())
    }

    /// Parse a connector record from the raw JSON the actions plugin exposes.
    pub fn from_json(value: JsonValue) -> CoreResult<Self> {
        let connector: Self =
            serde_json::from_value(value).map_err(|e| CoreError::Serde(e.to_string()))?;
        if connector.id.is_empty() {
            return Err(CoreError::Invalid("connector id must not be empty".to_string()));
        }
        Ok(connector)
    }
}

/// Typed view of a connector's configuration mapping.
///
/// Only `isLegacy` is meaningful to every connector type; anything else stays
/// in `extra` for per-type validators to interpret.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Display icon reference; the empty string means "no icon".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconType(pub String);

impl IconType {
    pub fn new(icon: impl Into<String>) -> Self {
        Self(icon.into())
    }

    /// The "no icon" sentinel.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn connector_type_ids_round_trip() {
        for connector_type in
            [ConnectorType::Swimlane, ConnectorType::ServiceNowItsm, ConnectorType::ServiceNowSir]
        {
            assert_eq!(ConnectorType::from_id(connector_type.id()), Some(connector_type));
        }
        assert_eq!(ConnectorType::from_id(".jira"), None);
    }

    #[test]
    fn parse_connector_from_plugin_json() {
        let connector = CaseConnector::from_json(json!({
            "id": "sn-1",
            "name": "My ServiceNow",
            "actionTypeId": ".servicenow",
            "config": { "isLegacy": true, "apiUrl": "https://example.com" }
        }))
        .expect("should parse");

        assert_eq!(connector.id, "sn-1");
        assert_eq!(connector.connector_type(), Some(ConnectorType::ServiceNowItsm));
        assert!(connector.config.is_legacy);
        assert_eq!(connector.config.extra["apiUrl"], json!("https://example.com"));
    }

    #[test]
    fn is_legacy_defaults_to_false_when_absent() {
        let connector = CaseConnector::from_json(json!({
            "id": "sw-1",
            "name": "Swimlane",
            "actionTypeId": ".swimlane",
            "config": {}
        }))
        .expect("should parse");

        assert!(!connector.config.is_legacy);
    }

    #[test]
    fn empty_connector_id_rejected() {
        let err = CaseConnector::from_json(json!({
            "id": "",
            "name": "broken",
            "actionTypeId": ".servicenow"
        }))
        .expect_err("empty id should be rejected");

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[test]
    fn icon_sentinel_is_the_empty_string() {
        assert!(IconType::empty().is_empty());
        assert_eq!(IconType::empty().as_str(), "");
        assert!(!IconType::new("logoServicenow").is_empty());
    }
}
