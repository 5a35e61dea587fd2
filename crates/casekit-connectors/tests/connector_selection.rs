use casekit_connectors::{
    builtin::register_case_action_types, connector_by_id, connector_form_validators,
    connector_icon, is_legacy_connector, FieldConfig,
};
use casekit_core::{ActionTypeId, CaseConnector, ConnectorFeatureFlags, IconType};
use casekit_registry::InMemoryActionTypeRegistry;
use serde_json::json;

fn sample_connectors() -> Vec<CaseConnector> {
    [
        json!({
            "id": "servicenow-1",
            "name": "My ServiceNow",
            "actionTypeId": ".servicenow",
            "config": { "isLegacy": false }
        }),
        json!({
            "id": "servicenow-legacy",
            "name": "Old ServiceNow",
            "actionTypeId": ".servicenow-sir",
            "config": { "isLegacy": true }
        }),
        json!({
            "id": "swimlane-alerts",
            "name": "Swimlane alerts",
            "actionTypeId": ".swimlane",
            "config": { "connectorType": "alerts" }
        }),
        json!({
            "id": "jira-1",
            "name": "Jira",
            "actionTypeId": ".jira",
            "config": {}
        }),
    ]
    .into_iter()
    .map(|record| CaseConnector::from_json(record).expect("fixture should parse"))
    .collect()
}

#[test]
fn selecting_a_connector_runs_its_type_validator() {
    let connectors = sample_connectors();
    let composed = connector_form_validators(connectors, FieldConfig::default());
    assert_eq!(composed.validations.len(), 1);
    let validator = &composed.validations[0];

    // A healthy ServiceNow connector passes.
    assert_eq!(validator.validate("servicenow-1"), None);
    // A legacy ServiceNow SIR connector is rejected by the shared routine.
    assert!(validator.validate("servicenow-legacy").is_some());
    // An alerts-only Swimlane connector is rejected.
    assert!(validator.validate("swimlane-alerts").is_some());
    // A connector type without a validation routine passes silently.
    assert_eq!(validator.validate("jira-1"), None);
    // An id that matches nothing passes silently.
    assert_eq!(validator.validate("unknown"), None);
}

#[test]
fn lookup_and_classification_work_from_plugin_records() {
    let connectors = sample_connectors();
    let flags = ConnectorFeatureFlags::default();

    let servicenow = connector_by_id("servicenow-1", &connectors).expect("present");
    assert!(is_legacy_connector(Some(servicenow), &flags));
    assert!(!is_legacy_connector(Some(servicenow), &ConnectorFeatureFlags::all_enabled()));

    let legacy_sir = connector_by_id("servicenow-legacy", &connectors).expect("present");
    // Even with both flags on, the connector's own config marks it legacy.
    assert!(is_legacy_connector(Some(legacy_sir), &ConnectorFeatureFlags::all_enabled()));

    assert!(is_legacy_connector(None, &flags));
}

#[test]
fn icons_resolve_from_the_registered_action_types() {
    let registry = InMemoryActionTypeRegistry::new();
    register_case_action_types(&registry);

    let connectors = sample_connectors();
    let servicenow = connector_by_id("servicenow-1", &connectors).expect("present");

    let icon = connector_icon(&registry, Some(&servicenow.action_type_id));
    assert_eq!(icon, IconType::new("logoServicenow"));

    // A type the registry has never seen degrades to no icon.
    let jira = connector_by_id("jira-1", &connectors).expect("present");
    assert_eq!(connector_icon(&registry, Some(&jira.action_type_id)), IconType::empty());
    assert_eq!(connector_icon(&registry, None), IconType::empty());
}

#[test]
fn icon_resolution_survives_concurrent_unregistration() {
    let registry = InMemoryActionTypeRegistry::new();
    register_case_action_types(&registry);

    let id = ActionTypeId::new(".swimlane");
    assert!(!connector_icon(&registry, Some(&id)).is_empty());

    // Another part of the host tears the type down between two renders.
    registry.unregister(&id).expect("registry is healthy");
    assert_eq!(connector_icon(&registry, Some(&id)), IconType::empty());
}
