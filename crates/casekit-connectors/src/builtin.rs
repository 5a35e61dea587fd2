//! Built-in action types the cases feature registers at startup

use casekit_core::{ActionTypeId, ConnectorType, IconType};
use casekit_registry::{ActionTypeDescriptor, InMemoryActionTypeRegistry};
use tracing::debug;

/// Register the case-capable action types with their display icons.
///
/// Matches the `ActionTypeRegistrar` alias so hosts can hand it around as a
/// plain function pointer.
pub fn register_case_action_types(registry: &InMemoryActionTypeRegistry) {
    let builtin = [
        descriptor(ConnectorType::ServiceNowItsm, "ServiceNow ITSM", "logoServicenow"),
        descriptor(ConnectorType::ServiceNowSir, "ServiceNow SecOps", "logoServicenow"),
        descriptor(ConnectorType::Swimlane, "Swimlane", "logoSwimlane"),
    ];

    for entry in builtin {
        if let Err(error) = registry.register(entry) {
            debug!(%error, "skipping built-in action type");
        }
    }
    debug!("registered built-in case action types");
}

fn descriptor(connector_type: ConnectorType, name: &str, icon: &str) -> ActionTypeDescriptor {
    ActionTypeDescriptor {
        id: ActionTypeId::new(connector_type.id()),
        name: name.to_string(),
        icon: IconType::new(icon),
        enabled_in_cases: true,
    }
}
