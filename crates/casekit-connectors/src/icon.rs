//! Display-icon resolution for connector types

use casekit_core::{ActionTypeId, IconType};
use casekit_registry::ActionTypeRegistry;
use tracing::debug;

/// Resolve the display icon for a connector type.
///
/// The registry is mutated at runtime by other parts of the hosting system,
/// so `get` can fail even after a positive `has` probe. Every failure path
/// degrades to the empty icon; a missing or inconsistent registry entry must
/// never take the caller down.
pub fn connector_icon<R>(registry: &R, action_type_id: Option<&ActionTypeId>) -> IconType
where
    R: ActionTypeRegistry + ?Sized,
{
    let Some(id) = action_type_id else {
        return IconType::empty();
    };

    if registry.has(id) {
        match registry.get(id) {
            Ok(descriptor) => return descriptor.icon,
            Err(error) => {
                debug!(action_type = %id, %error, "icon lookup failed, falling back to no icon");
                return IconType::empty();
            }
        }
    }

    IconType::empty()
}
