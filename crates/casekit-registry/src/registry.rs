//! Runtime registry of the action types available to the cases feature

use crate::error::{RegistryError, RegistryResult};
use casekit_core::{ActionTypeId, IconType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// What the registry stores per action type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionTypeDescriptor {
    pub id: ActionTypeId,
    /// Human-readable name shown in selection lists.
    pub name: String,
    /// Display icon reference; empty means the type ships no icon.
    pub icon: IconType,
    /// Whether the action type may back a case connector.
    #[serde(default)]
    pub enabled_in_cases: bool,
}

/// Read surface of an action-type registry.
///
/// `get` fails for an identifier that is not registered; `has` is the cheap
/// presence probe callers run first. The registry may be mutated concurrently
/// by other parts of the hosting system, so a positive `has` does not
/// guarantee that a later `get` succeeds.
pub trait ActionTypeRegistry: Send + Sync {
    fn has(&self, id: &ActionTypeId) -> bool;

    fn get(&self, id: &ActionTypeId) -> RegistryResult<ActionTypeDescriptor>;

    /// Identifiers of every registered action type.
    fn list(&self) -> Vec<ActionTypeId>;
}

/// In-memory action-type registry with runtime registration.
#[derive(Default)]
pub struct InMemoryActionTypeRegistry {
    action_types: RwLock<HashMap<ActionTypeId, ActionTypeDescriptor>>,
}

impl InMemoryActionTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous entry for the same id.
    pub fn register(&self, descriptor: ActionTypeDescriptor) -> RegistryResult<()> {
        let mut action_types = self
            .action_types
            .write()
            .map_err(|e| RegistryError::Inconsistent(e.to_string()))?;
        debug!(action_type = %descriptor.id, "registered action type");
        action_types.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }

    /// Remove an action type; returns the descriptor if one was registered.
    pub fn unregister(&self, id: &ActionTypeId) -> RegistryResult<Option<ActionTypeDescriptor>> {
        let mut action_types = self
            .action_types
            .write()
            .map_err(|e| RegistryError::Inconsistent(e.to_string()))?;
        let removed = action_types.remove(id);
        if removed.is_some() {
            debug!(action_type = %id, "unregistered action type");
        }
        Ok(removed)
    }
}

impl ActionTypeRegistry for InMemoryActionTypeRegistry {
    fn has(&self, id: &ActionTypeId) -> bool {
        // A poisoned lock reads as "not registered" rather than panicking.
        self.action_types.read().map(|m| m.contains_key(id)).unwrap_or(false)
    }

    fn get(&self, id: &ActionTypeId) -> RegistryResult<ActionTypeDescriptor> {
        let action_types =
            self.action_types.read().map_err(|e| RegistryError::Inconsistent(e.to_string()))?;
        action_types
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::ActionTypeNotRegistered(id.clone()))
    }

    fn list(&self) -> Vec<ActionTypeId> {
        self.action_types.read().map(|m| m.keys().cloned().collect()).unwrap_or_default()
    }
}
