pub mod error;
pub mod registry;

// Re-export commonly used types
pub use error::{RegistryError, RegistryResult};
pub use registry::{ActionTypeDescriptor, ActionTypeRegistry, InMemoryActionTypeRegistry};

/// A simple function type alias to allow features to expose a registrar function
pub type ActionTypeRegistrar = fn(&InMemoryActionTypeRegistry);
