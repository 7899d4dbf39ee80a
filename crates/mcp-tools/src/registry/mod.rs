//! Tool registry: the records every artifact is rendered from.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_records, builtin_registry};
pub use store::{CapabilityGroup, DanglingFallback, ToolRegistry};
pub use types::{Capability, ParseCapabilityError, ToolRecord};
