// ============================================================================
// JsonSync Library
// ============================================================================

pub mod behaviors;
pub mod core;
pub mod record;

// Re-export main types for convenience
pub use crate::behaviors::json_sync::JsonSyncBehavior;
pub use crate::behaviors::{Behavior, BehaviorRegistry, LifecyclePhase};
pub use crate::core::{BehaviorError, Result, Value};
pub use crate::record::{MemoryRecord, Record};
