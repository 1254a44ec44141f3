pub mod json_sync;

use crate::core::Result;
use crate::record::Record;
use tracing::debug;

/// Points in a record's load/save flow where attached behaviors run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// Record has just been populated from storage.
    AfterFind,
    /// Record is about to be inserted.
    BeforeInsert,
    /// Record is about to be updated.
    BeforeUpdate,
}

/// Reusable unit of cross-cutting record logic, attached to a record type
/// without subclassing it.
pub trait Behavior: Send + Sync {
    /// Имя поведения для отладки
    fn name(&self) -> &'static str;

    /// Lifecycle phases this behavior subscribes to.
    fn phases(&self) -> &'static [LifecyclePhase];

    /// Run the behavior for one phase against one record.
    fn apply(&self, phase: LifecyclePhase, record: &mut dyn Record) -> Result<()>;
}

/// Behaviors attached to one record type.
///
/// The registry is built once when the record type is declared and stays
/// immutable afterwards; it holds no per-record state.
pub struct BehaviorRegistry {
    behaviors: Vec<Box<dyn Behavior>>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            behaviors: Vec::new(),
        }
    }

    /// Зарегистрировать поведение
    pub fn register(&mut self, behavior: Box<dyn Behavior>) {
        debug!("Registered behavior: {}", behavior.name());
        self.behaviors.push(behavior);
    }

    /// Dispatch one lifecycle phase to every subscribed behavior, in
    /// registration order. The first error aborts the dispatch.
    pub fn dispatch(&self, phase: LifecyclePhase, record: &mut dyn Record) -> Result<()> {
        for behavior in &self.behaviors {
            if behavior.phases().contains(&phase) {
                debug!("Dispatching {:?} to behavior '{}'", phase, behavior.name());
                behavior.apply(phase, record)?;
            }
        }
        Ok(())
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
