use serde_json::Value;

use crate::operators::OpError;

/// Per-group runtime state built by the executor.
/// The executor will:
///   1) evaluate the call's arguments per row into serde_json::Value
///   2) call `update(&mut self, &args)`
///   3) after all rows of the group (or series), call `finalize()`
pub trait Routine: Send {
    fn update(&mut self, args: &[Value]) -> Result<(), OpError>;

    fn finalize(&self) -> Value;
}

/// Capability the executor uses to build the runtime routine of an operator.
///
/// Supplied by whoever constructs the operator. The operator layer stores
/// and exposes it but never calls it.
pub trait RoutineFactory: Send + Sync {
    fn create_routine(&self) -> Box<dyn Routine>;
}
