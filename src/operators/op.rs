use std::{fmt, sync::Arc};

use crate::{ast::Call, operators::{BaseOp, OpError, OpId, RoutineFactory}, schema::DataType};

/// Compile-time contract of an aggregate function.
///
/// One prototype per function name is registered; every call site works on
/// its own `clone_op()` so concurrent query compilations never share
/// operator state.
pub trait Op: Send + Sync {
    fn base(&self) -> &BaseOp;

    fn name(&self) -> &str { self.base().name() }

    fn id(&self) -> OpId { self.base().id() }

    fn arity(&self) -> usize { self.base().arity() }

    /// Fresh instance with the same identity and routine factory.
    fn clone_op(&self) -> Box<dyn Op>;

    fn factory(&self) -> Arc<dyn RoutineFactory>;

    /// Result type for the given argument types. Pure, and callable before
    /// `compile`.
    fn data_type(&self, args: &[DataType]) -> Result<DataType, OpError>;

    /// Validates the whole call once per call site. Takes `&mut` because an
    /// operator may rewrite literal arguments into their internal form.
    ///
    /// The default only checks the argument count.
    fn compile(&self, call: &mut Call) -> Result<(), OpError> {
        self.base().check_arity(call.args.len())
    }

    /// Whether the planner may evaluate this aggregate per series and merge
    /// the partial results.
    fn can_push_down_series(&self) -> bool { true }
}

impl Clone for Box<dyn Op> {
    fn clone(&self) -> Self {
        self.clone_op()
    }
}

impl fmt::Debug for dyn Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Op")
            .field("name", &self.name())
            .field("id", &self.id())
            .field("arity", &self.arity())
            .finish()
    }
}
