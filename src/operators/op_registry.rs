use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    ast::Call,
    castor::Services,
    operators::{CastorOp, CountOp, Op, OpError, RoutineFactory, SumOp},
    schema::DataType,
};

/// Routine factories for the built-in operators, supplied by the executor.
#[derive(Clone)]
pub struct BuiltinFactories {
    pub sum: Arc<dyn RoutineFactory>,
    pub count: Arc<dyn RoutineFactory>,
    pub castor: Arc<dyn RoutineFactory>,
}

/// An operator bound to one call site, with the call's result type.
#[derive(Debug)]
pub struct BoundOp {
    pub op: Box<dyn Op>,
    pub result_type: DataType,
}

impl BoundOp {
    pub fn factory(&self) -> Arc<dyn RoutineFactory> {
        self.op.factory()
    }

    pub fn can_push_down_series(&self) -> bool {
        self.op.can_push_down_series()
    }
}

/// Case-insensitive registry of aggregate operator prototypes.
/// Lookups hand out clones, never the prototype itself.
#[derive(Default)]
pub struct OpRegistry {
    by_name: IndexMap<String, Box<dyn Op>>,
}

impl OpRegistry {
    pub fn new() -> Self { Self { by_name: IndexMap::new() } }

    /// Registers `op` under its lowercased name, replacing any previous one.
    pub fn register<O: Op + 'static>(&mut self, op: O) {
        self.by_name.insert(op.name().to_ascii_lowercase(), Box::new(op));
    }

    pub fn get(&self, name: &str) -> Option<Box<dyn Op>> {
        self.by_name.get(&name.to_ascii_lowercase()).map(|op| op.clone_op())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Registered names, in registration order.
    pub fn list(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// Result type of `call`, from the types of its arguments.
    pub fn infer_type(&self, call: &Call) -> Result<DataType, OpError> {
        let op = self.lookup(call)?;
        op.data_type(&call.arg_types())
    }

    /// Planner entry point: clone the operator for this call site, infer the
    /// result type, then compile the call. Any failure rejects the call.
    pub fn bind(&self, call: &mut Call) -> Result<BoundOp, OpError> {
        let op = self.lookup(call)?;
        let result_type = op.data_type(&call.arg_types())?;
        op.compile(call)?;
        debug!(call = %call, result_type = %result_type, "aggregate bound");
        Ok(BoundOp { op, result_type })
    }

    fn lookup(&self, call: &Call) -> Result<Box<dyn Op>, OpError> {
        self.get(&call.name).ok_or_else(|| OpError::FunctionNotFound(call.name.clone()))
    }

    pub fn with_builtins(factories: BuiltinFactories, services: Services) -> Self {
        let mut registry = Self::new();
        registry.register(SumOp::new(factories.sum));
        registry.register(CountOp::new(factories.count));
        registry.register(CastorOp::new(factories.castor, services));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    use crate::{
        ast::Expr,
        operators::{OpId, _tests::fixtures::{alive_service, builtin_factories, castor_call, no_service}},
    };

    fn registry() -> OpRegistry {
        let (_svc, services) = alive_service();
        OpRegistry::with_builtins(builtin_factories(), services)
    }

    #[test]
    fn registry_contains_builtins_and_lookup_is_case_insensitive() {
        let r = registry();
        assert_eq!(r.list(), vec!["sum", "count", "castor"]);

        assert!(r.contains("SUM"));
        assert_eq!(r.get("Count").unwrap().id(), OpId::Count);
        assert_eq!(r.get("CASTOR").unwrap().arity(), 4);
        assert!(r.get("avg").is_none());
    }

    #[test]
    fn lookups_return_independent_clones() {
        let r = registry();
        let a = r.get("sum").unwrap();
        let b = r.get("sum").unwrap();
        assert!(!std::ptr::eq(
            a.as_ref() as *const dyn Op as *const u8,
            b.as_ref() as *const dyn Op as *const u8,
        ));
        assert!(Arc::ptr_eq(&a.factory(), &b.factory()));
    }

    #[test]
    fn infer_type_routes_to_operator() {
        let r = registry();
        let count = Call::new("COUNT", vec![Expr::field("temperature", DataType::Float)]);
        assert_eq!(r.infer_type(&count).unwrap(), DataType::Integer);

        let sum = Call::new("sum", vec![Expr::field("status", DataType::Boolean)]);
        assert!(matches!(r.infer_type(&sum), Err(OpError::TypeIncompatible { .. })));

        let missing = Call::new("median", vec![Expr::field("v", DataType::Float)]);
        assert!(matches!(r.infer_type(&missing), Err(OpError::FunctionNotFound(ref n)) if n == "median"));
    }

    #[test]
    fn bind_castor_call() {
        let r = registry();
        let mut call = castor_call(DataType::Integer, "ml_algo", "cfg1", "detect");

        let bound = r.bind(&mut call).unwrap();
        assert_eq!(bound.result_type, DataType::Float);
        assert_eq!(bound.op.name(), "castor");
        assert!(!bound.can_push_down_series());
        assert_eq!(call.args[3].as_string_literal(), Some("_detect"));
    }

    #[test]
    fn bind_type_failure_skips_compile() {
        let r = registry();
        // string field fails type inference, so the literal is never rewritten
        let mut call = castor_call(DataType::String, "ml_algo", "cfg1", "detect");
        assert!(matches!(r.bind(&mut call), Err(OpError::TypeIncompatible { .. })));
        assert_eq!(call.args[3].as_string_literal(), Some("detect"));
    }

    #[test]
    fn bind_without_service() {
        let r = OpRegistry::with_builtins(builtin_factories(), no_service());
        let mut call = castor_call(DataType::Float, "ml_algo", "cfg1", "detect");
        assert!(matches!(r.bind(&mut call), Err(OpError::ServiceNotEnabled)));

        // sum/count do not depend on the service
        let mut sum = Call::new("sum", vec![Expr::field("v", DataType::Float)]);
        let bound = r.bind(&mut sum).unwrap();
        assert_eq!(bound.result_type, DataType::Float);
        assert!(bound.can_push_down_series());
    }

    #[test]
    fn concurrent_binds_use_their_own_clones() {
        let r = Arc::new(registry());
        let handles: Vec<_> = (0..8).map(|i| {
            let r = Arc::clone(&r);
            thread::spawn(move || {
                let algo_type = if i % 2 == 0 { "detect" } else { "fit_detect" };
                let mut call = castor_call(DataType::Float, "ml_algo", "cfg1", algo_type);
                r.bind(&mut call).unwrap();
                call.args[3].as_string_literal().map(str::to_string)
            })
        }).collect();

        for (i, h) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 { "_detect" } else { "_fit_detect" };
            assert_eq!(h.join().unwrap().as_deref(), Some(expected));
        }
    }
}
