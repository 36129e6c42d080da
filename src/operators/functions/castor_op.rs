use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    ast::{Call, Expr},
    castor::{AlgoType, Services, INTERNAL_TAG_MARKER},
    operators::{BaseOp, Op, OpError, OpId, RoutineFactory},
    schema::DataType,
};

/// Argument positions of `castor(field, 'algo', 'conf', 'algo_type')`.
pub const FIELD: usize = 0;
pub const ALGO: usize = 1;
pub const CONF: usize = 2;
pub const ALGO_TYPE: usize = 3;

/// Anomaly detection aggregate backed by the external castor service.
///
/// Validation runs against the live service state, so unlike sum/count its
/// `compile` is not a pure function of the call. The result is an anomaly
/// level and always a float.
#[derive(Clone)]
pub struct CastorOp {
    base: BaseOp,
    factory: Arc<dyn RoutineFactory>,
    services: Services,
}

impl CastorOp {
    pub fn new(factory: Arc<dyn RoutineFactory>, services: Services) -> Self {
        Self { base: BaseOp::new("castor", OpId::Castor, 4), factory, services }
    }

    fn string_arg<'c>(&self, call: &'c Call, position: usize, arg: &'static str) -> Result<&'c str, OpError> {
        call.arg(position)
            .and_then(Expr::as_string_literal)
            .ok_or_else(|| self.assertion_failed(arg))
    }

    fn assertion_failed(&self, arg: &'static str) -> OpError {
        OpError::TypeAssertionFailed { op: self.base.name().to_string(), arg }
    }
}

impl Op for CastorOp {
    fn base(&self) -> &BaseOp { &self.base }

    fn clone_op(&self) -> Box<dyn Op> { Box::new(self.clone()) }

    fn factory(&self) -> Arc<dyn RoutineFactory> { Arc::clone(&self.factory) }

    fn data_type(&self, args: &[DataType]) -> Result<DataType, OpError> {
        self.base.check_arity(args.len())?;
        let field = args[FIELD];
        if !field.is_numeric() {
            return Err(OpError::TypeIncompatible { op: self.base.name().to_string(), ty: field });
        }
        Ok(DataType::Float)
    }

    /// Checks, in order: service present, service alive, argument count,
    /// algorithm type, algorithm and configuration literals, registration of
    /// the (algo, conf, type) triple. Only then is the algorithm type literal
    /// rewritten to its internal tag (`detect` -> `_detect`).
    ///
    /// The rewritten tag is not a valid algorithm type, so compiling the same
    /// call twice fails with `AlgoTypeNotFound` instead of prefixing again.
    fn compile(&self, call: &mut Call) -> Result<(), OpError> {
        let Some(srv) = self.services.castor() else {
            warn!(call = %call, "castor service not enabled");
            return Err(OpError::ServiceNotEnabled);
        };
        if !srv.is_alive() {
            warn!(call = %call, "castor service not alive");
            return Err(OpError::ServiceNotAlive);
        }

        self.base.check_arity(call.args.len())?;

        let algo_type = self.string_arg(call, ALGO_TYPE, "algo_type")?;
        if AlgoType::parse(algo_type).is_none() {
            return Err(OpError::AlgoTypeNotFound(algo_type.to_string()));
        }
        let algo = self.string_arg(call, ALGO, "algo")?;
        let conf = self.string_arg(call, CONF, "conf")?;
        srv.config().check_algo_and_conf_existence(algo, conf, algo_type)?;

        let Some(tag) = call.args[ALGO_TYPE].as_string_literal_mut() else {
            return Err(self.assertion_failed("algo_type"));
        };
        tag.insert(0, INTERNAL_TAG_MARKER);
        debug!(call = %call, "castor call compiled");
        Ok(())
    }

    fn can_push_down_series(&self) -> bool { false }
}
