pub mod schema;
pub use schema::DataType;

pub mod ast;
pub use ast::{Call, Expr, Literal};

pub mod castor;
pub use castor::{AlgoType, CastorConfig, CastorError, CastorService, HeartbeatCastorService, ServiceRegistry, Services};

pub mod operators;
pub use operators::{BoundOp, BuiltinFactories, CastorOp, CountOp, Op, OpError, OpId, OpRegistry, Routine, RoutineFactory, SumOp};
