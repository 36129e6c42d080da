use std::sync::Arc;

use crate::{operators::{BaseOp, Op, OpError, OpId, RoutineFactory}, schema::DataType};

#[derive(Clone)]
pub struct SumOp {
    base: BaseOp,
    factory: Arc<dyn RoutineFactory>,
}

impl SumOp {
    pub fn new(factory: Arc<dyn RoutineFactory>) -> Self {
        Self { base: BaseOp::new("sum", OpId::Sum, 1), factory }
    }
}

impl Op for SumOp {
    fn base(&self) -> &BaseOp { &self.base }

    fn clone_op(&self) -> Box<dyn Op> { Box::new(self.clone()) }

    fn factory(&self) -> Arc<dyn RoutineFactory> { Arc::clone(&self.factory) }

    // no promotion: sum(int) stays int
    fn data_type(&self, args: &[DataType]) -> Result<DataType, OpError> {
        self.base.check_arity(args.len())?;
        match args[0] {
            ty @ (DataType::String | DataType::Boolean) => Err(OpError::TypeIncompatible {
                op: self.base.name().to_string(),
                ty,
            }),
            ty => Ok(ty),
        }
    }
}
