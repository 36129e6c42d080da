use std::sync::Arc;

use crate::{operators::{BaseOp, Op, OpError, OpId, RoutineFactory}, schema::DataType};

#[derive(Clone)]
pub struct CountOp {
    base: BaseOp,
    factory: Arc<dyn RoutineFactory>,
}

impl CountOp {
    pub fn new(factory: Arc<dyn RoutineFactory>) -> Self {
        Self { base: BaseOp::new("count", OpId::Count, 1), factory }
    }
}

impl Op for CountOp {
    fn base(&self) -> &BaseOp { &self.base }

    fn clone_op(&self) -> Box<dyn Op> { Box::new(self.clone()) }

    fn factory(&self) -> Arc<dyn RoutineFactory> { Arc::clone(&self.factory) }

    fn data_type(&self, args: &[DataType]) -> Result<DataType, OpError> {
        self.base.check_arity(args.len())?;
        Ok(DataType::Integer)
    }
}
