pub mod sum_op;
pub use sum_op::*;

pub mod count_op;
pub use count_op::*;

pub mod castor_op;
pub use castor_op::{CastorOp, ALGO, ALGO_TYPE, CONF, FIELD};
