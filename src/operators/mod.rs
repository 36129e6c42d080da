pub mod op_error;
pub use op_error::*;

pub mod op_id;
pub use op_id::*;

pub mod routine;
pub use routine::*;

pub mod base_op;
pub use base_op::*;

pub mod op;
pub use op::*;

pub mod functions;
pub use functions::*;

pub mod op_registry;
pub use op_registry::*;
