pub mod literal;
pub use literal::*;

pub mod expr;
pub use expr::*;

pub mod call;
pub use call::*;
