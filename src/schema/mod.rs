pub mod data_type;
pub use data_type::*;
