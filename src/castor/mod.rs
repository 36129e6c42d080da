pub mod castor_error;
pub use castor_error::*;

pub mod algo_type;
pub use algo_type::*;

pub mod castor_config;
pub use castor_config::*;

pub mod castor_service;
pub use castor_service::*;

pub mod service_registry;
pub use service_registry::*;
