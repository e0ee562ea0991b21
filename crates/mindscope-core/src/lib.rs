pub mod config;
pub mod error;
pub mod types;

pub use config::{MindscopeConfig, Secrets};
pub use error::{MindscopeError, Result};
pub use types::*;
