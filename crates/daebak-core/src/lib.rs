pub mod config;
pub mod error;
pub mod logging;

pub use config::DaebakConfig;
pub use error::{DaebakError, Result};
