mod app;
mod environment;

pub use app::{Config, ConfigError};
pub use environment::Environment;
