//! Инфраструктурный слой вокруг движка блэкджека:
//! - RNG-реализации для движка;
//! - конфиг сервиса (TOML);
//! - инициализация логов.

pub mod config;
pub mod logging;
pub mod rng;

pub use config::{ConfigError, ServiceConfig};
pub use logging::init_logger;
pub use rng::*;
