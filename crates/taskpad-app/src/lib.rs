//! Session layer for taskpad: the state container that wires the task
//! book to persistence, plus application configuration.

mod config;
mod session;
mod store;

pub use config::{AppConfig, ConfigError};
pub use session::{PageView, Session};
pub use store::SlotStore;
