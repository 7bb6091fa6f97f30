pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::memory::MemoryStore;
pub use api::{create_router, AppState};
pub use config::CliConfig;
pub use utils::error::{BoardError, FieldErrors, Result};
