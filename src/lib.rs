pub mod access;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod storage;

pub use access::AccessGate;
pub use catalog::PresetCatalog;
pub use config::{Config, GeminiConfig};
pub use error::{Result, StudioError};
pub use export::save_image;
pub use gemini::{ImageClient, ImageProvider, StudioClient};
pub use models::*;
pub use prompt::{compose, ComposedPrompt};
pub use storage::{AccessFlagStore, FileStore, MemoryStore, PresetRepository};
