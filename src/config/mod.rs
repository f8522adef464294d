//! Configuration file handling and the persisted language store.

mod manager;
mod store;

pub use manager::{
    BackendConfig, BackendKind, ConfigFile, ConfigManager, DEFAULT_TIMEOUT_SECS, LanguageTable,
    resolve_backend,
};
pub use store::{ConfigStore, LanguageStore, MemoryStore};
