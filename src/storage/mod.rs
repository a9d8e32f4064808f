//! Persistent key-value slots for feature state
//!
//! Feature state (the recent-selections list) is stored through the
//! [`KeyValueStore`] trait so it can be backed by files in production and by
//! [`MemoryStore`] in tests.
//!
//! File location: platform-specific data directories (see [`crate::utils::get_data_dir`])
//! - macOS: `~/Library/Application Support/event-finder/`
//! - Linux: `~/.local/share/event-finder/`
//! - Windows: `%APPDATA%\event-finder\`

pub mod file;
pub mod memory;

use anyhow::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed storage for small serialized values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}
