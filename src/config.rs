//! Store configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the feed store.
///
/// Host applications embed this in their own configuration files; the crate
/// itself reads nothing from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity of the intent channel between producers and the store task
    /// (default: 16).
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_channel_capacity() -> usize {
    16
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}
