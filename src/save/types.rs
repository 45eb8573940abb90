//! Save data types
//!
//! Data structures for whole save files and the errors the save manager can
//! surface. Serde handles the JSON (de)serialization.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::node::ItemNode;

/// The root save file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
    /// One node per persisted item, in world load order
    pub items: Vec<ItemNode>,
}

/// Metadata about the save
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub game_version: String,
    pub save_type: SaveType,
    pub save_slot: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SaveType {
    Manual,
    Auto,
    QuickSave,
}

/// Error types for save/load operations
#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
    CorruptedData(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            SaveError::InvalidVersion(v) => write!(f, "Invalid save version: {}", v),
            SaveError::CorruptedData(msg) => write!(f, "Corrupted save data: {}", msg),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::IoError(err)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::SerializationError(err)
    }
}

/// Current save file version
pub const CURRENT_SAVE_VERSION: u32 = 1;
