//! Save/Load system
//!
//! Persists items as attribute-bearing nodes inside JSON save files:
//! - `node`: the `ItemNode` element and its lenient integer parsing
//! - `persist`: `Item::serialize` / `Item::unserialize` over nodes
//! - `types`: save file records and error types
//! - `manager`: `SaveManager` for slot files, autosaves, and cleanup
//!
//! Only non-derivable state is written; anything the type catalog can
//! answer (flags, stats, weight, names) stays out of the files.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut manager = SaveManager::new(SaveManager::default_directory())?;
//!
//! let save_file = SaveFile {
//!     version: CURRENT_SAVE_VERSION,
//!     timestamp: SystemTime::now(),
//!     metadata: SaveMetadata { /* ... */ },
//!     items: world_items.iter().map(|i| i.serialize(&types)).collect(),
//! };
//! manager.save_game(&save_file)?;
//!
//! let loaded = manager.load_game(1)?;
//! ```

pub mod manager;
pub mod node;
pub mod persist;
pub mod types;

// Re-export commonly used types
pub use manager::{SaveFileInfo, SaveManager};
pub use node::ItemNode;
pub use types::*;
