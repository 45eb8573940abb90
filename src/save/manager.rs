//! Save manager for handling save/load operations
//!
//! Owns the save directory and the slot files inside it: writing save
//! files, loading them back, autosave timing, and pruning old autosaves.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use super::types::*;

const SLOT_COUNT: u8 = 5;

pub struct SaveManager {
    save_directory: PathBuf,
    current_save_slot: u8,
    autosave_interval: Duration,
    last_autosave: Option<SystemTime>,
}

impl SaveManager {
    /// Creates a new SaveManager rooted at the given directory
    ///
    /// The directory is created if it does not exist yet.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_directory = save_directory.as_ref().to_path_buf();

        if !save_directory.exists() {
            fs::create_dir_all(&save_directory)?;
        }

        Ok(SaveManager {
            save_directory,
            current_save_slot: 1,
            autosave_interval: Duration::from_secs(300), // 5 minutes
            last_autosave: None,
        })
    }

    /// The platform-standard save directory (`<data dir>/itemsys/saves`)
    ///
    /// Falls back to `./saves` when the platform reports no data directory.
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("itemsys")
            .join("saves")
    }

    /// Sets the active save slot (clamped to 1..=5)
    pub fn set_save_slot(&mut self, slot: u8) {
        self.current_save_slot = slot.clamp(1, SLOT_COUNT);
    }

    /// The active save slot
    pub fn save_slot(&self) -> u8 {
        self.current_save_slot
    }

    /// Writes a save file, returning the path it landed at
    ///
    /// Manual and quick saves overwrite their slot file; autosaves get a
    /// timestamped filename so several generations can coexist.
    pub fn save_game(&mut self, save_file: &SaveFile) -> Result<PathBuf, SaveError> {
        let filename =
            self.filename_for(save_file.metadata.save_type, save_file.metadata.save_slot);
        let filepath = self.save_directory.join(&filename);

        // Pretty JSON keeps the files diffable and hand-inspectable
        let json = serde_json::to_string_pretty(save_file)?;
        fs::write(&filepath, json)?;

        if save_file.metadata.save_type == SaveType::Auto {
            self.last_autosave = Some(SystemTime::now());
        }

        info!(
            "saved {} items to {}",
            save_file.items.len(),
            filepath.display()
        );
        Ok(filepath)
    }

    /// Loads the save file for a slot
    pub fn load_game(&self, slot: u8) -> Result<SaveFile, SaveError> {
        self.load_game_by_filename(&slot_filename(slot))
    }

    /// Loads a save file by name, rejecting versions newer than this build
    pub fn load_game_by_filename(&self, filename: &str) -> Result<SaveFile, SaveError> {
        let filepath = self.save_directory.join(filename);

        if !filepath.exists() {
            return Err(SaveError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("save file not found: {}", filename),
            )));
        }

        let json = fs::read_to_string(&filepath)?;
        let save_file: SaveFile = serde_json::from_str(&json)?;

        if save_file.version > CURRENT_SAVE_VERSION {
            warn!(
                "{} has version {}, newer than supported {}",
                filename, save_file.version, CURRENT_SAVE_VERSION
            );
            return Err(SaveError::InvalidVersion(save_file.version));
        }

        Ok(save_file)
    }

    /// Returns true once the autosave interval has elapsed (or if no
    /// autosave happened yet)
    pub fn should_autosave(&self) -> bool {
        match self.last_autosave {
            Some(last) => SystemTime::now()
                .duration_since(last)
                .map(|elapsed| elapsed >= self.autosave_interval)
                .unwrap_or(true),
            None => true,
        }
    }

    /// Returns true if a slot file exists
    pub fn save_exists(&self, slot: u8) -> bool {
        self.save_directory.join(slot_filename(slot)).exists()
    }

    /// Lists every readable save file, newest first
    pub fn list_saves(&self) -> Result<Vec<SaveFileInfo>, SaveError> {
        let mut saves = Vec::new();

        for entry in fs::read_dir(&self.save_directory)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
                continue;
            };
            match self.load_game_by_filename(filename) {
                Ok(save_file) => saves.push(SaveFileInfo {
                    filename: filename.to_string(),
                    timestamp: save_file.timestamp,
                    metadata: save_file.metadata,
                }),
                Err(e) => warn!("skipping unreadable save {}: {}", filename, e),
            }
        }

        saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(saves)
    }

    /// Deletes old autosaves, keeping the `keep_count` newest per slot
    pub fn cleanup_autosaves(&self, keep_count: usize) -> Result<(), SaveError> {
        for slot in 1..=SLOT_COUNT {
            let prefix = format!("autosave_slot{}_", slot);

            let mut autosaves: Vec<_> = fs::read_dir(&self.save_directory)?
                .filter_map(|entry| entry.ok())
                .filter(|entry| {
                    entry
                        .file_name()
                        .to_str()
                        .map(|name| name.starts_with(&prefix))
                        .unwrap_or(false)
                })
                .collect();

            // Newest first, by modification time
            autosaves.sort_by_key(|entry| {
                entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .ok()
                    .map(std::cmp::Reverse)
            });

            for entry in autosaves.iter().skip(keep_count) {
                info!("pruning autosave {}", entry.path().display());
                fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }

    fn filename_for(&self, save_type: SaveType, slot: u8) -> String {
        match save_type {
            SaveType::Manual | SaveType::QuickSave => slot_filename(slot),
            SaveType::Auto => {
                let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                format!("autosave_slot{}_{}.json", slot, timestamp)
            }
        }
    }
}

fn slot_filename(slot: u8) -> String {
    format!("slot_{}.json", slot)
}

pub struct SaveFileInfo {
    pub filename: String,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
}
