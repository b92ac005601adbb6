//! Item persistence
//!
//! The whole list is a single JSON document at `~/.config/todui/items.json`
//! with last-write-wins semantics. Loading is tolerant: a missing or
//! corrupt file yields the starter items rather than an error, so a bad
//! store never locks the user out of the app.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TodoError;

use super::item::Item;

const CONFIG_DIR: &str = "todui";
const ITEMS_FILE: &str = "items.json";

pub fn items_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(ITEMS_FILE))
}

/// The starter list shown on first launch
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("Buy Eggos"),
        Item::new("Destroy Demogorgon"),
        Item::new("Find Mike"),
    ]
}

pub fn load_items(path: &Path) -> Vec<Item> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return default_items(),
    };

    match serde_json::from_str::<Vec<Item>>(&contents) {
        Ok(items) => items,
        Err(e) => {
            log::debug!("Ignoring unparseable item store: {}", e);
            default_items()
        }
    }
}

/// Write the full list, creating parent directories as needed
pub fn save_items(path: &Path, items: &[Item]) -> Result<(), TodoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(items)
        .map_err(|e| TodoError::InvalidStore(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
