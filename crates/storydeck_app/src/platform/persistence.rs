use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use deck_logging::{deck_error, deck_info, deck_warn};
use serde::{Deserialize, Serialize};

/// Preference key holding the last-used search term.
pub(crate) const SEARCH_TERM_KEY: &str = "search";

const PREFS_FILENAME: &str = ".storydeck_prefs.ron";

/// Key-value preference capability. Injected into the effect runner so the
/// core never touches storage directly.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    values: BTreeMap<String, String>,
}

/// RON-file-backed preference store. Loads leniently (a missing or corrupt
/// file yields empty preferences) and writes through atomically on every
/// changed set.
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Opens the store at its default location in the current directory.
    pub fn open_default() -> Self {
        Self::open(PathBuf::from(PREFS_FILENAME))
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    fn write_through(&self) {
        let prefs = PersistedPrefs {
            values: self.values.clone(),
        };

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&prefs, pretty) {
            Ok(text) => text,
            Err(err) => {
                deck_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        if let Err(err) = atomic_write(&self.path, &content) {
            deck_error!("Failed to write preferences to {:?}: {}", self.path, err);
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if previous.as_deref() == Some(value) {
            return;
        }
        self.write_through();
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            deck_warn!("Failed to read preferences from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    match ron::from_str::<PersistedPrefs>(&content) {
        Ok(prefs) => {
            deck_info!("Loaded preferences from {:?}", path);
            prefs.values
        }
        Err(err) => {
            deck_warn!("Failed to parse preferences from {:?}: {}", path, err);
            BTreeMap::new()
        }
    }
}

/// Write a temp file next to the target and rename it into place.
fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace any existing file so the rename succeeds everywhere.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
