use crate::error::{NoteError, Result};
use crate::keys::KeyChord;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_UNDO_CHORD: &str = "ctrl+z";

/// Configuration for webnote, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebnoteConfig {
    /// Slot the page collection is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Key combination that undoes the last clear (e.g. "ctrl+z", "cmd+z")
    #[serde(default = "default_undo_chord")]
    pub undo_chord: String,

    /// Where downloads go; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_undo_chord() -> String {
    DEFAULT_UNDO_CHORD.to_string()
}

impl Default for WebnoteConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            undo_chord: default_undo_chord(),
            export_dir: None,
        }
    }
}

impl WebnoteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NoteError::Io)?;
        let config: WebnoteConfig =
            serde_json::from_str(&content).map_err(NoteError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NoteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NoteError::Serialization)?;
        fs::write(config_path, content).map_err(NoteError::Io)?;
        Ok(())
    }

    pub fn undo_chord(&self) -> Result<KeyChord> {
        self.undo_chord.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebnoteConfig::default();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.undo_chord().unwrap(), KeyChord::ctrl('z'));
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = WebnoteConfig::load(dir.path()).unwrap();
        assert_eq!(config, WebnoteConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = WebnoteConfig {
            storage_key: "scratch".to_string(),
            undo_chord: "cmd+z".to_string(),
            export_dir: Some(PathBuf::from("/tmp/exports")),
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = WebnoteConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"undo_chord": "^y"}"#).unwrap();

        let config = WebnoteConfig::load(dir.path()).unwrap();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.undo_chord().unwrap(), KeyChord::ctrl('y'));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "storage_key = 1").unwrap();
        assert!(matches!(
            WebnoteConfig::load(dir.path()),
            Err(NoteError::Serialization(_))
        ));
    }
}
