use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Configuration for markhive, stored as config.json in the output directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkhiveConfig {
    /// Extensions treated as notes when building (e.g. ".md", ".markdown")
    #[serde(default = "default_note_extensions")]
    pub note_extensions: Vec<String>,

    /// Address the serve command binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_note_extensions() -> Vec<String> {
    vec![".md".to_string(), ".markdown".to_string()]
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Default for MarkhiveConfig {
    fn default() -> Self {
        Self {
            note_extensions: default_note_extensions(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl MarkhiveConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MarkhiveConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// True when the path's extension is one of the configured note extensions.
    pub fn is_note_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = format!(".{}", ext.to_string_lossy());
        self.note_extensions.contains(&ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = MarkhiveConfig::default();
        assert_eq!(config.note_extensions, vec![".md", ".markdown"]);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = MarkhiveConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, MarkhiveConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = MarkhiveConfig::default();
        config.bind_addr = "0.0.0.0:9000".to_string();
        config.save(temp_dir.path()).unwrap();

        let loaded = MarkhiveConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_is_note_file() {
        let config = MarkhiveConfig::default();
        assert!(config.is_note_file(&PathBuf::from("notes/a.md")));
        assert!(config.is_note_file(&PathBuf::from("b.markdown")));
        assert!(!config.is_note_file(&PathBuf::from("c.txt")));
        assert!(!config.is_note_file(&PathBuf::from("no_extension")));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = MarkhiveConfig {
            note_extensions: vec![".md".to_string()],
            bind_addr: "127.0.0.1:3000".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: MarkhiveConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
