//! Configuration loading for the demo binary

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fieldvoice_foundation::error::AppError;
use fieldvoice_speech::RecorderConfig;

/// Top-level configuration file shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recorder settings, all optional with engine-contract defaults
    #[serde(default)]
    pub recorder: RecorderConfig,
}

/// Load configuration from a TOML file.
pub fn load(path: &Path) -> Result<AppConfig, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_recorder_settings_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[recorder]\ninterim_results = false\nlang = \"en-GB\""
        )
        .unwrap();

        let config = load(file.path()).unwrap();
        assert!(!config.recorder.interim_results);
        assert_eq!(config.recorder.lang, "en-GB");
        assert!(config.recorder.continuous);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load(file.path()).unwrap();
        assert_eq!(config.recorder, RecorderConfig::default());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load(Path::new("/nonexistent/fieldvoice.toml")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
