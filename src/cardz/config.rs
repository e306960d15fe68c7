use crate::error::{CardzError, Result};
use crate::input::DEFAULT_MASK;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cardz, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardzConfig {
    /// Character standing in for untyped digits on the card preview
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

fn default_mask_char() -> char {
    DEFAULT_MASK
}

impl Default for CardzConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK,
        }
    }
}

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardzError::Io)?;
        let config: CardzConfig =
            serde_json::from_str(&content).map_err(CardzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardzError::Serialization)?;
        fs::write(config_path, content).map_err(CardzError::Io)?;
        Ok(())
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Set the mask from user input: exactly one visible character.
    pub fn set_mask_char(&mut self, value: &str) -> Result<()> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => {
                self.mask_char = c;
                Ok(())
            }
            _ => Err(CardzError::Api(format!(
                "mask-char must be a single visible character, got {:?}",
                value
            ))),
        }
    }
}
