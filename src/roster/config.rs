use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Ask before removing a person
    #[serde(default = "default_true")]
    pub confirm_remove: bool,

    /// Try the system clipboard before printing addresses for manual copy
    #[serde(default = "default_true")]
    pub use_clipboard: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            confirm_remove: true,
            use_clipboard: true,
        }
    }
}

impl RosterConfig {
    pub const KEYS: [&'static str; 2] = ["confirm-remove", "use-clipboard"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<bool> {
        match key {
            "confirm-remove" => Ok(self.confirm_remove),
            "use-clipboard" => Ok(self.use_clipboard),
            other => Err(RosterError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let flag = parse_flag(value)?;
        match key {
            "confirm-remove" => self.confirm_remove = flag,
            "use-clipboard" => self.use_clipboard = flag,
            other => return Err(RosterError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(RosterError::Validation(format!(
            "Expected true or false, got: {}",
            other
        ))),
    }
}
