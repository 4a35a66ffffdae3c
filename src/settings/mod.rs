use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GlobalSettings {
    garage_path: String
}

impl GlobalSettings {
    const GARAGE_PATH: &'static str = "garage_path";
    const CONFIG_FILENAME: &'static str = "tyre-ledger-conf";

    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder();
        return match builder
            .set_default(GlobalSettings::GARAGE_PATH, default_garage_path().to_string_lossy().into_owned())?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix("TYRE_LEDGER"))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let builder = Config::builder();
                let settings = builder
                    .set_default(GlobalSettings::GARAGE_PATH, default_garage_path().to_string_lossy().into_owned())?
                    .build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn garage_path(&self) -> PathBuf {
        PathBuf::from(&self.garage_path)
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}

fn default_garage_path() -> PathBuf {
    match ProjectDirs::from("", "zephyrj", "tyre-ledger") {
        Some(project_dirs) => project_dirs.data_dir().join("garage.json"),
        None => PathBuf::from("garage.json")
    }
}
