use anyhow::Result;
use std::path::PathBuf;

const APP_DIR: &str = "canonical-cli";

pub struct AppPaths;

impl AppPaths {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join(APP_DIR))
    }
}
