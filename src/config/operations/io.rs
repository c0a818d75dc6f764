use crate::config::types::CloudSaveConfig;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg(path: &Path) -> CloudSaveConfig {
    if let Ok(file) = File::open(path) {
        match serde_json::from_reader::<_, CloudSaveConfig>(BufReader::new(file)) {
            Ok(mut config) => {
                config.migrate();
                return config;
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings file {}: {}", path.display(), e);
            }
        }
    }

    // Return default settings if file doesn't exist or has error
    CloudSaveConfig::default()
}

pub fn save_cfg(path: &Path, config: &CloudSaveConfig) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
