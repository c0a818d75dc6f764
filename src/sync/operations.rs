// Local file I/O for save synchronization

use std::path::{Path, PathBuf};

pub fn read_save(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Copy the current save into the single backup slot, replacing the previous
/// backup. Returns `None` when there was nothing to back up.
pub fn backup_save(save: &Path, backup_file: &Path) -> std::io::Result<Option<PathBuf>> {
    if !save.is_file() {
        return Ok(None);
    }
    if let Some(parent) = backup_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(save, backup_file)?;
    log::info!(
        "Backed up {} -> {}",
        save.display(),
        backup_file.display()
    );
    Ok(Some(backup_file.to_path_buf()))
}

pub fn write_save(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)
}
