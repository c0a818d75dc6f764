// Filesystem probing for save slots

use super::pure::proton_save_base;
use super::types::SavePath;
use crate::paths::SAVE_FILE_NAME;
use std::collections::HashSet;
use std::path::PathBuf;

/// Scan each existing base directory's immediate subfolders for a save slot.
/// Returns every match across all bases; an empty vec means nothing was found.
pub fn find_save_candidates(bases: &[PathBuf]) -> Vec<SavePath> {
    let mut saves = Vec::new();
    let mut seen = HashSet::new();

    for base in bases {
        if !base.is_dir() {
            continue;
        }

        let walk = walkdir::WalkDir::new(base)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walk {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", base.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let slot = entry.path().join(SAVE_FILE_NAME);
            if !slot.is_file() {
                continue;
            }

            // ~/.steam/steam is usually a symlink into another library root
            let key = std::fs::canonicalize(&slot).unwrap_or_else(|_| slot.clone());
            if seen.insert(key) {
                log::debug!("Found save slot: {}", slot.display());
                saves.push(SavePath::new(slot));
            }
        }
    }

    saves
}

/// Proton save directories inside every Steam library steamlocate knows about
pub fn steam_library_bases() -> Vec<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(steam_dir) = steamlocate::SteamDir::locate()
        && let Ok(libraries) = steam_dir.libraries()
    {
        for library in libraries {
            let library = match library {
                Ok(lib) => lib,
                Err(_) => continue,
            };
            bases.push(proton_save_base(library.path()));
        }
    }

    bases
}
