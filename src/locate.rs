//! Save slot discovery
//!
//! Dark Souls III keeps one `DS30000.sl2` per Steam account, each inside a
//! hex-named folder under `DarkSoulsIII`. We never cache what we find: the
//! locator is asked again for every upload or download.
//!
//! ## Module Structure
//! - `types.rs`: Platform, LocateEnv, SavePath, SlotResolution
//! - `pure.rs`: Candidate base directories per platform, slot resolution
//! - `operations.rs`: Directory probing, Steam library lookup

mod operations;
mod pure;
mod types;

use std::path::PathBuf;

pub use types::{LocateEnv, Platform, SavePath, SlotResolution};

pub use operations::find_save_candidates;
pub use pure::{candidate_bases, resolve_slot};

/// Platform strategy chosen once at startup.
pub struct SaveLocator {
    platform: Platform,
    env: LocateEnv,
    extra_dirs: Vec<PathBuf>,
    use_steam_libraries: bool,
}

impl SaveLocator {
    pub fn new(platform: Platform, env: LocateEnv, extra_dirs: Vec<PathBuf>) -> Self {
        Self {
            platform,
            env,
            extra_dirs,
            use_steam_libraries: platform == Platform::Unix,
        }
    }

    pub fn bases(&self) -> Vec<PathBuf> {
        let mut bases = candidate_bases(self.platform, &self.env);
        if self.use_steam_libraries {
            for base in operations::steam_library_bases() {
                if !bases.contains(&base) {
                    bases.push(base);
                }
            }
        }
        for extra in &self.extra_dirs {
            if !bases.contains(extra) {
                bases.push(extra.clone());
            }
        }
        bases
    }

    pub fn find(&self) -> Vec<SavePath> {
        let saves = find_save_candidates(&self.bases());
        log::info!("Found {} DS3 save slot(s)", saves.len());
        saves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_dirs_are_probed() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().join("DarkSoulsIII");
        std::fs::create_dir_all(base.join("0110000100000000")).unwrap();
        std::fs::write(base.join("0110000100000000/DS30000.sl2"), b"save").unwrap();

        let env = LocateEnv {
            appdata: Some(tmp.path().join("Roaming")),
            home: None,
            user: None,
        };
        let locator = SaveLocator::new(Platform::Windows, env, vec![base.clone(), base.clone()]);

        assert_eq!(
            locator.bases(),
            vec![tmp.path().join("Roaming/DarkSoulsIII"), base.clone()]
        );
        let found = locator.find();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slot_name(), "0110000100000000");
    }
}
