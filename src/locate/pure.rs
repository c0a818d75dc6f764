// Pure functions for save discovery
// No I/O; everything is derived from the passed-in environment

use super::types::{LocateEnv, Platform, SavePath, SlotResolution};
use crate::paths::DS3_STEAM_APPID;
use std::path::{Path, PathBuf};

const GAME_DIR: &str = "DarkSoulsIII";

/// Roaming AppData path inside a Proton prefix, relative to the Steam library root
pub fn proton_save_base(library_root: &Path) -> PathBuf {
    library_root
        .join("steamapps/compatdata")
        .join(DS3_STEAM_APPID.to_string())
        .join("pfx/drive_c/users/steamuser/AppData/Roaming")
        .join(GAME_DIR)
}

/// Base directories that may contain one folder per save slot
pub fn candidate_bases(platform: Platform, env: &LocateEnv) -> Vec<PathBuf> {
    match platform {
        Platform::Windows => env
            .appdata
            .iter()
            .map(|appdata| appdata.join(GAME_DIR))
            .collect(),
        Platform::Unix => {
            let Some(home) = &env.home else {
                return Vec::new();
            };
            let user = env.user.clone().unwrap_or_default();
            vec![
                proton_save_base(&home.join(".steam/steam")),
                home.join(".wine/drive_c/users")
                    .join(user)
                    .join("AppData/Roaming")
                    .join(GAME_DIR),
            ]
        }
    }
}

pub fn resolve_slot(mut candidates: Vec<SavePath>) -> SlotResolution {
    match candidates.len() {
        0 => SlotResolution::NotFound,
        1 => SlotResolution::Single(candidates.remove(0)),
        _ => SlotResolution::Ambiguous(candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_bases() {
        let env = LocateEnv {
            appdata: Some(PathBuf::from("C:/Users/ash/AppData/Roaming")),
            home: None,
            user: None,
        };
        assert_eq!(
            candidate_bases(Platform::Windows, &env),
            vec![PathBuf::from("C:/Users/ash/AppData/Roaming/DarkSoulsIII")]
        );
        assert!(candidate_bases(Platform::Windows, &LocateEnv::default()).is_empty());
    }

    #[test]
    fn test_unix_bases() {
        let env = LocateEnv {
            appdata: None,
            home: Some(PathBuf::from("/home/ash")),
            user: Some("ash".to_string()),
        };
        let bases = candidate_bases(Platform::Unix, &env);
        assert_eq!(
            bases,
            vec![
                PathBuf::from(
                    "/home/ash/.steam/steam/steamapps/compatdata/374320/pfx/drive_c/users/steamuser/AppData/Roaming/DarkSoulsIII"
                ),
                PathBuf::from("/home/ash/.wine/drive_c/users/ash/AppData/Roaming/DarkSoulsIII"),
            ]
        );
    }

    #[test]
    fn test_unix_without_home() {
        assert!(candidate_bases(Platform::Unix, &LocateEnv::default()).is_empty());
    }

    #[test]
    fn test_resolve_slot() {
        assert_eq!(resolve_slot(Vec::new()), SlotResolution::NotFound);

        let one = SavePath::new("/a/0110000100000000/DS30000.sl2");
        assert_eq!(
            resolve_slot(vec![one.clone()]),
            SlotResolution::Single(one.clone())
        );

        let two = SavePath::new("/b/0110000100000001/DS30000.sl2");
        assert_eq!(
            resolve_slot(vec![one.clone(), two.clone()]),
            SlotResolution::Ambiguous(vec![one, two])
        );
    }

    #[test]
    fn test_slot_name() {
        let save = SavePath::new("/a/0110000100000000/DS30000.sl2");
        assert_eq!(save.slot_name(), "0110000100000000");
        assert_eq!(save.slot_dir(), Path::new("/a/0110000100000000"));
    }
}
