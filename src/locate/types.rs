//! Save discovery type definitions

use std::path::{Path, PathBuf};

/// Which set of base directories to probe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Native Windows install, saves under %APPDATA%
    Windows,
    /// Linux/macOS running the game through Proton or Wine
    Unix,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Environment values the base directories are derived from
#[derive(Clone, Debug, Default)]
pub struct LocateEnv {
    pub appdata: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub user: Option<String>,
}

impl LocateEnv {
    pub fn from_env() -> Self {
        Self {
            appdata: std::env::var_os("APPDATA").map(PathBuf::from),
            home: crate::paths::home_dir(),
            user: std::env::var("USER").ok(),
        }
    }
}

/// A discovered save slot file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavePath(PathBuf);

impl SavePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Name of the folder holding the slot (the Steam account folder)
    pub fn slot_name(&self) -> String {
        self.0
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Folder shown to the user when picking a slot
    pub fn slot_dir(&self) -> &Path {
        self.0.parent().unwrap_or(&self.0)
    }
}

/// What the controller has to do after scanning
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotResolution {
    NotFound,
    Single(SavePath),
    /// More than one slot; the user must pick
    Ambiguous(Vec<SavePath>),
}
