mod action_log;
mod app;
mod config;
mod credentials;
mod error;
mod locate;
mod paths;
mod remote;
mod sync;
mod util;
mod wizard;

use crate::action_log::ActionLog;
use crate::app::CloudSaveApp;
use crate::config::{load_cfg, save_cfg};
use crate::credentials::CredentialStore;
use crate::locate::{LocateEnv, Platform, SaveLocator};
use crate::paths::{AppPaths, default_data_dir};
use crate::remote::{GitHubClient, RemoteOptions};
use crate::sync::SaveSync;
use std::path::PathBuf;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut data_dir = default_data_dir();
    if let Some(index) = args.iter().position(|arg| arg == "--data-dir") {
        match args.get(index + 1) {
            Some(dir) => data_dir = PathBuf::from(dir),
            None => {
                eprintln!("{}", USAGE_TEXT);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        log::error!("Failed to create data folder {}: {}", data_dir.display(), e);
    }

    let mut paths = AppPaths::new(&data_dir);
    let cfg = load_cfg(&paths.settings);
    if !paths.settings.exists() {
        // Write defaults so the file can be edited by hand
        if let Err(e) = save_cfg(&paths.settings, &cfg) {
            log::warn!("Failed to write {}: {}", paths.settings.display(), e);
        }
    }
    if let Some(backup_dir) = &cfg.backup_dir {
        paths.backup_dir = backup_dir.clone();
    }
    log::info!("Data folder: {}", paths.data_dir.display());

    let client = match GitHubClient::new(RemoteOptions::from_config(&cfg)) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let sync = SaveSync::new(
        client,
        CredentialStore::new(&paths.credentials),
        ActionLog::new(&paths.action_log),
        paths.backup_file(),
        &cfg.fallback_branch,
    );

    let platform = Platform::detect();
    log::info!("Probing save folders for {:?}", platform);
    let locator = SaveLocator::new(platform, LocateEnv::from_env(), cfg.extra_save_dirs.clone());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("DS3 Cloud Save Manager")
            .with_inner_size([400.0, 340.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "DS3 Cloud Save Manager",
        options,
        Box::new(move |cc| {
            crate::app::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(CloudSaveApp::new(sync, locator, paths)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: ds3-cloudsave [OPTIONS]

Options:
    --data-dir <path>     Keep settings, credentials, the action log and backups in <path>
    --help                Show this message
"#;
