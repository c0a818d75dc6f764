//! Main-window actions and their dispatch

use super::app::CloudSaveApp;
use crate::error::SyncError;
use crate::sync::SyncAction;
use egui_phosphor::regular as icons;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Upload,
    Download,
    ConfigureGitHub,
    Help,
}

pub struct CommandSpec {
    pub command: Command,
    pub label: &'static str,
    pub icon: &'static str,
    pub hover: &'static str,
}

/// Buttons shown on the main window, top to bottom
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Upload,
        label: "Upload",
        icon: icons::CLOUD_ARROW_UP,
        hover: "Send your current DS3 save to the GitHub repository.",
    },
    CommandSpec {
        command: Command::Download,
        label: "Download",
        icon: icons::CLOUD_ARROW_DOWN,
        hover: "Replace your local DS3 save with the copy on GitHub. The current save is backed up first.",
    },
    CommandSpec {
        command: Command::ConfigureGitHub,
        label: "Set up GitHub",
        icon: icons::GITHUB_LOGO,
        hover: "Choose the repository and access token used for cloud saves.",
    },
    CommandSpec {
        command: Command::Help,
        label: "Help",
        icon: icons::QUESTION,
        hover: "How to use DS3 Cloud Save.",
    },
];

impl CloudSaveApp {
    pub fn dispatch(&mut self, command: Command) {
        log::debug!("Dispatching {:?}", command);
        match command {
            Command::Upload => self.begin_sync(SyncAction::Upload),
            Command::Download => self.begin_sync(SyncAction::Download),
            Command::ConfigureGitHub => self.open_wizard(),
            Command::Help => self.show_help = true,
        }
    }
}

/// Notification text for a failed action
pub fn failure_text(action: SyncAction, e: &SyncError) -> String {
    match e {
        SyncError::SaveNotFound => match action {
            SyncAction::Upload => "DS3 save file not found!".to_string(),
            SyncAction::Download => "DS3 save folder not found!".to_string(),
        },
        SyncError::NotConfigured => "Set up GitHub first!".to_string(),
        SyncError::EmptyLocalFile => "The save file is empty!".to_string(),
        SyncError::EmptyRemoteFile => "The downloaded file is empty!".to_string(),
        SyncError::RemoteStatus { status, body } => {
            format!("Transfer failed (HTTP {}): {}", status, body)
        }
        other => format!("Transfer failed: {}", other),
    }
}
