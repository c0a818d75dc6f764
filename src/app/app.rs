// Core app structure and the queued-action runner

use super::commands::failure_text;
use super::slot_picker::SlotPicker;
use crate::error::SyncError;
use crate::locate::{SaveLocator, SavePath, SlotResolution, resolve_slot};
use crate::paths::AppPaths;
use crate::remote::GitHubClient;
use crate::sync::{SaveSync, SyncAction, SyncReport};
use crate::util::*;
use crate::wizard::SetupWizard;

/// An action waiting for the "working" banner to be painted before it blocks the UI
pub struct QueuedRun {
    pub action: SyncAction,
    pub save: Option<SavePath>,
    pub banner_painted: bool,
}

pub struct CloudSaveApp {
    pub sync: SaveSync<GitHubClient>,
    pub locator: SaveLocator,
    pub paths: AppPaths,

    pub slot_picker: Option<SlotPicker>,
    pub wizard: Option<SetupWizard>,
    pub show_help: bool,

    pub queued: Option<QueuedRun>,
    /// Whether credentials were on disk at the last check
    pub configured: bool,
    pub infotext: String,
    /// Outcome of the last action (success flag, text)
    pub last_status: Option<(bool, String)>,
}

impl CloudSaveApp {
    pub fn new(sync: SaveSync<GitHubClient>, locator: SaveLocator, paths: AppPaths) -> Self {
        let configured = matches!(sync.credentials().load(), Ok(Some(_)));
        Self {
            sync,
            locator,
            paths,
            slot_picker: None,
            wizard: None,
            show_help: false,
            queued: None,
            configured,
            infotext: String::new(),
            last_status: None,
        }
    }

    /// True while anything modal is open or an action is pending
    pub fn is_busy(&self) -> bool {
        self.queued.is_some() || self.slot_picker.is_some() || self.wizard.is_some()
    }

    /// Re-read the credential file after anything that may have changed it
    pub fn refresh_configured(&mut self) {
        self.configured = matches!(self.sync.credentials().load(), Ok(Some(_)));
    }

    /// Scan for save slots and either queue the action or ask which slot to use
    pub fn begin_sync(&mut self, action: SyncAction) {
        if self.is_busy() {
            return;
        }
        match resolve_slot(self.locator.find()) {
            SlotResolution::NotFound => self.queue(action, None),
            SlotResolution::Single(save) => self.queue(action, Some(save)),
            SlotResolution::Ambiguous(candidates) => {
                self.slot_picker = Some(SlotPicker::new(action, candidates));
            }
        }
    }

    pub fn queue(&mut self, action: SyncAction, save: Option<SavePath>) {
        self.queued = Some(QueuedRun {
            action,
            save,
            banner_painted: false,
        });
    }

    /// Runs the queued action once its banner has been on screen for a frame.
    pub fn run_queued(&mut self) {
        let ready = matches!(&self.queued, Some(q) if q.banner_painted);
        if !ready {
            return;
        }
        let Some(run) = self.queued.take() else {
            return;
        };
        let result = self.sync.run(run.action, run.save.as_ref());
        self.refresh_configured();
        self.finish_sync(run.action, result);
    }

    fn finish_sync(&mut self, action: SyncAction, result: Result<SyncReport, SyncError>) {
        match result {
            Ok(report) => {
                let text = report.message();
                self.last_status = Some((true, text.clone()));
                msg("Success", &text);
            }
            Err(e) => {
                let text = failure_text(action, &e);
                self.last_status = Some((false, text.clone()));
                msg("Error", &text);
                if e.needs_setup()
                    && yesno("Set up GitHub", "Open the GitHub setup wizard now?")
                {
                    self.open_wizard();
                }
            }
        }
    }

    pub fn open_wizard(&mut self) {
        self.wizard = Some(SetupWizard::new());
    }
}
