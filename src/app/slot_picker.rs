// Save slot choice when more than one DS3 save was found

use super::app::CloudSaveApp;
use crate::locate::SavePath;
use crate::sync::SyncAction;

use eframe::egui;

pub struct SlotPicker {
    pub action: SyncAction,
    pub candidates: Vec<SavePath>,
    pub selected: usize,
}

impl SlotPicker {
    pub fn new(action: SyncAction, candidates: Vec<SavePath>) -> Self {
        Self {
            action,
            candidates,
            selected: 0,
        }
    }
}

impl CloudSaveApp {
    pub fn display_slot_picker(&mut self, ctx: &egui::Context) {
        let Some(picker) = &mut self.slot_picker else {
            return;
        };

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new("Choose save slot")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.label("Several DS3 saves were found. Select the save slot:");
                ui.add_space(6.0);

                for (i, save) in picker.candidates.iter().enumerate() {
                    ui.radio_value(&mut picker.selected, i, save.slot_name())
                        .on_hover_text(save.slot_dir().display().to_string());
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            if let Some(picker) = self.slot_picker.take() {
                let save = picker.candidates.get(picker.selected).cloned();
                self.queue(picker.action, save);
            }
        } else if cancelled {
            if let Some(picker) = self.slot_picker.take() {
                // No slot chosen counts as "save not found"
                self.queue(picker.action, None);
            }
        }
    }
}
