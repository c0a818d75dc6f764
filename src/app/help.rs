use super::app::CloudSaveApp;
use crate::wizard::{NEW_REPO_URL, NEW_TOKEN_URL};

use eframe::egui::{self, RichText};

impl CloudSaveApp {
    pub fn display_help(&mut self, ctx: &egui::Context) {
        let mut open = self.show_help;

        egui::Window::new("Help")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_max_width(420.0);
                ui.label(
                    "DS3 Cloud Save backs up and restores your Dark Souls III save through a GitHub repository.",
                );
                ui.add_space(8.0);

                egui::Grid::new("help_steps_grid")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        for (n, text) in [
                            "Press \"Set up GitHub\" and follow the wizard.",
                            "Create a private repository and a Personal Access Token.",
                            "Enter both and wait for the check to finish.",
                            "Press \"Upload\" to send your save to GitHub.",
                            "Press \"Download\" to restore it.",
                        ]
                        .iter()
                        .enumerate()
                        {
                            ui.label(RichText::new(format!("{}.", n + 1)).strong());
                            ui.label(*text);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.hyperlink_to("Create a repository", NEW_REPO_URL);
                ui.hyperlink_to("Create a token", NEW_TOKEN_URL);
                ui.add_space(8.0);
                ui.label(
                    "Downloading keeps a copy of your previous save in the backup folder. \
                     If something fails, check the token and the repository link.",
                );
                ui.label(
                    RichText::new(format!(
                        "Your token is stored only on this computer, in {}",
                        self.sync.credentials().path().display()
                    ))
                    .small()
                    .weak(),
                );
                ui.label(
                    RichText::new(format!(
                        "Every upload and download is recorded in {}",
                        self.sync.action_log().path().display()
                    ))
                    .small()
                    .weak(),
                );
            });

        self.show_help = open;
    }
}
