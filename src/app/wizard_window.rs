// GitHub setup wizard window

use super::app::CloudSaveApp;
use super::theme::colors;
use crate::util::msg;
use crate::wizard::{NEW_REPO_URL, NEW_TOKEN_URL, SetupWizard, WizardStep};

use eframe::egui::{self, RichText, Ui};

enum WizardExit {
    Accepted,
    Cancelled,
}

impl CloudSaveApp {
    pub fn display_wizard(&mut self, ctx: &egui::Context) {
        let Some(mut wizard) = self.wizard.take() else {
            return;
        };

        if wizard.paste_requested() {
            let pasted = ctx.input(|i| {
                i.events.iter().find_map(|e| match e {
                    egui::Event::Paste(text) => Some(text.clone()),
                    _ => None,
                })
            });
            if let Some(target) = wizard.take_paste(pasted.as_deref()) {
                log::debug!("Clipboard text went to {:?}", target);
            }
        }

        let mut open = true;
        let mut exit = None;

        egui::Window::new("GitHub setup wizard")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .fixed_size([460.0, 260.0])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!("Step {} of 4", wizard.step().number()))
                        .small()
                        .color(colors::TEXT_MUTED),
                );
                ui.add_space(6.0);

                match wizard.step() {
                    WizardStep::CreateRepository => {
                        ui.label("1. Create a new private GitHub repository to store your saves.");
                        ui.add_space(8.0);
                        if ui.button("Open GitHub").clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(NEW_REPO_URL));
                        }
                        next_button(ui, || wizard.advance());
                    }
                    WizardStep::CreateToken => {
                        ui.label("2. Create a Personal Access Token with the \"repo\" scope.");
                        ui.add_space(8.0);
                        if ui.button("Open token page").clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(NEW_TOKEN_URL));
                        }
                        next_button(ui, || wizard.advance());
                    }
                    WizardStep::EnterCredentials => {
                        if display_credential_inputs(ui, &mut wizard) {
                            // Blocks until GitHub answers
                            let accepted =
                                wizard.submit(self.sync.remote(), self.sync.credentials());
                            if accepted {
                                log::info!("GitHub credentials verified and saved");
                            }
                        }
                    }
                    WizardStep::Confirmed => {
                        ui.label(
                            RichText::new(wizard.confirmation().unwrap_or("Access confirmed."))
                                .color(colors::SUCCESS),
                        );
                        ui.add_space(8.0);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if ui.button("Done").clicked() {
                                exit = Some(WizardExit::Accepted);
                            }
                        });
                    }
                }
            });

        if !open && exit.is_none() {
            exit = Some(WizardExit::Cancelled);
        }

        match exit {
            Some(WizardExit::Accepted) => {
                self.refresh_configured();
                msg("Done", "GitHub configured successfully!");
            }
            Some(WizardExit::Cancelled) => {
                self.refresh_configured();
                log::info!("Setup wizard closed at step {}", wizard.step().number());
            }
            None => self.wizard = Some(wizard),
        }
    }
}

/// Returns true when "Next" was pressed
fn display_credential_inputs(ui: &mut Ui, wizard: &mut SetupWizard) -> bool {
    ui.label("3. Paste the repository link and the token.");
    ui.add_space(6.0);

    ui.label("Repository link:");
    ui.add(
        egui::TextEdit::singleline(&mut wizard.repo_input)
            .hint_text("https://github.com/username/repo.git")
            .desired_width(f32::INFINITY),
    );
    ui.label("Token:");
    ui.add(
        egui::TextEdit::singleline(&mut wizard.token_input)
            .hint_text("Personal Access Token")
            .password(true)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);
    if ui.button("Paste from clipboard").clicked() {
        wizard.request_paste();
        ui.ctx().send_viewport_cmd(egui::ViewportCommand::RequestPaste);
        ui.ctx().request_repaint();
    }

    if let Some(error) = wizard.error() {
        ui.add_space(4.0);
        ui.label(RichText::new(error).color(colors::ERROR));
    }

    let mut next = false;
    next_button(ui, || next = true);
    next
}

fn next_button(ui: &mut Ui, on_click: impl FnOnce()) {
    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        if ui.button("Next").clicked() {
            on_click();
        }
    });
}
