//! eframe::App implementation for CloudSaveApp

use super::app::CloudSaveApp;
use super::commands::COMMANDS;
use super::theme::{colors, status_color};
use eframe::egui::{self, RichText};

impl eframe::App for CloudSaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Blocks the UI thread once the "working" banner has been shown
        self.run_queued();

        egui::TopBottomPanel::top("title_panel")
            .frame(
                egui::Frame::NONE
                    .fill(colors::BG_MID)
                    .inner_margin(egui::Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("DS3 Cloud Save").strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                                .small()
                                .weak(),
                        );
                    });
                });
            });

        egui::TopBottomPanel::bottom("status_panel")
            .frame(
                egui::Frame::NONE
                    .fill(colors::BG_MID)
                    .inner_margin(egui::Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                if let Some(queued) = &mut self.queued {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(format!("Working: {}...", queued.action.name()));
                    });
                    queued.banner_painted = true;
                } else if !self.infotext.is_empty() {
                    ui.label(RichText::new(&self.infotext).color(colors::TEXT_MUTED));
                } else if let Some((ok, text)) = &self.last_status {
                    ui.label(RichText::new(text).color(status_color(*ok)));
                } else if !self.configured {
                    ui.label(
                        RichText::new("GitHub is not set up yet.").color(colors::TEXT_MUTED),
                    );
                } else {
                    ui.label(
                        RichText::new(format!("Data folder: {}", self.paths.data_dir.display()))
                            .small()
                            .color(colors::TEXT_MUTED),
                    );
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.is_busy() {
                ui.disable();
            }
            ui.add_space(12.0);

            let mut clicked = None;
            let mut hovered = None;
            ui.vertical_centered_justified(|ui| {
                for spec in COMMANDS {
                    let btn = ui.add(
                        egui::Button::new(
                            RichText::new(format!("{}  {}", spec.icon, spec.label)).size(18.0),
                        )
                        .min_size(egui::vec2(0.0, 50.0)),
                    );
                    if btn.hovered() {
                        hovered = Some(spec.hover);
                    }
                    if btn.clicked() {
                        clicked = Some(spec.command);
                    }
                    ui.add_space(12.0);
                }
            });

            self.infotext = hovered.unwrap_or_default().to_string();
            if let Some(command) = clicked {
                self.last_status = None;
                self.dispatch(command);
            }
        });

        self.display_slot_picker(ctx);
        self.display_wizard(ctx);
        if self.show_help {
            self.display_help(ctx);
        }

        if self.queued.is_some() {
            ctx.request_repaint();
        }
    }
}
