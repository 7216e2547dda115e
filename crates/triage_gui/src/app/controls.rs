//! Action buttons and the status bar.

use super::TriageApp;
use eframe::egui;
use std::time::Instant;
use triage_core::SessionAction;

impl TriageApp {
    /// Renders one button per action, labelled with its shortcut.
    pub(super) fn render_controls(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let has_images = !self.session.is_empty();
                for action in SessionAction::ALL {
                    let enabled = has_images || action == SessionAction::Quit;
                    let label = self.bindings.button_label(action);
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        clicked = Some(action);
                    }
                }
                ui.separator();
                let (keep, delete) = self.session.review().counts();
                ui.label(format!("Keep: {keep}  Delete: {delete}"));
            });
            ui.add_space(6.0);
        });
        if let Some(action) = clicked {
            self.dispatch(ctx, action);
        }
    }

    pub(super) fn render_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let text = self.status.current(Instant::now()).unwrap_or_default();
            ui.label(text);
        });
    }
}
