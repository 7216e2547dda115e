//! The eframe shell around a review [`Session`].

mod controls;

use crate::keybindings::KeyBindings;
use eframe::{App, Frame, egui};
use image::RgbImage;
use std::time::Instant;
use triage_core::{
    Notice, Outcome, Renderer, Session, SessionAction, StatusLine, TriageConfig, export_report,
    finalize,
};

pub struct TriageApp {
    session: Session,
    config: TriageConfig,
    renderer: Renderer,
    bindings: KeyBindings,
    status: StatusLine,
    texture: Option<egui::TextureHandle>,
    needs_redisplay: bool,
    shown_title: String,
    finished: bool,
}

impl TriageApp {
    pub fn new(session: Session, config: TriageConfig) -> Self {
        let mut status = StatusLine::new(config.status_duration());
        if session.is_empty() {
            status.show(
                format!(
                    "{}: {}",
                    Notice::EmptyFolder,
                    session.store().folder().display()
                ),
                Instant::now(),
            );
        }
        Self {
            renderer: config.renderer(),
            session,
            config,
            bindings: KeyBindings::default(),
            status,
            texture: None,
            needs_redisplay: true,
            shown_title: String::new(),
            finished: false,
        }
    }

    fn redisplay(&mut self, ctx: &egui::Context) {
        self.needs_redisplay = false;
        let Some(path) = self.session.current_path() else {
            self.texture = None;
            return;
        };
        match self.renderer.render(&path) {
            Ok(frame) => {
                let name = format!("frame:{}", path.display());
                self.texture = Some(ctx.load_texture(
                    name,
                    to_color_image(&frame),
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.texture = None;
                let message = format!("Error: cannot open image {}", path.display());
                self.status.show(message, Instant::now());
            }
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, action: SessionAction) {
        match self.session.apply(action) {
            Outcome::Redisplay => self.needs_redisplay = true,
            Outcome::Notice(notice) => self.status.show(notice.to_string(), Instant::now()),
            Outcome::Unchanged => {}
            Outcome::Quit => {
                self.finish();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    /// Move rejected images and write the report. Runs once per session.
    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let folder = self.session.store().folder();
        let rejected = self.config.rejected_path(folder);
        let moved = match finalize(folder, &rejected, self.session.review()) {
            Ok(report) => {
                if !report.is_clean() {
                    tracing::warn!("{} images could not be moved", report.failed.len());
                }
                report.moved
            }
            Err(e) => {
                tracing::error!("{e:#}");
                Vec::new()
            }
        };

        if let Some(path) = &self.config.report {
            match export_report(self.session.store(), self.session.review(), &moved, path) {
                Ok(()) => tracing::info!("report written to {}", path.display()),
                Err(e) => tracing::error!("cannot write report {}: {e:#}", path.display()),
            }
        }
    }

    /// Every bound key pressed this frame, in press order.
    fn pressed_actions(&self, ctx: &egui::Context) -> Vec<SessionAction> {
        ctx.input(|i| self.bindings.actions_from_events(&i.events))
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        for action in self.pressed_actions(ctx) {
            self.dispatch(ctx, action);
            if self.finished {
                break;
            }
        }
    }
}

/// The renderer produces RGB, so the texture is declared as RGB.
fn to_color_image(frame: &RgbImage) -> egui::ColorImage {
    let (w, h) = frame.dimensions();
    egui::ColorImage::from_rgb([w as usize, h as usize], frame.as_raw())
}

impl App for TriageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.finish();
            return;
        }

        self.handle_keys(ctx);

        self.render_status(ctx);
        self.render_controls(ctx);

        if self.needs_redisplay {
            self.redisplay(ctx);
        }

        let title = self.session.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| match &self.texture {
                Some(texture) => {
                    ui.add(egui::Image::from_texture(texture).shrink_to_fit());
                }
                None if self.session.is_empty() => {
                    ui.heading("No images found");
                }
                None => {
                    ui.label("Image could not be displayed");
                }
            });
        });

        if let Some(remaining) = self.status.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}
