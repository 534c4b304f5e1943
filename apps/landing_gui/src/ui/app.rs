use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{check_email_input, EmailInputError};
use waitlist_core::WaitlistForm;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{apply_ui_events, queue_submission};
use crate::ui::{content, theme};

const CONTENT_MAX_WIDTH: f32 = 980.0;
const FORM_INPUT_HEIGHT: f32 = 42.0;
const FORM_BUTTON_WIDTH: f32 = 170.0;

pub struct LandingApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: WaitlistForm,
    input_hint: Option<EmailInputError>,
    backend_status: Option<String>,
    theme_applied: bool,
}

impl LandingApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: WaitlistForm::new(),
            input_hint: None,
            backend_status: None,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        if let Some(status) = apply_ui_events(&mut self.form, &self.ui_rx) {
            self.backend_status = Some(status);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            ctx.set_visuals(theme::visuals());
            self.theme_applied = true;
        }
    }

    fn try_submit(&mut self) {
        if self.form.is_submitting() {
            return;
        }

        // Mirrors the browser's required/type=email check; nothing is sent
        // for input the form control would reject.
        if let Err(reason) = check_email_input(self.form.email_input()) {
            self.input_hint = Some(reason);
            return;
        }
        self.input_hint = None;

        let mut status = String::new();
        queue_submission(&mut self.form, &self.cmd_tx, &mut status);
        if !status.is_empty() {
            self.backend_status = Some(status);
        }
    }

    fn show_hero(&self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.label(
            egui::RichText::new(content::HERO_TITLE)
                .size(46.0)
                .strong()
                .color(theme::TEXT),
        );
        ui.label(
            egui::RichText::new(content::HERO_SUBTITLE)
                .size(20.0)
                .color(theme::ACCENT),
        );
        ui.add_space(28.0);
        ui.label(
            egui::RichText::new(content::PRODUCT_NAME)
                .size(28.0)
                .strong()
                .color(theme::muted_text()),
        );
        ui.add_space(36.0);
    }

    fn show_features(&self, ui: &mut egui::Ui) {
        ui.columns(content::FEATURES.len(), |columns| {
            for (column, feature) in columns.iter_mut().zip(content::FEATURES.iter()) {
                card_frame().show(column, |ui| {
                    ui.set_min_height(150.0);
                    ui.label(egui::RichText::new(feature.title).size(19.0).strong());
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(feature.body).color(theme::muted_text()));
                });
            }
        });
        ui.add_space(40.0);
    }

    fn show_problems(&self, ui: &mut egui::Ui) {
        section_title(ui, content::PROBLEMS_TITLE);
        ui.columns(content::PROBLEMS.len(), |columns| {
            for (column, problem) in columns.iter_mut().zip(content::PROBLEMS.iter()) {
                card_frame().show(column, |ui| {
                    ui.set_min_height(120.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(problem.stat)
                                .size(34.0)
                                .strong()
                                .color(theme::ACCENT),
                        );
                        ui.label(egui::RichText::new(problem.text).color(theme::muted_text()));
                    });
                });
            }
        });
        ui.add_space(40.0);
    }

    fn show_solutions(&self, ui: &mut egui::Ui) {
        section_title(ui, content::SOLUTIONS_TITLE);
        ui.columns(content::SOLUTIONS.len(), |columns| {
            for (column, solution) in columns.iter_mut().zip(content::SOLUTIONS.iter()) {
                card_frame().show(column, |ui| {
                    ui.set_min_height(130.0);
                    ui.label(
                        egui::RichText::new(format!("{} {}", solution.icon, solution.title))
                            .size(22.0)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    for point in solution.points {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new("✓").strong().color(theme::CHECK));
                            ui.label(egui::RichText::new(point).color(theme::muted_text()));
                        });
                    }
                });
            }
        });
        ui.add_space(48.0);
    }

    fn show_waitlist_section(&mut self, ui: &mut egui::Ui) {
        section_title(ui, content::WAITLIST_TITLE);
        ui.label(egui::RichText::new(content::WAITLIST_BODY).color(theme::muted_text()));
        ui.add_space(16.0);

        let submitting = self.form.is_submitting();
        let mut email_buf = self.form.email_input().to_string();
        let mut submit_requested = false;

        ui.horizontal(|ui| {
            let input_width = (ui.available_width() - FORM_BUTTON_WIDTH - 12.0).max(200.0);
            let edit = egui::TextEdit::singleline(&mut email_buf)
                .id_salt("waitlist_email")
                .hint_text(content::EMAIL_PLACEHOLDER)
                .vertical_align(egui::Align::Center);
            let response = ui.add_enabled_ui(!submitting, |ui| {
                ui.add_sized([input_width, FORM_INPUT_HEIGHT], edit)
            });
            let response = response.inner;

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit_requested = true;
            }

            let label = if submitting {
                content::JOINING_LABEL
            } else {
                content::JOIN_LABEL
            };
            let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
                .fill(theme::ACCENT)
                .min_size(egui::vec2(FORM_BUTTON_WIDTH, FORM_INPUT_HEIGHT));
            if ui.add_enabled(!submitting, button).clicked() {
                submit_requested = true;
            }
        });

        if email_buf != self.form.email_input() {
            self.form.set_email_input(email_buf);
            self.input_hint = None;
        }

        if submit_requested {
            self.try_submit();
        }

        if let Some(hint) = self.input_hint {
            ui.label(egui::RichText::new(hint.to_string()).color(theme::ERROR_TEXT));
        }
        if let Some(status) = &self.backend_status {
            ui.small(egui::RichText::new(status).color(theme::ERROR_TEXT));
        }
        ui.add_space(56.0);
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.add_space(12.0);
        ui.label(egui::RichText::new(content::DEVELOPER_CREDIT).color(theme::muted_text()));
        ui.small(egui::RichText::new(content::RELEASE_DATE).weak());
        ui.add_space(24.0);
    }

    fn show_result_modal(&mut self, ctx: &egui::Context) {
        if !self.form.modal().visible {
            return;
        }

        let title = self.form.modal().title.clone();
        let message = self.form.modal().message.clone();
        let mut close_clicked = false;

        let response = egui::Modal::new(egui::Id::new("waitlist_result_modal")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("✓").size(36.0).color(theme::CHECK));
                ui.add_space(4.0);
                ui.label(egui::RichText::new(&title).size(22.0).strong());
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&message).color(theme::muted_text()));
                ui.add_space(12.0);
                let button = egui::Button::new(
                    egui::RichText::new(content::MODAL_CLOSE_LABEL).strong(),
                )
                .fill(theme::ACCENT)
                .min_size(egui::vec2(140.0, 36.0));
                if ui.add(button).clicked() {
                    close_clicked = true;
                }
            });
        });

        if close_clicked || response.should_close() {
            self.form.dismiss();
        }
    }
}

fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::card_fill())
        .stroke(theme::card_stroke())
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(20))
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).size(30.0).strong().color(theme::TEXT));
    ui.add_space(18.0);
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        self.show_hero(ui);
                        self.show_features(ui);
                        self.show_problems(ui);
                        self.show_solutions(ui);
                        self.show_waitlist_section(ui);
                        self.show_footer(ui);
                    });
                });
        });

        self.show_result_modal(ctx);

        if self.form.is_submitting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
