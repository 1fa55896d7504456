use std::time::{Duration, Instant};

use anyhow::Result;
use eframe::{Frame, egui};
use poll_promise::Promise;

use crate::config::DataSources;
use crate::data::{AppData, spawn_app_data_load};
use crate::engine::{Engine, GenerateError, GenerateRequest, GeneratedOutput, InputMode};
use crate::ui::config::UI_TEXT;
use crate::ui::panels::{FocusField, FormEvent};
use crate::ui::toast::Toast;
use crate::ui::utils::setup_custom_visuals;
use crate::ui::{clipboard, share};

/// Delay before the preview scrolls into view, giving the freshly revealed
/// section one layout pass on small windows.
pub(super) const PREVIEW_SCROLL_DELAY: Duration = Duration::from_millis(150);

pub struct NarasiApp {
    // Form state
    pub(super) selected_program: Option<String>,
    pub(super) input_mode: InputMode,
    pub(super) code_input: String,
    pub(super) link_input: String,
    pub(super) konfirmasi_input: String,

    // Generation state: unset until a successful generation, cleared by any
    // edit that would make the preview stale
    pub(super) generated: Option<GeneratedOutput>,

    // Data state
    pub(super) engine: Option<Engine>,
    pub(super) load_failed: bool,
    pub(super) load_promise: Option<Promise<Result<AppData>>>,

    // Transient UI state
    pub(super) toast: Option<Toast>,
    pub(super) pending_focus: Option<FocusField>,
    pub(super) scroll_preview_at: Option<Instant>,
}

impl NarasiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, sources: DataSources) -> Self {
        let mut app = Self::new_with_initial_state();
        app.load_promise = Some(spawn_app_data_load(sources));
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            selected_program: None,
            input_mode: InputMode::default(),
            code_input: String::new(),
            link_input: String::new(),
            konfirmasi_input: String::new(),
            generated: None,
            engine: None,
            load_failed: false,
            load_promise: None,
            toast: None,
            pending_focus: None,
            scroll_preview_at: None,
        }
    }

    /// Replaces any visible toast and restarts its timer.
    pub(super) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// The generate action only dies for good on a failed load; while the
    /// load is still running a click is answered with a "not loaded" toast.
    pub(super) fn generate_enabled(&self) -> bool {
        !self.load_failed
    }

    pub(super) fn reset_generation(&mut self) {
        self.generated = None;
        self.scroll_preview_at = None;
    }

    pub(super) fn apply_event(&mut self, ctx: &egui::Context, event: FormEvent) {
        match event {
            FormEvent::ProgramSelected(key) => {
                self.selected_program = Some(key);
                self.reset_generation();
            }
            FormEvent::ModeSwitched(mode) => {
                self.input_mode = mode;
                // The now-inactive surface loses its value
                match mode {
                    InputMode::Code => self.link_input.clear(),
                    InputMode::Link => self.code_input.clear(),
                }
                self.reset_generation();
            }
            FormEvent::CodeEdited(value) => {
                self.code_input = value;
                self.reset_generation();
            }
            FormEvent::LinkEdited(value) => {
                self.link_input = value;
                self.reset_generation();
            }
            FormEvent::KonfirmasiEdited(value) => {
                self.konfirmasi_input = value;
                self.reset_generation();
            }
            FormEvent::GeneratePressed => self.handle_generate(ctx),
            FormEvent::CopyPressed => self.handle_copy(ctx),
            FormEvent::SharePressed => self.handle_share(),
        }
    }

    fn run_generate(&self) -> Result<GeneratedOutput, GenerateError> {
        let Some(engine) = &self.engine else {
            return Err(GenerateError::DataNotReady);
        };

        engine.generate(&GenerateRequest {
            program_key: self.selected_program.as_deref(),
            input_mode: self.input_mode,
            code: &self.code_input,
            link: &self.link_input,
            konfirmasi_override: &self.konfirmasi_input,
        })
    }

    pub(super) fn handle_generate(&mut self, ctx: &egui::Context) {
        match self.run_generate() {
            Ok(output) => {
                clipboard::copy_text(ctx, &output.narrative);
                self.generated = Some(output);
                self.scroll_preview_at = Some(Instant::now() + PREVIEW_SCROLL_DELAY);
                self.pending_focus = None;
                self.show_toast(UI_TEXT.toast_generated);
            }
            Err(error) => {
                log::debug!("generation rejected: {error}");
                self.pending_focus = match error {
                    GenerateError::CodeMissing => Some(FocusField::Code),
                    GenerateError::LinkMissing => Some(FocusField::Link),
                    _ => None,
                };
                self.show_toast(toast_for(error));
            }
        }
    }

    pub(super) fn handle_copy(&mut self, ctx: &egui::Context) {
        match &self.generated {
            Some(output) => {
                clipboard::copy_text(ctx, &output.narrative);
                self.show_toast(UI_TEXT.toast_copied);
            }
            None => self.show_toast(UI_TEXT.toast_nothing_generated),
        }
    }

    pub(super) fn handle_share(&mut self) {
        match &self.generated {
            Some(output) => share::open_share(&output.narrative),
            None => self.show_toast(UI_TEXT.toast_nothing_generated),
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|input| input.consume_key(egui::Modifiers::CTRL, egui::Key::Enter)) {
            self.apply_event(ctx, FormEvent::GeneratePressed);
        }
    }
}

fn toast_for(error: GenerateError) -> &'static str {
    match error {
        GenerateError::DataNotReady => UI_TEXT.toast_data_not_ready,
        GenerateError::ProgramMissing => UI_TEXT.toast_program_missing,
        GenerateError::CodeMissing => UI_TEXT.toast_code_missing,
        GenerateError::LinkMissing => UI_TEXT.toast_link_missing,
        GenerateError::LinkMalformed => UI_TEXT.toast_link_malformed,
        GenerateError::LinkMissingAffiliateParam => UI_TEXT.toast_link_missing_param,
    }
}

impl eframe::App for NarasiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_data_load(ctx);
        self.handle_global_shortcuts(ctx);

        // Bottom panel first: egui lays out side panels before the central one
        self.render_status_panel(ctx);
        let events = self.render_central_panel(ctx);
        for event in events {
            self.apply_event(ctx, event);
        }

        self.render_toast(ctx);
    }
}
