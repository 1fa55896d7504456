use eframe::egui::{Button, ComboBox, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::data::ProgramCatalog;
use crate::engine::InputMode;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{colored_subsection_heading, section_heading};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Field that should grab keyboard focus on the frame being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Code,
    Link,
}

/// Everything the form can report back to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    ProgramSelected(String),
    ModeSwitched(InputMode),
    CodeEdited(String),
    LinkEdited(String),
    KonfirmasiEdited(String),
    GeneratePressed,
    CopyPressed,
    SharePressed,
}

pub fn mode_label(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Code => UI_TEXT.mode_code_label,
        InputMode::Link => UI_TEXT.mode_link_label,
    }
}

/// Panel for the program dropdown
pub struct ProgramPanel {
    selected_key: Option<String>,
    options: Vec<(String, String)>,
}

impl ProgramPanel {
    pub fn new(selected_key: Option<String>, catalog: Option<&ProgramCatalog>) -> Self {
        // No-op dropdown while the catalog is still unset
        let options = catalog
            .map(|catalog| {
                catalog
                    .iter()
                    .map(|(key, program)| (key.to_string(), program.name.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            selected_key,
            options,
        }
    }

    fn selected_label(&self) -> &str {
        self.selected_key
            .as_ref()
            .and_then(|key| self.options.iter().find(|(option_key, _)| option_key == key))
            .map(|(_, name)| name.as_str())
            .unwrap_or(UI_TEXT.program_placeholder)
    }
}

impl Panel for ProgramPanel {
    type Event = FormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<FormEvent> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.program_heading);

        let selected_label = self.selected_label().to_owned();
        ComboBox::from_id_salt("program_select")
            .width(UI_CONFIG.form_width)
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (key, name) in &self.options {
                    let is_selected = self.selected_key.as_deref() == Some(key.as_str());
                    if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                        events.push(FormEvent::ProgramSelected(key.clone()));
                    }
                }
            });

        events
    }
}

/// Panel for the two mutually-exclusive input surfaces plus the optional
/// confirmation contact. Only the active mode's field is shown.
pub struct InputPanel {
    mode: InputMode,
    code: String,
    link: String,
    konfirmasi: String,
    konfirmasi_hint: String,
    focus: Option<FocusField>,
}

impl InputPanel {
    pub fn new(
        mode: InputMode,
        code: String,
        link: String,
        konfirmasi: String,
        konfirmasi_hint: String,
        focus: Option<FocusField>,
    ) -> Self {
        Self {
            mode,
            code,
            link,
            konfirmasi,
            konfirmasi_hint,
            focus,
        }
    }
}

impl Panel for InputPanel {
    type Event = FormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<FormEvent> {
        let mut events = Vec::new();

        section_heading(ui, UI_TEXT.input_mode_heading);
        let previous_mode = self.mode;
        ui.horizontal(|ui| {
            for mode in InputMode::iter() {
                ui.radio_value(&mut self.mode, mode, mode_label(mode));
            }
        });
        if self.mode != previous_mode {
            events.push(FormEvent::ModeSwitched(self.mode));
        }

        ui.add_space(8.0);
        match self.mode {
            InputMode::Code => {
                ui.label(colored_subsection_heading(UI_TEXT.code_field_label));
                let response = ui.add(
                    TextEdit::singleline(&mut self.code)
                        .hint_text(UI_TEXT.code_field_hint)
                        .desired_width(UI_CONFIG.form_width),
                );
                if self.focus == Some(FocusField::Code) {
                    response.request_focus();
                }
                if response.changed() {
                    events.push(FormEvent::CodeEdited(self.code.clone()));
                }
            }
            InputMode::Link => {
                ui.label(colored_subsection_heading(UI_TEXT.link_field_label));
                let response = ui.add(
                    TextEdit::singleline(&mut self.link)
                        .hint_text(UI_TEXT.link_field_hint)
                        .desired_width(UI_CONFIG.form_width),
                );
                if self.focus == Some(FocusField::Link) {
                    response.request_focus();
                }
                if response.changed() {
                    events.push(FormEvent::LinkEdited(self.link.clone()));
                }
            }
        }

        ui.add_space(8.0);
        ui.label(colored_subsection_heading(UI_TEXT.konfirmasi_label));
        let response = ui.add(
            TextEdit::singleline(&mut self.konfirmasi)
                .hint_text(self.konfirmasi_hint.clone())
                .desired_width(UI_CONFIG.form_width),
        );
        if response.changed() {
            events.push(FormEvent::KonfirmasiEdited(self.konfirmasi.clone()));
        }

        events
    }
}

/// Panel with the three action buttons. Generate stays disabled until the
/// startup load succeeds (and forever after a failed load).
pub struct ActionPanel {
    generate_enabled: bool,
}

impl ActionPanel {
    pub fn new(generate_enabled: bool) -> Self {
        Self { generate_enabled }
    }
}

impl Panel for ActionPanel {
    type Event = FormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<FormEvent> {
        let mut events = Vec::new();
        ui.add_space(12.0);

        let generate = ui.add_enabled(
            self.generate_enabled,
            Button::new(RichText::new(UI_TEXT.generate_button).strong()),
        );
        if generate.clicked() {
            events.push(FormEvent::GeneratePressed);
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button(UI_TEXT.copy_button).clicked() {
                events.push(FormEvent::CopyPressed);
            }
            if ui.button(UI_TEXT.share_button).clicked() {
                events.push(FormEvent::SharePressed);
            }
        });

        events
    }
}
