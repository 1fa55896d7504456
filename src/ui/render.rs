use std::time::Instant;

use eframe::egui::{
    Align, Align2, Area, CentralPanel, Context, Frame, Id, Margin, Order, RichText, ScrollArea,
    TextEdit, TopBottomPanel, Ui,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::panels::{ActionPanel, FormEvent, InputPanel, Panel, ProgramPanel};
use crate::ui::utils::{colored_heading, colored_subsection_heading, spaced_separator};

use super::app::NarasiApp;

impl NarasiApp {
    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.status_panel)
            .inner_margin(Margin::same(6));

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.is_loading() {
                        ui.spinner();
                        ui.label(UI_TEXT.status_loading);
                    } else if self.load_failed {
                        ui.label(
                            RichText::new(UI_TEXT.status_load_failed)
                                .color(UI_CONFIG.colors.error_text),
                        );
                    } else if let Some(engine) = &self.engine {
                        ui.label(format!(
                            "{} {}",
                            engine.programs().len(),
                            UI_TEXT.status_loaded_suffix
                        ));
                    }
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<FormEvent> {
        let konfirmasi_hint = self
            .engine
            .as_ref()
            .map(|engine| {
                format!(
                    "{}{}",
                    UI_TEXT.konfirmasi_hint_prefix,
                    engine.config().konfirmasi_default
                )
            })
            .unwrap_or_default();

        let mut program_panel = ProgramPanel::new(
            self.selected_program.clone(),
            self.engine.as_ref().map(|engine| engine.programs()),
        );
        let mut input_panel = InputPanel::new(
            self.input_mode,
            self.code_input.clone(),
            self.link_input.clone(),
            self.konfirmasi_input.clone(),
            konfirmasi_hint,
            self.pending_focus.take(),
        );
        let mut action_panel = ActionPanel::new(self.generate_enabled());

        let scroll_preview = self.take_preview_scroll(ctx);

        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        let mut events = Vec::new();
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new(UI_TEXT.app_heading).color(UI_CONFIG.colors.heading));
                ui.label(
                    RichText::new(UI_TEXT.app_subheading)
                        .small()
                        .color(UI_CONFIG.colors.label),
                );

                events.extend(program_panel.render(ui));
                events.extend(input_panel.render(ui));
                events.extend(action_panel.render(ui));

                self.render_preview(ui, scroll_preview);
            });
        });

        events
    }

    /// The preview section is hidden until something was generated. Both
    /// previews are selectable so the text can still be copied by hand when
    /// the clipboard is unavailable.
    fn render_preview(&self, ui: &mut Ui, scroll_into_view: bool) {
        let Some(output) = &self.generated else {
            return;
        };

        spaced_separator(ui);
        let heading = ui.heading(colored_heading(UI_TEXT.preview_heading));
        if scroll_into_view {
            heading.scroll_to_me(Some(Align::Min));
        }
        ui.add_space(5.0);

        ui.label(colored_subsection_heading(UI_TEXT.link_preview_label));
        let mut link_text = output.link.as_str();
        ui.add(
            TextEdit::singleline(&mut link_text)
                .desired_width(UI_CONFIG.form_width)
                .font(eframe::egui::TextStyle::Monospace),
        );

        ui.add_space(8.0);
        ui.label(colored_subsection_heading(UI_TEXT.narrative_preview_label));
        Frame::group(ui.style())
            .fill(UI_CONFIG.colors.preview_frame)
            .show(ui, |ui| {
                let mut narrative_text = output.narrative.as_str();
                ui.add(
                    TextEdit::multiline(&mut narrative_text)
                        .desired_width(UI_CONFIG.form_width)
                        .desired_rows(8),
                );
            });
    }

    /// True exactly once: on the first frame past the scroll deadline.
    fn take_preview_scroll(&mut self, ctx: &Context) -> bool {
        let Some(deadline) = self.scroll_preview_at else {
            return false;
        };

        let now = Instant::now();
        if now >= deadline {
            self.scroll_preview_at = None;
            true
        } else {
            ctx.request_repaint_after(deadline - now);
            false
        }
    }

    pub(super) fn render_toast(&mut self, ctx: &Context) {
        if self.toast.as_ref().is_some_and(|toast| toast.expired()) {
            self.toast = None;
        }
        let Some(toast) = &self.toast else {
            return;
        };

        Area::new(Id::new("toast"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -32.0])
            .order(Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                Frame::popup(ui.style())
                    .fill(UI_CONFIG.colors.toast_background)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(toast.message()).color(UI_CONFIG.colors.toast_text),
                        );
                    });
            });

        ctx.request_repaint_after(toast.remaining());
    }
}
