//! Polling of the startup data load.
//!
//! The two JSON documents are fetched on a worker thread behind a
//! `poll_promise::Promise`; each frame checks whether the join has settled.
//! A failed load is terminal for the session: the generate action stays
//! disabled and no retry is scheduled.

use std::time::Duration;

use eframe::egui;

use super::app::NarasiApp;
use crate::engine::Engine;
use crate::ui::config::UI_TEXT;

impl NarasiApp {
    pub(super) fn poll_data_load(&mut self, ctx: &egui::Context) {
        let settled = self
            .load_promise
            .as_ref()
            .and_then(|promise| promise.ready())
            .is_some();

        if !settled {
            if self.load_promise.is_some() {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            return;
        }

        let Some(promise) = self.load_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(Ok(data)) => {
                log::info!("loaded {} program(s)", data.programs.len());
                self.engine = Some(Engine::new(data));
            }
            Ok(Err(error)) => {
                log::error!("startup load failed: {error:#}");
                self.load_failed = true;
                self.show_toast(UI_TEXT.toast_load_failed);
            }
            Err(promise) => {
                // ready() raced with try_take(); keep polling
                self.load_promise = Some(promise);
            }
        }
    }

    pub(super) fn is_loading(&self) -> bool {
        self.load_promise.is_some()
    }
}
