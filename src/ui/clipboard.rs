//! Clipboard writes with a backend fallback.
//!
//! `arboard` talks to the native clipboard directly. When it is unavailable
//! (headless session, missing display server, denied access) the egui
//! backend's copy command takes over; that path needs no confirmation, so a
//! copy is always attempted even if it cannot be verified.

use eframe::egui;

pub fn copy_text(ctx: &egui::Context, text: &str) {
    let native = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));

    if let Err(err) = native {
        log::warn!("native clipboard unavailable ({err}); using backend copy");
        ctx.copy_text(text.to_owned());
    }
}
