use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub status_panel: Color32,
    pub preview_frame: Color32,
    pub toast_background: Color32,
    pub toast_text: Color32,
    pub error_text: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub form_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(120, 200, 130),
        subsection_heading: Color32::from_rgb(200, 180, 90),
        central_panel: Color32::from_rgb(25, 28, 25),
        status_panel: Color32::from_rgb(18, 20, 18),
        preview_frame: Color32::from_rgb(35, 40, 35),
        toast_background: Color32::from_rgb(50, 55, 50),
        toast_text: Color32::from_rgb(235, 235, 225),
        error_text: Color32::from_rgb(220, 120, 120),
    },
    form_width: 400.0,
};
