//! Typed model and startup loading for the two JSON documents.

mod fetch;
mod model;

pub use fetch::{load_app_data, spawn_app_data_load};
pub use model::{AppConfig, AppData, Program, ProgramCatalog, RekeningConfig};
