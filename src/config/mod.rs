//! Configuration module for the narasi generator.

mod sources;
pub use sources::{CONFIG_DOCUMENT, DEFAULT_SOURCE_ROOT, DataSources, PROGRAM_DOCUMENT};
