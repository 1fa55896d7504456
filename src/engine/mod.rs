//! The generation engine: validation ladder, link construction and
//! narrative assembly. Pure string-in/string-out logic, no UI types.

mod core;
mod link;
mod narrative;

pub use core::{Engine, GenerateError, GenerateRequest, GeneratedOutput, InputMode};
pub use link::AFFILIATE_PARAM;
pub use narrative::LINK_MARKER;
