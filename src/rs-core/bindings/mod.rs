mod event_listeners;
pub mod formatters;
mod js_functions;

pub use event_listeners::{set_log_level, VideoBackend};
pub use js_functions::*;
