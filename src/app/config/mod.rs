//! Filesystem-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_config;

pub use load_config::load_handler_config;
