pub mod cli;
pub mod config;
pub mod handler;
pub mod logging;
pub mod shell;
