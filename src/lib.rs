pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod render;
pub mod session;
pub mod source;
