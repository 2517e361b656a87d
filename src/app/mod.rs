pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod logging;
pub mod target;

pub use context::AppContext;
