//! LSP engine core
//!
//! Language server that routes completion requests to stylus-complete.

pub mod commands;
pub mod config;
pub mod convert;
pub mod document;
pub mod selector;
pub mod server;

pub use commands::StylusCommand;
pub use config::{ConfigError, EngineConfig};
pub use document::DocumentManager;
pub use selector::DocumentSelector;
pub use server::LspServer;
