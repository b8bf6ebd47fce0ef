//! Stylus Language Server Protocol implementation
//!
//! Serves context-aware completions for Arbitrum Stylus contracts written in
//! Rust. Completion is triggered on `.`, `:`, `(`, `[` and `#` and answered
//! from the fixed suggestion tables in `stylus-complete`.
//!
//! # Usage
//!
//! Run the language server via stdio:
//!
//! ```bash
//! stylus-lsp
//! ```
//!
//! # Configuration
//!
//! Create a `.stylus-lsp.yaml` in the directory the server starts in:
//!
//! ```yaml
//! engine:
//!   name: stylus-lsp
//!   log_level: info
//!
//! language:
//!   language_ids:
//!     - stylus-rust
//!     - rust
//!   schemes:
//!     - file
//! ```

pub mod engine;

pub use engine::{
    ConfigError, DocumentManager, DocumentSelector, EngineConfig, LspServer, StylusCommand,
};
