//! stylus-complete: Context-aware completions for Arbitrum Stylus contracts
//!
//! Looks at the text between the start of the line and the cursor, picks the
//! kind of Stylus code being written (function attribute, storage type,
//! blockchain accessor, Solidity interface macro, or plain keyword) and
//! returns that group's fixed list of suggestions.
//!
//! # Example
//!
//! ```
//! use stylus_complete::{classify, provide, CandidateGroup};
//!
//! assert_eq!(classify("let s = msg::"), CandidateGroup::BlockchainAccessors);
//!
//! let entries = provide("    #[e", 7);
//! let external = entries.iter().find(|e| e.name == "external").unwrap();
//! assert_eq!(external.insert_text(), "#[external]");
//! ```

mod completions;
mod context;
mod types;

pub use completions::{
    entries, BLOCKCHAIN_ACCESSORS, FUNCTION_ATTRIBUTES, GENERAL_KEYWORDS, INTERFACE_MACROS,
    STORAGE_TYPES,
};
pub use context::{classify, line_prefix, prefix_at};
pub use types::{CandidateGroup, CompletionItem, CompletionKind, SuggestionEntry};

/// Suggestions for a cursor `cursor` chars into `line_text`
pub fn provide(line_text: &str, cursor: usize) -> &'static [SuggestionEntry] {
    entries(classify(line_prefix(line_text, cursor)))
}

/// Completion items for an already extracted line prefix
pub fn complete_prefix(prefix: &str) -> Vec<CompletionItem> {
    completions::get_completions(classify(prefix))
}

/// Completion items at a cursor position (line and column are 1-based)
pub fn complete(source: &str, line: u32, column: u32) -> Vec<CompletionItem> {
    complete_prefix(prefix_at(source, line, column))
}
