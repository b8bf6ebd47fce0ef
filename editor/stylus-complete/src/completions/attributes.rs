//! Function attribute completions

use crate::types::SuggestionEntry;

/// Attributes on contract functions and impl blocks, inserted in `#[...]` form
pub static FUNCTION_ATTRIBUTES: [SuggestionEntry; 5] = [
    SuggestionEntry::with_insert(
        "external",
        "#[external]",
        "External function (callable from outside)",
        "Marks a function as external, making it callable from outside the contract",
    ),
    SuggestionEntry::with_insert(
        "payable",
        "#[payable]",
        "Payable function (can receive ETH)",
        "Allows the function to receive ETH along with the call",
    ),
    SuggestionEntry::with_insert(
        "pure",
        "#[pure]",
        "Pure function (no state access)",
        "Function that doesn't read or modify contract state",
    ),
    SuggestionEntry::with_insert(
        "view",
        "#[view]",
        "View function (read-only)",
        "Function that reads but doesn't modify contract state",
    ),
    SuggestionEntry::with_insert(
        "entrypoint",
        "#[entrypoint]",
        "Contract entrypoint",
        "Marks the main entry point for the contract",
    ),
];
