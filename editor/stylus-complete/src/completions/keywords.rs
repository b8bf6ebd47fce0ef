//! Fallback keyword completions

use crate::types::SuggestionEntry;

/// Offered when the line gives no more specific cue.
///
/// Some names also appear in the specific groups; the repetition is kept.
pub static GENERAL_KEYWORDS: [SuggestionEntry; 13] = [
    SuggestionEntry::new("external", "External function modifier", "Marks a function as external"),
    SuggestionEntry::new("payable", "Payable function modifier", "Allows function to receive ETH"),
    SuggestionEntry::new("pure", "Pure function modifier", "Function that doesn't access state"),
    SuggestionEntry::new("view", "View function modifier", "Read-only function"),
    SuggestionEntry::new("storage", "Storage attribute", "Marks a struct as storage"),
    SuggestionEntry::new("entrypoint", "Entry point attribute", "Marks the main contract entry point"),
    SuggestionEntry::new("inherit", "Inheritance attribute", "Inherits from another contract"),
    SuggestionEntry::new("sol_storage", "Solidity storage macro", "Define Solidity storage layout"),
    SuggestionEntry::new("sol_interface", "Solidity interface macro", "Define Solidity interface"),
    SuggestionEntry::new("sol!", "Solidity macro", "General Solidity macro"),
    SuggestionEntry::new("msg", "Message context", "Access to transaction message data"),
    SuggestionEntry::new("block", "Block context", "Access to block data"),
    SuggestionEntry::new("tx", "Transaction context", "Access to transaction data"),
];
