//! Solidity interface macro completions

use crate::types::SuggestionEntry;

pub static INTERFACE_MACROS: [SuggestionEntry; 6] = [
    SuggestionEntry::new(
        "sol!",
        "Solidity macro",
        "Macro for defining Solidity interfaces and events",
    ),
    SuggestionEntry::new(
        "sol_interface!",
        "Solidity interface macro",
        "Macro for defining Solidity interfaces",
    ),
    SuggestionEntry::new(
        "sol_storage!",
        "Solidity storage macro",
        "Macro for defining Solidity storage layout",
    ),
    SuggestionEntry::new("event", "Define an event", "Define a Solidity event"),
    SuggestionEntry::new("error", "Define a custom error", "Define a custom Solidity error"),
    SuggestionEntry::new("interface", "Define an interface", "Define a Solidity interface"),
];
