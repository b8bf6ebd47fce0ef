//! Storage type completions

use crate::types::SuggestionEntry;

/// Persistent storage field types, inserted as constructor calls
pub static STORAGE_TYPES: [SuggestionEntry; 6] = [
    SuggestionEntry::with_insert(
        "StorageU256",
        "StorageU256::new()",
        "U256 storage variable",
        "Stores a U256 value in contract storage",
    ),
    SuggestionEntry::with_insert(
        "StorageAddress",
        "StorageAddress::new()",
        "Address storage variable",
        "Stores an Ethereum address in contract storage",
    ),
    SuggestionEntry::with_insert(
        "StorageString",
        "StorageString::new()",
        "String storage variable",
        "Stores a string in contract storage",
    ),
    SuggestionEntry::with_insert(
        "StorageBool",
        "StorageBool::new()",
        "Boolean storage variable",
        "Stores a boolean value in contract storage",
    ),
    SuggestionEntry::with_insert(
        "StorageMap",
        "StorageMap::new()",
        "Key-value storage map",
        "Stores key-value pairs in contract storage",
    ),
    SuggestionEntry::with_insert(
        "StorageVec",
        "StorageVec::new()",
        "Dynamic array storage",
        "Stores a dynamic array in contract storage",
    ),
];
