//! Blockchain context accessor completions

use crate::types::SuggestionEntry;

/// `msg`, `block` and `tx` accessors; names already carry call syntax
pub static BLOCKCHAIN_ACCESSORS: [SuggestionEntry; 6] = [
    SuggestionEntry::new(
        "msg::sender()",
        "Get transaction sender",
        "Returns the address of the transaction sender",
    ),
    SuggestionEntry::new(
        "msg::value()",
        "Get transaction value",
        "Returns the ETH value sent with the transaction",
    ),
    SuggestionEntry::new(
        "block::timestamp()",
        "Get block timestamp",
        "Returns the current block timestamp",
    ),
    SuggestionEntry::new(
        "block::number()",
        "Get block number",
        "Returns the current block number",
    ),
    SuggestionEntry::new(
        "tx::gas_price()",
        "Get gas price",
        "Returns the gas price of the current transaction",
    ),
    SuggestionEntry::new(
        "tx::origin()",
        "Get transaction origin",
        "Returns the original transaction sender",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_insert_their_name() {
        for entry in &BLOCKCHAIN_ACCESSORS {
            assert!(entry.insert_text.is_none());
            assert_eq!(entry.insert_text(), entry.name);
            assert!(entry.name.ends_with("()"));
        }
    }
}
