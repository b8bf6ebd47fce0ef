//! Completion providers

mod attributes;
mod blockchain;
mod interface;
mod keywords;
mod storage;

pub use attributes::FUNCTION_ATTRIBUTES;
pub use blockchain::BLOCKCHAIN_ACCESSORS;
pub use interface::INTERFACE_MACROS;
pub use keywords::GENERAL_KEYWORDS;
pub use storage::STORAGE_TYPES;

use crate::types::{CandidateGroup, CompletionItem, SuggestionEntry};

/// The stored entries of a group, in display order
pub fn entries(group: CandidateGroup) -> &'static [SuggestionEntry] {
    match group {
        CandidateGroup::FunctionAttributes => &FUNCTION_ATTRIBUTES,
        CandidateGroup::StorageTypes => &STORAGE_TYPES,
        CandidateGroup::BlockchainAccessors => &BLOCKCHAIN_ACCESSORS,
        CandidateGroup::InterfaceMacros => &INTERFACE_MACROS,
        CandidateGroup::GeneralKeywords => &GENERAL_KEYWORDS,
    }
}

/// Get completion items for a group.
///
/// Nothing is filtered against the partially typed word; the editor does that.
pub fn get_completions(group: CandidateGroup) -> Vec<CompletionItem> {
    let kind = group.kind();
    entries(group)
        .iter()
        .enumerate()
        .map(|(position, entry)| CompletionItem::from_entry(entry, kind, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_cardinalities() {
        assert_eq!(entries(CandidateGroup::FunctionAttributes).len(), 5);
        assert_eq!(entries(CandidateGroup::StorageTypes).len(), 6);
        assert_eq!(entries(CandidateGroup::BlockchainAccessors).len(), 6);
        assert_eq!(entries(CandidateGroup::InterfaceMacros).len(), 6);
        assert_eq!(entries(CandidateGroup::GeneralKeywords).len(), 13);
    }

    #[test]
    fn test_entries_are_the_same_static_slice() {
        for group in CandidateGroup::ALL {
            assert!(std::ptr::eq(entries(group), entries(group)));
        }
    }

    #[test]
    fn test_get_completions_preserves_order() {
        let items = get_completions(CandidateGroup::StorageTypes);
        let labels: Vec<_> = items.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "StorageU256",
                "StorageAddress",
                "StorageString",
                "StorageBool",
                "StorageMap",
                "StorageVec"
            ]
        );

        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.sort_priority as usize, i);
        }
    }

    #[test]
    fn test_get_completions_uses_group_kind() {
        for group in CandidateGroup::ALL {
            let kind = group.kind();
            assert!(get_completions(group).iter().all(|c| c.kind == kind));
        }
    }

    #[test]
    fn test_duplicate_names_across_groups_are_kept() {
        let specific = entries(CandidateGroup::FunctionAttributes);
        let general = entries(CandidateGroup::GeneralKeywords);

        let external_attr = specific.iter().find(|e| e.name == "external").unwrap();
        let external_kw = general.iter().find(|e| e.name == "external").unwrap();

        assert_eq!(external_attr.insert_text(), "#[external]");
        assert_eq!(external_kw.insert_text(), "external");
        assert!(entries(CandidateGroup::InterfaceMacros).iter().any(|e| e.name == "sol!"));
        assert!(general.iter().any(|e| e.name == "sol!"));
    }
}
