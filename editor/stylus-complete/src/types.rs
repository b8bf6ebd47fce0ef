//! Core types for stylus-complete

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of Stylus code the author is most likely typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateGroup {
    /// `#[external]`, `#[payable]`, ... on functions and impl blocks
    FunctionAttributes,
    /// `StorageU256`, `StorageMap`, ... field types
    StorageTypes,
    /// `msg::`, `block::` and `tx::` context accessors
    BlockchainAccessors,
    /// `sol!`, `sol_interface!`, `sol_storage!` and their item keywords
    InterfaceMacros,
    /// Fallback when the line carries no recognizable cue
    GeneralKeywords,
}

impl CandidateGroup {
    /// All groups, in classification precedence order
    pub const ALL: [CandidateGroup; 5] = [
        CandidateGroup::FunctionAttributes,
        CandidateGroup::StorageTypes,
        CandidateGroup::BlockchainAccessors,
        CandidateGroup::InterfaceMacros,
        CandidateGroup::GeneralKeywords,
    ];

    /// Editor kind shown next to every entry of this group
    pub fn kind(self) -> CompletionKind {
        match self {
            CandidateGroup::StorageTypes => CompletionKind::Class,
            CandidateGroup::BlockchainAccessors => CompletionKind::Function,
            CandidateGroup::FunctionAttributes
            | CandidateGroup::InterfaceMacros
            | CandidateGroup::GeneralKeywords => CompletionKind::Keyword,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            CandidateGroup::FunctionAttributes => "function attributes",
            CandidateGroup::StorageTypes => "storage types",
            CandidateGroup::BlockchainAccessors => "blockchain accessors",
            CandidateGroup::InterfaceMacros => "interface macros",
            CandidateGroup::GeneralKeywords => "general keywords",
        }
    }
}

impl fmt::Display for CandidateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Keyword,
    Class,
    Function,
}

/// One static suggestion in a candidate group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEntry {
    /// Identifier text shown in the completion list
    pub name: &'static str,
    /// One-line summary
    pub label: &'static str,
    /// Longer explanatory text
    pub description: &'static str,
    /// Literal text placed at the cursor; `None` inserts `name`
    pub insert_text: Option<&'static str>,
}

impl SuggestionEntry {
    /// Entry whose insertion text is its name
    pub const fn new(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            name,
            label,
            description,
            insert_text: None,
        }
    }

    /// Entry with insertion text that differs from its name
    pub const fn with_insert(
        name: &'static str,
        insert_text: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            description,
            insert_text: Some(insert_text),
        }
    }

    /// Text to place at the cursor
    pub fn insert_text(&self) -> &'static str {
        self.insert_text.unwrap_or(self.name)
    }
}

/// A completion suggestion, as handed to editors and printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionItem {
    /// Display text
    pub label: String,
    /// Type of completion
    pub kind: CompletionKind,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Full documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Text to insert (may differ from label)
    pub insert_text: String,
    /// Lower = shown first
    #[serde(skip_serializing_if = "is_zero")]
    pub sort_priority: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl CompletionItem {
    /// Create a new completion item
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            kind,
            detail: None,
            documentation: None,
            sort_priority: 0,
        }
    }

    /// Build the item for `entry`, shown at `position` within its group
    pub fn from_entry(entry: &SuggestionEntry, kind: CompletionKind, position: usize) -> Self {
        Self::new(entry.name, kind)
            .with_detail(entry.label)
            .with_documentation(entry.description)
            .with_insert_text(entry.insert_text())
            .with_priority(u32::try_from(position).unwrap_or(u32::MAX))
    }

    /// Set the detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set custom insert text
    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    /// Set sort priority (lower = higher priority)
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_insert_text_defaults_to_name() {
        let entry = SuggestionEntry::new("msg::sender()", "Get transaction sender", "Sender");
        assert_eq!(entry.insert_text(), "msg::sender()");
    }

    #[test]
    fn test_entry_with_insert_text() {
        let entry = SuggestionEntry::with_insert("view", "#[view]", "View function", "Read-only");
        assert_eq!(entry.name, "view");
        assert_eq!(entry.insert_text(), "#[view]");
    }

    #[test]
    fn test_completion_item_builder() {
        let item = CompletionItem::new("StorageU256", CompletionKind::Class)
            .with_detail("U256 storage variable")
            .with_documentation("Stores a U256 value in contract storage")
            .with_insert_text("StorageU256::new()")
            .with_priority(3);

        assert_eq!(item.label, "StorageU256");
        assert_eq!(item.kind, CompletionKind::Class);
        assert_eq!(item.detail, Some("U256 storage variable".to_string()));
        assert_eq!(item.insert_text, "StorageU256::new()");
        assert_eq!(item.sort_priority, 3);
    }

    #[test]
    fn test_completion_item_from_entry() {
        let entry = SuggestionEntry::with_insert(
            "payable",
            "#[payable]",
            "Payable function (can receive ETH)",
            "Allows the function to receive ETH along with the call",
        );
        let item = CompletionItem::from_entry(&entry, CompletionKind::Keyword, 1);

        assert_eq!(item.label, "payable");
        assert_eq!(item.insert_text, "#[payable]");
        assert_eq!(item.detail.as_deref(), Some("Payable function (can receive ETH)"));
        assert_eq!(
            item.documentation.as_deref(),
            Some("Allows the function to receive ETH along with the call")
        );
        assert_eq!(item.sort_priority, 1);
    }

    #[test]
    fn test_completion_item_serialization() {
        let item = CompletionItem::new("tx", CompletionKind::Keyword).with_detail("Transaction context");

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"label\":\"tx\""));
        assert!(json.contains("\"kind\":\"keyword\""));
        assert!(json.contains("\"insert_text\":\"tx\""));
        assert!(!json.contains("sort_priority"));
        assert!(!json.contains("documentation"));
    }

    #[test]
    fn test_completion_kind_serialization() {
        let kinds = [
            (CompletionKind::Keyword, "keyword"),
            (CompletionKind::Class, "class"),
            (CompletionKind::Function, "function"),
        ];

        for (kind, expected) in kinds {
            let item = CompletionItem::new("test", kind);
            let json = serde_json::to_string(&item).unwrap();
            assert!(json.contains(&format!("\"kind\":\"{}\"", expected)));
        }
    }

    #[test]
    fn test_candidate_group_serialization() {
        let json = serde_json::to_string(&CandidateGroup::BlockchainAccessors).unwrap();
        assert_eq!(json, "\"blockchain-accessors\"");

        let group: CandidateGroup = serde_json::from_str("\"interface-macros\"").unwrap();
        assert_eq!(group, CandidateGroup::InterfaceMacros);
    }

    #[test]
    fn test_candidate_group_kinds() {
        assert_eq!(CandidateGroup::FunctionAttributes.kind(), CompletionKind::Keyword);
        assert_eq!(CandidateGroup::StorageTypes.kind(), CompletionKind::Class);
        assert_eq!(CandidateGroup::BlockchainAccessors.kind(), CompletionKind::Function);
        assert_eq!(CandidateGroup::InterfaceMacros.kind(), CompletionKind::Keyword);
        assert_eq!(CandidateGroup::GeneralKeywords.kind(), CompletionKind::Keyword);
    }

    #[test]
    fn test_candidate_group_display() {
        assert_eq!(CandidateGroup::StorageTypes.to_string(), "storage types");
        assert_eq!(CandidateGroup::ALL.len(), 5);
    }
}
