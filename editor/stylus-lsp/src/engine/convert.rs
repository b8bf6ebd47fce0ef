//! Type conversions from completion engine types to LSP types

use stylus_complete::{CompletionItem, CompletionKind};
use tower_lsp::lsp_types::{
    self, CompletionItem as LspCompletionItem, CompletionItemKind as LspCompletionItemKind,
    MarkupContent, MarkupKind,
};

/// Convert an engine completion to an LSP completion item
pub fn to_lsp_completion(item: &CompletionItem) -> LspCompletionItem {
    LspCompletionItem {
        label: item.label.clone(),
        kind: Some(to_lsp_completion_kind(item.kind)),
        detail: item.detail.clone(),
        documentation: item.documentation.as_ref().map(|doc| {
            lsp_types::Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.clone(),
            })
        }),
        insert_text: Some(item.insert_text.clone()),
        insert_text_format: Some(lsp_types::InsertTextFormat::PLAIN_TEXT),
        // Keeps the table order when the client sorts
        sort_text: Some(format!("{:05}", item.sort_priority)),
        ..LspCompletionItem::default()
    }
}

fn to_lsp_completion_kind(kind: CompletionKind) -> LspCompletionItemKind {
    match kind {
        CompletionKind::Keyword => LspCompletionItemKind::KEYWORD,
        CompletionKind::Class => LspCompletionItemKind::CLASS,
        CompletionKind::Function => LspCompletionItemKind::FUNCTION,
    }
}
