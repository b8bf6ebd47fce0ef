//! Document management for the LSP engine
//!
//! Manages open documents in the LSP session with thread-safe access.

use dashmap::DashMap;
use tower_lsp::lsp_types::{Position, Url};

/// Manages open documents in the LSP session
#[derive(Debug, Default)]
pub struct DocumentManager {
    /// Map of document URI to content
    documents: DashMap<Url, DocumentState>,
}

/// State of an open document
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Document content
    pub content: String,
    /// Document version
    pub version: i32,
    /// Language identifier sent by the client when the document was opened
    pub language_id: String,
}

impl DocumentManager {
    /// Create a new document manager
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open a document
    pub fn open(&self, uri: Url, language_id: String, content: String, version: i32) {
        self.documents.insert(
            uri,
            DocumentState {
                content,
                version,
                language_id,
            },
        );
    }

    /// Update a document (full content replacement).
    ///
    /// Returns `false` when the document is not open or `version` is older
    /// than the stored one; the stored content is kept in both cases.
    pub fn update(&self, uri: &Url, content: String, version: i32) -> bool {
        let Some(mut doc) = self.documents.get_mut(uri) else {
            return false;
        };
        if version < doc.version {
            return false;
        }
        doc.content = content;
        doc.version = version;
        true
    }

    /// Version of an open document
    pub fn version(&self, uri: &Url) -> Option<i32> {
        self.documents.get(uri).map(|doc| doc.version)
    }

    /// Close a document
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get document state
    pub fn get(&self, uri: &Url) -> Option<DocumentState> {
        self.documents.get(uri).map(|doc| doc.clone())
    }

    /// Language identifier of an open document
    pub fn language_id(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|doc| doc.language_id.clone())
    }

    /// Text of the cursor's line up to the cursor.
    ///
    /// `position.character` is in UTF-16 code units, as LSP clients send it.
    /// Lines past the end of the document yield an empty prefix.
    pub fn line_prefix(&self, uri: &Url, position: Position) -> Option<String> {
        let doc = self.documents.get(uri)?;
        let prefix = match doc.content.lines().nth(position.line as usize) {
            Some(line) => utf16_prefix(line, position.character),
            None => "",
        };
        Some(prefix.to_string())
    }

    /// Check if document is open
    pub fn is_open(&self, uri: &Url) -> bool {
        self.documents.contains_key(uri)
    }

    /// Get number of open documents
    pub fn count(&self) -> usize {
        self.documents.len()
    }
}

/// The part of `line` before a UTF-16 column, clamped to the line.
///
/// A column inside a surrogate pair cuts before that char.
pub fn utf16_prefix(line: &str, character: u32) -> &str {
    let mut units = 0u32;
    for (offset, ch) in line.char_indices() {
        units += ch.len_utf16() as u32;
        if units > character {
            return &line[..offset];
        }
    }
    line
}
