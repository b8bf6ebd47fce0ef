//! Stylus language server
//!
//! Answers completion requests for selected documents and runs the
//! placeholder workspace commands.

use super::commands::StylusCommand;
use super::config::EngineConfig;
use super::convert;
use super::document::DocumentManager;
use super::selector::DocumentSelector;
use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

/// Stylus Language Server
pub struct LspServer {
    /// LSP client for sending notifications
    client: Client,
    /// Document manager
    documents: DocumentManager,
    /// Documents that receive completions
    selector: DocumentSelector,
    /// Engine configuration
    config: EngineConfig,
}

impl LspServer {
    /// Create a new LSP server with default configuration
    pub fn new(client: Client) -> Self {
        Self::with_config(client, EngineConfig::default())
    }

    /// Create with configuration
    pub fn with_config(client: Client, config: EngineConfig) -> Self {
        Self {
            client,
            documents: DocumentManager::new(),
            selector: DocumentSelector::from_settings(&config.language),
            config,
        }
    }

    /// Server capabilities advertised on initialize
    pub fn capabilities(&self) -> ServerCapabilities {
        let trigger_chars = &self.config.language.trigger_characters;

        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    ..TextDocumentSyncOptions::default()
                },
            )),

            completion_provider: Some(CompletionOptions {
                trigger_characters: if trigger_chars.is_empty() {
                    None
                } else {
                    Some(trigger_chars.clone())
                },
                resolve_provider: Some(false),
                ..CompletionOptions::default()
            }),

            execute_command_provider: Some(ExecuteCommandOptions {
                commands: StylusCommand::ids(),
                work_done_progress_options: WorkDoneProgressOptions::default(),
            }),

            ..ServerCapabilities::default()
        }
    }

    /// Completions at `position`, or `None` for documents outside the selector
    pub fn completions_at(&self, uri: &Url, position: Position) -> Option<Vec<CompletionItem>> {
        let language_id = self.documents.language_id(uri)?;
        if !self.selector.matches(&language_id, uri) {
            tracing::debug!("Skipping completion for {} ({})", uri, language_id);
            return None;
        }

        let prefix = self.documents.line_prefix(uri, position)?;
        let group = stylus_complete::classify(&prefix);
        tracing::debug!("Completion at {}:{} -> {}", uri, position.line + 1, group);

        let items = stylus_complete::complete_prefix(&prefix)
            .iter()
            .map(convert::to_lsp_completion)
            .collect();

        Some(items)
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("{} initializing", self.config.engine.name);

        if let Some(root_uri) = params.root_uri {
            tracing::info!("Workspace root: {}", root_uri);
        }

        Ok(InitializeResult {
            capabilities: self.capabilities(),
            server_info: Some(ServerInfo {
                name: self.config.engine.name.clone(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("{} activated", self.config.engine.name);
        self.client
            .log_message(
                MessageType::INFO,
                format!("{} ready", self.config.engine.name),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("{} deactivated", self.config.engine.name);
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;

        tracing::debug!("Document opened: {} ({})", doc.uri, doc.language_id);
        self.documents
            .open(doc.uri, doc.language_id, doc.text, doc.version);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: the last change holds the whole document
        if let Some(change) = params.content_changes.into_iter().last() {
            if self.documents.update(&uri, change.text, version) {
                tracing::debug!("Document changed: {} (version {})", uri, version);
            } else {
                tracing::debug!("Ignoring change to {} at version {}", uri, version);
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        tracing::debug!("Document closed: {}", uri);
        self.documents.close(&uri);
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        Ok(self
            .completions_at(uri, position)
            .map(CompletionResponse::Array))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        let Some(command) = StylusCommand::from_id(&params.command) else {
            tracing::warn!("Unknown command: {}", params.command);
            return Err(Error::invalid_params(format!(
                "Unknown command: {}",
                params.command
            )));
        };

        tracing::info!("Running command {}", command.id());
        self.client
            .show_message(MessageType::INFO, command.message())
            .await;

        Ok(None)
    }
}
