//! Protocol-side provider traits.
//!
//! One trait per feature family, speaking protocol types in both directions.
//! An implementation typically forwards each call over JSON-RPC to a running
//! language server; the transport is out of scope here.
//!
//! Cancellation tokens pass through untouched so a provider can abandon the
//! request when the editor moves on. Optional capabilities (the `*/resolve`
//! requests, prepare-rename) default to no-ops gated by a `supports_*`
//! probe.

use async_trait::async_trait;
use lsp_types::{
    CodeAction, CodeActionOrCommand, CodeActionParams, CodeLens, CodeLensParams,
    ColorInformation, ColorPresentation, ColorPresentationParams, CompletionItem,
    CompletionParams, CompletionResponse, DocumentColorParams, DocumentFormattingParams,
    DocumentHighlight, DocumentHighlightParams, DocumentLink, DocumentLinkParams,
    DocumentOnTypeFormattingParams, DocumentRangeFormattingParams, DocumentSymbolParams,
    DocumentSymbolResponse, FoldingRange, FoldingRangeParams, GotoDefinitionParams,
    GotoDefinitionResponse, Hover, HoverParams, InlayHint, InlayHintParams, Location,
    PrepareRenameResponse, ReferenceParams, RenameParams, SemanticTokensLegend,
    SemanticTokensParams, SemanticTokensResult, SignatureHelp, SignatureHelpParams,
    TextDocumentPositionParams, TextEdit, WorkspaceEdit,
};
use tokio_util::sync::CancellationToken;

use lsp_bridge_model::ProviderResult;

/// Provides completion items.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Handles `textDocument/completion`.
    async fn completion(
        &self,
        params: CompletionParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<CompletionResponse>>;

    /// Whether the server resolves completion items lazily.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Handles `completionItem/resolve`.
    async fn resolve_completion_item(
        &self,
        item: CompletionItem,
        _token: CancellationToken,
    ) -> ProviderResult<CompletionItem> {
        Ok(item)
    }
}

/// Provides hover information.
#[async_trait]
pub trait HoverProvider: Send + Sync {
    /// Handles `textDocument/hover`.
    async fn hover(
        &self,
        params: HoverParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Hover>>;
}

/// Provides signature help.
#[async_trait]
pub trait SignatureHelpProvider: Send + Sync {
    /// Handles `textDocument/signatureHelp`.
    async fn signature_help(
        &self,
        params: SignatureHelpParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<SignatureHelp>>;
}

/// Provides go-to-definition.
#[async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Handles `textDocument/definition`.
    async fn definition(
        &self,
        params: GotoDefinitionParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoDefinitionResponse>>;
}

/// Provides go-to-declaration.
#[async_trait]
pub trait DeclarationProvider: Send + Sync {
    /// Handles `textDocument/declaration`.
    async fn declaration(
        &self,
        params: GotoDefinitionParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoDefinitionResponse>>;
}

/// Provides go-to-type-definition.
#[async_trait]
pub trait TypeDefinitionProvider: Send + Sync {
    /// Handles `textDocument/typeDefinition`.
    async fn type_definition(
        &self,
        params: GotoDefinitionParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoDefinitionResponse>>;
}

/// Provides go-to-implementation.
#[async_trait]
pub trait ImplementationProvider: Send + Sync {
    /// Handles `textDocument/implementation`.
    async fn implementation(
        &self,
        params: GotoDefinitionParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoDefinitionResponse>>;
}

/// Provides references.
#[async_trait]
pub trait ReferenceProvider: Send + Sync {
    /// Handles `textDocument/references`.
    async fn references(
        &self,
        params: ReferenceParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<Location>>>;
}

/// Provides occurrence highlights.
#[async_trait]
pub trait DocumentHighlightProvider: Send + Sync {
    /// Handles `textDocument/documentHighlight`.
    async fn highlights(
        &self,
        params: DocumentHighlightParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<DocumentHighlight>>>;
}

/// Provides the document outline.
#[async_trait]
pub trait DocumentSymbolProvider: Send + Sync {
    /// Handles `textDocument/documentSymbol`.
    async fn symbols(
        &self,
        params: DocumentSymbolParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<DocumentSymbolResponse>>;
}

/// Provides code actions.
#[async_trait]
pub trait CodeActionProvider: Send + Sync {
    /// Handles `textDocument/codeAction`.
    async fn code_actions(
        &self,
        params: CodeActionParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<CodeActionOrCommand>>>;

    /// Whether the server resolves code actions lazily.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Handles `codeAction/resolve`.
    async fn resolve_code_action(
        &self,
        action: CodeAction,
        _token: CancellationToken,
    ) -> ProviderResult<CodeAction> {
        Ok(action)
    }
}

/// Provides code lenses.
#[async_trait]
pub trait CodeLensProvider: Send + Sync {
    /// Handles `textDocument/codeLens`.
    async fn code_lenses(
        &self,
        params: CodeLensParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<CodeLens>>>;

    /// Whether the server resolves code lenses lazily.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Handles `codeLens/resolve`.
    async fn resolve_code_lens(
        &self,
        lens: CodeLens,
        _token: CancellationToken,
    ) -> ProviderResult<CodeLens> {
        Ok(lens)
    }
}

/// Formats whole documents.
#[async_trait]
pub trait DocumentFormattingProvider: Send + Sync {
    /// Handles `textDocument/formatting`.
    async fn format(
        &self,
        params: DocumentFormattingParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<TextEdit>>>;
}

/// Formats ranges.
#[async_trait]
pub trait DocumentRangeFormattingProvider: Send + Sync {
    /// Handles `textDocument/rangeFormatting`.
    async fn format_range(
        &self,
        params: DocumentRangeFormattingParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<TextEdit>>>;
}

/// Formats as the user types.
#[async_trait]
pub trait OnTypeFormattingProvider: Send + Sync {
    /// Handles `textDocument/onTypeFormatting`.
    async fn format_on_type(
        &self,
        params: DocumentOnTypeFormattingParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<TextEdit>>>;
}

/// Provides rename edits.
#[async_trait]
pub trait RenameProvider: Send + Sync {
    /// Handles `textDocument/rename`.
    async fn rename(
        &self,
        params: RenameParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<WorkspaceEdit>>;

    /// Whether the server supports `textDocument/prepareRename`.
    fn supports_prepare(&self) -> bool {
        false
    }

    /// Handles `textDocument/prepareRename`.
    async fn prepare_rename(
        &self,
        _params: TextDocumentPositionParams,
        _token: CancellationToken,
    ) -> ProviderResult<Option<PrepareRenameResponse>> {
        Ok(None)
    }
}

/// Provides document links.
#[async_trait]
pub trait DocumentLinkProvider: Send + Sync {
    /// Handles `textDocument/documentLink`.
    async fn links(
        &self,
        params: DocumentLinkParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<DocumentLink>>>;

    /// Whether the server resolves links lazily.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Handles `documentLink/resolve`.
    async fn resolve_link(
        &self,
        link: DocumentLink,
        _token: CancellationToken,
    ) -> ProviderResult<DocumentLink> {
        Ok(link)
    }
}

/// Provides document colors and their presentations.
#[async_trait]
pub trait DocumentColorProvider: Send + Sync {
    /// Handles `textDocument/documentColor`.
    async fn colors(
        &self,
        params: DocumentColorParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<ColorInformation>>>;

    /// Handles `textDocument/colorPresentation`.
    async fn color_presentations(
        &self,
        params: ColorPresentationParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<ColorPresentation>>>;
}

/// Provides folding ranges.
#[async_trait]
pub trait FoldingRangeProvider: Send + Sync {
    /// Handles `textDocument/foldingRange`.
    async fn folding_ranges(
        &self,
        params: FoldingRangeParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<FoldingRange>>>;
}

/// Provides semantic tokens.
#[async_trait]
pub trait SemanticTokensProvider: Send + Sync {
    /// The legend negotiated with the server at initialization.
    fn legend(&self) -> SemanticTokensLegend;

    /// Handles `textDocument/semanticTokens/full`.
    async fn semantic_tokens(
        &self,
        params: SemanticTokensParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<SemanticTokensResult>>;
}

/// Provides inlay hints.
#[async_trait]
pub trait InlayHintProvider: Send + Sync {
    /// Handles `textDocument/inlayHint`.
    async fn inlay_hints(
        &self,
        params: InlayHintParams,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<InlayHint>>>;

    /// Whether the server resolves inlay hints lazily.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Handles `inlayHint/resolve`.
    async fn resolve_inlay_hint(
        &self,
        hint: InlayHint,
        _token: CancellationToken,
    ) -> ProviderResult<InlayHint> {
        Ok(hint)
    }
}
