//! Feature registry.
//!
//! Wraps protocol providers into editor sources and registers them with the
//! host. Each adapter converts the request editor-to-protocol, calls the
//! provider, and converts the response protocol-to-editor; provider faults
//! pass through unchanged.
//!
//! A selector is resolved to its language ids once, at registration time.
//! Documents opened later with a matching language are covered; per-request
//! re-matching does not happen. Disposing the returned handle removes every
//! registration the call made, and registering again afterwards is a fresh
//! registration.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use lsp_bridge_model::{
    CodeActionSource, CodeLensSource, CompletionContext, CompletionSource, DeclarationSource,
    DefinitionSource, Disposable, DisposableCollection, DocumentColorSource,
    DocumentFormattingSource, DocumentHighlightSource, DocumentLinkSource,
    DocumentRangeFormattingSource, DocumentSymbolSource, EditorCodeAction,
    EditorCodeActionContext, EditorCodeLens, EditorColorInformation, EditorColorPresentation,
    EditorCompletionItem, EditorCompletionList, EditorDocumentHighlight, EditorDocumentLink,
    EditorDocumentSymbol, EditorFoldingRange, EditorFormattingOptions, EditorHost, EditorHover,
    EditorInlayHint, EditorLocation, EditorModel, EditorPosition, EditorRange,
    EditorSemanticTokens, EditorSignatureHelp, EditorTextEdit, EditorWorkspaceEdit,
    FoldingRangeSource, GotoResult, HoverSource, ImplementationSource, InlayHintSource,
    OnTypeFormattingSource, ProviderResult, ReferenceSource, RenameLocation, RenameSource,
    SemanticTokensLegend, SemanticTokensSource, SignatureHelpContext, SignatureHelpSource,
    TypeDefinitionSource,
};

use crate::e2p::EditorToProtocol;
use crate::p2e::ProtocolToEditor;
use crate::providers::{
    CodeActionProvider, CodeLensProvider, CompletionProvider, DeclarationProvider,
    DefinitionProvider, DocumentColorProvider, DocumentFormattingProvider,
    DocumentHighlightProvider, DocumentLinkProvider, DocumentRangeFormattingProvider,
    DocumentSymbolProvider, FoldingRangeProvider, HoverProvider, ImplementationProvider,
    InlayHintProvider, OnTypeFormattingProvider, ReferenceProvider, RenameProvider,
    SemanticTokensProvider, SignatureHelpProvider, TypeDefinitionProvider,
};
use crate::selector::DocumentSelector;

/// Registers protocol providers as editor feature sources.
pub struct FeatureRegistry {
    host: Arc<dyn EditorHost>,
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
}

impl FeatureRegistry {
    /// Creates a registry backed by `host`.
    pub fn new(host: Arc<dyn EditorHost>) -> Self {
        Self { host, e2p: EditorToProtocol, p2e: ProtocolToEditor }
    }

    /// The host this registry registers against.
    pub fn host(&self) -> &Arc<dyn EditorHost> {
        &self.host
    }

    fn register_each(
        &self,
        selector: &DocumentSelector,
        feature: &str,
        mut register: impl FnMut(&str) -> Disposable,
    ) -> Disposable {
        let mut collection = DisposableCollection::new();
        for language in selector.languages() {
            tracing::debug!(language = %language, feature, "registering language feature");
            collection.push(register(&language));
        }
        collection.into_disposable()
    }

    /// Registers a completion provider.
    pub fn register_completion_provider(
        &self,
        selector: &DocumentSelector,
        trigger_characters: Vec<String>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Disposable {
        let source = Arc::new(CompletionAdapter {
            e2p: self.e2p,
            p2e: self.p2e,
            provider,
        });
        self.register_each(selector, "completion", |language| {
            self.host.register_completion_source(
                language,
                trigger_characters.clone(),
                source.clone(),
            )
        })
    }

    /// Registers a hover provider.
    pub fn register_hover_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn HoverProvider>,
    ) -> Disposable {
        let source = Arc::new(HoverAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "hover", |language| {
            self.host.register_hover_source(language, source.clone())
        })
    }

    /// Registers a signature-help provider.
    pub fn register_signature_help_provider(
        &self,
        selector: &DocumentSelector,
        trigger_characters: Vec<String>,
        retrigger_characters: Vec<String>,
        provider: Arc<dyn SignatureHelpProvider>,
    ) -> Disposable {
        let source = Arc::new(SignatureHelpAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "signature help", |language| {
            self.host.register_signature_help_source(
                language,
                trigger_characters.clone(),
                retrigger_characters.clone(),
                source.clone(),
            )
        })
    }

    /// Registers a definition provider.
    pub fn register_definition_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DefinitionProvider>,
    ) -> Disposable {
        let source = Arc::new(DefinitionAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "definition", |language| {
            self.host.register_definition_source(language, source.clone())
        })
    }

    /// Registers a declaration provider.
    pub fn register_declaration_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DeclarationProvider>,
    ) -> Disposable {
        let source = Arc::new(DeclarationAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "declaration", |language| {
            self.host.register_declaration_source(language, source.clone())
        })
    }

    /// Registers a type-definition provider.
    pub fn register_type_definition_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn TypeDefinitionProvider>,
    ) -> Disposable {
        let source = Arc::new(TypeDefinitionAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "type definition", |language| {
            self.host.register_type_definition_source(language, source.clone())
        })
    }

    /// Registers an implementation provider.
    pub fn register_implementation_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn ImplementationProvider>,
    ) -> Disposable {
        let source = Arc::new(ImplementationAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "implementation", |language| {
            self.host.register_implementation_source(language, source.clone())
        })
    }

    /// Registers a reference provider.
    pub fn register_reference_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn ReferenceProvider>,
    ) -> Disposable {
        let source = Arc::new(ReferenceAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "references", |language| {
            self.host.register_reference_source(language, source.clone())
        })
    }

    /// Registers a document-highlight provider.
    pub fn register_document_highlight_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DocumentHighlightProvider>,
    ) -> Disposable {
        let source = Arc::new(DocumentHighlightAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "document highlight", |language| {
            self.host.register_document_highlight_source(language, source.clone())
        })
    }

    /// Registers a document-symbol provider.
    pub fn register_document_symbol_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DocumentSymbolProvider>,
    ) -> Disposable {
        let source = Arc::new(DocumentSymbolAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "document symbol", |language| {
            self.host.register_document_symbol_source(language, source.clone())
        })
    }

    /// Registers a code-action provider.
    pub fn register_code_action_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn CodeActionProvider>,
    ) -> Disposable {
        let source = Arc::new(CodeActionAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "code action", |language| {
            self.host.register_code_action_source(language, source.clone())
        })
    }

    /// Registers a code-lens provider.
    pub fn register_code_lens_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn CodeLensProvider>,
    ) -> Disposable {
        let source = Arc::new(CodeLensAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "code lens", |language| {
            self.host.register_code_lens_source(language, source.clone())
        })
    }

    /// Registers a whole-document formatting provider.
    pub fn register_document_formatting_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DocumentFormattingProvider>,
    ) -> Disposable {
        let source = Arc::new(DocumentFormattingAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "formatting", |language| {
            self.host.register_document_formatting_source(language, source.clone())
        })
    }

    /// Registers a range formatting provider.
    pub fn register_document_range_formatting_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DocumentRangeFormattingProvider>,
    ) -> Disposable {
        let source =
            Arc::new(DocumentRangeFormattingAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "range formatting", |language| {
            self.host.register_document_range_formatting_source(language, source.clone())
        })
    }

    /// Registers an on-type formatting provider.
    pub fn register_on_type_formatting_provider(
        &self,
        selector: &DocumentSelector,
        first_trigger_character: String,
        more_trigger_characters: Vec<String>,
        provider: Arc<dyn OnTypeFormattingProvider>,
    ) -> Disposable {
        let source = Arc::new(OnTypeFormattingAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "on-type formatting", |language| {
            self.host.register_on_type_formatting_source(
                language,
                first_trigger_character.clone(),
                more_trigger_characters.clone(),
                source.clone(),
            )
        })
    }

    /// Registers a rename provider.
    pub fn register_rename_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn RenameProvider>,
    ) -> Disposable {
        let source = Arc::new(RenameAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "rename", |language| {
            self.host.register_rename_source(language, source.clone())
        })
    }

    /// Registers a document-link provider.
    pub fn register_document_link_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DocumentLinkProvider>,
    ) -> Disposable {
        let source = Arc::new(DocumentLinkAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "document link", |language| {
            self.host.register_document_link_source(language, source.clone())
        })
    }

    /// Registers a document-color provider.
    pub fn register_document_color_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn DocumentColorProvider>,
    ) -> Disposable {
        let source = Arc::new(DocumentColorAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "document color", |language| {
            self.host.register_document_color_source(language, source.clone())
        })
    }

    /// Registers a folding-range provider.
    pub fn register_folding_range_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn FoldingRangeProvider>,
    ) -> Disposable {
        let source = Arc::new(FoldingRangeAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "folding range", |language| {
            self.host.register_folding_range_source(language, source.clone())
        })
    }

    /// Registers a semantic-tokens provider.
    pub fn register_semantic_tokens_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn SemanticTokensProvider>,
    ) -> Disposable {
        let source = Arc::new(SemanticTokensAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "semantic tokens", |language| {
            self.host.register_semantic_tokens_source(language, source.clone())
        })
    }

    /// Registers an inlay-hint provider.
    pub fn register_inlay_hint_provider(
        &self,
        selector: &DocumentSelector,
        provider: Arc<dyn InlayHintProvider>,
    ) -> Disposable {
        let source = Arc::new(InlayHintAdapter { e2p: self.e2p, p2e: self.p2e, provider });
        self.register_each(selector, "inlay hint", |language| {
            self.host.register_inlay_hint_source(language, source.clone())
        })
    }
}

struct CompletionAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn CompletionProvider>,
}

#[async_trait]
impl CompletionSource for CompletionAdapter {
    async fn completions(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        context: CompletionContext,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorCompletionList>> {
        let params = self.e2p.as_completion_params(model.uri(), position, &context)?;
        let Some(response) = self.provider.completion(params, token).await? else {
            return Ok(None);
        };
        // The word at the cursor is the fallback replacement range for
        // items that carry no edit of their own.
        let default_range = model
            .word_range_at(position)
            .unwrap_or_else(|| EditorRange::collapsed(position));
        Ok(Some(self.p2e.as_completion_list(&response, default_range)?))
    }

    fn supports_resolve(&self) -> bool {
        self.provider.supports_resolve()
    }

    async fn resolve_completion(
        &self,
        item: EditorCompletionItem,
        token: CancellationToken,
    ) -> ProviderResult<EditorCompletionItem> {
        if !self.provider.supports_resolve() {
            return Ok(item);
        }
        let default_range = item.range.insert();
        let converted = self.e2p.as_completion_item(&item);
        let resolved = self.provider.resolve_completion_item(converted, token).await?;
        Ok(self.p2e.as_completion_item(&resolved, None, default_range)?)
    }
}

struct HoverAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn HoverProvider>,
}

#[async_trait]
impl HoverSource for HoverAdapter {
    async fn hover(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorHover>> {
        let params = self.e2p.as_hover_params(model.uri(), position)?;
        let Some(hover) = self.provider.hover(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_hover(&hover)))
    }
}

struct SignatureHelpAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn SignatureHelpProvider>,
}

#[async_trait]
impl SignatureHelpSource for SignatureHelpAdapter {
    async fn signature_help(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        context: SignatureHelpContext,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorSignatureHelp>> {
        let params = self.e2p.as_signature_help_params(model.uri(), position, &context)?;
        let Some(help) = self.provider.signature_help(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_signature_help(&help)))
    }
}

macro_rules! goto_adapter {
    ($adapter:ident, $source:ident, $provider:ident, $source_method:ident, $provider_method:ident) => {
        struct $adapter {
            e2p: EditorToProtocol,
            p2e: ProtocolToEditor,
            provider: Arc<dyn $provider>,
        }

        #[async_trait]
        impl $source for $adapter {
            async fn $source_method(
                &self,
                model: &dyn EditorModel,
                position: EditorPosition,
                token: CancellationToken,
            ) -> ProviderResult<Option<GotoResult>> {
                let params = self.e2p.as_goto_params(model.uri(), position)?;
                let Some(response) = self.provider.$provider_method(params, token).await? else {
                    return Ok(None);
                };
                Ok(self.p2e.as_goto_result(&response)?)
            }
        }
    };
}

goto_adapter!(DefinitionAdapter, DefinitionSource, DefinitionProvider, definition, definition);
goto_adapter!(DeclarationAdapter, DeclarationSource, DeclarationProvider, declaration, declaration);
goto_adapter!(
    TypeDefinitionAdapter,
    TypeDefinitionSource,
    TypeDefinitionProvider,
    type_definition,
    type_definition
);
goto_adapter!(
    ImplementationAdapter,
    ImplementationSource,
    ImplementationProvider,
    implementation,
    implementation
);

struct ReferenceAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn ReferenceProvider>,
}

#[async_trait]
impl ReferenceSource for ReferenceAdapter {
    async fn references(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        include_declaration: bool,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorLocation>>> {
        let params =
            self.e2p.as_reference_params(model.uri(), position, include_declaration)?;
        let Some(locations) = self.provider.references(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_locations(&locations)?))
    }
}

struct DocumentHighlightAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn DocumentHighlightProvider>,
}

#[async_trait]
impl DocumentHighlightSource for DocumentHighlightAdapter {
    async fn highlights(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorDocumentHighlight>>> {
        let params = self.e2p.as_document_highlight_params(model.uri(), position)?;
        let Some(highlights) = self.provider.highlights(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_document_highlights(&highlights)))
    }
}

struct DocumentSymbolAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn DocumentSymbolProvider>,
}

#[async_trait]
impl DocumentSymbolSource for DocumentSymbolAdapter {
    async fn symbols(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorDocumentSymbol>>> {
        let params = self.e2p.as_document_symbol_params(model.uri())?;
        let Some(response) = self.provider.symbols(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_document_symbols(&response)))
    }
}

struct CodeActionAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn CodeActionProvider>,
}

#[async_trait]
impl CodeActionSource for CodeActionAdapter {
    async fn code_actions(
        &self,
        model: &dyn EditorModel,
        range: EditorRange,
        context: EditorCodeActionContext,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorCodeAction>>> {
        let params = self.e2p.as_code_action_params(model.uri(), range, &context)?;
        let Some(response) = self.provider.code_actions(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_code_actions(&response)?))
    }

    fn supports_resolve(&self) -> bool {
        self.provider.supports_resolve()
    }

    async fn resolve_code_action(
        &self,
        action: EditorCodeAction,
        token: CancellationToken,
    ) -> ProviderResult<EditorCodeAction> {
        if !self.provider.supports_resolve() {
            return Ok(action);
        }
        let converted = self.e2p.as_code_action(&action)?;
        let resolved = self.provider.resolve_code_action(converted, token).await?;
        Ok(self.p2e.as_code_action(&resolved)?)
    }
}

struct CodeLensAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn CodeLensProvider>,
}

#[async_trait]
impl CodeLensSource for CodeLensAdapter {
    async fn code_lenses(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorCodeLens>>> {
        let params = self.e2p.as_code_lens_params(model.uri())?;
        let Some(lenses) = self.provider.code_lenses(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_code_lenses(&lenses)))
    }

    fn supports_resolve(&self) -> bool {
        self.provider.supports_resolve()
    }

    async fn resolve_code_lens(
        &self,
        lens: EditorCodeLens,
        token: CancellationToken,
    ) -> ProviderResult<EditorCodeLens> {
        if !self.provider.supports_resolve() {
            return Ok(lens);
        }
        let converted = self.e2p.as_code_lens(&lens);
        let resolved = self.provider.resolve_code_lens(converted, token).await?;
        Ok(self.p2e.as_code_lens(&resolved))
    }
}

struct DocumentFormattingAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn DocumentFormattingProvider>,
}

#[async_trait]
impl DocumentFormattingSource for DocumentFormattingAdapter {
    async fn format_document(
        &self,
        model: &dyn EditorModel,
        options: EditorFormattingOptions,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorTextEdit>>> {
        let params = self.e2p.as_document_formatting_params(model.uri(), options)?;
        let Some(edits) = self.provider.format(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_text_edits(&edits)))
    }
}

struct DocumentRangeFormattingAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn DocumentRangeFormattingProvider>,
}

#[async_trait]
impl DocumentRangeFormattingSource for DocumentRangeFormattingAdapter {
    async fn format_range(
        &self,
        model: &dyn EditorModel,
        range: EditorRange,
        options: EditorFormattingOptions,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorTextEdit>>> {
        let params =
            self.e2p.as_document_range_formatting_params(model.uri(), range, options)?;
        let Some(edits) = self.provider.format_range(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_text_edits(&edits)))
    }
}

struct OnTypeFormattingAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn OnTypeFormattingProvider>,
}

#[async_trait]
impl OnTypeFormattingSource for OnTypeFormattingAdapter {
    async fn format_on_type(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        ch: &str,
        options: EditorFormattingOptions,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorTextEdit>>> {
        let params =
            self.e2p.as_on_type_formatting_params(model.uri(), position, ch, options)?;
        let Some(edits) = self.provider.format_on_type(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_text_edits(&edits)))
    }
}

struct RenameAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn RenameProvider>,
}

#[async_trait]
impl RenameSource for RenameAdapter {
    async fn rename(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        new_name: &str,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorWorkspaceEdit>> {
        let params = self.e2p.as_rename_params(model.uri(), position, new_name)?;
        let Some(edit) = self.provider.rename(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_workspace_edit(&edit)?))
    }

    fn supports_prepare(&self) -> bool {
        self.provider.supports_prepare()
    }

    async fn prepare_rename(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<RenameLocation>> {
        if !self.provider.supports_prepare() {
            return Ok(None);
        }
        let params = self.e2p.as_text_document_position_params(model.uri(), position)?;
        let Some(response) = self.provider.prepare_rename(params, token).await? else {
            return Ok(None);
        };
        match self.p2e.as_rename_location(&response) {
            Some(location) => Ok(Some(location)),
            // Default behavior: fall back to the editor's own word range.
            None => Ok(model
                .word_range_at(position)
                .map(|range| RenameLocation { range, text: None })),
        }
    }
}

struct DocumentLinkAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn DocumentLinkProvider>,
}

#[async_trait]
impl DocumentLinkSource for DocumentLinkAdapter {
    async fn links(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorDocumentLink>>> {
        let params = self.e2p.as_document_link_params(model.uri())?;
        let Some(links) = self.provider.links(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_document_links(&links)?))
    }

    fn supports_resolve(&self) -> bool {
        self.provider.supports_resolve()
    }

    async fn resolve_link(
        &self,
        link: EditorDocumentLink,
        token: CancellationToken,
    ) -> ProviderResult<EditorDocumentLink> {
        // A link that already has its target needs no resolution.
        if link.url.is_some() || !self.provider.supports_resolve() {
            return Ok(link);
        }
        let converted = self.e2p.as_document_link(&link)?;
        let resolved = self.provider.resolve_link(converted, token).await?;
        Ok(self.p2e.as_document_link(&resolved)?)
    }
}

struct DocumentColorAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn DocumentColorProvider>,
}

#[async_trait]
impl DocumentColorSource for DocumentColorAdapter {
    async fn colors(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorColorInformation>>> {
        let params = self.e2p.as_document_color_params(model.uri())?;
        let Some(colors) = self.provider.colors(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_color_informations(&colors)))
    }

    async fn color_presentations(
        &self,
        model: &dyn EditorModel,
        color: EditorColorInformation,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorColorPresentation>>> {
        let params = self.e2p.as_color_presentation_params(model.uri(), &color)?;
        let Some(presentations) = self.provider.color_presentations(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_color_presentations(&presentations)))
    }
}

struct FoldingRangeAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn FoldingRangeProvider>,
}

#[async_trait]
impl FoldingRangeSource for FoldingRangeAdapter {
    async fn folding_ranges(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorFoldingRange>>> {
        let params = self.e2p.as_folding_range_params(model.uri())?;
        let Some(ranges) = self.provider.folding_ranges(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_folding_ranges(&ranges)))
    }
}

struct SemanticTokensAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn SemanticTokensProvider>,
}

#[async_trait]
impl SemanticTokensSource for SemanticTokensAdapter {
    fn legend(&self) -> SemanticTokensLegend {
        self.p2e.as_semantic_tokens_legend(&self.provider.legend())
    }

    async fn semantic_tokens(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorSemanticTokens>> {
        let params = self.e2p.as_semantic_tokens_params(model.uri())?;
        let Some(result) = self.provider.semantic_tokens(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_semantic_tokens(&result)))
    }
}

struct InlayHintAdapter {
    e2p: EditorToProtocol,
    p2e: ProtocolToEditor,
    provider: Arc<dyn InlayHintProvider>,
}

#[async_trait]
impl InlayHintSource for InlayHintAdapter {
    async fn inlay_hints(
        &self,
        model: &dyn EditorModel,
        range: EditorRange,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorInlayHint>>> {
        let params = self.e2p.as_inlay_hint_params(model.uri(), range)?;
        let Some(hints) = self.provider.inlay_hints(params, token).await? else {
            return Ok(None);
        };
        Ok(Some(self.p2e.as_inlay_hints(&hints)?))
    }

    fn supports_resolve(&self) -> bool {
        self.provider.supports_resolve()
    }

    async fn resolve_inlay_hint(
        &self,
        hint: EditorInlayHint,
        token: CancellationToken,
    ) -> ProviderResult<EditorInlayHint> {
        if !self.provider.supports_resolve() {
            return Ok(hint);
        }
        let converted = self.e2p.as_inlay_hint(&hint)?;
        let resolved = self.provider.resolve_inlay_hint(converted, token).await?;
        Ok(self.p2e.as_inlay_hint(&resolved)?)
    }
}
