//! The editor capability surface.
//!
//! [`EditorHost`] is the seam between this workspace and an actual editor:
//! everything the bridge needs from the editor goes through it, so the bridge
//! itself never touches widget APIs.

use std::sync::Arc;

use url::Url;

use crate::disposable::Disposable;
use crate::markers::MarkerData;
use crate::position::{EditorPosition, EditorRange};
use crate::sources::{
    CodeActionSource, CodeLensSource, CompletionSource, DeclarationSource, DefinitionSource,
    DocumentColorSource, DocumentFormattingSource, DocumentHighlightSource, DocumentLinkSource,
    DocumentRangeFormattingSource, DocumentSymbolSource, FoldingRangeSource, HoverSource,
    ImplementationSource, InlayHintSource, OnTypeFormattingSource, ReferenceSource, RenameSource,
    SemanticTokensSource, SignatureHelpSource, TypeDefinitionSource,
};

/// One open document as the editor sees it.
pub trait EditorModel: Send + Sync {
    /// The document uri.
    fn uri(&self) -> &Url;

    /// The language identifier, e.g. `"rust"`.
    fn language_id(&self) -> &str;

    /// The document version, bumped on every change.
    fn version(&self) -> i32;

    /// The range of the word at `position`, if any.
    fn word_range_at(&self, position: EditorPosition) -> Option<EditorRange>;
}

/// The editor itself: model lookup, markers, and feature registration.
///
/// Every `register_*_source` call registers `source` for one language id and
/// returns a handle undoing exactly that registration.
pub trait EditorHost: Send + Sync {
    /// The open model for `uri`, if any.
    fn model(&self, uri: &Url) -> Option<Arc<dyn EditorModel>>;

    /// Subscribes to model creation. The listener fires for models opened
    /// after the subscription only.
    fn on_model_created(
        &self,
        listener: Box<dyn Fn(&dyn EditorModel) + Send + Sync>,
    ) -> Disposable;

    /// Replaces the markers `owner` keeps on `uri`.
    fn set_markers(&self, uri: &Url, owner: &str, markers: Vec<MarkerData>);

    /// Registers a completion source with its trigger characters.
    fn register_completion_source(
        &self,
        language: &str,
        trigger_characters: Vec<String>,
        source: Arc<dyn CompletionSource>,
    ) -> Disposable;

    /// Registers a hover source.
    fn register_hover_source(&self, language: &str, source: Arc<dyn HoverSource>) -> Disposable;

    /// Registers a signature-help source with its trigger characters.
    fn register_signature_help_source(
        &self,
        language: &str,
        trigger_characters: Vec<String>,
        retrigger_characters: Vec<String>,
        source: Arc<dyn SignatureHelpSource>,
    ) -> Disposable;

    /// Registers a definition source.
    fn register_definition_source(
        &self,
        language: &str,
        source: Arc<dyn DefinitionSource>,
    ) -> Disposable;

    /// Registers a declaration source.
    fn register_declaration_source(
        &self,
        language: &str,
        source: Arc<dyn DeclarationSource>,
    ) -> Disposable;

    /// Registers a type-definition source.
    fn register_type_definition_source(
        &self,
        language: &str,
        source: Arc<dyn TypeDefinitionSource>,
    ) -> Disposable;

    /// Registers an implementation source.
    fn register_implementation_source(
        &self,
        language: &str,
        source: Arc<dyn ImplementationSource>,
    ) -> Disposable;

    /// Registers a reference source.
    fn register_reference_source(
        &self,
        language: &str,
        source: Arc<dyn ReferenceSource>,
    ) -> Disposable;

    /// Registers a document-highlight source.
    fn register_document_highlight_source(
        &self,
        language: &str,
        source: Arc<dyn DocumentHighlightSource>,
    ) -> Disposable;

    /// Registers a document-symbol source.
    fn register_document_symbol_source(
        &self,
        language: &str,
        source: Arc<dyn DocumentSymbolSource>,
    ) -> Disposable;

    /// Registers a code-action source.
    fn register_code_action_source(
        &self,
        language: &str,
        source: Arc<dyn CodeActionSource>,
    ) -> Disposable;

    /// Registers a code-lens source.
    fn register_code_lens_source(
        &self,
        language: &str,
        source: Arc<dyn CodeLensSource>,
    ) -> Disposable;

    /// Registers a whole-document formatting source.
    fn register_document_formatting_source(
        &self,
        language: &str,
        source: Arc<dyn DocumentFormattingSource>,
    ) -> Disposable;

    /// Registers a range formatting source.
    fn register_document_range_formatting_source(
        &self,
        language: &str,
        source: Arc<dyn DocumentRangeFormattingSource>,
    ) -> Disposable;

    /// Registers an on-type formatting source with its trigger characters.
    fn register_on_type_formatting_source(
        &self,
        language: &str,
        first_trigger_character: String,
        more_trigger_characters: Vec<String>,
        source: Arc<dyn OnTypeFormattingSource>,
    ) -> Disposable;

    /// Registers a rename source.
    fn register_rename_source(&self, language: &str, source: Arc<dyn RenameSource>) -> Disposable;

    /// Registers a document-link source.
    fn register_document_link_source(
        &self,
        language: &str,
        source: Arc<dyn DocumentLinkSource>,
    ) -> Disposable;

    /// Registers a document-color source.
    fn register_document_color_source(
        &self,
        language: &str,
        source: Arc<dyn DocumentColorSource>,
    ) -> Disposable;

    /// Registers a folding-range source.
    fn register_folding_range_source(
        &self,
        language: &str,
        source: Arc<dyn FoldingRangeSource>,
    ) -> Disposable;

    /// Registers a semantic-tokens source.
    fn register_semantic_tokens_source(
        &self,
        language: &str,
        source: Arc<dyn SemanticTokensSource>,
    ) -> Disposable;

    /// Registers an inlay-hint source.
    fn register_inlay_hint_source(
        &self,
        language: &str,
        source: Arc<dyn InlayHintSource>,
    ) -> Disposable;
}
