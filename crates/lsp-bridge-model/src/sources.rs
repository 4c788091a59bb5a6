//! Editor-facing language feature sources.
//!
//! One trait per feature family, in editor-side types only. These are the
//! shapes an [`crate::host::EditorHost`] registration accepts; the core crate
//! adapts protocol providers into them.
//!
//! Every method receives a [`CancellationToken`] which is forwarded untouched
//! to the underlying provider. Results are `Option`: `None` means the source
//! produced nothing for this request.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::actions::{EditorCodeAction, EditorCodeActionContext, EditorCodeLens};
use crate::completion::{CompletionContext, EditorCompletionItem, EditorCompletionList};
use crate::display::{
    EditorColorInformation, EditorColorPresentation, EditorDocumentLink, EditorFoldingRange,
    EditorInlayHint, EditorSemanticTokens, SemanticTokensLegend,
};
use crate::edits::{EditorFormattingOptions, EditorTextEdit, EditorWorkspaceEdit, RenameLocation};
use crate::error::ProviderResult;
use crate::host::EditorModel;
use crate::hover::{EditorHover, EditorSignatureHelp, SignatureHelpContext};
use crate::navigation::{EditorDocumentHighlight, EditorLocation, GotoResult};
use crate::position::{EditorPosition, EditorRange};
use crate::symbols::EditorDocumentSymbol;

/// Supplies completion items.
#[async_trait]
pub trait CompletionSource: Send + Sync {
    /// Completions at `position`.
    async fn completions(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        context: CompletionContext,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorCompletionList>>;

    /// Whether [`Self::resolve_completion`] does anything.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Fills lazily computed fields of `item`.
    async fn resolve_completion(
        &self,
        item: EditorCompletionItem,
        _token: CancellationToken,
    ) -> ProviderResult<EditorCompletionItem> {
        Ok(item)
    }
}

/// Supplies hover information.
#[async_trait]
pub trait HoverSource: Send + Sync {
    /// Hover at `position`.
    async fn hover(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorHover>>;
}

/// Supplies signature help.
#[async_trait]
pub trait SignatureHelpSource: Send + Sync {
    /// Signature help at `position`.
    async fn signature_help(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        context: SignatureHelpContext,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorSignatureHelp>>;
}

/// Supplies go-to-definition targets.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Definitions of the symbol at `position`.
    async fn definition(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoResult>>;
}

/// Supplies go-to-declaration targets.
#[async_trait]
pub trait DeclarationSource: Send + Sync {
    /// Declarations of the symbol at `position`.
    async fn declaration(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoResult>>;
}

/// Supplies go-to-type-definition targets.
#[async_trait]
pub trait TypeDefinitionSource: Send + Sync {
    /// Type definitions of the symbol at `position`.
    async fn type_definition(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoResult>>;
}

/// Supplies go-to-implementation targets.
#[async_trait]
pub trait ImplementationSource: Send + Sync {
    /// Implementations of the symbol at `position`.
    async fn implementation(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<GotoResult>>;
}

/// Supplies references.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// References to the symbol at `position`.
    async fn references(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        include_declaration: bool,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorLocation>>>;
}

/// Supplies occurrence highlights.
#[async_trait]
pub trait DocumentHighlightSource: Send + Sync {
    /// Highlights for the symbol at `position`.
    async fn highlights(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorDocumentHighlight>>>;
}

/// Supplies the document outline.
#[async_trait]
pub trait DocumentSymbolSource: Send + Sync {
    /// Symbols of the whole document.
    async fn symbols(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorDocumentSymbol>>>;
}

/// Supplies code actions.
#[async_trait]
pub trait CodeActionSource: Send + Sync {
    /// Actions applicable to `range`.
    async fn code_actions(
        &self,
        model: &dyn EditorModel,
        range: EditorRange,
        context: EditorCodeActionContext,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorCodeAction>>>;

    /// Whether [`Self::resolve_code_action`] does anything.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Fills lazily computed fields of `action`, typically its edit.
    async fn resolve_code_action(
        &self,
        action: EditorCodeAction,
        _token: CancellationToken,
    ) -> ProviderResult<EditorCodeAction> {
        Ok(action)
    }
}

/// Supplies code lenses.
#[async_trait]
pub trait CodeLensSource: Send + Sync {
    /// Lenses for the whole document.
    async fn code_lenses(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorCodeLens>>>;

    /// Whether [`Self::resolve_code_lens`] does anything.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Fills the command of `lens`.
    async fn resolve_code_lens(
        &self,
        lens: EditorCodeLens,
        _token: CancellationToken,
    ) -> ProviderResult<EditorCodeLens> {
        Ok(lens)
    }
}

/// Formats a whole document.
#[async_trait]
pub trait DocumentFormattingSource: Send + Sync {
    /// Formatting edits for the whole document.
    async fn format_document(
        &self,
        model: &dyn EditorModel,
        options: EditorFormattingOptions,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorTextEdit>>>;
}

/// Formats a range of a document.
#[async_trait]
pub trait DocumentRangeFormattingSource: Send + Sync {
    /// Formatting edits for `range`.
    async fn format_range(
        &self,
        model: &dyn EditorModel,
        range: EditorRange,
        options: EditorFormattingOptions,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorTextEdit>>>;
}

/// Formats as the user types.
#[async_trait]
pub trait OnTypeFormattingSource: Send + Sync {
    /// Formatting edits after `ch` was typed at `position`.
    async fn format_on_type(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        ch: &str,
        options: EditorFormattingOptions,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorTextEdit>>>;
}

/// Supplies rename edits.
#[async_trait]
pub trait RenameSource: Send + Sync {
    /// Workspace edit renaming the symbol at `position` to `new_name`.
    async fn rename(
        &self,
        model: &dyn EditorModel,
        position: EditorPosition,
        new_name: &str,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorWorkspaceEdit>>;

    /// Whether [`Self::prepare_rename`] does anything.
    fn supports_prepare(&self) -> bool {
        false
    }

    /// The range and current text of the symbol to rename, or `None` when
    /// renaming at `position` is not possible.
    async fn prepare_rename(
        &self,
        _model: &dyn EditorModel,
        _position: EditorPosition,
        _token: CancellationToken,
    ) -> ProviderResult<Option<RenameLocation>> {
        Ok(None)
    }
}

/// Supplies document links.
#[async_trait]
pub trait DocumentLinkSource: Send + Sync {
    /// Links in the whole document.
    async fn links(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorDocumentLink>>>;

    /// Whether [`Self::resolve_link`] does anything.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Fills the target of `link`.
    async fn resolve_link(
        &self,
        link: EditorDocumentLink,
        _token: CancellationToken,
    ) -> ProviderResult<EditorDocumentLink> {
        Ok(link)
    }
}

/// Supplies document colors and their presentations.
#[async_trait]
pub trait DocumentColorSource: Send + Sync {
    /// Color occurrences in the whole document.
    async fn colors(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorColorInformation>>>;

    /// Ways of writing `color` at its range.
    async fn color_presentations(
        &self,
        model: &dyn EditorModel,
        color: EditorColorInformation,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorColorPresentation>>>;
}

/// Supplies folding ranges.
#[async_trait]
pub trait FoldingRangeSource: Send + Sync {
    /// Foldable regions of the whole document.
    async fn folding_ranges(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorFoldingRange>>>;
}

/// Supplies semantic tokens.
#[async_trait]
pub trait SemanticTokensSource: Send + Sync {
    /// The legend decoding this source's token indices.
    fn legend(&self) -> SemanticTokensLegend;

    /// Tokens for the whole document.
    async fn semantic_tokens(
        &self,
        model: &dyn EditorModel,
        token: CancellationToken,
    ) -> ProviderResult<Option<EditorSemanticTokens>>;
}

/// Supplies inlay hints.
#[async_trait]
pub trait InlayHintSource: Send + Sync {
    /// Hints inside `range`.
    async fn inlay_hints(
        &self,
        model: &dyn EditorModel,
        range: EditorRange,
        token: CancellationToken,
    ) -> ProviderResult<Option<Vec<EditorInlayHint>>>;

    /// Whether [`Self::resolve_inlay_hint`] does anything.
    fn supports_resolve(&self) -> bool {
        false
    }

    /// Fills lazily computed fields of `hint`.
    async fn resolve_inlay_hint(
        &self,
        hint: EditorInlayHint,
        _token: CancellationToken,
    ) -> ProviderResult<EditorInlayHint> {
        Ok(hint)
    }
}
