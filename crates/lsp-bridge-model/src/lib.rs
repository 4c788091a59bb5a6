#![warn(missing_docs)]
//! `lsp-bridge-model` - editor-side model for `lsp-bridge`.
//!
//! Value types for every language feature family (completion, hover,
//! navigation, symbols, edits, diagnostics markers, decorations) in the
//! editor's own coordinate and enum conventions, plus the traits an editor
//! host implements to receive registrations. Nothing in this crate knows
//! about the wire protocol.

pub mod actions;
pub mod completion;
pub mod disposable;
pub mod display;
pub mod edits;
pub mod error;
pub mod host;
pub mod hover;
pub mod markers;
pub mod navigation;
pub mod position;
pub mod sources;
pub mod symbols;

pub use actions::{EditorCodeAction, EditorCodeActionContext, EditorCodeLens, EditorCommand};
pub use completion::{
    CompletionContext, CompletionItemLabel, CompletionTriggerKind, EditorCompletionItem,
    EditorCompletionKind, EditorCompletionList, InsertTextMode,
};
pub use disposable::{Disposable, DisposableCollection};
pub use display::{
    EditorColor, EditorColorInformation, EditorColorPresentation, EditorDocumentLink,
    EditorFoldingRange, EditorInlayHint, EditorInlayHintLabelPart, EditorSemanticTokens,
    FoldingKind, InlayHintLabel, InlayKind, SemanticTokensLegend,
};
pub use edits::{
    EditMetadata, EditorFormattingOptions, EditorTextEdit, EditorWorkspaceEdit,
    FileOperationOptions, RenameLocation, ResourceEdit, TextResourceEdit, WorkspaceTextEdit,
};
pub use error::{ProviderError, ProviderResult};
pub use host::{EditorHost, EditorModel};
pub use hover::{
    EditorDocumentation, EditorHover, EditorParameterInformation, EditorSignatureHelp,
    EditorSignatureInformation, MarkdownString, ParameterLabel, SignatureHelpContext,
    SignatureHelpTriggerKind,
};
pub use markers::{MarkerData, MarkerSeverity, MarkerTag, RelatedInformation};
pub use navigation::{
    EditorDocumentHighlight, EditorLocation, EditorLocationLink, GotoResult, HighlightKind,
};
pub use position::{
    EditorEditRange, EditorPosition, EditorRange, MaybeRange, PartialPosition, PartialRange,
};
pub use sources::{
    CodeActionSource, CodeLensSource, CompletionSource, DeclarationSource, DefinitionSource,
    DocumentColorSource, DocumentFormattingSource, DocumentHighlightSource, DocumentLinkSource,
    DocumentRangeFormattingSource, DocumentSymbolSource, FoldingRangeSource, HoverSource,
    ImplementationSource, InlayHintSource, OnTypeFormattingSource, ReferenceSource, RenameSource,
    SemanticTokensSource, SignatureHelpSource, TypeDefinitionSource,
};
pub use symbols::{EditorDocumentSymbol, EditorSymbolKind, SymbolTag};
