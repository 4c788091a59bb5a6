#![warn(missing_docs)]
//! `lsp-bridge` - bidirectional translation between editor feature APIs and
//! the Language Server Protocol.
//!
//! The crate sits between an editor host (abstracted by
//! [`lsp_bridge_model::EditorHost`]) and protocol providers (one trait per
//! feature family in [`providers`], typically backed by a language server
//! connection). The [`registry::FeatureRegistry`] wires the two together:
//! requests convert editor-to-protocol, responses protocol-to-editor, and
//! provider errors pass through unchanged. [`diagnostics`] keeps published
//! diagnostics in sync with the editor's marker store.

pub mod coords;
pub mod diagnostics;
pub mod e2p;
pub mod error;
pub mod p2e;
pub mod providers;
pub mod registry;
pub mod selector;

pub use coords::{
    PartialProtocolPosition, PartialProtocolRange, partial_to_editor_range, to_editor_position,
    to_editor_range, to_protocol_position, to_protocol_range,
};
pub use diagnostics::DiagnosticsCollection;
pub use e2p::EditorToProtocol;
pub use error::ConvertError;
pub use p2e::ProtocolToEditor;
pub use providers::{
    CodeActionProvider, CodeLensProvider, CompletionProvider, DeclarationProvider,
    DefinitionProvider, DocumentColorProvider, DocumentFormattingProvider,
    DocumentHighlightProvider, DocumentLinkProvider, DocumentRangeFormattingProvider,
    DocumentSymbolProvider, FoldingRangeProvider, HoverProvider, ImplementationProvider,
    InlayHintProvider, OnTypeFormattingProvider, ReferenceProvider, RenameProvider,
    SemanticTokensProvider, SignatureHelpProvider, TypeDefinitionProvider,
};
pub use registry::FeatureRegistry;
pub use selector::{DocumentFilter, DocumentSelector};
