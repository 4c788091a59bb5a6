//! Document links, folding, colors, semantic tokens, and inlay hints.

use serde_json::Value;
use url::Url;

use crate::position::{EditorPosition, EditorRange};

/// A clickable link inside a document.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorDocumentLink {
    /// The linked range.
    pub range: EditorRange,
    /// The target, absent until resolved.
    pub url: Option<Url>,
    /// Tooltip shown on hover.
    pub tooltip: Option<String>,
    /// Opaque server payload, round-tripped through resolve.
    pub data: Option<Value>,
}

/// Kind of a folding range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldingKind {
    /// A comment block.
    Comment,
    /// An import block.
    Imports,
    /// A folding region marker pair.
    Region,
}

/// A foldable region, expressed in 1-based lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFoldingRange {
    /// First folded line, 1-based.
    pub start: u32,
    /// Last folded line, 1-based.
    pub end: u32,
    /// The folding kind, if the server named one it knows.
    pub kind: Option<FoldingKind>,
}

/// An RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorColor {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
    /// Alpha channel.
    pub alpha: f32,
}

/// A color occurrence in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorColorInformation {
    /// Where the color literal appears.
    pub range: EditorRange,
    /// The parsed color.
    pub color: EditorColor,
}

/// One way of writing a color back into the document.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorColorPresentation {
    /// The label shown in the picker.
    pub label: String,
    /// The edit applying this presentation.
    pub text_edit: Option<crate::edits::EditorTextEdit>,
    /// Additional edits, e.g. an import of a color constant.
    pub additional_text_edits: Vec<crate::edits::EditorTextEdit>,
}

/// The legend decoding semantic token type/modifier indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SemanticTokensLegend {
    /// Token type names, indexed by type id.
    pub token_types: Vec<String>,
    /// Token modifier names, indexed by bit position.
    pub token_modifiers: Vec<String>,
}

/// Semantic tokens in the flattened five-integers-per-token wire layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSemanticTokens {
    /// Identifier for delta requests, if the server supports them.
    pub result_id: Option<String>,
    /// Flattened token data: delta line, delta start, length, type index,
    /// modifier bit set, repeated per token.
    pub data: Vec<u32>,
}

/// Kind of an inlay hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InlayKind {
    /// A type annotation.
    Type = 1,
    /// A parameter name.
    Parameter = 2,
}

/// One part of a structured inlay hint label.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorInlayHintLabelPart {
    /// The part text.
    pub label: String,
    /// Tooltip for this part.
    pub tooltip: Option<String>,
    /// Location this part links to.
    pub location: Option<crate::navigation::EditorLocation>,
    /// Command run when the part is clicked.
    pub command: Option<crate::actions::EditorCommand>,
}

/// An inlay hint label: plain text or structured parts.
#[derive(Debug, Clone, PartialEq)]
pub enum InlayHintLabel {
    /// Plain text.
    Text(String),
    /// Structured parts.
    Parts(Vec<EditorInlayHintLabelPart>),
}

/// An inlay hint.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorInlayHint {
    /// Where the hint renders.
    pub position: EditorPosition,
    /// The label.
    pub label: InlayHintLabel,
    /// The hint kind, if any.
    pub kind: Option<InlayKind>,
    /// Tooltip for the whole hint.
    pub tooltip: Option<String>,
    /// Pad with a space before the hint.
    pub padding_left: bool,
    /// Pad with a space after the hint.
    pub padding_right: bool,
    /// Edits applied when the hint is double-clicked.
    pub text_edits: Vec<crate::edits::EditorTextEdit>,
    /// Opaque server payload, round-tripped through resolve.
    pub data: Option<Value>,
}
