//! Hover and signature-help model.

use crate::position::EditorRange;

/// A block of markdown as the editor renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownString {
    /// Markdown source.
    pub value: String,
}

impl MarkdownString {
    /// Wraps a markdown string.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    /// Renders `value` as a fenced code block in `language`.
    pub fn code_block(language: &str, value: &str) -> Self {
        Self { value: format!("```{language}\n{value}\n```") }
    }
}

/// Documentation attached to a signature or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorDocumentation {
    /// Plain text.
    Plain(String),
    /// Markdown.
    Markdown(MarkdownString),
}

/// A hover result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorHover {
    /// The hover contents, one block per entry.
    pub contents: Vec<MarkdownString>,
    /// The range the hover applies to, when the server supplied one.
    pub range: Option<EditorRange>,
}

/// A parameter label: literal text or an offset pair into the signature label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLabel {
    /// Literal label text.
    Simple(String),
    /// Inclusive start / exclusive end offsets into the signature label,
    /// counted in UTF-16 code units.
    Offsets(u32, u32),
}

/// One parameter of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorParameterInformation {
    /// The parameter label.
    pub label: ParameterLabel,
    /// Parameter documentation.
    pub documentation: Option<EditorDocumentation>,
}

/// One signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSignatureInformation {
    /// The signature label, e.g. the full prototype.
    pub label: String,
    /// Signature documentation.
    pub documentation: Option<EditorDocumentation>,
    /// The parameters.
    pub parameters: Vec<EditorParameterInformation>,
    /// Active parameter override for this signature.
    pub active_parameter: Option<u32>,
}

/// A signature-help result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSignatureHelp {
    /// The signatures.
    pub signatures: Vec<EditorSignatureInformation>,
    /// Index of the active signature.
    pub active_signature: u32,
    /// Index of the active parameter.
    pub active_parameter: u32,
}

/// How a signature-help request was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureHelpTriggerKind {
    /// Explicitly invoked.
    #[default]
    Invoked,
    /// Triggered by a trigger character.
    TriggerCharacter,
    /// Triggered by editing while help was visible.
    ContentChange,
}

/// Context carried with a signature-help request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureHelpContext {
    /// How the request was triggered.
    pub trigger_kind: SignatureHelpTriggerKind,
    /// The trigger character, if any.
    pub trigger_character: Option<String>,
    /// Whether help was already visible when the request fired.
    pub is_retrigger: bool,
    /// The help currently on screen, for the server to refine.
    pub active_signature_help: Option<EditorSignatureHelp>,
}
