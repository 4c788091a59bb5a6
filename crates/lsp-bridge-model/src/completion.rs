//! Editor-side completion model.

use serde_json::Value;

use crate::position::EditorEditRange;

/// Completion item kinds in the editor's own ordering.
///
/// These values are the editor widget's, not the protocol's. The core crate
/// owns the remap table between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EditorCompletionKind {
    /// A method of a class or object.
    Method = 0,
    /// A free function.
    Function = 1,
    /// A constructor.
    Constructor = 2,
    /// A field of a class or struct.
    Field = 3,
    /// A variable.
    Variable = 4,
    /// A class.
    Class = 5,
    /// A struct.
    Struct = 6,
    /// An interface or trait.
    Interface = 7,
    /// A module or namespace.
    Module = 8,
    /// A property.
    Property = 9,
    /// An event.
    Event = 10,
    /// An operator.
    Operator = 11,
    /// A primitive unit such as `px`.
    Unit = 12,
    /// A literal value.
    Value = 13,
    /// A constant.
    Constant = 14,
    /// An enumeration.
    Enum = 15,
    /// An enumeration member.
    EnumMember = 16,
    /// A keyword.
    Keyword = 17,
    /// Plain text.
    Text = 18,
    /// A color value.
    Color = 19,
    /// A file.
    File = 20,
    /// A reference.
    Reference = 21,
    /// A custom color, swatch-rendered.
    Customcolor = 22,
    /// A folder.
    Folder = 23,
    /// A type parameter.
    TypeParameter = 24,
    /// A user identity.
    User = 25,
    /// An issue reference.
    Issue = 26,
    /// A snippet.
    Snippet = 27,
}

/// How a completion request was triggered, editor-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionTriggerKind {
    /// Explicitly invoked or typing an identifier.
    #[default]
    Invoked,
    /// Triggered by a registered trigger character.
    TriggerCharacter,
    /// Re-triggered because the current list was incomplete.
    TriggerForIncompleteCompletions,
}

/// Context carried with a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionContext {
    /// How the request was triggered.
    pub trigger_kind: CompletionTriggerKind,
    /// The trigger character, when [`CompletionTriggerKind::TriggerCharacter`].
    pub trigger_character: Option<String>,
}

/// Structured completion label: primary text plus optional annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItemLabel {
    /// The primary label text.
    pub label: String,
    /// Rendered directly after the label, e.g. a signature.
    pub detail: Option<String>,
    /// Rendered right-aligned, e.g. a fully qualified name.
    pub description: Option<String>,
}

impl CompletionItemLabel {
    /// A plain label without annotations.
    pub fn plain(label: impl Into<String>) -> Self {
        Self { label: label.into(), detail: None, description: None }
    }
}

/// How whitespace in a multi-line insertion is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertTextMode {
    /// Insert the text exactly as written.
    AsIs,
    /// Adjust leading whitespace of subsequent lines to the cursor's indentation.
    AdjustIndentation,
}

/// One completion item as the editor widget consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCompletionItem {
    /// The label, possibly annotated.
    pub label: CompletionItemLabel,
    /// The item kind.
    pub kind: EditorCompletionKind,
    /// The raw protocol kind value when it had no editor equivalent. Kept so
    /// the resolve round-trip can send back exactly what the server sent.
    pub original_kind: Option<u32>,
    /// Extra detail shown in the documentation flyout.
    pub detail: Option<String>,
    /// Documentation text.
    pub documentation: Option<String>,
    /// `"markdown"` or `"plaintext"` when documentation came as markup.
    pub documentation_format: Option<String>,
    /// Whether the item is deprecated.
    pub deprecated: bool,
    /// Whether the item should be preselected.
    pub preselect: bool,
    /// Sort key; the label is used when absent.
    pub sort_text: Option<String>,
    /// Filter key; the label is used when absent.
    pub filter_text: Option<String>,
    /// The text inserted when the item is accepted.
    pub insert_text: String,
    /// Whether `insert_text` is a snippet with tab stops.
    pub is_snippet: bool,
    /// Whitespace handling for multi-line insertions.
    pub insert_text_mode: Option<InsertTextMode>,
    /// The replacement range.
    pub range: EditorEditRange,
    /// Whether `insert_text`/`range` came from a server-provided text edit
    /// (directly or via list defaults) rather than from a fallback.
    pub from_edit: bool,
    /// Characters that accept the item and are then typed.
    pub commit_characters: Vec<String>,
    /// Additional edits applied alongside the insertion.
    pub additional_text_edits: Vec<crate::edits::EditorTextEdit>,
    /// Command run after insertion.
    pub command: Option<crate::actions::EditorCommand>,
    /// Opaque server payload, round-tripped through resolve.
    pub data: Option<Value>,
}

/// A completion list as the editor widget consumes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorCompletionList {
    /// Whether re-typing should re-query the server.
    pub incomplete: bool,
    /// The items.
    pub items: Vec<EditorCompletionItem>,
}
