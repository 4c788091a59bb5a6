//! Commands, code actions, and code lenses.

use serde_json::Value;

use crate::edits::EditorWorkspaceEdit;
use crate::markers::MarkerData;
use crate::position::EditorRange;

/// A command reference: an identifier plus arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCommand {
    /// The command identifier.
    pub id: String,
    /// The title shown in menus.
    pub title: String,
    /// Arguments passed verbatim to the command handler.
    pub arguments: Vec<Value>,
}

/// A code action as the editor consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCodeAction {
    /// The title shown in the lightbulb menu.
    pub title: String,
    /// The action kind, e.g. `"quickfix"`.
    pub kind: Option<String>,
    /// The markers this action addresses.
    pub diagnostics: Vec<MarkerData>,
    /// Whether this is the preferred action for its diagnostics.
    pub is_preferred: bool,
    /// Why the action is disabled, when it is.
    pub disabled: Option<String>,
    /// The workspace edit applied when the action runs.
    pub edit: Option<EditorWorkspaceEdit>,
    /// Command run after (or instead of) the edit.
    pub command: Option<EditorCommand>,
    /// Opaque server payload, round-tripped through resolve.
    pub data: Option<Value>,
}

/// Context carried with a code-action request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorCodeActionContext {
    /// Markers overlapping the requested range.
    pub markers: Vec<MarkerData>,
    /// Requested action kinds, when the invocation filtered.
    pub only: Vec<String>,
}

/// A code lens.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCodeLens {
    /// The range the lens annotates.
    pub range: EditorRange,
    /// The command, absent until resolved.
    pub command: Option<EditorCommand>,
    /// Opaque server payload, round-tripped through resolve.
    pub data: Option<Value>,
}
