//! Text edits and workspace edits, editor-side.

use url::Url;

use crate::position::EditorRange;

/// A single text replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTextEdit {
    /// The range to replace.
    pub range: EditorRange,
    /// The replacement text. Empty means delete.
    pub text: String,
}

/// Change-annotation metadata attached to an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMetadata {
    /// Whether the edit needs explicit user confirmation.
    pub needs_confirmation: bool,
    /// Short label grouping the edit in the confirmation UI.
    pub label: String,
    /// Longer description shown under the label.
    pub description: Option<String>,
}

/// A text edit plus optional annotation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceTextEdit {
    /// The edit.
    pub edit: EditorTextEdit,
    /// Annotation metadata, if the edit was annotated.
    pub metadata: Option<EditMetadata>,
}

/// All text edits targeting one resource, applied as a single undo step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResourceEdit {
    /// The resource being edited.
    pub resource: Url,
    /// The expected document version, when the server pinned one.
    pub version: Option<i32>,
    /// The edits, in server order.
    pub edits: Vec<WorkspaceTextEdit>,
}

/// Options on a file create/rename/delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileOperationOptions {
    /// Overwrite an existing target.
    pub overwrite: bool,
    /// Skip the operation if the target exists (create/rename) or the
    /// source is missing (delete).
    pub ignore_if_exists: bool,
    /// For delete: do not error when the target is missing.
    pub ignore_if_not_exists: bool,
    /// For delete: remove directory contents recursively.
    pub recursive: bool,
}

/// One entry of a workspace edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEdit {
    /// Text edits on one resource.
    Text(TextResourceEdit),
    /// Create a file.
    CreateFile {
        /// The file to create.
        uri: Url,
        /// Operation options.
        options: FileOperationOptions,
        /// Annotation metadata.
        metadata: Option<EditMetadata>,
    },
    /// Rename a file.
    RenameFile {
        /// The current uri.
        old_uri: Url,
        /// The new uri.
        new_uri: Url,
        /// Operation options.
        options: FileOperationOptions,
        /// Annotation metadata.
        metadata: Option<EditMetadata>,
    },
    /// Delete a file.
    DeleteFile {
        /// The file to delete.
        uri: Url,
        /// Operation options.
        options: FileOperationOptions,
        /// Annotation metadata.
        metadata: Option<EditMetadata>,
    },
}

/// A workspace edit: an ordered list of per-resource entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorWorkspaceEdit {
    /// The entries, in application order.
    pub edits: Vec<ResourceEdit>,
}

/// The symbol a rename would touch, as reported by prepare-rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameLocation {
    /// The range of the symbol.
    pub range: EditorRange,
    /// Placeholder text for the rename box, when the server supplied one.
    pub text: Option<String>,
}

/// Formatting options the editor passes to a formatting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorFormattingOptions {
    /// Width of a tab stop.
    pub tab_size: u32,
    /// Whether to indent with spaces.
    pub insert_spaces: bool,
}
