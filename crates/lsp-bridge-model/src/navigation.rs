//! Locations, location links, and document highlights.

use url::Url;

use crate::position::EditorRange;

/// A location in some resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLocation {
    /// The resource.
    pub uri: Url,
    /// The range inside the resource.
    pub range: EditorRange,
}

/// A location link: a target plus optional origin and selection ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLocationLink {
    /// The target resource.
    pub uri: Url,
    /// The full target range, e.g. an entire definition body.
    pub range: EditorRange,
    /// The span in the origin document that triggered the link.
    pub origin_selection_range: Option<EditorRange>,
    /// The precise span to select inside `range`.
    pub target_selection_range: EditorRange,
}

/// Result of a goto-style request.
///
/// `None` at the call site means the server returned nothing; an empty
/// protocol array is treated the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoResult {
    /// Plain locations.
    Locations(Vec<EditorLocation>),
    /// Location links with selection detail.
    Links(Vec<EditorLocationLink>),
}

/// Kind of a document highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightKind {
    /// A textual occurrence.
    #[default]
    Text,
    /// A read access.
    Read,
    /// A write access.
    Write,
}

/// One highlighted occurrence in the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorDocumentHighlight {
    /// The highlighted range.
    pub range: EditorRange,
    /// The highlight kind.
    pub kind: HighlightKind,
}
