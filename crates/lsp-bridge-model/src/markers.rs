//! Editor marker (squiggle) model.

use url::Url;

use crate::position::EditorRange;

/// Severity of a marker, ordered by the editor's marker model.
///
/// The numeric values are the editor's native ones; they are not the
/// protocol's severity numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MarkerSeverity {
    /// An unobtrusive hint.
    Hint = 1,
    /// Informational message.
    Info = 2,
    /// A warning.
    Warning = 4,
    /// An error.
    Error = 8,
}

/// Extra rendering tags attached to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerTag {
    /// Render the marked text faded out.
    Unnecessary,
    /// Render the marked text struck through.
    Deprecated,
}

/// A related location attached to a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInformation {
    /// The resource the related range lives in.
    pub resource: Url,
    /// The related range.
    pub range: EditorRange,
    /// Why the range is related.
    pub message: String,
}

/// A marker as the editor renders it: one squiggle plus hover metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerData {
    /// The marked range.
    pub range: EditorRange,
    /// Severity; drives the squiggle color.
    pub severity: MarkerSeverity,
    /// Diagnostic code, stringified.
    pub code: Option<String>,
    /// Human-readable source, e.g. a linter name.
    pub source: Option<String>,
    /// The message shown on hover.
    pub message: String,
    /// Rendering tags.
    pub tags: Vec<MarkerTag>,
    /// Related locations shown alongside the message.
    pub related_information: Vec<RelatedInformation>,
}
