//! Editor-side positions and ranges.
//!
//! Editor coordinates are 1-based in both line and column, matching the
//! convention of editor widget APIs. Protocol coordinates (0-based) never
//! appear in this crate; the conversion lives in the core crate.

/// A position in a document, 1-based in both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorPosition {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1. Columns count UTF-16 code units.
    pub column: u32,
}

impl EditorPosition {
    /// Creates a position. Both coordinates must already be 1-based.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A range in a document, expressed as two 1-based positions.
///
/// The range is half-open in the usual editor sense: `end` points at the
/// first position *not* included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorRange {
    /// Inclusive start position.
    pub start: EditorPosition,
    /// Exclusive end position.
    pub end: EditorPosition,
}

impl EditorRange {
    /// Creates a range from explicit coordinates.
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start: EditorPosition::new(start_line, start_column),
            end: EditorPosition::new(end_line, end_column),
        }
    }

    /// Creates an empty range collapsed at `position`.
    pub fn collapsed(position: EditorPosition) -> Self {
        Self { start: position, end: position }
    }

    /// True when start and end coincide.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A position whose coordinates may be individually absent.
///
/// Streaming clients produce these while a selection is still being built;
/// whichever coordinate is known is carried, the rest stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialPosition {
    /// Line number (1-based) if known.
    pub line: Option<u32>,
    /// Column number (1-based) if known.
    pub column: Option<u32>,
}

impl PartialPosition {
    /// Returns the complete position if both coordinates are present.
    pub fn complete(&self) -> Option<EditorPosition> {
        match (self.line, self.column) {
            (Some(line), Some(column)) => Some(EditorPosition { line, column }),
            _ => None,
        }
    }
}

impl From<EditorPosition> for PartialPosition {
    fn from(p: EditorPosition) -> Self {
        Self { line: Some(p.line), column: Some(p.column) }
    }
}

/// A range whose endpoints may be individually partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialRange {
    /// Start endpoint, possibly partial.
    pub start: PartialPosition,
    /// End endpoint, possibly partial.
    pub end: PartialPosition,
}

impl PartialRange {
    /// Returns the complete range if all four coordinates are present.
    pub fn complete(&self) -> Option<EditorRange> {
        match (self.start.complete(), self.end.complete()) {
            (Some(start), Some(end)) => Some(EditorRange { start, end }),
            _ => None,
        }
    }
}

impl From<EditorRange> for PartialRange {
    fn from(r: EditorRange) -> Self {
        Self { start: r.start.into(), end: r.end.into() }
    }
}

/// Result of converting a protocol range that may have partial endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaybeRange {
    /// All four coordinates were present.
    Complete(EditorRange),
    /// At least one coordinate was absent.
    Partial(PartialRange),
}

impl MaybeRange {
    /// Returns the range if it is complete.
    pub fn complete(&self) -> Option<EditorRange> {
        match self {
            MaybeRange::Complete(range) => Some(*range),
            MaybeRange::Partial(partial) => partial.complete(),
        }
    }
}

/// The replacement range of a completion item.
///
/// A server may supply a single range, or a pair of ranges distinguishing
/// the "insert" behavior (replace up to the cursor) from the "replace"
/// behavior (replace the whole word).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEditRange {
    /// One range for both insert and replace.
    Single(EditorRange),
    /// Distinct insert and replace ranges.
    InsertReplace {
        /// Range applied when the item is inserted.
        insert: EditorRange,
        /// Range applied when the item replaces the current word.
        replace: EditorRange,
    },
}

impl EditorEditRange {
    /// The range applied on plain insertion.
    pub fn insert(&self) -> EditorRange {
        match self {
            EditorEditRange::Single(range) => *range,
            EditorEditRange::InsertReplace { insert, .. } => *insert,
        }
    }
}
