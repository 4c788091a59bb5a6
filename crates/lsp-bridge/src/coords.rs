//! Coordinate conversion between editor and protocol positions.
//!
//! The protocol counts lines and characters from 0; the editor counts both
//! from 1. Columns and characters are UTF-16 code units on both sides, so
//! only the origin shifts. Partial forms carry whichever coordinates are
//! known and leave the rest absent, in both directions.

use lsp_bridge_model::{
    EditorPosition, EditorRange, MaybeRange, PartialPosition, PartialRange,
};
use lsp_types::{Position, Range};

/// A protocol position whose coordinates may be individually absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialProtocolPosition {
    /// 0-based line, if known.
    pub line: Option<u32>,
    /// 0-based UTF-16 character, if known.
    pub character: Option<u32>,
}

/// A protocol range whose endpoints may be individually partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialProtocolRange {
    /// Start endpoint.
    pub start: PartialProtocolPosition,
    /// End endpoint.
    pub end: PartialProtocolPosition,
}

impl From<Range> for PartialProtocolRange {
    fn from(range: Range) -> Self {
        Self {
            start: PartialProtocolPosition {
                line: Some(range.start.line),
                character: Some(range.start.character),
            },
            end: PartialProtocolPosition {
                line: Some(range.end.line),
                character: Some(range.end.character),
            },
        }
    }
}

/// Converts an editor position to a protocol position.
pub fn to_protocol_position(position: EditorPosition) -> Position {
    Position {
        line: position.line.saturating_sub(1),
        character: position.column.saturating_sub(1),
    }
}

/// Converts an editor range to a protocol range.
pub fn to_protocol_range(range: EditorRange) -> Range {
    Range {
        start: to_protocol_position(range.start),
        end: to_protocol_position(range.end),
    }
}

/// Converts a partial editor position, keeping absent coordinates absent.
pub fn to_protocol_position_partial(position: PartialPosition) -> PartialProtocolPosition {
    PartialProtocolPosition {
        line: position.line.map(|l| l.saturating_sub(1)),
        character: position.column.map(|c| c.saturating_sub(1)),
    }
}

/// Converts a partial editor range, keeping absent coordinates absent.
pub fn to_protocol_range_partial(range: PartialRange) -> PartialProtocolRange {
    PartialProtocolRange {
        start: to_protocol_position_partial(range.start),
        end: to_protocol_position_partial(range.end),
    }
}

/// Converts a protocol position to an editor position.
pub fn to_editor_position(position: Position) -> EditorPosition {
    EditorPosition {
        line: position.line + 1,
        column: position.character + 1,
    }
}

/// Converts a protocol range to an editor range.
pub fn to_editor_range(range: Range) -> EditorRange {
    EditorRange {
        start: to_editor_position(range.start),
        end: to_editor_position(range.end),
    }
}

/// Converts an optional protocol range, passing absence through.
pub fn opt_editor_range(range: Option<Range>) -> Option<EditorRange> {
    range.map(to_editor_range)
}

/// Converts a partial protocol position, keeping absent coordinates absent.
pub fn to_editor_position_partial(position: PartialProtocolPosition) -> PartialPosition {
    PartialPosition {
        line: position.line.map(|l| l + 1),
        column: position.character.map(|c| c + 1),
    }
}

/// Converts a possibly-partial protocol range.
///
/// Produces [`MaybeRange::Complete`] exactly when all four coordinates are
/// present, so downstream code can branch on completeness without
/// re-inspecting the coordinates.
pub fn partial_to_editor_range(range: PartialProtocolRange) -> MaybeRange {
    let partial = PartialRange {
        start: to_editor_position_partial(range.start),
        end: to_editor_position_partial(range.end),
    };
    match partial.complete() {
        Some(complete) => MaybeRange::Complete(complete),
        None => MaybeRange::Partial(partial),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_round_trips() {
        let editor = EditorPosition::new(5, 12);
        let protocol = to_protocol_position(editor);
        assert_eq!(protocol, Position { line: 4, character: 11 });
        assert_eq!(to_editor_position(protocol), editor);
    }

    #[test]
    fn first_position_maps_to_origin() {
        assert_eq!(
            to_protocol_position(EditorPosition::new(1, 1)),
            Position { line: 0, character: 0 }
        );
        assert_eq!(
            to_editor_position(Position { line: 0, character: 0 }),
            EditorPosition::new(1, 1)
        );
    }

    #[test]
    fn range_round_trips() {
        let editor = EditorRange::new(1, 1, 3, 7);
        let protocol = to_protocol_range(editor);
        assert_eq!(protocol.start, Position { line: 0, character: 0 });
        assert_eq!(protocol.end, Position { line: 2, character: 6 });
        assert_eq!(to_editor_range(protocol), editor);
    }

    #[test]
    fn partial_position_keeps_absent_coordinates_absent() {
        let partial = PartialPosition { line: Some(4), column: None };
        let protocol = to_protocol_position_partial(partial);
        assert_eq!(protocol, PartialProtocolPosition { line: Some(3), character: None });
        assert_eq!(to_editor_position_partial(protocol), partial);
    }

    #[test]
    fn partial_range_completes_only_when_all_coordinates_present() {
        let full: PartialProtocolRange = Range {
            start: Position { line: 0, character: 2 },
            end: Position { line: 0, character: 5 },
        }
        .into();
        assert_eq!(
            partial_to_editor_range(full),
            MaybeRange::Complete(EditorRange::new(1, 3, 1, 6))
        );

        let partial = PartialProtocolRange {
            start: PartialProtocolPosition { line: Some(0), character: Some(2) },
            end: PartialProtocolPosition { line: Some(0), character: None },
        };
        match partial_to_editor_range(partial) {
            MaybeRange::Partial(p) => {
                assert_eq!(p.start.complete(), Some(EditorPosition::new(1, 3)));
                assert_eq!(p.end.line, Some(1));
                assert_eq!(p.end.column, None);
            }
            other => panic!("expected partial, got {other:?}"),
        }
    }

    #[test]
    fn absence_passes_through() {
        assert_eq!(opt_editor_range(None), None);
    }
}
