//! Document symbol model.

use crate::position::EditorRange;

/// Symbol kinds in the editor's own 0-based ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EditorSymbolKind {
    /// A file.
    File = 0,
    /// A module.
    Module = 1,
    /// A namespace.
    Namespace = 2,
    /// A package.
    Package = 3,
    /// A class.
    Class = 4,
    /// A method.
    Method = 5,
    /// A property.
    Property = 6,
    /// A field.
    Field = 7,
    /// A constructor.
    Constructor = 8,
    /// An enumeration.
    Enum = 9,
    /// An interface.
    Interface = 10,
    /// A function.
    Function = 11,
    /// A variable.
    Variable = 12,
    /// A constant.
    Constant = 13,
    /// A string literal.
    String = 14,
    /// A number literal.
    Number = 15,
    /// A boolean literal.
    Boolean = 16,
    /// An array.
    Array = 17,
    /// An object.
    Object = 18,
    /// A map key.
    Key = 19,
    /// A null literal.
    Null = 20,
    /// An enumeration member.
    EnumMember = 21,
    /// A struct.
    Struct = 22,
    /// An event.
    Event = 23,
    /// An operator.
    Operator = 24,
    /// A type parameter.
    TypeParameter = 25,
}

/// Extra rendering tags on a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolTag {
    /// Render struck through.
    Deprecated,
}

/// One symbol in a document outline, possibly with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDocumentSymbol {
    /// The symbol name.
    pub name: String,
    /// Extra detail, e.g. a signature.
    pub detail: String,
    /// The symbol kind.
    pub kind: EditorSymbolKind,
    /// Rendering tags.
    pub tags: Vec<SymbolTag>,
    /// The full range of the symbol including its body.
    pub range: EditorRange,
    /// The range to select when revealing the symbol, e.g. its name.
    pub selection_range: EditorRange,
    /// Name of the enclosing symbol, for flat outlines.
    pub container_name: Option<String>,
    /// Child symbols.
    pub children: Vec<EditorDocumentSymbol>,
}
