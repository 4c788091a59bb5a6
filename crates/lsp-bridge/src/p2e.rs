//! Protocol-to-editor conversion.
//!
//! Turns protocol responses into the editor-side model: 0-based coordinates
//! become 1-based, protocol enums are remapped onto the editor's orderings
//! with documented fallbacks, and shape unions are flattened into the forms
//! the editor consumes.

use std::collections::HashMap;

use lsp_bridge_model::{
    CompletionItemLabel, EditMetadata, EditorCodeAction, EditorCodeLens, EditorColor,
    EditorColorInformation, EditorColorPresentation, EditorCommand, EditorCompletionItem,
    EditorCompletionKind, EditorCompletionList, EditorDocumentHighlight, EditorDocumentLink,
    EditorDocumentSymbol, EditorDocumentation, EditorEditRange, EditorFoldingRange, EditorHover,
    EditorInlayHint, EditorInlayHintLabelPart, EditorLocation, EditorLocationLink,
    EditorParameterInformation, EditorRange, EditorSemanticTokens, EditorSignatureHelp,
    EditorSignatureInformation, EditorSymbolKind, EditorTextEdit, EditorWorkspaceEdit,
    FileOperationOptions, FoldingKind, GotoResult, HighlightKind, InlayHintLabel, InlayKind,
    InsertTextMode, MarkdownString, MarkerData, MarkerSeverity, MarkerTag, ParameterLabel,
    RelatedInformation, ResourceEdit, SemanticTokensLegend, SymbolTag, TextResourceEdit,
    WorkspaceTextEdit,
};
use lsp_types::{
    AnnotatedTextEdit, ChangeAnnotation, CodeAction, CodeActionOrCommand, CodeLens, ColorInformation,
    ColorPresentation, Command, CompletionItem, CompletionItemKind, CompletionList,
    CompletionListItemDefaults, CompletionResponse, CompletionTextEdit, Diagnostic,
    DiagnosticSeverity, DiagnosticTag, DocumentChangeOperation, DocumentChanges,
    DocumentHighlight, DocumentHighlightKind, DocumentLink, DocumentSymbol,
    DocumentSymbolResponse, Documentation, FoldingRange, FoldingRangeKind,
    GotoDefinitionResponse, Hover, HoverContents, InlayHint, InlayHintKind,
    InlayHintLabelPartTooltip, InlayHintTooltip, Location, LocationLink, MarkedString,
    MarkupContent, MarkupKind, NumberOrString, OneOf, PrepareRenameResponse, ResourceOp,
    SemanticTokens, SemanticTokensResult, SignatureHelp, SymbolInformation, SymbolKind,
    TextDocumentEdit, TextEdit, Uri, WorkspaceEdit,
};
use url::Url;

use crate::coords::{opt_editor_range, to_editor_position, to_editor_range};
use crate::error::ConvertError;

/// Converts protocol responses into editor-side values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocolToEditor;

impl ProtocolToEditor {
    /// Converts a protocol uri to an editor uri.
    pub fn as_url(&self, uri: &Uri) -> Result<Url, ConvertError> {
        Url::parse(uri.as_str()).map_err(|err| ConvertError::InvalidUri {
            uri: uri.as_str().to_string(),
            message: err.to_string(),
        })
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Converts protocol diagnostics into editor markers.
    pub fn as_markers(&self, diagnostics: &[Diagnostic]) -> Result<Vec<MarkerData>, ConvertError> {
        diagnostics.iter().map(|diagnostic| self.as_marker(diagnostic)).collect()
    }

    /// Converts one diagnostic into a marker.
    ///
    /// Absent severity degrades to [`MarkerSeverity::Hint`]; numeric codes
    /// are stringified.
    pub fn as_marker(&self, diagnostic: &Diagnostic) -> Result<MarkerData, ConvertError> {
        Ok(MarkerData {
            range: to_editor_range(diagnostic.range),
            severity: self.as_marker_severity(diagnostic.severity),
            code: diagnostic.code.as_ref().map(|code| match code {
                NumberOrString::Number(value) => value.to_string(),
                NumberOrString::String(value) => value.clone(),
            }),
            source: diagnostic.source.clone(),
            message: diagnostic.message.clone(),
            tags: diagnostic
                .tags
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter_map(|tag| match *tag {
                    DiagnosticTag::UNNECESSARY => Some(MarkerTag::Unnecessary),
                    DiagnosticTag::DEPRECATED => Some(MarkerTag::Deprecated),
                    _ => None,
                })
                .collect(),
            related_information: diagnostic
                .related_information
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|related| {
                    Ok(RelatedInformation {
                        resource: self.as_url(&related.location.uri)?,
                        range: to_editor_range(related.location.range),
                        message: related.message.clone(),
                    })
                })
                .collect::<Result<Vec<_>, ConvertError>>()?,
        })
    }

    fn as_marker_severity(&self, severity: Option<DiagnosticSeverity>) -> MarkerSeverity {
        match severity {
            Some(DiagnosticSeverity::ERROR) => MarkerSeverity::Error,
            Some(DiagnosticSeverity::WARNING) => MarkerSeverity::Warning,
            Some(DiagnosticSeverity::INFORMATION) => MarkerSeverity::Info,
            _ => MarkerSeverity::Hint,
        }
    }

    // ------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------

    /// Converts a completion response into an editor list.
    ///
    /// `default_range` is the range used when an item carries no text edit,
    /// typically the word at the request position.
    pub fn as_completion_list(
        &self,
        response: &CompletionResponse,
        default_range: EditorRange,
    ) -> Result<EditorCompletionList, ConvertError> {
        match response {
            CompletionResponse::Array(items) => Ok(EditorCompletionList {
                incomplete: false,
                items: items
                    .iter()
                    .map(|item| self.as_completion_item(item, None, default_range))
                    .collect::<Result<Vec<_>, _>>()?,
            }),
            CompletionResponse::List(CompletionList { is_incomplete, item_defaults, items }) => {
                Ok(EditorCompletionList {
                    incomplete: *is_incomplete,
                    items: items
                        .iter()
                        .map(|item| {
                            self.as_completion_item(item, item_defaults.as_ref(), default_range)
                        })
                        .collect::<Result<Vec<_>, _>>()?,
                })
            }
        }
    }

    /// Converts one completion item.
    ///
    /// Insert text and range resolve in order: the item's own text edit, the
    /// list's default edit range, the item's insert text over the default
    /// range, and finally the label over the default range. Only the first
    /// two count as server-provided edits.
    pub fn as_completion_item(
        &self,
        item: &CompletionItem,
        defaults: Option<&CompletionListItemDefaults>,
        default_range: EditorRange,
    ) -> Result<EditorCompletionItem, ConvertError> {
        let (insert_text, range, from_edit) = self.resolve_insert_text(item, defaults, default_range);

        let (documentation, documentation_format) = match &item.documentation {
            None => (None, None),
            Some(Documentation::String(value)) => (Some(value.clone()), None),
            Some(Documentation::MarkupContent(MarkupContent { kind, value })) => (
                Some(value.clone()),
                Some(
                    match kind {
                        MarkupKind::PlainText => "plaintext",
                        MarkupKind::Markdown => "markdown",
                    }
                    .to_string(),
                ),
            ),
        };

        let (kind, original_kind) = match item.kind {
            Some(kind) => self.as_completion_item_kind(kind),
            None => (EditorCompletionKind::Property, None),
        };

        let insert_text_format = item
            .insert_text_format
            .or_else(|| defaults.and_then(|defaults| defaults.insert_text_format));
        let insert_text_mode = item
            .insert_text_mode
            .or_else(|| defaults.and_then(|defaults| defaults.insert_text_mode));

        let deprecated = item.deprecated.unwrap_or(false)
            || item
                .tags
                .as_deref()
                .unwrap_or_default()
                .contains(&lsp_types::CompletionItemTag::DEPRECATED);

        Ok(EditorCompletionItem {
            label: CompletionItemLabel {
                label: item.label.clone(),
                detail: item.label_details.as_ref().and_then(|details| details.detail.clone()),
                description: item
                    .label_details
                    .as_ref()
                    .and_then(|details| details.description.clone()),
            },
            kind,
            original_kind,
            detail: item.detail.clone(),
            documentation,
            documentation_format,
            deprecated,
            preselect: item.preselect.unwrap_or(false),
            sort_text: item.sort_text.clone(),
            filter_text: item.filter_text.clone(),
            insert_text,
            is_snippet: insert_text_format == Some(lsp_types::InsertTextFormat::SNIPPET),
            insert_text_mode: insert_text_mode.and_then(|mode| match mode {
                lsp_types::InsertTextMode::AS_IS => Some(InsertTextMode::AsIs),
                lsp_types::InsertTextMode::ADJUST_INDENTATION => {
                    Some(InsertTextMode::AdjustIndentation)
                }
                _ => None,
            }),
            range,
            from_edit,
            commit_characters: item
                .commit_characters
                .clone()
                .or_else(|| defaults.and_then(|defaults| defaults.commit_characters.clone()))
                .unwrap_or_default(),
            additional_text_edits: item
                .additional_text_edits
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|edit| self.as_text_edit(edit))
                .collect(),
            command: item.command.as_ref().map(|command| self.as_command(command)),
            data: item
                .data
                .clone()
                .or_else(|| defaults.and_then(|defaults| defaults.data.clone())),
        })
    }

    fn resolve_insert_text(
        &self,
        item: &CompletionItem,
        defaults: Option<&CompletionListItemDefaults>,
        default_range: EditorRange,
    ) -> (String, EditorEditRange, bool) {
        if let Some(edit) = &item.text_edit {
            return match edit {
                CompletionTextEdit::Edit(edit) => (
                    edit.new_text.clone(),
                    EditorEditRange::Single(to_editor_range(edit.range)),
                    true,
                ),
                CompletionTextEdit::InsertAndReplace(edit) => (
                    edit.new_text.clone(),
                    EditorEditRange::InsertReplace {
                        insert: to_editor_range(edit.insert),
                        replace: to_editor_range(edit.replace),
                    },
                    true,
                ),
            };
        }
        if let Some(edit_range) = defaults.and_then(|defaults| defaults.edit_range.as_ref()) {
            let text = item.insert_text.clone().unwrap_or_else(|| item.label.clone());
            let range = match edit_range {
                lsp_types::CompletionListItemDefaultsEditRange::Range(range) => {
                    EditorEditRange::Single(to_editor_range(*range))
                }
                lsp_types::CompletionListItemDefaultsEditRange::InsertAndReplace {
                    insert,
                    replace,
                } => EditorEditRange::InsertReplace {
                    insert: to_editor_range(*insert),
                    replace: to_editor_range(*replace),
                },
            };
            return (text, range, true);
        }
        if let Some(text) = &item.insert_text {
            return (text.clone(), EditorEditRange::Single(default_range), false);
        }
        (item.label.clone(), EditorEditRange::Single(default_range), false)
    }

    /// Maps a protocol completion kind onto the editor's ordering.
    ///
    /// Out-of-table values degrade to [`EditorCompletionKind::Text`] with the
    /// raw value preserved for the resolve round trip.
    pub fn as_completion_item_kind(
        &self,
        kind: CompletionItemKind,
    ) -> (EditorCompletionKind, Option<u32>) {
        let mapped = match kind {
            CompletionItemKind::TEXT => Some(EditorCompletionKind::Text),
            CompletionItemKind::METHOD => Some(EditorCompletionKind::Method),
            CompletionItemKind::FUNCTION => Some(EditorCompletionKind::Function),
            CompletionItemKind::CONSTRUCTOR => Some(EditorCompletionKind::Constructor),
            CompletionItemKind::FIELD => Some(EditorCompletionKind::Field),
            CompletionItemKind::VARIABLE => Some(EditorCompletionKind::Variable),
            CompletionItemKind::CLASS => Some(EditorCompletionKind::Class),
            CompletionItemKind::INTERFACE => Some(EditorCompletionKind::Interface),
            CompletionItemKind::MODULE => Some(EditorCompletionKind::Module),
            CompletionItemKind::PROPERTY => Some(EditorCompletionKind::Property),
            CompletionItemKind::UNIT => Some(EditorCompletionKind::Unit),
            CompletionItemKind::VALUE => Some(EditorCompletionKind::Value),
            CompletionItemKind::ENUM => Some(EditorCompletionKind::Enum),
            CompletionItemKind::KEYWORD => Some(EditorCompletionKind::Keyword),
            CompletionItemKind::SNIPPET => Some(EditorCompletionKind::Snippet),
            CompletionItemKind::COLOR => Some(EditorCompletionKind::Color),
            CompletionItemKind::FILE => Some(EditorCompletionKind::File),
            CompletionItemKind::REFERENCE => Some(EditorCompletionKind::Reference),
            CompletionItemKind::FOLDER => Some(EditorCompletionKind::Folder),
            CompletionItemKind::ENUM_MEMBER => Some(EditorCompletionKind::EnumMember),
            CompletionItemKind::CONSTANT => Some(EditorCompletionKind::Constant),
            CompletionItemKind::STRUCT => Some(EditorCompletionKind::Struct),
            CompletionItemKind::EVENT => Some(EditorCompletionKind::Event),
            CompletionItemKind::OPERATOR => Some(EditorCompletionKind::Operator),
            CompletionItemKind::TYPE_PARAMETER => Some(EditorCompletionKind::TypeParameter),
            _ => None,
        };
        match mapped {
            Some(kind) => (kind, None),
            None => (EditorCompletionKind::Text, raw_enum_value(&kind)),
        }
    }

    // ------------------------------------------------------------------
    // Hover and signature help
    // ------------------------------------------------------------------

    /// Converts a hover result. Language strings render as fenced code
    /// blocks.
    pub fn as_hover(&self, hover: &Hover) -> EditorHover {
        let contents = match &hover.contents {
            HoverContents::Scalar(marked) => vec![self.as_markdown_string(marked)],
            HoverContents::Array(markeds) => {
                markeds.iter().map(|marked| self.as_markdown_string(marked)).collect()
            }
            HoverContents::Markup(markup) => vec![MarkdownString::new(markup.value.clone())],
        };
        EditorHover { contents, range: opt_editor_range(hover.range) }
    }

    fn as_markdown_string(&self, marked: &MarkedString) -> MarkdownString {
        match marked {
            MarkedString::String(value) => MarkdownString::new(value.clone()),
            MarkedString::LanguageString(ls) => MarkdownString::code_block(&ls.language, &ls.value),
        }
    }

    /// Converts a signature-help result. Absent active indices default to 0.
    pub fn as_signature_help(&self, help: &SignatureHelp) -> EditorSignatureHelp {
        EditorSignatureHelp {
            signatures: help
                .signatures
                .iter()
                .map(|signature| EditorSignatureInformation {
                    label: signature.label.clone(),
                    documentation: signature
                        .documentation
                        .as_ref()
                        .map(|doc| self.as_editor_documentation(doc)),
                    parameters: signature
                        .parameters
                        .as_deref()
                        .unwrap_or_default()
                        .iter()
                        .map(|parameter| EditorParameterInformation {
                            label: match &parameter.label {
                                lsp_types::ParameterLabel::Simple(text) => {
                                    ParameterLabel::Simple(text.clone())
                                }
                                lsp_types::ParameterLabel::LabelOffsets([start, end]) => {
                                    ParameterLabel::Offsets(*start, *end)
                                }
                            },
                            documentation: parameter
                                .documentation
                                .as_ref()
                                .map(|doc| self.as_editor_documentation(doc)),
                        })
                        .collect(),
                    active_parameter: signature.active_parameter,
                })
                .collect(),
            active_signature: help.active_signature.unwrap_or(0),
            active_parameter: help.active_parameter.unwrap_or(0),
        }
    }

    fn as_editor_documentation(&self, doc: &Documentation) -> EditorDocumentation {
        match doc {
            Documentation::String(value) => EditorDocumentation::Plain(value.clone()),
            Documentation::MarkupContent(MarkupContent { kind: MarkupKind::PlainText, value }) => {
                EditorDocumentation::Plain(value.clone())
            }
            Documentation::MarkupContent(MarkupContent { kind: MarkupKind::Markdown, value }) => {
                EditorDocumentation::Markdown(MarkdownString::new(value.clone()))
            }
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Converts a goto-style response.
    ///
    /// A scalar location always yields a result; an empty array (of either
    /// shape) yields `None`, matching servers that signal "nothing found"
    /// with an empty list.
    pub fn as_goto_result(
        &self,
        response: &GotoDefinitionResponse,
    ) -> Result<Option<GotoResult>, ConvertError> {
        match response {
            GotoDefinitionResponse::Scalar(location) => Ok(Some(GotoResult::Locations(vec![
                self.as_location(location)?,
            ]))),
            GotoDefinitionResponse::Array(locations) => {
                if locations.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(GotoResult::Locations(self.as_locations(locations)?)))
                }
            }
            GotoDefinitionResponse::Link(links) => {
                if links.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(GotoResult::Links(
                        links
                            .iter()
                            .map(|link| self.as_location_link(link))
                            .collect::<Result<Vec<_>, _>>()?,
                    )))
                }
            }
        }
    }

    /// Converts a list of locations.
    pub fn as_locations(&self, locations: &[Location]) -> Result<Vec<EditorLocation>, ConvertError> {
        locations.iter().map(|location| self.as_location(location)).collect()
    }

    /// Converts one location.
    pub fn as_location(&self, location: &Location) -> Result<EditorLocation, ConvertError> {
        Ok(EditorLocation {
            uri: self.as_url(&location.uri)?,
            range: to_editor_range(location.range),
        })
    }

    fn as_location_link(&self, link: &LocationLink) -> Result<EditorLocationLink, ConvertError> {
        Ok(EditorLocationLink {
            uri: self.as_url(&link.target_uri)?,
            range: to_editor_range(link.target_range),
            origin_selection_range: opt_editor_range(link.origin_selection_range),
            target_selection_range: to_editor_range(link.target_selection_range),
        })
    }

    /// Converts document highlights. Absent kinds default to
    /// [`HighlightKind::Text`].
    pub fn as_document_highlights(
        &self,
        highlights: &[DocumentHighlight],
    ) -> Vec<EditorDocumentHighlight> {
        highlights
            .iter()
            .map(|highlight| EditorDocumentHighlight {
                range: to_editor_range(highlight.range),
                kind: match highlight.kind {
                    Some(DocumentHighlightKind::READ) => HighlightKind::Read,
                    Some(DocumentHighlightKind::WRITE) => HighlightKind::Write,
                    _ => HighlightKind::Text,
                },
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Symbols
    // ------------------------------------------------------------------

    /// Converts a document-symbol response, flat or nested.
    pub fn as_document_symbols(
        &self,
        response: &DocumentSymbolResponse,
    ) -> Vec<EditorDocumentSymbol> {
        match response {
            DocumentSymbolResponse::Flat(symbols) => {
                symbols.iter().map(|symbol| self.as_flat_symbol(symbol)).collect()
            }
            DocumentSymbolResponse::Nested(symbols) => {
                symbols.iter().map(|symbol| self.as_nested_symbol(symbol)).collect()
            }
        }
    }

    fn as_flat_symbol(&self, symbol: &SymbolInformation) -> EditorDocumentSymbol {
        let range = to_editor_range(symbol.location.range);
        EditorDocumentSymbol {
            name: symbol.name.clone(),
            detail: String::new(),
            kind: self.as_symbol_kind(symbol.kind),
            tags: self.as_symbol_tags(symbol.tags.as_deref()),
            range,
            selection_range: range,
            container_name: symbol.container_name.clone(),
            children: Vec::new(),
        }
    }

    fn as_nested_symbol(&self, symbol: &DocumentSymbol) -> EditorDocumentSymbol {
        EditorDocumentSymbol {
            name: symbol.name.clone(),
            detail: symbol.detail.clone().unwrap_or_default(),
            kind: self.as_symbol_kind(symbol.kind),
            tags: self.as_symbol_tags(symbol.tags.as_deref()),
            range: to_editor_range(symbol.range),
            selection_range: to_editor_range(symbol.selection_range),
            container_name: None,
            children: symbol
                .children
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|child| self.as_nested_symbol(child))
                .collect(),
        }
    }

    /// Maps a protocol symbol kind onto the editor's 0-based ordering.
    /// Unknown values degrade to [`EditorSymbolKind::Property`].
    pub fn as_symbol_kind(&self, kind: SymbolKind) -> EditorSymbolKind {
        match kind {
            SymbolKind::FILE => EditorSymbolKind::File,
            SymbolKind::MODULE => EditorSymbolKind::Module,
            SymbolKind::NAMESPACE => EditorSymbolKind::Namespace,
            SymbolKind::PACKAGE => EditorSymbolKind::Package,
            SymbolKind::CLASS => EditorSymbolKind::Class,
            SymbolKind::METHOD => EditorSymbolKind::Method,
            SymbolKind::PROPERTY => EditorSymbolKind::Property,
            SymbolKind::FIELD => EditorSymbolKind::Field,
            SymbolKind::CONSTRUCTOR => EditorSymbolKind::Constructor,
            SymbolKind::ENUM => EditorSymbolKind::Enum,
            SymbolKind::INTERFACE => EditorSymbolKind::Interface,
            SymbolKind::FUNCTION => EditorSymbolKind::Function,
            SymbolKind::VARIABLE => EditorSymbolKind::Variable,
            SymbolKind::CONSTANT => EditorSymbolKind::Constant,
            SymbolKind::STRING => EditorSymbolKind::String,
            SymbolKind::NUMBER => EditorSymbolKind::Number,
            SymbolKind::BOOLEAN => EditorSymbolKind::Boolean,
            SymbolKind::ARRAY => EditorSymbolKind::Array,
            SymbolKind::OBJECT => EditorSymbolKind::Object,
            SymbolKind::KEY => EditorSymbolKind::Key,
            SymbolKind::NULL => EditorSymbolKind::Null,
            SymbolKind::ENUM_MEMBER => EditorSymbolKind::EnumMember,
            SymbolKind::STRUCT => EditorSymbolKind::Struct,
            SymbolKind::EVENT => EditorSymbolKind::Event,
            SymbolKind::OPERATOR => EditorSymbolKind::Operator,
            SymbolKind::TYPE_PARAMETER => EditorSymbolKind::TypeParameter,
            _ => EditorSymbolKind::Property,
        }
    }

    fn as_symbol_tags(&self, tags: Option<&[lsp_types::SymbolTag]>) -> Vec<SymbolTag> {
        tags.unwrap_or_default()
            .iter()
            .filter_map(|tag| match *tag {
                lsp_types::SymbolTag::DEPRECATED => Some(SymbolTag::Deprecated),
                _ => None,
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    /// Converts a text edit.
    pub fn as_text_edit(&self, edit: &TextEdit) -> EditorTextEdit {
        EditorTextEdit { range: to_editor_range(edit.range), text: edit.new_text.clone() }
    }

    /// Converts a list of text edits.
    pub fn as_text_edits(&self, edits: &[TextEdit]) -> Vec<EditorTextEdit> {
        edits.iter().map(|edit| self.as_text_edit(edit)).collect()
    }

    /// Converts a workspace edit.
    ///
    /// Edits for one resource stay together so the editor can apply them as
    /// a single undo step. Change annotations are attached to the edits
    /// that reference them.
    pub fn as_workspace_edit(
        &self,
        edit: &WorkspaceEdit,
    ) -> Result<EditorWorkspaceEdit, ConvertError> {
        let annotations = edit.change_annotations.as_ref();
        let mut edits = Vec::new();

        if let Some(document_changes) = &edit.document_changes {
            match document_changes {
                DocumentChanges::Edits(document_edits) => {
                    for document_edit in document_edits {
                        edits.push(self.as_text_resource_edit(document_edit, annotations)?);
                    }
                }
                DocumentChanges::Operations(operations) => {
                    for operation in operations {
                        match operation {
                            DocumentChangeOperation::Edit(document_edit) => {
                                edits.push(
                                    self.as_text_resource_edit(document_edit, annotations)?,
                                );
                            }
                            DocumentChangeOperation::Op(op) => {
                                edits.push(self.as_resource_op(op, annotations)?);
                            }
                        }
                    }
                }
            }
        } else if let Some(changes) = &edit.changes {
            for (uri, text_edits) in changes {
                edits.push(ResourceEdit::Text(TextResourceEdit {
                    resource: self.as_url(uri)?,
                    version: None,
                    edits: text_edits
                        .iter()
                        .map(|text_edit| WorkspaceTextEdit {
                            edit: self.as_text_edit(text_edit),
                            metadata: None,
                        })
                        .collect(),
                }));
            }
        }

        Ok(EditorWorkspaceEdit { edits })
    }

    fn as_text_resource_edit(
        &self,
        document_edit: &TextDocumentEdit,
        annotations: Option<&HashMap<String, ChangeAnnotation>>,
    ) -> Result<ResourceEdit, ConvertError> {
        Ok(ResourceEdit::Text(TextResourceEdit {
            resource: self.as_url(&document_edit.text_document.uri)?,
            version: document_edit.text_document.version,
            edits: document_edit
                .edits
                .iter()
                .map(|edit| match edit {
                    OneOf::Left(text_edit) => WorkspaceTextEdit {
                        edit: self.as_text_edit(text_edit),
                        metadata: None,
                    },
                    OneOf::Right(AnnotatedTextEdit { text_edit, annotation_id }) => {
                        WorkspaceTextEdit {
                            edit: self.as_text_edit(text_edit),
                            metadata: self.as_edit_metadata(annotations, annotation_id),
                        }
                    }
                })
                .collect(),
        }))
    }

    fn as_resource_op(
        &self,
        op: &ResourceOp,
        annotations: Option<&HashMap<String, ChangeAnnotation>>,
    ) -> Result<ResourceEdit, ConvertError> {
        match op {
            ResourceOp::Create(create) => Ok(ResourceEdit::CreateFile {
                uri: self.as_url(&create.uri)?,
                options: FileOperationOptions {
                    overwrite: create
                        .options
                        .as_ref()
                        .and_then(|options| options.overwrite)
                        .unwrap_or(false),
                    ignore_if_exists: create
                        .options
                        .as_ref()
                        .and_then(|options| options.ignore_if_exists)
                        .unwrap_or(false),
                    ..Default::default()
                },
                metadata: create
                    .annotation_id
                    .as_ref()
                    .and_then(|id| self.as_edit_metadata(annotations, id)),
            }),
            ResourceOp::Rename(rename) => Ok(ResourceEdit::RenameFile {
                old_uri: self.as_url(&rename.old_uri)?,
                new_uri: self.as_url(&rename.new_uri)?,
                options: FileOperationOptions {
                    overwrite: rename
                        .options
                        .as_ref()
                        .and_then(|options| options.overwrite)
                        .unwrap_or(false),
                    ignore_if_exists: rename
                        .options
                        .as_ref()
                        .and_then(|options| options.ignore_if_exists)
                        .unwrap_or(false),
                    ..Default::default()
                },
                metadata: rename
                    .annotation_id
                    .as_ref()
                    .and_then(|id| self.as_edit_metadata(annotations, id)),
            }),
            ResourceOp::Delete(delete) => Ok(ResourceEdit::DeleteFile {
                uri: self.as_url(&delete.uri)?,
                options: FileOperationOptions {
                    recursive: delete
                        .options
                        .as_ref()
                        .and_then(|options| options.recursive)
                        .unwrap_or(false),
                    ignore_if_not_exists: delete
                        .options
                        .as_ref()
                        .and_then(|options| options.ignore_if_not_exists)
                        .unwrap_or(false),
                    ..Default::default()
                },
                metadata: delete
                    .annotation_id
                    .as_ref()
                    .and_then(|id| self.as_edit_metadata(annotations, id)),
            }),
        }
    }

    fn as_edit_metadata(
        &self,
        annotations: Option<&HashMap<String, ChangeAnnotation>>,
        id: &str,
    ) -> Option<EditMetadata> {
        annotations?.get(id).map(|annotation| EditMetadata {
            needs_confirmation: annotation.needs_confirmation.unwrap_or(false),
            label: annotation.label.clone(),
            description: annotation.description.clone(),
        })
    }

    /// Converts a prepare-rename response.
    ///
    /// The default-behavior form yields `None`; the caller falls back to
    /// the editor's own word range.
    pub fn as_rename_location(
        &self,
        response: &PrepareRenameResponse,
    ) -> Option<lsp_bridge_model::RenameLocation> {
        match response {
            PrepareRenameResponse::Range(range) => Some(lsp_bridge_model::RenameLocation {
                range: to_editor_range(*range),
                text: None,
            }),
            PrepareRenameResponse::RangeWithPlaceholder { range, placeholder } => {
                Some(lsp_bridge_model::RenameLocation {
                    range: to_editor_range(*range),
                    text: Some(placeholder.clone()),
                })
            }
            PrepareRenameResponse::DefaultBehavior { .. } => None,
        }
    }

    // ------------------------------------------------------------------
    // Actions, lenses, commands
    // ------------------------------------------------------------------

    /// Converts a command reference.
    pub fn as_command(&self, command: &Command) -> EditorCommand {
        EditorCommand {
            id: command.command.clone(),
            title: command.title.clone(),
            arguments: command.arguments.clone().unwrap_or_default(),
        }
    }

    /// Converts a code-action response. Bare commands become actions whose
    /// only payload is the command.
    pub fn as_code_actions(
        &self,
        response: &[CodeActionOrCommand],
    ) -> Result<Vec<EditorCodeAction>, ConvertError> {
        response
            .iter()
            .map(|entry| match entry {
                CodeActionOrCommand::Command(command) => Ok(EditorCodeAction {
                    title: command.title.clone(),
                    kind: None,
                    diagnostics: Vec::new(),
                    is_preferred: false,
                    disabled: None,
                    edit: None,
                    command: Some(self.as_command(command)),
                    data: None,
                }),
                CodeActionOrCommand::CodeAction(action) => self.as_code_action(action),
            })
            .collect()
    }

    /// Converts one code action.
    pub fn as_code_action(&self, action: &CodeAction) -> Result<EditorCodeAction, ConvertError> {
        Ok(EditorCodeAction {
            title: action.title.clone(),
            kind: action.kind.as_ref().map(|kind| kind.as_str().to_string()),
            diagnostics: self.as_markers(action.diagnostics.as_deref().unwrap_or_default())?,
            is_preferred: action.is_preferred.unwrap_or(false),
            disabled: action.disabled.as_ref().map(|disabled| disabled.reason.clone()),
            edit: action
                .edit
                .as_ref()
                .map(|edit| self.as_workspace_edit(edit))
                .transpose()?,
            command: action.command.as_ref().map(|command| self.as_command(command)),
            data: action.data.clone(),
        })
    }

    /// Converts code lenses.
    pub fn as_code_lenses(&self, lenses: &[CodeLens]) -> Vec<EditorCodeLens> {
        lenses.iter().map(|lens| self.as_code_lens(lens)).collect()
    }

    /// Converts one code lens.
    pub fn as_code_lens(&self, lens: &CodeLens) -> EditorCodeLens {
        EditorCodeLens {
            range: to_editor_range(lens.range),
            command: lens.command.as_ref().map(|command| self.as_command(command)),
            data: lens.data.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Decorations
    // ------------------------------------------------------------------

    /// Converts document links.
    pub fn as_document_links(
        &self,
        links: &[DocumentLink],
    ) -> Result<Vec<EditorDocumentLink>, ConvertError> {
        links.iter().map(|link| self.as_document_link(link)).collect()
    }

    /// Converts one document link.
    pub fn as_document_link(&self, link: &DocumentLink) -> Result<EditorDocumentLink, ConvertError> {
        Ok(EditorDocumentLink {
            range: to_editor_range(link.range),
            url: link.target.as_ref().map(|target| self.as_url(target)).transpose()?,
            tooltip: link.tooltip.clone(),
            data: link.data.clone(),
        })
    }

    /// Converts color occurrences.
    pub fn as_color_informations(&self, colors: &[ColorInformation]) -> Vec<EditorColorInformation> {
        colors
            .iter()
            .map(|info| EditorColorInformation {
                range: to_editor_range(info.range),
                color: EditorColor {
                    red: info.color.red,
                    green: info.color.green,
                    blue: info.color.blue,
                    alpha: info.color.alpha,
                },
            })
            .collect()
    }

    /// Converts color presentations.
    pub fn as_color_presentations(
        &self,
        presentations: &[ColorPresentation],
    ) -> Vec<EditorColorPresentation> {
        presentations
            .iter()
            .map(|presentation| EditorColorPresentation {
                label: presentation.label.clone(),
                text_edit: presentation.text_edit.as_ref().map(|edit| self.as_text_edit(edit)),
                additional_text_edits: self.as_text_edits(
                    presentation.additional_text_edits.as_deref().unwrap_or_default(),
                ),
            })
            .collect()
    }

    /// Converts folding ranges into 1-based line spans. Unknown kinds map
    /// to no kind.
    pub fn as_folding_ranges(&self, ranges: &[FoldingRange]) -> Vec<EditorFoldingRange> {
        ranges
            .iter()
            .map(|range| EditorFoldingRange {
                start: range.start_line + 1,
                end: range.end_line + 1,
                kind: range.kind.as_ref().and_then(|kind| match kind {
                    FoldingRangeKind::Comment => Some(FoldingKind::Comment),
                    FoldingRangeKind::Imports => Some(FoldingKind::Imports),
                    FoldingRangeKind::Region => Some(FoldingKind::Region),
                }),
            })
            .collect()
    }

    /// Converts a semantic-tokens result to the flattened wire layout.
    pub fn as_semantic_tokens(&self, result: &SemanticTokensResult) -> EditorSemanticTokens {
        match result {
            SemanticTokensResult::Tokens(tokens) => self.flatten_semantic_tokens(tokens),
            SemanticTokensResult::Partial(partial) => EditorSemanticTokens {
                result_id: None,
                data: Self::flatten_token_data(&partial.data),
            },
        }
    }

    fn flatten_semantic_tokens(&self, tokens: &SemanticTokens) -> EditorSemanticTokens {
        EditorSemanticTokens {
            result_id: tokens.result_id.clone(),
            data: Self::flatten_token_data(&tokens.data),
        }
    }

    fn flatten_token_data(data: &[lsp_types::SemanticToken]) -> Vec<u32> {
        let mut flat = Vec::with_capacity(data.len() * 5);
        for token in data {
            flat.push(token.delta_line);
            flat.push(token.delta_start);
            flat.push(token.length);
            flat.push(token.token_type);
            flat.push(token.token_modifiers_bitset);
        }
        flat
    }

    /// Converts a semantic-tokens legend.
    pub fn as_semantic_tokens_legend(
        &self,
        legend: &lsp_types::SemanticTokensLegend,
    ) -> SemanticTokensLegend {
        SemanticTokensLegend {
            token_types: legend
                .token_types
                .iter()
                .map(|token_type| token_type.as_str().to_string())
                .collect(),
            token_modifiers: legend
                .token_modifiers
                .iter()
                .map(|modifier| modifier.as_str().to_string())
                .collect(),
        }
    }

    /// Converts inlay hints.
    pub fn as_inlay_hints(&self, hints: &[InlayHint]) -> Result<Vec<EditorInlayHint>, ConvertError> {
        hints.iter().map(|hint| self.as_inlay_hint(hint)).collect()
    }

    /// Converts one inlay hint.
    pub fn as_inlay_hint(&self, hint: &InlayHint) -> Result<EditorInlayHint, ConvertError> {
        Ok(EditorInlayHint {
            position: to_editor_position(hint.position),
            label: match &hint.label {
                lsp_types::InlayHintLabel::String(text) => InlayHintLabel::Text(text.clone()),
                lsp_types::InlayHintLabel::LabelParts(parts) => InlayHintLabel::Parts(
                    parts
                        .iter()
                        .map(|part| {
                            Ok(EditorInlayHintLabelPart {
                                label: part.value.clone(),
                                tooltip: part.tooltip.as_ref().map(|tooltip| match tooltip {
                                    InlayHintLabelPartTooltip::String(text) => text.clone(),
                                    InlayHintLabelPartTooltip::MarkupContent(markup) => {
                                        markup.value.clone()
                                    }
                                }),
                                location: part
                                    .location
                                    .as_ref()
                                    .map(|location| self.as_location(location))
                                    .transpose()?,
                                command: part
                                    .command
                                    .as_ref()
                                    .map(|command| self.as_command(command)),
                            })
                        })
                        .collect::<Result<Vec<_>, ConvertError>>()?,
                ),
            },
            kind: hint.kind.and_then(|kind| match kind {
                InlayHintKind::TYPE => Some(InlayKind::Type),
                InlayHintKind::PARAMETER => Some(InlayKind::Parameter),
                _ => None,
            }),
            tooltip: hint.tooltip.as_ref().map(|tooltip| match tooltip {
                InlayHintTooltip::String(text) => text.clone(),
                InlayHintTooltip::MarkupContent(markup) => markup.value.clone(),
            }),
            padding_left: hint.padding_left.unwrap_or(false),
            padding_right: hint.padding_right.unwrap_or(false),
            text_edits: self.as_text_edits(hint.text_edits.as_deref().unwrap_or_default()),
            data: hint.data.clone(),
        })
    }
}

/// Reads the raw wire value of a transparent enum newtype.
fn raw_enum_value<T: serde::Serialize>(value: &T) -> Option<u32> {
    serde_json::to_value(value).ok().and_then(|v| v.as_u64()).map(|v| v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_types::Position;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn p2e() -> ProtocolToEditor {
        ProtocolToEditor
    }

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    fn range(sl: u32, sc: u32, el: u32, ec: u32) -> lsp_types::Range {
        lsp_types::Range {
            start: Position { line: sl, character: sc },
            end: Position { line: el, character: ec },
        }
    }

    fn default_range() -> EditorRange {
        EditorRange::new(1, 3, 1, 6)
    }

    #[test]
    fn marker_defaults_to_hint_and_stringifies_numeric_code() {
        let diagnostic = Diagnostic {
            range: range(0, 0, 0, 4),
            code: Some(NumberOrString::Number(404)),
            message: "not found".to_string(),
            ..Default::default()
        };
        let marker = p2e().as_marker(&diagnostic).unwrap();
        assert_eq!(marker.severity, MarkerSeverity::Hint);
        assert_eq!(marker.code.as_deref(), Some("404"));
        assert_eq!(marker.range, EditorRange::new(1, 1, 1, 5));
    }

    #[test]
    fn completion_item_uses_its_own_text_edit() {
        let item = CompletionItem {
            label: "push".to_string(),
            text_edit: Some(CompletionTextEdit::Edit(TextEdit {
                range: range(0, 2, 0, 5),
                new_text: "push(item)".to_string(),
            })),
            insert_text: Some("ignored".to_string()),
            ..Default::default()
        };
        let converted = p2e().as_completion_item(&item, None, default_range()).unwrap();
        assert_eq!(converted.insert_text, "push(item)");
        assert!(converted.from_edit);
        assert_eq!(
            converted.range,
            EditorEditRange::Single(EditorRange::new(1, 3, 1, 6))
        );
    }

    #[test]
    fn completion_item_insert_replace_keeps_both_ranges() {
        let item = CompletionItem {
            label: "push".to_string(),
            text_edit: Some(CompletionTextEdit::InsertAndReplace(
                lsp_types::InsertReplaceEdit {
                    new_text: "push".to_string(),
                    insert: range(0, 2, 0, 4),
                    replace: range(0, 2, 0, 8),
                },
            )),
            ..Default::default()
        };
        let converted = p2e().as_completion_item(&item, None, default_range()).unwrap();
        assert_eq!(
            converted.range,
            EditorEditRange::InsertReplace {
                insert: EditorRange::new(1, 3, 1, 5),
                replace: EditorRange::new(1, 3, 1, 9),
            }
        );
        assert!(converted.from_edit);
    }

    #[test]
    fn completion_item_falls_back_to_list_default_range() {
        let defaults: CompletionListItemDefaults = serde_json::from_value(json!({
            "editRange": {
                "start": { "line": 0, "character": 2 },
                "end": { "line": 0, "character": 5 },
            },
            "insertTextFormat": 2,
        }))
        .unwrap();
        let item = CompletionItem { label: "sort".to_string(), ..Default::default() };
        let converted = p2e().as_completion_item(&item, Some(&defaults), default_range()).unwrap();
        assert_eq!(converted.insert_text, "sort");
        assert!(converted.from_edit);
        assert!(converted.is_snippet);
        assert_eq!(
            converted.range,
            EditorEditRange::Single(EditorRange::new(1, 3, 1, 6))
        );
    }

    #[test]
    fn completion_item_without_edit_uses_insert_text_then_label() {
        let with_insert = CompletionItem {
            label: "length".to_string(),
            insert_text: Some("len".to_string()),
            ..Default::default()
        };
        let converted = p2e().as_completion_item(&with_insert, None, default_range()).unwrap();
        assert_eq!(converted.insert_text, "len");
        assert!(!converted.from_edit);

        let label_only = CompletionItem { label: "length".to_string(), ..Default::default() };
        let converted = p2e().as_completion_item(&label_only, None, default_range()).unwrap();
        assert_eq!(converted.insert_text, "length");
        assert!(!converted.from_edit);
        assert_eq!(
            converted.range,
            EditorEditRange::Single(default_range())
        );
    }

    #[test]
    fn unknown_completion_kind_degrades_to_text_preserving_raw_value() {
        let kind: CompletionItemKind = serde_json::from_value(json!(42)).unwrap();
        let (mapped, raw) = p2e().as_completion_item_kind(kind);
        assert_eq!(mapped, EditorCompletionKind::Text);
        assert_eq!(raw, Some(42));

        let (mapped, raw) = p2e().as_completion_item_kind(CompletionItemKind::METHOD);
        assert_eq!(mapped, EditorCompletionKind::Method);
        assert_eq!(raw, None);
    }

    #[test]
    fn hover_language_string_renders_as_code_block() {
        let hover = Hover {
            contents: HoverContents::Scalar(MarkedString::LanguageString(
                lsp_types::LanguageString {
                    language: "rust".to_string(),
                    value: "fn len(&self) -> usize".to_string(),
                },
            )),
            range: None,
        };
        let converted = p2e().as_hover(&hover);
        assert_eq!(converted.contents[0].value, "```rust\nfn len(&self) -> usize\n```");
    }

    #[test]
    fn signature_help_defaults_active_indices_to_zero() {
        let help = SignatureHelp {
            signatures: vec![lsp_types::SignatureInformation {
                label: "len()".to_string(),
                documentation: None,
                parameters: None,
                active_parameter: None,
            }],
            active_signature: None,
            active_parameter: None,
        };
        let converted = p2e().as_signature_help(&help);
        assert_eq!(converted.active_signature, 0);
        assert_eq!(converted.active_parameter, 0);
    }

    #[test]
    fn empty_goto_array_is_absence() {
        assert_eq!(
            p2e().as_goto_result(&GotoDefinitionResponse::Array(vec![])).unwrap(),
            None
        );
        assert_eq!(p2e().as_goto_result(&GotoDefinitionResponse::Link(vec![])).unwrap(), None);
    }

    #[test]
    fn scalar_goto_becomes_single_location() {
        let response = GotoDefinitionResponse::Scalar(Location {
            uri: uri("file:///demo/lib.rs"),
            range: range(3, 0, 3, 7),
        });
        match p2e().as_goto_result(&response).unwrap() {
            Some(GotoResult::Locations(locations)) => {
                assert_eq!(locations.len(), 1);
                assert_eq!(locations[0].range, EditorRange::new(4, 1, 4, 8));
            }
            other => panic!("expected locations, got {other:?}"),
        }
    }

    #[test]
    fn goto_links_keep_selection_detail() {
        let response = GotoDefinitionResponse::Link(vec![LocationLink {
            origin_selection_range: Some(range(0, 4, 0, 9)),
            target_uri: uri("file:///demo/lib.rs"),
            target_range: range(10, 0, 20, 1),
            target_selection_range: range(10, 3, 10, 8),
        }]);
        match p2e().as_goto_result(&response).unwrap() {
            Some(GotoResult::Links(links)) => {
                assert_eq!(links[0].origin_selection_range, Some(EditorRange::new(1, 5, 1, 10)));
                assert_eq!(links[0].target_selection_range, EditorRange::new(11, 4, 11, 9));
            }
            other => panic!("expected links, got {other:?}"),
        }
    }

    #[test]
    fn unknown_symbol_kind_degrades_to_property() {
        let kind: SymbolKind = serde_json::from_value(json!(99)).unwrap();
        assert_eq!(p2e().as_symbol_kind(kind), EditorSymbolKind::Property);
        assert_eq!(p2e().as_symbol_kind(SymbolKind::TYPE_PARAMETER), EditorSymbolKind::TypeParameter);
    }

    #[test]
    fn nested_symbols_convert_recursively() {
        let response: DocumentSymbolResponse = serde_json::from_value(json!([{
            "name": "Stack",
            "kind": 23,
            "range": {
                "start": { "line": 0, "character": 0 },
                "end": { "line": 9, "character": 1 },
            },
            "selectionRange": {
                "start": { "line": 0, "character": 7 },
                "end": { "line": 0, "character": 12 },
            },
            "children": [{
                "name": "push",
                "detail": "fn push(&mut self)",
                "kind": 6,
                "range": {
                    "start": { "line": 2, "character": 4 },
                    "end": { "line": 4, "character": 5 },
                },
                "selectionRange": {
                    "start": { "line": 2, "character": 7 },
                    "end": { "line": 2, "character": 11 },
                },
            }],
        }]))
        .unwrap();
        let symbols = p2e().as_document_symbols(&response);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].kind, EditorSymbolKind::Struct);
        assert_eq!(symbols[0].children.len(), 1);
        assert_eq!(symbols[0].children[0].name, "push");
        assert_eq!(symbols[0].children[0].kind, EditorSymbolKind::Method);
        assert_eq!(symbols[0].children[0].selection_range, EditorRange::new(3, 8, 3, 12));
    }

    #[test]
    fn workspace_edit_changes_map_batches_per_resource() {
        let edit: WorkspaceEdit = serde_json::from_value(json!({
            "changes": {
                "file:///demo/lib.rs": [
                    {
                        "range": {
                            "start": { "line": 0, "character": 0 },
                            "end": { "line": 0, "character": 3 },
                        },
                        "newText": "four",
                    },
                    {
                        "range": {
                            "start": { "line": 2, "character": 0 },
                            "end": { "line": 2, "character": 3 },
                        },
                        "newText": "five",
                    },
                ],
            },
        }))
        .unwrap();
        let converted = p2e().as_workspace_edit(&edit).unwrap();
        assert_eq!(converted.edits.len(), 1);
        match &converted.edits[0] {
            ResourceEdit::Text(text) => {
                assert_eq!(text.resource.as_str(), "file:///demo/lib.rs");
                assert_eq!(text.version, None);
                assert_eq!(text.edits.len(), 2);
                assert_eq!(text.edits[0].edit.text, "four");
            }
            other => panic!("expected text edits, got {other:?}"),
        }
    }

    #[test]
    fn workspace_edit_attaches_change_annotations() {
        let edit: WorkspaceEdit = serde_json::from_value(json!({
            "documentChanges": [
                {
                    "textDocument": { "uri": "file:///demo/lib.rs", "version": 7 },
                    "edits": [
                        {
                            "range": {
                                "start": { "line": 1, "character": 0 },
                                "end": { "line": 1, "character": 2 },
                            },
                            "newText": "id",
                            "annotationId": "rename",
                        },
                    ],
                },
                {
                    "kind": "rename",
                    "oldUri": "file:///demo/old.rs",
                    "newUri": "file:///demo/new.rs",
                    "annotationId": "rename",
                },
            ],
            "changeAnnotations": {
                "rename": {
                    "label": "Rename symbol",
                    "needsConfirmation": true,
                },
            },
        }))
        .unwrap();
        let converted = p2e().as_workspace_edit(&edit).unwrap();
        assert_eq!(converted.edits.len(), 2);
        match &converted.edits[0] {
            ResourceEdit::Text(text) => {
                assert_eq!(text.version, Some(7));
                let metadata = text.edits[0].metadata.as_ref().unwrap();
                assert_eq!(metadata.label, "Rename symbol");
                assert!(metadata.needs_confirmation);
            }
            other => panic!("expected text edits, got {other:?}"),
        }
        match &converted.edits[1] {
            ResourceEdit::RenameFile { old_uri, new_uri, metadata, .. } => {
                assert_eq!(old_uri.as_str(), "file:///demo/old.rs");
                assert_eq!(new_uri.as_str(), "file:///demo/new.rs");
                assert_eq!(metadata.as_ref().unwrap().label, "Rename symbol");
            }
            other => panic!("expected rename, got {other:?}"),
        }
    }

    #[test]
    fn bare_command_becomes_action_with_command_payload() {
        let response = vec![CodeActionOrCommand::Command(Command {
            title: "Run tests".to_string(),
            command: "demo.runTests".to_string(),
            arguments: None,
        })];
        let actions = p2e().as_code_actions(&response).unwrap();
        assert_eq!(actions[0].title, "Run tests");
        assert_eq!(actions[0].command.as_ref().unwrap().id, "demo.runTests");
        assert!(actions[0].edit.is_none());
    }

    #[test]
    fn folding_ranges_become_one_based_lines() {
        let ranges = vec![FoldingRange {
            start_line: 2,
            start_character: None,
            end_line: 9,
            end_character: None,
            kind: Some(FoldingRangeKind::Imports),
            collapsed_text: None,
        }];
        let converted = p2e().as_folding_ranges(&ranges);
        assert_eq!(converted[0].start, 3);
        assert_eq!(converted[0].end, 10);
        assert_eq!(converted[0].kind, Some(FoldingKind::Imports));
    }

    #[test]
    fn semantic_tokens_flatten_to_five_integers_per_token() {
        let result = SemanticTokensResult::Tokens(SemanticTokens {
            result_id: Some("r1".to_string()),
            data: vec![
                lsp_types::SemanticToken {
                    delta_line: 0,
                    delta_start: 4,
                    length: 3,
                    token_type: 1,
                    token_modifiers_bitset: 0,
                },
                lsp_types::SemanticToken {
                    delta_line: 1,
                    delta_start: 0,
                    length: 5,
                    token_type: 2,
                    token_modifiers_bitset: 4,
                },
            ],
        });
        let converted = p2e().as_semantic_tokens(&result);
        assert_eq!(converted.result_id.as_deref(), Some("r1"));
        assert_eq!(converted.data, vec![0, 4, 3, 1, 0, 1, 0, 5, 2, 4]);
    }

    #[test]
    fn inlay_hint_label_parts_survive() {
        let hint: InlayHint = serde_json::from_value(json!({
            "position": { "line": 4, "character": 10 },
            "label": [
                { "value": ": " },
                {
                    "value": "usize",
                    "location": {
                        "uri": "file:///demo/lib.rs",
                        "range": {
                            "start": { "line": 0, "character": 0 },
                            "end": { "line": 0, "character": 5 },
                        },
                    },
                },
            ],
            "kind": 1,
            "paddingLeft": true,
        }))
        .unwrap();
        let converted = p2e().as_inlay_hint(&hint).unwrap();
        assert_eq!(converted.position, lsp_bridge_model::EditorPosition::new(5, 11));
        assert_eq!(converted.kind, Some(InlayKind::Type));
        assert!(converted.padding_left);
        match &converted.label {
            InlayHintLabel::Parts(parts) => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[1].label, "usize");
                assert!(parts[1].location.is_some());
            }
            other => panic!("expected parts, got {other:?}"),
        }
    }

    #[test]
    fn prepare_rename_maps_placeholder_and_default_behavior() {
        let with_placeholder = PrepareRenameResponse::RangeWithPlaceholder {
            range: range(0, 2, 0, 6),
            placeholder: "name".to_string(),
        };
        let location = p2e().as_rename_location(&with_placeholder).unwrap();
        assert_eq!(location.text.as_deref(), Some("name"));
        assert_eq!(location.range, EditorRange::new(1, 3, 1, 7));

        let default_behavior =
            PrepareRenameResponse::DefaultBehavior { default_behavior: true };
        assert_eq!(p2e().as_rename_location(&default_behavior), None);
    }
}
