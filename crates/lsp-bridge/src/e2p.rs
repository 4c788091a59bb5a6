//! Editor-to-protocol conversion.
//!
//! Builds protocol request parameters from editor-side values, and converts
//! editor items back into protocol items for the `*/resolve` round trips.

use std::collections::HashMap;
use std::str::FromStr;

use lsp_bridge_model::{
    CompletionContext, CompletionTriggerKind, EditorCodeAction,
    EditorCodeActionContext, EditorCodeLens, EditorCommand, EditorCompletionItem,
    EditorCompletionKind, EditorDocumentLink, EditorDocumentation, EditorFormattingOptions,
    EditorInlayHint, EditorPosition, EditorRange, EditorSignatureHelp, InlayHintLabel,
    InsertTextMode, MarkerData, MarkerSeverity, MarkerTag, ParameterLabel, SignatureHelpContext,
    SignatureHelpTriggerKind,
};
use lsp_types::{
    CodeActionContext, CodeActionKind, CodeActionParams, CodeLens, CodeLensParams, Color,
    ColorPresentationParams, Command, CompletionItem, CompletionItemKind,
    CompletionItemLabelDetails, CompletionItemTag, CompletionParams, CompletionTextEdit,
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, DiagnosticTag,
    DocumentColorParams, DocumentFormattingParams, DocumentHighlightParams, DocumentLink,
    DocumentLinkParams, DocumentOnTypeFormattingParams, DocumentRangeFormattingParams,
    DocumentSymbolParams, Documentation, FoldingRangeParams, FormattingOptions,
    GotoDefinitionParams, HoverParams, InlayHint, InlayHintParams, InlayHintTooltip,
    InsertReplaceEdit, InsertTextFormat, Location, MarkupContent, MarkupKind,
    PartialResultParams, ParameterInformation, Range, ReferenceContext, ReferenceParams,
    RenameParams, SemanticTokensParams, SignatureHelp, SignatureHelpParams,
    SignatureInformation, TextDocumentIdentifier, TextDocumentPositionParams, TextEdit, Uri,
    WorkDoneProgressParams,
};
use url::Url;

use crate::coords::{to_protocol_position, to_protocol_range};
use crate::error::ConvertError;

/// Converts editor-side values into protocol shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorToProtocol;

impl EditorToProtocol {
    /// Converts an editor uri to a protocol uri.
    pub fn as_uri(&self, url: &Url) -> Result<Uri, ConvertError> {
        Uri::from_str(url.as_str()).map_err(|err| ConvertError::InvalidUri {
            uri: url.to_string(),
            message: err.to_string(),
        })
    }

    /// Builds a text document identifier for `url`.
    pub fn as_text_document_identifier(
        &self,
        url: &Url,
    ) -> Result<TextDocumentIdentifier, ConvertError> {
        Ok(TextDocumentIdentifier { uri: self.as_uri(url)? })
    }

    /// Builds text-document-position params, the base of most requests.
    pub fn as_text_document_position_params(
        &self,
        url: &Url,
        position: EditorPosition,
    ) -> Result<TextDocumentPositionParams, ConvertError> {
        Ok(TextDocumentPositionParams {
            text_document: self.as_text_document_identifier(url)?,
            position: to_protocol_position(position),
        })
    }

    /// Builds completion request params.
    pub fn as_completion_params(
        &self,
        url: &Url,
        position: EditorPosition,
        context: &CompletionContext,
    ) -> Result<CompletionParams, ConvertError> {
        Ok(CompletionParams {
            text_document_position: self.as_text_document_position_params(url, position)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
            context: Some(lsp_types::CompletionContext {
                trigger_kind: match context.trigger_kind {
                    CompletionTriggerKind::Invoked => lsp_types::CompletionTriggerKind::INVOKED,
                    CompletionTriggerKind::TriggerCharacter => {
                        lsp_types::CompletionTriggerKind::TRIGGER_CHARACTER
                    }
                    CompletionTriggerKind::TriggerForIncompleteCompletions => {
                        lsp_types::CompletionTriggerKind::TRIGGER_FOR_INCOMPLETE_COMPLETIONS
                    }
                },
                trigger_character: context.trigger_character.clone(),
            }),
        })
    }

    /// Builds hover request params.
    pub fn as_hover_params(
        &self,
        url: &Url,
        position: EditorPosition,
    ) -> Result<HoverParams, ConvertError> {
        Ok(HoverParams {
            text_document_position_params: self.as_text_document_position_params(url, position)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
    }

    /// Builds signature-help request params.
    pub fn as_signature_help_params(
        &self,
        url: &Url,
        position: EditorPosition,
        context: &SignatureHelpContext,
    ) -> Result<SignatureHelpParams, ConvertError> {
        Ok(SignatureHelpParams {
            context: Some(lsp_types::SignatureHelpContext {
                trigger_kind: match context.trigger_kind {
                    SignatureHelpTriggerKind::Invoked => {
                        lsp_types::SignatureHelpTriggerKind::INVOKED
                    }
                    SignatureHelpTriggerKind::TriggerCharacter => {
                        lsp_types::SignatureHelpTriggerKind::TRIGGER_CHARACTER
                    }
                    SignatureHelpTriggerKind::ContentChange => {
                        lsp_types::SignatureHelpTriggerKind::CONTENT_CHANGE
                    }
                },
                trigger_character: context.trigger_character.clone(),
                is_retrigger: context.is_retrigger,
                active_signature_help: context
                    .active_signature_help
                    .as_ref()
                    .map(|help| self.as_signature_help(help)),
            }),
            text_document_position_params: self.as_text_document_position_params(url, position)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
    }

    /// Converts an editor signature help back to the protocol shape, used
    /// when a retrigger reports the help currently on screen.
    pub fn as_signature_help(&self, help: &EditorSignatureHelp) -> SignatureHelp {
        SignatureHelp {
            signatures: help
                .signatures
                .iter()
                .map(|signature| SignatureInformation {
                    label: signature.label.clone(),
                    documentation: signature
                        .documentation
                        .as_ref()
                        .map(|doc| self.as_editor_documentation(doc)),
                    parameters: Some(
                        signature
                            .parameters
                            .iter()
                            .map(|parameter| ParameterInformation {
                                label: match &parameter.label {
                                    ParameterLabel::Simple(text) => {
                                        lsp_types::ParameterLabel::Simple(text.clone())
                                    }
                                    ParameterLabel::Offsets(start, end) => {
                                        lsp_types::ParameterLabel::LabelOffsets([*start, *end])
                                    }
                                },
                                documentation: parameter
                                    .documentation
                                    .as_ref()
                                    .map(|doc| self.as_editor_documentation(doc)),
                            })
                            .collect(),
                    ),
                    active_parameter: signature.active_parameter,
                })
                .collect(),
            active_signature: Some(help.active_signature),
            active_parameter: Some(help.active_parameter),
        }
    }

    fn as_editor_documentation(&self, doc: &EditorDocumentation) -> Documentation {
        match doc {
            EditorDocumentation::Plain(text) => Documentation::String(text.clone()),
            EditorDocumentation::Markdown(markdown) => {
                Documentation::MarkupContent(MarkupContent {
                    kind: MarkupKind::Markdown,
                    value: markdown.value.clone(),
                })
            }
        }
    }

    /// Builds goto request params (definition, declaration, type definition,
    /// implementation all share this shape).
    pub fn as_goto_params(
        &self,
        url: &Url,
        position: EditorPosition,
    ) -> Result<GotoDefinitionParams, ConvertError> {
        Ok(GotoDefinitionParams {
            text_document_position_params: self.as_text_document_position_params(url, position)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Builds reference request params.
    pub fn as_reference_params(
        &self,
        url: &Url,
        position: EditorPosition,
        include_declaration: bool,
    ) -> Result<ReferenceParams, ConvertError> {
        Ok(ReferenceParams {
            text_document_position: self.as_text_document_position_params(url, position)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
            context: ReferenceContext { include_declaration },
        })
    }

    /// Builds document-highlight request params.
    pub fn as_document_highlight_params(
        &self,
        url: &Url,
        position: EditorPosition,
    ) -> Result<DocumentHighlightParams, ConvertError> {
        Ok(DocumentHighlightParams {
            text_document_position_params: self.as_text_document_position_params(url, position)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Builds document-symbol request params.
    pub fn as_document_symbol_params(
        &self,
        url: &Url,
    ) -> Result<DocumentSymbolParams, ConvertError> {
        Ok(DocumentSymbolParams {
            text_document: self.as_text_document_identifier(url)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Builds code-action request params from a range and its context.
    pub fn as_code_action_params(
        &self,
        url: &Url,
        range: EditorRange,
        context: &EditorCodeActionContext,
    ) -> Result<CodeActionParams, ConvertError> {
        Ok(CodeActionParams {
            text_document: self.as_text_document_identifier(url)?,
            range: to_protocol_range(range),
            context: self.as_code_action_context(context)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Converts a code-action context, including its markers.
    pub fn as_code_action_context(
        &self,
        context: &EditorCodeActionContext,
    ) -> Result<CodeActionContext, ConvertError> {
        Ok(CodeActionContext {
            diagnostics: self.as_diagnostics(&context.markers)?,
            only: if context.only.is_empty() {
                None
            } else {
                Some(context.only.iter().map(|kind| CodeActionKind::from(kind.clone())).collect())
            },
            trigger_kind: None,
        })
    }

    /// Converts editor markers back to protocol diagnostics.
    pub fn as_diagnostics(&self, markers: &[MarkerData]) -> Result<Vec<Diagnostic>, ConvertError> {
        markers.iter().map(|marker| self.as_diagnostic(marker)).collect()
    }

    /// Converts one editor marker back to a protocol diagnostic.
    pub fn as_diagnostic(&self, marker: &MarkerData) -> Result<Diagnostic, ConvertError> {
        let related_information = if marker.related_information.is_empty() {
            None
        } else {
            Some(
                marker
                    .related_information
                    .iter()
                    .map(|related| {
                        Ok(DiagnosticRelatedInformation {
                            location: Location {
                                uri: self.as_uri(&related.resource)?,
                                range: to_protocol_range(related.range),
                            },
                            message: related.message.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>, ConvertError>>()?,
            )
        };
        Ok(Diagnostic {
            range: to_protocol_range(marker.range),
            severity: Some(match marker.severity {
                MarkerSeverity::Error => DiagnosticSeverity::ERROR,
                MarkerSeverity::Warning => DiagnosticSeverity::WARNING,
                MarkerSeverity::Info => DiagnosticSeverity::INFORMATION,
                MarkerSeverity::Hint => DiagnosticSeverity::HINT,
            }),
            code: marker.code.clone().map(lsp_types::NumberOrString::String),
            code_description: None,
            source: marker.source.clone(),
            message: marker.message.clone(),
            related_information,
            tags: if marker.tags.is_empty() {
                None
            } else {
                Some(
                    marker
                        .tags
                        .iter()
                        .map(|tag| match tag {
                            MarkerTag::Unnecessary => DiagnosticTag::UNNECESSARY,
                            MarkerTag::Deprecated => DiagnosticTag::DEPRECATED,
                        })
                        .collect(),
                )
            },
            data: None,
        })
    }

    /// Builds code-lens request params.
    pub fn as_code_lens_params(&self, url: &Url) -> Result<CodeLensParams, ConvertError> {
        Ok(CodeLensParams {
            text_document: self.as_text_document_identifier(url)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Converts an editor code lens back to the protocol shape for resolve.
    pub fn as_code_lens(&self, lens: &EditorCodeLens) -> CodeLens {
        CodeLens {
            range: to_protocol_range(lens.range),
            command: lens.command.as_ref().map(|command| self.as_command(command)),
            data: lens.data.clone(),
        }
    }

    /// Converts an editor command reference.
    pub fn as_command(&self, command: &EditorCommand) -> Command {
        Command {
            title: command.title.clone(),
            command: command.id.clone(),
            arguments: if command.arguments.is_empty() {
                None
            } else {
                Some(command.arguments.clone())
            },
        }
    }

    /// Converts an editor code action back to the protocol shape for resolve.
    ///
    /// A resolved edit never travels editor-to-server; an action that
    /// already carries one is rejected.
    pub fn as_code_action(
        &self,
        action: &EditorCodeAction,
    ) -> Result<lsp_types::CodeAction, ConvertError> {
        if action.edit.is_some() {
            return Err(ConvertError::EditOnResolvableAction);
        }
        Ok(lsp_types::CodeAction {
            title: action.title.clone(),
            kind: action.kind.clone().map(CodeActionKind::from),
            diagnostics: if action.diagnostics.is_empty() {
                None
            } else {
                Some(self.as_diagnostics(&action.diagnostics)?)
            },
            edit: None,
            command: action.command.as_ref().map(|command| self.as_command(command)),
            is_preferred: action.is_preferred.then_some(true),
            disabled: action
                .disabled
                .clone()
                .map(|reason| lsp_types::CodeActionDisabled { reason }),
            data: action.data.clone(),
        })
    }

    /// Converts editor formatting options. Only tab size and the
    /// spaces-vs-tabs choice exist editor-side; the protocol extras stay
    /// unset.
    pub fn as_formatting_options(&self, options: EditorFormattingOptions) -> FormattingOptions {
        FormattingOptions {
            tab_size: options.tab_size,
            insert_spaces: options.insert_spaces,
            properties: HashMap::new(),
            trim_trailing_whitespace: None,
            insert_final_newline: None,
            trim_final_newlines: None,
        }
    }

    /// Builds whole-document formatting params.
    pub fn as_document_formatting_params(
        &self,
        url: &Url,
        options: EditorFormattingOptions,
    ) -> Result<DocumentFormattingParams, ConvertError> {
        Ok(DocumentFormattingParams {
            text_document: self.as_text_document_identifier(url)?,
            options: self.as_formatting_options(options),
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
    }

    /// Builds range formatting params.
    pub fn as_document_range_formatting_params(
        &self,
        url: &Url,
        range: EditorRange,
        options: EditorFormattingOptions,
    ) -> Result<DocumentRangeFormattingParams, ConvertError> {
        Ok(DocumentRangeFormattingParams {
            text_document: self.as_text_document_identifier(url)?,
            range: to_protocol_range(range),
            options: self.as_formatting_options(options),
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
    }

    /// Builds on-type formatting params.
    pub fn as_on_type_formatting_params(
        &self,
        url: &Url,
        position: EditorPosition,
        ch: &str,
        options: EditorFormattingOptions,
    ) -> Result<DocumentOnTypeFormattingParams, ConvertError> {
        Ok(DocumentOnTypeFormattingParams {
            text_document_position: self.as_text_document_position_params(url, position)?,
            ch: ch.to_string(),
            options: self.as_formatting_options(options),
        })
    }

    /// Builds rename params.
    pub fn as_rename_params(
        &self,
        url: &Url,
        position: EditorPosition,
        new_name: &str,
    ) -> Result<RenameParams, ConvertError> {
        Ok(RenameParams {
            text_document_position: self.as_text_document_position_params(url, position)?,
            new_name: new_name.to_string(),
            work_done_progress_params: WorkDoneProgressParams::default(),
        })
    }

    /// Builds document-link request params.
    pub fn as_document_link_params(&self, url: &Url) -> Result<DocumentLinkParams, ConvertError> {
        Ok(DocumentLinkParams {
            text_document: self.as_text_document_identifier(url)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Converts an editor document link back to the protocol shape for
    /// resolve.
    pub fn as_document_link(
        &self,
        link: &EditorDocumentLink,
    ) -> Result<DocumentLink, ConvertError> {
        Ok(DocumentLink {
            range: to_protocol_range(link.range),
            target: link.url.as_ref().map(|url| self.as_uri(url)).transpose()?,
            tooltip: link.tooltip.clone(),
            data: link.data.clone(),
        })
    }

    /// Builds document-color request params.
    pub fn as_document_color_params(
        &self,
        url: &Url,
    ) -> Result<DocumentColorParams, ConvertError> {
        Ok(DocumentColorParams {
            text_document: self.as_text_document_identifier(url)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Builds color-presentation request params for one color occurrence.
    pub fn as_color_presentation_params(
        &self,
        url: &Url,
        color: &lsp_bridge_model::EditorColorInformation,
    ) -> Result<ColorPresentationParams, ConvertError> {
        Ok(ColorPresentationParams {
            text_document: self.as_text_document_identifier(url)?,
            color: Color {
                red: color.color.red,
                green: color.color.green,
                blue: color.color.blue,
                alpha: color.color.alpha,
            },
            range: to_protocol_range(color.range),
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Builds folding-range request params.
    pub fn as_folding_range_params(&self, url: &Url) -> Result<FoldingRangeParams, ConvertError> {
        Ok(FoldingRangeParams {
            text_document: self.as_text_document_identifier(url)?,
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
    }

    /// Builds semantic-tokens request params.
    pub fn as_semantic_tokens_params(
        &self,
        url: &Url,
    ) -> Result<SemanticTokensParams, ConvertError> {
        Ok(SemanticTokensParams {
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
            text_document: self.as_text_document_identifier(url)?,
        })
    }

    /// Builds inlay-hint request params for a visible range.
    pub fn as_inlay_hint_params(
        &self,
        url: &Url,
        range: EditorRange,
    ) -> Result<InlayHintParams, ConvertError> {
        Ok(InlayHintParams {
            work_done_progress_params: WorkDoneProgressParams::default(),
            text_document: self.as_text_document_identifier(url)?,
            range: to_protocol_range(range),
        })
    }

    /// Converts an editor inlay hint back to the protocol shape for resolve.
    pub fn as_inlay_hint(&self, hint: &EditorInlayHint) -> Result<InlayHint, ConvertError> {
        Ok(InlayHint {
            position: to_protocol_position(hint.position),
            label: match &hint.label {
                InlayHintLabel::Text(text) => lsp_types::InlayHintLabel::String(text.clone()),
                InlayHintLabel::Parts(parts) => lsp_types::InlayHintLabel::LabelParts(
                    parts
                        .iter()
                        .map(|part| {
                            Ok(lsp_types::InlayHintLabelPart {
                                value: part.label.clone(),
                                tooltip: part
                                    .tooltip
                                    .clone()
                                    .map(lsp_types::InlayHintLabelPartTooltip::String),
                                location: part
                                    .location
                                    .as_ref()
                                    .map(|location| {
                                        Ok(Location {
                                            uri: self.as_uri(&location.uri)?,
                                            range: to_protocol_range(location.range),
                                        })
                                    })
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
            kind: hint.kind.map(|kind| match kind {
                lsp_bridge_model::InlayKind::Type => lsp_types::InlayHintKind::TYPE,
                lsp_bridge_model::InlayKind::Parameter => lsp_types::InlayHintKind::PARAMETER,
            }),
            text_edits: if hint.text_edits.is_empty() {
                None
            } else {
                Some(
                    hint.text_edits
                        .iter()
                        .map(|edit| TextEdit {
                            range: to_protocol_range(edit.range),
                            new_text: edit.text.clone(),
                        })
                        .collect(),
                )
            },
            tooltip: hint.tooltip.clone().map(InlayHintTooltip::String),
            padding_left: Some(hint.padding_left),
            padding_right: Some(hint.padding_right),
            data: hint.data.clone(),
        })
    }

    /// Converts an editor completion item back to the protocol shape for
    /// resolve.
    ///
    /// When `from_edit` is set, the insert text travels back as a text edit
    /// over the item's range; otherwise it travels as plain insert text.
    pub fn as_completion_item(&self, item: &EditorCompletionItem) -> CompletionItem {
        let (insert_text, text_edit) = if item.from_edit {
            let edit = match item.range {
                lsp_bridge_model::EditorEditRange::Single(range) => {
                    CompletionTextEdit::Edit(TextEdit {
                        range: to_protocol_range(range),
                        new_text: item.insert_text.clone(),
                    })
                }
                lsp_bridge_model::EditorEditRange::InsertReplace { insert, replace } => {
                    CompletionTextEdit::InsertAndReplace(InsertReplaceEdit {
                        new_text: item.insert_text.clone(),
                        insert: to_protocol_range(insert),
                        replace: to_protocol_range(replace),
                    })
                }
            };
            (None, Some(edit))
        } else {
            (Some(item.insert_text.clone()), None)
        };

        CompletionItem {
            label: item.label.label.clone(),
            label_details: if item.label.detail.is_none() && item.label.description.is_none() {
                None
            } else {
                Some(CompletionItemLabelDetails {
                    detail: item.label.detail.clone(),
                    description: item.label.description.clone(),
                })
            },
            kind: Some(self.as_completion_item_kind(item.kind, item.original_kind)),
            detail: item.detail.clone(),
            documentation: item
                .documentation
                .as_ref()
                .map(|value| self.as_documentation(item.documentation_format.as_deref(), value)),
            deprecated: item.deprecated.then_some(true),
            preselect: item.preselect.then_some(true),
            sort_text: item.sort_text.clone(),
            filter_text: item.filter_text.clone(),
            insert_text,
            insert_text_format: Some(if item.is_snippet {
                InsertTextFormat::SNIPPET
            } else {
                InsertTextFormat::PLAIN_TEXT
            }),
            insert_text_mode: item.insert_text_mode.map(|mode| match mode {
                InsertTextMode::AsIs => lsp_types::InsertTextMode::AS_IS,
                InsertTextMode::AdjustIndentation => lsp_types::InsertTextMode::ADJUST_INDENTATION,
            }),
            text_edit,
            additional_text_edits: if item.additional_text_edits.is_empty() {
                None
            } else {
                Some(
                    item.additional_text_edits
                        .iter()
                        .map(|edit| TextEdit {
                            range: to_protocol_range(edit.range),
                            new_text: edit.text.clone(),
                        })
                        .collect(),
                )
            },
            command: item.command.as_ref().map(|command| self.as_command(command)),
            commit_characters: if item.commit_characters.is_empty() {
                None
            } else {
                Some(item.commit_characters.clone())
            },
            data: item.data.clone(),
            tags: item.deprecated.then(|| vec![CompletionItemTag::DEPRECATED]),
        }
    }

    /// Reconstructs documentation from a value and the format it arrived in.
    pub fn as_documentation(&self, format: Option<&str>, value: &str) -> Documentation {
        match format {
            None => Documentation::String(value.to_string()),
            Some("plaintext") => Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::PlainText,
                value: value.to_string(),
            }),
            Some("markdown") => Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: value.to_string(),
            }),
            Some(other) => Documentation::String(format!(
                "Unsupported Markup content received. Kind is: {other}"
            )),
        }
    }

    /// Maps an editor completion kind back to the protocol kind. When the
    /// item preserved an out-of-table raw value, that value wins.
    pub fn as_completion_item_kind(
        &self,
        kind: EditorCompletionKind,
        original: Option<u32>,
    ) -> CompletionItemKind {
        if let Some(raw) = original
            && let Ok(kind) = serde_json::from_value(serde_json::Value::from(raw))
        {
            return kind;
        }
        match kind {
            EditorCompletionKind::Method => CompletionItemKind::METHOD,
            EditorCompletionKind::Function => CompletionItemKind::FUNCTION,
            EditorCompletionKind::Constructor => CompletionItemKind::CONSTRUCTOR,
            EditorCompletionKind::Field => CompletionItemKind::FIELD,
            EditorCompletionKind::Variable => CompletionItemKind::VARIABLE,
            EditorCompletionKind::Class => CompletionItemKind::CLASS,
            EditorCompletionKind::Struct => CompletionItemKind::STRUCT,
            EditorCompletionKind::Interface => CompletionItemKind::INTERFACE,
            EditorCompletionKind::Module => CompletionItemKind::MODULE,
            EditorCompletionKind::Property => CompletionItemKind::PROPERTY,
            EditorCompletionKind::Event => CompletionItemKind::EVENT,
            EditorCompletionKind::Operator => CompletionItemKind::OPERATOR,
            EditorCompletionKind::Unit => CompletionItemKind::UNIT,
            EditorCompletionKind::Value => CompletionItemKind::VALUE,
            EditorCompletionKind::Constant => CompletionItemKind::CONSTANT,
            EditorCompletionKind::Enum => CompletionItemKind::ENUM,
            EditorCompletionKind::EnumMember => CompletionItemKind::ENUM_MEMBER,
            EditorCompletionKind::Keyword => CompletionItemKind::KEYWORD,
            EditorCompletionKind::Text => CompletionItemKind::TEXT,
            EditorCompletionKind::Color => CompletionItemKind::COLOR,
            EditorCompletionKind::File => CompletionItemKind::FILE,
            EditorCompletionKind::Reference => CompletionItemKind::REFERENCE,
            EditorCompletionKind::Customcolor => CompletionItemKind::COLOR,
            EditorCompletionKind::Folder => CompletionItemKind::FOLDER,
            EditorCompletionKind::TypeParameter => CompletionItemKind::TYPE_PARAMETER,
            EditorCompletionKind::User => CompletionItemKind::TEXT,
            EditorCompletionKind::Issue => CompletionItemKind::TEXT,
            EditorCompletionKind::Snippet => CompletionItemKind::SNIPPET,
        }
    }

    /// Converts an editor range to the protocol range. Exposed for hosts
    /// that build their own params.
    pub fn as_range(&self, range: EditorRange) -> Range {
        to_protocol_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_bridge_model::{
        CompletionItemLabel, EditorEditRange, RelatedInformation,
    };
    use pretty_assertions::assert_eq;

    fn e2p() -> EditorToProtocol {
        EditorToProtocol
    }

    fn file_url() -> Url {
        Url::parse("file:///demo/main.rs").unwrap()
    }

    fn marker(severity: MarkerSeverity) -> MarkerData {
        MarkerData {
            range: EditorRange::new(2, 1, 2, 5),
            severity,
            code: Some("E0308".to_string()),
            source: Some("rustc".to_string()),
            message: "mismatched types".to_string(),
            tags: vec![MarkerTag::Deprecated],
            related_information: vec![RelatedInformation {
                resource: file_url(),
                range: EditorRange::new(1, 1, 1, 2),
                message: "expected due to this".to_string(),
            }],
        }
    }

    #[test]
    fn text_document_position_params_shift_coordinates() {
        let params = e2p()
            .as_text_document_position_params(&file_url(), EditorPosition::new(3, 4))
            .unwrap();
        assert_eq!(params.position, lsp_types::Position { line: 2, character: 3 });
        assert_eq!(params.text_document.uri.as_str(), "file:///demo/main.rs");
    }

    #[test]
    fn completion_params_default_to_invoked() {
        let params = e2p()
            .as_completion_params(&file_url(), EditorPosition::new(1, 1), &CompletionContext::default())
            .unwrap();
        let context = params.context.unwrap();
        assert_eq!(context.trigger_kind, lsp_types::CompletionTriggerKind::INVOKED);
        assert_eq!(context.trigger_character, None);
    }

    #[test]
    fn marker_converts_to_diagnostic_with_string_code() {
        let diagnostic = e2p().as_diagnostic(&marker(MarkerSeverity::Error)).unwrap();
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(
            diagnostic.code,
            Some(lsp_types::NumberOrString::String("E0308".to_string()))
        );
        assert_eq!(diagnostic.tags, Some(vec![DiagnosticTag::DEPRECATED]));
        let related = diagnostic.related_information.unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].message, "expected due to this");
    }

    #[test]
    fn code_action_with_resolved_edit_is_rejected() {
        let action = EditorCodeAction {
            title: "fix".to_string(),
            kind: Some("quickfix".to_string()),
            diagnostics: vec![],
            is_preferred: false,
            disabled: None,
            edit: Some(lsp_bridge_model::EditorWorkspaceEdit::default()),
            command: None,
            data: None,
        };
        let err = e2p().as_code_action(&action).unwrap_err();
        assert!(matches!(err, ConvertError::EditOnResolvableAction));
    }

    #[test]
    fn completion_item_from_edit_travels_as_text_edit() {
        let item = EditorCompletionItem {
            label: CompletionItemLabel::plain("push"),
            kind: EditorCompletionKind::Method,
            original_kind: None,
            detail: None,
            documentation: None,
            documentation_format: None,
            deprecated: false,
            preselect: false,
            sort_text: None,
            filter_text: None,
            insert_text: "push($0)".to_string(),
            is_snippet: true,
            insert_text_mode: None,
            range: EditorEditRange::Single(EditorRange::new(1, 3, 1, 6)),
            from_edit: true,
            commit_characters: vec![],
            additional_text_edits: vec![],
            command: None,
            data: None,
        };
        let converted = e2p().as_completion_item(&item);
        assert_eq!(converted.insert_text, None);
        assert_eq!(converted.insert_text_format, Some(InsertTextFormat::SNIPPET));
        match converted.text_edit {
            Some(CompletionTextEdit::Edit(edit)) => {
                assert_eq!(edit.new_text, "push($0)");
                assert_eq!(edit.range.start, lsp_types::Position { line: 0, character: 2 });
            }
            other => panic!("expected plain text edit, got {other:?}"),
        }
    }

    #[test]
    fn preserved_raw_kind_wins_over_mapped_kind() {
        let kind = e2p().as_completion_item_kind(EditorCompletionKind::Text, Some(42));
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(42));
    }

    #[test]
    fn unsupported_documentation_format_degrades_to_notice() {
        let doc = e2p().as_documentation(Some("html"), "<b>hi</b>");
        match doc {
            Documentation::String(text) => {
                assert_eq!(text, "Unsupported Markup content received. Kind is: html");
            }
            other => panic!("expected string documentation, got {other:?}"),
        }
    }
}
