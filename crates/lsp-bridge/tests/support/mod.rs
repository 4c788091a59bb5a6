//! Shared fakes: an in-memory editor host and scripted providers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use url::Url;

use lsp_bridge_model::{
    CodeActionSource, CodeLensSource, CompletionSource, DeclarationSource, DefinitionSource,
    Disposable, DocumentColorSource, DocumentFormattingSource, DocumentHighlightSource,
    DocumentLinkSource, DocumentRangeFormattingSource, DocumentSymbolSource, EditorHost,
    EditorModel, EditorPosition, EditorRange, FoldingRangeSource, HoverSource,
    ImplementationSource, InlayHintSource, MarkerData, OnTypeFormattingSource, ReferenceSource,
    RenameSource, SemanticTokensSource, SignatureHelpSource, TypeDefinitionSource,
};

/// One open document.
pub struct FakeModel {
    pub uri: Url,
    pub language: String,
    pub version: i32,
    pub word: Option<EditorRange>,
}

impl FakeModel {
    pub fn new(uri: &str, language: &str) -> Self {
        Self {
            uri: Url::parse(uri).unwrap(),
            language: language.to_string(),
            version: 1,
            word: None,
        }
    }

    pub fn with_word(mut self, word: EditorRange) -> Self {
        self.word = Some(word);
        self
    }
}

impl EditorModel for FakeModel {
    fn uri(&self) -> &Url {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn word_range_at(&self, _position: EditorPosition) -> Option<EditorRange> {
        self.word
    }
}

/// A registration the host received, with its disposal flag.
pub struct RegistrationRecord {
    pub feature: &'static str,
    pub language: String,
    pub disposed: Arc<AtomicBool>,
}

/// One `set_markers` call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    pub uri: Url,
    pub owner: String,
    pub markers: Vec<MarkerData>,
}

#[derive(Default)]
struct HostState {
    models: Mutex<HashMap<Url, Arc<FakeModel>>>,
    listeners: Mutex<HashMap<u64, Box<dyn Fn(&dyn EditorModel) + Send + Sync>>>,
    next_listener: AtomicU64,
    marker_log: Mutex<Vec<MarkerSet>>,
    registrations: Mutex<Vec<RegistrationRecord>>,
    completion_sources: Mutex<Vec<(String, Arc<dyn CompletionSource>)>>,
    hover_sources: Mutex<Vec<(String, Arc<dyn HoverSource>)>>,
    definition_sources: Mutex<Vec<(String, Arc<dyn DefinitionSource>)>>,
    code_action_sources: Mutex<Vec<(String, Arc<dyn CodeActionSource>)>>,
}

/// An in-memory editor host recording everything it is told.
#[derive(Default)]
pub struct FakeHost {
    state: Arc<HostState>,
}

impl FakeHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Opens a model and fires the model-created listeners.
    pub fn add_model(&self, model: FakeModel) -> Arc<FakeModel> {
        let model = Arc::new(model);
        self.state.models.lock().insert(model.uri.clone(), model.clone());
        let listeners = self.state.listeners.lock();
        for listener in listeners.values() {
            listener(model.as_ref());
        }
        model
    }

    /// Markers currently set for `uri` by `owner` (the latest call wins).
    pub fn markers(&self, uri: &Url, owner: &str) -> Vec<MarkerData> {
        self.state
            .marker_log
            .lock()
            .iter()
            .rev()
            .find(|set| &set.uri == uri && set.owner == owner)
            .map(|set| set.markers.clone())
            .unwrap_or_default()
    }

    /// Every `set_markers` call so far.
    pub fn marker_log(&self) -> Vec<MarkerSet> {
        self.state.marker_log.lock().clone()
    }

    /// Registrations received, as `(feature, language, disposed)`.
    pub fn registrations(&self) -> Vec<(&'static str, String, bool)> {
        self.state
            .registrations
            .lock()
            .iter()
            .map(|record| {
                (record.feature, record.language.clone(), record.disposed.load(Ordering::SeqCst))
            })
            .collect()
    }

    pub fn completion_source(&self, language: &str) -> Arc<dyn CompletionSource> {
        self.state
            .completion_sources
            .lock()
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, source)| source.clone())
            .expect("no completion source registered for language")
    }

    pub fn hover_source(&self, language: &str) -> Arc<dyn HoverSource> {
        self.state
            .hover_sources
            .lock()
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, source)| source.clone())
            .expect("no hover source registered for language")
    }

    pub fn definition_source(&self, language: &str) -> Arc<dyn DefinitionSource> {
        self.state
            .definition_sources
            .lock()
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, source)| source.clone())
            .expect("no definition source registered for language")
    }

    pub fn code_action_source(&self, language: &str) -> Arc<dyn CodeActionSource> {
        self.state
            .code_action_sources
            .lock()
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, source)| source.clone())
            .expect("no code action source registered for language")
    }

    fn record(&self, feature: &'static str, language: &str) -> Disposable {
        let disposed = Arc::new(AtomicBool::new(false));
        self.state.registrations.lock().push(RegistrationRecord {
            feature,
            language: language.to_string(),
            disposed: disposed.clone(),
        });
        Disposable::new(move || {
            disposed.store(true, Ordering::SeqCst);
        })
    }
}

impl EditorHost for FakeHost {
    fn model(&self, uri: &Url) -> Option<Arc<dyn EditorModel>> {
        self.state.models.lock().get(uri).map(|model| model.clone() as Arc<dyn EditorModel>)
    }

    fn on_model_created(
        &self,
        listener: Box<dyn Fn(&dyn EditorModel) + Send + Sync>,
    ) -> Disposable {
        let id = self.state.next_listener.fetch_add(1, Ordering::SeqCst);
        self.state.listeners.lock().insert(id, listener);
        let state = self.state.clone();
        Disposable::new(move || {
            state.listeners.lock().remove(&id);
        })
    }

    fn set_markers(&self, uri: &Url, owner: &str, markers: Vec<MarkerData>) {
        self.state.marker_log.lock().push(MarkerSet {
            uri: uri.clone(),
            owner: owner.to_string(),
            markers,
        });
    }

    fn register_completion_source(
        &self,
        language: &str,
        _trigger_characters: Vec<String>,
        source: Arc<dyn CompletionSource>,
    ) -> Disposable {
        self.state.completion_sources.lock().push((language.to_string(), source));
        self.record("completion", language)
    }

    fn register_hover_source(&self, language: &str, source: Arc<dyn HoverSource>) -> Disposable {
        self.state.hover_sources.lock().push((language.to_string(), source));
        self.record("hover", language)
    }

    fn register_signature_help_source(
        &self,
        language: &str,
        _trigger_characters: Vec<String>,
        _retrigger_characters: Vec<String>,
        _source: Arc<dyn SignatureHelpSource>,
    ) -> Disposable {
        self.record("signature help", language)
    }

    fn register_definition_source(
        &self,
        language: &str,
        source: Arc<dyn DefinitionSource>,
    ) -> Disposable {
        self.state.definition_sources.lock().push((language.to_string(), source));
        self.record("definition", language)
    }

    fn register_declaration_source(
        &self,
        language: &str,
        _source: Arc<dyn DeclarationSource>,
    ) -> Disposable {
        self.record("declaration", language)
    }

    fn register_type_definition_source(
        &self,
        language: &str,
        _source: Arc<dyn TypeDefinitionSource>,
    ) -> Disposable {
        self.record("type definition", language)
    }

    fn register_implementation_source(
        &self,
        language: &str,
        _source: Arc<dyn ImplementationSource>,
    ) -> Disposable {
        self.record("implementation", language)
    }

    fn register_reference_source(
        &self,
        language: &str,
        _source: Arc<dyn ReferenceSource>,
    ) -> Disposable {
        self.record("references", language)
    }

    fn register_document_highlight_source(
        &self,
        language: &str,
        _source: Arc<dyn DocumentHighlightSource>,
    ) -> Disposable {
        self.record("document highlight", language)
    }

    fn register_document_symbol_source(
        &self,
        language: &str,
        _source: Arc<dyn DocumentSymbolSource>,
    ) -> Disposable {
        self.record("document symbol", language)
    }

    fn register_code_action_source(
        &self,
        language: &str,
        source: Arc<dyn CodeActionSource>,
    ) -> Disposable {
        self.state.code_action_sources.lock().push((language.to_string(), source));
        self.record("code action", language)
    }

    fn register_code_lens_source(
        &self,
        language: &str,
        _source: Arc<dyn CodeLensSource>,
    ) -> Disposable {
        self.record("code lens", language)
    }

    fn register_document_formatting_source(
        &self,
        language: &str,
        _source: Arc<dyn DocumentFormattingSource>,
    ) -> Disposable {
        self.record("formatting", language)
    }

    fn register_document_range_formatting_source(
        &self,
        language: &str,
        _source: Arc<dyn DocumentRangeFormattingSource>,
    ) -> Disposable {
        self.record("range formatting", language)
    }

    fn register_on_type_formatting_source(
        &self,
        language: &str,
        _first_trigger_character: String,
        _more_trigger_characters: Vec<String>,
        _source: Arc<dyn OnTypeFormattingSource>,
    ) -> Disposable {
        self.record("on-type formatting", language)
    }

    fn register_rename_source(
        &self,
        language: &str,
        _source: Arc<dyn RenameSource>,
    ) -> Disposable {
        self.record("rename", language)
    }

    fn register_document_link_source(
        &self,
        language: &str,
        _source: Arc<dyn DocumentLinkSource>,
    ) -> Disposable {
        self.record("document link", language)
    }

    fn register_document_color_source(
        &self,
        language: &str,
        _source: Arc<dyn DocumentColorSource>,
    ) -> Disposable {
        self.record("document color", language)
    }

    fn register_folding_range_source(
        &self,
        language: &str,
        _source: Arc<dyn FoldingRangeSource>,
    ) -> Disposable {
        self.record("folding range", language)
    }

    fn register_semantic_tokens_source(
        &self,
        language: &str,
        _source: Arc<dyn SemanticTokensSource>,
    ) -> Disposable {
        self.record("semantic tokens", language)
    }

    fn register_inlay_hint_source(
        &self,
        language: &str,
        _source: Arc<dyn InlayHintSource>,
    ) -> Disposable {
        self.record("inlay hint", language)
    }
}
