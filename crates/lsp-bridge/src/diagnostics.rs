//! Owner-keyed diagnostics collection.
//!
//! Receives published diagnostics per resource, converts them to markers,
//! and keeps the editor's marker store in sync. Diagnostics can arrive
//! before the document is opened; a model-created subscription replays the
//! stored markers when the model shows up.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lsp_types::{Diagnostic, Uri};
use parking_lot::Mutex;
use url::Url;

use lsp_bridge_model::{Disposable, EditorHost, MarkerData};

use crate::error::ConvertError;
use crate::p2e::ProtocolToEditor;

struct CollectionState {
    owner: String,
    host: Arc<dyn EditorHost>,
    records: Mutex<HashMap<Url, Vec<MarkerData>>>,
    disposed: AtomicBool,
}

/// Markers owned by one diagnostics producer, keyed by resource.
///
/// Two collections with different owners never clobber each other; each
/// `set` replaces only this owner's markers for that resource. Disposal
/// clears this owner's markers everywhere and is idempotent; dropping an
/// undisposed collection disposes it.
pub struct DiagnosticsCollection {
    state: Arc<CollectionState>,
    p2e: ProtocolToEditor,
    subscription: Mutex<Disposable>,
}

impl DiagnosticsCollection {
    /// Creates a collection pushing markers under `owner`.
    pub fn new(host: Arc<dyn EditorHost>, owner: impl Into<String>) -> Self {
        let state = Arc::new(CollectionState {
            owner: owner.into(),
            host: host.clone(),
            records: Mutex::new(HashMap::new()),
            disposed: AtomicBool::new(false),
        });
        // Replay stored markers for documents that open after their
        // diagnostics arrived.
        let listener_state = state.clone();
        let subscription = host.on_model_created(Box::new(move |model| {
            if listener_state.disposed.load(Ordering::SeqCst) {
                return;
            }
            let records = listener_state.records.lock();
            if let Some(markers) = records.get(model.uri()) {
                tracing::trace!(
                    uri = %model.uri(),
                    owner = %listener_state.owner,
                    count = markers.len(),
                    "replaying markers for late-opened model"
                );
                listener_state.host.set_markers(
                    model.uri(),
                    &listener_state.owner,
                    markers.clone(),
                );
            }
        }));
        Self { state, p2e: ProtocolToEditor, subscription: Mutex::new(subscription) }
    }

    /// The owner key of this collection.
    pub fn owner(&self) -> &str {
        &self.state.owner
    }

    /// Replaces the diagnostics for `uri`. Last write wins.
    pub fn set(&self, uri: &Uri, diagnostics: &[Diagnostic]) -> Result<(), ConvertError> {
        if self.state.disposed.load(Ordering::SeqCst) {
            return Ok(());
        }
        let url = self.p2e.as_url(uri)?;
        let markers = self.p2e.as_markers(diagnostics)?;
        tracing::trace!(
            uri = %url,
            owner = %self.state.owner,
            count = markers.len(),
            "setting markers"
        );
        self.state.records.lock().insert(url.clone(), markers.clone());
        self.state.host.set_markers(&url, &self.state.owner, markers);
        Ok(())
    }

    /// The markers currently stored for `uri`.
    pub fn get(&self, uri: &Url) -> Vec<MarkerData> {
        self.state.records.lock().get(uri).cloned().unwrap_or_default()
    }

    /// Removes the diagnostics for `uri` and clears its markers.
    pub fn delete(&self, uri: &Url) {
        if self.state.disposed.load(Ordering::SeqCst) {
            return;
        }
        if self.state.records.lock().remove(uri).is_some() {
            self.state.host.set_markers(uri, &self.state.owner, Vec::new());
        }
    }

    /// Clears this owner's markers everywhere and drops the stored records.
    /// Subsequent calls do nothing.
    pub fn dispose(&self) {
        if self.state.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::debug!(owner = %self.state.owner, "disposing diagnostics collection");
        self.subscription.lock().dispose();
        let records: Vec<Url> = {
            let mut records = self.state.records.lock();
            let uris = records.keys().cloned().collect();
            records.clear();
            uris
        };
        for uri in records {
            self.state.host.set_markers(&uri, &self.state.owner, Vec::new());
        }
    }
}

impl Drop for DiagnosticsCollection {
    fn drop(&mut self) {
        self.dispose();
    }
}
