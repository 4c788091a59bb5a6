//! Diagnostics collection: owner isolation, replay on late model creation,
//! and idempotent disposal.

mod support;

use pretty_assertions::assert_eq;
use url::Url;

use lsp_bridge::DiagnosticsCollection;
use lsp_bridge_model::MarkerSeverity;
use lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range, Uri};

use support::{FakeHost, FakeModel};

fn uri(s: &str) -> Uri {
    s.parse().unwrap()
}

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn diagnostic(message: &str, severity: DiagnosticSeverity) -> Diagnostic {
    Diagnostic {
        range: Range {
            start: Position { line: 0, character: 0 },
            end: Position { line: 0, character: 4 },
        },
        severity: Some(severity),
        message: message.to_string(),
        ..Default::default()
    }
}

#[test]
fn set_pushes_converted_markers_under_the_owner() {
    let host = FakeHost::new();
    let collection = DiagnosticsCollection::new(host.clone(), "rust-analyzer");

    collection
        .set(
            &uri("file:///demo/main.rs"),
            &[diagnostic("mismatched types", DiagnosticSeverity::ERROR)],
        )
        .unwrap();

    let markers = host.markers(&url("file:///demo/main.rs"), "rust-analyzer");
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].message, "mismatched types");
    assert_eq!(markers[0].severity, MarkerSeverity::Error);
    assert_eq!(collection.get(&url("file:///demo/main.rs")).len(), 1);
}

#[test]
fn last_write_wins_per_resource() {
    let host = FakeHost::new();
    let collection = DiagnosticsCollection::new(host.clone(), "rust-analyzer");
    let resource = uri("file:///demo/main.rs");

    collection
        .set(&resource, &[diagnostic("first", DiagnosticSeverity::ERROR)])
        .unwrap();
    collection
        .set(&resource, &[diagnostic("second", DiagnosticSeverity::WARNING)])
        .unwrap();

    let markers = host.markers(&url("file:///demo/main.rs"), "rust-analyzer");
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].message, "second");
    assert_eq!(markers[0].severity, MarkerSeverity::Warning);
}

#[test]
fn owners_do_not_clobber_each_other() {
    let host = FakeHost::new();
    let a = DiagnosticsCollection::new(host.clone(), "A");
    let b = DiagnosticsCollection::new(host.clone(), "B");
    let resource = uri("file:///demo/main.rs");

    a.set(&resource, &[diagnostic("from A", DiagnosticSeverity::ERROR)]).unwrap();
    b.set(&resource, &[diagnostic("from B", DiagnosticSeverity::WARNING)]).unwrap();

    assert_eq!(host.markers(&url("file:///demo/main.rs"), "A")[0].message, "from A");
    assert_eq!(host.markers(&url("file:///demo/main.rs"), "B")[0].message, "from B");

    a.dispose();
    assert!(host.markers(&url("file:///demo/main.rs"), "A").is_empty());
    assert_eq!(host.markers(&url("file:///demo/main.rs"), "B")[0].message, "from B");
}

#[test]
fn markers_replay_when_the_model_opens_later() {
    let host = FakeHost::new();
    let collection = DiagnosticsCollection::new(host.clone(), "rust-analyzer");

    collection
        .set(
            &uri("file:///demo/late.rs"),
            &[diagnostic("arrived early", DiagnosticSeverity::ERROR)],
        )
        .unwrap();
    let sets_before = host.marker_log().len();

    host.add_model(FakeModel::new("file:///demo/late.rs", "rust"));

    let log = host.marker_log();
    assert_eq!(log.len(), sets_before + 1);
    let replay = log.last().unwrap();
    assert_eq!(replay.uri, url("file:///demo/late.rs"));
    assert_eq!(replay.owner, "rust-analyzer");
    assert_eq!(replay.markers[0].message, "arrived early");
}

#[test]
fn unrelated_models_do_not_trigger_replay() {
    let host = FakeHost::new();
    let collection = DiagnosticsCollection::new(host.clone(), "rust-analyzer");

    collection
        .set(&uri("file:///demo/main.rs"), &[diagnostic("hit", DiagnosticSeverity::ERROR)])
        .unwrap();
    let sets_before = host.marker_log().len();

    host.add_model(FakeModel::new("file:///demo/other.rs", "rust"));
    assert_eq!(host.marker_log().len(), sets_before);
}

#[test]
fn dispose_clears_own_markers_and_is_idempotent() {
    let host = FakeHost::new();
    let collection = DiagnosticsCollection::new(host.clone(), "rust-analyzer");
    let resource = uri("file:///demo/main.rs");

    collection.set(&resource, &[diagnostic("x", DiagnosticSeverity::ERROR)]).unwrap();
    collection.dispose();
    assert!(host.markers(&url("file:///demo/main.rs"), "rust-analyzer").is_empty());

    let sets_after_dispose = host.marker_log().len();
    collection.dispose();
    assert_eq!(host.marker_log().len(), sets_after_dispose);

    // A disposed collection ignores further sets.
    collection.set(&resource, &[diagnostic("late", DiagnosticSeverity::ERROR)]).unwrap();
    assert_eq!(host.marker_log().len(), sets_after_dispose);
    assert!(collection.get(&url("file:///demo/main.rs")).is_empty());
}

#[test]
fn delete_removes_one_resource() {
    let host = FakeHost::new();
    let collection = DiagnosticsCollection::new(host.clone(), "rust-analyzer");

    collection
        .set(&uri("file:///demo/a.rs"), &[diagnostic("a", DiagnosticSeverity::ERROR)])
        .unwrap();
    collection
        .set(&uri("file:///demo/b.rs"), &[diagnostic("b", DiagnosticSeverity::ERROR)])
        .unwrap();

    collection.delete(&url("file:///demo/a.rs"));
    assert!(host.markers(&url("file:///demo/a.rs"), "rust-analyzer").is_empty());
    assert_eq!(host.markers(&url("file:///demo/b.rs"), "rust-analyzer").len(), 1);
    assert!(collection.get(&url("file:///demo/a.rs")).is_empty());
}
