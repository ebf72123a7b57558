//! Startup wiring through the registry
//!
//! Mirrors what the application root does at launch: register the
//! template store (singleton factory), the PDF capability (instance) and
//! the error hub (instance), then resolve them. Verifies the singleton
//! invariant and the cleared-registry failure mode.

use std::rc::Rc;

use refile::model::types::RenameTemplate;
use refile::services::{ErrorHub, PdfSupport, Registry, TemplateStore};

#[test]
fn test_root_wiring_resolves_all_services() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("templates.yaml");

    let registry = Registry::new();
    registry.register_factory(true, move || TemplateStore::new(store_path.clone()));
    registry.register_instance(PdfSupport::detect());
    registry.register_instance(ErrorHub::new());

    assert!(registry.has::<TemplateStore>());
    assert!(registry.has::<PdfSupport>());
    assert!(registry.has::<ErrorHub>());

    let store = registry.get::<TemplateStore>().unwrap();
    let pdf = registry.get::<PdfSupport>().unwrap();
    let hub = registry.get::<ErrorHub>().unwrap();

    assert!(pdf.available());
    assert!(store.load().unwrap().is_empty());

    // The hub works when resolved through the registry
    let classified = hub.report(
        anyhow::anyhow!("no such file or directory"),
        None,
        Default::default(),
    );
    assert_eq!(
        classified.kind,
        refile::logic::errors::ErrorKind::NotFound
    );
}

#[test]
fn test_store_singleton_is_materialized_once() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("templates.yaml");

    let registry = Registry::new();
    registry.register_factory(true, move || TemplateStore::new(store_path.clone()));

    let first = registry.get::<TemplateStore>().unwrap();
    let second = registry.get::<TemplateStore>().unwrap();
    assert!(Rc::ptr_eq(&first, &second));

    // State written through one handle is visible through the other
    first
        .save(&[RenameTemplate::keep_name("shared")])
        .unwrap();
    assert_eq!(second.load().unwrap().len(), 1);
}

#[test]
fn test_clear_forgets_previous_registrations() {
    let registry = Registry::new();
    registry.register_instance(PdfSupport::unavailable());
    assert!(registry.get::<PdfSupport>().is_ok());

    registry.clear();

    let err = registry.get::<PdfSupport>().unwrap_err();
    assert!(err.to_string().contains("not registered"));
    assert!(err.to_string().contains("PdfSupport"));
}
