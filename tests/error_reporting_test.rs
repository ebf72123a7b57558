//! Error reporting behavior across the hub boundary
//!
//! The shell registers a catch-all observer that forwards classified
//! errors over a channel; these tests exercise that exact arrangement,
//! including the isolation guarantee for broken observers.

use std::sync::mpsc;

use refile::logic::errors::{suggestions_for, ErrorKind};
use refile::services::{ErrorHub, ErrorNote};

#[test]
fn test_catch_all_channel_observer_receives_notes() {
    let hub = ErrorHub::new();
    let (tx, rx) = mpsc::channel();
    hub.observe_all(move |err| {
        let _ = tx.send(ErrorNote::from(err));
    });

    hub.report(
        anyhow::anyhow!("permission denied while writing"),
        None,
        Default::default(),
    );
    hub.report(anyhow::anyhow!("completely novel failure"), None, Default::default());

    let first = rx.try_recv().unwrap();
    assert_eq!(first.kind, ErrorKind::PermissionDenied);
    let second = rx.try_recv().unwrap();
    assert_eq!(second.kind, ErrorKind::Unknown);
    assert!(rx.try_recv().is_err(), "exactly two notes expected");
}

#[test]
fn test_broken_observer_does_not_lose_the_channel_note() {
    // A panicking kind-specific observer must not prevent the catch-all
    // from forwarding, and report() must return normally.
    let hub = ErrorHub::new();
    hub.observe(ErrorKind::AlreadyExists, |_| panic!("ui glitch"));

    let (tx, rx) = mpsc::channel();
    hub.observe_all(move |err| {
        let _ = tx.send(ErrorNote::from(err));
    });

    let classified = hub.report(
        anyhow::anyhow!("target already exists"),
        None,
        Default::default(),
    );
    assert_eq!(classified.kind, ErrorKind::AlreadyExists);
    assert_eq!(rx.try_recv().unwrap().kind, ErrorKind::AlreadyExists);
}

#[test]
fn test_suggestions_accompany_classified_kinds() {
    // Advisory text exists for every kind, mapped or not
    for kind in [
        ErrorKind::NotFound,
        ErrorKind::PermissionDenied,
        ErrorKind::InvalidPath,
        ErrorKind::InvalidFilename,
        ErrorKind::AlreadyExists,
        ErrorKind::RaceCondition,
        ErrorKind::Validation,
        ErrorKind::Conversion,
        ErrorKind::Network,
        ErrorKind::Unknown,
    ] {
        assert!(!suggestions_for(kind).is_empty());
    }
}

#[test]
fn test_explicit_kind_and_context_travel_together() {
    let hub = ErrorHub::new();
    let mut context = std::collections::BTreeMap::new();
    context.insert("path".to_string(), "/tmp/a.txt".to_string());

    let classified = hub.report(
        anyhow::anyhow!("source vanished before renaming"),
        Some(ErrorKind::RaceCondition),
        context,
    );

    assert_eq!(classified.kind, ErrorKind::RaceCondition);
    assert_eq!(classified.context.get("path").unwrap(), "/tmp/a.txt");
}
