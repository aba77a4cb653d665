//! Format registry tests

use geodata_sdk::formats::{all, descriptors_where, lookup, Capability};
use geodata_sdk::ExportError;

#[test]
fn lookup_round_trips_every_registered_name() {
    for descriptor in all() {
        let found = lookup(descriptor.name).unwrap();
        assert_eq!(found.name, descriptor.name);
    }
}

#[test]
fn lookup_unknown_name_fails_with_unknown_format() {
    let err = lookup("parquet").unwrap_err();
    match err {
        ExportError::UnknownFormat(name) => assert_eq!(name, "parquet"),
        other => panic!("expected UnknownFormat, got {:?}", other),
    }
}

#[test]
fn lookup_is_case_sensitive_on_the_lowercase_key() {
    assert!(lookup("JSON").is_err());
    assert!(lookup("json").is_ok());
}

#[test]
fn capability_query_preserves_registration_order() {
    let exportable: Vec<&str> = descriptors_where(Capability::Exportable)
        .map(|d| d.name)
        .collect();
    let expected: Vec<&str> = all()
        .iter()
        .filter(|d| d.is_exportable)
        .map(|d| d.name)
        .collect();
    assert_eq!(exportable, expected);
}

#[test]
fn capability_query_is_restartable() {
    let first: Vec<&str> = descriptors_where(Capability::Binary).map(|d| d.name).collect();
    let second: Vec<&str> = descriptors_where(Capability::Binary).map(|d| d.name).collect();
    assert_eq!(first, second);
    assert!(first.contains(&"sqlite3"));
    assert!(first.contains(&"msgpack"));
}

#[test]
fn xls_is_a_source_format_only() {
    let xls = lookup("xls").unwrap();
    assert!(xls.is_parseable);
    assert!(!xls.is_exportable);
    assert!(xls.is_binary);
}

#[test]
fn minifiable_formats_are_exportable_text_formats() {
    for descriptor in descriptors_where(Capability::Minifiable) {
        assert!(descriptor.is_exportable, "{} minifiable but not exportable", descriptor.name);
        assert!(!descriptor.is_binary, "{} minifiable but binary", descriptor.name);
    }
}
