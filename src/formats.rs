//! Format descriptor registry
//!
//! One static table describes every file format the SDK knows about: name,
//! display metadata, extension, MIME types, and capability flags. The name is
//! the sole lookup key; descriptors are defined once and never mutated.
//! Capability queries answer without constructing an encoder.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::export::ExportError;

/// Immutable capability record describing one file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Unique lowercase registry key
    pub name: &'static str,
    /// Display name
    pub friendly_name: &'static str,
    /// File extension, including the leading dot; unique per format
    pub extension: &'static str,
    /// Registered MIME types, most specific first; empty when none exists
    pub mime_types: &'static [&'static str],
    /// Free-text grouping (e.g., "Database", "Data Interchange")
    pub category: &'static str,
    /// Reference link
    pub info_url: &'static str,
    pub is_binary: bool,
    pub is_exportable: bool,
    pub is_minifiable: bool,
    pub is_parseable: bool,
}

impl FormatDescriptor {
    /// Whether the given capability flag is set.
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Binary => self.is_binary,
            Capability::Exportable => self.is_exportable,
            Capability::Minifiable => self.is_minifiable,
            Capability::Parseable => self.is_parseable,
        }
    }

    /// The preferred MIME type, when one is registered.
    pub fn primary_mime_type(&self) -> Option<&'static str> {
        self.mime_types.first().copied()
    }
}

/// Selector for one of the four capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Binary,
    Exportable,
    Minifiable,
    Parseable,
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Capability::Binary),
            "exportable" => Ok(Capability::Exportable),
            "minifiable" => Ok(Capability::Minifiable),
            "parseable" => Ok(Capability::Parseable),
            other => Err(format!(
                "unknown capability '{}' (expected binary, exportable, minifiable, or parseable)",
                other
            )),
        }
    }
}

const fn descriptor(
    name: &'static str,
    friendly_name: &'static str,
    extension: &'static str,
    mime_types: &'static [&'static str],
    category: &'static str,
    info_url: &'static str,
) -> FormatDescriptor {
    FormatDescriptor {
        name,
        friendly_name,
        extension,
        mime_types,
        category,
        info_url,
        is_binary: false,
        is_exportable: false,
        is_minifiable: false,
        is_parseable: false,
    }
}

const fn binary(mut d: FormatDescriptor) -> FormatDescriptor {
    d.is_binary = true;
    d
}

const fn exportable(mut d: FormatDescriptor) -> FormatDescriptor {
    d.is_exportable = true;
    d
}

const fn minifiable(mut d: FormatDescriptor) -> FormatDescriptor {
    d.is_minifiable = true;
    d
}

const fn parseable(mut d: FormatDescriptor) -> FormatDescriptor {
    d.is_parseable = true;
    d
}

/// Every format the SDK knows about, in registration order.
static REGISTRY: &[FormatDescriptor] = &[
    parseable(exportable(descriptor(
        "csv",
        "Comma-Separated Values",
        ".csv",
        &["text/csv"],
        "Tabular Text",
        "https://en.wikipedia.org/wiki/Comma-separated_values",
    ))),
    parseable(exportable(descriptor(
        "tsv",
        "Tab-Separated Values",
        ".tsv",
        &["text/tab-separated-values"],
        "Tabular Text",
        "https://en.wikipedia.org/wiki/Tab-separated_values",
    ))),
    exportable(descriptor(
        "dat",
        "Generic Data File",
        ".dat",
        &[],
        "Tabular Text",
        "https://en.wikipedia.org/wiki/Data_file",
    )),
    parseable(minifiable(exportable(descriptor(
        "json",
        "JSON",
        ".json",
        &["application/json"],
        "Data Interchange",
        "https://www.json.org/",
    )))),
    parseable(exportable(descriptor(
        "yaml",
        "YAML",
        ".yaml",
        &["application/x-yaml", "text/yaml"],
        "Data Interchange",
        "https://yaml.org/",
    ))),
    minifiable(exportable(descriptor(
        "xml",
        "XML",
        ".xml",
        &["application/xml", "text/xml"],
        "Data Interchange",
        "https://www.w3.org/XML/",
    ))),
    exportable(descriptor(
        "plist",
        "Property List",
        ".plist",
        &["application/x-plist"],
        "Data Interchange",
        "https://en.wikipedia.org/wiki/Property_list",
    )),
    exportable(descriptor(
        "phpd",
        "PHP Serialized Data",
        ".phpd",
        &[],
        "Data Interchange",
        "https://www.php.net/manual/en/function.serialize.php",
    )),
    parseable(exportable(binary(descriptor(
        "msgpack",
        "MessagePack",
        ".msgpack",
        &["application/x-msgpack"],
        "Data Interchange",
        "https://msgpack.org/",
    )))),
    exportable(descriptor(
        "sql",
        "SQL",
        ".sql",
        &["application/sql", "text/x-sql"],
        "Database",
        "https://en.wikipedia.org/wiki/SQL",
    )),
    exportable(binary(descriptor(
        "sqlite3",
        "SQLite 3",
        ".sqlite3",
        &["application/x-sqlite3"],
        "Database",
        "https://www.sqlite.org/fileformat2.html",
    ))),
    // Acquisition-side source format: registered for capability queries and
    // extension mapping, never a valid export target.
    parseable(binary(descriptor(
        "xls",
        "Microsoft Excel Spreadsheet",
        ".xls",
        &["application/vnd.ms-excel"],
        "Spreadsheet",
        "https://en.wikipedia.org/wiki/Microsoft_Excel",
    ))),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static FormatDescriptor>> =
    Lazy::new(|| REGISTRY.iter().map(|d| (d.name, d)).collect());

/// Every registered descriptor, in registration order.
pub fn all() -> &'static [FormatDescriptor] {
    REGISTRY
}

/// Resolve a format name to its descriptor.
pub fn lookup(name: &str) -> Result<&'static FormatDescriptor, ExportError> {
    BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| ExportError::UnknownFormat(name.to_string()))
}

/// All descriptors whose given capability flag is set, in registration order.
///
/// The sequence is lazy and restartable; callers requiring sorted output must
/// sort explicitly.
pub fn descriptors_where(capability: Capability) -> impl Iterator<Item = &'static FormatDescriptor> {
    REGISTRY.iter().filter(move |d| d.has(capability))
}
