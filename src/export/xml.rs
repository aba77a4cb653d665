//! XML encoder
//!
//! Writes a `<dataset>` document through the `quick-xml` writer: one
//! `<table>` element per table, one `<record>` per record. Nested maps become
//! nested elements and arrays repeat an `<item>` element. Output is indented
//! unless minified.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

use crate::dataset::{Dataset, Record};
use crate::export::{EncodedStream, ExportError};

pub fn encode(dataset: &Dataset, minify: bool) -> Result<EncodedStream, ExportError> {
    let buffer: Vec<u8> = Vec::new();
    let mut writer = if minify {
        Writer::new(buffer)
    } else {
        Writer::new_with_indent(buffer, b' ', 2)
    };

    write_document(&mut writer, dataset).map_err(|e| ExportError::encode("xml", e))?;

    let text = String::from_utf8(writer.into_inner()).map_err(|e| ExportError::encode("xml", e))?;
    Ok(EncodedStream::Text(text))
}

fn write_document<W: Write>(writer: &mut Writer<W>, dataset: &Dataset) -> quick_xml::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("dataset");
    root.push_attribute(("name", dataset.name.as_str()));
    writer.write_event(Event::Start(root))?;

    for table in &dataset.tables {
        let mut element = BytesStart::new("table");
        element.push_attribute(("name", table.name.as_str()));
        writer.write_event(Event::Start(element))?;
        for record in &table.records {
            write_record(writer, record)?;
        }
        writer.write_event(Event::End(BytesEnd::new("table")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("dataset")))?;
    Ok(())
}

fn write_record<W: Write>(writer: &mut Writer<W>, record: &Record) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("record")))?;
    for (field, value) in record {
        write_value(writer, field, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new("record")))
}

fn write_value<W: Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> quick_xml::Result<()> {
    match value {
        Value::Null => writer.write_event(Event::Empty(BytesStart::new(name))),
        Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for (field, nested) in map {
                write_value(writer, field, nested)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))
        }
        Value::Array(items) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for item in items {
                write_value(writer, "item", item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))
        }
        scalar => {
            let text = match scalar {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new(name)))
        }
    }
}
