//! PHP serialization encoder
//!
//! A dedicated writer for PHP's `serialize()` wire format: `N;` null,
//! `b:0;`/`b:1;` booleans, `i:` integers, `d:` doubles, `s:<bytelen>:"...";`
//! strings (byte length, raw content, no escaping), and `a:<count>:{...}`
//! arrays. Map keys that look like canonical integers serialize as integer
//! keys, matching PHP's array key coercion.

use serde_json::Value;

use crate::dataset::Dataset;
use crate::export::EncodedStream;

pub fn encode(dataset: &Dataset) -> EncodedStream {
    let value = dataset.to_nested_value();
    let mut out = String::new();
    write_value(&mut out, &value);
    EncodedStream::Text(out)
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("N;"),
        Value::Bool(flag) => out.push_str(if *flag { "b:1;" } else { "b:0;" }),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                out.push_str(&format!("i:{};", int));
            } else if let Some(int) = number.as_u64() {
                out.push_str(&format!("i:{};", int));
            } else {
                out.push_str(&format!("d:{};", number.as_f64().unwrap_or_default()));
            }
        }
        Value::String(text) => write_string(out, text),
        Value::Array(items) => {
            out.push_str(&format!("a:{}:{{", items.len()));
            for (index, item) in items.iter().enumerate() {
                out.push_str(&format!("i:{};", index));
                write_value(out, item);
            }
            out.push('}');
        }
        Value::Object(map) => {
            out.push_str(&format!("a:{}:{{", map.len()));
            for (key, nested) in map {
                write_key(out, key);
                write_value(out, nested);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, text: &str) {
    out.push_str(&format!("s:{}:\"{}\";", text.len(), text));
}

// PHP coerces canonical integer strings to integer array keys.
fn write_key(out: &mut String, key: &str) {
    match key.parse::<i64>() {
        Ok(int) if int.to_string() == key => out.push_str(&format!("i:{};", int)),
        _ => write_string(out, key),
    }
}
