//! Property List encoder
//!
//! A dedicated XML plist 1.0 writer for the value subset the datasets use:
//! dictionaries (insertion order preserved), arrays, strings, integers,
//! reals, and booleans. Plist has no null, so `Null` renders as an empty
//! `<string/>`. Scoped here so no shared serializer needs its behavior
//! overridden.

use serde_json::Value;

use crate::dataset::Dataset;
use crate::export::EncodedStream;

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" ",
    "\"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
    "<plist version=\"1.0\">\n",
);

pub fn encode(dataset: &Dataset) -> EncodedStream {
    let value = dataset.to_nested_value();
    let mut out = String::from(HEADER);
    write_value(&mut out, &value, 0);
    out.push_str("</plist>\n");
    EncodedStream::Text(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    let indent = "\t".repeat(depth);
    match value {
        Value::Null => out.push_str(&format!("{}<string/>\n", indent)),
        Value::Bool(true) => out.push_str(&format!("{}<true/>\n", indent)),
        Value::Bool(false) => out.push_str(&format!("{}<false/>\n", indent)),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                out.push_str(&format!("{}<integer>{}</integer>\n", indent, int));
            } else if let Some(int) = number.as_u64() {
                out.push_str(&format!("{}<integer>{}</integer>\n", indent, int));
            } else {
                // Finite by construction: serde_json numbers are never NaN.
                out.push_str(&format!(
                    "{}<real>{}</real>\n",
                    indent,
                    number.as_f64().unwrap_or_default()
                ));
            }
        }
        Value::String(text) => {
            out.push_str(&format!("{}<string>{}</string>\n", indent, escape_xml(text)));
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str(&format!("{}<array/>\n", indent));
                return;
            }
            out.push_str(&format!("{}<array>\n", indent));
            for item in items {
                write_value(out, item, depth + 1);
            }
            out.push_str(&format!("{}</array>\n", indent));
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str(&format!("{}<dict/>\n", indent));
                return;
            }
            out.push_str(&format!("{}<dict>\n", indent));
            for (key, nested) in map {
                out.push_str(&format!("{}\t<key>{}</key>\n", indent, escape_xml(key)));
                write_value(out, nested, depth + 1);
            }
            out.push_str(&format!("{}</dict>\n", indent));
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(value: Value) -> String {
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        out
    }

    #[test]
    fn scalars_render_as_plist_elements() {
        assert_eq!(rendered(serde_json::json!(27)), "<integer>27</integer>\n");
        assert_eq!(rendered(serde_json::json!(-3.5)), "<real>-3.5</real>\n");
        assert_eq!(rendered(serde_json::json!(true)), "<true/>\n");
        assert_eq!(rendered(serde_json::json!(false)), "<false/>\n");
        assert_eq!(rendered(Value::Null), "<string/>\n");
        assert_eq!(
            rendered(serde_json::json!("São Paulo")),
            "<string>São Paulo</string>\n"
        );
    }

    #[test]
    fn strings_are_xml_escaped() {
        assert_eq!(
            rendered(serde_json::json!("a & b < c")),
            "<string>a &amp; b &lt; c</string>\n"
        );
    }

    #[test]
    fn dict_keys_keep_insertion_order() {
        let out = rendered(serde_json::json!({"id": 35, "name": "São Paulo"}));
        assert_eq!(
            out,
            "<dict>\n\t<key>id</key>\n\t<integer>35</integer>\n\t<key>name</key>\n\t<string>São Paulo</string>\n</dict>\n"
        );
    }

    #[test]
    fn empty_containers_self_close() {
        assert_eq!(rendered(serde_json::json!([])), "<array/>\n");
        assert_eq!(rendered(serde_json::json!({})), "<dict/>\n");
    }

    #[test]
    fn document_has_plist_envelope() {
        let dataset = Dataset::new("dtb");
        let out = encode(&dataset);
        let text = out.as_text().unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE plist"));
        assert!(text.ends_with("</plist>\n"));
    }
}
