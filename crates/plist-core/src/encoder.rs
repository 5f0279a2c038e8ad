//! Plist encoders — render a [`Value`] tree as OpenStep text or XML.
//!
//! Both encoders are pure, synchronous tree walks: a recursive descent that
//! appends to a single output `String`, threading the nesting level for tab
//! indentation in pretty mode. Dictionaries are emitted in ascending key
//! order (the storage order of the sorted map), so output is deterministic
//! for a given `(format, pretty)` pair.
//!
//! Dates have no representation in either grammar and always fail with
//! [`PlistError::Unsupported`]. When that happens mid-walk, the partially
//! built buffer is dropped inside [`encode`]; callers only ever see a
//! complete document or an error.
//!
//! # Example
//! ```
//! use plist_core::{encode, Format, Value};
//!
//! let mut root = Value::default();
//! *root.entry("name").unwrap() = "screen".into();
//! *root.entry("depth").unwrap() = 32.into();
//! let text = encode(&root, Format::Text, false).unwrap();
//! assert_eq!(text, "// !$*UTF8*$!\n{depth=32;name=screen;}");
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{PlistError, Result};
use crate::value::{Kind, Value};

/// Output grammar selector for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// OpenStep/ASCII-style text plist: `{key=value;}`, `(a,b)`, `<0A FF>`.
    Text,
    /// Apple XML plist v1.0 with the standard DTD wrapper.
    Xml,
}

const TEXT_PREAMBLE: &str = "// !$*UTF8*$!\n";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const XML_DOCTYPE: &str = r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#;

/// Encode a value tree in the given format.
///
/// `pretty` switches on indented rendering: one dictionary entry or array
/// element per line, one tab per nesting level. Compact rendering emits no
/// whitespace beyond what the grammar requires. The transformation never
/// mutates the tree and the same inputs always produce byte-identical output.
pub fn encode(value: &Value, format: Format, pretty: bool) -> Result<String> {
    match format {
        Format::Text => encode_text(value, pretty),
        Format::Xml => encode_xml(value, pretty),
    }
}

/// Push `level` tabs.
fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push('\t');
    }
}

// ============================================================================
// OpenStep text format
// ============================================================================

fn encode_text(value: &Value, pretty: bool) -> Result<String> {
    let mut out = String::from(TEXT_PREAMBLE);
    text_value(value, &mut out, pretty, 0)?;
    Ok(out)
}

/// Emit a string (or dictionary key) in text-plist form. Strings made up
/// entirely of alphanumerics and `_ $ / : . -` go out bare; anything else is
/// wrapped in double quotes with `"` and `\` backslash-escaped. The empty
/// string is always `""`.
fn text_string(s: &str, out: &mut String) {
    if s.is_empty() {
        out.push_str("\"\"");
        return;
    }
    let bare = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-'));
    if !bare {
        out.push('"');
    }
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    if !bare {
        out.push('"');
    }
}

fn text_value(value: &Value, out: &mut String, pretty: bool, level: usize) -> Result<()> {
    match value {
        Value::Dictionary(entries) => {
            out.push('{');
            for (key, child) in entries {
                if pretty {
                    out.push('\n');
                    push_indent(out, level + 1);
                }
                text_string(key, out);
                if pretty {
                    out.push(' ');
                }
                out.push('=');
                if pretty {
                    out.push(' ');
                }
                text_value(child, out, pretty, level + 1)?;
                // trailing semicolon is mandatory
                out.push(';');
            }
            if pretty {
                out.push('\n');
                push_indent(out, level);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('(');
            for (i, child) in items.iter().enumerate() {
                // trailing comma is optional, so none is emitted
                if i > 0 {
                    out.push(',');
                }
                if pretty {
                    out.push('\n');
                    push_indent(out, level + 1);
                }
                text_value(child, out, pretty, level + 1)?;
            }
            if pretty {
                out.push('\n');
                push_indent(out, level);
            }
            out.push(')');
        }
        Value::String(s) => text_string(s, out),
        Value::Real(r) => out.push_str(&format!("{:.6}", r)),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Boolean(b) => out.push_str(if *b { "YES" } else { "NO" }),
        Value::Data(bytes) => {
            out.push('<');
            for (i, b) in bytes.iter().enumerate() {
                if pretty && i > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{:02X}", b));
            }
            out.push('>');
        }
        Value::Date(_) => return Err(PlistError::Unsupported(Kind::Date)),
    }
    Ok(())
}

// ============================================================================
// XML plist v1.0
// ============================================================================

fn encode_xml(value: &Value, pretty: bool) -> Result<String> {
    let mut out = String::from(XML_DECLARATION);
    if pretty {
        out.push('\n');
    }
    out.push_str(XML_DOCTYPE);
    if pretty {
        out.push('\n');
    }
    out.push_str("<plist version=\"1.0\">");
    if pretty {
        out.push('\n');
    }
    xml_value(value, &mut out, pretty, 0)?;
    if pretty {
        out.push('\n');
    }
    out.push_str("</plist>");
    Ok(out)
}

/// Escape text content for XML. Only `<`, `>` and `&` are rewritten; the
/// plist grammar never puts strings in attribute position, so quotes pass
/// through untouched.
fn xml_escape(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

fn xml_value(value: &Value, out: &mut String, pretty: bool, level: usize) -> Result<()> {
    match value {
        Value::Dictionary(entries) => {
            out.push_str("<dict>");
            if pretty {
                out.push('\n');
            }
            for (key, child) in entries {
                if pretty {
                    push_indent(out, level + 1);
                }
                out.push_str("<key>");
                xml_escape(key, out);
                out.push_str("</key>");
                if pretty {
                    out.push('\n');
                    push_indent(out, level + 1);
                }
                xml_value(child, out, pretty, level + 1)?;
                if pretty {
                    out.push('\n');
                }
            }
            if pretty {
                push_indent(out, level);
            }
            out.push_str("</dict>");
        }
        Value::Array(items) => {
            out.push_str("<array>");
            if pretty {
                out.push('\n');
            }
            for child in items {
                if pretty {
                    push_indent(out, level + 1);
                }
                xml_value(child, out, pretty, level + 1)?;
                if pretty {
                    out.push('\n');
                }
            }
            if pretty {
                push_indent(out, level);
            }
            out.push_str("</array>");
        }
        Value::String(s) => {
            out.push_str("<string>");
            xml_escape(s, out);
            out.push_str("</string>");
        }
        Value::Real(r) => {
            out.push_str(&format!("<real>{:.6}</real>", r));
        }
        Value::Integer(i) => {
            out.push_str(&format!("<integer>{}</integer>", i));
        }
        Value::Boolean(b) => {
            out.push_str(if *b { "<true/>" } else { "<false/>" });
        }
        Value::Data(bytes) => {
            out.push_str("<data>");
            out.push_str(&BASE64.encode(bytes));
            out.push_str("</data>");
        }
        Value::Date(_) => return Err(PlistError::Unsupported(Kind::Date)),
    }
    Ok(())
}
