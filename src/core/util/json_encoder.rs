//! JSON body encoding
//!
//! Encodes a payload the way a streaming JSON encoder does on the wire: compact
//! output, HTML-sensitive characters escaped inside strings, and a single `\n`
//! terminating each document. The whole document is rendered before anything
//! reaches the writer, so an encoding failure leaves the body untouched.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// Encoding switches carried by a `JsonWriter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Escape `<`, `>` and `&` as `\uXXXX` inside strings. U+2028 and
    /// U+2029 are escaped regardless.
    pub escape_html: bool,
    /// Terminate every document with `\n`.
    pub trailing_newline: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            escape_html: true,
            trailing_newline: true,
        }
    }
}

/// Compact formatter that escapes U+2028 and U+2029 in strings and keys, and
/// `<`, `>`, `&` as well when `escape_html` is set.
#[derive(Debug, Clone, Copy)]
pub struct HtmlSafeFormatter {
    escape_html: bool,
}

impl HtmlSafeFormatter {
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }
}

impl Default for HtmlSafeFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (idx, ch) in fragment.char_indices() {
            let escaped: &[u8] = match ch {
                '<' if self.escape_html => b"\\u003c",
                '>' if self.escape_html => b"\\u003e",
                '&' if self.escape_html => b"\\u0026",
                '\u{2028}' => b"\\u2028",
                '\u{2029}' => b"\\u2029",
                _ => continue,
            };

            if start < idx {
                writer.write_all(&fragment.as_bytes()[start..idx])?;
            }
            writer.write_all(escaped)?;
            start = idx + ch.len_utf8();
        }

        if start < fragment.len() {
            writer.write_all(&fragment.as_bytes()[start..])?;
        }

        Ok(())
    }
}

pub struct JsonEncoder;

impl JsonEncoder {
    /// Render `value` into a standalone byte buffer.
    pub fn to_vec<T>(value: &T, options: EncoderOptions) -> serde_json::Result<Vec<u8>>
    where
        T: ?Sized + Serialize,
    {
        let mut buf = Vec::with_capacity(128);

        let mut ser = serde_json::Serializer::with_formatter(
            &mut buf,
            HtmlSafeFormatter::new(options.escape_html),
        );
        value.serialize(&mut ser)?;

        if options.trailing_newline {
            buf.push(b'\n');
        }

        Ok(buf)
    }

    /// Render `value` and hand the finished document to `writer` in one write.
    pub fn encode<W, T>(writer: &mut W, value: &T, options: EncoderOptions) -> serde_json::Result<()>
    where
        W: ?Sized + io::Write,
        T: ?Sized + Serialize,
    {
        let buf = Self::to_vec(value, options)?;
        writer.write_all(&buf).map_err(serde_json::Error::io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn render(value: &serde_json::Value, options: EncoderOptions) -> String {
        String::from_utf8(JsonEncoder::to_vec(value, options).unwrap()).unwrap()
    }

    #[test]
    fn default_output_is_compact_with_newline() {
        let out = render(&json!({"a": [1, 2], "b": null}), EncoderOptions::default());
        assert_eq!(out, "{\"a\":[1,2],\"b\":null}\n");
    }

    #[test]
    fn escapes_html_characters_in_values() {
        let out = render(&json!("<b>fish & chips</b>"), EncoderOptions::default());
        assert_eq!(out, "\"\\u003cb\\u003efish \\u0026 chips\\u003c/b\\u003e\"\n");
    }

    #[test]
    fn escapes_line_and_paragraph_separators() {
        let out = render(&json!("a\u{2028}b\u{2029}c"), EncoderOptions::default());
        assert_eq!(out, "\"a\\u2028b\\u2029c\"\n");
    }

    #[test]
    fn escapes_map_keys_too() {
        let mut map = BTreeMap::new();
        map.insert("<key>", 1);
        let out = String::from_utf8(JsonEncoder::to_vec(&map, EncoderOptions::default()).unwrap())
            .unwrap();
        assert_eq!(out, "{\"\\u003ckey\\u003e\":1}\n");
    }

    #[test]
    fn keeps_standard_escapes_and_multibyte_text() {
        let out = render(&json!("tab\t\"quote\" ünï <"), EncoderOptions::default());
        assert_eq!(out, "\"tab\\t\\\"quote\\\" ünï \\u003c\"\n");
    }

    #[test]
    fn options_can_disable_escaping_and_newline() {
        let options = EncoderOptions {
            escape_html: false,
            trailing_newline: false,
        };
        let out = render(&json!({"html": "<p>&</p>"}), options);
        assert_eq!(out, "{\"html\":\"<p>&</p>\"}");
    }

    #[test]
    fn separators_are_escaped_even_without_html_escaping() {
        let options = EncoderOptions {
            escape_html: false,
            trailing_newline: true,
        };
        let out = render(&json!("<a\u{2028}b\u{2029}>"), options);
        assert_eq!(out, "\"<a\\u2028b\\u2029>\"\n");
    }

    #[test]
    fn failed_encoding_writes_nothing() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "tuple keys are not valid JSON");

        let mut sink: Vec<u8> = Vec::new();
        let result = JsonEncoder::encode(&mut sink, &bad, EncoderOptions::default());

        assert!(result.is_err());
        assert!(sink.is_empty());
    }
}
