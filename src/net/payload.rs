//! Payload input handling
//!
//! A payload is typed either as hex text (`DE AD BE EF`) or as plain text
//! sent as its UTF-8 bytes.

/// Characters removed from inside hex payloads. Nothing else is stripped.
const LAYOUT_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// How the operator's payload text is to be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Pairs of hex digits; spaces, tabs and line breaks are ignored
    Hex,
    /// Text sent as its UTF-8 encoding
    Text,
}

impl PayloadFormat {
    /// Convert payload text to bytes. `None` only for malformed hex.
    pub fn decode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            PayloadFormat::Hex => parse_hex_payload(text),
            PayloadFormat::Text => Some(encode_text_payload(text)),
        }
    }
}

/// Parse hex payload text into bytes.
///
/// The text is trimmed, then every space, tab, CR and LF is removed from
/// anywhere inside it. What remains must have even length and consist of
/// hex digit pairs, each of which becomes one byte.
pub fn parse_hex_payload(text: &str) -> Option<Vec<u8>> {
    let cleaned = strip_layout_whitespace(text.trim());
    let digits: Vec<char> = cleaned.chars().collect();
    if digits.len() % 2 != 0 {
        return None;
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0].to_digit(16)?;
            let lo = pair[1].to_digit(16)?;
            Some((hi << 4 | lo) as u8)
        })
        .collect()
}

/// Plain text payloads are sent as their UTF-8 bytes.
pub fn encode_text_payload(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

fn strip_layout_whitespace(s: &str) -> String {
    s.chars().filter(|c| !LAYOUT_WHITESPACE.contains(c)).collect()
}
