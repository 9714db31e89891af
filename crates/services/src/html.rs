use html_escape::decode_html_entities;

/// Decode HTML entities the providers embed in text (`&quot;`, `&#039;`, `&eacute;`, ...).
#[must_use]
pub fn decode_entities(raw: &str) -> String {
    decode_html_entities(raw).into_owned()
}
