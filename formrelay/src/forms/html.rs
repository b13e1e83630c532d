//! HTML fragments shared by the message builders
//!
//! Submitted values are interpolated verbatim. Nothing here escapes HTML.

/// `<p><strong>{label}:</strong> {value}</p>`
pub(crate) fn field(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {value}</p>\n")
}

/// Replace every `\n` with `<br>`
pub(crate) fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Message heading followed by the submitted text
pub(crate) fn message_block(message: &str) -> String {
    format!("<h3>Message:</h3><p>{}</p>\n", line_breaks(message))
}

/// Upper-case the first character, leave the rest untouched
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
