//! Double-quoted string values as the RouterOS interpreter reads them.

/// Escape characters that are special inside a double-quoted string.
///
/// `\` and `"` would end or corrupt the string and `$` would start a
/// variable substitution on import.
pub(crate) fn escape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | '$') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Wrap `value` in double quotes, escaped.
pub(crate) fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_quoted(value))
}
