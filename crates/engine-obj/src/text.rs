//! Line helpers shared by the OBJ and MTL decoders.

/// Drop everything from the first `#` on.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split a trimmed, non-empty line into its keyword and the trimmed rest.
pub(crate) fn directive(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim()),
        None => (line, ""),
    }
}
