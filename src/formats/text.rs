//! Line and token cleanup shared by the line-oriented formats

/// Split text into trimmed, non-blank lines
///
/// Both `\n` and `\r` count as line breaks, so CRLF and bare CR files
/// normalize the same way as LF files.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    normalize_tokens(text.split(|c: char| c == '\n' || c == '\r'))
}

/// Trim every token and drop the ones left empty
pub fn normalize_tokens<'a, I>(tokens: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
