/// Character that replaces each run of unsafe characters
pub const SEPARATOR: char = '_';

/// Reduce a display name to a lowercase `[a-z0-9_]` token usable as a file
/// or directory name.
///
/// Every run of characters outside `[a-z0-9]` collapses to a single
/// separator and separators never lead or trail, so the function is
/// idempotent. Input with no ASCII alphanumerics yields an empty token.
pub fn sanitize_name(name: &str) -> String {
    let mut token = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !token.is_empty() {
                token.push(SEPARATOR);
            }
            pending_separator = false;
            token.push(ch);
        } else {
            pending_separator = true;
        }
    }

    token
}
