//! Response body excerpts.

/// Marker appended when a body is cut short.
pub const ELLIPSIS: &str = "...";

/// First `limit` characters of `body`, with [`ELLIPSIS`] appended iff the
/// body is longer. Empty bodies yield `None`.
pub fn snippet(body: &str, limit: usize) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    let mut chars = body.char_indices();
    match chars.nth(limit) {
        Some((cut, _)) => Some(format!("{}{}", &body[..cut], ELLIPSIS)),
        None => Some(body.to_string()),
    }
}
