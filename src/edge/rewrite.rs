//! Default document resolution.

/// Resolve a directory-style URI to its index document.
///
/// - `/docs/` → `/docs/index.html`
/// - `/about` → `/about/index.html` (no `.` anywhere in the URI)
/// - `/app.js`, `/a.b/c` → unchanged, returns `None`
///
/// The extension check is a plain substring test over the whole URI, not
/// just the last segment. No decoding or sanitization is done.
pub fn resolve_default_document(uri: &str, index_document: &str) -> Option<String> {
    if uri.ends_with('/') {
        Some(format!("{uri}{index_document}"))
    } else if !uri.contains('.') {
        Some(format!("{uri}/{index_document}"))
    } else {
        None
    }
}
