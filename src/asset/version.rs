//! Cache-busting versions for linked assets.
//!
//! Linked assets carry `?v={version}` derived from the file contents, so a
//! changed file gets a new URL and browsers re-fetch it.

use crate::utils::hash;

/// Version of a file's contents (8 hex chars).
pub fn version(content: &[u8]) -> String {
    hash::content_fingerprint(&[content])
}

/// `base_url?v=abc12345`, or `&v=` when `base_url` already has a query.
pub fn versioned_url(base_url: &str, content: &[u8]) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", base_url, separator, version(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_follows_content() {
        let v1 = version(b"body { color: red; }");
        assert_eq!(v1.len(), 8);
        assert_eq!(v1, version(b"body { color: red; }"));
        assert_ne!(v1, version(b"body { color: blue; }"));
    }

    #[test]
    fn test_versioned_url() {
        let url = versioned_url("/assets/style.css", b"body {}");
        assert!(url.starts_with("/assets/style.css?v="));
        assert_eq!(url.len(), "/assets/style.css?v=".len() + 8);

        let url = versioned_url("/assets/style.css?theme=dark", b"body {}");
        assert!(url.starts_with("/assets/style.css?theme=dark&v="));
    }
}
