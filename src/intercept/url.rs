//! Base URL handling

use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, runtime-mutable base URL
#[derive(Debug, Clone, Default)]
pub struct BaseUrl(Arc<RwLock<String>>);

impl BaseUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(url.into())))
    }

    pub fn get(&self) -> String {
        self.0.read().clone()
    }

    pub fn set(&self, url: impl Into<String>) {
        *self.0.write() = url.into();
    }
}

/// Turns full request URLs into the short form recorded in the history
#[derive(Debug, Clone)]
pub struct UrlNormalizer {
    base_url: BaseUrl,
    origin: Option<String>,
}

impl UrlNormalizer {
    pub fn new(base_url: BaseUrl, origin: Option<String>) -> Self {
        Self { base_url, origin }
    }

    /// Strip the base URL when it is a prefix, else the origin.
    /// A URL that would become empty is kept whole.
    pub fn relative(&self, url: &str) -> String {
        let base = self.base_url.get();
        let stripped = [Some(base.as_str()), self.origin.as_deref()]
            .into_iter()
            .flatten()
            .filter(|prefix| !prefix.is_empty())
            .find_map(|prefix| url.strip_prefix(prefix))
            .unwrap_or(url);

        if stripped.is_empty() {
            url.to_string()
        } else {
            stripped.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_base_url() {
        let n = UrlNormalizer::new(BaseUrl::new("http://api.test"), None);
        assert_eq!(n.relative("http://api.test/boards/5"), "/boards/5");
        assert_eq!(n.relative("/boards/5"), "/boards/5");
        assert_eq!(n.relative("http://other.test/x"), "http://other.test/x");
    }

    #[test]
    fn test_exact_base_kept_whole() {
        let n = UrlNormalizer::new(BaseUrl::new("http://api.test"), None);
        assert_eq!(n.relative("http://api.test"), "http://api.test");
    }

    #[test]
    fn test_origin_fallback() {
        let base = BaseUrl::default();
        let n = UrlNormalizer::new(base.clone(), Some("http://host:8080".into()));
        assert_eq!(n.relative("http://host:8080/api/me"), "/api/me");

        base.set("http://host:8080/api");
        assert_eq!(n.relative("http://host:8080/api/me"), "/me");
    }

    #[test]
    fn test_origin_used_when_base_does_not_match() {
        let n = UrlNormalizer::new(
            BaseUrl::new("http://api.test"),
            Some("http://host:8080".into()),
        );
        assert_eq!(n.relative("http://host:8080/boards/5"), "/boards/5");
        assert_eq!(n.relative("http://api.test/boards/5"), "/boards/5");
        assert_eq!(n.relative("http://elsewhere/x"), "http://elsewhere/x");
    }
}
