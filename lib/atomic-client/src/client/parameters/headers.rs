use http::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

use crate::client::error::AtomicError;

/// Ordered collection of header overrides attached to a call.
///
/// Names are matched case-insensitively when applied to the outbound request:
/// a later entry for the same name replaces an earlier one.
///
/// ```rust
/// use atomic_client::CallHeaders;
///
/// let headers = CallHeaders::new()
///     .add_header("X-Request-Id", "req-1")
///     .add_header("Accept-Language", "fr");
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    headers: IndexMap<String, String>,
}

impl CallHeaders {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a header.
    #[must_use]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    /// Merges two collections, `other` takes precedence.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (name, value) in other.headers {
            self.insert(name, value);
        }
        self
    }

    // The newest entry moves last, whatever the case of its previous spelling.
    fn insert(&mut self, name: String, value: String) {
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value);
    }

    /// Returns the value registered for `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if no header is registered.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of registered headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Writes every header into `target`, replacing existing values.
    pub(in crate::client) fn apply_to(&self, target: &mut HeaderMap) -> Result<(), AtomicError> {
        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str())?;
            let value = HeaderValue::try_from(value.as_str())?;
            target.insert(name, value);
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for CallHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |headers, (name, value)| headers.add_header(name, value))
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;

    use super::*;

    #[test]
    fn should_start_empty() {
        let headers = CallHeaders::new();

        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn should_merge_with_other_taking_precedence() {
        let base = CallHeaders::new()
            .add_header("X-Trace", "base")
            .add_header("X-Only-Base", "1");
        let other = CallHeaders::new().add_header("X-Trace", "other");

        let merged = base.merge(other);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("x-trace"), Some("other"));
        assert_eq!(merged.get("X-Only-Base"), Some("1"));
    }

    #[test]
    fn should_replace_existing_header_when_applied() {
        let mut target = HeaderMap::new();
        target.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        CallHeaders::new()
            .add_header("Content-Type", "text/csv")
            .apply_to(&mut target)
            .expect("valid headers");

        assert_eq!(target.get(CONTENT_TYPE).map(HeaderValue::as_bytes), Some(&b"text/csv"[..]));
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn should_let_latest_case_variant_win() {
        let headers = CallHeaders::new()
            .add_header("X-A", "1")
            .add_header("x-a", "2")
            .add_header("X-A", "3");
        let mut target = HeaderMap::new();

        headers.apply_to(&mut target).expect("valid headers");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("x-a"), Some("3"));
        assert_eq!(target.get("x-a").map(HeaderValue::as_bytes), Some(&b"3"[..]));
    }

    #[test]
    fn should_merge_case_variants() {
        let base = CallHeaders::new().add_header("accept-language", "en");
        let other = CallHeaders::new().add_header("Accept-Language", "fr");

        let merged = base.merge(other);
        let mut target = HeaderMap::new();
        merged.apply_to(&mut target).expect("valid headers");

        assert_eq!(merged.len(), 1);
        assert_eq!(
            target.get("accept-language").map(HeaderValue::as_bytes),
            Some(&b"fr"[..])
        );
    }

    #[test]
    fn should_reject_invalid_header_name() {
        let mut target = HeaderMap::new();

        let result = CallHeaders::new()
            .add_header("bad header", "value")
            .apply_to(&mut target);

        assert!(matches!(result, Err(AtomicError::InvalidHeaderName(_))));
    }

    #[test]
    fn should_reject_invalid_header_value() {
        let mut target = HeaderMap::new();

        let result = CallHeaders::new()
            .add_header("X-Bad", "line\nbreak")
            .apply_to(&mut target);

        assert!(matches!(result, Err(AtomicError::InvalidHeaderValue(_))));
    }

    #[test]
    fn should_collect_from_pairs() {
        let headers: CallHeaders = [("A", "1"), ("B", "2")].into_iter().collect();

        assert_eq!(headers.get("a"), Some("1"));
        assert_eq!(headers.get("b"), Some("2"));
    }
}
