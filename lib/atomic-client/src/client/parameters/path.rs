use std::collections::HashSet;
use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use crate::client::error::AtomicError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Characters escaped in a path segment: everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// A REST path template with named identifier substitution.
///
/// Templates use `{name}` placeholders. Values are rendered with their `Display`
/// implementation and percent-encoded as a single path segment.
///
/// ```rust
/// use atomic_client::CallPath;
///
/// let path = CallPath::from("/api/1.0.0/partners/{partner_id}/tokens/{token_id}")
///     .add_param("partner_id", "acme")
///     .add_param("token_id", 42);
/// assert_eq!(path.template(), "/api/1.0.0/partners/{partner_id}/tokens/{token_id}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    pub(in crate::client) path: String,
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Adds (or replaces) a path parameter.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }

    /// Returns the raw template.
    pub fn template(&self) -> &str {
        &self.path
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(in crate::client) struct PathResolved {
    pub(in crate::client) path: String,
}

impl TryFrom<CallPath> for PathResolved {
    type Error = AtomicError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { mut path, args } = value;

        let mut names: HashSet<String> = RE
            .captures_iter(&path)
            .filter_map(|caps| caps.name("name"))
            .map(|found| found.as_str().to_string())
            .collect();

        if names.is_empty() {
            return Ok(Self { path });
        }

        for (name, value) in args {
            if !names.remove(&name) {
                warn!(?name, "argument name not found");
                continue;
            }
            if value.is_empty() {
                names.insert(name);
                continue;
            }
            path = replace_path_param(&path, &name, &encode_path_param_value(&value));
        }

        if names.is_empty() {
            return Ok(Self { path });
        }

        let mut missings: Vec<String> = names.into_iter().collect();
        missings.sort();
        Err(AtomicError::PathUnresolved { path, missings })
    }
}
