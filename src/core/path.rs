//! Parameter path handling.
//!
//! SSM parameter names are slash-delimited paths. A [`PathPrefix`]
//! qualifies relative reference names against a base path so every key
//! handed to the store is absolute.

/// A normalized path prefix, guaranteed to end with exactly one `/`.
///
/// The empty prefix normalizes to `/`, so applying any prefix always
/// yields an absolute key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Create a prefix from user input, forcing a single trailing `/`.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches('/');
        Self(format!("{}/", trimmed))
    }

    /// Qualify a reference name.
    ///
    /// Absolute names (leading `/`) pass through unchanged; relative
    /// names are prefixed. Pure and deterministic — re-applying any
    /// prefix to an absolute result is a fixed point.
    pub fn apply(&self, name: &str) -> String {
        if name.starts_with('/') {
            name.to_string()
        } else {
            format!("{}{}", self.0, name)
        }
    }

    /// Remove the prefix from an absolute name, if present.
    ///
    /// Used when turning fetched parameter names back into short names
    /// (e.g. environment variable assembly).
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        let rest = name.strip_prefix(self.0.as_str()).unwrap_or(name);
        rest.trim_start_matches('/')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
