//! Reference resolution strategies for the `param` template function.
//!
//! The same parsed template is executed twice with two implementations
//! of one capability: the discovery pass collects every referenced key
//! without producing output, the render pass substitutes resolved
//! values. Keeping the two behaviors as explicit strategies makes each
//! pass testable on its own.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::core::path::PathPrefix;

/// Name of the template function that references a parameter:
/// `{{ param(name="db_pass") }}`.
pub(crate) const PARAM_FN: &str = "param";

/// One pass's behavior for a parameter reference, given the normalized
/// (absolute) key.
pub trait ReferenceResolver: Send + Sync + 'static {
    fn resolve(&self, key: &str) -> String;
}

/// Discovery-pass resolver: registers the key and yields no output.
///
/// Performs no store I/O — only the recorded insertions matter; the
/// rendered output of the discovery pass is discarded.
#[derive(Clone, Default)]
pub struct KeyCollector {
    keys: Arc<Mutex<BTreeSet<String>>>,
}

impl KeyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The keys collected so far, deduplicated and ordered.
    pub fn keys(&self) -> BTreeSet<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl ReferenceResolver for KeyCollector {
    fn resolve(&self, key: &str) -> String {
        self.keys.lock().unwrap().insert(key.to_string());
        String::new()
    }
}

/// Render-pass resolver: looks the key up in the resolved map.
///
/// Keys the store reported missing are mapped to the empty string by
/// the batch resolver, so lookups only miss for references that were
/// never discovered; those also substitute as empty.
pub struct ValueSubstituter {
    values: BTreeMap<String, String>,
}

impl ValueSubstituter {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl ReferenceResolver for ValueSubstituter {
    fn resolve(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

/// Adapter exposing a [`ReferenceResolver`] as the `param` Tera function.
///
/// Normalizes the literal `name` argument against the path prefix
/// before delegating, so both passes see identical keys.
pub(crate) struct ParamFn<R> {
    prefix: PathPrefix,
    resolver: R,
}

impl<R> ParamFn<R> {
    pub(crate) fn new(prefix: PathPrefix, resolver: R) -> Self {
        Self { prefix, resolver }
    }
}

impl<R: ReferenceResolver> tera::Function for ParamFn<R> {
    fn call(&self, args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
        let name = args
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| tera::Error::msg("param() takes one string argument: name"))?;

        let key = self.prefix.apply(name);
        Ok(tera::Value::String(self.resolver.resolve(&key)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Function;

    fn call_args(name: &str) -> HashMap<String, tera::Value> {
        let mut args = HashMap::new();
        args.insert("name".to_string(), tera::Value::String(name.to_string()));
        args
    }

    #[test]
    fn collector_deduplicates_keys() {
        let collector = KeyCollector::new();
        assert_eq!(collector.resolve("/app/a"), "");
        assert_eq!(collector.resolve("/app/b"), "");
        assert_eq!(collector.resolve("/app/a"), "");

        let keys = collector.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("/app/a"));
        assert!(keys.contains("/app/b"));
    }

    #[test]
    fn substituter_returns_empty_for_unknown_keys() {
        let mut values = BTreeMap::new();
        values.insert("/app/known".to_string(), "v".to_string());
        let substituter = ValueSubstituter::new(values);

        assert_eq!(substituter.resolve("/app/known"), "v");
        assert_eq!(substituter.resolve("/app/unknown"), "");
    }

    #[test]
    fn param_fn_normalizes_against_the_prefix() {
        let collector = KeyCollector::new();
        let f = ParamFn::new(PathPrefix::new("/app/"), collector.clone());

        f.call(&call_args("db_pass")).unwrap();
        f.call(&call_args("/absolute/key")).unwrap();

        let keys = collector.keys();
        assert!(keys.contains("/app/db_pass"));
        assert!(keys.contains("/absolute/key"));
    }

    #[test]
    fn param_fn_rejects_missing_name_argument() {
        let f = ParamFn::new(PathPrefix::new("/"), KeyCollector::new());
        assert!(f.call(&HashMap::new()).is_err());
    }
}
