//! Batch resolution of discovered keys.
//!
//! One bulk read per batch of at most [`BULK_GET_LIMIT`] keys, issued
//! sequentially. The result map is seeded with every key mapped to the
//! empty string before any request, so a key the store does not return
//! still resolves (to empty) — missing parameters are not an error.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::core::store::{ParameterStore, BULK_GET_LIMIT};
use crate::error::Result;

/// Resolve a key set into a key → value map.
///
/// An empty key set performs no store calls. Any store fault aborts the
/// remaining batches and propagates; a partially populated map is never
/// returned as success.
pub fn resolve_keys<S: ParameterStore>(
    store: &S,
    keys: &BTreeSet<String>,
) -> Result<BTreeMap<String, String>> {
    let mut values: BTreeMap<String, String> = keys
        .iter()
        .map(|key| (key.clone(), String::new()))
        .collect();

    if keys.is_empty() {
        return Ok(values);
    }

    let ordered: Vec<String> = keys.iter().cloned().collect();
    let batches = ordered.len().div_ceil(BULK_GET_LIMIT);
    debug!(keys = ordered.len(), batches, "resolving parameter references");

    for batch in ordered.chunks(BULK_GET_LIMIT) {
        for parameter in store.get_many(batch)? {
            if let Some(slot) = values.get_mut(&parameter.name) {
                *slot = parameter.value;
            }
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::memory::MemoryStore;

    fn key_set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_key_set_makes_no_store_calls() {
        let store = MemoryStore::new();
        let values = resolve_keys(&store, &BTreeSet::new()).unwrap();
        assert!(values.is_empty());
        assert!(store.bulk_requests().is_empty());
    }

    #[test]
    fn partitions_into_batches_of_at_most_ten() {
        let store = MemoryStore::new();
        let keys: BTreeSet<String> = (0..23).map(|i| format!("/app/key{i:02}")).collect();
        for key in &keys {
            store.insert(key, "v");
        }

        let values = resolve_keys(&store, &keys).unwrap();

        let requests = store.bulk_requests();
        let sizes: Vec<usize> = requests.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![10, 10, 3]);
        assert_eq!(values.len(), 23);
        assert!(values.values().all(|v| v == "v"));
    }

    #[test]
    fn missing_keys_resolve_to_empty_string() {
        let store = MemoryStore::new();
        store.insert("/app/present", "here");

        let values = resolve_keys(&store, &key_set(&["/app/present", "/app/absent"])).unwrap();

        assert_eq!(values["/app/present"], "here");
        assert_eq!(values["/app/absent"], "");
        assert_eq!(values.len(), 2);
    }
}
