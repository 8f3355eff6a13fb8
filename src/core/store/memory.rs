//! In-memory parameter store for tests.
//!
//! Mirrors the [`ParameterStore`] contract closely enough to exercise
//! the commands and the template pipeline without AWS: bulk reads
//! return only existing names, writes honor the overwrite flag, and
//! every `get_many` request shape is recorded so tests can assert on
//! batch partitioning.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{Parameter, ParameterInfo, ParameterKind, ParameterStore};
use crate::error::{Result, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    parameters: BTreeMap<String, Parameter>,
    bulk_requests: Vec<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plain-text parameter.
    pub fn insert(&self, name: &str, value: &str) {
        self.insert_kind(name, value, ParameterKind::String);
    }

    /// Insert a parameter with an explicit kind.
    pub fn insert_kind(&self, name: &str, value: &str, kind: ParameterKind) {
        let mut inner = self.inner.lock().unwrap();
        inner.parameters.insert(
            name.to_string(),
            Parameter {
                name: name.to_string(),
                value: value.to_string(),
                kind,
            },
        );
    }

    /// The name lists passed to `get_many`, in call order.
    pub fn bulk_requests(&self) -> Vec<Vec<String>> {
        self.inner.lock().unwrap().bulk_requests.clone()
    }
}

impl ParameterStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<Parameter>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.parameters.get(name).cloned())
    }

    fn get_many(&self, names: &[String]) -> Result<Vec<Parameter>> {
        let mut inner = self.inner.lock().unwrap();
        inner.bulk_requests.push(names.to_vec());
        Ok(names
            .iter()
            .filter_map(|n| inner.parameters.get(n).cloned())
            .collect())
    }

    fn get_by_path(&self, path: &str) -> Result<Vec<Parameter>> {
        let inner = self.inner.lock().unwrap();
        // Only parameters strictly below the path, as SSM does.
        let needle = format!("{}/", path.trim_end_matches('/'));
        Ok(inner
            .parameters
            .values()
            .filter(|p| p.name.starts_with(&needle))
            .cloned()
            .collect())
    }

    fn put(&self, name: &str, value: &str, kind: ParameterKind, overwrite: bool) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.parameters.contains_key(name) && !overwrite {
            return Err(StoreError::AlreadyExists(name.to_string()).into());
        }
        inner.parameters.insert(
            name.to_string(),
            Parameter {
                name: name.to_string(),
                value: value.to_string(),
                kind,
            },
        );
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.parameters.remove(name).is_none() {
            return Err(StoreError::NotFound(name.to_string()).into());
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<ParameterInfo>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .parameters
            .values()
            .map(|p| ParameterInfo {
                name: p.name.clone(),
                kind: p.kind,
                key_id: p.kind.is_secure().then(|| "alias/aws/ssm".to_string()),
            })
            .collect())
    }
}
