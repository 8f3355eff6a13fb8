//! Parameter store abstraction.
//!
//! [`ParameterStore`] is the seam between the CLI and AWS: commands and
//! the template engine are written against the trait, the [`ssm`]
//! backend talks to the real service, and the in-memory backend backs
//! the test suite.

mod ssm;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use ssm::SsmStore;

use serde::Serialize;

use crate::error::Result;

/// Maximum number of names accepted by one bulk read.
///
/// This is the SSM `GetParameters` request ceiling; the batch resolver
/// partitions key sets into chunks of this size.
pub const BULK_GET_LIMIT: usize = 10;

/// A parameter with its decrypted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub kind: ParameterKind,
}

/// Parameter metadata without the value, as returned by [`ParameterStore::list`].
#[derive(Debug, Clone, Serialize)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

/// SSM parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParameterKind {
    String,
    StringList,
    SecureString,
}

impl ParameterKind {
    /// Whether values of this kind are KMS-encrypted at rest.
    pub fn is_secure(self) -> bool {
        matches!(self, Self::SecureString)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::SecureString => "SecureString",
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read/write contract against the backing parameter store.
///
/// Values are returned decrypted. Missing keys are `None`/absent, never
/// an `Err` — existence policy is the caller's concern.
pub trait ParameterStore {
    /// Read a single parameter, or `None` if it does not exist.
    fn get(&self, name: &str) -> Result<Option<Parameter>>;

    /// Bulk read of up to [`BULK_GET_LIMIT`] names.
    ///
    /// Returns only the parameters that exist; callers must treat names
    /// absent from the result as not-found.
    fn get_many(&self, names: &[String]) -> Result<Vec<Parameter>>;

    /// Read every parameter under a path prefix, recursively.
    fn get_by_path(&self, path: &str) -> Result<Vec<Parameter>>;

    /// Write a parameter value.
    ///
    /// Fails with [`StoreError::AlreadyExists`](crate::error::StoreError)
    /// when the name is taken and `overwrite` is false.
    fn put(&self, name: &str, value: &str, kind: ParameterKind, overwrite: bool) -> Result<()>;

    /// Delete a parameter.
    ///
    /// Fails with [`StoreError::NotFound`](crate::error::StoreError) when
    /// the name does not exist.
    fn delete(&self, name: &str) -> Result<()>;

    /// List metadata for every parameter visible to the caller.
    fn list(&self) -> Result<Vec<ParameterInfo>>;
}
