//! Rename command.
//!
//! Moves a single parameter, or every parameter under a path when the
//! source names a subtree. Each move is put-then-delete; the put never
//! overwrites, so an occupied destination aborts the move before
//! anything is deleted.

use crate::cli::output;
use crate::core::store::{Parameter, ParameterStore, SsmStore};
use crate::error::{Error, Result, StoreError};

/// Rename a parameter or subtree.
pub fn execute(src: &str, dest: &str) -> Result<()> {
    let store = SsmStore::connect()?;
    run(&store, src, dest)
}

fn run<S: ParameterStore>(store: &S, src: &str, dest: &str) -> Result<()> {
    let src = src.trim_end_matches('/');
    let dest = dest.trim_end_matches('/');
    if src.is_empty() || dest.is_empty() {
        return Err(Error::InvalidInput(
            "source and destination must be non-empty paths".to_string(),
        ));
    }

    if let Some(parameter) = store.get(src)? {
        move_one(store, &parameter, dest)?;
        output::success(&format!("renamed {src} -> {dest}"));
        return Ok(());
    }

    // Not a leaf; try the source as a subtree.
    let children = store.get_by_path(src)?;
    if children.is_empty() {
        return Err(StoreError::NotFound(src.to_string()).into());
    }

    for parameter in &children {
        let suffix = parameter.name.strip_prefix(src).unwrap_or(&parameter.name);
        move_one(store, parameter, &format!("{dest}{suffix}"))?;
    }
    output::success(&format!(
        "renamed {} parameters: {src} -> {dest}",
        children.len()
    ));
    Ok(())
}

fn move_one<S: ParameterStore>(store: &S, parameter: &Parameter, dest: &str) -> Result<()> {
    store.put(dest, &parameter.value, parameter.kind, false)?;
    store.delete(&parameter.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::memory::MemoryStore;
    use crate::core::store::ParameterKind;

    #[test]
    fn renames_a_single_parameter() {
        let store = MemoryStore::new();
        store.insert_kind("/app/old", "v", ParameterKind::SecureString);

        run(&store, "/app/old", "/app/new").unwrap();

        assert!(store.get("/app/old").unwrap().is_none());
        let moved = store.get("/app/new").unwrap().unwrap();
        assert_eq!(moved.value, "v");
        assert_eq!(moved.kind, ParameterKind::SecureString);
    }

    #[test]
    fn renames_a_subtree() {
        let store = MemoryStore::new();
        store.insert("/app/db/user", "u");
        store.insert("/app/db/pass", "p");

        run(&store, "/app/db", "/app/postgres").unwrap();

        assert!(store.get("/app/db/user").unwrap().is_none());
        assert_eq!(store.get("/app/postgres/user").unwrap().unwrap().value, "u");
        assert_eq!(store.get("/app/postgres/pass").unwrap().unwrap().value, "p");
    }

    #[test]
    fn refuses_to_overwrite_an_existing_destination() {
        let store = MemoryStore::new();
        store.insert("/app/old", "v");
        store.insert("/app/new", "existing");

        let err = run(&store, "/app/old", "/app/new").unwrap_err();
        assert!(matches!(
            err,
            Error::Store(StoreError::AlreadyExists(_))
        ));
        // Source is untouched.
        assert_eq!(store.get("/app/old").unwrap().unwrap().value, "v");
    }

    #[test]
    fn missing_source_is_an_error() {
        let store = MemoryStore::new();
        let err = run(&store, "/app/none", "/app/new").unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::NotFound(_))));
    }
}
