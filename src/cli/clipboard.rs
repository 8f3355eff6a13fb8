//! Clipboard command.

use crate::cli::output;
use crate::core::store::{ParameterStore, SsmStore};
use crate::error::{Error, Result, StoreError};

/// Copy a parameter value to the system clipboard.
pub fn execute(name: &str) -> Result<()> {
    let store = SsmStore::connect()?;
    let parameter = store
        .get(name)?
        .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| Error::Clipboard(err.to_string()))?;
    clipboard
        .set_text(parameter.value)
        .map_err(|err| Error::Clipboard(err.to_string()))?;

    output::success(&format!("copied {name} to clipboard"));
    Ok(())
}
