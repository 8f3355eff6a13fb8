//! Delete command.

use std::io;

use dialoguer::Confirm;

use crate::cli::output;
use crate::core::store::{ParameterStore, SsmStore};
use crate::error::{Error, Result, StoreError};

/// Delete a parameter, with confirmation unless `--force`.
pub fn execute(name: &str, force: bool) -> Result<()> {
    let store = SsmStore::connect()?;

    if !force {
        // Check existence first so the prompt names a real parameter.
        if store.get(name)?.is_none() {
            return Err(StoreError::NotFound(name.to_string()).into());
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {name}?"))
            .default(false)
            .interact()
            .map_err(io::Error::other)?;
        if !confirmed {
            return Ok(());
        }
    }

    match store.delete(name) {
        Ok(()) => {
            output::success(&format!("deleted {name}"));
            Ok(())
        }
        Err(Error::Store(StoreError::NotFound(_))) if force => Ok(()),
        Err(err) => Err(err),
    }
}
