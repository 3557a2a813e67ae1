use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to clobber an existing file unless --force was given.
pub fn ensure_writable(path: &str, force: bool) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "File {} already exists. Use --force to overwrite.",
            path
        )));
    }
    Ok(())
}
