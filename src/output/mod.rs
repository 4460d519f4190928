//! Output module
//!
//! Writes the generated SDL text to its destination: a file, or stdout when
//! no file is given.

use crate::error::{Error, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Write SDL to `destination`, or stdout when `None`.
///
/// A trailing newline is added if missing. Parent directories are created.
pub async fn write_schema(destination: Option<&Path>, sdl: &str) -> Result<()> {
    let text = with_trailing_newline(sdl);

    match destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Error::output(format!("Failed to create {}: {e}", parent.display()))
                })?;
            }
            tokio::fs::write(path, text.as_bytes())
                .await
                .map_err(|e| Error::output(format!("Failed to write {}: {e}", path.display())))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "Wrote schema");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

fn with_trailing_newline(sdl: &str) -> String {
    if sdl.ends_with('\n') {
        sdl.to_string()
    } else {
        format!("{sdl}\n")
    }
}

#[cfg(test)]
mod tests;
