use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("could not find file: {}", .0.display())]
    NotFound(PathBuf),
    #[error("must give a {expected} file, got {}", .path.display())]
    InvalidExtension { path: PathBuf, expected: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Check that `path` ends in one of `extensions` (compared without the dot,
/// ignoring ASCII case).
pub fn validate_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> Result<(), IoError> {
    let accepted = path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy();
        extensions
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed.as_ref().trim_start_matches('.')))
    });
    if accepted {
        return Ok(());
    }

    log::warn!("{} does not have an accepted extension", path.display());
    Err(IoError::InvalidExtension {
        path: path.to_path_buf(),
        expected: describe_extensions(extensions),
    })
}

/// Read a markdown source file into memory
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    log::info!("read {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// `[md, markdown]` → `.md or .markdown`
fn describe_extensions<S: AsRef<str>>(extensions: &[S]) -> String {
    if extensions.is_empty() {
        return "markdown".to_string();
    }
    extensions
        .iter()
        .map(|ext| format!(".{}", ext.as_ref().trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(" or ")
}
