use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while generating launcher icons.
#[derive(Debug)]
pub enum ExportError {
    /// The source logo does not exist. Raised before anything is written.
    MissingInput { path: PathBuf },
    Decode { path: PathBuf, source: image::ImageError },
    CreateDir { path: PathBuf, source: io::Error },
    Encode { path: PathBuf, reason: String },
    Write { path: PathBuf, source: io::Error },
    InvalidLayout { reason: String },
    UnknownTier(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingInput { path } => {
                write!(f, "logo file not found: {}", path.display())
            }
            ExportError::Decode { path, source } => {
                write!(f, "failed to decode '{}': {}", path.display(), source)
            }
            ExportError::CreateDir { path, source } => {
                write!(f, "failed to create directory '{}': {}", path.display(), source)
            }
            ExportError::Encode { path, reason } => {
                write!(f, "failed to encode PNG for '{}': {}", path.display(), reason)
            }
            ExportError::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
            ExportError::InvalidLayout { reason } => write!(f, "invalid layout: {}", reason),
            ExportError::UnknownTier(name) => write!(f, "unknown density tier '{}'", name),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Decode { source, .. } => Some(source),
            ExportError::CreateDir { source, .. } | ExportError::Write { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
