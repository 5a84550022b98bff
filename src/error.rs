use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Read,
    Write,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoAction::Read => f.write_str("read"),
            IoAction::Write => f.write_str("write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} not found in {} file", crate::env_file::API_KEY_NAME, file_label(.path))]
    MissingKey { path: PathBuf },
}

impl InjectError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        InjectError::Io {
            action: IoAction::Read,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        InjectError::Io {
            action: IoAction::Write,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, InjectError::MissingKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, InjectError>;

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_key_names_the_env_file() {
        let err = InjectError::MissingKey {
            path: PathBuf::from("/srv/app/.env"),
        };
        assert_eq!(err.to_string(), "GOOGLE_MAPS_API_KEY not found in .env file");
        assert!(err.is_configuration());
    }

    #[test]
    fn io_error_reports_action_and_path() {
        let err = InjectError::write(
            Path::new("web/index.html"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "failed to write web/index.html");
        let source = std::error::Error::source(&err).expect("io source");
        assert_eq!(source.to_string(), "permission denied");
        assert!(!err.is_configuration());
    }
}
