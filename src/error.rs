//! Error taxonomy for rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the renderer and the PNG export driver.
///
/// Every variant is fatal to a run; there is no retry or partial-success
/// bookkeeping.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested canvas size cannot produce an image.
    #[error("invalid icon size {size}: must be at least 1 pixel")]
    InvalidSize { size: u32 },

    /// PNG encoding failed.
    #[error("failed to encode {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A filesystem write or rename failed.
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_message_names_the_size() {
        let err = RenderError::InvalidSize { size: 0 };
        assert_eq!(err.to_string(), "invalid icon size 0: must be at least 1 pixel");
    }

    #[test]
    fn io_error_carries_its_source() {
        use std::error::Error as _;

        let err = RenderError::Io {
            path: PathBuf::from("/tmp/icon-16.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("icon-16.png"));
        assert!(err.source().is_some());
    }
}
