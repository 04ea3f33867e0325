//! Synchronous resource loading for marker images
//!
//! Marker bitmaps are decoded lazily by the iced runtime; this module only
//! reads the encoded bytes. Synchronous reads are gated behind a capability
//! check: web targets have no blocking file access and surface an explicit
//! error instead of degrading silently, so callers are expected to consult
//! [`sync_loading_supported`] before taking the blocking path.

use std::path::Path;

use iced::widget::image;
use thiserror::Error;

/// Errors surfaced by the synchronous resource path.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The platform has no synchronous loading path.
    #[error("synchronous resource loading is not supported on this platform")]
    Unsupported,

    /// Reading the resource failed.
    #[error("failed to read resource '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Whether [`read_bytes_sync`] is available on this platform.
pub fn sync_loading_supported() -> bool {
    cfg!(not(target_arch = "wasm32"))
}

/// Read a resource's encoded bytes, blocking the calling thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_bytes_sync(path: impl AsRef<Path>) -> Result<Vec<u8>, ResourceError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ResourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(target_arch = "wasm32")]
pub fn read_bytes_sync(_path: impl AsRef<Path>) -> Result<Vec<u8>, ResourceError> {
    Err(ResourceError::Unsupported)
}

/// Image handle for already-encoded bytes (png, jpeg, ...).
pub fn image_from_bytes(bytes: Vec<u8>) -> image::Handle {
    image::Handle::from_bytes(bytes)
}

/// Image handle for a resource path, read synchronously.
pub fn image_from_path(path: impl AsRef<Path>) -> Result<image::Handle, ResourceError> {
    if !sync_loading_supported() {
        return Err(ResourceError::Unsupported);
    }
    read_bytes_sync(path).map(image_from_bytes)
}
