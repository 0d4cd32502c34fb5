/*
 * Crate-wide error type for the platform layer. Fatal failures (class
 * registration, native window creation) surface as `PlatformError`; best-effort
 * paths log and degrade instead of returning these.
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    /// One-time setup failed (window class registration, module handle lookup).
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// An operation was attempted against a handle that is no longer valid.
    #[error("invalid handle: {0}")]
    InvalidHandle(String),

    /// A platform call failed in a context where the caller must know.
    #[error("operation failed: {0}")]
    OperationFailed(String),

    #[cfg(target_os = "windows")]
    #[error("win32 error: {0}")]
    Win32(#[from] windows::core::Error),
}

pub type Result<T> = std::result::Result<T, PlatformError>;
