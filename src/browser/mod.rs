//! Browser infrastructure for launching and managing a Chrome instance

mod wrapper;

pub use wrapper::{BrowserWrapper, launch};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timed out after {timeout_ms}ms waiting for element: {selector}")]
    WaitTimeout { selector: String, timeout_ms: u64 },

    #[error("Interaction failed: {0}")]
    InteractionFailed(String),
}

pub type BrowserResult<T> = Result<T, BrowserError>;
