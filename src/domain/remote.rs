use crate::domain::models::{CommandCatalog, DeviceStatus};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    /// The request never got a response (connection refused, DNS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// The device backend as seen by the remote control.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteApi: Send + Sync {
    // GET /api/commands
    async fn fetch_commands(&self) -> Result<CommandCatalog, ApiError>;

    // GET /api/status
    async fn fetch_status(&self) -> Result<DeviceStatus, ApiError>;

    // POST /api/command/{name}
    async fn send_command(&self, name: &str) -> Result<(), ApiError>;

    fn base_url(&self) -> String;
}
