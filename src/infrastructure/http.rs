use crate::domain::models::{CommandCatalog, DeviceStatus};
use crate::domain::remote::{ApiError, RemoteApi};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = check_status(response)?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        })
    }
}

#[async_trait]
impl RemoteApi for HttpRemote {
    async fn fetch_commands(&self) -> Result<CommandCatalog, ApiError> {
        self.get_json("/api/commands").await
    }

    async fn fetch_status(&self) -> Result<DeviceStatus, ApiError> {
        self.get_json("/api/status").await
    }

    async fn send_command(&self, name: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/command/{name}")))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        check_status(response).map(|_| ())
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let remote = HttpRemote::new("http://beamer.local:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(remote.base_url(), "http://beamer.local:8080");
        assert_eq!(
            remote.url("/api/command/menuUp"),
            "http://beamer.local:8080/api/command/menuUp"
        );
    }
}
