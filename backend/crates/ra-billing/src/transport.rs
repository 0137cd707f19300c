use crate::{BillingError, BillingResult};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Response, StatusCode};

/// Minimal text-over-HTTP transport.
///
/// Succeeds with the body text only on status 200. Any other status fails with
/// [`BillingError::Remote`] carrying the raw body; a request that never
/// completes fails with [`BillingError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> BillingResult<String>;

    /// POST `form` as `application/x-www-form-urlencoded`. `None` sends no body.
    async fn post(&self, url: &str, form: Option<&[(String, String)]>) -> BillingResult<String>;
}

/// [`HttpTransport`] over a shared reqwest client. No timeout is configured.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: ReqwestClient) -> Self {
        Self { client }
    }

    async fn read_text(response: Response) -> BillingResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            debug!("Request failed with status {status}");
            return Err(BillingError::remote(status.as_u16(), body));
        }

        Ok(body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> BillingResult<String> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        Self::read_text(response).await
    }

    async fn post(&self, url: &str, form: Option<&[(String, String)]>) -> BillingResult<String> {
        debug!("POST {url}");
        let mut request = self.client.post(url);
        if let Some(fields) = form {
            request = request.form(fields);
        }
        let response = request.send().await?;
        Self::read_text(response).await
    }
}
