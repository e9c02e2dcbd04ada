use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{MapperError, Result};

/// Source of documentation pages. Returns the HTML body of `url`.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches documentation pages over HTTP(S).
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send().await?;

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        check_response(url, resp.status(), content_type)?;

        Ok(resp.text().await?)
    }
}

/// Only successful `text/html` responses are documentation pages.
fn check_response(url: &str, status: StatusCode, content_type: Option<&str>) -> Result<()> {
    if !status.is_success() {
        return Err(MapperError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = content_type.unwrap_or_default();
    if !content_type.starts_with("text/html") {
        return Err(MapperError::InvalidContentType {
            url: url.to_string(),
            content_type: content_type.to_string(),
        });
    }

    Ok(())
}
