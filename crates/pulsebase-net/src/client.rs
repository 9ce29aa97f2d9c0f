use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use url::Url;

use crate::errors::NetError;
use crate::types::{ApiContent, ApiRequest};

/// Injected transport capability. One implementation talks HTTP; tests
/// substitute stubs.
#[async_trait]
pub trait HttpExec: Send + Sync {
    async fn request(&self, request: ApiRequest) -> Result<ApiContent, NetError>;
}

#[derive(Clone, Debug)]
pub struct NetConfig {
    pub base_url: Url,
    pub username: Option<String>,
    pub password: Option<String>,
    pub request_timeout: Duration,
    pub allow_invalid_certs: bool,
    pub user_agent: Option<String>,
}

impl NetConfig {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, NetError> {
        let mut base_url = Url::parse(base_url.as_ref())
            .map_err(|err| NetError::schema(&format!("base url parse failed: {err}")))?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path().trim_end_matches('/')));
        }
        Ok(Self {
            base_url,
            username: None,
            password: None,
            request_timeout: Duration::from_secs(30),
            allow_invalid_certs: false,
            user_agent: None,
        })
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_allow_invalid_certs(mut self, allow: bool) -> Self {
        self.allow_invalid_certs = allow;
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
}

pub struct ReqwestExec {
    client: reqwest::Client,
    config: NetConfig,
}

impl ReqwestExec {
    pub fn new(config: NetConfig) -> Result<Self, NetError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(agent) = config.user_agent.as_ref() {
            headers.insert(
                USER_AGENT,
                HeaderValue::from_str(agent)
                    .map_err(|err| NetError::schema(&format!("invalid user agent: {err}")))?,
            );
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(config.request_timeout);
        if config.allow_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder
            .build()
            .map_err(|err| NetError::schema(&format!("client build failed: {err}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl HttpExec for ReqwestExec {
    async fn request(&self, request: ApiRequest) -> Result<ApiContent, NetError> {
        let url = self
            .config
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|err| NetError::schema(&format!("bad path {:?}: {err}", request.path)))?;

        let mut builder = self.client.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(username) = self.config.username.as_ref() {
            builder = builder.basic_auth(username, self.config.password.as_deref());
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        tracing::debug!(
            target: "pulsebase::net",
            method = %request.method,
            path = %request.path,
            "issuing request"
        );

        let response = builder
            .send()
            .await
            .map_err(|err| NetError::transport(&format!("request failed: {err}")))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| NetError::transport(&format!("response body read failed: {err}")))?;

        if !status.is_success() {
            let content = String::from_utf8_lossy(&bytes).into_owned();
            tracing::warn!(
                target: "pulsebase::net",
                status = status.as_u16(),
                path = %request.path,
                "server returned non-success status"
            );
            return Err(NetError::server_status(status.as_u16(), content));
        }

        if bytes.is_empty() {
            return Ok(ApiContent::Text(String::new()));
        }
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(ApiContent::Json(value)),
            Err(_) => Ok(ApiContent::Text(String::from_utf8_lossy(&bytes).into_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = NetConfig::new("https://tsd.example.org/api/v1").expect("config");
        assert_eq!(config.base_url.as_str(), "https://tsd.example.org/api/v1/");
        let joined = config.base_url.join("series/query").expect("join");
        assert_eq!(
            joined.as_str(),
            "https://tsd.example.org/api/v1/series/query"
        );
    }

    #[test]
    fn invalid_base_url_is_a_schema_error() {
        let err = NetConfig::new("not a url").expect_err("rejected");
        assert_eq!(err.0.code, pulsebase_errors::codes::SCHEMA_VALIDATION);
    }

    #[test]
    fn server_status_preserves_status_and_body() {
        let err = NetError::server_status(500, "boom");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.content(), Some("boom"));
        assert_eq!(
            err.0.retry,
            pulsebase_errors::prelude::RetryClass::Transient
        );
        let not_found = NetError::server_status(404, "missing");
        assert_eq!(
            not_found.0.retry,
            pulsebase_errors::prelude::RetryClass::Permanent
        );
    }
}
