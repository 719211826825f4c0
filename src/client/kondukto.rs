//! Kondukto HTTP client
//!
//! Owns the base URL, default headers and the `reqwest` transport. Resource
//! accessors build a request with [`KonduktoClient::new_request`], send it
//! with [`KonduktoClient::execute`], and then inspect the returned
//! [`ApiResponse`].

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Request, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// Header carrying the API token
const TOKEN_HEADER: HeaderName = HeaderName::from_static("x-cookie");

/// Kondukto API client
#[derive(Debug, Clone)]
pub struct KonduktoClient {
    http: HttpClient,
    base_url: Url,
}

impl KonduktoClient {
    /// Create a client from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let host = config.host.as_deref().ok_or(ConfigError::MissingHost)?;
        let token = config.token.as_deref().ok_or(ConfigError::MissingToken)?;

        let mut token_value = HeaderValue::from_str(token)
            .map_err(|_| ConfigError::Invalid("token contains invalid characters".to_string()))?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("kdt-client/", env!("CARGO_PKG_VERSION"))),
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(ApiError::from)?;

        Self::with_http_client(http, host)
    }

    /// Wrap an already configured `reqwest` client
    pub fn with_http_client(http: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("base URL `{}`: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(
                ApiError::InvalidRequest(format!("base URL `{}` is not a base", base_url)).into(),
            );
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request for `path` relative to the base URL
    ///
    /// `path` must start with `/`. A JSON body is attached when given.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request> {
        let url = self.resolve(path)?;

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::InvalidRequest(format!("request body: {}", e)))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        Ok(builder.build().map_err(|e| ApiError::InvalidRequest(e.to_string()))?)
    }

    /// Send a request and read the full response body
    ///
    /// Any HTTP status is returned as a response; only transport failures
    /// are errors here.
    pub async fn execute(&self, request: Request) -> Result<ApiResponse> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        log::debug!("{} {}", method, path);

        let response = self.http.execute(request).await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;

        log::debug!("{} {} -> {}", method, path, status);
        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }

    /// Join an API path onto the base URL, keeping any base path prefix
    fn resolve(&self, path: &str) -> Result<Url> {
        if !path.starts_with('/') {
            return Err(
                ApiError::InvalidRequest(format!("path `{}` must be absolute", path)).into(),
            );
        }

        let mut url = self.base_url.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", prefix, path));
        Ok(url)
    }
}

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Fail with [`ApiError::UnexpectedStatus`] unless the status matches
    pub fn expect_status(&self, expected: StatusCode) -> Result<&Self> {
        if self.status != expected {
            return Err(ApiError::UnexpectedStatus {
                expected: expected.as_u16(),
                status: self.status.as_u16(),
            }
            .into());
        }
        Ok(self)
    }

    /// Decode the body as JSON
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ApiError::Decode(format!("Failed to parse response: {}", e)).into()
        })
    }
}
