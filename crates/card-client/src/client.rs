//! HTTP client for the backend web app

use card_common::{redact_token, BackendConfig, NoticesTransport};
use chrono::Utc;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, instrument, warn};

use crate::error::ClientError;
use crate::jsonp::unwrap_jsonp;
use crate::models::{MemberEnvelope, NoticesEnvelope};

/// Thin wrapper around `reqwest::Client` bound to one backend URL.
///
/// Each call issues exactly one request. There is no retry.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    api_base: String,
    notices_transport: NoticesTransport,
    jsonp_callback: String,
}

impl BackendClient {
    /// Build a client from configuration
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/javascript;q=0.9"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self::with_http_client(http, config))
    }

    /// Use an existing `reqwest::Client`
    pub fn with_http_client(http: reqwest::Client, config: &BackendConfig) -> Self {
        Self {
            http,
            api_base: config.api_base.trim().to_string(),
            notices_transport: config.notices_transport,
            jsonp_callback: config.jsonp_callback.clone(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn notices_transport(&self) -> NoticesTransport {
        self.notices_transport
    }

    /// `GET <api_base>?type=member&token=<token>`
    #[instrument(skip(self, token), fields(token = %redact_token(token)))]
    pub async fn fetch_member(&self, token: &str) -> Result<MemberEnvelope, ClientError> {
        let body = self
            .get_text(&[("type", "member".to_string()), ("token", token.to_string())])
            .await?;
        let envelope: MemberEnvelope = serde_json::from_str(&body)?;

        if let Some(message) = envelope.error.as_deref() {
            warn!(backend_error = message, "Backend reported an error for member lookup");
        }
        Ok(envelope)
    }

    /// `GET <api_base>?type=notices`, as JSON or JSONP depending on configuration
    #[instrument(skip(self), fields(transport = ?self.notices_transport))]
    pub async fn fetch_notices(&self) -> Result<NoticesEnvelope, ClientError> {
        let body = match self.notices_transport {
            NoticesTransport::Json => self.get_text(&[("type", "notices".to_string())]).await?,
            NoticesTransport::Jsonp => {
                self.get_text(&[
                    ("type", "notices".to_string()),
                    ("callback", self.jsonp_callback.clone()),
                    ("ts", Utc::now().timestamp_millis().to_string()),
                ])
                .await?
            }
        };

        let json = match self.notices_transport {
            NoticesTransport::Json => body.as_str(),
            NoticesTransport::Jsonp => unwrap_jsonp(&body, &self.jsonp_callback)?,
        };

        let envelope: Option<NoticesEnvelope> = serde_json::from_str(json)?;
        Ok(envelope.unwrap_or_default())
    }

    /// Issue a GET with the given query and return the body of a 2xx response
    async fn get_text(&self, query: &[(&str, String)]) -> Result<String, ClientError> {
        let response = self.http.get(&self.api_base).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Backend returned an error status");
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Backend response received");
        Ok(body)
    }
}
