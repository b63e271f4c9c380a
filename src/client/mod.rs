//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::domain::{
    BulkPromotionalSms, Credentials, DndType, PromotionalSms, SmsId, TransactionalSms,
};
use crate::transport::WireError;

/// The only SMS Owl endpoint; every operation posts here.
pub const SMSOWL_ENDPOINT: &str = "https://api.smsowl.in/v1/sms";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsOwlClient`].
///
/// Nothing is retried; every failure is returned to the caller as-is.
pub enum SmsOwlError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// SMS Owl answered with a non-200 status.
    ///
    /// `Display` renders the server's `message` exactly as received.
    #[error("{message}")]
    Api {
        http_status: u16,
        status: Option<String>,
        message: String,
    },

    /// Response body did not match the shape expected for its status code.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// Request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsOwlClient`].
///
/// Only the underlying HTTP client is configurable; the endpoint is fixed.
pub struct SmsOwlClientBuilder {
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsOwlClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<SmsOwlClient, SmsOwlError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsOwlError::Transport(Box::new(err)))?;

        Ok(SmsOwlClient {
            credentials: self.credentials,
            endpoint: SMSOWL_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Owl client.
///
/// Each call builds a JSON body from the request and the account credentials, posts it to
/// [`SMSOWL_ENDPOINT`], and decodes the reply: HTTP 200 is read as a success body, any
/// other status as an error body carrying the server's `message`.
///
/// Clones share one pooled HTTP client.
pub struct SmsOwlClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsOwlClient {
    /// Create a client with default HTTP settings.
    ///
    /// For a timeout or custom user-agent, use [`SmsOwlClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: SMSOWL_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(credentials: Credentials) -> SmsOwlClientBuilder {
        SmsOwlClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send a promotional SMS to one recipient and return its id.
    ///
    /// Errors:
    /// - [`SmsOwlError::Api`] when SMS Owl rejects the request (non-200),
    /// - [`SmsOwlError::Transport`] when the request does not complete,
    /// - [`SmsOwlError::Decode`] when the response body is malformed.
    pub async fn send_promotional_sms(
        &self,
        request: PromotionalSms,
    ) -> Result<SmsId, SmsOwlError> {
        let body = crate::transport::encode_promotional_body(&self.credentials, &request)
            .map_err(SmsOwlError::Encode)?;
        self.dispatch(body, request.dnd_type(), 1, crate::transport::decode_single_success)
            .await
    }

    /// Send one promotional text to many recipients.
    ///
    /// The returned ids are in the same order as [`BulkPromotionalSms::recipients`]. The
    /// recipient list is sent as-is; SMS Owl rejects lists above
    /// [`crate::BULK_MAX_RECIPIENTS`].
    pub async fn send_bulk_promotional_sms(
        &self,
        request: BulkPromotionalSms,
    ) -> Result<Vec<SmsId>, SmsOwlError> {
        let body = crate::transport::encode_bulk_promotional_body(&self.credentials, &request)
            .map_err(SmsOwlError::Encode)?;
        self.dispatch(body, request.dnd_type(), request.recipients().len(), |json| {
            crate::transport::decode_bulk_success(&request, json)
        })
        .await
    }

    /// Send a transactional SMS built from an approved template and return its id.
    pub async fn send_transactional_sms(
        &self,
        request: TransactionalSms,
    ) -> Result<SmsId, SmsOwlError> {
        let body = crate::transport::encode_transactional_body(&self.credentials, &request)
            .map_err(SmsOwlError::Encode)?;
        self.dispatch(body, request.dnd_type(), 1, crate::transport::decode_single_success)
            .await
    }

    async fn dispatch<T>(
        &self,
        body: String,
        dnd_type: DndType,
        recipients: usize,
        decode_success: impl FnOnce(&str) -> Result<T, WireError>,
    ) -> Result<T, SmsOwlError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            dnd_type = dnd_type.as_str(),
            recipients,
            "sending SMS Owl request"
        );

        let response = self
            .http
            .post_json(&self.endpoint, body)
            .await
            .map_err(SmsOwlError::Transport)?;

        tracing::debug!(status = response.status, "received SMS Owl response");

        if response.status != 200 {
            let rejection = crate::transport::decode_rejection(&response.body)
                .map_err(|err| SmsOwlError::Decode(Box::new(err)))?;
            tracing::warn!(
                status = response.status,
                reason = %rejection.message,
                "SMS Owl rejected request"
            );
            return Err(SmsOwlError::Api {
                http_status: response.status,
                status: rejection.status,
                message: rejection.message,
            });
        }

        decode_success(&response.body).map_err(|err| SmsOwlError::Decode(Box::new(err)))
    }
}
