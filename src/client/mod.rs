//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use crate::domain::ValidationError;

#[cfg(test)]
mod fake;
mod sms;
mod viber;

pub use sms::{SmsAuth, SmsClient, SmsClientBuilder};
pub use viber::{ViberClient, ViberClientBuilder, ViberPlusSmsClient};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_json<'a>(
        &'a self,
        url: Url,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            // The SMS API body is meaningless on a non-2xx status; it is not read.
            if !crate::transport::is_success_status(status) {
                return Ok(HttpResponse {
                    status,
                    body: String::new(),
                });
            }
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: Url,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(AUTHORIZATION, authorization)
                .header(ACCEPT, "application/json")
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClient`], [`ViberClient`] and [`ViberPlusSmsClient`].
///
/// Errors reported by the gateway on purpose are not errors at this level: they come back
/// as [`Outcome::Fail`](crate::Outcome::Fail). This type covers what stopped the call from
/// producing an [`Outcome`](crate::Outcome) at all.
pub enum DecisionTelecomError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A configured base URL could not be turned into a request URL.
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The response body did not have the shape the operation expects.
    #[error("unable to process service response: {source}")]
    UnprocessableResponse {
        /// Raw response body, kept for support requests.
        body: String,
        #[source]
        source: BoxError,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// HTTP client settings shared by the client builders.
#[derive(Debug, Clone, Default)]
struct HttpSettings {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpSettings {
    fn build_transport(self) -> Result<Arc<dyn HttpTransport>, DecisionTelecomError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| DecisionTelecomError::Transport(Box::new(err)))?;
        Ok(Arc::new(ReqwestTransport { client }))
    }
}

fn default_transport() -> Arc<dyn HttpTransport> {
    Arc::new(ReqwestTransport {
        client: reqwest::Client::new(),
    })
}

fn endpoint_url(base_url: &str, path: &str) -> Result<Url, DecisionTelecomError> {
    let endpoint = format!("{}/{path}", base_url.trim_end_matches('/'));
    Url::parse(&endpoint).map_err(|source| DecisionTelecomError::InvalidEndpoint { endpoint, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers one request with `head` and hangs up.
    async fn serve_once(head: &'static [u8]) -> Url {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(head).await.unwrap();
            socket.flush().await.unwrap();
        });
        Url::parse(&format!("http://{addr}/ru/js/balance")).unwrap()
    }

    #[tokio::test]
    async fn get_skips_the_body_of_a_failed_response() {
        // Promises 100 bytes, sends 7, then closes the connection.
        let url = serve_once(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\npartial",
        )
        .await;
        let transport = ReqwestTransport {
            client: reqwest::Client::new(),
        };

        let response = transport.get(url).await.unwrap();
        assert_eq!(response.status, 503);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn get_reads_the_body_of_a_successful_response() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 13\r\nConnection: close\r\n\r\n[\"balance\":4]",
        )
        .await;
        let transport = ReqwestTransport {
            client: reqwest::Client::new(),
        };

        let response = transport.get(url).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"["balance":4]"#);
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let url = endpoint_url("https://example.invalid/ru/js/", "send").unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/ru/js/send");

        let url = endpoint_url("https://example.invalid/v1/api", "send-viber").unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/v1/api/send-viber");
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "send").unwrap_err();
        assert!(matches!(
            err,
            DecisionTelecomError::InvalidEndpoint { ref endpoint, .. } if endpoint == "not a url/send"
        ));
    }

    #[test]
    fn error_messages_name_the_failure_kind() {
        let err = DecisionTelecomError::UnprocessableResponse {
            body: "[]".to_owned(),
            source: "unexpected response key".into(),
        };
        assert_eq!(
            err.to_string(),
            "unable to process service response: unexpected response key"
        );

        let err: DecisionTelecomError = ValidationError::Empty { field: "login" }.into();
        assert_eq!(err.to_string(), "validation error: login must not be empty");
    }
}
