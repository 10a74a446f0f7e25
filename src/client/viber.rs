use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use base64::prelude::*;

use super::{
    DecisionTelecomError, HttpSettings, HttpTransport, default_transport, endpoint_url,
};
use crate::domain::{
    AccessKey, Outcome, ViberError, ViberMessage, ViberMessageId, ViberMessageReceipt,
    ViberPlusSmsMessage, ViberPlusSmsMessageReceipt,
};

const DEFAULT_BASE_URL: &str = "https://web.it-decision.com/v1/api";

const SEND_PATH: &str = "send-viber";
const RECEIVE_PATH: &str = "receive-viber";

/// `Authorization` header value: the access key alone is the Basic credential.
fn basic_authorization(access_key: &AccessKey) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(access_key.as_str()))
}

#[derive(Debug, Clone)]
/// Builder for [`ViberClient`] and [`ViberPlusSmsClient`].
pub struct ViberClientBuilder {
    access_key: AccessKey,
    base_url: String,
    settings: HttpSettings,
}

impl ViberClientBuilder {
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            access_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            settings: HttpSettings::default(),
        }
    }

    /// Override the base URL; `send-viber` and `receive-viber` are resolved against it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<ViberClient, DecisionTelecomError> {
        Ok(ViberClient {
            authorization: basic_authorization(&self.access_key),
            base_url: self.base_url,
            http: self.settings.build_transport()?,
        })
    }

    /// Build a client for Viber messages with an SMS fallback.
    pub fn build_plus_sms(self) -> Result<ViberPlusSmsClient, DecisionTelecomError> {
        self.build().map(ViberPlusSmsClient::from)
    }
}

#[derive(Clone)]
/// Client for the Viber API.
///
/// Every operation is a single JSON `POST` authenticated with the access key. A response is
/// a success only when the status is 2xx and the body carries `message_id`; anything else is
/// read as a [`ViberError`] and returned as [`Outcome::Fail`]. Bodies that are neither are
/// returned as [`DecisionTelecomError::UnprocessableResponse`].
pub struct ViberClient {
    authorization: String,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl ViberClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`ViberClient::builder`].
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            authorization: basic_authorization(&access_key),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: default_transport(),
        }
    }

    pub fn builder(access_key: AccessKey) -> ViberClientBuilder {
        ViberClientBuilder::new(access_key)
    }

    /// Send a Viber message and return its id.
    pub async fn send_message(
        &self,
        message: &ViberMessage,
    ) -> Result<Outcome<ViberMessageId, ViberError>, DecisionTelecomError> {
        self.call(
            SEND_PATH,
            crate::transport::encode_send_viber_body(message),
            crate::transport::decode_send_viber_response,
        )
        .await
    }

    /// Look up the status of a message sent in the last 5 days.
    pub async fn get_message_status(
        &self,
        message_id: ViberMessageId,
    ) -> Result<Outcome<ViberMessageReceipt, ViberError>, DecisionTelecomError> {
        self.call(
            RECEIVE_PATH,
            crate::transport::encode_message_id_body(message_id),
            crate::transport::decode_receipt_response,
        )
        .await
    }

    async fn call<T, E>(
        &self,
        path: &'static str,
        body: serde_json::Value,
        decode: fn(u16, &str) -> Result<Outcome<T, ViberError>, E>,
    ) -> Result<Outcome<T, ViberError>, DecisionTelecomError>
    where
        E: StdError + Send + Sync + 'static,
    {
        let url = endpoint_url(&self.base_url, path)?;

        tracing::debug!(operation = path, "sending Viber API request");
        let response = self
            .http
            .post_json(url, &self.authorization, body)
            .await
            .map_err(DecisionTelecomError::Transport)?;

        match decode(response.status, &response.body) {
            Ok(outcome) => {
                if let Outcome::Fail(error) = &outcome {
                    tracing::debug!(
                        operation = path,
                        status = response.status,
                        name = %error.name,
                        code = error.code,
                        "Viber API reported an error"
                    );
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(
                    operation = path,
                    status = response.status,
                    error = %err,
                    "unable to process Viber API response"
                );
                Err(DecisionTelecomError::UnprocessableResponse {
                    body: response.body,
                    source: Box::new(err),
                })
            }
        }
    }
}

#[derive(Clone)]
/// Client for Viber messages that fall back to SMS.
///
/// Sends go through the same endpoint as [`ViberClient`] with the fallback text added;
/// status lookups also report the SMS channel.
pub struct ViberPlusSmsClient {
    viber: ViberClient,
}

impl ViberPlusSmsClient {
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            viber: ViberClient::new(access_key),
        }
    }

    /// Borrow the plain Viber client sharing this client's transport.
    pub fn viber(&self) -> &ViberClient {
        &self.viber
    }

    /// Send a Viber message with an SMS fallback and return the Viber message id.
    pub async fn send_message(
        &self,
        message: &ViberPlusSmsMessage,
    ) -> Result<Outcome<ViberMessageId, ViberError>, DecisionTelecomError> {
        self.viber
            .call(
                SEND_PATH,
                crate::transport::encode_send_viber_plus_sms_body(message),
                crate::transport::decode_send_viber_response,
            )
            .await
    }

    /// Look up the status of the Viber message and of its SMS fallback.
    pub async fn get_message_status(
        &self,
        message_id: ViberMessageId,
    ) -> Result<Outcome<ViberPlusSmsMessageReceipt, ViberError>, DecisionTelecomError> {
        self.viber
            .call(
                RECEIVE_PATH,
                crate::transport::encode_message_id_body(message_id),
                crate::transport::decode_plus_sms_receipt_response,
            )
            .await
    }
}

impl From<ViberClient> for ViberPlusSmsClient {
    fn from(viber: ViberClient) -> Self {
        Self { viber }
    }
}
