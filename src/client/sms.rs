use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use super::{
    DecisionTelecomError, HttpSettings, HttpTransport, default_transport, endpoint_url,
};
use crate::domain::{
    Login, Outcome, Password, SmsBalance, SmsErrorCode, SmsMessage, SmsMessageId,
    SmsMessageStatus, ValidationError,
};
use crate::transport::is_success_status;

const DEFAULT_BASE_URL: &str = "https://web.it-decision.com/ru/js";

const SEND_PATH: &str = "send";
const STATE_PATH: &str = "state";
const BALANCE_PATH: &str = "balance";

#[derive(Debug, Clone)]
/// Login/password pair for the SMS API, sent as query parameters on every request.
pub struct SmsAuth {
    login: Login,
    password: Password,
}

impl SmsAuth {
    /// Validate that both parts are non-empty.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Login::FIELD.to_owned(), self.login.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SmsClientBuilder {
    auth: SmsAuth,
    base_url: String,
    settings: HttpSettings,
}

impl SmsClientBuilder {
    pub fn new(auth: SmsAuth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            settings: HttpSettings::default(),
        }
    }

    /// Override the base URL; `send`, `state` and `balance` are resolved against it.
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

    pub fn build(self) -> Result<SmsClient, DecisionTelecomError> {
        Ok(SmsClient {
            auth: self.auth,
            base_url: self.base_url,
            http: self.settings.build_transport()?,
        })
    }
}

#[derive(Clone)]
/// Client for the SMS API.
///
/// Every operation is a single `GET` with the credentials in the query string. The result is
/// an [`Outcome`]: `Fail` carries the [`SmsErrorCode`] the gateway reported, or
/// [`SmsErrorCode::ServerError`] when it answered with a non-2xx status. Bodies that cannot
/// be parsed are returned as [`DecisionTelecomError::UnprocessableResponse`].
pub struct SmsClient {
    auth: SmsAuth,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`SmsClient::builder`].
    pub fn new(auth: SmsAuth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: default_transport(),
        }
    }

    pub fn builder(auth: SmsAuth) -> SmsClientBuilder {
        SmsClientBuilder::new(auth)
    }

    /// Send an SMS message and return its id.
    pub async fn send_message(
        &self,
        message: &SmsMessage,
    ) -> Result<Outcome<SmsMessageId, SmsErrorCode>, DecisionTelecomError> {
        self.call(
            SEND_PATH,
            crate::transport::encode_send_query(message),
            crate::transport::decode_send_response,
        )
        .await
    }

    /// Look up the delivery status of a message sent with the delivery flag set.
    pub async fn get_message_status(
        &self,
        message_id: SmsMessageId,
    ) -> Result<Outcome<SmsMessageStatus, SmsErrorCode>, DecisionTelecomError> {
        self.call(
            STATE_PATH,
            crate::transport::encode_state_query(message_id),
            crate::transport::decode_state_response,
        )
        .await
    }

    pub async fn get_balance(
        &self,
    ) -> Result<Outcome<SmsBalance, SmsErrorCode>, DecisionTelecomError> {
        self.call(
            BALANCE_PATH,
            crate::transport::encode_balance_query(),
            crate::transport::decode_balance_response,
        )
        .await
    }

    async fn call<T, E>(
        &self,
        path: &'static str,
        query: Vec<(String, String)>,
        decode: fn(&str) -> Result<Outcome<T, SmsErrorCode>, E>,
    ) -> Result<Outcome<T, SmsErrorCode>, DecisionTelecomError>
    where
        E: StdError + Send + Sync + 'static,
    {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_query_params(&mut params);
        params.extend(query);

        let mut url = endpoint_url(&self.base_url, path)?;
        url.query_pairs_mut().extend_pairs(params.iter());

        tracing::debug!(operation = path, "sending SMS API request");
        let response = self
            .http
            .get(url)
            .await
            .map_err(DecisionTelecomError::Transport)?;

        if !is_success_status(response.status) {
            tracing::warn!(
                operation = path,
                status = response.status,
                "SMS API answered with a non-success HTTP status"
            );
            return Ok(Outcome::Fail(SmsErrorCode::ServerError));
        }

        match decode(&response.body) {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Fail(code) if code.is_auth_error() => {
                        tracing::warn!(operation = path, ?code, "SMS API rejected the credentials");
                    }
                    Outcome::Fail(code) => {
                        tracing::debug!(operation = path, ?code, "SMS API reported an error");
                    }
                    Outcome::Ok(_) => {}
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(
                    operation = path,
                    error = %err,
                    "unable to process SMS API response"
                );
                Err(DecisionTelecomError::UnprocessableResponse {
                    body: response.body,
                    source: Box::new(err),
                })
            }
        }
    }
}
