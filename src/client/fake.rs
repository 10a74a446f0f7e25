use std::io;
use std::sync::{Arc, Mutex};

use url::Url;

use super::{BoxError, BoxFuture, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub(super) struct RecordedRequest {
    pub method: &'static str,
    pub url: Url,
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl RecordedRequest {
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<RecordedRequest>,
    response: Option<(u16, String)>,
}

impl FakeTransport {
    pub fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Some((response_status, response_body.into())))
    }

    /// A transport whose every call fails before reaching the server.
    pub fn unreachable() -> Self {
        Self::with_response(None)
    }

    fn with_response(response: Option<(u16, String)>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response,
            })),
        }
    }

    pub fn last_request(&self) -> RecordedRequest {
        let state = self.state.lock().unwrap();
        state.last_request.clone().expect("no request was sent")
    }

    fn respond(&self, request: RecordedRequest) -> Result<HttpResponse, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.last_request = Some(request);
        match state.response.clone() {
            Some((status, body)) => Ok(HttpResponse { status, body }),
            None => Err(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

impl HttpTransport for FakeTransport {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            self.respond(RecordedRequest {
                method: "GET",
                url,
                authorization: None,
                body: None,
            })
        })
    }

    fn post_json<'a>(
        &'a self,
        url: Url,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            self.respond(RecordedRequest {
                method: "POST",
                url,
                authorization: Some(authorization.to_owned()),
                body: Some(body),
            })
        })
    }
}
