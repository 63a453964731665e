//! Purpose: Injectable HTTP seam between the client and the network.
//! Exports: `Transport`, `HttpRequest`, `HttpResponse`, `UreqTransport`.
//! Role: One `execute` call per request; the default implementation wraps `ureq`.
//! Invariants: Any received status (including 4xx/5xx) is returned as a response.
//! Invariants: Only failures before a status arrives become `Transport` errors.
//! Invariants: No retries, no caching; cancellation and timeouts belong to the agent.
#![allow(clippy::result_large_err)]

use crate::core::error::{Error, ErrorKind};
use std::fmt;
use std::io::Read;
use url::Url;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpRequest {
    pub method: &'static str,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: "GET",
            url,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: String::new(),
            body: body.into(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;
}

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let mut call = self.agent.request(request.method, request.url.as_str());
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        match call.call() {
            Ok(resp) => read_response(resp),
            Err(ureq::Error::Status(_, resp)) => read_response(resp),
            Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Transport)
                .with_message("failed to complete http request")
                .with_source(err)),
        }
    }
}

fn read_response(response: ureq::Response) -> Result<HttpResponse, Error> {
    let status = response.status();
    let reason = response.status_text().to_string();
    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body).map_err(|err| {
        Error::new(ErrorKind::Transport)
            .with_message("failed to read response body")
            .with_status(status)
            .with_source(err)
    })?;
    Ok(HttpResponse {
        status,
        reason,
        body,
    })
}
