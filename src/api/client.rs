//! Purpose: Authenticated GET client for the upstream REST API.
//! Exports: `OuraClient`, `ClientConfig`, `DEFAULT_BASE_URL`.
//! Role: Builds one request per call, checks status, hands the body to the strict decoder.
//! Invariants: Every request is a single GET with a bearer header; no retries.
//! Invariants: Document fetches need a non-empty ID; an empty one never reaches the transport.
//! Invariants: `next_token` is only sent when the caller supplies a non-empty token.
//! Invariants: The access token never appears in logs or `Debug` output.
#![allow(clippy::result_large_err)]

use super::page::{Page, RangeBound};
use super::transport::{HttpRequest, Transport, UreqTransport};
use crate::core::error::{Error, ErrorKind};
use crate::core::schema::Record;
use crate::core::strict;
use crate::resources::{Document, Resource};
use std::fmt;
use std::sync::Arc;
use url::Url;

pub type ApiResult<T> = Result<T, Error>;

pub const DEFAULT_BASE_URL: &str = "https://api.ouraring.com/v2";

#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    access_token: String,
    transport: Arc<dyn Transport>,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            transport: Arc::new(UreqTransport::new()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct OuraClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: Url,
    access_token: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for OuraClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OuraClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl OuraClient {
    /// Client against the public API using the default `ureq` transport.
    pub fn new(access_token: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(access_token))
    }

    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                base_url,
                access_token: config.access_token,
                transport: config.transport,
            }),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Fetch one document of resource `R` by its upstream ID.
    pub fn document<R: Document>(&self, id: &str) -> ApiResult<R> {
        if id.is_empty() {
            return Err(Error::new(ErrorKind::Transport)
                .with_message(format!("{} requires a non-empty document id", R::PATH)));
        }
        let url = self.endpoint_url(R::PATH, Some(id))?;
        let body = self.fetch(url)?;
        strict::decode_document::<R>(&body).inspect_err(|err| log_decode_failure(R::PATH, err))
    }

    /// Fetch one page of resource `R` between `start` and `end`.
    ///
    /// Pass the previous page's `next_token` to continue; this call never walks
    /// pages on its own.
    pub fn collection<R: Resource>(
        &self,
        start: R::Bound,
        end: R::Bound,
        next_token: Option<&str>,
    ) -> ApiResult<Page<R>> {
        let start = start.to_query_value()?;
        let end = end.to_query_value()?;
        let mut url = self.endpoint_url(R::PATH, None)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(R::Bound::START_PARAM, &start);
            pairs.append_pair(R::Bound::END_PARAM, &end);
            if let Some(token) = next_token.filter(|token| !token.is_empty()) {
                pairs.append_pair("next_token", token);
            }
        }
        let body = self.fetch(url)?;
        strict::decode_page::<R>(&body).inspect_err(|err| log_decode_failure(R::PATH, err))
    }

    /// Fetch a resource that exists once per user and has no ID.
    pub(crate) fn singleton<T: Record>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint_url(path, None)?;
        let body = self.fetch(url)?;
        strict::decode_document::<T>(&body).inspect_err(|err| log_decode_failure(path, err))
    }

    fn endpoint_url(&self, path: &str, id: Option<&str>) -> ApiResult<Url> {
        let mut url = self.inner.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::new(ErrorKind::Transport).with_message("base url cannot be a base")
            })?;
            segments.pop_if_empty();
            for segment in path.split('/') {
                segments.push(segment);
            }
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn request(&self, url: Url) -> HttpRequest {
        HttpRequest::get(url)
            .with_header("Authorization", format!("Bearer {}", self.inner.access_token))
            .with_header("Accept", "application/json")
    }

    fn fetch(&self, url: Url) -> ApiResult<Vec<u8>> {
        let request = self.request(url);
        tracing::debug!(method = request.method, url = %request.url, "sending request");
        let response = self.inner.transport.execute(&request)?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );
        if response.status != 200 {
            let reason = if response.reason.is_empty() {
                canonical_reason(response.status)
            } else {
                response.reason.as_str()
            };
            return Err(Error::upstream(response.status, reason));
        }
        Ok(response.body)
    }
}

fn normalize_base_url(raw: &str) -> ApiResult<Url> {
    let mut url = Url::parse(raw).map_err(|err| {
        Error::new(ErrorKind::Transport)
            .with_message(format!("invalid base url {raw:?}"))
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::new(ErrorKind::Transport)
            .with_message("base url must use http or https scheme"));
    }
    if url.cannot_be_a_base() {
        return Err(Error::new(ErrorKind::Transport).with_message("base url cannot be a base"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn canonical_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Entity",
        426 => "Upgrade Required",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

fn log_decode_failure(path: &str, err: &Error) {
    if err.kind() != ErrorKind::Decode {
        return;
    }
    tracing::warn!(
        resource = path,
        failure = ?err.decode_failure(),
        at = err.path().unwrap_or_default(),
        "response did not match the expected schema"
    );
}
