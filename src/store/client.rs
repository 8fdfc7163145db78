//! REST client for the hosted table
//!
//! The store exposes each table as a PostgREST resource. An insert is a
//! `POST {base}/rest/v1/{table}` with a one-element JSON array body; the
//! access key travels both as `apikey` and as a bearer token.

use super::error::StoreError;
use super::traits::RecordStore;
use crate::state::{Receipt, Record};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Hostnames allowed to use plain http
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Upper bound for a single insert round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the store on a refused write
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

/// Client for inserting records into the hosted table
#[derive(Debug, Clone)]
pub struct RestStore {
    base_url: Url,
    http: Client,
}

impl RestStore {
    /// Create a client for the store at `base_url` authenticated by `api_key`
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = validate_base_url(base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            "apikey",
            header::HeaderValue::from_str(api_key).context("store key is not a valid header value")?,
        );
        default_headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {api_key}"))
                .context("store key is not a valid header value")?,
        );
        default_headers.insert(
            "Prefer",
            header::HeaderValue::from_static("return=representation"),
        );
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("signup-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;

        Ok(Self { base_url, http })
    }

    /// Resource URL for a table
    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(&format!("rest/v1/{table}"))
            .map_err(|e| StoreError::Transport(format!("invalid table '{table}': {e}")))
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn insert(&self, table: &str, record: &Record) -> Result<Receipt, StoreError> {
        let url = self.table_url(table)?;
        debug!(%url, "inserting record");

        let response = self
            .http
            .post(url)
            .json(&[record])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if status.is_success() {
            parse_receipt(&body)
        } else {
            Err(parse_rejection(status.as_u16(), &body))
        }
    }
}

/// Validate the store URL and normalise it to end with `/`.
///
/// `localhost` and `127.0.0.1` may use any scheme; every other host must use
/// https.
fn validate_base_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| anyhow!("Invalid store URL '{}': {}", base, e))?;

    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("store URL must include a host"))?;
    let is_local = LOCALHOST_DOMAINS
        .iter()
        .any(|allowed| host.eq_ignore_ascii_case(allowed));

    if !is_local && url.scheme() != "https" {
        return Err(anyhow!(
            "store URL must use https for non-localhost hosts; got '{}://'",
            url.scheme()
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Read the echoed row, if any. An empty body is a plain acknowledgement.
fn parse_receipt(body: &str) -> Result<Receipt, StoreError> {
    if body.trim().is_empty() {
        return Ok(Receipt::default());
    }
    let rows: Vec<Receipt> =
        serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(rows.into_iter().next().unwrap_or_default())
}

/// Map a refused write to a [`StoreError`], keeping the store's message.
/// Bodies without a recognisable message yield an empty one.
fn parse_rejection(status: u16, body: &str) -> StoreError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.msg)
        .or(parsed.error)
        .unwrap_or_default();
    StoreError::Rejected { status, message }
}
