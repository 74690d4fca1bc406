// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use geotable_app::{Record, RecordEnvelope, RecordSource};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use std::time::{Duration, Instant};
use url::Url;

pub const DEFAULT_ENDPOINT: &str =
    "https://vedas.sac.gov.in/geoentity-services/api/geoentity-sources/";

#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            endpoint,
            timeout,
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issues the single GET against the sources endpoint and unwraps the
    /// `data` array. Any transport, status or decode problem is an error.
    pub fn fetch_records(&self) -> Result<Vec<Record>> {
        let started = Instant::now();
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .map_err(|error| connection_error(self.endpoint.as_str(), error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let envelope: RecordEnvelope = response.json().context("decode records response")?;
        tracing::info!(
            endpoint = %self.endpoint,
            count = envelope.data.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched records"
        );
        Ok(envelope.data)
    }
}

impl RecordSource for Client {
    fn fetch_records(&mut self) -> Result<Vec<Record>> {
        Client::fetch_records(self)
    }
}

pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("source endpoint must not be empty");
    }
    let url = Url::parse(trimmed).with_context(|| format!("invalid source endpoint {trimmed:?}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("source endpoint {trimmed:?} uses unsupported scheme {other:?}; use http or https"),
    }
}

fn connection_error(endpoint: &str, error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!("request to {endpoint} timed out -- raise [source].timeout if the API is slow");
    }
    anyhow!("cannot reach {endpoint} -- check network access and [source].endpoint ({error})")
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = parsed
            .get("message")
            .or_else(|| parsed.get("error"))
            .and_then(serde_json::Value::as_str)
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    if body.len() < 100 && !body.contains('{') && !body.contains('<') {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}
