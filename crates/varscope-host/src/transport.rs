// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;

/// Synchronous command channel to the evaluation host. One textual command
/// in, one raw response body out. Injectable so the view layer can be
/// exercised without a live host.
pub trait Transport {
    fn send(&mut self, command: &str) -> Result<String>;
}

/// Production transport: commands are POSTed to the host's `/evaluate`
/// endpoint and block until the host answers or the timeout fires.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("host.base_url must not be empty");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, command: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/evaluate", self.base_url))
            .json(&serde_json::json!({ "command": command }))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        response.text().context("read host response")
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach evaluation host at {} -- is the session running? ({} )",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<HostErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("host error ({}): {}", status.as_u16(), error);
    }

    if body.len() < 100 && !body.contains('{') {
        return anyhow!("host error ({}): {}", status.as_u16(), body);
    }

    anyhow!("host returned {}", status.as_u16())
}

#[derive(Debug, serde::Deserialize)]
struct HostErrorEnvelope {
    error: Option<String>,
}
