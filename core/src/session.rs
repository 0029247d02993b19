//! # Controller Session
//!
//! Owns the HTTP client and the auth token for one controller.
//!
//! A session starts unauthenticated. [`Session::authenticate`] trades Basic
//! credentials for a token, and every [`Session::get`] afterwards carries it
//! in the `x-auth-token` header. Requests are issued one at a time.

use std::time::Duration;

use ipresolve_common::config::Config;
use reqwest::header::{CONTENT_TYPE, HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub const AUTH_TOKEN_PATH: &str = "/api/system/v1/auth/token";
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Wait applied when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(60);

pub struct Session {
    client: Client,
    base_url: String,
    token: Option<String>,
    max_rate_limit_retries: Option<u32>,
}

impl Session {
    /// Session against `https://{cfg.host}`.
    pub fn new(cfg: &Config) -> Result<Self> {
        Self::with_base_url(format!("https://{}", cfg.host), cfg)
    }

    /// Session against an explicit `scheme://authority` base, `cfg.host` is ignored.
    pub fn with_base_url(base_url: impl Into<String>, cfg: &Config) -> Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(!cfg.verify_tls);
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client: Client = builder.build().map_err(Error::Client)?;

        if !cfg.verify_tls {
            debug!("TLS certificate verification disabled");
        }

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            max_rate_limit_retries: cfg.max_rate_limit_retries,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Requests a token with HTTP Basic credentials and keeps it on success.
    ///
    /// On any failure the previously held token (if any) is left as it was.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let url: String = self.url(AUTH_TOKEN_PATH);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .basic_auth(username, Some(password))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(Error::Transport)?;

        debug!("{} {url}", response.status());
        let body: String = response.text().await.map_err(Error::Transport)?;
        let json: Value = parse_json(&url, &body)?;

        if json.get("error").is_some() {
            return Err(Error::AuthenticationRejected { body });
        }

        let token: &str = json
            .get("Token")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed(&url, "missing `Token` field"))?;

        self.token = Some(token.to_string());
        info!("Authenticated against {}", self.base_url);
        Ok(())
    }

    /// Authenticated GET of `path`, returning the body as JSON.
    ///
    /// A 429 answer is retried after the advertised `Retry-After` delay
    /// (60s when absent) with no backoff growth. Without a configured cap
    /// this keeps going for as long as the controller rate limits.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let token: &str = self.token.as_deref().ok_or(Error::NotAuthenticated)?;
        let url: String = self.url(path);
        let mut retries: u32 = 0;

        loop {
            debug!("GET {url}");
            let response = self
                .client
                .get(&url)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .header(AUTH_TOKEN_HEADER, token)
                .send()
                .await
                .map_err(Error::Transport)?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                if let Some(max) = self.max_rate_limit_retries
                    && retries >= max
                {
                    return Err(Error::RateLimited {
                        url,
                        attempts: retries + 1,
                    });
                }

                let wait: Duration = retry_after(response.headers());
                warn!("Rate limit hit. Waiting {} seconds.", wait.as_secs());
                tokio::time::sleep(wait).await;
                retries += 1;
                continue;
            }

            debug!("{} {url}", response.status());
            let body: String = response.text().await.map_err(Error::Transport)?;
            return parse_json(&url, &body);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Delay advertised by a rate-limited response, in whole seconds.
pub fn retry_after(headers: &HeaderMap) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_RETRY_AFTER)
}

fn parse_json(url: &str, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| {
        debug!("Non-JSON body from {url}:\n{body}");
        Error::malformed(url, format!("body is not JSON ({e})"))
    })
}
