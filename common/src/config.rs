use std::time::Duration;

/// Runtime settings for talking to the controller.
#[derive(Clone, Debug)]
pub struct Config {
    /// Controller address without scheme (e.g. `sandboxdnac.cisco.com`).
    pub host: String,
    /// Verify the controller's TLS certificate.
    ///
    /// Off by default, most controllers ship with a self-signed certificate.
    pub verify_tls: bool,
    /// Upper bound on consecutive rate-limited retries of a single request.
    ///
    /// `None` keeps retrying for as long as the controller answers 429.
    pub max_rate_limit_retries: Option<u32>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub quiet: u8,
}

impl Config {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            verify_tls: false,
            max_rate_limit_retries: None,
            timeout: None,
            quiet: 0,
        }
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
