//! Two-hop hostname resolution: IP -> interface -> owning device.

use async_trait::async_trait;
use ipresolve_common::config::Credentials;
use ipresolve_common::lookup::HostnameLookup;
use ipresolve_common::text;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::session::Session;

pub const INTERFACE_BY_IP_PATH: &str = "/dna/intent/api/v1/interface/ip-address/";
pub const DEVICE_BY_ID_PATH: &str = "/dna/intent/api/v1/network-device/";

#[derive(Deserialize)]
struct Envelope<T> {
    response: T,
}

/// The controller answers a miss with a single error object instead of a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum InterfaceMatches {
    Found(Vec<InterfaceRecord>),
    NotFound(Map<String, Value>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InterfaceRecord {
    device_id: Option<String>,
}

#[derive(Deserialize)]
struct DeviceRecord {
    hostname: Option<String>,
}

/// Resolves addresses against the controller behind a [`Session`].
#[derive(Debug)]
pub struct Resolver {
    session: Session,
}

impl Resolver {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<()> {
        self.session
            .authenticate(&credentials.username, &credentials.password)
            .await
    }

    /// Hostname of the device owning `ip_address`, keeping any error.
    ///
    /// When several interfaces carry the address the first one listed wins.
    pub async fn lookup_hostname(&self, ip_address: &str) -> Result<Option<String>> {
        let path: String = format!("{INTERFACE_BY_IP_PATH}{ip_address}");
        let matches: InterfaceMatches = self.get_response(&path).await?;

        let records: Vec<InterfaceRecord> = match matches {
            InterfaceMatches::Found(records) => records,
            InterfaceMatches::NotFound(_) => return Ok(None),
        };
        let Some(first) = records.into_iter().next() else {
            return Ok(None);
        };
        let device_id: String = first
            .device_id
            .ok_or_else(|| Error::malformed(&path, "interface without `deviceId`"))?;

        let path: String = format!("{DEVICE_BY_ID_PATH}{device_id}");
        let device: DeviceRecord = self.get_response(&path).await?;

        Ok(device.hostname.filter(|hostname| !hostname.is_empty()))
    }

    /// Like [`Resolver::lookup_hostname`], with every failure counted as a miss.
    pub async fn resolve(&self, ip_address: &str) -> Option<String> {
        match self.lookup_hostname(ip_address).await {
            Ok(hostname) => hostname,
            Err(e) => {
                warn!("Could not resolve {ip_address}: {e}");
                None
            }
        }
    }

    pub fn is_valid_ipv4(text: &str) -> bool {
        text::is_valid_ipv4(text)
    }

    pub async fn process_line(&self, line: &str) -> String {
        text::process_line(self, line).await
    }

    pub async fn process_text(&self, text: &str) -> String {
        text::process_text(self, text).await
    }

    async fn get_response<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let json: Value = self.session.get(path).await?;
        let envelope: Envelope<T> =
            serde_json::from_value(json).map_err(|e| Error::malformed(path, e))?;
        Ok(envelope.response)
    }
}

#[async_trait]
impl HostnameLookup for Resolver {
    async fn resolve(&self, ip_address: &str) -> Option<String> {
        Resolver::resolve(self, ip_address).await
    }
}
