use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UrlMessage {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlertMessage {
    pub message: String,
}

/// Scan submission and tool-redirection body. `response` is only required
/// for the passive scanner.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanMessage {
    pub host: String,
    pub port: u16,
    pub use_https: bool,
    /// Base64 of the raw request bytes.
    pub request: String,
    /// Base64 of the raw response bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Flat site-map entry as it travels on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct SiteMapMessage {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    /// Base64 of the raw request bytes.
    pub request: String,
    /// Base64 of the raw response bytes, when the exchange has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub highlight: String,
}
