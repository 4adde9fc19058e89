use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wire envelope for one captured HTTP exchange. Mirrors the subset of the
/// platform's native request/response object the gateway exposes; raw bytes
/// travel base64-encoded in the `raw` fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    pub request: RequestRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseRecord>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub highlight: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Base64 of the raw request bytes.
    pub raw: String,
    #[serde(default)]
    pub body_offset: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Base64 of the raw response bytes.
    pub raw: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body_offset: usize,
}

impl MessageRecord {
    /// Build an envelope from raw base64 payloads alone. Derived fields
    /// (method, url, headers, status) stay at their empty/zero defaults;
    /// callers must not rely on them in this path.
    pub fn from_raw(request: &str, response: Option<&str>) -> Self {
        MessageRecord {
            request: RequestRecord {
                raw: request.to_string(),
                ..Default::default()
            },
            response: response.map(|raw| ResponseRecord {
                raw: raw.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
