pub mod alert;
pub mod issues;
pub mod jar;
pub mod proxy;
pub mod report;
pub mod scans;
pub mod scope;
pub mod send;
pub mod sitemap;

use axum::Json;
use serde_json::{json, Value};
use url::Url;

use crate::codec;
use crate::errors::BridgeError;
use crate::platform::MessagePair;

pub async fn ping() -> Json<&'static str> {
    Json("PONG")
}

/// Decodes a base64 path segment into a parsed URL. Any failure along the
/// way surfaces as the uniform `{field, message}` validation error.
pub(crate) fn url_from_segment(segment: &str) -> Result<Url, BridgeError> {
    let bytes = codec::decode(segment).map_err(|e| BridgeError::validation("url", e))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| BridgeError::validation("url", "url is not valid utf-8"))?;
    Url::parse(&text).map_err(|e| BridgeError::validation("url", e))
}

/// Serializes a platform-native request/response pair into the flat wire
/// shape shared by the site map and proxy history listings.
pub(crate) fn message_pair_json(pair: &dyn MessagePair) -> Result<Value, BridgeError> {
    let service = pair.service();
    Ok(json!({
        "host": service.host,
        "port": service.port,
        "protocol": service.protocol,
        "request": codec::encode(&pair.request()?),
        "response": pair.response()?.map(|bytes| codec::encode(&bytes)),
        "comment": pair.comment(),
        "highlight": pair.highlight(),
    }))
}
