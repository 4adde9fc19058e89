use serde::{Deserialize, Serialize};

use crate::platform::CookieEntry;

/// Wire envelope for one cookie-jar entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieRecord {
    pub domain: String,
    #[serde(default)]
    pub expiration: String,
    #[serde(default)]
    pub path: String,
    pub name: String,
    pub value: String,
}

impl CookieRecord {
    pub fn from_view(view: &dyn CookieEntry) -> Self {
        CookieRecord {
            domain: view.domain(),
            expiration: view.expiration().unwrap_or_default(),
            path: view.path().unwrap_or_default(),
            name: view.name(),
            value: view.value(),
        }
    }
}
