use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::codec::CodecError;

/// Network endpoint a message or scan is associated with. Shared between the
/// gateway and the platform; adapters mutate it in place through a shared lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub host: String,
    pub port: u16,
    pub protocol: String,
}

impl ServiceDescriptor {
    pub fn new(host: &str, port: u16, protocol: &str) -> Self {
        ServiceDescriptor {
            host: host.to_string(),
            port,
            protocol: protocol.to_string(),
        }
    }

    pub fn from_flags(host: &str, port: u16, use_https: bool) -> Self {
        let protocol = if use_https { "https" } else { "http" };
        Self::new(host, port, protocol)
    }
}

/// The platform's request/response-pair contract. Setters take `&self`
/// because the platform may hold the object and mutate it from its own
/// threads; implementations use interior mutability.
pub trait MessagePair: Send + Sync {
    fn comment(&self) -> String;
    fn set_comment(&self, comment: &str);
    fn highlight(&self) -> String;
    fn set_highlight(&self, color: &str);
    fn request(&self) -> Result<Vec<u8>, CodecError>;
    fn set_request(&self, raw: &[u8]);
    /// `None` when the exchange has no response yet.
    fn response(&self) -> Result<Option<Vec<u8>>, CodecError>;
    /// No-op when the exchange has no response slot.
    fn set_response(&self, raw: &[u8]);
    fn service(&self) -> ServiceDescriptor;
    fn set_service(&self, descriptor: &ServiceDescriptor);
}

/// The platform's cookie contract.
pub trait CookieEntry: Send + Sync {
    fn domain(&self) -> String;
    fn expiration(&self) -> Option<String>;
    fn path(&self) -> Option<String>;
    fn name(&self) -> String;
    fn value(&self) -> String;
}

/// The platform's stored-issue contract.
pub trait ReportedIssue: Send + Sync {
    fn url(&self) -> String;
    fn host(&self) -> String;
    fn port(&self) -> u16;
    fn protocol(&self) -> String;
    fn name(&self) -> String;
    fn issue_type(&self) -> u32;
    fn severity(&self) -> String;
    fn confidence(&self) -> String;
    fn issue_background(&self) -> String;
    fn remediation_background(&self) -> String;
    fn issue_detail(&self) -> String;
    fn remediation_detail(&self) -> String;
}

/// Live handle to a scan the platform is running on its own background
/// activity. Observed, never owned, by the gateway.
pub trait ScanHandle: Send + Sync {
    fn issues(&self) -> Vec<Arc<dyn ReportedIssue>>;
    fn error_count(&self) -> u32;
    fn insertion_point_count(&self) -> u32;
    fn request_count(&self) -> u32;
    fn percent_complete(&self) -> u8;
    fn status(&self) -> String;
    /// Requests the platform stop the scan. Returns without waiting.
    fn cancel(&self);
}

/// The host platform's extensibility surface as consumed by the gateway.
/// Every operation is delegated; the gateway only marshals to and from it.
pub trait Platform: Send + Sync + 'static {
    fn is_in_scope(&self, url: &Url) -> bool;
    fn include_in_scope(&self, url: &Url);
    fn exclude_from_scope(&self, url: &Url);

    /// Issues stored by the platform, optionally restricted to a URL prefix.
    fn scan_issues(&self, url_prefix: Option<&Url>) -> Vec<Arc<dyn ReportedIssue>>;
    fn add_scan_issue(&self, issue: Box<dyn ReportedIssue>);
    fn generate_scan_report(
        &self,
        format: &str,
        issues: &[Arc<dyn ReportedIssue>],
        path: &Path,
    ) -> io::Result<()>;

    /// Starts an active scan and returns immediately with a live handle.
    fn start_active_scan(&self, target: &ServiceDescriptor, request: &[u8]) -> Arc<dyn ScanHandle>;
    fn passive_scan(&self, target: &ServiceDescriptor, request: &[u8], response: &[u8]);

    fn send_to_intruder(&self, target: &ServiceDescriptor, request: &[u8]);
    fn send_to_repeater(&self, target: &ServiceDescriptor, request: &[u8], tab: &str);
    fn send_to_spider(&self, url: &Url);

    fn site_map(&self, url_prefix: Option<&Url>) -> Vec<Arc<dyn MessagePair>>;
    fn add_to_site_map(&self, entry: Box<dyn MessagePair>);
    fn proxy_history(&self) -> Vec<Arc<dyn MessagePair>>;
    fn set_proxy_interception(&self, enabled: bool);

    fn cookie_jar(&self) -> Vec<Arc<dyn CookieEntry>>;
    fn update_cookie_jar(&self, cookie: Box<dyn CookieEntry>);

    fn issue_alert(&self, message: &str);
}
