use serde::{Deserialize, Serialize};

use crate::platform::ReportedIssue;

/// Wire envelope for a stored issue, both as submitted by callers and as
/// serialized back from platform-native issues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueRecord {
    pub url: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub protocol: String,
    pub name: String,
    #[serde(default)]
    pub issue_type: u32,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub issue_background: String,
    #[serde(default)]
    pub remediation_background: String,
    #[serde(default)]
    pub issue_detail: String,
    #[serde(default)]
    pub remediation_detail: String,
}

impl IssueRecord {
    pub fn from_view(view: &dyn ReportedIssue) -> Self {
        IssueRecord {
            url: view.url(),
            host: view.host(),
            port: view.port(),
            protocol: view.protocol(),
            name: view.name(),
            issue_type: view.issue_type(),
            severity: view.severity(),
            confidence: view.confidence(),
            issue_background: view.issue_background(),
            remediation_background: view.remediation_background(),
            issue_detail: view.issue_detail(),
            remediation_detail: view.remediation_detail(),
        }
    }
}
