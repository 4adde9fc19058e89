use crate::models::IssueRecord;
use crate::platform::ReportedIssue;

/// Lets a JSON-decoded [`IssueRecord`] stand in for the platform's native
/// stored issue when callers submit issues over HTTP.
pub struct IssueAdapter {
    issue: IssueRecord,
}

impl IssueAdapter {
    pub fn new(issue: IssueRecord) -> Self {
        IssueAdapter { issue }
    }
}

impl ReportedIssue for IssueAdapter {
    fn url(&self) -> String {
        self.issue.url.clone()
    }

    fn host(&self) -> String {
        self.issue.host.clone()
    }

    fn port(&self) -> u16 {
        self.issue.port
    }

    fn protocol(&self) -> String {
        self.issue.protocol.clone()
    }

    fn name(&self) -> String {
        self.issue.name.clone()
    }

    fn issue_type(&self) -> u32 {
        self.issue.issue_type
    }

    fn severity(&self) -> String {
        self.issue.severity.clone()
    }

    fn confidence(&self) -> String {
        self.issue.confidence.clone()
    }

    fn issue_background(&self) -> String {
        self.issue.issue_background.clone()
    }

    fn remediation_background(&self) -> String {
        self.issue.remediation_background.clone()
    }

    fn issue_detail(&self) -> String {
        self.issue.issue_detail.clone()
    }

    fn remediation_detail(&self) -> String {
        self.issue.remediation_detail.clone()
    }
}
