pub mod cookie;
pub mod issue;
pub mod message;

pub use cookie::CookieRecord;
pub use issue::IssueRecord;
pub use message::{MessageRecord, RequestRecord, ResponseRecord};
