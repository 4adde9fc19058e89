pub mod cookie;
pub mod issue;
pub mod message;

pub use cookie::CookieAdapter;
pub use issue::IssueAdapter;
pub use message::MessageAdapter;
