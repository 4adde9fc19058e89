use crate::models::CookieRecord;
use crate::platform::CookieEntry;

/// Lets a JSON-decoded [`CookieRecord`] stand in for the platform's native
/// cookie. The contract is read-only; empty envelope fields surface as absent.
pub struct CookieAdapter {
    cookie: CookieRecord,
}

impl CookieAdapter {
    pub fn new(cookie: CookieRecord) -> Self {
        CookieAdapter { cookie }
    }
}

impl CookieEntry for CookieAdapter {
    fn domain(&self) -> String {
        self.cookie.domain.clone()
    }

    fn expiration(&self) -> Option<String> {
        if self.cookie.expiration.is_empty() {
            None
        } else {
            Some(self.cookie.expiration.clone())
        }
    }

    fn path(&self) -> Option<String> {
        if self.cookie.path.is_empty() {
            None
        } else {
            Some(self.cookie.path.clone())
        }
    }

    fn name(&self) -> String {
        self.cookie.name.clone()
    }

    fn value(&self) -> String {
        self.cookie.value.clone()
    }
}
