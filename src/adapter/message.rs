use std::sync::{Arc, Mutex};

use crate::codec::{self, CodecError};
use crate::models::MessageRecord;
use crate::platform::{MessagePair, ServiceDescriptor};

/// Lets a JSON-decoded [`MessageRecord`] stand in for the platform's native
/// request/response pair. Reads decode the envelope's base64 fields on the
/// way out; writes re-encode on the way in, so the backing envelope always
/// reflects the platform's last mutation. The service descriptor is shared:
/// every holder of the same `Arc` observes `set_service`.
pub struct MessageAdapter {
    message: Mutex<MessageRecord>,
    service: Arc<Mutex<ServiceDescriptor>>,
}

impl MessageAdapter {
    pub fn new(message: MessageRecord, service: Arc<Mutex<ServiceDescriptor>>) -> Self {
        MessageAdapter {
            message: Mutex::new(message),
            service,
        }
    }

    /// Snapshot of the backing envelope.
    pub fn record(&self) -> MessageRecord {
        self.message.lock().unwrap().clone()
    }
}

impl MessagePair for MessageAdapter {
    fn comment(&self) -> String {
        self.message.lock().unwrap().comment.clone()
    }

    fn set_comment(&self, comment: &str) {
        self.message.lock().unwrap().comment = comment.to_string();
    }

    fn highlight(&self) -> String {
        self.message.lock().unwrap().highlight.clone()
    }

    fn set_highlight(&self, color: &str) {
        self.message.lock().unwrap().highlight = color.to_string();
    }

    fn request(&self) -> Result<Vec<u8>, CodecError> {
        codec::decode(&self.message.lock().unwrap().request.raw)
    }

    fn set_request(&self, raw: &[u8]) {
        self.message.lock().unwrap().request.raw = codec::encode(raw);
    }

    fn response(&self) -> Result<Option<Vec<u8>>, CodecError> {
        match &self.message.lock().unwrap().response {
            Some(response) if !response.raw.is_empty() => Ok(Some(codec::decode(&response.raw)?)),
            _ => Ok(None),
        }
    }

    fn set_response(&self, raw: &[u8]) {
        // A response that never existed is not materialized here; the
        // exchange keeps its optional-response semantics.
        if let Some(response) = self.message.lock().unwrap().response.as_mut() {
            response.raw = codec::encode(raw);
        }
    }

    fn service(&self) -> ServiceDescriptor {
        self.service.lock().unwrap().clone()
    }

    fn set_service(&self, descriptor: &ServiceDescriptor) {
        *self.service.lock().unwrap() = descriptor.clone();
    }
}
