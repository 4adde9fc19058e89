pub mod types;

pub use types::BridgeError;
