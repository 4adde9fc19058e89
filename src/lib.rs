pub mod adapter;
pub mod api;
pub mod codec;
pub mod errors;
pub mod models;
pub mod platform;
pub mod registry;
pub mod server;
