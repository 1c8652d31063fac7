pub mod frontend;
pub mod health;
pub mod identification;
pub mod server;
