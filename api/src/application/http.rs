pub mod health;
pub mod review;
pub mod server;
pub mod shop;
