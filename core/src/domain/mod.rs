pub mod common;
pub mod review;
pub mod shop;
