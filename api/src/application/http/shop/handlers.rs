pub mod get_shop;
