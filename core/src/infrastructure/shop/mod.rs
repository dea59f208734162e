pub mod registry;

pub use registry::ShopRegistry;
