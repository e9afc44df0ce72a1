pub mod cart;
pub mod client;
pub mod kv_store;
pub mod logger;
pub mod types;

pub use cart::{CartStore, CART_KEY};
pub use client::ApiClient;
pub use kv_store::{FileStore, KVStore, KeyValueStore, StoreError};
pub use types::{LineItem, Product};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
